//! ElevenLabs client. Forwards synthesis and voice-list calls upstream.
//!
//! ```text
//! reader → POST /api/elevenlabs/text-to-speech/{voice}
//!        → TtsClient::synthesize → POST {api_base}/text-to-speech/{voice}
//!        ← audio/mpeg bytes (streamed, capped)
//! ```
//!
//! One attempt per call: no retry, 30 s budget by default. Failures keep the
//! upstream status so the reader can tell a bad key from a rate limit.

use std::time::{Duration, Instant};

use futures_util::StreamExt;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use xiaotu_core::types::{ProxyConfig, SpeechRequest, VoiceSettings};

/// Audio smaller than this is almost certainly not a real clip.
const SUSPICIOUS_AUDIO_BYTES: usize = 100;

#[derive(Debug, Error)]
pub enum TtsError {
    #[error("ELEVENLABS_API_KEY is not configured")]
    MissingApiKey,

    #[error("{0}")]
    InvalidRequest(String),

    #[error("request timeout - please try again")]
    Timeout,

    #[error("{}", upstream_message(*status))]
    Upstream { status: u16, body: String },

    #[error("empty audio data received from ElevenLabs API")]
    EmptyAudio,

    #[error("audio exceeds {limit} bytes")]
    AudioTooLarge { limit: usize },

    #[error("failed to reach ElevenLabs: {0}")]
    Network(String),
}

impl TtsError {
    /// HTTP status the proxy answers with.
    pub fn status_code(&self) -> u16 {
        match self {
            TtsError::MissingApiKey => 500,
            TtsError::InvalidRequest(_) => 400,
            TtsError::Timeout => 408,
            TtsError::Upstream { status, .. } => *status,
            TtsError::EmptyAudio => 500,
            TtsError::AudioTooLarge { .. } => 502,
            TtsError::Network(_) => 500,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            TtsError::MissingApiKey => "MISSING_API_KEY",
            TtsError::InvalidRequest(_) => "INVALID_REQUEST",
            TtsError::Timeout => "TIMEOUT",
            TtsError::Upstream { .. } => "ELEVENLABS_API_ERROR",
            TtsError::EmptyAudio => "EMPTY_AUDIO",
            TtsError::AudioTooLarge { .. } => "AUDIO_TOO_LARGE",
            TtsError::Network(_) => "NETWORK_ERROR",
        }
    }

    fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TtsError::Timeout
        } else {
            TtsError::Network(e.to_string())
        }
    }
}

fn upstream_message(status: u16) -> String {
    match status {
        401 => "Invalid API key - please check your ElevenLabs API key configuration".into(),
        403 => "Access forbidden - please check your ElevenLabs API key permissions".into(),
        422 => "Invalid request parameters - please check your text and voice settings".into(),
        429 => "Rate limit exceeded - please try again later".into(),
        500 | 502 | 503 | 504 => {
            "ElevenLabs service temporarily unavailable - please try again later".into()
        }
        other => format!("ElevenLabs API error: {other}"),
    }
}

/// Cloneable handle to the upstream voice API.
#[derive(Clone)]
pub struct TtsClient {
    http: reqwest::Client,
    config: ProxyConfig,
}

impl TtsClient {
    pub fn new(config: ProxyConfig) -> Result<Self, TtsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| TtsError::Network(format!("failed to build http client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn api_key_configured(&self) -> bool {
        self.config.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    fn api_key(&self) -> Result<&str, TtsError> {
        match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(TtsError::MissingApiKey),
        }
    }

    /// Synthesize `req.text` with `voice_id`. Returns MP3 bytes.
    pub async fn synthesize(&self, voice_id: &str, req: SpeechRequest) -> Result<Vec<u8>, TtsError> {
        if voice_id.trim().is_empty() || req.text.trim().is_empty() {
            return Err(TtsError::InvalidRequest(
                "Voice ID and text are required".into(),
            ));
        }
        let api_key = self.api_key()?;

        let body = SpeechRequest {
            text: req.text,
            model_id: Some(req.model_id.unwrap_or_else(|| self.config.model_id.clone())),
            voice_settings: Some(req.voice_settings.unwrap_or_default()),
        };
        let url = format!("{}/text-to-speech/{voice_id}", self.config.api_base);
        debug!(
            "tts: POST {url} ({} chars, model {:?})",
            body.text.chars().count(),
            body.model_id
        );

        let t0 = Instant::now();
        let resp = self
            .http
            .post(&url)
            .header("Accept", "audio/mpeg")
            .header("xi-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(TtsError::from_reqwest)?;

        let resp = check_status(resp).await?;
        let audio = read_capped(resp, self.config.max_audio_bytes).await?;

        if audio.is_empty() {
            error!("tts: empty audio from upstream");
            return Err(TtsError::EmptyAudio);
        }
        if audio.len() < SUSPICIOUS_AUDIO_BYTES {
            warn!("tts: suspiciously small audio ({} bytes)", audio.len());
        }
        info!("tts: {} bytes in {:?}", audio.len(), t0.elapsed());
        Ok(audio)
    }

    /// Fetch the provider's voice list as raw JSON.
    pub async fn list_voices(&self) -> Result<serde_json::Value, TtsError> {
        let api_key = self.api_key()?;
        let url = format!("{}/voices", self.config.api_base);
        debug!("tts: GET {url}");

        let resp = self
            .http
            .get(&url)
            .timeout(Duration::from_secs(self.config.voices_timeout_secs))
            .header("Accept", "application/json")
            .header("xi-api-key", api_key)
            .send()
            .await
            .map_err(TtsError::from_reqwest)?;

        let resp = check_status(resp).await?;
        let voices: serde_json::Value = resp.json().await.map_err(TtsError::from_reqwest)?;
        info!(
            "tts: fetched {} voices",
            voices["voices"].as_array().map_or(0, Vec::len)
        );
        Ok(voices)
    }
}

/// Turn a non-success response into [`TtsError::Upstream`], keeping the body
/// for diagnostics.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, TtsError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    error!("tts: upstream returned {status}: {body}");
    Err(TtsError::Upstream {
        status: status.as_u16(),
        body,
    })
}

/// Read the body, refusing anything beyond `limit` bytes.
async fn read_capped(resp: reqwest::Response, limit: usize) -> Result<Vec<u8>, TtsError> {
    if resp.content_length().is_some_and(|len| len as usize > limit) {
        return Err(TtsError::AudioTooLarge { limit });
    }
    let mut audio = Vec::new();
    let mut stream = resp.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(TtsError::from_reqwest)?;
        if audio.len() + chunk.len() > limit {
            return Err(TtsError::AudioTooLarge { limit });
        }
        audio.extend_from_slice(&chunk);
    }
    Ok(audio)
}

/// Voice settings with the reader's pitch and speed folded in.
pub fn voice_settings_with(pitch: f32, speed: f32) -> VoiceSettings {
    VoiceSettings {
        pitch: Some(pitch),
        speed: Some(speed),
        ..Default::default()
    }
}

/// Whether an upstream status means "try again later" rather than "fix the request".
pub fn is_transient(status: u16) -> bool {
    StatusCode::from_u16(status)
        .map(|s| s == StatusCode::TOO_MANY_REQUESTS || s.is_server_error())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, State};
    use axum::http::{HeaderMap, StatusCode as AxumStatus};
    use axum::response::IntoResponse;
    use axum::routing::{get, post};
    use axum::{Json, Router};

    type Seen = Arc<Mutex<Vec<(String, Option<String>, serde_json::Value)>>>;

    /// Spawn a stand-in upstream on an ephemeral port.
    async fn mock_upstream(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client(api_base: String, api_key: Option<&str>) -> TtsClient {
        TtsClient::new(ProxyConfig {
            api_base,
            api_key: api_key.map(str::to_string),
            request_timeout_secs: 2,
            ..Default::default()
        })
        .unwrap()
    }

    fn echo_router(seen: Seen) -> Router {
        Router::new()
            .route(
                "/text-to-speech/{voice}",
                post(
                    |State(seen): State<Seen>,
                     Path(voice): Path<String>,
                     headers: HeaderMap,
                     Json(body): Json<serde_json::Value>| async move {
                        let key = headers
                            .get("xi-api-key")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        seen.lock().unwrap().push((voice, key, body));
                        ([("content-type", "audio/mpeg")], vec![0xffu8; 512])
                    },
                ),
            )
            .with_state(seen)
    }

    #[tokio::test]
    async fn synthesize_forwards_defaults() {
        let seen: Seen = Arc::default();
        let base = mock_upstream(echo_router(seen.clone())).await;
        let audio = client(base, Some("k-123"))
            .synthesize("voice-1", SpeechRequest::new("小兔子"))
            .await
            .unwrap();
        assert_eq!(audio.len(), 512);

        let seen = seen.lock().unwrap();
        let (voice, key, body) = &seen[0];
        assert_eq!(voice, "voice-1");
        assert_eq!(key.as_deref(), Some("k-123"));
        assert_eq!(body["text"], "小兔子");
        assert_eq!(body["model_id"], "eleven_multilingual_v2");
        assert_eq!(body["voice_settings"]["similarity_boost"], 0.75);
    }

    #[tokio::test]
    async fn synthesize_keeps_caller_settings() {
        let seen: Seen = Arc::default();
        let base = mock_upstream(echo_router(seen.clone())).await;
        let req = SpeechRequest {
            text: "你好".into(),
            model_id: Some("eleven_turbo".into()),
            voice_settings: Some(voice_settings_with(1.2, 0.9)),
        };
        client(base, Some("k")).synthesize("v", req).await.unwrap();
        let body = &seen.lock().unwrap()[0].2;
        assert_eq!(body["model_id"], "eleven_turbo");
        assert!((body["voice_settings"]["pitch"].as_f64().unwrap() - 1.2).abs() < 1e-6);
    }

    #[tokio::test]
    async fn missing_key_fails_before_network() {
        let err = client("http://127.0.0.1:9".into(), None)
            .synthesize("v", SpeechRequest::new("你好"))
            .await
            .unwrap_err();
        assert!(matches!(err, TtsError::MissingApiKey));
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn blank_text_is_invalid() {
        let err = client("http://127.0.0.1:9".into(), Some("k"))
            .synthesize("v", SpeechRequest::new("  "))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.code(), "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn upstream_status_is_preserved() {
        let router = Router::new().route(
            "/text-to-speech/{voice}",
            post(|| async { (AxumStatus::TOO_MANY_REQUESTS, "slow down").into_response() }),
        );
        let base = mock_upstream(router).await;
        let err = client(base, Some("k"))
            .synthesize("v", SpeechRequest::new("你好"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 429);
        assert_eq!(err.code(), "ELEVENLABS_API_ERROR");
        assert_eq!(err.to_string(), "Rate limit exceeded - please try again later");
        match err {
            TtsError::Upstream { body, .. } => assert_eq!(body, "slow down"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_audio_is_an_error() {
        let router = Router::new().route(
            "/text-to-speech/{voice}",
            post(|| async { ([("content-type", "audio/mpeg")], Vec::<u8>::new()) }),
        );
        let base = mock_upstream(router).await;
        let err = client(base, Some("k"))
            .synthesize("v", SpeechRequest::new("你好"))
            .await
            .unwrap_err();
        assert!(matches!(err, TtsError::EmptyAudio));
    }

    #[tokio::test]
    async fn oversized_audio_is_refused() {
        let base = mock_upstream(echo_router(Arc::default())).await;
        let client = TtsClient::new(ProxyConfig {
            api_base: base,
            api_key: Some("k".into()),
            max_audio_bytes: 100,
            ..Default::default()
        })
        .unwrap();
        let err = client
            .synthesize("v", SpeechRequest::new("你好"))
            .await
            .unwrap_err();
        assert!(matches!(err, TtsError::AudioTooLarge { limit: 100 }));
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let router = Router::new().route(
            "/text-to-speech/{voice}",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        );
        let base = mock_upstream(router).await;
        let client = TtsClient::new(ProxyConfig {
            api_base: base,
            api_key: Some("k".into()),
            request_timeout_secs: 1,
            ..Default::default()
        })
        .unwrap();
        let err = client
            .synthesize("v", SpeechRequest::new("你好"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 408);
        assert_eq!(err.code(), "TIMEOUT");
    }

    #[tokio::test]
    async fn list_voices_passes_json_through() {
        let router = Router::new().route(
            "/voices",
            get(|| async { Json(serde_json::json!({ "voices": [{ "voice_id": "a", "name": "A" }] })) }),
        );
        let base = mock_upstream(router).await;
        let voices = client(base, Some("k")).list_voices().await.unwrap();
        assert_eq!(voices["voices"][0]["voice_id"], "a");
    }

    #[test]
    fn status_messages() {
        assert!(upstream_message(401).starts_with("Invalid API key"));
        assert!(upstream_message(503).contains("temporarily unavailable"));
        assert_eq!(upstream_message(418), "ElevenLabs API error: 418");
    }

    #[test]
    fn transient_statuses() {
        assert!(is_transient(429));
        assert!(is_transient(503));
        assert!(!is_transient(401));
        assert!(!is_transient(422));
    }
}
