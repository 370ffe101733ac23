//! HTTP API for the story reader.
//!
//! Runs on port 3001 by default. CORS-permissive so the reader can call it
//! from any dev origin. Voice endpoints proxy ElevenLabs so the API key never
//! leaves the server; phonetic endpoints expose the core directly.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Path, Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{debug, warn};

use xiaotu_core::autogen::auto_generate;
use xiaotu_core::coverage::check_coverage;
use xiaotu_core::format::format_text;
use xiaotu_core::settings::{TextSettings, TextSettingsUpdate};
use xiaotu_core::story::{self, GeneratedStory, StoryCatalog, StoryElements};
use xiaotu_core::tables::is_cjk;
use xiaotu_core::types::{AutoMapping, CoverageReport, Formatted, SpeechRequest, VoiceInfo};
use xiaotu_core::voices::{fallback_voices, resolve_voice_id};

use crate::state::SharedState;
use crate::tts::{is_transient, TtsError};

/// Build the axum router around shared [`crate::state::AppState`].
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/elevenlabs/voices", get(upstream_voices))
        .route("/api/elevenlabs/text-to-speech/{voice_id}", post(text_to_speech))
        .route("/api/voices", get(voices))
        .route("/api/story/catalog", get(story_catalog))
        .route("/api/story", post(generate_story))
        .route("/api/coverage", post(coverage))
        .route("/api/format", post(format))
        .route("/api/zhuyin/auto-generate", post(auto_generate_zhuyin))
        .route("/api/zhuyin/custom", get(custom_zhuyin).post(add_custom_zhuyin))
        .route("/api/settings", get(get_settings).patch(update_settings))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ─── Errors ────────────────────────────────────────────────────────────────

/// JSON error body: `{ "error", "code", "details"? }`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    code: &'static str,
    details: Option<serde_json::Value>,
}

impl ApiError {
    fn bad_request(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: error.into(),
            code: "INVALID_REQUEST",
            details: None,
        }
    }
}

impl From<TtsError> for ApiError {
    fn from(e: TtsError) -> Self {
        let status =
            StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let details = match &e {
            TtsError::Upstream { body, .. } if !body.is_empty() => Some(
                serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(body.clone())),
            ),
            _ => None,
        };
        Self {
            status,
            error: e.to_string(),
            code: e.code(),
            details,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            error: rejection.body_text(),
            code: "INVALID_REQUEST",
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = serde_json::json!({ "error": self.error, "code": self.code });
        if let Some(details) = self.details {
            body["details"] = details;
        }
        (self.status, Json(body)).into_response()
    }
}

/// `Json` extractor whose rejections use the [`ApiError`] body.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

// ─── Health & voice proxy ──────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    api_key_configured: bool,
}

async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        api_key_configured: state.tts.api_key_configured(),
    })
}

async fn upstream_voices(State(state): State<SharedState>) -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(state.tts.list_voices().await?))
}

async fn text_to_speech(
    State(state): State<SharedState>,
    Path(voice_id): Path<String>,
    ApiJson(req): ApiJson<SpeechRequest>,
) -> Result<Response, ApiError> {
    let voice_id = resolve_voice_id(&voice_id).to_string();
    debug!(
        "text-to-speech: voice={voice_id} text_len={}",
        req.text.chars().count()
    );

    let audio = state.tts.synthesize(&voice_id, req).await.inspect_err(|e| {
        if is_transient(e.status_code()) {
            warn!("text-to-speech: transient upstream failure: {e}");
        }
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "audio/mpeg"),
            (header::CACHE_CONTROL, "no-cache"),
            (header::ACCEPT_RANGES, "bytes"),
        ],
        audio,
    )
        .into_response())
}

#[derive(Deserialize)]
struct UpstreamVoice {
    voice_id: String,
    name: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    preview_url: Option<String>,
}

#[derive(Deserialize)]
struct UpstreamVoiceList {
    #[serde(default)]
    voices: Vec<UpstreamVoice>,
}

/// Normalized voice list. Falls back to the built-in list when the provider
/// cannot be reached, so the voice picker is never empty.
async fn voices(State(state): State<SharedState>) -> Json<Vec<VoiceInfo>> {
    let listed = match state.tts.list_voices().await {
        Ok(raw) => serde_json::from_value::<UpstreamVoiceList>(raw)
            .map_err(|e| warn!("voices: unexpected upstream shape: {e}"))
            .ok(),
        Err(e) => {
            warn!("voices: using fallback list: {e}");
            None
        }
    };

    let voices = match listed {
        Some(list) if !list.voices.is_empty() => list
            .voices
            .into_iter()
            .map(|v| {
                let category = v.category.unwrap_or_else(|| "premade".into());
                VoiceInfo {
                    description: v
                        .description
                        .unwrap_or_else(|| format!("{} - {category} voice", v.name)),
                    id: v.voice_id,
                    name: v.name,
                    category: Some(category),
                    preview_url: v.preview_url,
                }
            })
            .collect(),
        _ => fallback_voices(),
    };
    Json(voices)
}

// ─── Stories ───────────────────────────────────────────────────────────────

async fn story_catalog() -> Json<StoryCatalog> {
    Json(story::catalog())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoryRequest {
    #[serde(flatten)]
    elements: StoryElements,
    #[serde(default)]
    custom_character_name: Option<String>,
}

async fn generate_story(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<StoryRequest>,
) -> Json<GeneratedStory> {
    let overrides = state.overrides();
    let story = story::generate_story(&req.elements, req.custom_character_name.as_deref(), &overrides);
    debug!(
        "story: {} ({} missing zhuyin)",
        story.title,
        story.zhuyin_check.missing_chars.len()
    );
    Json(story)
}

// ─── Phonetics ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TextRequest {
    #[serde(default)]
    text: String,
}

async fn coverage(State(state): State<SharedState>, ApiJson(req): ApiJson<TextRequest>) -> Json<CoverageReport> {
    Json(check_coverage(&req.text, &state.overrides()))
}

#[derive(Deserialize)]
struct FormatRequest {
    #[serde(default)]
    text: String,
    /// Falls back to the saved settings when omitted.
    #[serde(default)]
    settings: Option<TextSettings>,
}

async fn format(State(state): State<SharedState>, ApiJson(req): ApiJson<FormatRequest>) -> Json<Formatted> {
    // Same exclusivity rule as saved settings.
    let settings = match req.settings {
        Some(settings) => settings.normalized(),
        None => state.settings().current(),
    };
    Json(format_text(&req.text, &settings, &state.overrides()))
}

async fn auto_generate_zhuyin(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<TextRequest>,
) -> Json<AutoMapping> {
    Json(auto_generate(&req.text, &mut state.overrides()))
}

async fn custom_zhuyin(State(state): State<SharedState>) -> Json<serde_json::Value> {
    Json(serde_json::json!(state.overrides().entries()))
}

#[derive(Deserialize)]
struct CustomZhuyinRequest {
    character: String,
    zhuyin: String,
}

async fn add_custom_zhuyin(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<CustomZhuyinRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut chars = req.character.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) if is_cjk(c) => c,
        _ => return Err(ApiError::bad_request("character must be a single CJK ideograph")),
    };
    let zhuyin = req.zhuyin.trim();
    if zhuyin.is_empty() {
        return Err(ApiError::bad_request("zhuyin is required"));
    }

    let mut overrides = state.overrides();
    overrides.set(c, zhuyin);
    Ok(Json(serde_json::json!(overrides.entries())))
}

// ─── Settings ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SettingsResponse {
    #[serde(flatten)]
    settings: TextSettings,
    font_size_class: &'static str,
}

impl From<TextSettings> for SettingsResponse {
    fn from(settings: TextSettings) -> Self {
        Self {
            font_size_class: settings.font_size.css_class(),
            settings,
        }
    }
}

async fn get_settings(State(state): State<SharedState>) -> Json<SettingsResponse> {
    Json(state.settings().current().into())
}

async fn update_settings(
    State(state): State<SharedState>,
    ApiJson(update): ApiJson<TextSettingsUpdate>,
) -> Json<SettingsResponse> {
    Json(state.settings().update(update).into())
}
