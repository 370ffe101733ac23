//! xiaotu CLI — story server and phonetic tools.
//!
//! ```text
//! xiaotu serve [--port 3001] [--host 127.0.0.1] [--data-dir .xiaotu]
//! xiaotu story rabbit forest friendship friend [--name 小明]
//! xiaotu format "小兔子在森林裡。" [--pinyin] [--zhuyin] [--english] [--vertical]
//! xiaotu coverage / autogen "..." [--data-dir .xiaotu]
//! xiaotu settings [--font-size large] [--pinyin true] ...
//! xiaotu speak "你好" [--voice stacy] [--out speech.mp3] [--server http://localhost:3001]
//! xiaotu voices [--server ...]
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use xiaotu_lib::file_store::JsonFileStorage;
use xiaotu_lib::state::AppState;
use xiaotu_lib::tts::voice_settings_with;
use xiaotu_lib::xiaotu_core::autogen::auto_generate;
use xiaotu_lib::xiaotu_core::coverage::check_coverage;
use xiaotu_lib::xiaotu_core::format::format_text;
use xiaotu_lib::xiaotu_core::overrides::CustomZhuyinStore;
use xiaotu_lib::xiaotu_core::settings::{FontSize, SettingsStore, TextSettingsUpdate};
use xiaotu_lib::xiaotu_core::story::{self, StoryElements};
use xiaotu_lib::xiaotu_core::types::{Formatted, ProxyConfig, SpeechRequest};

/// xiaotu — children's story server with Pinyin/Zhuyin annotation
#[derive(Parser)]
#[command(name = "xiaotu", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server
    Serve {
        /// Listen port
        #[arg(long, default_value = "3001")]
        port: u16,
        /// Listen host
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Directory holding custom Zhuyin and text settings
        #[arg(long, default_value = ".xiaotu")]
        data_dir: PathBuf,
        /// ElevenLabs API base URL
        #[arg(long, default_value = "https://api.elevenlabs.io/v1")]
        api_base: String,
        /// ElevenLabs API key
        #[arg(long, env = "ELEVENLABS_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },
    /// Generate a story and report its Zhuyin coverage
    Story {
        character: String,
        scene: String,
        theme: String,
        plot: String,
        /// Custom name for the main character
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value = ".xiaotu")]
        data_dir: PathBuf,
    },
    /// List story characters, scenes, themes and plots
    Catalog,
    /// Render text with phonetic annotations
    Format {
        text: String,
        /// Annotate with Pinyin (wins over --zhuyin)
        #[arg(long)]
        pinyin: bool,
        /// Annotate with Zhuyin
        #[arg(long)]
        zhuyin: bool,
        /// Insert English glosses
        #[arg(long)]
        english: bool,
        /// Vertical layout
        #[arg(long)]
        vertical: bool,
        #[arg(long, default_value = ".xiaotu")]
        data_dir: PathBuf,
    },
    /// List characters with no Zhuyin reading
    Coverage {
        text: String,
        #[arg(long, default_value = ".xiaotu")]
        data_dir: PathBuf,
    },
    /// Fill missing Zhuyin from the built-in corrections and save them
    Autogen {
        text: String,
        #[arg(long, default_value = ".xiaotu")]
        data_dir: PathBuf,
    },
    /// Show or change the saved text settings
    Settings {
        #[arg(long)]
        font_size: Option<FontSize>,
        #[arg(long)]
        pinyin: Option<bool>,
        #[arg(long)]
        zhuyin: Option<bool>,
        #[arg(long)]
        english: Option<bool>,
        #[arg(long)]
        vertical: Option<bool>,
        #[arg(long, default_value = ".xiaotu")]
        data_dir: PathBuf,
    },
    /// Synthesize speech through a running server and save the MP3
    Speak {
        text: String,
        /// Voice alias or ElevenLabs voice id
        #[arg(long, default_value = "stacy")]
        voice: String,
        #[arg(long, default_value = "1.0")]
        pitch: f32,
        #[arg(long, default_value = "1.0")]
        speed: f32,
        /// Output file
        #[arg(long, default_value = "speech.mp3")]
        out: PathBuf,
        /// Server URL
        #[arg(long, default_value = "http://localhost:3001")]
        server: String,
    },
    /// List voices offered by a running server
    Voices {
        #[arg(long, default_value = "http://localhost:3001")]
        server: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xiaotu=info,xiaotu_lib=debug,xiaotu_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse().command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Serve {
            port,
            host,
            data_dir,
            api_base,
            api_key,
        } => {
            let config = ProxyConfig {
                api_base,
                api_key,
                ..Default::default()
            };
            let state = AppState::open(config, &data_dir).map_err(|e| e.to_string())?;
            if !state.tts.api_key_configured() {
                tracing::warn!("ELEVENLABS_API_KEY not set; speech endpoints will fail");
            }
            let app = xiaotu_lib::server::router(Arc::new(state));

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .map_err(|e| format!("failed to bind {addr}: {e}"))?;
            info!("xiaotu listening on {addr}");

            axum::serve(listener, app)
                .await
                .map_err(|e| format!("server error: {e}"))
        }

        Command::Story {
            character,
            scene,
            theme,
            plot,
            name,
            data_dir,
        } => {
            let elements = StoryElements {
                character,
                scene,
                theme,
                plot,
            };
            let story = story::generate_story(&elements, name.as_deref(), &overrides(&data_dir));
            println!("{}\n\n{}", story.title, story.content);
            if !story.zhuyin_check.has_full_coverage {
                eprintln!("missing zhuyin: {}", join_chars(&story.zhuyin_check.missing_chars));
            }
            Ok(())
        }

        Command::Catalog => print_json(&story::catalog()),

        Command::Format {
            text,
            pinyin,
            zhuyin,
            english,
            vertical,
            data_dir,
        } => {
            let mut settings = SettingsStore::load(JsonFileStorage::new(&data_dir)).current();
            // Flags only ever turn things on for this run; nothing is saved.
            settings.apply(TextSettingsUpdate {
                show_pinyin: pinyin.then_some(true),
                show_zhuyin: (zhuyin && !pinyin).then_some(true),
                show_english: english.then_some(true),
                vertical_layout: vertical.then_some(true),
                ..Default::default()
            });
            match format_text(&text, &settings, &overrides(&data_dir)) {
                Formatted::Text(html) => println!("{html}"),
                Formatted::Columns(columns) => columns.iter().for_each(|c| println!("{c}")),
            }
            Ok(())
        }

        Command::Coverage { text, data_dir } => {
            let report = check_coverage(&text, &overrides(&data_dir));
            if report.has_full_coverage {
                println!("full coverage");
            } else {
                println!("missing: {}", join_chars(&report.missing_chars));
            }
            Ok(())
        }

        Command::Autogen { text, data_dir } => {
            let result = auto_generate(&text, &mut overrides(&data_dir));
            println!(
                "generated {} of {} missing",
                result.generated_count, result.total_missing
            );
            for (c, zhuyin) in &result.mapping {
                println!("{c} {zhuyin}");
            }
            Ok(())
        }

        Command::Settings {
            font_size,
            pinyin,
            zhuyin,
            english,
            vertical,
            data_dir,
        } => {
            let mut store = SettingsStore::load(JsonFileStorage::new(&data_dir));
            let update = TextSettingsUpdate {
                font_size,
                show_pinyin: pinyin,
                show_zhuyin: zhuyin,
                show_english: english,
                vertical_layout: vertical,
            };
            let settings = if update == TextSettingsUpdate::default() {
                store.current()
            } else {
                store.update(update)
            };
            print_json(&settings)
        }

        Command::Speak {
            text,
            voice,
            pitch,
            speed,
            out,
            server,
        } => {
            let mut req = SpeechRequest::new(text);
            req.voice_settings = Some(voice_settings_with(pitch, speed));

            let resp = reqwest::Client::new()
                .post(format!("{server}/api/elevenlabs/text-to-speech/{voice}"))
                .json(&req)
                .send()
                .await
                .map_err(|e| format!("request failed: {e}"))?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(format!("server returned {status}: {body}"));
            }
            let audio = resp
                .bytes()
                .await
                .map_err(|e| format!("failed to read audio: {e}"))?;
            std::fs::write(&out, &audio)
                .map_err(|e| format!("failed to write {}: {e}", out.display()))?;
            println!("wrote {} bytes to {}", audio.len(), out.display());
            Ok(())
        }

        Command::Voices { server } => {
            let resp = reqwest::Client::new()
                .get(format!("{server}/api/voices"))
                .send()
                .await
                .map_err(|e| format!("request failed: {e}"))?;
            let voices: serde_json::Value = resp
                .json()
                .await
                .map_err(|e| format!("invalid response: {e}"))?;
            print_json(&voices)
        }
    }
}

fn overrides(data_dir: &Path) -> CustomZhuyinStore {
    CustomZhuyinStore::load(JsonFileStorage::new(data_dir))
}

fn join_chars(chars: &[char]) -> String {
    chars.iter().map(char::to_string).collect::<Vec<_>>().join(" ")
}

fn print_json(value: &impl serde::Serialize) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
