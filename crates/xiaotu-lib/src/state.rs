//! Shared server state: the TTS client plus the two persisted stores.
//!
//! The stores are synchronous and cheap, so a plain `std::sync::Mutex` is
//! enough. Concurrent writers are last-writer-wins over one in-place table.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::info;

use xiaotu_core::overrides::CustomZhuyinStore;
use xiaotu_core::settings::SettingsStore;
use xiaotu_core::types::ProxyConfig;

use crate::file_store::JsonFileStorage;
use crate::tts::{TtsClient, TtsError};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub tts: TtsClient,
    overrides: Mutex<CustomZhuyinStore>,
    settings: Mutex<SettingsStore>,
}

impl AppState {
    pub fn new(tts: TtsClient, overrides: CustomZhuyinStore, settings: SettingsStore) -> Self {
        Self {
            tts,
            overrides: Mutex::new(overrides),
            settings: Mutex::new(settings),
        }
    }

    /// State persisted under `data_dir`.
    pub fn open(config: ProxyConfig, data_dir: &Path) -> Result<Self, TtsError> {
        let tts = TtsClient::new(config)?;
        let overrides = CustomZhuyinStore::load(JsonFileStorage::new(data_dir));
        let settings = SettingsStore::load(JsonFileStorage::new(data_dir));
        info!(
            "state opened at {} ({} custom zhuyin entries)",
            data_dir.display(),
            overrides.len()
        );
        Ok(Self::new(tts, overrides, settings))
    }

    /// State that forgets everything on drop.
    pub fn in_memory(config: ProxyConfig) -> Result<Self, TtsError> {
        Ok(Self::new(
            TtsClient::new(config)?,
            CustomZhuyinStore::in_memory(),
            SettingsStore::in_memory(),
        ))
    }

    /// A panic while holding a store lock leaves the store usable; its data
    /// is never half-updated across an await.
    pub fn overrides(&self) -> MutexGuard<'_, CustomZhuyinStore> {
        self.overrides.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn settings(&self) -> MutexGuard<'_, SettingsStore> {
        self.settings.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
