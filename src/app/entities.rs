//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency: the request cache changes on every
//! response, the log on every message, config and locale rarely.

use gpui::{App, AppContext, Entity, Global};

use crate::constants::GLOBAL_LOG_CAPACITY;
use crate::domain::config::AppConfig;
use crate::state::{
    api_keys_state::ApiKeysState, config_state::ConfigState, i18n_state::I18nState,
    log_state::LogState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Application configuration state
    pub config: Entity<ConfigState>,
    /// API key collection and in-flight writes
    pub api_keys: Entity<ApiKeysState>,
    /// Log messages (ring buffer)
    pub logs: Entity<LogState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded configuration
    pub fn init(config: AppConfig, cx: &mut App) -> Self {
        let locale = config.ui.effective_locale();

        Self {
            config: cx.new(|_| ConfigState::new(config)),
            api_keys: cx.new(|_| ApiKeysState::default()),
            logs: cx.new(|_| LogState::new(GLOBAL_LOG_CAPACITY)),
            i18n: cx.new(|_| I18nState::new(locale)),
        }
    }
}
