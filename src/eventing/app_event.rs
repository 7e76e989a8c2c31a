//! AppEvent - Application Event Enum
//!
//! All events that can be sent from services to the UI layer.

use chrono::{DateTime, Local};

use crate::domain::api_key::{ApiKeyRecord, ApiKeyRequest};
use crate::domain::config::AppConfig;
use crate::state::log_state::LogLevel;

/// Application events for service -> UI communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Log message
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    /// Configuration replaced
    ConfigLoaded {
        config: AppConfig,
    },

    /// A list query has started
    ApiKeysLoading,

    /// The list query returned the current collection
    ApiKeysLoaded {
        keys: Vec<ApiKeyRecord>,
    },

    /// The list query failed
    ApiKeysFetchFailed {
        message: String,
    },

    /// A write request succeeded
    ApiKeyMutated {
        request_id: String,
        request: ApiKeyRequest,
    },

    /// A write request failed
    ApiKeyMutationFailed {
        request_id: String,
        message: String,
    },
}

impl AppEvent {
    /// Create a log event with current timestamp
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Create an info log event
    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }

    /// Create a warning log event
    pub fn warn(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Warn, message)
    }

    /// Create an error log event
    pub fn error(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Error, message)
    }

    /// Create a debug log event
    pub fn debug(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Debug, message)
    }
}
