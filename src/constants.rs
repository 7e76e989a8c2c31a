//! UI and Service Constants
//!
//! Centralized constants for layout, capacity policy and networking.

/// Application name, used for config/data directories and log files
pub const APP_NAME: &str = "api-keys-gui";

/// Config file name inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Maximum number of API keys an account may hold
pub const API_KEYS_LIMIT: usize = 3;

/// Maximum length of an API key name
pub const API_KEY_NAME_MAX_LEN: usize = 255;

/// Path segments of the API keys resource
pub const API_KEYS_PATH: [&str; 3] = ["api", "account", "api-keys"];

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Default HTTP request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Log panel ring buffer capacity
pub const GLOBAL_LOG_CAPACITY: usize = 2000;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

/// Log panel heights
pub const LOG_PANEL_HEIGHT: f32 = 150.0;
pub const LOG_PANEL_COLLAPSED_HEIGHT: f32 = 32.0;
