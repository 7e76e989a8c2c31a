//! Service Layer
//!
//! The service layer talks to the account API off the UI thread and reports
//! results back as events.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 ServiceHub                   │
//! │  command loop (Tokio) ──▶ ApiClient (reqwest) │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼ AppEvent
//! ┌──────────────────────────────────────────────┐
//! │        State Layer (ApiKeysState, logs)      │
//! └──────────────────────────────────────────────┘
//! ```

pub mod api_client;
pub mod service_hub;

pub use api_client::ApiClient;
pub use service_hub::{ServiceCommand, ServiceHub};
