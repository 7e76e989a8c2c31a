//! API Keys GUI Library
//!
//! A native desktop client for the account API keys page: list the keys of
//! an account, create, rename and remove them through modal dialogs.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
