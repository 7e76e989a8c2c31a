//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders. The form and
//! page state types are plain structs owned by their views.

pub mod api_key_form;
pub mod api_key_page_state;
pub mod api_keys_state;
pub mod config_state;
pub mod disclosure;
pub mod i18n_state;
pub mod log_state;
