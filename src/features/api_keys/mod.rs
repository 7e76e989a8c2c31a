//! API Keys Feature
//!
//! The account page listing API keys plus its create/edit and delete dialogs.

pub mod api_key_modal;
pub mod controller;
pub mod delete_modal;
pub mod page;
pub mod table;
