//! Domain - Core Data Types
//!
//! Plain data types shared by the service and UI layers.

pub mod api_key;
pub mod config;
