//! Composite Components

pub mod modal;
pub mod table;
