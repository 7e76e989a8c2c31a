//! Layout Components
//!
//! Title bar, page header and log panel.

pub mod header;
pub mod log_panel;
pub mod page_header;
