//! UI primitives for the Reel CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode, timezone)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges, styles, rating stars
//! - **Render**: Tables, headers, receipts, hints
//! - **Format**: String utilities (truncate, ids, dates)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{
    badge, blank_line, divider, header, hint, kv, print, print_error, receipt, simple_table,
    Column,
};

pub use format::{format_date, format_datetime, format_rating, format_year, short_id, truncate};
