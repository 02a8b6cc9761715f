//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Password, email and confirmation prompts (`input`)
//! - Year, rating, filter and format parsing (`parsing`)

mod input;
mod parsing;

pub use input::{confirm, read_email, read_password};
pub use parsing::{
    check_output_flags, optional_edit, parse_rating, parse_sort_key, parse_sort_order,
    parse_status, parse_year,
};
