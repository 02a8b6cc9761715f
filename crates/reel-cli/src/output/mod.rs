//! Output formatting helpers for the CLI.
//!
//! JSON output lives in `json`; table, plain and pretty text in `text`.

mod json;
mod text;

pub use json::print_json;
pub use text::{print_movie, print_movie_list, print_stats, print_user};
