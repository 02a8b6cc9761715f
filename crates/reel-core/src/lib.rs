//! # Reel Core
//!
//! Core library for Reel - a local-first personal movie tracker.
//!
//! This crate provides the domain model, the movie and session state
//! containers, and the key-value storage they persist through, independent
//! of the CLI interface.
//!
//! ## Architecture
//!
//! - **model**: Users, movies, ratings and input builders
//! - **filter**: Status/search/genre filtering and sorting
//! - **state**: Pure reducers for the movie collection
//! - **library**: Movie collection service kept in sync with storage
//! - **auth**: Session reducer and mock authentication
//! - **storage**: Key-value storage trait and backends
//! - **stats**: Dashboard aggregates
//! - **seed**: Starter collection for first-time users

pub mod auth;
pub mod error;
pub mod filter;
pub mod fs;
pub mod library;
pub mod model;
pub mod seed;
pub mod state;
pub mod stats;
pub mod storage;

pub use auth::{AuthAction, AuthState, Session};
pub use error::{ReelError, Result};
pub use filter::{apply_filters, FilterPatch, MovieFilter, SortKey, SortOrder, StatusFilter};
pub use library::{Library, View};
pub use model::{Movie, MovieUpdate, NewMovie, Rating, User};
pub use state::{MoviesAction, MoviesState};
pub use stats::LibraryStats;
pub use storage::{FileStore, KeyValueStore, MemoryStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
