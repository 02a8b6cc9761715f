//! Storage abstraction for Reel.
//!
//! Reel persists two kinds of documents through a plain key-value store:
//! the signed-in user under [`keys::SESSION`] and each user's movie list
//! under [`keys::movies`]. Values are JSON strings.
//!
//! ## Backends
//!
//! - [`FileStore`]: one `<key>.json` file per key in a data directory,
//!   written atomically
//! - [`MemoryStore`]: an in-process map, for tests and dry runs

pub mod file;
pub mod keys;
pub mod memory;
pub mod traits;

// Re-export public types
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
