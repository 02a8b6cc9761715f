//! Command handlers, one module per area.

pub mod auth;
pub mod init;
pub mod misc;
pub mod movies;
pub mod stats;
