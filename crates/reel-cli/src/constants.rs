//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    pub const GENERAL: i32 = 1;

    /// Resource not found (movie, config).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed or nobody is signed in.
    pub const AUTH_FAILED: i32 = 5;
}

/// Environment variables read by the CLI.
pub mod env {
    pub const CONFIG: &str = "REEL_CONFIG";
    pub const PASSWORD: &str = "REEL_PASSWORD";
    pub const LOG: &str = "REEL_LOG";
}

/// Log filter used when neither `REEL_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Table column width for titles before truncation.
pub const TITLE_MAX: usize = 40;
