//! CLI error types for structured error handling.
//!
//! Handlers return `anyhow::Result`; `main` inspects the error chain for a
//! `CliError` or a core `ReelError` to pick the exit code and hint.

use std::fmt;

use reel_core::ReelError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Wrong credentials or no session
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::AuthFailed { message, .. } => write!(f, "{}", message),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::AuthFailed { hint, .. } => hint.as_deref(),
            CliError::InvalidInput(_) => None,
        }
    }
}

/// Exit code and hint for a failed command.
pub fn classify(err: &anyhow::Error) -> (i32, Option<String>) {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return (cli_err.exit_code(), cli_err.hint().map(String::from));
        }
        if let Some(core_err) = cause.downcast_ref::<ReelError>() {
            return classify_core(core_err);
        }
    }
    (exit_codes::GENERAL, None)
}

fn classify_core(err: &ReelError) -> (i32, Option<String>) {
    match err {
        ReelError::NotFound(_) => (
            exit_codes::NOT_FOUND,
            Some("Run `reel list` to find movie IDs.".to_string()),
        ),
        ReelError::InvalidInput(_) | ReelError::Validation(_) => {
            (exit_codes::INVALID_INPUT, None)
        }
        ReelError::Auth(_) => (
            exit_codes::AUTH_FAILED,
            Some("Sign in with `reel login`.".to_string()),
        ),
        ReelError::Load(_) => (
            exit_codes::GENERAL,
            Some("The movie file is unreadable; restore it or move it aside.".to_string()),
        ),
        ReelError::Storage(_) | ReelError::Other(_) => (exit_codes::GENERAL, None),
    }
}
