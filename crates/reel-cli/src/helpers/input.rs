//! Interactive input: passwords, emails and confirmations.

use dialoguer::{Confirm, Input, Password};

use crate::constants::env;
use crate::errors::CliError;

/// Password from the flag, REEL_PASSWORD, or a prompt.
pub fn read_password(flag: Option<&str>, interactive: bool) -> anyhow::Result<String> {
    if let Some(value) = flag {
        return Ok(value.to_string());
    }
    if let Ok(value) = std::env::var(env::PASSWORD) {
        if !value.is_empty() {
            return Ok(value);
        }
    }
    if !interactive {
        return Err(CliError::invalid_input(format!(
            "No password provided and no TTY available. Set {} or pass --password.",
            env::PASSWORD
        ))
        .into());
    }
    Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Email from the flag or a prompt.
pub fn read_email(flag: Option<&str>, interactive: bool) -> anyhow::Result<String> {
    if let Some(value) = flag {
        return Ok(value.to_string());
    }
    if !interactive {
        return Err(CliError::invalid_input("No email provided. Pass --email.").into());
    }
    Input::<String>::new()
        .with_prompt("Email")
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read email: {}", e))
}

/// Ask a yes/no question, defaulting to no.
pub fn confirm(prompt: &str) -> anyhow::Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}
