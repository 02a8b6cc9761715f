//! Application context for the Reel CLI.
//!
//! Bundles the parsed CLI arguments with the lazily-loaded config file and
//! opens the session and movie library each command needs.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use tracing::{debug, warn};

use reel_core::{FileStore, Library, Session};

use crate::cli::Cli;
use crate::config::{read_config, ReelConfig};
use crate::constants::{env, DEFAULT_LOG_LEVEL};
use crate::errors::CliError;
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_data_dir};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<ReelConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&ReelConfig> {
        self.config
            .get_or_try_init(|| read_config(&resolve_config_path()?))
    }

    /// Log filter: REEL_LOG, then the config's `[log] level`, then `warn`.
    ///
    /// Called before logging is set up, so a broken config falls back to
    /// the default here and is reported by the command that needs it.
    pub fn log_filter(&self) -> String {
        if let Ok(value) = std::env::var(env::LOG) {
            if !value.trim().is_empty() {
                return value;
            }
        }
        self.config()
            .ok()
            .and_then(|config| config.log.level.clone())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }

    /// Build a UI context for the given output flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        let timezone = match self.config().and_then(|config| config.timezone()) {
            Ok(tz) => tz,
            Err(err) => {
                warn!(error = %err, "ignoring display timezone");
                None
            }
        };
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii).with_timezone(timezone)
    }

    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_data_dir(self.cli, self.config()?)
    }

    pub fn open_store(&self) -> anyhow::Result<FileStore> {
        let dir = self.data_dir()?;
        debug!(dir = %dir.display(), "opening data directory");
        Ok(FileStore::open(dir)?)
    }

    /// Open the store and restore any saved session.
    pub fn session(&self) -> anyhow::Result<Session<FileStore>> {
        let mut session = Session::new(self.open_store()?);
        session.restore()?;
        Ok(session)
    }

    /// Open the signed-in user's movie library.
    pub fn open_library(&self) -> anyhow::Result<Library<FileStore>> {
        let session = self.session()?;
        let user = session
            .state()
            .user
            .clone()
            .ok_or_else(|| {
                CliError::auth_failed_with_hint(
                    "Not signed in",
                    "Run `reel login` (demo account: demo@example.com) or `reel signup`.",
                )
            })?;
        Ok(Library::open(session.into_store(), user)?)
    }
}
