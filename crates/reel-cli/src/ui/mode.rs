//! Output mode selection.
//!
//! Every command renders in one of three modes. List views accept an
//! explicit `--format`, so a table can be piped into a pager and plain rows
//! can be forced on a terminal.

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Tab-separated rows and `key=value` receipts
    #[default]
    Plain,
    /// Tables, badges and hints
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// Routing rules, first match wins:
    /// 1. `--json`
    /// 2. `--format plain` or `--format table`, even when piped
    /// 3. `TERM=dumb` forces plain
    /// 4. Pretty on a TTY, plain otherwise
    ///
    /// Unknown format names are rejected earlier by
    /// `helpers::check_output_flags` and fall through here.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }

        match format_flag {
            Some("plain") => return Self::Plain,
            Some("table") => return Self::Pretty,
            _ => {}
        }

        if term_is_dumb {
            return Self::Plain;
        }

        if is_tty {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    /// Check if this mode should output JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    /// Check if this mode renders tables and badges.
    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_wins_over_format() {
        let mode = OutputMode::resolve(true, Some("table"), true, false);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_plain_format_on_tty() {
        let mode = OutputMode::resolve(false, Some("plain"), true, false);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_table_format_survives_pipe_and_dumb_term() {
        assert_eq!(
            OutputMode::resolve(false, Some("table"), false, false),
            OutputMode::Pretty
        );
        assert_eq!(
            OutputMode::resolve(false, Some("table"), false, true),
            OutputMode::Pretty
        );
    }

    #[test]
    fn test_term_dumb_forces_plain() {
        let mode = OutputMode::resolve(false, None, true, true);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_default_follows_tty() {
        assert_eq!(OutputMode::resolve(false, None, true, false), OutputMode::Pretty);
        assert_eq!(OutputMode::resolve(false, None, false, false), OutputMode::Plain);
    }
}
