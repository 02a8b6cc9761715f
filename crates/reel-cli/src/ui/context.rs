//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use chrono_tz::Tz;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
    /// Display timezone; `None` shows UTC
    pub timezone: Option<Tz>,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    pub fn from_env(
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        let color = is_tty && !no_color_flag && !no_color_env && !term_is_dumb;

        Self {
            is_tty,
            color,
            unicode: !ascii_flag,
            width: terminal_width().unwrap_or(80),
            mode: OutputMode::resolve(json_flag, format_flag, is_tty, term_is_dumb),
            timezone: None,
        }
    }

    pub fn with_timezone(mut self, timezone: Option<Tz>) -> Self {
        self.timezone = timezone;
        self
    }

    /// Check if interactive prompts are allowed.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }
}

/// `COLUMNS` wins when set; otherwise ask the terminal.
fn terminal_width() -> Option<usize> {
    columns_override(std::env::var("COLUMNS").ok().as_deref()).or_else(tty_width)
}

fn columns_override(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|cols| cols.trim().parse::<usize>().ok())
        .filter(|width| *width > 0)
}

#[cfg(unix)]
fn tty_width() -> Option<usize> {
    use std::mem::MaybeUninit;

    let mut winsize = MaybeUninit::<libc::winsize>::uninit();
    // SAFETY: TIOCGWINSZ only writes a winsize into the pointer we pass
    let result =
        unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
    if result != 0 {
        return None;
    }
    // SAFETY: ioctl returned 0, so the struct was filled in
    let ws = unsafe { winsize.assume_init() };
    (ws.ws_col > 0).then_some(ws.ws_col as usize)
}

#[cfg(not(unix))]
fn tty_width() -> Option<usize> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_from_flag() {
        let ctx = UiContext::from_env(true, None, false, false);
        assert_eq!(ctx.mode, OutputMode::Json);
    }

    #[test]
    fn test_ascii_disables_unicode() {
        let ctx = UiContext::from_env(false, None, false, true);
        assert!(!ctx.unicode);
    }

    #[test]
    fn test_no_color_disables_color() {
        let ctx = UiContext::from_env(false, None, true, false);
        assert!(!ctx.color);
    }

    #[test]
    fn test_columns_override() {
        assert_eq!(columns_override(Some("132")), Some(132));
        assert_eq!(columns_override(Some(" 100 ")), Some(100));
        assert_eq!(columns_override(Some("0")), None);
        assert_eq!(columns_override(Some("wide")), None);
        assert_eq!(columns_override(None), None);
    }

    #[test]
    fn test_width_is_never_zero() {
        let ctx = UiContext::from_env(false, None, false, false);
        assert!(ctx.width > 0);
    }

    #[test]
    fn test_timezone_defaults_to_none() {
        let ctx = UiContext::from_env(false, None, false, false);
        assert!(ctx.timezone.is_none());
        let ctx = ctx.with_timezone(Some(chrono_tz::UTC));
        assert_eq!(ctx.timezone, Some(chrono_tz::UTC));
    }
}
