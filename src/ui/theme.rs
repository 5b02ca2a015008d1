//! Visual theme and styling.

use console::Style;

/// Terminal theme for health check output.
#[derive(Debug, Clone)]
pub struct CheckTheme {
    /// Style for the success line (green).
    pub success: Style,
    /// Style for fatal errors (red bold, gated on stderr color support).
    pub error: Style,
}

impl Default for CheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold().for_stderr(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_colors(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Create a theme without colors.
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
        }
    }

    /// Format an informational message.
    pub fn format_message(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(msg))
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }
}

/// Check whether colors should be used for output.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
