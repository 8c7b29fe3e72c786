//! # Console Output Configuration
//!
//! Controls whether progress markers use emoji/color or plain-text
//! fallbacks. Honors the global `--color` flag plus the usual environment
//! conventions (`NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`, `TERM=dumb`),
//! with TTY detection delegated to the `console` crate.

use std::env;

/// Resolved output preferences for a run.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether emoji and color may be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Resolve the `--color` flag ("always", "never", or "auto") against
    /// the environment.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };
        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // NO_COLOR disables when present, even if empty (https://no-color.org/)
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Pick the emoji marker or its plain-text fallback.
pub fn marker<'a>(config: &OutputConfig, emoji: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji
    } else {
        plain
    }
}
