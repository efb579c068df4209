use console::style;
use std::fmt;

/// The central theme definition for the pkgsmith CLI.
pub struct Theme;

impl Theme {
    /// Primary color (Cyan) for structure and headings.
    pub fn primary(text: impl fmt::Display) -> String {
        style(text).cyan().bold().to_string()
    }

    pub fn bold(text: impl fmt::Display) -> String {
        style(text).bold().to_string()
    }

    pub fn success(text: impl fmt::Display) -> String {
        style(text).green().bold().to_string()
    }

    pub fn warning(text: impl fmt::Display) -> String {
        style(text).yellow().bold().to_string()
    }

    pub fn error(text: impl fmt::Display) -> String {
        style(text).red().bold().to_string()
    }

    /// Metadata such as URLs and paths.
    pub fn muted(text: impl fmt::Display) -> String {
        style(text).dim().to_string()
    }
}
