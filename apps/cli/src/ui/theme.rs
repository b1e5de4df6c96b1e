use std::fmt;

/// The palette shared by every message the CLI prints.
pub struct Theme;

impl Theme {
    /// Paths and names the user typed.
    pub fn primary(text: impl fmt::Display) -> String {
        console::style(text).green().to_string()
    }

    /// Commands the user can copy.
    pub fn command(text: impl fmt::Display) -> String {
        console::style(text).cyan().to_string()
    }

    pub fn bold(text: impl fmt::Display) -> String {
        console::style(text).bold().to_string()
    }

    pub fn muted(text: impl fmt::Display) -> String {
        console::style(text).dim().to_string()
    }
}
