//! Output styles using owo-colors stylesheet pattern

use owo_colors::Style;

/// Centralized stylesheet for report output.
#[derive(Default, Clone)]
pub struct Styles {
    /// Section titles
    pub header: Style,
    /// Section rules
    pub dim: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.header = Style::new().bold().cyan();
        self.dim = Style::new().dimmed();
    }
}
