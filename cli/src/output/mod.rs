//! Output formatting module
//!
//! Every section of the startup report is framed the same way:
//!
//! ```text
//!
//! TITLE:
//! ---------------------------------------------
//! <body>
//! =============================================
//! ```

pub mod styles;

use std::io::{self, Write};

use console::Term;
use owo_colors::OwoColorize as _;
pub use styles::Styles;

/// Rule printed under a section title.
pub const SECTION_RULE: &str = "---------------------------------------------";

/// Rule printed after a section body.
pub const END_RULE: &str = "=============================================";

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
}

impl OutputContext {
    /// Create output context based on the terminal and `NO_COLOR`.
    #[must_use]
    pub fn new() -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = is_tty && std::env::var_os("NO_COLOR").is_none();
        Self::with_colors(use_colors, is_tty)
    }

    /// Create output context with explicit color and TTY settings.
    #[must_use]
    pub fn with_colors(use_colors: bool, is_tty: bool) -> Self {
        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }
        Self { styles, is_tty }
    }

    /// Write a blank line, the section title and the section rule.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn section<W: Write>(&self, out: &mut W, title: &str) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", title.style(self.styles.header))?;
        writeln!(out, "{}", SECTION_RULE.style(self.styles.dim))
    }

    /// Write the closing rule of a section.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn end_section<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", END_RULE.style(self.styles.dim))
    }
}

impl Default for OutputContext {
    fn default() -> Self {
        Self::new()
    }
}
