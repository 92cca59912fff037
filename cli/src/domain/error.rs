//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator.

use thiserror::Error;

// ── Asset errors ──────────────────────────────────────────────────────────────

/// Errors from the embedded asset registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("embedded asset not found: {0}")]
    NotFound(String),
}

// ── Version errors ────────────────────────────────────────────────────────────

/// Errors from rendering the version report.
#[derive(Debug, Error)]
pub enum VersionError {
    #[error("version report template is invalid")]
    Template(#[from] handlebars::TemplateError),

    #[error("failed to render version report")]
    Render(#[from] handlebars::RenderError),
}
