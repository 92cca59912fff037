//! Version report rendering.
//!
//! Renders [`BuildMetadata`] plus a program name into the multi-line report
//! printed at startup:
//!
//! ```text
//! boot, version 1.2.3 (branch: main, revision: abc123)
//!   build user:       ci@host
//!   build date:       2024-01-01
//!   go version:       rustc 1.85.0 (4d91de4e4 2025-02-17)
//! ```

use handlebars::Handlebars;
use serde::Serialize;

use crate::domain::{BuildMetadata, VersionError};

const TEMPLATE_NAME: &str = "version";

const VERSION_TEMPLATE: &str = "
{{program}}, version {{version}} (branch: {{branch}}, revision: {{revision}})
  build user:       {{build_user}}
  build date:       {{build_date}}
  go version:       {{toolchain_version}}
";

#[derive(Serialize)]
struct ReportContext<'a> {
    program: &'a str,
    #[serde(flatten)]
    metadata: &'a BuildMetadata,
}

/// Render the version report for `program`.
///
/// Unset metadata fields render as empty slots. Values are substituted
/// verbatim, and leading/trailing whitespace of the whole report is trimmed.
///
/// # Errors
///
/// Returns [`VersionError`] if the template fails to compile or render. The
/// template is fixed, so either case is a build defect rather than a runtime
/// condition.
pub fn render(metadata: &BuildMetadata, program: &str) -> Result<String, VersionError> {
    let mut registry = Handlebars::new();
    registry.register_escape_fn(handlebars::no_escape);
    registry.register_template_string(TEMPLATE_NAME, VERSION_TEMPLATE)?;

    let report = registry.render(TEMPLATE_NAME, &ReportContext { program, metadata })?;
    Ok(report.trim().to_owned())
}

/// One-line version, branch and revision summary.
#[must_use]
pub fn info(metadata: &BuildMetadata) -> String {
    format!(
        "(version={}, branch={}, revision={})",
        metadata.version, metadata.branch, metadata.revision
    )
}

/// One-line toolchain, build user and build date summary.
#[must_use]
pub fn build_context(metadata: &BuildMetadata) -> String {
    format!(
        "(go={}, user={}, date={})",
        metadata.toolchain_version, metadata.build_user, metadata.build_date
    )
}
