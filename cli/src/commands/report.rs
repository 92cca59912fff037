//! Startup report: version, asset list, and the sample asset's bytes.

use std::io::Write;

use anyhow::{Context, Result};

use crate::assets::AssetRegistry;
use crate::domain::BuildMetadata;
use crate::output::OutputContext;
use crate::version;

/// Asset whose raw bytes are written in the last section.
pub const SAMPLE_ASSET: &str = "assets/files/sample.txt";

/// Write the three report sections to `out`.
///
/// # Errors
///
/// Returns an error if the version report cannot be rendered, if
/// [`SAMPLE_ASSET`] is not embedded, or if writing to `out` fails.
pub fn run<W: Write>(
    ctx: &OutputContext,
    out: &mut W,
    metadata: &BuildMetadata,
    registry: &AssetRegistry,
    program: &str,
) -> Result<()> {
    let report = version::render(metadata, program).context("rendering version report")?;
    tracing::debug!(
        info = %version::info(metadata),
        context = %version::build_context(metadata),
        "build metadata loaded",
    );

    ctx.section(out, "VERSION:")?;
    writeln!(out, "{report}")?;
    ctx.end_section(out)?;
    writeln!(out)?;

    let names = registry.asset_names();
    tracing::debug!(count = names.len(), "listing embedded assets");
    ctx.section(out, "ASSETS:")?;
    for name in &names {
        writeln!(out, "{name}")?;
    }
    ctx.end_section(out)?;
    writeln!(out)?;

    let content = registry
        .get_asset(SAMPLE_ASSET)
        .with_context(|| format!("loading {SAMPLE_ASSET}"))?;
    tracing::debug!(asset = SAMPLE_ASSET, bytes = content.len(), "writing embedded asset");
    ctx.section(out, &format!("ASSET {SAMPLE_ASSET}"))?;
    out.write_all(content)?;
    ctx.end_section(out)?;

    out.flush().context("flushing report")
}
