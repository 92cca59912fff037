//! CLI argument parsing with clap derive

use std::io;

use anyhow::Result;
use clap::Parser;

use crate::assets::AssetRegistry;
use crate::commands;
use crate::domain::BuildMetadata;
use crate::output::OutputContext;

/// Program name shown in the version report.
pub const PROGRAM_NAME: &str = "boot";

/// Print the build metadata and assets embedded into this binary
#[derive(Parser)]
#[command(name = PROGRAM_NAME, version)]
pub struct Cli {}

impl Cli {
    /// Execute the startup report.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be rendered or written.
    pub fn run(self) -> Result<()> {
        let metadata = BuildMetadata::from_build();
        let ctx = OutputContext::new();
        let registry = AssetRegistry::embedded();
        let mut stdout = io::stdout().lock();
        commands::report::run(&ctx, &mut stdout, &metadata, &registry, PROGRAM_NAME)
    }
}
