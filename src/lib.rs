//! # azure-energy-labeler
//!
//! Energy label reports for Azure tenants and subscriptions.
//!
//! `azure-energy-labeler` resolves and validates labeler arguments, drives a
//! [labeling engine](labeler::engine) that scores Defender for Cloud
//! findings into energy labels (A best, F worst), renders the result as an
//! ASCII table or JSON, and can export the underlying data to a local
//! directory.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use clap::Parser;
//! use azure_energy_labeler::cli::Cli;
//! use azure_energy_labeler::config::ResolvedConfig;
//! use azure_energy_labeler::labeler::export::FileExporter;
//! use azure_energy_labeler::labeler::snapshot::SnapshotEngineBuilder;
//!
//! # fn main() -> Result<(), azure_energy_labeler::errors::LabelerError> {
//! let config = ResolvedConfig::from_cli(Cli::parse())?;
//! let mut stdout = std::io::stdout();
//! azure_energy_labeler::run(&config, &SnapshotEngineBuilder, &FileExporter, &mut stdout)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a pipeline:
//!
//! 1. **[`cli`]**: the raw clap surface, every flag backed by an
//!    `AZURE_LABELER_*` environment variable.
//! 2. **[`config`]**: resolve and validate arguments into a
//!    [`config::ResolvedConfig`].
//! 3. **[`labeler`]**: the engine seam with request/label types, validation,
//!    thresholds, export, and the snapshot replay backend.
//! 4. **[`report`]**: assemble ordered report rows and exporter arguments
//!    for a tenant-wide or single-subscription run.
//! 5. **[`output`]**: render the rows as an ASCII table or JSON.
//!
//! [`logging`] and [`banner`] cover the console trimmings around that
//! pipeline.

pub mod banner;
pub mod cli;
pub mod config;
pub mod errors;
pub mod labeler;
pub mod logging;
pub mod output;
pub mod report;

use std::io::Write;

use crate::config::ResolvedConfig;
use crate::errors::LabelerError;
use crate::labeler::engine::EngineBuilder;
use crate::labeler::export::Exporter;

/// Runs one labeling pass: assemble the report, export it when an export
/// path is configured, and write the rendered report to `out`.
///
/// The engine builder and exporter are injected so callers can swap
/// backends; the binary wires in
/// [`SnapshotEngineBuilder`](labeler::snapshot::SnapshotEngineBuilder) and
/// [`FileExporter`](labeler::export::FileExporter).
pub fn run(
    config: &ResolvedConfig,
    builder: &dyn EngineBuilder,
    exporter: &dyn Exporter,
    out: &mut dyn Write,
) -> Result<(), LabelerError> {
    let (rows, arguments) = report::reporting_data(config, builder)?;

    if let Some(destination) = &config.export_path {
        log::info!("trying to export data to the requested path: {destination}");
        exporter.export(&arguments, destination)?;
    }

    writeln!(out, "{}", output::render(&rows, config.to_json))?;
    Ok(())
}
