//! Export of report data to a destination path.

use std::fs;

use crate::errors::LabelerError;
use crate::labeler::types::{Credentials, Finding, Subscription};
use crate::labeler::validate::DestinationPath;

/// Name of the document written into a local export directory.
pub const EXPORT_FILE_NAME: &str = "energy-label-export.json";

/// One exportable section of the report data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportType {
    TenantEnergyLabel,
    SubscriptionEnergyLabel,
    LabeledSubscriptions,
    Findings,
}

/// Sections exported for a tenant-wide run with `--export-all` (the default).
pub const ALL_TENANT_EXPORT_TYPES: &[ExportType] = &[
    ExportType::TenantEnergyLabel,
    ExportType::LabeledSubscriptions,
    ExportType::Findings,
];

/// Sections exported for a tenant-wide run with `--export-metrics`:
/// the metrics only, without the potentially sensitive findings data.
pub const TENANT_METRIC_EXPORT_TYPES: &[ExportType] = &[
    ExportType::TenantEnergyLabel,
    ExportType::LabeledSubscriptions,
];

/// Sections exported for a single-subscription run with `--export-all`.
pub const ALL_SUBSCRIPTION_EXPORT_DATA: &[ExportType] =
    &[ExportType::SubscriptionEnergyLabel, ExportType::Findings];

/// Sections exported for a single-subscription run with `--export-metrics`.
pub const SUBSCRIPTION_METRIC_EXPORT_TYPES: &[ExportType] =
    &[ExportType::SubscriptionEnergyLabel];

/// The subscriptions a report covered: the whole measured set for tenant-wide
/// runs, exactly one for single-subscription runs.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum LabeledScope {
    Tenant(Vec<Subscription>),
    Single(Subscription),
}

/// Everything an exporter needs, assembled alongside the report rows.
#[derive(Debug, Clone)]
pub struct ExporterArguments {
    pub export_types: &'static [ExportType],
    /// Tenant id for tenant-wide runs, subscription id otherwise.
    pub id: String,
    pub energy_label: String,
    pub defender_for_cloud_findings: Vec<Finding>,
    pub labeled_subscriptions: LabeledScope,
    pub credentials: Credentials,
}

/// Writes report data to a validated destination.
pub trait Exporter {
    fn export(
        &self,
        arguments: &ExporterArguments,
        destination: &DestinationPath,
    ) -> Result<(), LabelerError>;
}

#[derive(serde::Serialize)]
struct ExportDocument<'a> {
    id: &'a str,
    energy_label: &'a str,
    export_types: &'static [ExportType],
    labeled_subscriptions: &'a LabeledScope,
    #[serde(skip_serializing_if = "Option::is_none")]
    defender_for_cloud_findings: Option<&'a [Finding]>,
}

/// Exports to a local directory as a single pretty-printed JSON document.
///
/// Findings are included only when the selected export types ask for them,
/// so `--export-metrics` never writes finding details to disk. Blob
/// container destinations are rejected; uploading requires an exporter that
/// can reuse the engine's credentials.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileExporter;

impl Exporter for FileExporter {
    fn export(
        &self,
        arguments: &ExporterArguments,
        destination: &DestinationPath,
    ) -> Result<(), LabelerError> {
        let dir = match destination {
            DestinationPath::Local(path) => path,
            DestinationPath::BlobContainer { url, .. } => {
                return Err(LabelerError::Export(format!(
                    "cannot upload to storage account container {url}: \
                     no Azure-backed exporter is configured"
                )));
            }
        };

        let document = ExportDocument {
            id: &arguments.id,
            energy_label: &arguments.energy_label,
            export_types: arguments.export_types,
            labeled_subscriptions: &arguments.labeled_subscriptions,
            defender_for_cloud_findings: arguments
                .export_types
                .contains(&ExportType::Findings)
                .then_some(&arguments.defender_for_cloud_findings[..]),
        };

        fs::create_dir_all(dir).map_err(|e| {
            LabelerError::Export(format!("could not create {}: {e}", dir.display()))
        })?;

        let file = dir.join(EXPORT_FILE_NAME);
        let contents = serde_json::to_string_pretty(&document)
            .map_err(|e| LabelerError::Export(format!("could not serialize report data: {e}")))?;
        fs::write(&file, contents)
            .map_err(|e| LabelerError::Export(format!("could not write {}: {e}", file.display())))?;

        log::debug!("exported report data to {}", file.display());
        Ok(())
    }
}
