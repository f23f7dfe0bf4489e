//! Report assembly.
//!
//! Builds the ordered label/value rows that make up an energy label report,
//! plus the [`ExporterArguments`] describing what an exporter should receive
//! for the same run. Tenant-wide and single-subscription runs produce
//! different row sets; [`reporting_data`] picks the right one from the
//! resolved configuration.

use std::time::Duration;

use indicatif::ProgressBar;
use serde_json::Value;

use crate::config::{LogLevel, ResolvedConfig};
use crate::errors::LabelerError;
use crate::labeler::engine::{EngineBuilder, EngineRequest, LabelingEngine};
use crate::labeler::export::{
    ExporterArguments, LabeledScope, ALL_SUBSCRIPTION_EXPORT_DATA, ALL_TENANT_EXPORT_TYPES,
    SUBSCRIPTION_METRIC_EXPORT_TYPES, TENANT_METRIC_EXPORT_TYPES,
};
use crate::labeler::thresholds;
use crate::labeler::types::Finding;

const SPINNER_MESSAGE: &str = "Please wait while retrieving Defender for Cloud findings...";

/// One row of the report: a display label and a JSON-representable value.
///
/// The same rows feed both renderers, so the value keeps its native type
/// (string, number) instead of being formatted early.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub label: String,
    pub value: Value,
}

impl ReportRow {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        ReportRow {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Assembles report rows and exporter arguments for the configured run.
pub fn reporting_data(
    config: &ResolvedConfig,
    builder: &dyn EngineBuilder,
) -> Result<(Vec<ReportRow>, ExporterArguments), LabelerError> {
    match &config.single_subscription_id {
        Some(subscription_id) => subscription_reporting_data(config, subscription_id, builder),
        None => tenant_reporting_data(config, builder),
    }
}

/// Tenant-wide rows: tenant id, tenant label, coverage, subscriptions
/// measured, and the best/worst subscription labels when they differ.
fn tenant_reporting_data(
    config: &ResolvedConfig,
    builder: &dyn EngineBuilder,
) -> Result<(Vec<ReportRow>, ExporterArguments), LabelerError> {
    let request = EngineRequest {
        tenant_id: config.tenant_id.clone(),
        tenant_thresholds: thresholds::TENANT_THRESHOLDS,
        subscription_thresholds: thresholds::SUBSCRIPTION_THRESHOLDS,
        resource_group_thresholds: thresholds::RESOURCE_GROUP_THRESHOLDS,
        frameworks: config.frameworks.clone(),
        allowed_subscription_ids: config.allowed_subscription_ids.clone(),
        denied_subscription_ids: config.denied_subscription_ids.clone(),
        denied_resource_group_names: config.denied_resource_group_names.clone(),
    };
    let mut engine = builder.build(request)?;
    let findings = wait_for_findings(engine.as_mut(), spinner_enabled(config))?;

    let tenant_label = engine.tenant_energy_label().clone();
    let aggregate = engine.labeled_subscriptions_energy_label().clone();

    let mut rows = vec![
        ReportRow::new("Tenant ID:", config.tenant_id.as_str()),
        ReportRow::new("Tenant Security Score:", tenant_label.label.as_str()),
        ReportRow::new("Tenant Percentage Coverage:", tenant_label.coverage),
        ReportRow::new(
            "Labeled Subscriptions Measured:",
            aggregate.subscriptions_measured,
        ),
    ];
    // When every measured subscription scored the same, the best/worst rows
    // would just repeat the tenant row.
    if tenant_label.best_label != tenant_label.worst_label {
        rows.push(ReportRow::new(
            "Best Subscription Security Score:",
            tenant_label.best_label.as_str(),
        ));
        rows.push(ReportRow::new(
            "Worst Subscription Security Score:",
            tenant_label.worst_label.as_str(),
        ));
    }

    let export_types = if config.export_all {
        ALL_TENANT_EXPORT_TYPES
    } else {
        TENANT_METRIC_EXPORT_TYPES
    };
    let arguments = ExporterArguments {
        export_types,
        id: config.tenant_id.clone(),
        energy_label: tenant_label.label,
        defender_for_cloud_findings: findings,
        labeled_subscriptions: LabeledScope::Tenant(engine.subscriptions().to_vec()),
        credentials: engine.credentials(),
    };
    Ok((rows, arguments))
}

/// Single-subscription rows: id, label, finding counts per severity and the
/// age of the oldest open finding, with the display name prepended when the
/// subscription has one.
fn subscription_reporting_data(
    config: &ResolvedConfig,
    subscription_id: &str,
    builder: &dyn EngineBuilder,
) -> Result<(Vec<ReportRow>, ExporterArguments), LabelerError> {
    // The engine is scoped down to just the requested subscription, so a
    // backend only retrieves what this run can report on.
    let request = EngineRequest {
        tenant_id: config.tenant_id.clone(),
        tenant_thresholds: thresholds::TENANT_THRESHOLDS,
        subscription_thresholds: thresholds::SUBSCRIPTION_THRESHOLDS,
        resource_group_thresholds: thresholds::RESOURCE_GROUP_THRESHOLDS,
        frameworks: config.frameworks.clone(),
        allowed_subscription_ids: vec![subscription_id.to_string()],
        denied_subscription_ids: Vec::new(),
        denied_resource_group_names: Vec::new(),
    };
    let mut engine = builder.build(request)?;
    let findings = wait_for_findings(engine.as_mut(), spinner_enabled(config))?;
    let findings: Vec<Finding> = findings
        .into_iter()
        .filter(|finding| finding.subscription_id == subscription_id)
        .collect();

    let subscription = engine
        .subscriptions()
        .iter()
        .find(|s| s.subscription_id == subscription_id)
        .cloned()
        .ok_or_else(|| LabelerError::SubscriptionNotFound(subscription_id.to_string()))?;
    let energy_label = engine.subscription_energy_label(&subscription, &findings)?;

    let mut rows = vec![
        ReportRow::new("Subscription ID:", subscription.subscription_id.as_str()),
        ReportRow::new("Subscription Security Score:", energy_label.label.as_str()),
        ReportRow::new(
            "Number Of High Findings:",
            energy_label.number_of_high_findings,
        ),
        ReportRow::new(
            "Number Of Medium Findings:",
            energy_label.number_of_medium_findings,
        ),
        ReportRow::new(
            "Number Of Low Findings:",
            energy_label.number_of_low_findings,
        ),
        ReportRow::new("Max Days Open:", energy_label.max_days_open),
    ];
    if !subscription.display_name.is_empty() {
        rows.insert(
            0,
            ReportRow::new(
                "Subscription Display Name:",
                subscription.display_name.as_str(),
            ),
        );
    }

    let export_types = if config.export_all {
        ALL_SUBSCRIPTION_EXPORT_DATA
    } else {
        SUBSCRIPTION_METRIC_EXPORT_TYPES
    };
    let arguments = ExporterArguments {
        export_types,
        id: subscription.subscription_id.clone(),
        energy_label: energy_label.label,
        defender_for_cloud_findings: findings,
        labeled_subscriptions: LabeledScope::Single(subscription),
        credentials: engine.credentials(),
    };
    Ok((rows, arguments))
}

fn spinner_enabled(config: &ResolvedConfig) -> bool {
    // A spinner would interleave with debug logging on the same terminal.
    !config.disable_spinner && config.log_level != LogLevel::Debug
}

/// Runs the retrieval step, showing a spinner on stderr while it lasts.
///
/// The spinner draws nothing when stderr is not a terminal, so captured
/// output stays clean.
fn wait_for_findings(
    engine: &mut dyn LabelingEngine,
    spinner: bool,
) -> Result<Vec<Finding>, LabelerError> {
    if !spinner {
        return engine.retrieve_findings();
    }
    let progress = ProgressBar::new_spinner();
    progress.set_message(SPINNER_MESSAGE);
    progress.enable_steady_tick(Duration::from_millis(120));
    let findings = engine.retrieve_findings();
    progress.finish_and_clear();
    findings
}
