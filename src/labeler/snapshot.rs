//! Snapshot-replay engine backend.
//!
//! Replays a previously exported tenant snapshot instead of talking to
//! Azure, which makes the CLI usable offline and testable end to end. The
//! snapshot is a single JSON document with the tenant label, the measured
//! subscriptions (each carrying its recorded label), and the open findings.
//! Point [`SNAPSHOT_FILE_ENV`] at the file to select this backend.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::LabelerError;
use crate::labeler::engine::{EngineBuilder, EngineRequest, LabelingEngine};
use crate::labeler::types::{
    AggregateEnergyLabel, Credentials, Finding, Subscription, SubscriptionEnergyLabel,
    TenantEnergyLabel,
};

/// Environment variable holding the path of the snapshot to replay.
pub const SNAPSHOT_FILE_ENV: &str = "AZURE_LABELER_SNAPSHOT_FILE";

/// On-disk shape of a tenant snapshot.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TenantSnapshot {
    pub tenant_id: String,
    pub tenant_energy_label: TenantEnergyLabel,
    pub labeled_subscriptions_energy_label: AggregateEnergyLabel,
    pub subscriptions: Vec<SubscriptionSnapshot>,
    #[serde(default)]
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SubscriptionSnapshot {
    #[serde(flatten)]
    pub subscription: Subscription,
    pub energy_label: SubscriptionEnergyLabel,
}

/// Builds [`SnapshotEngine`]s from the file named by [`SNAPSHOT_FILE_ENV`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SnapshotEngineBuilder;

impl EngineBuilder for SnapshotEngineBuilder {
    fn build(&self, request: EngineRequest) -> Result<Box<dyn LabelingEngine>, LabelerError> {
        let path = env::var(SNAPSHOT_FILE_ENV).map_err(|_| {
            LabelerError::Engine(format!(
                "no labeling engine backend is configured; \
                 point {SNAPSHOT_FILE_ENV} at an exported tenant snapshot"
            ))
        })?;
        let engine = SnapshotEngine::from_file(&PathBuf::from(path), request)?;
        Ok(Box::new(engine))
    }
}

/// A [`LabelingEngine`] that answers from a loaded [`TenantSnapshot`].
#[derive(Debug)]
pub struct SnapshotEngine {
    tenant_id: String,
    tenant_energy_label: TenantEnergyLabel,
    labeled_subscriptions_energy_label: AggregateEnergyLabel,
    subscriptions: Vec<Subscription>,
    subscription_labels: Vec<(String, SubscriptionEnergyLabel)>,
    findings: Vec<Finding>,
}

impl SnapshotEngine {
    pub fn from_file(path: &Path, request: EngineRequest) -> Result<Self, LabelerError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            LabelerError::Engine(format!("could not read snapshot {}: {e}", path.display()))
        })?;
        let snapshot: TenantSnapshot = serde_json::from_str(&contents).map_err(|e| {
            LabelerError::Engine(format!(
                "snapshot {} is not a valid tenant snapshot: {e}",
                path.display()
            ))
        })?;
        Self::from_snapshot(snapshot, request)
    }

    /// Applies the request's scope filters to a loaded snapshot.
    pub fn from_snapshot(
        snapshot: TenantSnapshot,
        request: EngineRequest,
    ) -> Result<Self, LabelerError> {
        if snapshot.tenant_id != request.tenant_id {
            return Err(LabelerError::Engine(format!(
                "snapshot was taken for tenant {} but tenant {} was requested",
                snapshot.tenant_id, request.tenant_id
            )));
        }

        let mut subscriptions = Vec::new();
        let mut subscription_labels = Vec::new();
        for entry in snapshot.subscriptions {
            let id = &entry.subscription.subscription_id;
            if !request.allowed_subscription_ids.is_empty()
                && !request.allowed_subscription_ids.iter().any(|a| a == id)
            {
                continue;
            }
            if request.denied_subscription_ids.iter().any(|d| d == id) {
                continue;
            }
            subscription_labels.push((id.clone(), entry.energy_label));
            subscriptions.push(entry.subscription);
        }

        let in_scope =
            |id: &str| subscriptions.iter().any(|s| s.subscription_id == id);
        let findings: Vec<Finding> = snapshot
            .findings
            .into_iter()
            .filter(|f| in_scope(&f.subscription_id))
            .filter(|f| match &f.resource_group {
                Some(rg) => !request
                    .denied_resource_group_names
                    .iter()
                    .any(|denied| denied == rg),
                None => true,
            })
            .filter(|f| match &f.framework {
                Some(framework) => {
                    request.frameworks.is_empty()
                        || request.frameworks.iter().any(|wanted| wanted == framework)
                }
                None => true,
            })
            .collect();

        log::debug!(
            "snapshot for tenant {} loaded: {} subscriptions and {} findings in scope",
            request.tenant_id,
            subscriptions.len(),
            findings.len()
        );

        Ok(SnapshotEngine {
            tenant_id: snapshot.tenant_id,
            tenant_energy_label: snapshot.tenant_energy_label,
            labeled_subscriptions_energy_label: snapshot.labeled_subscriptions_energy_label,
            subscriptions,
            subscription_labels,
            findings,
        })
    }
}

impl LabelingEngine for SnapshotEngine {
    fn retrieve_findings(&mut self) -> Result<Vec<Finding>, LabelerError> {
        Ok(self.findings.clone())
    }

    fn tenant_energy_label(&self) -> &TenantEnergyLabel {
        &self.tenant_energy_label
    }

    fn labeled_subscriptions_energy_label(&self) -> &AggregateEnergyLabel {
        &self.labeled_subscriptions_energy_label
    }

    fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    fn subscription_energy_label(
        &self,
        subscription: &Subscription,
        _findings: &[Finding],
    ) -> Result<SubscriptionEnergyLabel, LabelerError> {
        // Labels were computed when the snapshot was taken; replay looks
        // them up rather than re-scoring the findings.
        self.subscription_labels
            .iter()
            .find(|(id, _)| *id == subscription.subscription_id)
            .map(|(_, label)| label.clone())
            .ok_or_else(|| {
                LabelerError::Engine(format!(
                    "snapshot has no recorded energy label for subscription {}",
                    subscription.subscription_id
                ))
            })
    }

    fn credentials(&self) -> Credentials {
        Credentials::for_tenant(&self.tenant_id)
    }
}
