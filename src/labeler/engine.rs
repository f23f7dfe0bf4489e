//! The labeling engine contract.
//!
//! The CLI does not score findings itself. It hands a fully resolved
//! [`EngineRequest`] to an [`EngineBuilder`], receives a [`LabelingEngine`]
//! back, and only ever reads labels and findings out of it. Anything that can
//! produce those answers, such as a live Defender for Cloud session or the
//! bundled [snapshot replay](crate::labeler::snapshot), plugs in behind these
//! traits.

use crate::errors::LabelerError;
use crate::labeler::thresholds::{FindingsThreshold, TenantThreshold};
use crate::labeler::types::{
    AggregateEnergyLabel, Credentials, Finding, Subscription, SubscriptionEnergyLabel,
    TenantEnergyLabel,
};

/// Everything an engine needs to label one tenant.
///
/// The subscription id lists are already validated and mutually exclusive by
/// the time a request is built; engines may assume at most one of
/// `allowed_subscription_ids` / `denied_subscription_ids` is non-empty.
#[derive(Debug, Clone)]
pub struct EngineRequest {
    pub tenant_id: String,
    pub tenant_thresholds: &'static [TenantThreshold],
    pub subscription_thresholds: &'static [FindingsThreshold],
    pub resource_group_thresholds: &'static [FindingsThreshold],
    /// Compliance frameworks findings must belong to. Empty means no
    /// framework restriction.
    pub frameworks: Vec<String>,
    /// When non-empty, only these subscriptions are measured.
    pub allowed_subscription_ids: Vec<String>,
    /// Subscriptions excluded from measurement.
    pub denied_subscription_ids: Vec<String>,
    /// Resource groups whose findings are ignored entirely.
    pub denied_resource_group_names: Vec<String>,
}

/// A source of energy labels for one tenant.
///
/// [`retrieve_findings`](LabelingEngine::retrieve_findings) must be called
/// before the label accessors; it is the (potentially slow) step that talks
/// to the backend, and the one the CLI wraps in a progress spinner.
pub trait LabelingEngine {
    /// Fetches the open Defender for Cloud findings in scope of the request
    /// this engine was built from.
    fn retrieve_findings(&mut self) -> Result<Vec<Finding>, LabelerError>;

    fn tenant_energy_label(&self) -> &TenantEnergyLabel;

    /// Aggregate over every subscription that could be measured.
    fn labeled_subscriptions_energy_label(&self) -> &AggregateEnergyLabel;

    /// The subscriptions in scope, after allow/deny filtering.
    fn subscriptions(&self) -> &[Subscription];

    /// The label of a single subscription, given the findings that concern it.
    fn subscription_energy_label(
        &self,
        subscription: &Subscription,
        findings: &[Finding],
    ) -> Result<SubscriptionEnergyLabel, LabelerError>;

    /// The credentials the engine authenticated with, for reuse by exporters.
    fn credentials(&self) -> Credentials;
}

/// Constructs a [`LabelingEngine`] for a request.
///
/// Construction is where backends authenticate and discover the tenant, so
/// it can fail; every argument error must already have been reported by the
/// time `build` runs, which keeps engine failures clearly distinguishable
/// from usage mistakes.
pub trait EngineBuilder {
    fn build(&self, request: EngineRequest) -> Result<Box<dyn LabelingEngine>, LabelerError>;
}
