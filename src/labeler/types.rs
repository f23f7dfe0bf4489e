use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Finding {
    pub subscription_id: String,
    pub name: String,
    pub severity: Severity,
    #[serde(default)]
    pub resource_group: Option<String>,
    #[serde(default)]
    pub framework: Option<String>,
    #[serde(default)]
    pub days_open: i64,
    #[serde(default)]
    pub first_evaluation_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Subscription {
    pub subscription_id: String,
    #[serde(default)]
    pub display_name: String,
}

/// Tenant-wide label together with the aggregates the report needs.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TenantEnergyLabel {
    pub label: String,
    /// Percentage of subscriptions that could be measured, 0.0 to 100.0.
    pub coverage: f64,
    pub best_label: String,
    pub worst_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AggregateEnergyLabel {
    pub label: String,
    pub subscriptions_measured: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubscriptionEnergyLabel {
    pub label: String,
    pub number_of_high_findings: usize,
    pub number_of_medium_findings: usize,
    pub number_of_low_findings: usize,
    pub max_days_open: i64,
}

/// Opaque handle to the session the engine authenticated with.
///
/// Exporters that talk to remote destinations reuse it instead of
/// authenticating a second time. It never appears in serialized output.
#[derive(Debug, Clone)]
pub struct Credentials {
    tenant_id: String,
}

impl Credentials {
    pub fn for_tenant(tenant_id: impl Into<String>) -> Self {
        Credentials {
            tenant_id: tenant_id.into(),
        }
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }
}
