//! Default energy label thresholds.
//!
//! A tenant is labeled by the percentage of its subscriptions that reach a
//! passing label; subscriptions and resource groups are labeled by open
//! finding counts per severity. The ladders below are passed to the engine
//! verbatim so an alternative backend can apply its own scoring against them.

/// One rung of the tenant ladder: the label earned when at least
/// `percentage` percent of measured subscriptions score that label or better.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TenantThreshold {
    pub label: &'static str,
    pub percentage: f64,
}

/// One rung of the subscription / resource group ladder.
///
/// A scope earns the label when its open findings stay at or below every
/// count and none of them has been open `days_open_less_than` days or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindingsThreshold {
    pub label: &'static str,
    pub number_of_high_findings: usize,
    pub number_of_medium_findings: usize,
    pub number_of_low_findings: usize,
    pub days_open_less_than: i64,
}

pub const TENANT_THRESHOLDS: &[TenantThreshold] = &[
    TenantThreshold {
        label: "A",
        percentage: 90.0,
    },
    TenantThreshold {
        label: "B",
        percentage: 70.0,
    },
    TenantThreshold {
        label: "C",
        percentage: 50.0,
    },
    TenantThreshold {
        label: "D",
        percentage: 30.0,
    },
    TenantThreshold {
        label: "E",
        percentage: 20.0,
    },
];

pub const SUBSCRIPTION_THRESHOLDS: &[FindingsThreshold] = &[
    FindingsThreshold {
        label: "A",
        number_of_high_findings: 0,
        number_of_medium_findings: 10,
        number_of_low_findings: 20,
        days_open_less_than: 999,
    },
    FindingsThreshold {
        label: "B",
        number_of_high_findings: 10,
        number_of_medium_findings: 20,
        number_of_low_findings: 40,
        days_open_less_than: 999,
    },
    FindingsThreshold {
        label: "C",
        number_of_high_findings: 15,
        number_of_medium_findings: 30,
        number_of_low_findings: 60,
        days_open_less_than: 999,
    },
    FindingsThreshold {
        label: "D",
        number_of_high_findings: 20,
        number_of_medium_findings: 40,
        number_of_low_findings: 80,
        days_open_less_than: 999,
    },
    FindingsThreshold {
        label: "E",
        number_of_high_findings: 25,
        number_of_medium_findings: 50,
        number_of_low_findings: 100,
        days_open_less_than: 999,
    },
];

/// Resource groups use the same ladder as subscriptions.
pub const RESOURCE_GROUP_THRESHOLDS: &[FindingsThreshold] = SUBSCRIPTION_THRESHOLDS;
