use azure_energy_labeler::errors::LabelerError;
use azure_energy_labeler::labeler::engine::{EngineRequest, LabelingEngine};
use azure_energy_labeler::labeler::snapshot::{SnapshotEngine, SubscriptionSnapshot, TenantSnapshot};
use azure_energy_labeler::labeler::thresholds;
use azure_energy_labeler::labeler::types::{
    AggregateEnergyLabel, Finding, Severity, Subscription, SubscriptionEnergyLabel,
    TenantEnergyLabel,
};

const SUB_ID: &str = "11111111-2222-3333-4444-555555555555";
const OTHER_SUB_ID: &str = "99999999-8888-7777-6666-555555555555";

fn request(tenant_id: &str) -> EngineRequest {
    EngineRequest {
        tenant_id: tenant_id.to_string(),
        tenant_thresholds: thresholds::TENANT_THRESHOLDS,
        subscription_thresholds: thresholds::SUBSCRIPTION_THRESHOLDS,
        resource_group_thresholds: thresholds::RESOURCE_GROUP_THRESHOLDS,
        frameworks: vec!["Azure Security Benchmark".to_string()],
        allowed_subscription_ids: vec![],
        denied_subscription_ids: vec![],
        denied_resource_group_names: vec![],
    }
}

fn subscription_snapshot(id: &str, display_name: &str, label: &str) -> SubscriptionSnapshot {
    SubscriptionSnapshot {
        subscription: Subscription {
            subscription_id: id.to_string(),
            display_name: display_name.to_string(),
        },
        energy_label: SubscriptionEnergyLabel {
            label: label.to_string(),
            number_of_high_findings: 1,
            number_of_medium_findings: 2,
            number_of_low_findings: 3,
            max_days_open: 10,
        },
    }
}

fn finding(subscription_id: &str, resource_group: &str, framework: Option<&str>) -> Finding {
    Finding {
        subscription_id: subscription_id.to_string(),
        name: "Storage account should restrict network access".to_string(),
        severity: Severity::High,
        resource_group: Some(resource_group.to_string()),
        framework: framework.map(str::to_string),
        days_open: 10,
        first_evaluation_date: None,
    }
}

fn snapshot() -> TenantSnapshot {
    TenantSnapshot {
        tenant_id: "tenant-1".to_string(),
        tenant_energy_label: TenantEnergyLabel {
            label: "B".to_string(),
            coverage: 82.5,
            best_label: "A".to_string(),
            worst_label: "C".to_string(),
        },
        labeled_subscriptions_energy_label: AggregateEnergyLabel {
            label: "B".to_string(),
            subscriptions_measured: 2,
        },
        subscriptions: vec![
            subscription_snapshot(SUB_ID, "Production", "C"),
            subscription_snapshot(OTHER_SUB_ID, "Sandbox", "A"),
        ],
        findings: vec![
            finding(SUB_ID, "rg-app", Some("Azure Security Benchmark")),
            finding(OTHER_SUB_ID, "rg-core", Some("Azure Security Benchmark")),
        ],
    }
}

#[test]
fn tenant_mismatch_is_an_engine_error() {
    let err = SnapshotEngine::from_snapshot(snapshot(), request("another-tenant")).unwrap_err();
    match err {
        LabelerError::Engine(message) => {
            assert!(message.contains("tenant-1"));
            assert!(message.contains("another-tenant"));
        }
        other => panic!("expected an engine error, got {other:?}"),
    }
}

#[test]
fn allowed_list_restricts_subscriptions_and_findings() {
    let mut request = request("tenant-1");
    request.allowed_subscription_ids = vec![SUB_ID.to_string()];

    let mut engine = SnapshotEngine::from_snapshot(snapshot(), request).unwrap();
    assert_eq!(engine.subscriptions().len(), 1);
    assert_eq!(engine.subscriptions()[0].subscription_id, SUB_ID);

    let findings = engine.retrieve_findings().unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].subscription_id, SUB_ID);
}

#[test]
fn denied_list_removes_subscriptions() {
    let mut request = request("tenant-1");
    request.denied_subscription_ids = vec![OTHER_SUB_ID.to_string()];

    let engine = SnapshotEngine::from_snapshot(snapshot(), request).unwrap();
    assert_eq!(engine.subscriptions().len(), 1);
    assert_eq!(engine.subscriptions()[0].subscription_id, SUB_ID);
}

#[test]
fn denied_resource_groups_drop_their_findings() {
    let mut request = request("tenant-1");
    request.denied_resource_group_names = vec!["rg-app".to_string()];

    let mut engine = SnapshotEngine::from_snapshot(snapshot(), request).unwrap();
    let findings = engine.retrieve_findings().unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].resource_group.as_deref(), Some("rg-core"));
}

#[test]
fn framework_filter_keeps_matching_and_untagged_findings() {
    let mut snapshot = snapshot();
    snapshot.findings.push(finding(SUB_ID, "rg-app", Some("SOC 2")));
    snapshot.findings.push(finding(SUB_ID, "rg-app", None));

    let mut engine = SnapshotEngine::from_snapshot(snapshot, request("tenant-1")).unwrap();
    let findings = engine.retrieve_findings().unwrap();
    // Two benchmark findings plus the untagged one; the SOC 2 finding is out.
    assert_eq!(findings.len(), 3);
    assert!(findings
        .iter()
        .all(|f| f.framework.as_deref() != Some("SOC 2")));
}

#[test]
fn empty_framework_list_keeps_everything() {
    let mut snapshot = snapshot();
    snapshot.findings.push(finding(SUB_ID, "rg-app", Some("SOC 2")));
    let mut request = request("tenant-1");
    request.frameworks = vec![];

    let mut engine = SnapshotEngine::from_snapshot(snapshot, request).unwrap();
    assert_eq!(engine.retrieve_findings().unwrap().len(), 3);
}

#[test]
fn subscription_labels_come_from_the_snapshot() {
    let engine = SnapshotEngine::from_snapshot(snapshot(), request("tenant-1")).unwrap();
    let subscription = engine.subscriptions()[0].clone();

    let label = engine.subscription_energy_label(&subscription, &[]).unwrap();
    assert_eq!(label.label, "C");
    assert_eq!(label.number_of_high_findings, 1);
}

#[test]
fn missing_subscription_label_is_an_engine_error() {
    let engine = SnapshotEngine::from_snapshot(snapshot(), request("tenant-1")).unwrap();
    let unknown = Subscription {
        subscription_id: "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee".to_string(),
        display_name: String::new(),
    };

    let err = engine.subscription_energy_label(&unknown, &[]).unwrap_err();
    assert!(matches!(err, LabelerError::Engine(_)));
}

#[test]
fn credentials_carry_the_snapshot_tenant() {
    let engine = SnapshotEngine::from_snapshot(snapshot(), request("tenant-1")).unwrap();
    assert_eq!(engine.credentials().tenant_id(), "tenant-1");
}

#[test]
fn from_file_round_trips_a_written_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, serde_json::to_string_pretty(&snapshot()).unwrap()).unwrap();

    let engine = SnapshotEngine::from_file(&path, request("tenant-1")).unwrap();
    assert_eq!(engine.tenant_energy_label().label, "B");
    assert_eq!(engine.labeled_subscriptions_energy_label().subscriptions_measured, 2);
    assert_eq!(engine.subscriptions().len(), 2);
}

#[test]
fn from_file_rejects_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, "{ not a snapshot").unwrap();

    let err = SnapshotEngine::from_file(&path, request("tenant-1")).unwrap_err();
    match err {
        LabelerError::Engine(message) => {
            assert!(message.contains("not a valid tenant snapshot"));
        }
        other => panic!("expected an engine error, got {other:?}"),
    }
}

#[test]
fn from_file_reports_unreadable_files() {
    let err = SnapshotEngine::from_file(
        std::path::Path::new("/does/not/exist.json"),
        request("tenant-1"),
    )
    .unwrap_err();
    match err {
        LabelerError::Engine(message) => assert!(message.contains("could not read")),
        other => panic!("expected an engine error, got {other:?}"),
    }
}
