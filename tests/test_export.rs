use azure_energy_labeler::errors::LabelerError;
use azure_energy_labeler::labeler::export::{
    Exporter, ExporterArguments, FileExporter, LabeledScope, ALL_TENANT_EXPORT_TYPES,
    EXPORT_FILE_NAME, SUBSCRIPTION_METRIC_EXPORT_TYPES, TENANT_METRIC_EXPORT_TYPES,
};
use azure_energy_labeler::labeler::types::{Credentials, Finding, Severity, Subscription};
use azure_energy_labeler::labeler::validate::DestinationPath;

const SUB_ID: &str = "11111111-2222-3333-4444-555555555555";

fn tenant_arguments() -> ExporterArguments {
    ExporterArguments {
        export_types: ALL_TENANT_EXPORT_TYPES,
        id: "tenant-1".to_string(),
        energy_label: "B".to_string(),
        defender_for_cloud_findings: vec![Finding {
            subscription_id: SUB_ID.to_string(),
            name: "Secure transfer to storage accounts should be enabled".to_string(),
            severity: Severity::High,
            resource_group: Some("rg-app".to_string()),
            framework: Some("Azure Security Benchmark".to_string()),
            days_open: 30,
            first_evaluation_date: None,
        }],
        labeled_subscriptions: LabeledScope::Tenant(vec![Subscription {
            subscription_id: SUB_ID.to_string(),
            display_name: "Production".to_string(),
        }]),
        credentials: Credentials::for_tenant("tenant-1"),
    }
}

fn export_to(dir: &std::path::Path, arguments: &ExporterArguments) -> serde_json::Value {
    FileExporter
        .export(arguments, &DestinationPath::Local(dir.to_path_buf()))
        .unwrap();
    let contents = std::fs::read_to_string(dir.join(EXPORT_FILE_NAME)).unwrap();
    serde_json::from_str(&contents).unwrap()
}

#[test]
fn full_export_includes_findings() {
    let dir = tempfile::tempdir().unwrap();
    let parsed = export_to(dir.path(), &tenant_arguments());

    assert_eq!(parsed["id"], "tenant-1");
    assert_eq!(parsed["energy_label"], "B");
    assert_eq!(parsed["export_types"].as_array().unwrap().len(), 3);
    let findings = parsed["defender_for_cloud_findings"].as_array().unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["severity"], "high");
}

#[test]
fn metrics_export_omits_findings() {
    let dir = tempfile::tempdir().unwrap();
    let mut arguments = tenant_arguments();
    arguments.export_types = TENANT_METRIC_EXPORT_TYPES;

    let parsed = export_to(dir.path(), &arguments);
    assert!(parsed.get("defender_for_cloud_findings").is_none());
    assert!(parsed["labeled_subscriptions"].is_array());
}

#[test]
fn single_scope_serializes_as_one_subscription() {
    let dir = tempfile::tempdir().unwrap();
    let mut arguments = tenant_arguments();
    arguments.export_types = SUBSCRIPTION_METRIC_EXPORT_TYPES;
    arguments.id = SUB_ID.to_string();
    arguments.labeled_subscriptions = LabeledScope::Single(Subscription {
        subscription_id: SUB_ID.to_string(),
        display_name: "Production".to_string(),
    });

    let parsed = export_to(dir.path(), &arguments);
    assert!(parsed["labeled_subscriptions"].is_object());
    assert_eq!(parsed["labeled_subscriptions"]["subscription_id"], SUB_ID);
}

#[test]
fn missing_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("deeply").join("nested").join("export");

    FileExporter
        .export(&tenant_arguments(), &DestinationPath::Local(nested.clone()))
        .unwrap();
    assert!(nested.join(EXPORT_FILE_NAME).is_file());
}

#[test]
fn credentials_never_reach_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let parsed = export_to(dir.path(), &tenant_arguments());

    assert!(parsed.get("credentials").is_none());
    assert!(!serde_json::to_string(&parsed).unwrap().contains("credentials"));
}

#[test]
fn blob_destinations_are_rejected() {
    let destination =
        DestinationPath::parse("https://mystorage.blob.core.windows.net/labels/").unwrap();

    let err = FileExporter
        .export(&tenant_arguments(), &destination)
        .unwrap_err();
    match err {
        LabelerError::Export(message) => {
            assert!(message.contains("mystorage.blob.core.windows.net"));
        }
        other => panic!("expected an export error, got {other:?}"),
    }
}
