use clap::Parser;
use std::path::PathBuf;

use crate::config::LogLevel;

/// Raw command line surface.
///
/// Every value here is optional or defaulted on purpose: requiredness,
/// mutual exclusion and value validation are applied afterwards by
/// [`ResolvedConfig::from_cli`](crate::config::ResolvedConfig::from_cli),
/// so that those failures are reported through the logger with exit code 1
/// while clap keeps handling syntax errors with exit code 2.
#[derive(Debug, Parser)]
#[command(
    name = "azure-energy-labeler",
    version,
    about = "Generates energy labels for an Azure tenant and its subscriptions \
             based on Defender for Cloud findings"
)]
pub struct Cli {
    /// The id of the tenant to label
    #[arg(long, short = 't', env = "AZURE_LABELER_TENANT_ID", value_name = "ID")]
    pub tenant_id: Option<String>,

    /// Label a single subscription instead of the whole tenant
    #[arg(
        long,
        short = 's',
        env = "AZURE_LABELER_SINGLE_SUBSCRIPTION_ID",
        value_name = "ID"
    )]
    pub single_subscription_id: Option<String>,

    /// Comma-separated subscription ids; only these are measured
    #[arg(
        long,
        short = 'a',
        env = "AZURE_LABELER_ALLOWED_SUBSCRIPTION_IDS",
        value_name = "IDS"
    )]
    pub allowed_subscription_ids: Option<String>,

    /// Comma-separated subscription ids excluded from measurement
    #[arg(
        long,
        short = 'd',
        env = "AZURE_LABELER_DENIED_SUBSCRIPTION_IDS",
        value_name = "IDS"
    )]
    pub denied_subscription_ids: Option<String>,

    /// Comma-separated resource group names whose findings are ignored
    #[arg(
        long,
        short = 'n',
        env = "AZURE_LABELER_DENIED_RESOURCE_GROUP_NAMES",
        value_name = "NAMES"
    )]
    pub denied_resource_group_names: Option<String>,

    /// Comma-separated compliance frameworks findings must belong to
    #[arg(
        long,
        short = 'f',
        env = "AZURE_LABELER_FRAMEWORKS",
        default_value = "Azure Security Benchmark",
        value_name = "NAMES"
    )]
    pub frameworks: String,

    /// Export report data to a local directory or a blob container URL
    #[arg(
        long,
        short = 'p',
        env = "AZURE_LABELER_EXPORT_PATH",
        value_name = "PATH"
    )]
    pub export_path: Option<String>,

    /// Export metrics only, without the findings data
    #[arg(long, short = 'm', env = "AZURE_LABELER_EXPORT_METRICS")]
    pub export_metrics: bool,

    /// Export metrics and findings data (the default)
    #[arg(long, short = 'e', env = "AZURE_LABELER_EXPORT_ALL")]
    pub export_all: bool,

    /// Print the report as JSON instead of a table
    #[arg(long, short = 'j', env = "AZURE_LABELER_TO_JSON")]
    pub to_json: bool,

    /// Do not show a spinner while findings are retrieved
    #[arg(long, short = 'S', env = "AZURE_LABELER_DISABLE_SPINNER")]
    pub disable_spinner: bool,

    /// Do not print the startup banner
    #[arg(long, short = 'b', env = "AZURE_LABELER_DISABLE_BANNER")]
    pub disable_banner: bool,

    /// Log level for the built-in console logger
    #[arg(
        long,
        short = 'L',
        env = "AZURE_LABELER_LOG_LEVEL",
        default_value_t = LogLevel::Info,
        value_enum,
        value_name = "LEVEL"
    )]
    pub log_level: LogLevel,

    /// JSON logging configuration file, overrides --log-level
    #[arg(
        long,
        short = 'l',
        env = "AZURE_LABELER_LOG_CONFIG",
        value_name = "FILE"
    )]
    pub log_config: Option<PathBuf>,
}
