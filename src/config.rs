//! Argument resolution.
//!
//! [`Cli`] holds exactly what clap parsed: raw strings, unsplit lists, and
//! optional values that may have come from `AZURE_LABELER_*` environment
//! variables. [`ResolvedConfig::from_cli`] turns that into the typed
//! configuration the rest of the crate runs on, enforcing the rules that
//! clap cannot express uniformly across flags and environment fallbacks:
//!
//! - `--tenant-id` must be present and non-blank.
//! - `--single-subscription-id`, `--allowed-subscription-ids` and
//!   `--denied-subscription-ids` are pairwise mutually exclusive.
//! - `--export-metrics` and `--export-all` are mutually exclusive.
//! - A single subscription id must be a well-formed UUID.
//! - `--export-path` must be a local path or a blob container URL.
//!
//! Values that resolve to the empty string count as "not set", so an empty
//! environment variable never triggers an exclusivity error.

use std::fmt;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::errors::LabelerError;
use crate::labeler::validate::{self, DestinationPath};

/// Verbosity of the built-in console logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Maps to the level filter of the `log` facade. `Critical` collapses
    /// into `Error`, which is the closest filter the facade offers.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error | LogLevel::Critical => log::LevelFilter::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warning => write!(f, "warning"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Critical => write!(f, "critical"),
        }
    }
}

/// Fully validated run configuration.
///
/// Constructed only through [`ResolvedConfig::from_cli`]; once a value of
/// this type exists, the argument rules listed in the [module docs](self)
/// are known to hold.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub tenant_id: String,
    pub single_subscription_id: Option<String>,
    pub allowed_subscription_ids: Vec<String>,
    pub denied_subscription_ids: Vec<String>,
    pub denied_resource_group_names: Vec<String>,
    pub frameworks: Vec<String>,
    pub export_path: Option<DestinationPath>,
    /// `true` unless `--export-metrics` was given.
    pub export_all: bool,
    pub to_json: bool,
    pub disable_spinner: bool,
    pub disable_banner: bool,
    pub log_level: LogLevel,
    pub log_config: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Validates parsed arguments into a [`ResolvedConfig`].
    ///
    /// # Errors
    ///
    /// - [`MissingRequiredArguments`](LabelerError::MissingRequiredArguments)
    ///   when no tenant id was resolved from the flag or the environment.
    /// - [`MutuallyExclusiveArguments`](LabelerError::MutuallyExclusiveArguments)
    ///   when conflicting subscription selectors or export modes were given.
    /// - [`InvalidSubscriptionId`](LabelerError::InvalidSubscriptionId) when
    ///   `--single-subscription-id` is not a UUID.
    /// - [`InvalidExportPath`](LabelerError::InvalidExportPath) when
    ///   `--export-path` is a URL that is not a blob container.
    pub fn from_cli(cli: Cli) -> Result<Self, LabelerError> {
        let tenant_id = match cli.tenant_id {
            Some(tenant_id) if !tenant_id.trim().is_empty() => tenant_id,
            _ => {
                return Err(LabelerError::MissingRequiredArguments {
                    name: "--tenant-id",
                    env: "AZURE_LABELER_TENANT_ID",
                })
            }
        };

        let single_subscription_id = cli
            .single_subscription_id
            .filter(|id| !id.trim().is_empty());
        let allowed_subscription_ids = parse_delimited(cli.allowed_subscription_ids.as_deref());
        let denied_subscription_ids = parse_delimited(cli.denied_subscription_ids.as_deref());
        let denied_resource_group_names =
            parse_delimited(cli.denied_resource_group_names.as_deref());
        let frameworks = parse_delimited(Some(&cli.frameworks));

        exclusive(
            "--single-subscription-id",
            single_subscription_id.is_some(),
            "--allowed-subscription-ids",
            !allowed_subscription_ids.is_empty(),
        )?;
        exclusive(
            "--single-subscription-id",
            single_subscription_id.is_some(),
            "--denied-subscription-ids",
            !denied_subscription_ids.is_empty(),
        )?;
        exclusive(
            "--allowed-subscription-ids",
            !allowed_subscription_ids.is_empty(),
            "--denied-subscription-ids",
            !denied_subscription_ids.is_empty(),
        )?;
        exclusive(
            "--export-metrics",
            cli.export_metrics,
            "--export-all",
            cli.export_all,
        )?;

        if let Some(id) = &single_subscription_id {
            if !validate::is_valid_subscription_id(id) {
                return Err(LabelerError::InvalidSubscriptionId(id.clone()));
            }
        }

        let export_path = cli
            .export_path
            .as_deref()
            .map(DestinationPath::parse)
            .transpose()?;

        Ok(ResolvedConfig {
            tenant_id,
            single_subscription_id,
            allowed_subscription_ids,
            denied_subscription_ids,
            denied_resource_group_names,
            frameworks,
            export_path,
            // Exporting everything is the default; --export-metrics is the
            // only way to narrow it, and it conflicts with an explicit
            // --export-all (checked above).
            export_all: !cli.export_metrics,
            to_json: cli.to_json,
            disable_spinner: cli.disable_spinner,
            disable_banner: cli.disable_banner,
            log_level: cli.log_level,
            log_config: cli.log_config,
        })
    }
}

/// Splits a comma-separated value into trimmed, non-empty items.
///
/// `None` and values that trim away to nothing both produce an empty vector.
/// Splitting is idempotent: feeding a produced item back in returns it
/// unchanged.
///
/// # Examples
///
/// ```
/// use azure_energy_labeler::config::parse_delimited;
///
/// assert_eq!(parse_delimited(Some("a, b ,c")), vec!["a", "b", "c"]);
/// assert!(parse_delimited(Some(" , ")).is_empty());
/// assert!(parse_delimited(None).is_empty());
/// ```
pub fn parse_delimited(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

fn exclusive(
    first: &'static str,
    first_set: bool,
    second: &'static str,
    second_set: bool,
) -> Result<(), LabelerError> {
    if first_set && second_set {
        return Err(LabelerError::MutuallyExclusiveArguments { first, second });
    }
    Ok(())
}
