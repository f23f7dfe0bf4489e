use thiserror::Error;

/// Failures surfaced by argument resolution, the labeling engine, and export.
///
/// Every variant maps to exit code 1 in the binary; argument syntax errors
/// (unknown flags, malformed values) are clap's domain and exit with 2.
#[derive(Debug, Error)]
pub enum LabelerError {
    #[error("the required argument {name} was not provided and {env} is not set")]
    MissingRequiredArguments {
        name: &'static str,
        env: &'static str,
    },

    #[error("the arguments {first} and {second} are mutually exclusive")]
    MutuallyExclusiveArguments {
        first: &'static str,
        second: &'static str,
    },

    #[error("Subscription id {0} provided does not seem to be valid.")]
    InvalidSubscriptionId(String),

    #[error(
        "{0} is an invalid export location. Example --export-path /a/directory or \
         --export-path https://<<my_storage_account>>.blob.core.windows.net/<<my_container>>/"
    )]
    InvalidExportPath(String),

    #[error("subscription {0} was not found in the tenant")]
    SubscriptionNotFound(String),

    #[error("labeling engine error: {0}")]
    Engine(String),

    #[error("export failed: {0}")]
    Export(String),

    #[error("File \"{0}\" is not valid json, cannot continue.")]
    InvalidLoggerConfig(String),

    #[error("could not set up logging: {0}")]
    LoggerInit(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
