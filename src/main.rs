use clap::Parser;

use azure_energy_labeler::cli::Cli;
use azure_energy_labeler::config::ResolvedConfig;
use azure_energy_labeler::labeler::export::FileExporter;
use azure_energy_labeler::labeler::snapshot::SnapshotEngineBuilder;
use azure_energy_labeler::{banner, logging, run};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::setup(cli.log_level, cli.log_config.as_deref()) {
        // No logger exists at this point, so the failure is printed directly.
        println!("{e}");
        std::process::exit(1);
    }

    let config = match ResolvedConfig::from_cli(cli) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    log::debug!("resolved configuration: {config:?}");

    if !config.disable_banner {
        banner::print();
    }

    let mut stdout = std::io::stdout().lock();
    match run(&config, &SnapshotEngineBuilder, &FileExporter, &mut stdout) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
