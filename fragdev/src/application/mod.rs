pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use frag_core::error::Result;
use frag_core::{ConfigSources, FragConfig};
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = FragConfig::resolve(&ConfigSources {
        config_file: cli.config,
        default_dataset: cli.default_dataset.into(),
        path_dataset: cli.path_dataset,
        fragment_size: cli.fragment_size,
    })?;
    debug!(
        dataset = %cfg.path_dataset.display(),
        fragment_size = cfg.fragment_size,
        "config resolved"
    );

    match cli.command.unwrap_or(Commands::Split) {
        Commands::Split => handlers::handle_split(&cfg),
        Commands::Load { long } => handlers::handle_load(&cfg, long),
        Commands::Plan => handlers::handle_plan(&cfg),
    }
}
