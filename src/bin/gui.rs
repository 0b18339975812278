use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use escape_time_explorer::{ExplorerConfig, PixelsPresenterFactory, RunGuiCommand};

#[derive(Parser, Debug)]
#[command(name = "escape-time-explorer-gui", version)]
struct Cli {
    /// JSON file with the initial settings.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    escape_time_explorer::init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ExplorerConfig::from_json_file(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => ExplorerConfig::default(),
    };

    RunGuiCommand::new(PixelsPresenterFactory::new(), config).execute()
}
