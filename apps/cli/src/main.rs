mod app;
mod commands;
mod ui;
mod utils;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use crate::app::config::{parse_api_url, InspectorMode, Settings};
use crate::app::error::CliError;
use crate::commands::create::CreateCommand;
use crate::commands::schema::SchemaCommand;
use crate::commands::validate::ValidateCommand;

#[derive(Parser)]
#[command(name = "pkgsmith", version)]
#[command(about = "Create package manifests from installer downloads", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Path to a config file (defaults to ~/.config/pkgsmith/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the inspection and submission service
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory manifests are written to
    #[arg(long, global = true)]
    manifests_dir: Option<PathBuf>,

    /// Where installers are inspected
    #[arg(long, global = true, value_enum)]
    inspector: Option<InspectorMode>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a manifest from one or more installer downloads and submit it for review
    Create(CreateCommand),
    /// Check a manifest file for problems
    Validate(ValidateCommand),
    /// Print the manifest JSON Schema
    Schema(SchemaCommand),
}

impl GlobalArgs {
    fn settings(&self) -> Result<Settings, CliError> {
        let mut settings = Settings::load(self.config.as_deref())?;

        if let Some(raw) = &self.api_url {
            settings.api_url = parse_api_url(raw)?;
        }
        if let Some(dir) = &self.manifests_dir {
            settings.manifests_dir = dir.clone();
        }
        if let Some(mode) = self.inspector {
            settings.inspector = mode;
        }

        Ok(settings)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Create(cmd) => {
            let settings = cli.global.settings()?;
            tracing::debug!(?settings, "Settings loaded");
            cmd.execute(&settings).await
        }
        Commands::Validate(cmd) => cmd.execute(),
        Commands::Schema(cmd) => cmd.execute(),
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let err = err
            .downcast::<CliError>()
            .unwrap_or_else(|other| CliError::Runtime(format!("{:#}", other)));
        err.render();
        std::process::exit(1);
    }
}
