use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use dockhand::app::App;
use dockhand::config::Config;

/// Dockhand - a terminal UI for the Docker CLI
#[derive(Parser, Debug)]
#[command(name = "dockhand")]
#[command(about = "A terminal UI for managing containers, images, networks and volumes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<std::path::PathBuf>,

    /// Runtime binary to invoke (e.g. docker, podman)
    #[arg(short = 'D', long, value_name = "BIN", global = true)]
    docker: Option<String>,

    /// Enable debug logging to file
    #[arg(short, long, global = true)]
    debug: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the TUI (default)
    #[command(alias = "tui")]
    Run,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Version) => {
            print_version();
            Ok(())
        }
        _ => run_tui(cli).await,
    }
}

fn print_version() {
    println!("dockhand {}", env!("CARGO_PKG_VERSION"));
    println!(
        "Platform: {} {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
}

async fn run_tui(cli: Cli) -> Result<()> {
    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default().unwrap_or_default(),
    };

    // Override config with CLI arguments
    let config = apply_cli_overrides(config, &cli);

    init_logging(&cli, &config);

    info!("Starting Dockhand v{}", env!("CARGO_PKG_VERSION"));
    info!("Runtime command: {}", config.docker.command);

    // Run the TUI application
    let mut app = App::new(config).await?;
    app.run().await?;

    info!("Dockhand shutting down gracefully");
    Ok(())
}

/// Initialize logging (file only, not stdout, which would corrupt the TUI)
fn init_logging(cli: &Cli, config: &Config) {
    let log_level = if cli.debug {
        "debug"
    } else if cli.log_level != "info" {
        &cli.log_level
    } else {
        &config.logging.level
    };

    let log_path = config
        .logging
        .file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("dockhand.log"));

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        tracing_subscriber::fmt()
            .with_env_filter(format!("dockhand={}", log_level))
            .with_writer(std::sync::Arc::new(file))
            .init();
    } else {
        // If the log file can't be opened, disable logging
        tracing_subscriber::fmt().with_env_filter("off").init();
        warn!("Could not open log file: {}", log_path.display());
    }
}

fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(binary) = &cli.docker {
        config.docker.command = binary.clone();
    }
    config
}
