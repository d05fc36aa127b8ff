use anyhow::Result;
use traitmap::cli::{self, Commands};
use traitmap::commands::{self, BatchConfig, FitConfig, OrgConfig, TeamConfig};
use traitmap::config::{self, TraitmapConfig};
use tracing_subscriber::EnvFilter;

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("traitmap={default_level}")));

    // stderr keeps JSON on stdout clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(path: Option<&std::path::Path>) -> Result<TraitmapConfig> {
    match path {
        Some(path) => Ok(config::load_config_from_path(path)?),
        None => Ok(config::load_config()),
    }
}

// Main orchestrator function
fn main() -> Result<()> {
    let cli = cli::parse_args();
    init_logging(cli.verbosity);

    let config_path = cli.config;
    let settings = || load_settings(config_path.as_deref());

    match cli.command {
        Commands::Init { force } => commands::init_config(force),
        Commands::Org {
            profiles,
            matrix,
            previous,
            output,
        } => commands::handle_org(
            &settings()?,
            OrgConfig {
                profiles,
                matrix,
                previous,
                format: output.format.into(),
                output: output.output,
            },
        ),
        Commands::Team {
            profiles,
            roles,
            output,
        } => commands::handle_team(
            &settings()?,
            TeamConfig {
                profiles,
                roles,
                format: output.format.into(),
                output: output.output,
            },
        ),
        Commands::Fit {
            executive,
            profiles,
            output,
        } => commands::handle_fit(
            &settings()?,
            FitConfig {
                executive,
                profiles,
                format: output.format.into(),
                output: output.output,
            },
        ),
        Commands::Batch {
            files,
            jobs,
            output,
        } => commands::handle_batch(
            &settings()?,
            BatchConfig {
                files,
                jobs,
                format: output.format.into(),
                output: output.output,
            },
        ),
    }
}
