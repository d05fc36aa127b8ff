use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "traitmap")]
#[command(about = "Personality-trait analytics for teams and organizations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .traitmap.toml)
    #[arg(long, global = true, env = "TRAITMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output options shared by the analysis subcommands.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an organizational profile from individual trait profiles
    Org {
        /// JSON array of trait profiles
        profiles: PathBuf,

        /// JSON interaction matrix, one row per profile
        #[arg(long)]
        matrix: Option<PathBuf>,

        /// Earlier organizational profile (JSON output of `org`) to compare against
        #[arg(long)]
        previous: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Analyze the composition of a team
    Team {
        /// JSON array of member trait profiles
        profiles: PathBuf,

        /// JSON array of role assignments
        #[arg(long)]
        roles: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Score an executive's fit with an organization
    Fit {
        /// JSON trait profile of the executive
        executive: PathBuf,

        /// JSON array of the organization's trait profiles
        profiles: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build organizational profiles for many files in parallel
    Batch {
        /// Profile files, one organization each
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Number of worker threads (0 = all cores)
        #[arg(short = 'j', long = "jobs", default_value = "0")]
        jobs: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Initialize a traitmap configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["traitmap", "org", "team.json", "-vv", "--format", "json"])
            .unwrap();
        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Org { output, matrix, .. } => {
                assert_eq!(output.format, OutputFormat::Json);
                assert!(matrix.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn batch_requires_files() {
        assert!(Cli::try_parse_from(["traitmap", "batch"]).is_err());
    }
}
