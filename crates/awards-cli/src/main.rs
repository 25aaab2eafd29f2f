// Rust guideline compliant 2026-10-19

//! Commit Awards CLI Application
//!
//! Command-line interface for importing classified commits, browsing them and
//! handing out awards.

use awards_app::{ImportKind, Workspace};
use awards_cli::commands;
use awards_cli::commands::list::ListArgs;
use awards_cli::{create_formatter, should_use_color, OutputFormatter};
use awards_core::OutputFormat as ConfigFormat;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "awards",
    version,
    about = "Commit Awards: browse, vote on and celebrate funny commits",
    long_about = "Commit Awards imports a commits file classified for humor and an optional author-details file, merges them by sha, and lets you filter, sort, vote on and favorite the result.",
    after_help = "Examples:\n  awards init\n  awards import commits funny_commits.json\n  awards import authors commit_details.json\n  awards apply\n  awards list --filter funny --search fix --sort votes\n  awards vote c8a64cd --by 2\n  awards awards --limit 5\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level for diagnostics on stderr (overrides AWARDS_LOG)
    #[arg(long, global = true, value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: Option<String>,

    /// Workspace root (defaults to the current directory)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a Commit Awards workspace
    Init,

    /// Validate and stage a data file
    Import {
        #[command(subcommand)]
        source: ImportSource,
    },

    /// Merge staged data into the commit list
    Apply,

    /// List commits after filtering and sorting
    List {
        /// Filter by verdict (all, funny, serious)
        #[arg(long)]
        filter: Option<String>,

        /// Case-insensitive search over message, author and username
        #[arg(long)]
        search: Option<String>,

        /// Sort key (probability, date, votes)
        #[arg(long)]
        sort: Option<String>,

        /// Sort direction (asc, desc)
        #[arg(long)]
        order: Option<String>,

        /// Maximum number of commits to show
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show one commit
    Show {
        /// Commit sha (full or unique prefix)
        sha: String,
    },

    /// Toggle a commit's favorite flag
    Favorite {
        /// Commit sha (full or unique prefix)
        sha: String,
    },

    /// Vote for a commit
    Vote {
        /// Commit sha (full or unique prefix)
        sha: String,

        /// Vote down instead of up
        #[arg(long)]
        down: bool,

        /// Number of votes to add
        #[arg(long, default_value_t = 1)]
        by: u32,
    },

    /// Show commit counts
    Stats,

    /// Show the funniest, most voted and favorite commits
    Awards {
        /// Maximum entries in each top list
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show staged imports and the applied dataset
    Status,
}

#[derive(Debug, clap::Subcommand)]
enum ImportSource {
    /// Import a commits file (sha, message, probability, is_funny)
    Commits {
        /// Path to the JSON file
        path: PathBuf,
    },

    /// Import an author-details file (sha, author, repo)
    Authors {
        /// Path to the JSON file
        path: PathBuf,
    },
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_env("AWARDS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Resolves the output format: flags first, then the workspace config.
fn resolve_format(cli: &Cli) -> ConfigFormat {
    match cli.format {
        Some(OutputFormat::Json) => ConfigFormat::Json,
        Some(OutputFormat::Table) => ConfigFormat::Table,
        Some(OutputFormat::Plain) => ConfigFormat::Plain,
        None if cli.json => ConfigFormat::Json,
        None => Workspace::discover(cli.dir.as_deref())
            .and_then(|workspace| workspace.load_config())
            .map(|config| config.output_format)
            .unwrap_or_default(),
    }
}

fn run(command: Option<Commands>, root: Option<&Path>, formatter: &dyn OutputFormatter) -> anyhow::Result<()> {
    match command {
        Some(Commands::Init) => {
            commands::init::execute(root)?;
        }
        Some(Commands::Import { source }) => match source {
            ImportSource::Commits { path } => {
                commands::import::execute(root, ImportKind::Commits, &path, formatter)?;
            }
            ImportSource::Authors { path } => {
                commands::import::execute(root, ImportKind::Authors, &path, formatter)?;
            }
        },
        Some(Commands::Apply) => {
            commands::apply::execute(root, formatter)?;
        }
        Some(Commands::List {
            filter,
            search,
            sort,
            order,
            limit,
        }) => {
            let args = ListArgs {
                filter,
                search,
                sort,
                order,
                limit,
            };
            commands::list::execute(root, args, formatter)?;
        }
        Some(Commands::Show { sha }) => {
            commands::show::execute(root, &sha, formatter)?;
        }
        Some(Commands::Favorite { sha }) => {
            commands::favorite::execute(root, &sha, formatter)?;
        }
        Some(Commands::Vote { sha, down, by }) => {
            commands::vote::execute(root, &sha, down, by, formatter)?;
        }
        Some(Commands::Stats) => {
            commands::stats::execute(root, formatter)?;
        }
        Some(Commands::Awards { limit }) => {
            commands::awards::execute(root, limit, formatter)?;
        }
        Some(Commands::Status) => {
            commands::status::execute(root, formatter)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let use_color = !cli.no_color && should_use_color();
    let format = resolve_format(&cli);
    let formatter = create_formatter(format, use_color);

    match run(cli.command, cli.dir.as_deref(), formatter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            if format == ConfigFormat::Json {
                println!("{}", formatter.format_error(&err));
            } else {
                eprintln!("{}", formatter.format_error(&err));
            }
            ExitCode::FAILURE
        }
    }
}
