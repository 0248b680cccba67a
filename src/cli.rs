//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands;
use sigowners::output::OutputMode;

/// sigowners - find who should look at an issue or pull request
#[derive(Parser, Debug)]
#[command(
    name = "sigowners",
    version,
    about = "Resolve SIG owners and preview the welcome reply",
    long_about = "Resolve the owners of an issue or pull request from a SIG registry.\n\n\
                  Labels route events to a SIG; changed files or the repository\n\
                  name pick the owners; the reply names them (or the fallback contacts)."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Bot configuration file (TOML); defaults apply when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Preview the reply to a pull request event
    Pr {
        /// Pull request event (JSON)
        #[arg(long)]
        event: PathBuf,

        /// Directory serving `{owner}/{repo}/{path}` documents
        #[arg(long)]
        store: PathBuf,
    },

    /// Preview the reply to an issue comment event
    Issue {
        /// Issue comment event (JSON)
        #[arg(long)]
        event: PathBuf,

        /// Directory serving `{owner}/{repo}/{path}` documents
        #[arg(long)]
        store: PathBuf,
    },

    /// Show the owners resolved for a label
    Owners {
        /// Directory serving `{owner}/{repo}/{path}` documents
        #[arg(long)]
        store: PathBuf,

        /// Group label (e.g. sig/storage)
        #[arg(short, long)]
        label: String,

        /// Changed file path (repeatable)
        #[arg(short, long = "file")]
        files: Vec<String>,

        /// Repository name, instead of files
        #[arg(short, long, conflicts_with = "files")]
        repo: Option<String>,
    },

    /// Resolve an event against Gitee and post the reply (feature `gitee`)
    Handle {
        /// Kind of event
        #[arg(value_enum)]
        kind: EventKind,

        /// Event payload (JSON)
        #[arg(long)]
        event: PathBuf,

        /// API endpoint
        #[arg(long, default_value = sigowners::adapters::GITEE_API_URL)]
        api_url: String,
    },

    /// Show version
    Version,
}

/// Kind of event payload
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Pull request event
    Pr,
    /// Issue comment event
    Issue,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = cli.config.as_deref();

    match cli.command {
        Some(Command::Pr { event, store }) => {
            commands::preview(EventKind::Pr, &event, &store, config, output_mode)
        },
        Some(Command::Issue { event, store }) => {
            commands::preview(EventKind::Issue, &event, &store, config, output_mode)
        },
        Some(Command::Owners {
            store,
            label,
            files,
            repo,
        }) => commands::owners(&store, &label, &files, repo.as_deref(), config, output_mode),
        Some(Command::Handle {
            kind,
            event,
            api_url,
        }) => commands::handle(kind, &event, &api_url, config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": sigowners::VERSION
                    })
                );
            } else {
                println!("sigowners v{}", sigowners::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": sigowners::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("sigowners v{}", sigowners::VERSION);
                println!("\nRun 'sigowners --help' for usage");
            }
            Ok(())
        },
    }
}
