//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use super::session::Session;
use pipetrack::output::OutputMode;

/// pipetrack - Pipeline dependency resolution for production tracking
#[derive(Parser, Debug)]
#[command(
    name = "pipetrack",
    version,
    about = "Pipeline dependency resolution for production tracking",
    long_about = "Resolve which upstream tasks a task depends on.\n\n\
                  Pipeline rules map each step to the steps that feed it.\n\
                  Shot tasks also depend on their linked assets, preferring Rig over Model."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.pipetrack/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Snapshot file to read records from (overrides store.snapshot)
    #[arg(long, global = true, value_name = "SNAPSHOT")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the dependencies of a task
    Deps {
        /// Task ID
        task_id: i64,
    },

    /// List valid versions of a task, newest first
    Versions {
        /// Task ID
        task_id: i64,
    },

    /// List tasks assigned to a user
    Tasks {
        /// User ID
        #[arg(short, long)]
        user: i64,
    },

    /// Print the work-area path of a task
    Path {
        /// Task ID
        task_id: i64,

        /// Studio work-area root
        #[arg(short, long, value_name = "DIR")]
        work_area: PathBuf,
    },

    /// Show the active pipeline rules
    Rules {
        /// Validate the rules and fail on errors
        #[arg(long)]
        check: bool,
    },

    /// Show version
    Version,
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

    let session = Session::new(cli.config, cli.store);

    match cli.command {
        Some(Command::Deps { task_id }) => commands::deps(&session, task_id, output_mode),
        Some(Command::Versions { task_id }) => commands::versions(&session, task_id, output_mode),
        Some(Command::Tasks { user }) => commands::tasks(&session, user, output_mode),
        Some(Command::Path { task_id, work_area }) => {
            commands::path(&session, task_id, &work_area, output_mode)
        },
        Some(Command::Rules { check }) => commands::rules(&session, check, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": pipetrack::VERSION
                    })
                );
            } else {
                println!("pipetrack v{}", pipetrack::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": pipetrack::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("pipetrack v{}", pipetrack::VERSION);
                println!("\nRun 'pipetrack --help' for usage");
                println!("Run 'pipetrack deps <task-id> --store <snapshot.json>' to get started");
            }
            Ok(())
        },
    }
}
