//! quizkit CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "quizkit",
    version,
    about = "Multiple-choice quiz runner with local progress tracking"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz
    Play {
        /// Quiz ID from the catalog (defaults to the global quiz)
        #[arg(long)]
        quiz: Option<String>,

        /// Number of questions to draw (clamps to the pool size)
        #[arg(long)]
        count: Option<usize>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show attempt history
    History {
        /// Only results for this quiz ID
        #[arg(long)]
        quiz: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show per-quiz statistics
    Stats {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate the quiz catalog and question documents
    Validate {
        /// Content directory (defaults to the configured one)
        #[arg(long)]
        content: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Delete all recorded progress, irreversibly
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and sample content
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizkit=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            quiz,
            count,
            config,
        } => commands::play::execute(quiz, count, config).await,
        Commands::History { quiz, config } => commands::history::execute(quiz, config),
        Commands::Stats { config } => commands::stats::execute(config),
        Commands::Validate { content, config } => {
            commands::validate::execute(content, config).await
        }
        Commands::Clear { yes, config } => commands::clear::execute(yes, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
