//! growthpath CLI: take the assessments, read the report, follow the plan.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "growthpath",
    version,
    about = "Personality, memory and communication assessments with an improvement plan"
)]
struct Cli {
    /// Store file (overrides the config and GROWTHPATH_STORE)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter growthpath.toml
    Init,

    /// Take the 15-question Big Five personality test
    Personality {
        /// All 15 answers (1-5, or "-" to skip), comma-separated
        #[arg(long)]
        answers: Option<String>,
    },

    /// Play the short-term, long-term and working memory games
    Memory,

    /// Record a (simulated) speech and score it
    Speech {
        /// Speaking topic, 1-8 (random when omitted)
        #[arg(long)]
        topic: Option<usize>,

        /// Recording length in seconds; skips the interactive recording
        #[arg(long)]
        duration: Option<u32>,

        /// Seed for the metric sampling
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the results of one assessment: personality, memory or speech
    Results { assessment: String },

    /// Show which assessments are done and the overall progress
    Status,

    /// Show the final report once all three assessments are done
    Report {
        /// Output format: text, json, markdown, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Create, view and track the improvement plan
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },

    /// Delete all stored results, plans and progress
    Reset,
}

#[derive(Subcommand)]
enum PlanAction {
    /// Create a plan from the final report
    Create {
        /// Plan length in days: 45, 90 or 180
        #[arg(long)]
        duration: Option<u32>,

        /// Seed for the exercise selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the plan week by week
    Show {
        /// Output format: text, json, markdown, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Toggle a week between done and not done
    Complete {
        #[arg(long)]
        week: u32,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = commands::GlobalOpts {
        store: cli.store,
        config: cli.config,
    };

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Personality { answers } => commands::personality::execute(&opts, answers),
        Commands::Memory => commands::memory::execute(&opts).await,
        Commands::Speech {
            topic,
            duration,
            seed,
        } => commands::speech::execute(&opts, topic, duration, seed).await,
        Commands::Results { assessment } => commands::results::execute(&opts, assessment),
        Commands::Status => commands::status::execute(&opts),
        Commands::Report { format, out } => commands::report::execute(&opts, format, out),
        Commands::Plan { action } => match action {
            PlanAction::Create { duration, seed } => {
                commands::plan::create(&opts, duration, seed)
            }
            PlanAction::Show { format, out } => commands::plan::show(&opts, format, out),
            PlanAction::Complete { week } => commands::plan::complete(&opts, week),
        },
        Commands::Reset => commands::reset::execute(&opts),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
