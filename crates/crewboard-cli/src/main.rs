use clap::{Parser, Subcommand};
use crewboard_core::Config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "crewboard-cli", version, about = "Crewboard workforce scheduling CLI")]
struct Cli {
    /// Solver backend URL, overriding the configuration file
    #[arg(long, global = true)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Demo dataset access
    Demo {
        #[command(subcommand)]
        action: commands::demo::DemoAction,
    },
    /// Fetch and display the schedule of a solve job
    Schedule {
        /// Job id returned by `solve`
        job: Uuid,
    },
    /// Load a demo dataset and submit it for solving
    Solve {
        /// Demo dataset id; defaults to the configured one
        demo_data_id: Option<String>,
        /// Poll until solving finishes, printing each score update
        #[arg(long)]
        watch: bool,
    },
    /// Stop a running solve job
    Stop {
        /// Job id returned by `solve`
        job: Uuid,
    },
    /// Rank the per-constraint score breakdown of a schedule
    Analyze {
        /// Job id returned by `solve`
        #[arg(long)]
        job: Option<Uuid>,
        /// Analyze a demo dataset instead of a job
        #[arg(long, conflicts_with = "job")]
        demo_data_id: Option<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default();
    let base_url = cli
        .base_url
        .unwrap_or_else(|| config.base_url.clone());

    let result = match cli.command {
        Commands::Demo { action } => commands::demo::run(&base_url, action).await,
        Commands::Schedule { job } => commands::schedule::run(&base_url, job).await,
        Commands::Solve {
            demo_data_id,
            watch,
        } => commands::solve::run(&base_url, &config, demo_data_id, watch).await,
        Commands::Stop { job } => commands::stop::run(&base_url, job).await,
        Commands::Analyze { job, demo_data_id } => {
            commands::analyze::run(&base_url, &config, job, demo_data_id).await
        }
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
