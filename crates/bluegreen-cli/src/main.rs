use clap::{Parser, Subcommand};

use bluegreen_core::SimTimings;

mod commands;
mod render;

#[derive(Parser)]
#[command(
    name = "bluegreen",
    about = "Blue-green deployment workflow simulator",
    version,
    propagate_version = true,
)]
struct Cli {
    /// Timing config file (toml). Defaults to 1s ticks.
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run scripted deploy/switch cycles
    Demo {
        /// Number of deploy-then-switch cycles
        #[arg(short = 'n', long, default_value_t = 1)]
        cycles: u32,
    },
    /// Interactive session: deploy, switch, status, quit
    Run,
    /// Print the initial cluster state
    Status {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bluegreen=warn".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let timings = match cli.config.as_deref() {
        Some(path) => SimTimings::from_file(path)?,
        None => SimTimings::default(),
    };

    match cli.command {
        Commands::Demo { cycles } => commands::demo::demo(timings, cycles).await,
        Commands::Run => commands::run::run(timings).await,
        Commands::Status { format } => commands::status::status(&format),
    }
}
