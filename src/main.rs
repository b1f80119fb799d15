use clap::Parser;
use papersim::cli::{Cli, Commands};
use papersim::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    papersim::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Replay(args) => {
            tracing::info!("Starting replay");
            args.execute(&config).await?;
        }
        Commands::Stats(args) => {
            tracing::info!("Computing portfolio statistics");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Simulation: {} ticks/candle at speed {}",
                config.simulation.base_ticks_per_minute, config.simulation.speed_factor
            );
            println!("  Initial cash: {}", config.simulation.initial_cash);
            println!("  History dir: {}", config.data.history_dir.display());
            println!("  Log level: {}", config.telemetry.log_level);
        }
    }

    Ok(())
}
