use clap::Parser;
use poly_buffer::cli::{Cli, Commands};
use poly_buffer::config::Config;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration; a missing file just means defaults
    let config = if Path::new(&cli.config).exists() {
        Config::load(&cli.config).unwrap_or_else(|e| {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            Config::default()
        })
    } else {
        Config::default()
    };

    // Initialize telemetry
    poly_buffer::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Analyze(args) => {
            tracing::info!("Starting price log analysis");
            args.execute(&config)?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Log file: {}", config.input.log_file.display());
            println!("  Threshold: {}", config.analysis.threshold);
            println!("  Report format: {:?}", config.report.format);
            println!(
                "  Telemetry: level={}, format={:?}",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
