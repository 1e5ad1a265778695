//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use receipt_points::output::OutputMode;

/// receipt-points - Award points to purchase receipts
#[derive(Parser, Debug)]
#[command(
    name = "receipt-points",
    version,
    about = "Award points to purchase receipts",
    long_about = "Validate purchase receipts and award them points.\n\n\
                  Run `serve` for the HTTP service, or `score` to score a receipt file locally."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP service
    Serve {
        /// Config file (default: ~/.config/receipt-points/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,

        /// Number of worker threads
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Score a receipt JSON file and show each rule's contribution
    Score {
        /// Path to the receipt JSON file
        file: PathBuf,
    },

    /// Check a receipt JSON file without scoring it
    Validate {
        /// Path to the receipt JSON file
        file: PathBuf,
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

    match cli.command {
        Some(Command::Serve {
            config,
            host,
            port,
            workers,
        }) => commands::serve(config.as_deref(), host, port, workers),
        Some(Command::Score { file }) => commands::score(&file, output_mode),
        Some(Command::Validate { file }) => commands::validate(&file, output_mode),
        Some(Command::Version) => {
            print_version(output_mode);
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("receipt-points v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'receipt-points --help' for usage");
                println!("Run 'receipt-points serve' to start the service");
            }
            Ok(())
        },
    }
}

fn print_version(output_mode: OutputMode) {
    if output_mode == OutputMode::Json {
        println!("{}", serde_json::json!({ "version": env!("CARGO_PKG_VERSION") }));
    } else {
        println!("receipt-points v{}", env!("CARGO_PKG_VERSION"));
    }
}
