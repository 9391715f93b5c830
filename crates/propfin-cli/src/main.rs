mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::eligibility::EligibilityArgs;
use commands::emi::EmiArgs;
use commands::lap::LapArgs;
use commands::roi::RoiArgs;

/// Property-finance loan and return calculations
#[derive(Parser)]
#[command(
    name = "propfin",
    version,
    about = "Property-finance loan and return calculations",
    long_about = "A CLI for property-finance calculations with decimal precision. \
                  Supports EMI, loan-against-property sizing, investment ROI, and \
                  loan eligibility estimates."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the equated monthly installment for a loan
    Emi(EmiArgs),
    /// Size a loan against property via LTV and amortize it
    Lap(LapArgs),
    /// Annualized return on a property investment
    Roi(RoiArgs),
    /// Estimate maximum loan eligibility from income and credit score
    Eligibility(EligibilityArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Emi(args) => commands::emi::run_emi(args),
        Commands::Lap(args) => commands::lap::run_lap(args),
        Commands::Roi(args) => commands::roi::run_roi(args),
        Commands::Eligibility(args) => commands::eligibility::run_eligibility(args),
        Commands::Version => {
            println!("propfin {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
