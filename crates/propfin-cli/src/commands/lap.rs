use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use propfin_core::lap::{self, LapInput};

use crate::input;

/// Arguments for loan-against-property sizing
#[derive(Args)]
pub struct LapArgs {
    /// Appraised property value (e.g. 10000000)
    #[arg(long)]
    pub property_value: Option<Decimal>,

    /// Loan-to-value ratio as a percentage
    #[arg(long, default_value = "60")]
    pub ltv: Decimal,

    /// Annual interest rate as a percentage
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_lap(args: LapArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let lap_input: LapInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LapInput {
            property_value: args
                .property_value
                .ok_or("--property-value is required (or provide --input)")?,
            ltv_pct: args.ltv,
            annual_rate_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
            tenure_years: args.years.ok_or("--years is required (or provide --input)")?,
        }
    };

    let result = lap::calculate_lap(&lap_input)?;
    Ok(serde_json::to_value(result)?)
}
