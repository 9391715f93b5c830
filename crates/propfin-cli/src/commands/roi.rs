use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use propfin_core::roi::{self, RoiInput};

use crate::input;

/// Arguments for property ROI calculation
#[derive(Args)]
pub struct RoiArgs {
    /// Acquisition price of the property
    #[arg(long)]
    pub purchase_price: Option<Decimal>,

    /// Current appraised or market value
    #[arg(long)]
    pub current_value: Option<Decimal>,

    /// Holding period in years (fractions allowed, e.g. 2.5)
    #[arg(long)]
    pub years: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_roi(args: RoiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let roi_input: RoiInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RoiInput {
            purchase_price: args
                .purchase_price
                .ok_or("--purchase-price is required (or provide --input)")?,
            current_value: args
                .current_value
                .ok_or("--current-value is required (or provide --input)")?,
            holding_years: args.years.ok_or("--years is required (or provide --input)")?,
        }
    };

    let result = roi::calculate_roi(&roi_input)?;
    Ok(serde_json::to_value(result)?)
}
