use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use propfin_core::eligibility::{self, EligibilityInput};

use crate::input;

/// Arguments for loan eligibility estimation
#[derive(Args)]
pub struct EligibilityArgs {
    /// Gross monthly income
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Sum of EMIs already being serviced
    #[arg(long, default_value = "0")]
    pub existing_emi: Decimal,

    /// CIBIL-style credit score (300-900)
    #[arg(long)]
    pub credit_score: Option<u16>,

    /// Annual interest rate of the prospective loan, as a percentage
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure of the prospective loan in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_eligibility(args: EligibilityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let elig_input: EligibilityInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        EligibilityInput {
            monthly_income: args
                .income
                .ok_or("--income is required (or provide --input)")?,
            existing_emi: args.existing_emi,
            credit_score: args
                .credit_score
                .ok_or("--credit-score is required (or provide --input)")?,
            annual_rate_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
            tenure_years: args.years.ok_or("--years is required (or provide --input)")?,
        }
    };

    let result = eligibility::calculate_eligibility(&elig_input)?;
    Ok(serde_json::to_value(result)?)
}
