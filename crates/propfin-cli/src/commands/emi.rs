use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use propfin_core::emi::{self, EmiInput};
use propfin_core::types::Tenure;

use crate::input;

/// Arguments for EMI calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Loan principal (e.g. 5000000)
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a percentage (e.g. 8.5)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Additional tenure months on top of --years
    #[arg(long, default_value = "0")]
    pub months: u32,

    /// Total installment count (alternative to --years/--months)
    #[arg(long, conflicts_with_all = ["years", "months"])]
    pub installments: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let emi_input: EmiInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let tenure = if let Some(n) = args.installments {
            Tenure::Installments(n)
        } else {
            Tenure::YearsMonths {
                years: args
                    .years
                    .ok_or("--years or --installments is required (or provide --input)")?,
                months: args.months,
            }
        };

        EmiInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
            tenure,
        }
    };

    let result = emi::calculate_emi(&emi_input)?;
    Ok(serde_json::to_value(result)?)
}
