use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::PropfinError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Years};
use crate::PropfinResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a property return-on-investment calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiInput {
    /// Acquisition price of the property
    pub purchase_price: Money,
    /// Current appraised or market value
    pub current_value: Money,
    /// Holding period in years; fractions are allowed
    pub holding_years: Years,
}

/// ROI calculation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiOutput {
    /// Total percentage gain over the holding period
    pub total_return_pct: Percent,
    /// Total return divided by holding years (simple annualization)
    pub annual_roi_pct: Percent,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Annualized return on a property investment.
///
/// Annualization is simple linear division of the total return by the
/// holding period, not CAGR.
pub fn calculate_roi(input: &RoiInput) -> PropfinResult<ComputationOutput<RoiOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input, &mut warnings)?;

    let total_return_pct =
        (input.current_value - input.purchase_price) / input.purchase_price * dec!(100);
    let annual_roi_pct = total_return_pct / input.holding_years;

    let output = RoiOutput {
        total_return_pct,
        annual_roi_pct,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Property ROI (Simple Annualization)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &RoiInput, warnings: &mut Vec<String>) -> PropfinResult<()> {
    if input.purchase_price <= Decimal::ZERO {
        return Err(PropfinError::InvalidInput {
            field: "purchase_price".into(),
            reason: "Purchase price must be positive".into(),
        });
    }

    if input.current_value < Decimal::ZERO {
        return Err(PropfinError::InvalidInput {
            field: "current_value".into(),
            reason: "Current value cannot be negative".into(),
        });
    }

    if input.holding_years <= Decimal::ZERO {
        return Err(PropfinError::InvalidInput {
            field: "holding_years".into(),
            reason: "Holding period must be positive".into(),
        });
    }

    if input.current_value < input.purchase_price {
        warnings.push("Current value is below purchase price; return is negative".into());
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
