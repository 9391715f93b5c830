use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{self, validate_loan_terms};
use crate::error::PropfinError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::PropfinResult;

/// Share of disposable income a lender will service as EMI (the 40% rule).
const AFFORDABILITY_RATIO: Decimal = dec!(0.40);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a loan eligibility estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityInput {
    /// Gross monthly income
    pub monthly_income: Money,
    /// Sum of EMIs already being serviced
    pub existing_emi: Money,
    /// CIBIL-style credit score, 300-900
    pub credit_score: u16,
    /// Annual interest rate of the prospective loan, as a percentage
    pub annual_rate_pct: Percent,
    /// Tenure of the prospective loan in whole years
    pub tenure_years: u32,
}

/// Credit-score band. Each band maps to a fixed haircut on the
/// reverse-amortized loan amount; lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditTier {
    Excellent,
    Good,
    Fair,
    BelowAverage,
    Poor,
}

impl CreditTier {
    pub fn from_score(score: u16) -> Self {
        match score {
            750.. => CreditTier::Excellent,
            700..=749 => CreditTier::Good,
            650..=699 => CreditTier::Fair,
            600..=649 => CreditTier::BelowAverage,
            _ => CreditTier::Poor,
        }
    }

    pub fn multiplier(&self) -> Decimal {
        match self {
            CreditTier::Excellent => dec!(1.00),
            CreditTier::Good => dec!(0.90),
            CreditTier::Fair => dec!(0.75),
            CreditTier::BelowAverage => dec!(0.50),
            CreditTier::Poor => dec!(0.25),
        }
    }

    /// Borrower-facing description of the band's effect.
    pub fn impact(&self) -> &'static str {
        match self {
            CreditTier::Excellent => "Excellent - Maximum loan eligibility",
            CreditTier::Good => "Good - 90% of max eligibility",
            CreditTier::Fair => "Fair - 75% of max eligibility",
            CreditTier::BelowAverage => "Below Average - 50% of max eligibility",
            CreditTier::Poor => "Poor - Loan approval unlikely",
        }
    }
}

/// Loan eligibility result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityOutput {
    /// Income left after existing obligations
    pub disposable_income: Money,
    /// EMI the borrower can afford: disposable_income * 0.40
    pub eligible_emi: Money,
    /// Principal the eligible EMI amortizes at the given rate and tenure
    pub base_loan_amount: Money,
    /// base_loan_amount after the credit-tier haircut
    pub max_loan_amount: Money,
    /// Credit-score band applied
    pub credit_tier: CreditTier,
    /// Borrower-facing description of the band
    pub credit_impact: String,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Estimate the maximum loan a borrower qualifies for.
///
/// The affordable EMI (40% of disposable income) is reverse-amortized into
/// a principal using the algebraic inverse of the EMI formula, then scaled
/// by the credit-tier multiplier.
pub fn calculate_eligibility(
    input: &EligibilityInput,
) -> PropfinResult<ComputationOutput<EligibilityOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input, &mut warnings)?;

    let disposable_income = input.monthly_income - input.existing_emi;
    let eligible_emi = disposable_income * AFFORDABILITY_RATIO;

    let total_months = input.tenure_years.saturating_mul(12);
    validate_loan_terms(eligible_emi, input.annual_rate_pct, total_months, &mut warnings)?;

    let rate = amortization::monthly_rate(input.annual_rate_pct);
    let base_loan_amount = amortization::principal_from_payment(eligible_emi, rate, total_months)?;

    let credit_tier = CreditTier::from_score(input.credit_score);
    let max_loan_amount = base_loan_amount * credit_tier.multiplier();

    let output = EligibilityOutput {
        disposable_income,
        eligible_emi,
        base_loan_amount,
        max_loan_amount,
        credit_tier,
        credit_impact: credit_tier.impact().to_string(),
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Loan Eligibility (40% Affordability + Reverse Amortization)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &EligibilityInput, warnings: &mut Vec<String>) -> PropfinResult<()> {
    if input.monthly_income <= Decimal::ZERO {
        return Err(PropfinError::InvalidInput {
            field: "monthly_income".into(),
            reason: "Monthly income must be positive".into(),
        });
    }

    if input.existing_emi < Decimal::ZERO {
        return Err(PropfinError::InvalidInput {
            field: "existing_emi".into(),
            reason: "Existing EMI cannot be negative".into(),
        });
    }

    if input.existing_emi >= input.monthly_income {
        return Err(PropfinError::InvalidInput {
            field: "existing_emi".into(),
            reason: "Existing obligations leave no disposable income".into(),
        });
    }

    if !(300..=900).contains(&input.credit_score) {
        return Err(PropfinError::InvalidInput {
            field: "credit_score".into(),
            reason: "Credit score must be between 300 and 900".into(),
        });
    }

    if input.tenure_years == 0 {
        return Err(PropfinError::InvalidInput {
            field: "tenure_years".into(),
            reason: "Tenure must be at least 1 year".into(),
        });
    }

    if CreditTier::from_score(input.credit_score) == CreditTier::Poor {
        warnings.push(format!(
            "Credit score {} is below 600, loan approval unlikely",
            input.credit_score
        ));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
