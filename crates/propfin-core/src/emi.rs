use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{self, validate_loan_terms};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Tenure};
use crate::PropfinResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for an equated monthly installment calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiInput {
    /// Loan principal in currency units
    pub principal: Money,
    /// Annual interest rate as a percentage (8.5 = 8.5%)
    pub annual_rate_pct: Percent,
    /// Loan tenure: years + months, or a raw installment count
    pub tenure: Tenure,
}

/// EMI calculation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiOutput {
    /// Fixed monthly installment
    pub monthly_payment: Money,
    /// Number of installments the tenure normalized to
    pub total_months: u32,
    /// Interest paid over the full tenure
    pub total_interest: Money,
    /// Principal plus interest: monthly_payment * total_months
    pub total_payable: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Calculate the equated monthly installment for a loan.
///
/// `total_payable` and `total_interest` are derived from the computed
/// payment, never recomputed independently, so the three figures are always
/// internally consistent.
pub fn calculate_emi(input: &EmiInput) -> PropfinResult<ComputationOutput<EmiOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let total_months = input.tenure.total_months();
    validate_loan_terms(input.principal, input.annual_rate_pct, total_months, &mut warnings)?;

    let rate = amortization::monthly_rate(input.annual_rate_pct);
    let monthly_payment = amortization::monthly_payment(input.principal, rate, total_months)?;

    let total_payable = monthly_payment * Decimal::from(total_months);
    let total_interest = total_payable - input.principal;

    let output = EmiOutput {
        monthly_payment,
        total_months,
        total_interest,
        total_payable,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Equated Monthly Installment (Reducing Balance)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::MAX_TENURE_MONTHS;
    use crate::error::PropfinError;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    /// Standard test loan: 50L home loan at 8.5% over 20 years
    fn sample_input() -> EmiInput {
        EmiInput {
            principal: dec!(5000000),
            annual_rate_pct: dec!(8.5),
            tenure: Tenure::YearsMonths {
                years: 20,
                months: 0,
            },
        }
    }

    #[test]
    fn test_emi_20_year_home_loan() {
        let result = calculate_emi(&sample_input()).unwrap();
        let out = &result.result;

        assert_eq!(out.total_months, 240);

        // 5,000,000 at 8.5% over 240 months: ~43,391/mo
        assert!(
            (out.monthly_payment - dec!(43391)).abs() < dec!(1),
            "EMI {} outside expected range",
            out.monthly_payment
        );
    }

    #[test]
    fn test_totals_derived_from_payment() {
        let result = calculate_emi(&sample_input()).unwrap();
        let out = &result.result;

        assert_eq!(out.total_payable, out.monthly_payment * dec!(240));
        assert_eq!(out.total_interest, out.total_payable - dec!(5000000));

        // ~1.04 crore payable, ~54L of it interest
        assert!(out.total_payable > dec!(10400000) && out.total_payable < dec!(10420000));
        assert!(out.total_interest > dec!(5400000) && out.total_interest < dec!(5420000));
    }

    #[test]
    fn test_installment_count_tenure_matches_years_months() {
        let mut by_count = sample_input();
        by_count.tenure = Tenure::Installments(240);

        let a = calculate_emi(&sample_input()).unwrap().result;
        let b = calculate_emi(&by_count).unwrap().result;

        assert_eq!(a.monthly_payment, b.monthly_payment);
        assert_eq!(a.total_payable, b.total_payable);
    }

    #[test]
    fn test_mixed_years_and_months() {
        let mut input = sample_input();
        input.tenure = Tenure::YearsMonths {
            years: 10,
            months: 6,
        };
        let out = calculate_emi(&input).unwrap().result;
        assert_eq!(out.total_months, 126);
    }

    #[test]
    fn test_rate_monotonicity() {
        let mut cheap = sample_input();
        cheap.annual_rate_pct = dec!(7.5);
        let mut dear = sample_input();
        dear.annual_rate_pct = dec!(9.5);

        let low = calculate_emi(&cheap).unwrap().result.monthly_payment;
        let high = calculate_emi(&dear).unwrap().result.monthly_payment;
        assert!(high > low);
    }

    #[test]
    fn test_tenure_monotonicity() {
        let mut short = sample_input();
        short.tenure = Tenure::Installments(120);
        let mut long = sample_input();
        long.tenure = Tenure::Installments(300);

        let s = calculate_emi(&short).unwrap().result;
        let l = calculate_emi(&long).unwrap().result;

        // Longer tenure: smaller installment, more interest overall
        assert!(l.monthly_payment < s.monthly_payment);
        assert!(l.total_interest > s.total_interest);
    }

    #[test]
    fn test_zero_principal_rejected() {
        let mut input = sample_input();
        input.principal = Decimal::ZERO;
        match calculate_emi(&input).unwrap_err() {
            PropfinError::InvalidInput { field, .. } => assert_eq!(field, "principal"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_principal_rejected() {
        let mut input = sample_input();
        input.principal = dec!(-100);
        assert!(calculate_emi(&input).is_err());
    }

    #[test]
    fn test_zero_rate_rejected() {
        let mut input = sample_input();
        input.annual_rate_pct = Decimal::ZERO;
        match calculate_emi(&input).unwrap_err() {
            PropfinError::InvalidInput { field, .. } => assert_eq!(field, "annual_rate_pct"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_tenure_rejected() {
        let mut input = sample_input();
        input.tenure = Tenure::Installments(0);
        assert!(calculate_emi(&input).is_err());
    }

    #[test]
    fn test_excessive_tenure_rejected() {
        let mut input = sample_input();
        input.tenure = Tenure::Installments(MAX_TENURE_MONTHS + 1);
        assert!(calculate_emi(&input).is_err());
    }

    #[test]
    fn test_overflowing_tenure_rejected() {
        // A year count whose month total exceeds u32::MAX must be rejected,
        // not wrapped into a small accepted tenure
        let mut input = sample_input();
        input.tenure = Tenure::YearsMonths {
            years: 357_913_942,
            months: 0,
        };
        match calculate_emi(&input).unwrap_err() {
            PropfinError::InvalidInput { field, .. } => assert_eq!(field, "tenure"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_high_rate_warning() {
        let mut input = sample_input();
        input.annual_rate_pct = dec!(18);
        let result = calculate_emi(&input).unwrap();
        assert!(result.warnings.iter().any(|w| w.contains("exceeds 15%")));
    }

    #[test]
    fn test_methodology_string() {
        let result = calculate_emi(&sample_input()).unwrap();
        assert_eq!(
            result.methodology,
            "Equated Monthly Installment (Reducing Balance)"
        );
    }
}
