use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::PropfinError;
use crate::types::{Money, Percent};
use crate::PropfinResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const HUNDRED: Decimal = dec!(100);

/// Longest tenure accepted: 60 years of monthly installments.
pub const MAX_TENURE_MONTHS: u32 = 720;

/// Convert an annual percentage rate (8.5 = 8.5%) to a monthly decimal rate.
pub fn monthly_rate(annual_rate_pct: Percent) -> Decimal {
    annual_rate_pct / MONTHS_PER_YEAR / HUNDRED
}

/// Compound growth factor (1 + r)^n for a monthly rate over n months.
pub fn compound_factor(monthly_rate: Decimal, total_months: u32) -> Decimal {
    (Decimal::ONE + monthly_rate).powi(total_months as i64)
}

/// Present-value annuity factor: (1 - (1+r)^-n) / r.
///
/// Both directions of the amortization relation are expressed through this
/// single factor, so payment -> principal -> payment round-trips exactly up
/// to decimal precision. Zero rate degenerates to straight-line (factor = n).
fn annuity_factor(monthly_rate: Decimal, total_months: u32) -> PropfinResult<Decimal> {
    if total_months == 0 {
        return Err(PropfinError::DivisionByZero {
            context: "annuity factor with zero months".into(),
        });
    }

    if monthly_rate.is_zero() {
        return Ok(Decimal::from(total_months));
    }

    let factor = compound_factor(monthly_rate, total_months);
    if factor.is_zero() {
        return Err(PropfinError::DivisionByZero {
            context: "amortization compound factor".into(),
        });
    }

    Ok((Decimal::ONE - Decimal::ONE / factor) / monthly_rate)
}

/// Equated monthly installment: P * r(1+r)^n / ((1+r)^n - 1).
pub fn monthly_payment(
    principal: Money,
    monthly_rate: Decimal,
    total_months: u32,
) -> PropfinResult<Money> {
    let annuity = annuity_factor(monthly_rate, total_months)?;
    if annuity.is_zero() {
        return Err(PropfinError::DivisionByZero {
            context: "amortization annuity factor".into(),
        });
    }
    Ok(principal / annuity)
}

/// Algebraic inverse of `monthly_payment`: the principal a given installment
/// amortizes over n months, PMT * ((1+r)^n - 1) / (r(1+r)^n).
pub fn principal_from_payment(
    payment: Money,
    monthly_rate: Decimal,
    total_months: u32,
) -> PropfinResult<Money> {
    let annuity = annuity_factor(monthly_rate, total_months)?;
    Ok(payment * annuity)
}

/// Shared precondition gate for amortized-loan inputs. Every calculator
/// funnels through this so degenerate inputs fail identically everywhere.
pub(crate) fn validate_loan_terms(
    principal: Money,
    annual_rate_pct: Percent,
    total_months: u32,
    warnings: &mut Vec<String>,
) -> PropfinResult<()> {
    if principal <= Decimal::ZERO {
        return Err(PropfinError::InvalidInput {
            field: "principal".into(),
            reason: "Loan principal must be positive".into(),
        });
    }

    if annual_rate_pct <= Decimal::ZERO {
        return Err(PropfinError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Annual interest rate must be positive".into(),
        });
    }

    if annual_rate_pct > HUNDRED {
        return Err(PropfinError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Annual interest rate above 100% is not supported".into(),
        });
    }

    if total_months == 0 {
        return Err(PropfinError::InvalidInput {
            field: "tenure".into(),
            reason: "Tenure must resolve to at least one month".into(),
        });
    }

    if total_months > MAX_TENURE_MONTHS {
        return Err(PropfinError::InvalidInput {
            field: "tenure".into(),
            reason: format!("Tenure exceeds {MAX_TENURE_MONTHS} months"),
        });
    }

    if annual_rate_pct > dec!(15) {
        warnings.push(format!(
            "Rate {annual_rate_pct}% exceeds 15%, unusually high for secured lending"
        ));
    }

    if total_months > 360 {
        warnings.push("Tenure exceeds 30 years, beyond typical lender policy".into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_rate_conversion() {
        assert_eq!(monthly_rate(dec!(12)), dec!(0.01));
        assert_eq!(monthly_rate(dec!(8.5)), dec!(8.5) / dec!(1200));
    }

    #[test]
    fn test_monthly_payment_standard_mortgage() {
        // 750k at 6.5% over 30 years: ~4,741/mo
        let r = monthly_rate(dec!(6.5));
        let payment = monthly_payment(dec!(750000), r, 360).unwrap();
        assert!(
            payment > dec!(4700) && payment < dec!(4800),
            "payment {} outside expected range",
            payment
        );
    }

    #[test]
    fn test_zero_rate_straight_line() {
        let payment = monthly_payment(dec!(360000), Decimal::ZERO, 360).unwrap();
        assert_eq!(payment, dec!(1000));

        let principal = principal_from_payment(dec!(1000), Decimal::ZERO, 360).unwrap();
        assert_eq!(principal, dec!(360000));
    }

    #[test]
    fn test_zero_months_rejected() {
        assert!(monthly_payment(dec!(100000), dec!(0.01), 0).is_err());
        assert!(principal_from_payment(dec!(1000), dec!(0.01), 0).is_err());
    }

    #[test]
    fn test_round_trip_recovers_principal() {
        // payment -> principal must invert within 1e-6 relative error
        let cases = [
            (dec!(5000000), dec!(8.5), 240u32),
            (dec!(6000000), dec!(10), 180),
            (dec!(250000), dec!(6.5), 360),
            (dec!(1000000), dec!(14.75), 84),
            (dec!(75000), dec!(0.5), 12),
        ];

        for (principal, annual_pct, months) in cases {
            let r = monthly_rate(annual_pct);
            let payment = monthly_payment(principal, r, months).unwrap();
            let recovered = principal_from_payment(payment, r, months).unwrap();
            let rel_err = ((recovered - principal) / principal).abs();
            assert!(
                rel_err < dec!(0.000001),
                "round trip drifted: {} -> {} (rel err {})",
                principal,
                recovered,
                rel_err
            );
        }
    }

    #[test]
    fn test_payment_increases_with_rate() {
        let p1 = monthly_payment(dec!(5000000), monthly_rate(dec!(8)), 240).unwrap();
        let p2 = monthly_payment(dec!(5000000), monthly_rate(dec!(9)), 240).unwrap();
        assert!(p2 > p1);
    }

    #[test]
    fn test_payment_decreases_with_tenure() {
        let short = monthly_payment(dec!(5000000), monthly_rate(dec!(8.5)), 120).unwrap();
        let long = monthly_payment(dec!(5000000), monthly_rate(dec!(8.5)), 240).unwrap();
        assert!(long < short);
    }
}
