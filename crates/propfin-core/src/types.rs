use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values are Decimal, never f64.
pub type Money = Decimal;

/// Annual rates expressed as percentages (8.5 = 8.5%). The monthly decimal
/// rate is derived once, inside the amortization helpers, never by callers.
pub type Percent = Decimal;

/// Year fractions or counts
pub type Years = Decimal;

/// Loan tenure, as captured from the borrower: either a years + months pair
/// or a raw installment count. Both resolve to total whole months before
/// entering any formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tenure {
    YearsMonths { years: u32, months: u32 },
    Installments(u32),
}

impl Tenure {
    /// Normalize to the total number of monthly installments.
    ///
    /// Saturates at `u32::MAX` instead of wrapping; any saturated value is
    /// far beyond the maximum accepted tenure and fails term validation.
    pub fn total_months(&self) -> u32 {
        match *self {
            Tenure::YearsMonths { years, months } => {
                years.saturating_mul(12).saturating_add(months)
            }
            Tenure::Installments(n) => n,
        }
    }
}

impl From<u32> for Tenure {
    fn from(installments: u32) -> Self {
        Tenure::Installments(installments)
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
