pub mod amortization;
pub mod error;
pub mod types;

#[cfg(feature = "emi")]
pub mod emi;

#[cfg(feature = "lap")]
pub mod lap;

#[cfg(feature = "roi")]
pub mod roi;

#[cfg(feature = "eligibility")]
pub mod eligibility;

pub use error::PropfinError;
pub use types::*;

/// Standard result type for all propfin operations
pub type PropfinResult<T> = Result<T, PropfinError>;
