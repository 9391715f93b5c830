pub mod eligibility;
pub mod emi;
pub mod lap;
pub mod roi;
