use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Loan calculators
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    let input: propfin_core::emi::EmiInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = propfin_core::emi::calculate_emi(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_lap(input_json: String) -> NapiResult<String> {
    let input: propfin_core::lap::LapInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = propfin_core::lap::calculate_lap(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_eligibility(input_json: String) -> NapiResult<String> {
    let input: propfin_core::eligibility::EligibilityInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        propfin_core::eligibility::calculate_eligibility(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Returns
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_roi(input_json: String) -> NapiResult<String> {
    let input: propfin_core::roi::RoiInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = propfin_core::roi::calculate_roi(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
