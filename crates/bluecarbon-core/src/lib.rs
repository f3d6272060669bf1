pub mod advisor;
pub mod calculate;
pub mod error;
pub mod market;
pub mod model;
pub mod parsing;
pub mod profiles;
pub mod trace;

use calculate::{CalculateOptions, EmissionResult};
use error::CalcError;
use model::ActivityForm;
use profiles::schema::IndustryProfile;
use trace::TraceBundle;

/// Main API entry point: parse a raw form and calculate its emissions.
///
/// Fails on the first unparsable field before any profile lookup, so a form
/// with both a bad amount and an unknown industry reports the amount.
pub fn calculate_form(
    form: &ActivityForm,
    profiles: &[IndustryProfile],
    options: &CalculateOptions,
) -> Result<EmissionResult, CalcError> {
    let input = parsing::parse_form(form)?;
    calculate::calculate(&input, profiles, options)
}

/// Like [`calculate_form`], also returning the derivation trace.
pub fn calculate_form_traced(
    form: &ActivityForm,
    profiles: &[IndustryProfile],
    options: &CalculateOptions,
) -> Result<(EmissionResult, TraceBundle), CalcError> {
    let result = calculate_form(form, profiles, options)?;
    let trace = trace::build_trace(&result);
    Ok((result, trace))
}
