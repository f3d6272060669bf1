use bluecarbon_core::advisor::AdvisorReply;
use bluecarbon_core::calculate::EmissionResult;
use bluecarbon_core::error::CalcError;
use bluecarbon_core::trace::TraceBundle;
use serde::Serialize;

#[derive(Serialize)]
struct CalculationOutput<'a> {
    #[serde(flatten)]
    result: &'a EmissionResult,
    guidance: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a TraceBundle>,
}

pub fn print_calculation(
    result: &EmissionResult,
    trace: Option<&TraceBundle>,
) -> Result<(), CalcError> {
    let out = CalculationOutput {
        result,
        guidance: result.severity_tier.guidance(),
        trace,
    };
    let json = serde_json::to_string_pretty(&out)?;
    println!("{json}");
    Ok(())
}

pub fn print_reply(reply: &AdvisorReply) -> Result<(), CalcError> {
    let json = serde_json::to_string_pretty(reply)?;
    println!("{json}");
    Ok(())
}
