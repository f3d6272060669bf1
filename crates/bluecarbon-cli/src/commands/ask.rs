use bluecarbon_core::advisor::{self, GREETING, QUICK_QUESTIONS};
use bluecarbon_core::error::CalcError;
use std::time::Duration;

use crate::output;

pub fn run(question: &str, delay_ms: u64, output_format: &str) -> Result<(), CalcError> {
    if question.trim().is_empty() {
        return Err(CalcError::EmptyQuestion);
    }
    let reply = with_delay(Duration::from_millis(delay_ms), || advisor::answer(question))?;

    match output_format {
        "json" => output::json::print_reply(&reply)?,
        _ => output::table::print_reply(&reply),
    }

    Ok(())
}

pub fn quick() -> Result<(), CalcError> {
    println!("{}\n", GREETING);
    println!("Quick questions:\n");
    for q in QUICK_QUESTIONS {
        println!("  - {}", q);
    }
    println!();
    Ok(())
}

pub fn strategies() -> Result<(), CalcError> {
    println!("Reduction strategies:\n");
    for s in advisor::reduction_strategies() {
        println!("  - {} ({} reduction)", s.name, s.reduction);
    }
    println!();
    Ok(())
}

/// Run `f` after an artificial pause. The pause only imitates a remote
/// assistant; the answer is already known.
fn with_delay<T>(delay: Duration, f: impl FnOnce() -> T) -> T {
    if !delay.is_zero() {
        eprintln!("Assistant is thinking...");
        tracing::debug!(delay_ms = delay.as_millis() as u64, "simulating assistant latency");
        std::thread::sleep(delay);
    }
    f()
}
