pub mod engine;
pub mod outcome;

pub use engine::{
    calculate, classify, estimate_cost, recommend_credits, CalculateOptions, CREDIT_BUFFER_RATIO,
};
pub use outcome::{EmissionLineItem, EmissionResult, SeverityTier};
