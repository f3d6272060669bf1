use crate::calculate::engine::{CREDIT_BUFFER_RATIO, HIGH_THRESHOLD_TONS, MEDIUM_THRESHOLD_TONS};
use crate::calculate::outcome::{EmissionResult, SeverityTier};
use crate::model::EmissionCategory;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const TRACE_SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStepType {
    SelectProfile,
    ConvertUnits,
    ApplyFactor,
    SumTotal,
    ClassifyTier,
    ApplyBuffer,
    PriceCredits,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceStep {
    pub step_type: TraceStepType,
    pub message: String,
}

/// Explanation of one line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEntry {
    pub entry_id: String,
    pub category: EmissionCategory,
    pub raw_amount: Decimal,
    pub unit: String,
    pub conversion_constant: Decimal,
    pub emission_factor: Decimal,
    pub co2_equivalent_tons: Decimal,
    /// One-line formula, e.g. `50000 kWh x 0.5 x 2.1 = 52500 t CO2e`.
    pub formula: String,
    pub steps: Vec<TraceStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceDecisionTarget {
    Total,
    SeverityTier,
    Credits,
    Cost,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceDecision {
    pub decision_id: String,
    pub target: TraceDecisionTarget,
    pub value: String,
    pub reason: String,
    pub steps: Vec<TraceStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceBundle {
    pub trace_schema_version: String,
    pub industry_code: String,
    pub entries: Vec<TraceEntry>,
    pub decisions: Vec<TraceDecision>,
}

impl Default for TraceBundle {
    fn default() -> Self {
        Self {
            trace_schema_version: TRACE_SCHEMA_VERSION.to_string(),
            industry_code: String::new(),
            entries: Vec::new(),
            decisions: Vec::new(),
        }
    }
}

/// Explain how `result` was derived.
pub fn build_trace(result: &EmissionResult) -> TraceBundle {
    let entries = result
        .line_items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let constant = item.category.conversion_constant();
            let converted = item.raw_amount * constant;
            TraceEntry {
                entry_id: format!("ent_{}_{}", idx, item.category.field_name()),
                category: item.category,
                raw_amount: item.raw_amount,
                unit: item.unit.clone(),
                conversion_constant: constant,
                emission_factor: result.emission_factor,
                co2_equivalent_tons: item.co2_equivalent_tons,
                formula: format!(
                    "{} {} x {} x {} = {} t CO2e",
                    item.raw_amount,
                    item.unit,
                    constant,
                    result.emission_factor,
                    item.co2_equivalent_tons.normalize()
                ),
                steps: vec![
                    TraceStep {
                        step_type: TraceStepType::ConvertUnits,
                        message: format!(
                            "{}: {} {} x {} t/{} = {} t",
                            item.category.label(),
                            item.raw_amount,
                            item.unit,
                            constant,
                            item.unit,
                            converted.normalize()
                        ),
                    },
                    TraceStep {
                        step_type: TraceStepType::ApplyFactor,
                        message: format!(
                            "Industry '{}' factor {} -> {} t CO2e",
                            result.industry_code,
                            result.emission_factor,
                            item.co2_equivalent_tons.normalize()
                        ),
                    },
                ],
            }
        })
        .collect();

    TraceBundle {
        trace_schema_version: TRACE_SCHEMA_VERSION.to_string(),
        industry_code: result.industry_code.clone(),
        entries,
        decisions: build_decisions(result),
    }
}

fn build_decisions(result: &EmissionResult) -> Vec<TraceDecision> {
    let total = result.total_co2_tons.normalize();
    let parts: Vec<String> = result
        .line_items
        .iter()
        .map(|i| i.co2_equivalent_tons.normalize().to_string())
        .collect();

    let total_reason = if parts.is_empty() {
        "No activity quantities provided".to_string()
    } else {
        format!("{} = {}", parts.join(" + "), total)
    };

    let tier_reason = match result.severity_tier {
        SeverityTier::Low => format!("{} < {}", total, MEDIUM_THRESHOLD_TONS),
        SeverityTier::Medium => format!(
            "{} <= {} < {}",
            MEDIUM_THRESHOLD_TONS, total, HIGH_THRESHOLD_TONS
        ),
        SeverityTier::High => format!("{} >= {}", total, HIGH_THRESHOLD_TONS),
    };

    vec![
        TraceDecision {
            decision_id: "dec_total".into(),
            target: TraceDecisionTarget::Total,
            value: total.to_string(),
            reason: total_reason.clone(),
            steps: vec![
                TraceStep {
                    step_type: TraceStepType::SelectProfile,
                    message: format!(
                        "Industry '{}' with emission factor {}",
                        result.industry_code, result.emission_factor
                    ),
                },
                TraceStep {
                    step_type: TraceStepType::SumTotal,
                    message: total_reason,
                },
            ],
        },
        TraceDecision {
            decision_id: "dec_tier".into(),
            target: TraceDecisionTarget::SeverityTier,
            value: result.severity_tier.to_string(),
            reason: tier_reason.clone(),
            steps: vec![TraceStep {
                step_type: TraceStepType::ClassifyTier,
                message: format!("{} -> {}", tier_reason, result.severity_tier),
            }],
        },
        TraceDecision {
            decision_id: "dec_credits".into(),
            target: TraceDecisionTarget::Credits,
            value: result.recommended_credits.to_string(),
            reason: format!(
                "ceil({} x {}) = {}",
                total, CREDIT_BUFFER_RATIO, result.recommended_credits
            ),
            steps: vec![TraceStep {
                step_type: TraceStepType::ApplyBuffer,
                message: format!(
                    "{} t plus 20% offset buffer, rounded up to whole credits",
                    total
                ),
            }],
        },
        TraceDecision {
            decision_id: "dec_cost".into(),
            target: TraceDecisionTarget::Cost,
            value: result.estimated_cost_usd.normalize().to_string(),
            reason: format!(
                "{} credits x {} USD = {} USD",
                result.recommended_credits,
                result.price_per_credit,
                result.estimated_cost_usd.normalize()
            ),
            steps: vec![TraceStep {
                step_type: TraceStepType::PriceCredits,
                message: format!("Price per credit {} USD", result.price_per_credit),
            }],
        },
    ]
}
