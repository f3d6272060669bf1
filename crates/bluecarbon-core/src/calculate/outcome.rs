use crate::model::EmissionCategory;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a CO2e total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeverityTier {
    Low,
    Medium,
    High,
}

impl SeverityTier {
    /// Advice shown alongside the tier.
    pub fn guidance(&self) -> &'static str {
        match self {
            SeverityTier::Low => "Your emissions are within acceptable limits",
            SeverityTier::Medium => "Consider implementing reduction strategies",
            SeverityTier::High => "Immediate action required to reduce emissions",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityTier::Low => write!(f, "Low"),
            SeverityTier::Medium => write!(f, "Medium"),
            SeverityTier::High => write!(f, "High"),
        }
    }
}

/// CO2e contribution of one activity category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionLineItem {
    pub category: EmissionCategory,
    /// Quantity as provided, in `unit`.
    pub raw_amount: Decimal,
    pub unit: String,
    /// `raw_amount * conversion constant * industry factor`, unrounded.
    pub co2_equivalent_tons: Decimal,
}

/// Full result of one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionResult {
    /// Industry the factor was taken from.
    pub industry_code: String,
    pub emission_factor: Decimal,
    /// Line items for present inputs, in category order.
    pub line_items: Vec<EmissionLineItem>,
    /// Exact sum of `line_items[].co2_equivalent_tons`.
    pub total_co2_tons: Decimal,
    pub severity_tier: SeverityTier,
    /// Credits to purchase, including the offset buffer.
    pub recommended_credits: u64,
    pub price_per_credit: Decimal,
    pub estimated_cost_usd: Decimal,
}

impl EmissionResult {
    pub fn line_item(&self, category: EmissionCategory) -> Option<&EmissionLineItem> {
        self.line_items.iter().find(|item| item.category == category)
    }
}
