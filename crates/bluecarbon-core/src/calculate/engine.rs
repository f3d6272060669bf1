use crate::calculate::outcome::{EmissionLineItem, EmissionResult, SeverityTier};
use crate::error::CalcError;
use crate::market::REFERENCE_PRICE_PER_CREDIT_USD;
use crate::model::{ActivityInput, EmissionCategory};
use crate::profiles::schema::{find_unique, IndustryProfile};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Credits recommended per ton of CO2e: a flat 20% offset buffer.
///
/// This is a fixed domain policy, not a tuned value.
pub const CREDIT_BUFFER_RATIO: Decimal = Decimal::from_parts(12, 0, 0, false, 1);

/// Totals at or above this are `Medium`.
pub const MEDIUM_THRESHOLD_TONS: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Totals at or above this are `High`.
pub const HIGH_THRESHOLD_TONS: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// Largest fractional scale a `Decimal` product can hold without rounding.
const MAX_PRODUCT_SCALE: u32 = 28;

/// Caller-supplied pricing for the cost estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculateOptions {
    pub price_per_credit: Decimal,
}

impl Default for CalculateOptions {
    fn default() -> Self {
        Self {
            price_per_credit: REFERENCE_PRICE_PER_CREDIT_USD,
        }
    }
}

/// Convert activity quantities into CO2e line items, a total, a severity tier
/// and a credit recommendation.
///
/// Fails without a partial result if the industry code does not match exactly
/// one profile, or if any present quantity is negative, too large, or too
/// small to survive conversion. Totals whose credits or cost would not be
/// representable are rejected rather than saturated.
pub fn calculate(
    input: &ActivityInput,
    profiles: &[IndustryProfile],
    options: &CalculateOptions,
) -> Result<EmissionResult, CalcError> {
    let profile =
        find_unique(profiles, &input.industry_code).ok_or_else(|| CalcError::InvalidIndustry {
            code: input.industry_code.clone(),
        })?;
    let factor = profile.emission_factor;

    let mut line_items = Vec::new();
    let mut total = Decimal::ZERO;

    for (category, amount) in input.present_amounts() {
        let item = line_item(category, amount, factor)?;
        total = total.checked_add(item.co2_equivalent_tons).ok_or_else(|| {
            CalcError::invalid_amount(category.field_name(), "total exceeds representable range")
        })?;
        line_items.push(item);
    }

    // Blame the largest contributor when the total is too large to price.
    let dominant_field = line_items
        .iter()
        .max_by_key(|item| item.co2_equivalent_tons)
        .map(|item| item.category.field_name())
        .unwrap_or("total_co2_tons");

    let severity_tier = classify(total);
    let recommended_credits = checked_credits(total).ok_or_else(|| {
        CalcError::invalid_amount(
            dominant_field,
            format!("{} t CO2e needs more credits than can be represented", total),
        )
    })?;
    let estimated_cost_usd = Decimal::from(recommended_credits)
        .checked_mul(options.price_per_credit)
        .ok_or_else(|| {
            CalcError::invalid_amount(
                "price_per_credit",
                format!(
                    "{} credits at {} exceeds representable range",
                    recommended_credits, options.price_per_credit
                ),
            )
        })?;

    tracing::debug!(
        industry = %profile.code,
        factor = %factor,
        items = line_items.len(),
        total = %total,
        tier = %severity_tier,
        credits = recommended_credits,
        "calculated emissions"
    );

    Ok(EmissionResult {
        industry_code: profile.code.clone(),
        emission_factor: factor,
        line_items,
        total_co2_tons: total,
        severity_tier,
        recommended_credits,
        price_per_credit: options.price_per_credit,
        estimated_cost_usd,
    })
}

fn line_item(
    category: EmissionCategory,
    amount: Decimal,
    factor: Decimal,
) -> Result<EmissionLineItem, CalcError> {
    let field = category.field_name();
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(CalcError::invalid_amount(
            field,
            format!("{} is negative", amount),
        ));
    }

    let amount = amount.abs();
    let constant = category.conversion_constant();

    // Decimal keeps at most 28 fractional digits; beyond that the product is
    // rounded and a positive amount could collapse to zero.
    let product_scale =
        amount.normalize().scale() + constant.normalize().scale() + factor.normalize().scale();
    if product_scale > MAX_PRODUCT_SCALE {
        return Err(CalcError::invalid_amount(
            field,
            format!("{} has too many decimal places to convert exactly", amount),
        ));
    }

    let co2 = amount
        .checked_mul(constant)
        .and_then(|v| v.checked_mul(factor))
        .ok_or_else(|| CalcError::invalid_amount(field, format!("{} is out of range", amount)))?;

    if co2.is_zero() && !amount.is_zero() {
        return Err(CalcError::invalid_amount(
            field,
            format!("{} is too small to convert", amount),
        ));
    }

    Ok(EmissionLineItem {
        category,
        raw_amount: amount,
        unit: category.unit().to_string(),
        co2_equivalent_tons: co2,
    })
}

/// Classify a CO2e total. Thresholds are inclusive lower bounds.
pub fn classify(total_co2_tons: Decimal) -> SeverityTier {
    if total_co2_tons >= HIGH_THRESHOLD_TONS {
        SeverityTier::High
    } else if total_co2_tons >= MEDIUM_THRESHOLD_TONS {
        SeverityTier::Medium
    } else {
        SeverityTier::Low
    }
}

/// Credits to buy for a CO2e total: `ceil(total * CREDIT_BUFFER_RATIO)`.
///
/// Negative totals give 0; totals past `u64::MAX` credits saturate.
/// [`calculate`] rejects such totals instead.
pub fn recommend_credits(total_co2_tons: Decimal) -> u64 {
    checked_credits(total_co2_tons).unwrap_or(u64::MAX)
}

/// `ceil(total * CREDIT_BUFFER_RATIO)`, or `None` if it does not fit in `u64`.
fn checked_credits(total_co2_tons: Decimal) -> Option<u64> {
    if total_co2_tons <= Decimal::ZERO {
        return Some(0);
    }
    total_co2_tons
        .checked_mul(CREDIT_BUFFER_RATIO)
        .and_then(|buffered| buffered.ceil().to_u64())
}

/// Cost of `credits` at `price_per_credit`, saturating at the decimal range.
pub fn estimate_cost(credits: u64, price_per_credit: Decimal) -> Decimal {
    Decimal::from(credits).saturating_mul(price_per_credit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn profiles() -> Vec<IndustryProfile> {
        vec![
            IndustryProfile::new("manufacturing", dec!(2.1)),
            IndustryProfile::new("energy", dec!(3.2)),
            IndustryProfile::new("construction", dec!(1.5)),
        ]
    }

    fn full_input(code: &str) -> ActivityInput {
        ActivityInput {
            industry_code: code.into(),
            energy_consumption_kwh: Some(dec!(50000)),
            fuel_consumption_liters: Some(dec!(2000)),
            transportation_km: Some(dec!(10000)),
            waste_generated_kg: Some(dec!(5000)),
        }
    }

    #[test]
    fn test_manufacturing_scenario() {
        let result =
            calculate(&full_input("manufacturing"), &profiles(), &CalculateOptions::default())
                .unwrap();
        let co2: Vec<Decimal> = result
            .line_items
            .iter()
            .map(|i| i.co2_equivalent_tons)
            .collect();
        assert_eq!(co2, vec![dec!(52500), dec!(9660), dec!(4200), dec!(1050)]);
        assert_eq!(result.total_co2_tons, dec!(67410));
        assert_eq!(result.severity_tier, SeverityTier::High);
        assert_eq!(result.recommended_credits, 80892);
        assert_eq!(result.estimated_cost_usd, dec!(2022300));
    }

    #[test]
    fn test_unknown_industry() {
        let err = calculate(&full_input("mining"), &profiles(), &CalculateOptions::default())
            .unwrap_err();
        match err {
            CalcError::InvalidIndustry { code } => assert_eq!(code, "mining"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_industry_code() {
        let input = ActivityInput {
            energy_consumption_kwh: Some(dec!(10)),
            ..ActivityInput::default()
        };
        assert!(matches!(
            calculate(&input, &profiles(), &CalculateOptions::default()),
            Err(CalcError::InvalidIndustry { .. })
        ));
    }

    #[test]
    fn test_industry_match_is_exact() {
        assert!(calculate(&full_input("Manufacturing"), &profiles(), &CalculateOptions::default())
            .is_err());
    }

    #[test]
    fn test_ambiguous_industry_rejected() {
        let mut table = profiles();
        table.push(IndustryProfile::new("energy", dec!(9.9)));
        assert!(matches!(
            calculate(&full_input("energy"), &table, &CalculateOptions::default()),
            Err(CalcError::InvalidIndustry { .. })
        ));
    }

    #[test]
    fn test_absent_fields_omitted() {
        let input = ActivityInput {
            transportation_km: Some(dec!(100)),
            ..ActivityInput::new("construction")
        };
        let result = calculate(&input, &profiles(), &CalculateOptions::default()).unwrap();
        assert_eq!(result.line_items.len(), 1);
        assert_eq!(result.line_items[0].category, EmissionCategory::Transport);
        assert_eq!(result.line_items[0].unit, "km");
        assert_eq!(result.total_co2_tons, dec!(30));
        assert_eq!(result.severity_tier, SeverityTier::Low);
    }

    #[test]
    fn test_no_fields_gives_zero_total() {
        let result = calculate(
            &ActivityInput::new("energy"),
            &profiles(),
            &CalculateOptions::default(),
        )
        .unwrap();
        assert!(result.line_items.is_empty());
        assert_eq!(result.total_co2_tons, Decimal::ZERO);
        assert_eq!(result.recommended_credits, 0);
        assert_eq!(result.estimated_cost_usd, Decimal::ZERO);
    }

    #[test]
    fn test_zero_amount_still_listed() {
        let input = ActivityInput {
            waste_generated_kg: Some(Decimal::ZERO),
            ..ActivityInput::new("energy")
        };
        let result = calculate(&input, &profiles(), &CalculateOptions::default()).unwrap();
        assert_eq!(result.line_items.len(), 1);
        assert_eq!(result.line_items[0].co2_equivalent_tons, Decimal::ZERO);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let input = ActivityInput {
            energy_consumption_kwh: Some(dec!(10)),
            fuel_consumption_liters: Some(dec!(-1)),
            ..ActivityInput::new("energy")
        };
        let err = calculate(&input, &profiles(), &CalculateOptions::default()).unwrap_err();
        match err {
            CalcError::InvalidAmount { field, .. } => assert_eq!(field, "fuel_consumption_liters"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_overflow_rejected() {
        let input = ActivityInput {
            fuel_consumption_liters: Some(Decimal::MAX),
            ..ActivityInput::new("energy")
        };
        assert!(matches!(
            calculate(&input, &profiles(), &CalculateOptions::default()),
            Err(CalcError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_credits_beyond_u64_rejected() {
        let input = ActivityInput {
            energy_consumption_kwh: Some(dec!(100000000000000000000)),
            transportation_km: Some(dec!(5)),
            ..ActivityInput::new("manufacturing")
        };
        let err = calculate(&input, &profiles(), &CalculateOptions::default()).unwrap_err();
        match err {
            CalcError::InvalidAmount { field, .. } => assert_eq!(field, "energy_consumption_kwh"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_largest_credits_still_exact() {
        // 1e18 kWh * 0.5 * 2.1 = 1.05e18 t -> 1.26e18 credits, within u64
        let input = ActivityInput {
            energy_consumption_kwh: Some(dec!(1000000000000000000)),
            ..ActivityInput::new("manufacturing")
        };
        let result = calculate(&input, &profiles(), &CalculateOptions::default()).unwrap();
        assert_eq!(
            Decimal::from(result.recommended_credits),
            (result.total_co2_tons * CREDIT_BUFFER_RATIO).ceil()
        );
    }

    #[test]
    fn test_unrepresentable_cost_rejected() {
        let options = CalculateOptions {
            price_per_credit: Decimal::MAX,
        };
        let input = ActivityInput {
            energy_consumption_kwh: Some(dec!(100)),
            ..ActivityInput::new("construction")
        };
        let err = calculate(&input, &profiles(), &options).unwrap_err();
        assert!(matches!(err, CalcError::InvalidAmount { ref field, .. } if field == "price_per_credit"));
    }

    #[test]
    fn test_amount_too_precise_rejected() {
        let input = ActivityInput {
            energy_consumption_kwh: Some(dec!(0.0000000000000000000000000001)),
            ..ActivityInput::new("construction")
        };
        let err = calculate(&input, &profiles(), &CalculateOptions::default()).unwrap_err();
        match err {
            CalcError::InvalidAmount { field, .. } => assert_eq!(field, "energy_consumption_kwh"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_small_amount_converts_exactly() {
        // 26 fractional digits + 0.5 (1) + 1.5 (1) = 28, still exact.
        let input = ActivityInput {
            energy_consumption_kwh: Some(dec!(0.00000000000000000000000001)),
            ..ActivityInput::new("construction")
        };
        let result = calculate(&input, &profiles(), &CalculateOptions::default()).unwrap();
        assert_eq!(result.total_co2_tons, dec!(0.0000000000000000000000000075));
        assert!(result.total_co2_tons > Decimal::ZERO);
        assert_eq!(result.recommended_credits, 1);
    }

    #[test]
    fn test_negative_zero_stored_as_zero() {
        let input = ActivityInput {
            fuel_consumption_liters: Some(-Decimal::ZERO),
            ..ActivityInput::new("energy")
        };
        let result = calculate(&input, &profiles(), &CalculateOptions::default()).unwrap();
        let item = &result.line_items[0];
        assert!(item.raw_amount.is_zero());
        assert!(!item.raw_amount.is_sign_negative());
        assert!(!item.co2_equivalent_tons.is_sign_negative());
    }

    #[test]
    fn test_custom_price() {
        let options = CalculateOptions {
            price_per_credit: dec!(28.75),
        };
        let input = ActivityInput {
            energy_consumption_kwh: Some(dec!(100)),
            ..ActivityInput::new("construction")
        };
        // 100 * 0.5 * 1.5 = 75 tons -> ceil(90) = 90 credits
        let result = calculate(&input, &profiles(), &options).unwrap();
        assert_eq!(result.recommended_credits, 90);
        assert_eq!(result.estimated_cost_usd, dec!(2587.50));
        assert_eq!(result.price_per_credit, dec!(28.75));
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(Decimal::ZERO), SeverityTier::Low);
        assert_eq!(classify(dec!(49.999999)), SeverityTier::Low);
        assert_eq!(classify(dec!(50)), SeverityTier::Medium);
        assert_eq!(classify(dec!(199.999999)), SeverityTier::Medium);
        assert_eq!(classify(dec!(200)), SeverityTier::High);
        assert_eq!(classify(dec!(67410)), SeverityTier::High);
    }

    #[test]
    fn test_recommend_credits_rounds_up() {
        assert_eq!(recommend_credits(dec!(100)), 120);
        assert_eq!(recommend_credits(dec!(100.1)), 121);
        assert_eq!(recommend_credits(dec!(41.6666)), 50);
        assert_eq!(recommend_credits(dec!(41.6667)), 51);
        assert_eq!(recommend_credits(dec!(0.0001)), 1);
    }

    #[test]
    fn test_recommend_credits_edges() {
        assert_eq!(recommend_credits(Decimal::ZERO), 0);
        assert_eq!(recommend_credits(dec!(-5)), 0);
        assert_eq!(recommend_credits(Decimal::MAX), u64::MAX);
    }

    #[test]
    fn test_estimate_cost() {
        assert_eq!(estimate_cost(120, dec!(25)), dec!(3000));
        assert_eq!(estimate_cost(0, dec!(25)), Decimal::ZERO);
        assert_eq!(estimate_cost(3, dec!(25.50)), dec!(76.50));
    }
}
