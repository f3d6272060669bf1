use bluecarbon_core::advisor::AdvisorReply;
use bluecarbon_core::calculate::{EmissionResult, SeverityTier};
use bluecarbon_core::profiles::schema::IndustryProfile;
use bluecarbon_core::trace::TraceBundle;

pub fn print_calculation(
    result: &EmissionResult,
    profile: Option<&IndustryProfile>,
    trace: &TraceBundle,
    verbose: bool,
) {
    let industry = profile
        .map(|p| p.display_name().to_string())
        .unwrap_or_else(|| result.industry_code.clone());
    println!(
        "=== Emission Analysis: {} (factor {}) ===\n",
        industry, result.emission_factor
    );

    if result.line_items.is_empty() {
        println!("  No activity data entered.\n");
    } else {
        let max_label = result
            .line_items
            .iter()
            .map(|i| i.category.label().len())
            .max()
            .unwrap_or(10);

        for item in &result.line_items {
            let amount = format!("{} {}", item.raw_amount.normalize(), item.unit);
            println!(
                "  {:<width$}  {:>16}  {:>14.2} tons CO2",
                item.category.label(),
                amount,
                item.co2_equivalent_tons,
                width = max_label
            );
        }
        println!();
    }

    println!("  Total emissions: {:.2} tons CO2", result.total_co2_tons);
    let marker = match result.severity_tier {
        SeverityTier::Low => "ok",
        SeverityTier::Medium | SeverityTier::High => "!!",
    };
    println!(
        "  [{}] {} Emission Level: {}\n",
        marker,
        result.severity_tier,
        result.severity_tier.guidance()
    );

    if verbose {
        println!("  Derivation:");
        for entry in &trace.entries {
            println!("    {}", entry.formula);
        }
        for decision in &trace.decisions {
            println!("    {:?}: {}", decision.target, decision.reason);
        }
        println!();
    }

    if !result.line_items.is_empty() {
        println!("=== Carbon Credit Recommendations ===\n");
        println!(
            "  Recommended credits to purchase: {} (includes 20% buffer)",
            result.recommended_credits
        );
        println!(
            "  Estimated cost: ${} (@${} per credit)",
            group_thousands(&format!("{:.2}", result.estimated_cost_usd)),
            result.price_per_credit.normalize()
        );
        println!();
    }
}

pub fn print_reply(reply: &AdvisorReply) {
    println!("{}\n", reply.content);

    if !reply.recommendations.is_empty() {
        println!("Recommendations:");
        for rec in &reply.recommendations {
            println!("  [{}] {}", rec.priority, rec.title);
            println!("    {}", rec.description);
            println!(
                "    Impact: {}  Cost: {}  Timeframe: {}",
                rec.impact, rec.cost, rec.timeframe
            );
        }
        println!();
    }
}

/// Insert thousands separators into the integer part of a formatted number.
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted, None),
    };
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("2022300.00"), "2,022,300.00");
        assert_eq!(group_thousands("300.00"), "300.00");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("0"), "0");
    }

    #[test]
    fn test_group_thousands_negative() {
        assert_eq!(group_thousands("-100"), "-100");
        assert_eq!(group_thousands("-1000.50"), "-1,000.50");
        assert_eq!(group_thousands("-123456"), "-123,456");
    }
}
