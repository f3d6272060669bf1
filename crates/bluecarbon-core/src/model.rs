use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An activity category that contributes to an emission total.
///
/// Declaration order is the order line items appear in a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmissionCategory {
    Energy,
    Fuel,
    Transport,
    Waste,
}

impl EmissionCategory {
    pub const ALL: [EmissionCategory; 4] = [
        EmissionCategory::Energy,
        EmissionCategory::Fuel,
        EmissionCategory::Transport,
        EmissionCategory::Waste,
    ];

    /// Tons of CO2e per input unit, before the industry factor is applied.
    pub fn conversion_constant(&self) -> Decimal {
        match self {
            EmissionCategory::Energy => Decimal::new(5, 1),
            EmissionCategory::Fuel => Decimal::new(23, 1),
            EmissionCategory::Transport => Decimal::new(2, 1),
            EmissionCategory::Waste => Decimal::new(1, 1),
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            EmissionCategory::Energy => "kWh",
            EmissionCategory::Fuel => "liters",
            EmissionCategory::Transport => "km",
            EmissionCategory::Waste => "kg",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmissionCategory::Energy => "Energy Consumption",
            EmissionCategory::Fuel => "Fuel Consumption",
            EmissionCategory::Transport => "Transportation",
            EmissionCategory::Waste => "Waste Generated",
        }
    }

    /// Input field name, used to point at the offending field in errors.
    pub fn field_name(&self) -> &'static str {
        match self {
            EmissionCategory::Energy => "energy_consumption_kwh",
            EmissionCategory::Fuel => "fuel_consumption_liters",
            EmissionCategory::Transport => "transportation_km",
            EmissionCategory::Waste => "waste_generated_kg",
        }
    }
}

impl fmt::Display for EmissionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmissionCategory::Energy => write!(f, "Energy"),
            EmissionCategory::Fuel => write!(f, "Fuel"),
            EmissionCategory::Transport => write!(f, "Transport"),
            EmissionCategory::Waste => write!(f, "Waste"),
        }
    }
}

/// One calculation request. Absent quantities are left out of the result
/// rather than counted as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityInput {
    pub industry_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_consumption_kwh: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_consumption_liters: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transportation_km: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waste_generated_kg: Option<Decimal>,
}

impl ActivityInput {
    pub fn new(industry_code: impl Into<String>) -> Self {
        Self {
            industry_code: industry_code.into(),
            ..Self::default()
        }
    }

    pub fn amount(&self, category: EmissionCategory) -> Option<Decimal> {
        match category {
            EmissionCategory::Energy => self.energy_consumption_kwh,
            EmissionCategory::Fuel => self.fuel_consumption_liters,
            EmissionCategory::Transport => self.transportation_km,
            EmissionCategory::Waste => self.waste_generated_kg,
        }
    }

    pub fn set_amount(&mut self, category: EmissionCategory, amount: Option<Decimal>) {
        let slot = match category {
            EmissionCategory::Energy => &mut self.energy_consumption_kwh,
            EmissionCategory::Fuel => &mut self.fuel_consumption_liters,
            EmissionCategory::Transport => &mut self.transportation_km,
            EmissionCategory::Waste => &mut self.waste_generated_kg,
        };
        *slot = amount;
    }

    /// Present quantities in category order.
    pub fn present_amounts(&self) -> impl Iterator<Item = (EmissionCategory, Decimal)> + '_ {
        EmissionCategory::ALL
            .into_iter()
            .filter_map(|cat| self.amount(cat).map(|amount| (cat, amount)))
    }
}

/// Raw form fields as typed by a user. Blank strings mean "not provided".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityForm {
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub energy_consumption: String,
    #[serde(default)]
    pub fuel_consumption: String,
    #[serde(default)]
    pub transportation_km: String,
    #[serde(default)]
    pub waste_generated: String,
}

impl ActivityForm {
    pub fn field(&self, category: EmissionCategory) -> &str {
        match category {
            EmissionCategory::Energy => &self.energy_consumption,
            EmissionCategory::Fuel => &self.fuel_consumption,
            EmissionCategory::Transport => &self.transportation_km,
            EmissionCategory::Waste => &self.waste_generated,
        }
    }

    pub fn field_mut(&mut self, category: EmissionCategory) -> &mut String {
        match category {
            EmissionCategory::Energy => &mut self.energy_consumption,
            EmissionCategory::Fuel => &mut self.fuel_consumption,
            EmissionCategory::Transport => &mut self.transportation_km,
            EmissionCategory::Waste => &mut self.waste_generated,
        }
    }
}
