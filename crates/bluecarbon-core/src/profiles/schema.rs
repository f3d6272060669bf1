use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named table of industry emission factors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileTable {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub profiles: Vec<IndustryProfile>,
}

/// Reference data for one industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryProfile {
    /// Lookup key, matched exactly against `ActivityInput::industry_code`.
    pub code: String,
    /// Display name.
    #[serde(default)]
    pub label: Option<String>,
    /// Multiplier applied to every category (as string for exact decimal).
    pub emission_factor: Decimal,
}

impl IndustryProfile {
    pub fn new(code: impl Into<String>, emission_factor: Decimal) -> Self {
        Self {
            code: code.into(),
            label: None,
            emission_factor,
        }
    }

    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.code)
    }
}

impl ProfileTable {
    /// Find the single profile for `code`. Returns `None` when the code is
    /// unknown or ambiguous.
    pub fn find(&self, code: &str) -> Option<&IndustryProfile> {
        find_unique(&self.profiles, code)
    }
}

pub(crate) fn find_unique<'a>(
    profiles: &'a [IndustryProfile],
    code: &str,
) -> Option<&'a IndustryProfile> {
    let mut matches = profiles.iter().filter(|p| p.code == code);
    let first = matches.next()?;
    match matches.next() {
        Some(_) => None,
        None => Some(first),
    }
}
