use bluecarbon_core::error::CalcError;
use bluecarbon_core::model::EmissionCategory;
use std::path::Path;

use super::calculate::load_table;

pub fn list(profiles_file: Option<&Path>) -> Result<(), CalcError> {
    let table = load_table(profiles_file)?;

    println!("{} (v{})\n", table.name, table.version);
    if let Some(ref desc) = table.description {
        println!("{}\n", desc);
    }

    let max_code = table
        .profiles
        .iter()
        .map(|p| p.code.len())
        .max()
        .unwrap_or(10);

    for profile in &table.profiles {
        println!(
            "  {:<width$}  {:<20}  x{}",
            profile.code,
            profile.label.as_deref().unwrap_or("-"),
            profile.emission_factor,
            width = max_code
        );
    }
    println!();

    println!("Conversion constants (t CO2e per unit, before the industry factor):\n");
    for category in EmissionCategory::ALL {
        println!(
            "  {:<20}  {} per {}",
            category.label(),
            category.conversion_constant(),
            category.unit()
        );
    }
    println!();

    Ok(())
}

pub fn schema() -> Result<(), CalcError> {
    print!(
        r#"JSON Industry Profile Schema
============================

A profile file lists the industries a calculation can be run for. The
industry's emission factor multiplies every category's CO2e conversion.

Top-level fields:
  name          (string, required)  Human-readable name of the table
  description   (string, optional)  What this table is for
  version       (string, required)  Version identifier (e.g., "2024.1")
  profiles      (array, required)   List of industry profiles (see below),
                                    at least one

Each entry in the "profiles" array:
  code            (string, required)  Lookup key passed as --industry.
                                      Matched exactly; must be unique.
  label           (string, optional)  Display name
  emission_factor (string, required)  Decimal multiplier, strictly positive
                                      (e.g., "2.1").

Example:
{{
  "name": "Regional factors",
  "version": "1.0",
  "profiles": [
    {{ "code": "steel", "label": "Steel Works", "emission_factor": "2.8" }},
    {{ "code": "dairy", "label": "Dairy", "emission_factor": "1.9" }}
  ]
}}

Note: emission factors must be quoted strings, not bare numbers,
to preserve exact decimal precision (e.g., "2.1" not 2.1).
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), CalcError> {
    let table = bluecarbon_core::profiles::load_profiles(file)?;

    println!("Profile table '{}' (v{}) is valid.", table.name, table.version);
    println!("  Industries: {}", table.profiles.len());

    let unlabelled: Vec<&str> = table
        .profiles
        .iter()
        .filter(|p| p.label.is_none())
        .map(|p| p.code.as_str())
        .collect();

    if !unlabelled.is_empty() {
        println!("\nWarnings:");
        for code in &unlabelled {
            println!("  - industry '{}' has no label", code);
        }
    }

    Ok(())
}
