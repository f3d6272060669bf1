pub mod builtin;
pub mod schema;

use crate::error::CalcError;
use rust_decimal::Decimal;
use schema::ProfileTable;
use std::collections::HashSet;
use std::path::Path;

/// Load an industry profile table from a JSON file.
pub fn load_profiles(path: &Path) -> Result<ProfileTable, CalcError> {
    let content = std::fs::read_to_string(path).map_err(|e| CalcError::ProfilesLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_profiles(&content, path)
}

/// Parse a profile table from a JSON string.
pub fn parse_profiles(json: &str, source: &Path) -> Result<ProfileTable, CalcError> {
    let table: ProfileTable = serde_json::from_str(json).map_err(|e| CalcError::ProfilesLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_profiles(&table)?;
    tracing::debug!(
        source = %source.display(),
        profiles = table.profiles.len(),
        "loaded industry profiles"
    );
    Ok(table)
}

/// Parse a profile table from a JSON string (no file path context).
pub fn parse_profiles_str(json: &str) -> Result<ProfileTable, CalcError> {
    let table: ProfileTable = serde_json::from_str(json).map_err(CalcError::Json)?;
    validate_profiles(&table)?;
    Ok(table)
}

/// Validate that a profile table is well-formed.
pub fn validate_profiles(table: &ProfileTable) -> Result<(), CalcError> {
    if table.profiles.is_empty() {
        return Err(CalcError::ProfilesInvalid(
            "profiles must not be empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    for profile in &table.profiles {
        if profile.code.trim().is_empty() {
            return Err(CalcError::ProfilesInvalid(
                "industry code must not be empty".into(),
            ));
        }

        if !seen.insert(profile.code.as_str()) {
            return Err(CalcError::ProfilesInvalid(format!(
                "duplicate industry code '{}'",
                profile.code
            )));
        }

        if profile.emission_factor <= Decimal::ZERO {
            return Err(CalcError::ProfilesInvalid(format!(
                "industry '{}' has non-positive emission factor {}",
                profile.code, profile.emission_factor
            )));
        }

        if profile.code != profile.code.trim() {
            tracing::warn!(
                code = %profile.code,
                "industry code has surrounding whitespace and must be matched verbatim"
            );
        }
    }

    Ok(())
}
