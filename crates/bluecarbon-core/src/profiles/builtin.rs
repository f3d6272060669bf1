use crate::error::CalcError;
use crate::profiles::schema::ProfileTable;

const INDUSTRIES_JSON: &str = include_str!("../../../../profiles/industries.json");

/// Available embedded profile tables.
pub const PRESETS: &[&str] = &["default"];

/// Load an embedded profile table by name.
pub fn load_preset(name: &str) -> Result<ProfileTable, CalcError> {
    match name {
        "default" => {
            let table: ProfileTable = serde_json::from_str(INDUSTRIES_JSON)?;
            Ok(table)
        }
        _ => Err(CalcError::ProfilesInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

/// The table used when no custom profile file is given.
pub fn default_table() -> Result<ProfileTable, CalcError> {
    load_preset("default")
}
