use bluecarbon_core::calculate::CalculateOptions;
use bluecarbon_core::error::CalcError;
use bluecarbon_core::model::{ActivityForm, EmissionCategory};
use bluecarbon_core::parsing::parse_amount;
use bluecarbon_core::profiles::builtin;
use bluecarbon_core::profiles::schema::ProfileTable;
use std::path::{Path, PathBuf};

use crate::output;

/// Raw form values from the command line.
pub struct FormArgs {
    pub industry: Option<String>,
    pub energy: Option<String>,
    pub fuel: Option<String>,
    pub transport: Option<String>,
    pub waste: Option<String>,
    pub form: Option<PathBuf>,
}

pub fn run(
    args: FormArgs,
    price: Option<&str>,
    profiles_file: Option<&Path>,
    output_format: &str,
    verbose: bool,
) -> Result<(), CalcError> {
    let table = load_table(profiles_file)?;
    let form = build_form(args)?;
    require_industry(&form)?;

    let mut options = CalculateOptions::default();
    if let Some(p) = price.and_then(|p| parse_amount("price", p).transpose()) {
        options.price_per_credit = p?;
    }

    let (result, trace) =
        bluecarbon_core::calculate_form_traced(&form, &table.profiles, &options)?;
    let profile = table.find(&result.industry_code);

    match output_format {
        "json" => output::json::print_calculation(&result, verbose.then_some(&trace))?,
        _ => output::table::print_calculation(&result, profile, &trace, verbose),
    }

    Ok(())
}

pub(crate) fn load_table(profiles_file: Option<&Path>) -> Result<ProfileTable, CalcError> {
    match profiles_file {
        Some(path) => bluecarbon_core::profiles::load_profiles(path),
        None => builtin::default_table(),
    }
}

/// No sensible default multiplier exists, so calculation stays disabled
/// until an industry is chosen.
fn require_industry(form: &ActivityForm) -> Result<(), CalcError> {
    if form.industry.trim().is_empty() {
        return Err(CalcError::InvalidIndustry {
            code: String::new(),
        });
    }
    Ok(())
}

/// Merge the optional form file with command-line flags. Flags win.
fn build_form(args: FormArgs) -> Result<ActivityForm, CalcError> {
    let mut form = match &args.form {
        Some(path) => {
            let bytes = std::fs::read(path)?;
            serde_json::from_slice::<ActivityForm>(&bytes)?
        }
        None => ActivityForm::default(),
    };

    if let Some(industry) = args.industry {
        form.industry = industry;
    }

    let overrides = [
        (EmissionCategory::Energy, args.energy),
        (EmissionCategory::Fuel, args.fuel),
        (EmissionCategory::Transport, args.transport),
        (EmissionCategory::Waste, args.waste),
    ];
    for (category, value) in overrides {
        if let Some(value) = value {
            *form.field_mut(category) = value;
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args() -> FormArgs {
        FormArgs {
            industry: None,
            energy: None,
            fuel: None,
            transport: None,
            waste: None,
            form: None,
        }
    }

    #[test]
    fn test_flags_only() {
        let form = build_form(FormArgs {
            industry: Some("food".into()),
            waste: Some("5000".into()),
            ..args()
        })
        .unwrap();
        assert_eq!(form.industry, "food");
        assert_eq!(form.waste_generated, "5000");
        assert_eq!(form.energy_consumption, "");
    }

    #[test]
    fn test_flags_override_form_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "industry": "textile", "energy_consumption": "100", "fuel_consumption": "20" }}"#
        )
        .unwrap();

        let form = build_form(FormArgs {
            industry: Some("energy".into()),
            energy: Some("250".into()),
            form: Some(file.path().to_path_buf()),
            ..args()
        })
        .unwrap();
        assert_eq!(form.industry, "energy");
        assert_eq!(form.energy_consumption, "250");
        // Fields without a flag keep the file value.
        assert_eq!(form.fuel_consumption, "20");
        assert_eq!(form.transportation_km, "");
    }

    #[test]
    fn test_malformed_form_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let result = build_form(FormArgs {
            form: Some(file.path().to_path_buf()),
            ..args()
        });
        assert!(matches!(result, Err(CalcError::Json(_))));
    }

    #[test]
    fn test_blank_industry_rejected() {
        let form = build_form(FormArgs {
            industry: Some("   ".into()),
            energy: Some("100".into()),
            ..args()
        })
        .unwrap();
        assert!(matches!(
            require_industry(&form),
            Err(CalcError::InvalidIndustry { ref code }) if code.is_empty()
        ));
    }

    #[test]
    fn test_missing_industry_rejected_before_calculation() {
        let result = run(
            FormArgs {
                energy: Some("100".into()),
                ..args()
            },
            None,
            None,
            "json",
            false,
        );
        assert!(matches!(result, Err(CalcError::InvalidIndustry { .. })));
    }

    #[test]
    fn test_selected_industry_accepted() {
        let form = build_form(FormArgs {
            industry: Some("construction".into()),
            ..args()
        })
        .unwrap();
        assert!(require_industry(&form).is_ok());
    }
}
