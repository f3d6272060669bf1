pub mod values;

use crate::error::CalcError;
use crate::model::{ActivityForm, ActivityInput, EmissionCategory};

pub use values::parse_amount;

/// Parse raw form fields into a calculation request.
///
/// Fields are checked in category order; the first invalid one is reported.
/// The industry code is trimmed but otherwise passed through unchanged, since
/// profile lookup happens in the calculator.
pub fn parse_form(form: &ActivityForm) -> Result<ActivityInput, CalcError> {
    let mut input = ActivityInput::new(form.industry.trim());
    for category in EmissionCategory::ALL {
        let amount = parse_amount(category.field_name(), form.field(category))?;
        input.set_amount(category, amount);
    }
    Ok(input)
}
