use macroplan_model::UserInput;

use crate::error::{Error, Result};

pub const MAX_WEIGHT_KG: f64 = 500.0;
pub const MAX_HEIGHT_CM: f64 = 300.0;
pub const MIN_AGE_YEARS: u32 = 15;
pub const MAX_AGE_YEARS: u32 = 120;

fn in_open_closed_range(value: f64, max: f64) -> bool {
    value.is_finite() && value > 0.0 && value <= max
}

/// Rejects inputs outside the ranges the formulas are meant for.
pub fn validate_input(input: &UserInput) -> Result<()> {
    if !in_open_closed_range(input.weight_kg, MAX_WEIGHT_KG) {
        return Err(Error::InvalidArgument(format!(
            "Weight must be between 0 and {} kg",
            MAX_WEIGHT_KG
        )));
    }
    if !in_open_closed_range(input.height_cm, MAX_HEIGHT_CM) {
        return Err(Error::InvalidArgument(format!(
            "Height must be between 0 and {} cm",
            MAX_HEIGHT_CM
        )));
    }
    if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&input.age_years) {
        return Err(Error::InvalidArgument(format!(
            "Age must be between {} and {} years",
            MIN_AGE_YEARS, MAX_AGE_YEARS
        )));
    }
    Ok(())
}
