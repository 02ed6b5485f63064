//! Daily energy expenditure and macronutrient planning.
//!
//! [`compute_plan`] turns validated body metrics into a [`PlanResult`]. Every
//! function here is pure: no I/O and no shared state, so plans can be computed
//! concurrently without coordination.

pub mod energy;
pub mod error;
pub mod macros;
pub mod validation;

use macroplan_model::{kg_to_lb, Goal, PlanResult, UserInput};

pub use energy::{KCAL_PER_KG_BODY_FAT, MIN_CALORIE_BMR_MULTIPLIER};
pub use error::{Error, Result};
pub use macroplan_model::{KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
pub use macros::{compute_macros, MacroOverrides, DEFAULT_FAT_FRACTION};
pub use validation::validate_input;

pub fn compute_plan(input: &UserInput) -> Result<PlanResult> {
    compute_plan_with(input, &MacroOverrides::default())
}

pub fn compute_plan_with(input: &UserInput, overrides: &MacroOverrides) -> Result<PlanResult> {
    validate_input(input)?;

    let bmr = energy::bmr_mifflin_st_jeor(
        input.sex,
        input.weight_kg,
        input.height_cm,
        input.age_years,
    );
    let tdee = energy::tdee(bmr, input.activity_level);

    let pace_used = energy::effective_pace(input.goal, input.pace);
    let projected_change_kg = energy::weekly_change_kg(pace_used, input.weight_kg);
    let target_calories = energy::target_calories(
        input.goal,
        bmr,
        tdee,
        energy::daily_delta(projected_change_kg),
    );

    let weekly_change_kg = match input.goal {
        Goal::Maintain => 0.0,
        Goal::Cut | Goal::Bulk => projected_change_kg,
    };

    Ok(PlanResult {
        bmr,
        tdee,
        target_calories,
        weekly_change_kg,
        weekly_change_lb: kg_to_lb(weekly_change_kg),
        pace_used,
        macros: compute_macros(input.goal, input.weight_kg, target_calories, overrides),
    })
}
