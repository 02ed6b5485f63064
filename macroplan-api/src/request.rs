//! Request bodies and the lenient string-to-enum mapping used on the wire.
//!
//! Unrecognized activity, goal and pace strings fall back to a default instead
//! of being rejected, and anything that is not "male" or "M" is treated as
//! female. Existing web clients depend on this.

use macroplan_model::{ActivityLevel, Goal, Pace, Sex, UnitSystem, UserInput};
use serde::{
    de::{Error, Unexpected},
    Deserialize, Deserializer,
};

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub sex: String,
    #[serde(deserialize_with = "whole_years")]
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity: String,
    pub goal: String,
    pub pace: String,
}

impl From<PlanRequest> for UserInput {
    fn from(request: PlanRequest) -> Self {
        UserInput {
            sex: parse_sex(&request.sex),
            unit_system: UnitSystem::Metric,
            age_years: request.age,
            height_cm: request.height_cm,
            weight_kg: request.weight_kg,
            activity_level: parse_activity(&request.activity),
            goal: parse_goal(&request.goal),
            pace: parse_pace(&request.pace),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FoodSearchQuery {
    pub query: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct FoodRecommendQuery {
    pub goal: String,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub calories: f64,
}

/// Accepts `30` as well as `30.0`, but not `30.5`.
fn whole_years<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.fract() != 0.0 || raw < 0.0 || raw > f64::from(u32::MAX) {
        return Err(D::Error::invalid_value(
            Unexpected::Float(raw),
            &"a whole number of years",
        ));
    }
    Ok(raw as u32)
}

pub fn parse_sex(s: &str) -> Sex {
    let s = s.trim();
    if s.eq_ignore_ascii_case("male") || s.eq_ignore_ascii_case("m") {
        Sex::Male
    } else {
        Sex::Female
    }
}

pub fn parse_activity(s: &str) -> ActivityLevel {
    match s.trim().to_ascii_lowercase().as_str() {
        "sedentary" => ActivityLevel::Sedentary,
        "light" => ActivityLevel::Light,
        "very" => ActivityLevel::Very,
        "extra" => ActivityLevel::Extra,
        _ => ActivityLevel::Moderate,
    }
}

pub fn parse_goal(s: &str) -> Goal {
    match s.trim().to_ascii_lowercase().as_str() {
        "cut" => Goal::Cut,
        "bulk" => Goal::Bulk,
        _ => Goal::Maintain,
    }
}

pub fn parse_pace(s: &str) -> Pace {
    match s.trim().to_ascii_lowercase().as_str() {
        "slow" => Pace::Slow,
        "aggressive" => Pace::Aggressive,
        _ => Pace::Normal,
    }
}
