use macroplan_model::{ActivityLevel, Goal, Pace, Sex};

/// Approximate energy content of one kilogram of body fat.
pub const KCAL_PER_KG_BODY_FAT: f64 = 7700.0;
/// Cut targets never drop below this multiple of BMR.
pub const MIN_CALORIE_BMR_MULTIPLIER: f64 = 1.1;

const MALE_OFFSET: f64 = 5.0;
const FEMALE_OFFSET: f64 = -161.0;

/// Basal metabolic rate using the Mifflin-St Jeor equation.
pub fn bmr_mifflin_st_jeor(sex: Sex, weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match sex {
        Sex::Male => base + MALE_OFFSET,
        Sex::Female => base + FEMALE_OFFSET,
    }
}

pub fn tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Pace actually applied for a goal. Maintenance always reports `Normal`.
pub fn effective_pace(goal: Goal, requested: Pace) -> Pace {
    match goal {
        Goal::Maintain => Pace::Normal,
        Goal::Cut | Goal::Bulk => requested,
    }
}

pub fn weekly_change_kg(pace: Pace, weight_kg: f64) -> f64 {
    pace.weekly_fraction() * weight_kg
}

/// Daily calorie surplus or deficit that produces `weekly_change_kg` per week.
pub fn daily_delta(weekly_change_kg: f64) -> f64 {
    weekly_change_kg * KCAL_PER_KG_BODY_FAT / 7.0
}

/// Calorie target for a goal. Only cuts are clamped, to 10% above BMR; bulks
/// are left unbounded.
pub fn target_calories(goal: Goal, bmr: f64, tdee: f64, daily_delta: f64) -> f64 {
    match goal {
        Goal::Maintain => tdee,
        Goal::Cut => (tdee - daily_delta).max(bmr * MIN_CALORIE_BMR_MULTIPLIER),
        Goal::Bulk => tdee + daily_delta,
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn bmr_for_reference_male() {
        assert_eq!(bmr_mifflin_st_jeor(Sex::Male, 80.0, 180.0, 30), 1780.0);
    }

    #[test]
    fn female_offset_is_166_below_male() {
        let male = bmr_mifflin_st_jeor(Sex::Male, 60.0, 165.0, 40);
        let female = bmr_mifflin_st_jeor(Sex::Female, 60.0, 165.0, 40);
        assert_eq!(male - female, 166.0);
        assert_eq!(female, 1270.25);
    }

    #[test]
    fn tdee_increases_strictly_with_activity() {
        let values: Vec<f64> = ActivityLevel::iter().map(|a| tdee(1780.0, a)).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert!((tdee(1780.0, ActivityLevel::Moderate) - 2759.0).abs() < 1e-9);
    }

    #[test]
    fn maintain_forces_normal_pace() {
        for pace in Pace::iter() {
            assert_eq!(effective_pace(Goal::Maintain, pace), Pace::Normal);
            assert_eq!(effective_pace(Goal::Cut, pace), pace);
            assert_eq!(effective_pace(Goal::Bulk, pace), pace);
        }
    }

    #[test]
    fn daily_delta_spreads_weekly_change() {
        assert!((daily_delta(0.4) - 440.0).abs() < 1e-9);
        assert!((daily_delta(0.8) - 880.0).abs() < 1e-9);
    }

    #[test]
    fn cut_is_floored_at_ten_percent_above_bmr() {
        let floored = target_calories(Goal::Cut, 1500.0, 1800.0, 1000.0);
        assert!((floored - 1650.0).abs() < 1e-9);
        assert_eq!(target_calories(Goal::Cut, 1500.0, 2400.0, 500.0), 1900.0);
    }

    #[test]
    fn bulk_has_no_upper_clamp() {
        assert_eq!(target_calories(Goal::Bulk, 1500.0, 4000.0, 5000.0), 9000.0);
    }

    #[test]
    fn maintain_targets_tdee() {
        assert_eq!(target_calories(Goal::Maintain, 1500.0, 2100.0, 500.0), 2100.0);
    }
}
