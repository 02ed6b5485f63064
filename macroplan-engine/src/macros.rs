use macroplan_model::{Goal, MacroPlan, KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

pub const DEFAULT_FAT_FRACTION: f64 = 0.25;

/// Optional replacements for the goal-based protein target and the default
/// fat share. Values that are not strictly positive are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MacroOverrides {
    pub protein_g_per_kg: Option<f64>,
    pub fat_fraction: Option<f64>,
}

impl MacroOverrides {
    fn protein_g_per_kg(&self, goal: Goal) -> f64 {
        self.protein_g_per_kg
            .filter(|v| *v > 0.0)
            .unwrap_or_else(|| goal.default_protein_g_per_kg())
    }

    fn fat_fraction(&self) -> f64 {
        self.fat_fraction
            .filter(|v| *v > 0.0)
            .unwrap_or(DEFAULT_FAT_FRACTION)
    }
}

/// Splits `calories` into protein, fat and carbohydrate grams.
///
/// Protein is fixed per kilogram of body weight and fat takes a fixed share of
/// calories. Carbohydrates fill whatever is left and floor at zero; protein and
/// fat are never scaled down to fit a low target.
pub fn compute_macros(
    goal: Goal,
    weight_kg: f64,
    calories: f64,
    overrides: &MacroOverrides,
) -> MacroPlan {
    let protein_g = overrides.protein_g_per_kg(goal) * weight_kg;
    let protein_kcal = protein_g * KCAL_PER_G_PROTEIN;

    let fat_kcal = calories * overrides.fat_fraction();
    let fat_g = fat_kcal / KCAL_PER_G_FAT;

    let carbs_kcal = (calories - protein_kcal - fat_kcal).max(0.0);
    let carbs_g = carbs_kcal / KCAL_PER_G_CARB;

    MacroPlan {
        calories,
        protein_g,
        fat_g,
        carbs_g,
    }
}
