#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::input::Pace;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MacroPlan {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

/// Share of macro calories per nutrient, in whole percent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MacroSplit {
    pub protein_percent: u32,
    pub fat_percent: u32,
    pub carbs_percent: u32,
}

impl MacroPlan {
    pub fn protein_kcal(&self) -> f64 {
        self.protein_g * KCAL_PER_G_PROTEIN
    }

    pub fn fat_kcal(&self) -> f64 {
        self.fat_g * KCAL_PER_G_FAT
    }

    pub fn carbs_kcal(&self) -> f64 {
        self.carbs_g * KCAL_PER_G_CARB
    }

    /// Calories contributed by all three macros. Exceeds `calories` when protein
    /// and fat alone overshoot the target.
    pub fn total_kcal(&self) -> f64 {
        self.protein_kcal() + self.fat_kcal() + self.carbs_kcal()
    }

    pub fn calorie_split(&self) -> MacroSplit {
        let total = self.total_kcal();
        if total <= 0.0 {
            return MacroSplit::default();
        }
        let percent = |kcal: f64| (kcal / total * 100.0).round() as u32;
        MacroSplit {
            protein_percent: percent(self.protein_kcal()),
            fat_percent: percent(self.fat_kcal()),
            carbs_percent: percent(self.carbs_kcal()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlanResult {
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
    pub weekly_change_kg: f64,
    pub weekly_change_lb: f64,
    pub pace_used: Pace,
    pub macros: MacroPlan,
}
