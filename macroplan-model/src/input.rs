#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::units::UnitSystem;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, num_derive::FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Sex {
    Male = 1,
    Female = 2,
}

impl Sex {
    pub fn from_menu(choice: u8) -> Option<Self> {
        num::FromPrimitive::from_u8(choice)
    }
}

/// Habitual activity level, ordered from least to most active.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, num_derive::FromPrimitive,
)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ActivityLevel {
    Sedentary = 1,
    Light = 2,
    Moderate = 3,
    Very = 4,
    Extra = 5,
}

impl ActivityLevel {
    pub fn from_menu(choice: u8) -> Option<Self> {
        num::FromPrimitive::from_u8(choice)
    }

    /// TDEE multiplier applied to the basal metabolic rate.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.20,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Very => 1.725,
            ActivityLevel::Extra => 1.90,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "little or no exercise",
            ActivityLevel::Light => "light exercise 1-3 days/week",
            ActivityLevel::Moderate => "moderate exercise 3-5 days/week",
            ActivityLevel::Very => "hard exercise 6-7 days/week",
            ActivityLevel::Extra => "very hard exercise or a physical job",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, num_derive::FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Goal {
    Cut = 1,
    Maintain = 2,
    Bulk = 3,
}

impl Goal {
    pub fn from_menu(choice: u8) -> Option<Self> {
        num::FromPrimitive::from_u8(choice)
    }

    /// Protein target in grams per kilogram of body weight.
    pub fn default_protein_g_per_kg(self) -> f64 {
        match self {
            Goal::Cut => 2.2,
            Goal::Maintain => 1.8,
            Goal::Bulk => 1.6,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, num_derive::FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pace {
    Slow = 1,
    #[default]
    Normal = 2,
    Aggressive = 3,
}

impl Pace {
    pub fn from_menu(choice: u8) -> Option<Self> {
        num::FromPrimitive::from_u8(choice)
    }

    /// Fraction of body weight gained or lost per week.
    pub fn weekly_fraction(self) -> f64 {
        match self {
            Pace::Slow => 0.0025,
            Pace::Normal => 0.0050,
            Pace::Aggressive => 0.0100,
        }
    }
}

/// Body metrics and preferences for a single planning request.
///
/// Height and weight are always metric here; `unit_system` only records how
/// they were collected.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserInput {
    pub sex: Sex,
    pub unit_system: UnitSystem,
    pub age_years: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub pace: Pace,
}
