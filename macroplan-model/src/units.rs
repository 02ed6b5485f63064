#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const LB_TO_KG: f64 = 0.45359237;
pub const IN_TO_CM: f64 = 2.54;
pub const KG_TO_LB: f64 = 2.20462;

/// Unit system the user entered their body metrics in.
///
/// Planning always happens in kilograms and centimetres, so imperial values are
/// converted before a [`crate::UserInput`] is assembled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, num_derive::FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnitSystem {
    #[default]
    Metric = 1,
    Imperial = 2,
}

impl UnitSystem {
    pub fn from_menu(choice: u8) -> Option<Self> {
        num::FromPrimitive::from_u8(choice)
    }

    /// Converts a weight entered in this unit system (kg or lb) to kilograms.
    pub fn weight_to_kg(self, value: f64) -> f64 {
        match self {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => value * LB_TO_KG,
        }
    }

    /// Converts a height entered in this unit system (cm or in) to centimetres.
    pub fn height_to_cm(self, value: f64) -> f64 {
        match self {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => value * IN_TO_CM,
        }
    }

    pub fn weight_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lb",
        }
    }

    pub fn height_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }
}

pub fn kg_to_lb(kg: f64) -> f64 {
    kg * KG_TO_LB
}
