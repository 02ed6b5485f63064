pub mod input;
pub mod plan;
pub mod units;

pub use input::{ActivityLevel, Goal, Pace, Sex, UserInput};
pub use plan::{
    MacroPlan, MacroSplit, PlanResult, KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};
pub use units::{kg_to_lb, UnitSystem};
