pub mod prompt;
pub mod report;

use std::io::{self, BufRead, Write};

use log::{debug, info};
use macroplan_client::FoodLookup;
use macroplan_engine::validation::{MAX_AGE_YEARS, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE_YEARS};
use macroplan_model::{ActivityLevel, Goal, Pace, Sex, UnitSystem, UserInput};
use strum::IntoEnumIterator;

use crate::prompt::Prompter;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input ended before all answers were given")]
    EndOfInput,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Plan(#[from] macroplan_engine::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Largest height and weight accepted in the given unit system, rounded down
/// so the metric conversion stays inside the planner's limits.
fn max_in_units(unit_system: UnitSystem) -> (f64, f64) {
    let floor_tenth = |v: f64| (v * 10.0).floor() / 10.0;
    (
        floor_tenth(MAX_HEIGHT_CM / unit_system.height_to_cm(1.0)),
        floor_tenth(MAX_WEIGHT_KG / unit_system.weight_to_kg(1.0)),
    )
}

pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    food_lookup: Option<Box<dyn FoodLookup>>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, food_lookup: Option<Box<dyn FoodLookup>>) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            food_lookup,
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    pub fn read_user_input(&mut self) -> Result<UserInput> {
        let p = &mut self.prompter;

        let sex = p.ask_menu(
            "Sex:",
            &Sex::iter().map(|s| s.to_string()).collect::<Vec<_>>(),
            Sex::from_menu,
        )?;
        let unit_system = p.ask_menu(
            "Units:",
            &["Metric (kg, cm)".to_owned(), "Imperial (lb, in)".to_owned()],
            UnitSystem::from_menu,
        )?;
        let age_years = p.ask_integer("Age (years): ", MIN_AGE_YEARS, MAX_AGE_YEARS)?;

        let (max_height, max_weight) = max_in_units(unit_system);
        let height = p.ask_positive(
            &format!("Height ({}): ", unit_system.height_unit()),
            max_height,
        )?;
        let weight = p.ask_positive(
            &format!("Weight ({}): ", unit_system.weight_unit()),
            max_weight,
        )?;

        let activity_level = p.ask_menu(
            "Activity level:",
            &ActivityLevel::iter()
                .map(|a| format!("{} - {}", a, a.description()))
                .collect::<Vec<_>>(),
            ActivityLevel::from_menu,
        )?;
        let goal = p.ask_menu(
            "Goal:",
            &Goal::iter().map(|g| g.to_string()).collect::<Vec<_>>(),
            Goal::from_menu,
        )?;
        let pace = match goal {
            Goal::Maintain => Pace::Normal,
            Goal::Cut | Goal::Bulk => p.ask_menu(
                "Pace:",
                &Pace::iter()
                    .map(|pace| {
                        format!(
                            "{} ({}% of body weight per week)",
                            pace,
                            pace.weekly_fraction() * 100.0
                        )
                    })
                    .collect::<Vec<_>>(),
                Pace::from_menu,
            )?,
        };

        Ok(UserInput {
            sex,
            unit_system,
            age_years,
            height_cm: unit_system.height_to_cm(height),
            weight_kg: unit_system.weight_to_kg(weight),
            activity_level,
            goal,
            pace,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        info!("Starting planning session");
        let input = self.read_user_input()?;
        debug!("Collected {:?}", input);

        let plan = macroplan_engine::compute_plan(&input)?;
        write!(
            self.prompter.output(),
            "{}",
            report::format_plan(&plan, input.goal)
        )?;

        if let Some(lookup) = &self.food_lookup {
            info!("Fetching food suggestions");
            let recommendations = macroplan_client::recommend_foods(
                lookup.as_ref(),
                input.goal,
                plan.macros.protein_g,
                plan.target_calories,
            )
            .await;
            write!(
                self.prompter.output(),
                "{}",
                report::format_recommendations(&recommendations)
            )?;
        }

        self.prompter.output().flush()?;
        Ok(())
    }
}
