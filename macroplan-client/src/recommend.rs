use log::{error, info};
use macroplan_model::Goal;
use serde::{Deserialize, Serialize};

use crate::{FoodItem, FoodLookup};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodRecommendations {
    pub goal: Goal,
    pub foods: Vec<FoodItem>,
}

pub fn search_terms(goal: Goal) -> [&'static str; 5] {
    match goal {
        Goal::Cut => [
            "chicken breast",
            "egg whites",
            "greek yogurt",
            "tilapia",
            "cod fish",
        ],
        Goal::Bulk => ["peanut butter", "whole milk", "salmon", "pasta", "oats"],
        Goal::Maintain => [
            "brown rice",
            "chicken",
            "broccoli",
            "sweet potato",
            "almonds",
        ],
    }
}

/// Looks up one food per search term for the goal.
///
/// Lookup failures are logged and skipped, so the result may be partial or
/// empty but this never fails.
pub async fn recommend_foods(
    lookup: &dyn FoodLookup,
    goal: Goal,
    target_protein_g: f64,
    target_calories: f64,
) -> FoodRecommendations {
    info!(
        "Recommending foods for {} ({:.0} g protein, {:.0} kcal)",
        goal, target_protein_g, target_calories
    );

    let mut foods = vec![];
    for term in search_terms(goal) {
        match lookup.search_foods(term, 1).await {
            Ok(found) => foods.extend(found.into_iter().next()),
            Err(e) => error!("Food lookup for {:?} failed, skipping: {}", term, e),
        }
    }

    FoodRecommendations { goal, foods }
}
