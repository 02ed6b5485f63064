use std::fmt;

use macroplan_client::FoodRecommendations;
use macroplan_model::{Goal, PlanResult};

/// Text rendering of a computed plan for the terminal.
pub struct PlanReport<'a> {
    pub plan: &'a PlanResult,
    pub goal: Goal,
}

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;
        let macros = &plan.macros;
        let split = macros.calorie_split();

        writeln!(f, "\n=== Your plan ===")?;
        writeln!(f, "BMR: {:.0} kcal", plan.bmr)?;
        writeln!(f, "TDEE: {:.0} kcal", plan.tdee)?;
        writeln!(f, "Pace: {}", plan.pace_used)?;
        match self.goal {
            Goal::Maintain => writeln!(f, "Weekly change: 0 kg (0 lb)")?,
            Goal::Cut => writeln!(
                f,
                "Weekly change: {:.2} kg ({:.2} lb) loss",
                plan.weekly_change_kg, plan.weekly_change_lb
            )?,
            Goal::Bulk => writeln!(
                f,
                "Weekly change: {:.2} kg ({:.2} lb) gain",
                plan.weekly_change_kg, plan.weekly_change_lb
            )?,
        }
        writeln!(f, "Target calories: {:.0} kcal/day", plan.target_calories)?;
        writeln!(f, "Protein: {:.0} g", macros.protein_g)?;
        writeln!(f, "Fat: {:.0} g", macros.fat_g)?;
        writeln!(f, "Carbs: {:.0} g", macros.carbs_g)?;
        writeln!(
            f,
            "Split: ~{}% protein / ~{}% fat / ~{}% carbs",
            split.protein_percent, split.fat_percent, split.carbs_percent
        )
    }
}

pub struct RecommendationsReport<'a>(pub &'a FoodRecommendations);

impl fmt::Display for RecommendationsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== Suggested foods (per 100 g) ===")?;
        if self.0.foods.is_empty() {
            return writeln!(f, "No suggestions available right now.");
        }
        for food in &self.0.foods {
            writeln!(
                f,
                "- {}: {:.0} kcal, {:.1} g protein, {:.1} g carbs, {:.1} g fat",
                food.description, food.calories, food.protein_g, food.carbs_g, food.fat_g
            )?;
        }
        Ok(())
    }
}

pub fn format_plan(plan: &PlanResult, goal: Goal) -> String {
    PlanReport { plan, goal }.to_string()
}

pub fn format_recommendations(recommendations: &FoodRecommendations) -> String {
    RecommendationsReport(recommendations).to_string()
}

#[cfg(test)]
mod tests {
    use macroplan_client::FoodItem;
    use macroplan_model::{MacroPlan, Pace};

    use super::*;

    fn plan(weekly_change_kg: f64) -> PlanResult {
        PlanResult {
            bmr: 1780.0,
            tdee: 2759.0,
            target_calories: 2319.0,
            weekly_change_kg,
            weekly_change_lb: weekly_change_kg * 2.20462,
            pace_used: Pace::Normal,
            macros: MacroPlan {
                calories: 2319.0,
                protein_g: 176.0,
                fat_g: 64.4167,
                carbs_g: 258.8125,
            },
        }
    }

    #[test]
    fn cut_report_shows_loss() {
        let report = format_plan(&plan(0.4), Goal::Cut);
        assert!(report.contains("BMR: 1780 kcal\n"));
        assert!(report.contains("TDEE: 2759 kcal\n"));
        assert!(report.contains("Pace: Normal\n"));
        assert!(report.contains("Weekly change: 0.40 kg (0.88 lb) loss\n"));
        assert!(report.contains("Target calories: 2319 kcal/day\n"));
        assert!(report.contains("Protein: 176 g\nFat: 64 g\nCarbs: 259 g\n"));
        assert!(report.contains("Split: ~30% protein / ~25% fat / ~45% carbs\n"));
    }

    #[test]
    fn maintain_report_shows_no_change() {
        let report = format_plan(&plan(0.0), Goal::Maintain);
        assert!(report.contains("Weekly change: 0 kg (0 lb)\n"));
    }

    #[test]
    fn bulk_report_shows_gain_and_starts_with_heading() {
        let report = PlanReport {
            plan: &plan(0.4),
            goal: Goal::Bulk,
        }
        .to_string();
        assert!(report.starts_with("\n=== Your plan ===\nBMR: 1780 kcal\n"));
        assert!(report.contains("Weekly change: 0.40 kg (0.88 lb) gain\n"));
        assert!(report.ends_with("carbs\n"));
    }

    #[test]
    fn recommendations_list_foods() {
        let report = format_recommendations(&FoodRecommendations {
            goal: Goal::Bulk,
            foods: vec![FoodItem {
                fdc_id: 1,
                description: "Oats".to_owned(),
                calories: 379.0,
                protein_g: 13.2,
                carbs_g: 67.7,
                fat_g: 6.52,
            }],
        });
        assert!(report.contains("- Oats: 379 kcal, 13.2 g protein, 67.7 g carbs, 6.5 g fat\n"));
    }

    #[test]
    fn empty_recommendations_are_reported() {
        let report = format_recommendations(&FoodRecommendations {
            goal: Goal::Cut,
            foods: vec![],
        });
        assert!(report.contains("No suggestions available right now."));
    }
}
