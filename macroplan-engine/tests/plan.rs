use macroplan_engine::{
    compute_plan, compute_plan_with, Error, MacroOverrides, MIN_CALORIE_BMR_MULTIPLIER,
};
use macroplan_model::{ActivityLevel, Goal, Pace, Sex, UnitSystem, UserInput};
use strum::IntoEnumIterator;

const EPSILON: f64 = 1e-6;

fn reference_input(goal: Goal, pace: Pace) -> UserInput {
    UserInput {
        sex: Sex::Male,
        unit_system: UnitSystem::Metric,
        age_years: 30,
        height_cm: 180.0,
        weight_kg: 80.0,
        activity_level: ActivityLevel::Moderate,
        goal,
        pace,
    }
}

fn sample_inputs() -> Vec<UserInput> {
    let mut inputs = vec![];
    for sex in Sex::iter() {
        for activity_level in ActivityLevel::iter() {
            for goal in Goal::iter() {
                for pace in Pace::iter() {
                    for (age_years, height_cm, weight_kg) in [
                        (15, 150.0, 40.0),
                        (30, 180.0, 80.0),
                        (65, 160.0, 140.0),
                        (120, 300.0, 500.0),
                        (90, 120.0, 250.0),
                    ] {
                        inputs.push(UserInput {
                            sex,
                            unit_system: UnitSystem::Metric,
                            age_years,
                            height_cm,
                            weight_kg,
                            activity_level,
                            goal,
                            pace,
                        });
                    }
                }
            }
        }
    }
    inputs
}

#[test]
fn reference_cut_plan() {
    let plan = compute_plan(&reference_input(Goal::Cut, Pace::Normal)).unwrap();

    assert_eq!(plan.bmr, 1780.0);
    assert!((plan.tdee - 2759.0).abs() < EPSILON);
    assert!((plan.weekly_change_kg - 0.4).abs() < EPSILON);
    assert!((plan.weekly_change_lb - 0.881848).abs() < EPSILON);
    assert!((plan.target_calories - 2319.0).abs() < EPSILON);
    assert!(plan.target_calories > plan.bmr * MIN_CALORIE_BMR_MULTIPLIER);
    assert_eq!(plan.pace_used, Pace::Normal);
    assert!((plan.macros.protein_g - 176.0).abs() < EPSILON);
    assert!((plan.macros.fat_g - 2319.0 * 0.25 / 9.0).abs() < EPSILON);
    assert!((plan.macros.carbs_g - 258.8125).abs() < EPSILON);
}

#[test]
fn reference_aggressive_bulk_is_not_clamped() {
    let plan = compute_plan(&reference_input(Goal::Bulk, Pace::Aggressive)).unwrap();

    assert!((plan.weekly_change_kg - 0.8).abs() < EPSILON);
    assert!((plan.target_calories - 3639.0).abs() < EPSILON);
    assert_eq!(plan.pace_used, Pace::Aggressive);
}

#[test]
fn macro_calories_always_equal_target() {
    for input in sample_inputs() {
        let plan = compute_plan(&input).unwrap();
        assert_eq!(plan.macros.calories, plan.target_calories, "{:?}", input);
    }
}

#[test]
fn macros_add_up_to_target_unless_carbs_are_exhausted() {
    for input in sample_inputs() {
        let plan = compute_plan(&input).unwrap();
        let macros = plan.macros;
        let protein_and_fat = macros.protein_kcal() + macros.fat_kcal();
        if protein_and_fat <= plan.target_calories {
            assert!(
                (macros.total_kcal() - plan.target_calories).abs() < EPSILON,
                "{:?}",
                input
            );
        } else {
            assert_eq!(macros.carbs_g, 0.0, "{:?}", input);
        }
        assert!(macros.carbs_g >= 0.0);
    }
}

#[test]
fn maintain_ignores_requested_pace() {
    for input in sample_inputs()
        .into_iter()
        .filter(|i| i.goal == Goal::Maintain)
    {
        let plan = compute_plan(&input).unwrap();
        assert_eq!(plan.weekly_change_kg, 0.0);
        assert_eq!(plan.weekly_change_lb, 0.0);
        assert_eq!(plan.pace_used, Pace::Normal);
        assert_eq!(plan.target_calories, plan.tdee);
    }
}

#[test]
fn cut_never_goes_below_safety_floor() {
    for input in sample_inputs().into_iter().filter(|i| i.goal == Goal::Cut) {
        let plan = compute_plan(&input).unwrap();
        assert!(
            plan.target_calories >= plan.bmr * MIN_CALORIE_BMR_MULTIPLIER,
            "{:?}",
            input
        );
    }
}

#[test]
fn extreme_cut_is_floored() {
    let input = UserInput {
        sex: Sex::Female,
        unit_system: UnitSystem::Metric,
        age_years: 70,
        height_cm: 150.0,
        weight_kg: 300.0,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::Cut,
        pace: Pace::Aggressive,
    };
    let plan = compute_plan(&input).unwrap();
    assert_eq!(plan.target_calories, plan.bmr * MIN_CALORIE_BMR_MULTIPLIER);
    assert!((plan.weekly_change_kg - 3.0).abs() < EPSILON);
}

#[test]
fn tdee_increases_with_activity_level() {
    let tdees: Vec<f64> = ActivityLevel::iter()
        .map(|activity_level| {
            compute_plan(&UserInput {
                activity_level,
                ..reference_input(Goal::Maintain, Pace::Normal)
            })
            .unwrap()
            .tdee
        })
        .collect();
    assert!(tdees.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn repeated_calls_are_bit_identical() {
    for input in sample_inputs() {
        let first = compute_plan(&input).unwrap();
        let second = compute_plan(&input).unwrap();
        assert_eq!(first.target_calories.to_bits(), second.target_calories.to_bits());
        assert_eq!(first.macros.carbs_g.to_bits(), second.macros.carbs_g.to_bits());
        assert_eq!(first, second);
    }
}

#[test]
fn boundary_values() {
    let base = reference_input(Goal::Maintain, Pace::Normal);

    for accepted in [
        UserInput {
            weight_kg: 500.0,
            ..base
        },
        UserInput {
            height_cm: 300.0,
            ..base
        },
        UserInput {
            age_years: 120,
            ..base
        },
        UserInput {
            age_years: 15,
            ..base
        },
    ] {
        assert!(compute_plan(&accepted).is_ok(), "{:?}", accepted);
    }

    assert!(matches!(
        compute_plan(&UserInput {
            weight_kg: 500.0001,
            ..base
        }),
        Err(Error::InvalidArgument(msg)) if msg.contains("Weight")
    ));
    assert!(matches!(
        compute_plan(&UserInput {
            age_years: 14,
            ..base
        }),
        Err(Error::InvalidArgument(msg)) if msg.contains("Age")
    ));
}

#[test]
fn overrides_flow_through_plan() {
    let input = reference_input(Goal::Cut, Pace::Normal);
    let plan = compute_plan_with(
        &input,
        &MacroOverrides {
            protein_g_per_kg: Some(1.0),
            fat_fraction: None,
        },
    )
    .unwrap();
    assert!((plan.macros.protein_g - 80.0).abs() < EPSILON);
    assert_eq!(
        plan.target_calories,
        compute_plan(&input).unwrap().target_calories
    );
}
