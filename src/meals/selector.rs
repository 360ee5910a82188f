//! Picking a day's meals within a calorie budget.

use std::collections::BTreeMap;

use rand::seq::IteratorRandom;
use rand::Rng;
use serde::Serialize;

use super::{Meal, MealCatalog, MealType};

/// One suggestion (or none) per meal type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealPlan {
    pub max_kcal: f64,
    pub meals: BTreeMap<MealType, Option<Meal>>,
}

impl MealPlan {
    pub fn get(&self, meal_type: MealType) -> Option<&Meal> {
        self.meals.get(&meal_type).and_then(Option::as_ref)
    }

    /// Calories of all suggested meals together.
    pub fn total_kcal(&self) -> f64 {
        self.meals.values().flatten().map(|m| m.kcal).sum()
    }
}

/// Pick one meal of `meal_type` at random with at most `max_kcal / 3` calories.
pub fn select_meal<'a, R>(
    catalog: &'a MealCatalog,
    max_kcal: f64,
    meal_type: MealType,
    rng: &mut R,
) -> Option<&'a Meal>
where
    R: Rng + ?Sized,
{
    let budget = max_kcal / 3.0;
    let choice = catalog
        .of_type(meal_type)
        .filter(|m| m.kcal <= budget)
        .choose(rng);

    if choice.is_none() {
        tracing::debug!("No {} meal fits {} kcal", meal_type, budget);
    }
    choice
}

/// Build a plan with one suggestion per meal type.
pub fn select_meals<R>(catalog: &MealCatalog, max_kcal: f64, rng: &mut R) -> MealPlan
where
    R: Rng + ?Sized,
{
    let meals = MealType::ALL
        .into_iter()
        .map(|meal_type| {
            let meal = select_meal(catalog, max_kcal, meal_type, rng).cloned();
            (meal_type, meal)
        })
        .collect();

    MealPlan { max_kcal, meals }
}
