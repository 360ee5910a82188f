//! Shared rendering helpers for command output.

use crate::meals::{MealPlan, MealType};
use crate::ui::UserInterface;

/// Print one line per meal type, plus the total.
pub fn show_meal_plan(plan: &MealPlan, ui: &mut dyn UserInterface) {
    ui.message(&format!(
        "  Meals for {:.0} kcal ({:.0} kcal per meal):",
        plan.max_kcal,
        plan.max_kcal / 3.0
    ));
    for meal_type in MealType::ALL {
        ui.message(&format_meal_line(plan, meal_type));
    }
    ui.message(&format!("  Total: {:.0} kcal", plan.total_kcal()));
}

fn format_meal_line(plan: &MealPlan, meal_type: MealType) -> String {
    match plan.get(meal_type) {
        Some(meal) => format!(
            "    {}: {} ({:.0} kcal) {}",
            meal_type.label(),
            meal.name,
            meal.kcal,
            meal.recipe
        ),
        None => format!("    {}: no suitable meal found", meal_type.label()),
    }
}
