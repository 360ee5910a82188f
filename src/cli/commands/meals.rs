//! Meals command implementation.
//!
//! The `fitform meals` command suggests one meal per meal type within a
//! daily calorie budget.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::args::MealsArgs;
use crate::error::{FitformError, Result};
use crate::meals::{select_meals, MealCatalog};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::show_meal_plan;

/// The meals command implementation.
pub struct MealsCommand {
    args: MealsArgs,
    catalog: MealCatalog,
}

impl MealsCommand {
    /// Create a new meals command.
    pub fn new(args: MealsArgs, catalog: MealCatalog) -> Self {
        Self { args, catalog }
    }
}

impl Command for MealsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.args.max_kcal.is_finite() || self.args.max_kcal <= 0.0 {
            ui.error(&format!(
                "--max-kcal must be a positive number, got {}",
                self.args.max_kcal
            ));
            return Ok(CommandResult::failure(2));
        }

        if self.catalog.is_empty() {
            ui.warning("The meal catalog is empty; check meals.include_builtin and meals.custom");
        }

        let mut rng = match self.args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let plan = select_meals(&self.catalog, self.args.max_kcal, &mut rng);

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&plan).map_err(|e| FitformError::Other(e.into()))?;
            ui.output(&json);
        } else {
            ui.show_header("Meal suggestions");
            show_meal_plan(&plan, ui);
        }

        Ok(CommandResult::success())
    }
}
