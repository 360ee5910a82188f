//! Meal suggestions within a daily calorie budget.
//!
//! # Example
//!
//! ```
//! use fitform::meals::{select_meals, MealCatalog, MealType};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let catalog = MealCatalog::builtin();
//! let plan = select_meals(&catalog, 1800.0, &mut StdRng::seed_from_u64(1));
//! if let Some(meal) = plan.get(MealType::Dinner) {
//!     assert!(meal.kcal <= 600.0);
//! }
//! ```

pub mod catalog;
pub mod selector;

pub use catalog::{builtin_catalog, Meal, MealCatalog, MealType};
pub use selector::{select_meal, select_meals, MealPlan};
