//! Meal definitions and the built-in catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Time of day a meal is suggested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MealType {
    Breakfast,
    Dinner,
    Supper,
}

impl MealType {
    /// All meal types in the order a day's plan lists them.
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Dinner, MealType::Supper];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "BREAKFAST",
            Self::Dinner => "DINNER",
            Self::Supper => "SUPPER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Dinner => "Dinner",
            Self::Supper => "Supper",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "dinner" => Ok(Self::Dinner),
            "supper" => Ok(Self::Supper),
            _ => Err(format!("unknown meal type: {}", s)),
        }
    }
}

// Config files may spell meal types in any case.
impl<'de> Deserialize<'de> for MealType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A meal that can be suggested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    /// Link to the recipe.
    pub recipe: String,
    pub kcal: f64,
    pub meal_type: MealType,
}

impl Meal {
    pub fn new(name: &str, recipe: &str, kcal: f64, meal_type: MealType) -> Self {
        Self {
            name: name.to_string(),
            recipe: recipe.to_string(),
            kcal,
            meal_type,
        }
    }
}

/// Meals available out of the box.
pub fn builtin_catalog() -> Vec<Meal> {
    use MealType::*;

    vec![
        Meal::new(
            "Scrambled Eggs",
            "https://www.bbcgoodfood.com/recipes/perfect-scrambled-eggs-recipe",
            405.0,
            Breakfast,
        ),
        Meal::new(
            "Avocado Toast",
            "https://cookieandkate.com/avocado-toast-recipe/",
            330.0,
            Breakfast,
        ),
        Meal::new(
            "English Breakfast",
            "https://iamafoodblog.com/a-breakdown-of-the-full-english-breakfast/",
            780.0,
            Breakfast,
        ),
        Meal::new(
            "Fried Chicken",
            "https://cooking.nytimes.com/guides/25-how-to-make-fried-chicken",
            600.0,
            Dinner,
        ),
        Meal::new(
            "Spaghetti Bolognese",
            "https://www.bbcgoodfood.com/recipes/best-spaghetti-bolognese-recipe",
            550.0,
            Dinner,
        ),
        Meal::new(
            "Sushi",
            "https://www.justonecookbook.com/ultimate-sushi-guide/",
            400.0,
            Dinner,
        ),
        Meal::new(
            "Curry",
            "https://curryculture.co.uk/types-of-curry/",
            630.0,
            Dinner,
        ),
        Meal::new(
            "Salmon salad",
            "https://www.wyseguide.com/roasted-vegetable-salmon-salad/",
            340.0,
            Supper,
        ),
        Meal::new(
            "Cereal",
            "https://www.allrecipes.com/recipe/44162/homemade-cereal/",
            440.0,
            Supper,
        ),
        Meal::new(
            "Prawn Soup",
            "https://en.wikipedia.org/wiki/Prawn_soup",
            470.0,
            Supper,
        ),
    ]
}

/// The set of meals suggestions are drawn from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealCatalog {
    meals: Vec<Meal>,
}

impl MealCatalog {
    /// Catalog with only the built-in meals.
    pub fn builtin() -> Self {
        Self {
            meals: builtin_catalog(),
        }
    }

    pub fn from_meals(meals: Vec<Meal>) -> Self {
        Self { meals }
    }

    pub fn push(&mut self, meal: Meal) {
        self.meals.push(meal);
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Meals of one type.
    pub fn of_type(&self, meal_type: MealType) -> impl Iterator<Item = &Meal> {
        self.meals.iter().filter(move |m| m.meal_type == meal_type)
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_every_type() {
        let catalog = MealCatalog::builtin();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.of_type(MealType::Breakfast).count(), 3);
        assert_eq!(catalog.of_type(MealType::Dinner).count(), 4);
        assert_eq!(catalog.of_type(MealType::Supper).count(), 3);
    }

    #[test]
    fn meal_type_parses_any_case() {
        assert_eq!("DINNER".parse::<MealType>(), Ok(MealType::Dinner));
        assert_eq!("supper".parse::<MealType>(), Ok(MealType::Supper));
        assert!("brunch".parse::<MealType>().is_err());
    }

    #[test]
    fn meal_type_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&MealType::Breakfast).unwrap(),
            "\"BREAKFAST\""
        );
    }

    #[test]
    fn meal_deserializes_from_yaml() {
        let meal: Meal = serde_yaml::from_str(
            "name: Porridge\nrecipe: https://example.com/porridge\nkcal: 300\nmeal_type: breakfast\n",
        )
        .unwrap();
        assert_eq!(meal.meal_type, MealType::Breakfast);
        assert_eq!(meal.kcal, 300.0);
    }

    #[test]
    fn push_extends_catalog() {
        let mut catalog = MealCatalog::default();
        assert!(catalog.is_empty());
        catalog.push(Meal::new("Toast", "https://example.com", 200.0, MealType::Breakfast));
        assert_eq!(catalog.meals().len(), 1);
    }
}
