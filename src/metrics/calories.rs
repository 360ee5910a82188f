//! Daily calorie needs.

use super::{ActivityLevel, Gender};

/// Daily calories from the Mifflin-St Jeor BMR.
///
/// Weight in kilograms, height in centimetres, age in years. The result is
/// not rounded.
pub fn calculate_calories(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    activity: ActivityLevel,
) -> f64 {
    let bmr = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + gender.bmr_offset();
    bmr * activity.factor()
}

/// Daily calories from the Katch-McArdle BMR, rounded to whole calories.
///
/// `body_fat_pct` is a percentage (20.0 means 20%).
pub fn calculate_calories_bfat(weight_kg: f64, body_fat_pct: f64, activity: ActivityLevel) -> u32 {
    let lean_mass = (1.0 - body_fat_pct / 100.0) * weight_kg;
    let bmr = 370.0 + 21.6 * lean_mass;
    (bmr * activity.factor()).round().max(0.0) as u32
}
