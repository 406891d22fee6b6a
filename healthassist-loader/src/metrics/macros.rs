use healthassist_model::{metrics::MacroBreakdown, user::UserRecord};

const CARBS_SHARE: f64 = 0.50;
const PROTEIN_SHARE: f64 = 0.30;
const FAT_SHARE: f64 = 0.20;

const CARBS_KCAL_PER_GRAM: f64 = 4.0;
const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Splits the daily calorie target of `user` into macronutrient grams. Only meaningful
/// once the calorie target has been computed.
pub fn compute_meal_prep(user: &mut UserRecord) {
    user.macros = Some(get_macro_breakdown(user.daily_calories));
}

pub fn get_macro_breakdown(daily_calories: u32) -> MacroBreakdown {
    let calories = daily_calories as f64;
    MacroBreakdown {
        carbs: calories * CARBS_SHARE / CARBS_KCAL_PER_GRAM,
        protein: calories * PROTEIN_SHARE / PROTEIN_KCAL_PER_GRAM,
        fat: calories * FAT_SHARE / FAT_KCAL_PER_GRAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_of_2000_calories() {
        let macros = get_macro_breakdown(2000);

        assert_eq!(macros.carbs, 250.0);
        assert_eq!(macros.protein, 150.0);
        assert!((macros.fat - 44.444).abs() < 0.001);

        let total = macros.carbs * CARBS_KCAL_PER_GRAM
            + macros.protein * PROTEIN_KCAL_PER_GRAM
            + macros.fat * FAT_KCAL_PER_GRAM;
        assert!((total - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn zero_calories_give_zero_grams() {
        assert_eq!(get_macro_breakdown(0), MacroBreakdown::default());
    }
}
