use std::fmt::{Display, Formatter, Result};

use crate::user::UserRecord;

const WIDTH: usize = 60;

/// Centers `input` in a field of `width` columns, extra padding going to the right.
pub fn center(input: &str, width: usize) -> String {
    let len = input.chars().count();
    if len >= width {
        return input.to_owned();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), input, " ".repeat(right))
}

/// Human-readable profile summary of a single record.
pub struct Profile<'a>(pub &'a UserRecord);

impl Display for Profile<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let user = self.0;
        let (percent, label) = user
            .body_fat
            .as_ref()
            .map(|body_fat| (body_fat.percent, body_fat.label()))
            .unwrap_or_default();
        let macros = user.macros.unwrap_or_default();

        writeln!(f, "{}\n", center("--- USER PROFILE SUMMARY ---", WIDTH))?;

        writeln!(f, "{}", center("Personal Details:", WIDTH))?;
        writeln!(f, "{}", center(&format!("Name: {}", user.name), WIDTH))?;
        writeln!(f, "{}", center(&format!("Gender: {}", user.gender), WIDTH))?;
        writeln!(f, "{}", center(&format!("Age (years): {}", user.age), WIDTH))?;
        writeln!(
            f,
            "{}",
            center(&format!("Height (cm): {:.2}", user.height), WIDTH)
        )?;
        if user.gender.is_female() {
            writeln!(f, "{}", center(&format!("Hip (cm): {:.2}", user.hip), WIDTH))?;
        }

        writeln!(f, "\n{}", center("Body Measurements:", WIDTH))?;
        writeln!(
            f,
            "{}",
            center(&format!("Weight (kg): {:.2}", user.weight), WIDTH)
        )?;
        writeln!(
            f,
            "{}",
            center(&format!("Waist (cm): {:.2}", user.waist), WIDTH)
        )?;
        writeln!(f, "{}", center(&format!("Neck (cm): {:.2}", user.neck), WIDTH))?;

        writeln!(f, "\n{}", center("Lifestyle:", WIDTH))?;
        writeln!(
            f,
            "{}",
            center(&format!("Activity Level: {}", user.lifestyle), WIDTH)
        )?;

        writeln!(f, "\n{}", center("Health Metrics:", WIDTH))?;
        writeln!(
            f,
            "{}",
            center(
                &format!("Body Fat Percentage: {:.2}% ({})", percent as f64, label),
                WIDTH
            )
        )?;
        writeln!(
            f,
            "{}",
            center(
                &format!(
                    "Daily Caloric Intake (calories): {:.2}",
                    user.daily_calories as f64
                ),
                WIDTH
            )
        )?;

        writeln!(f, "\n{}", center("Macronutrient Breakdown (grams):", WIDTH))?;
        writeln!(f, "{}", center(&format!("Carbs: {:.2}g", macros.carbs), WIDTH))?;
        writeln!(
            f,
            "{}",
            center(&format!("Protein: {:.2}g", macros.protein), WIDTH)
        )?;
        writeln!(f, "{}", center(&format!("Fat: {:.2}g", macros.fat), WIDTH))
    }
}

/// Profile summaries of a whole roster between begin/end banners.
pub struct Roster<'a>(pub &'a [UserRecord]);

impl Display for Roster<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "{}\n", center("--- BEGIN ALL USER ---", WIDTH))?;
        for user in self.0 {
            writeln!(f, "{}", Profile(user))?;
        }
        writeln!(f, "{}", center("--- END ALL USER ---", WIDTH))
    }
}
