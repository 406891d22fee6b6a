pub mod body_fat;
pub mod calories;
pub mod macros;

use healthassist_model::{
    metrics::{BfpMethod, Notice},
    user::UserRecord,
};

pub use body_fat::compute_bfp;
pub use calories::compute_daily_calories;
pub use macros::compute_meal_prep;

/// Runs body fat, daily calorie and macronutrient computations on `user`, in that order.
pub fn compute_all(method: BfpMethod, user: &mut UserRecord) -> Vec<Notice> {
    let mut notices: Vec<Notice> = compute_bfp(method, user).into_iter().collect();
    notices.extend(compute_daily_calories(user));
    compute_meal_prep(user);
    notices
}
