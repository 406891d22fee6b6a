use healthassist_model::{
    metrics::Notice,
    user::{Gender, Lifestyle, UserRecord},
};
use log::{debug, warn};

/// Stores the recommended daily calorie intake on `user`. Unsupported genders yield 0
/// and a notice. Ages below 19 and unknown lifestyles silently yield 0.
pub fn compute_daily_calories(user: &mut UserRecord) -> Option<Notice> {
    if !user.gender.is_supported() {
        user.daily_calories = 0;
        let notice = Notice::UnsupportedGender(user.gender.to_string());
        warn!("{}: {}, daily calorie intake could not be processed", user.name, notice);
        return Some(notice);
    }

    user.daily_calories = get_daily_calories(&user.gender, user.age, &user.lifestyle);
    if user.daily_calories == 0 {
        debug!(
            "{}: no calorie target for age {} and lifestyle {}",
            user.name, user.age, user.lifestyle
        );
    }
    None
}

/// Calories needed to maintain current weight, by gender, age bracket and activity level.
pub fn get_daily_calories(gender: &Gender, age: i32, lifestyle: &Lifestyle) -> u32 {
    let column = match lifestyle {
        Lifestyle::Sedentary => 0,
        Lifestyle::Moderate => 1,
        Lifestyle::Active => 2,
        Lifestyle::Other(_) => return 0,
    };

    let row: [u32; 3] = match (gender, age) {
        (Gender::Male, 19..=30) => [2400, 2800, 3000],
        (Gender::Male, 31..=50) => [2200, 2600, 3000],
        (Gender::Male, 51..=i32::MAX) => [2000, 2400, 2800],
        (Gender::Female, 19..=30) => [2000, 2200, 2400],
        (Gender::Female, 31..=50) => [1800, 2000, 2200],
        (Gender::Female, 51..=i32::MAX) => [1600, 1800, 2200],
        _ => return 0,
    };

    row[column]
}

#[cfg(test)]
mod tests {
    use healthassist_model::user::Measurements;

    use super::*;

    #[test]
    fn calorie_table() {
        let test_data = [
            (Gender::Male, 19, Lifestyle::Sedentary, 2400),
            (Gender::Male, 30, Lifestyle::Moderate, 2800),
            (Gender::Male, 25, Lifestyle::Active, 3000),
            (Gender::Male, 31, Lifestyle::Sedentary, 2200),
            (Gender::Male, 50, Lifestyle::Moderate, 2600),
            (Gender::Male, 45, Lifestyle::Active, 3000),
            (Gender::Male, 51, Lifestyle::Sedentary, 2000),
            (Gender::Male, 70, Lifestyle::Moderate, 2400),
            (Gender::Male, 90, Lifestyle::Active, 2800),
            (Gender::Female, 19, Lifestyle::Sedentary, 2000),
            (Gender::Female, 30, Lifestyle::Moderate, 2200),
            (Gender::Female, 22, Lifestyle::Active, 2400),
            (Gender::Female, 31, Lifestyle::Sedentary, 1800),
            (Gender::Female, 40, Lifestyle::Moderate, 2000),
            (Gender::Female, 50, Lifestyle::Active, 2200),
            (Gender::Female, 51, Lifestyle::Sedentary, 1600),
            (Gender::Female, 60, Lifestyle::Moderate, 1800),
            (Gender::Female, 79, Lifestyle::Active, 2200),
            (Gender::Male, 18, Lifestyle::Active, 0),
            (Gender::Female, 0, Lifestyle::Sedentary, 0),
            (Gender::Male, 25, Lifestyle::Other("lazy".to_owned()), 0),
        ];

        for (i, (gender, age, lifestyle, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(
                get_daily_calories(&gender, age, &lifestyle),
                expected,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn unsupported_gender_is_reported() {
        let mut user = UserRecord::new(
            "test",
            Gender::Other("robot".to_owned()),
            30,
            Measurements::default(),
            Lifestyle::Active,
        );
        user.daily_calories = 1234;

        assert_eq!(
            compute_daily_calories(&mut user),
            Some(Notice::UnsupportedGender("robot".to_owned()))
        );
        assert_eq!(user.daily_calories, 0);
    }

    #[test]
    fn too_young_is_silent() {
        let mut user = UserRecord::new(
            "test",
            Gender::Female,
            17,
            Measurements::default(),
            Lifestyle::Active,
        );

        assert_eq!(compute_daily_calories(&mut user), None);
        assert_eq!(user.daily_calories, 0);
    }
}
