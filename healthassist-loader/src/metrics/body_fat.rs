use healthassist_model::{
    metrics::{BfpMethod, BodyFat, BodyFatCategory, Notice},
    user::{Gender, UserRecord},
};
use log::{debug, warn};

const BMI_BOUNDS: [f64; 3] = [18.5, 25.0, 30.0];

/// Estimates body fat with `method` and stores the truncated percentage and category on
/// `user`. Records that cannot be classified keep an unset category and yield a notice.
pub fn compute_bfp(method: BfpMethod, user: &mut UserRecord) -> Option<Notice> {
    let (body_fat, notice) = match method {
        BfpMethod::Bmi => (bmi(user), None),
        BfpMethod::UsNavy => us_navy(user),
    };
    debug!("{}: body fat {:?}", user.name, body_fat);
    user.body_fat = Some(body_fat);

    if let Some(notice) = &notice {
        warn!("{}: {}", user.name, notice);
    }
    notice
}

fn bmi(user: &UserRecord) -> BodyFat {
    let bmi = get_body_mass_index(user.weight, user.height);
    BodyFat {
        method: BfpMethod::Bmi,
        percent: bmi as i32,
        category: Some(BodyFatCategory::classify(bmi, BMI_BOUNDS)),
    }
}

fn us_navy(user: &UserRecord) -> (BodyFat, Option<Notice>) {
    let unclassified = |percent: f64| BodyFat {
        method: BfpMethod::UsNavy,
        percent: percent as i32,
        category: None,
    };

    let Some(percentage) = get_us_navy_percentage(user) else {
        return (
            unclassified(0.0),
            Some(Notice::UnsupportedGender(user.gender.to_string())),
        );
    };

    match get_us_navy_bounds(&user.gender, user.age) {
        Some(bounds) => (
            BodyFat {
                category: Some(BodyFatCategory::classify(percentage, bounds)),
                ..unclassified(percentage)
            },
            None,
        ),
        None => (
            unclassified(percentage),
            Some(Notice::AgeOutsideClassification { age: user.age }),
        ),
    }
}

/// Weight in kilograms over height in meters squared.
pub fn get_body_mass_index(weight: f64, height_cm: f64) -> f64 {
    weight * 100.0 * 100.0 / (height_cm * height_cm)
}

/// US Navy circumference estimate. All measurements in centimeters.
fn get_us_navy_percentage(user: &UserRecord) -> Option<f64> {
    match user.gender {
        Gender::Female => Some(
            495.0
                / (1.29579 - 0.35004 * (user.waist + user.hip - user.neck).log10()
                    + 0.22100 * user.height.log10())
                - 450.0,
        ),
        Gender::Male => Some(
            495.0
                / (1.0324 - 0.19077 * (user.waist - user.neck).log10()
                    + 0.15456 * user.height.log10())
                - 450.0,
        ),
        Gender::Other(_) => None,
    }
}

fn get_us_navy_bounds(gender: &Gender, age: i32) -> Option<[f64; 3]> {
    match (gender, age) {
        (Gender::Female, 20..=39) => Some([21.0, 33.0, 39.0]),
        (Gender::Female, 40..=59) => Some([23.0, 34.0, 40.0]),
        (Gender::Female, 60..=79) => Some([24.0, 36.0, 42.0]),
        (Gender::Male, 20..=39) => Some([8.0, 20.0, 25.0]),
        (Gender::Male, 40..=59) => Some([11.0, 22.0, 28.0]),
        (Gender::Male, 60..=79) => Some([13.0, 25.0, 30.0]),
        _ => None,
    }
}
