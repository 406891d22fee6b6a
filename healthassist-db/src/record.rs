use std::str::FromStr;

use healthassist_model::user::{Gender, Lifestyle, UserRecord};
use itertools::Itertools;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("missing field {0}")]
    MissingField(&'static str),
    #[error("invalid number \"{value}\" in field {field}")]
    InvalidNumber { field: &'static str, value: String },
}

type Result<T> = std::result::Result<T, ParseError>;

const FIELD_COUNT: usize = 9;

fn number<T: FromStr>(field: &'static str, token: Option<&str>) -> Result<T> {
    let token = token.ok_or(ParseError::MissingField(field))?;
    token
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber {
            field,
            value: token.to_owned(),
        })
}

fn text<'a>(field: &'static str, token: Option<&'a str>) -> Result<&'a str> {
    token.ok_or(ParseError::MissingField(field))
}

/// Parses one `name,gender,age,weight,waist,neck,hip,height,lifestyle` line into a record
/// with raw attributes only. An empty hip reads as 0.0 and the lifestyle takes the rest of
/// the line.
pub fn parse_record_line(line: &str) -> Result<UserRecord> {
    let mut tokens = line.trim_end_matches(['\r', '\n']).splitn(FIELD_COUNT, ',');

    let name = text("name", tokens.next())?.to_owned();
    let gender = Gender::from(text("gender", tokens.next())?.to_owned());
    let age = number("age", tokens.next())?;
    let weight = number("weight", tokens.next())?;
    let waist = number("waist", tokens.next())?;
    let neck = number("neck", tokens.next())?;
    let hip = match text("hip", tokens.next())? {
        token if token.trim().is_empty() => 0.0,
        token => number("hip", Some(token))?,
    };
    let height = number("height", tokens.next())?;
    let lifestyle = Lifestyle::from(text("lifestyle", tokens.next())?.to_owned());

    Ok(UserRecord {
        name,
        gender,
        age,
        weight,
        height,
        waist,
        neck,
        hip,
        lifestyle,
        body_fat: None,
        daily_calories: 0,
        macros: None,
    })
}

/// Formats the raw attributes of a record as one line, without a line terminator. The hip
/// field is left empty for anyone but females.
pub fn format_record_line(record: &UserRecord) -> String {
    let hip = if record.gender.is_female() {
        record.hip.to_string()
    } else {
        String::new()
    };

    [
        record.name.clone(),
        record.gender.to_string(),
        record.age.to_string(),
        record.weight.to_string(),
        record.waist.to_string(),
        record.neck.to_string(),
        hip,
        record.height.to_string(),
        record.lifestyle.to_string(),
    ]
    .into_iter()
    .join(",")
}
