pub mod assistant;
pub mod config;
pub mod metrics;
pub mod stats;

use healthassist_db::{
    record::{parse_record_line, ParseError},
    roster::UserRecordStore,
    source::{RecordSource, SourceError},
};
use healthassist_model::{metrics::BfpMethod, user::UserRecord};
use log::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("malformed record on line {line} of {name}")]
    Parse {
        name: String,
        line: usize,
        #[source]
        error: ParseError,
    },
}

type Result<T> = std::result::Result<T, LoadError>;

/// Reads records from a named source and runs the calculators over them.
pub struct BatchLoader<'a> {
    source: &'a dyn RecordSource,
}

impl<'a> BatchLoader<'a> {
    pub fn new(source: &'a dyn RecordSource) -> Self {
        Self { source }
    }

    /// Parses every record of `name` without computing anything. Blank lines are skipped;
    /// any malformed line fails the whole read.
    pub fn read_records(&self, name: &str) -> Result<Vec<UserRecord>> {
        let lines = self.source.read_lines(name)?;
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                debug!("{}:{}: {}", name, i + 1, line);
                parse_record_line(line).map_err(|error| LoadError::Parse {
                    name: name.to_owned(),
                    line: i + 1,
                    error,
                })
            })
            .collect()
    }

    /// Loads `name` into `roster`, computing body fat with `method` followed by daily
    /// calories and macronutrients for each record. Nothing is added if any record fails
    /// to parse.
    pub fn load_into(
        &self,
        name: &str,
        method: BfpMethod,
        roster: &mut UserRecordStore,
    ) -> Result<usize> {
        let records = self.read_records(name)?;
        let count = records.len();
        for mut record in records {
            metrics::compute_all(method, &mut record);
            roster.add(record);
        }
        info!("Loaded {} records from {} using {} method", count, name, method);
        Ok(count)
    }

    /// Loads `name` into a fresh roster.
    pub fn load(&self, name: &str, method: BfpMethod) -> Result<UserRecordStore> {
        let mut roster = UserRecordStore::new();
        self.load_into(name, method, &mut roster)?;
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use healthassist_db::source::MockRecordSource;
    use healthassist_model::metrics::BodyFatCategory;

    use super::*;

    fn source(lines: &'static [&'static str]) -> MockRecordSource {
        let mut source = MockRecordSource::new();
        source
            .expect_read_lines()
            .returning(move |_| Ok(lines.iter().map(|l| l.to_string()).collect()));
        source
    }

    #[test]
    fn load_computes_every_record() {
        let source = source(&[
            "jack,male,28,72,91,43,,172,sedentary",
            "jill,female,45,61,68,36,70.0,170,active",
            "",
        ]);

        let roster = BatchLoader::new(&source)
            .load("users.csv", BfpMethod::Bmi)
            .unwrap();

        assert_eq!(roster.len(), 2);
        let jack = roster.find_by_name("jack").unwrap();
        assert_eq!(jack.body_fat.unwrap().percent, 24);
        assert_eq!(jack.body_fat.unwrap().category, Some(BodyFatCategory::Normal));
        assert_eq!(jack.daily_calories, 2400);
        assert_eq!(jack.macros.unwrap().carbs, 300.0);
        let jill = roster.find_by_name("jill").unwrap();
        assert_eq!(jill.daily_calories, 2200);
        assert_eq!(jill.category_label(), "Bmi: Normal");
    }

    #[test]
    fn read_records_leaves_derived_fields_unset() {
        let source = source(&["jack,male,28,72,91,43,,172,sedentary"]);

        let records = BatchLoader::new(&source).read_records("users.csv").unwrap();

        assert_eq!(records[0].body_fat, None);
        assert_eq!(records[0].daily_calories, 0);
        assert_eq!(records[0].macros, None);
    }

    #[test]
    fn malformed_line_fails_whole_batch() {
        let source = source(&[
            "jack,male,28,72,91,43,,172,sedentary",
            "jill,female,twenty,61,68,36,70.0,170,active",
        ]);
        let mut roster = UserRecordStore::new();

        let result = BatchLoader::new(&source).load_into("users.csv", BfpMethod::Bmi, &mut roster);

        assert!(matches!(result, Err(LoadError::Parse { line: 2, .. })));
        assert!(roster.is_empty());
    }

    #[test]
    fn source_errors_propagate() {
        let mut source = MockRecordSource::new();
        source.expect_read_lines().returning(|name| {
            Err(SourceError::Missing {
                name: name.to_owned(),
                source: io::Error::from(io::ErrorKind::NotFound),
            })
        });

        let result = BatchLoader::new(&source).load("absent.csv", BfpMethod::UsNavy);

        assert!(matches!(
            result,
            Err(LoadError::Source(SourceError::Missing { .. }))
        ));
    }
}
