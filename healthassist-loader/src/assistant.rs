use healthassist_db::{
    roster::{LookupError, UserRecordStore},
    source::{RecordSink, RecordSource, SourceError},
};
use healthassist_model::{
    metrics::{BfpMethod, Notice},
    profile::Roster,
    user::UserRecord,
};
use log::{info, warn};

use crate::{metrics, BatchLoader, LoadError};

/// Operations on a roster of users, evaluating body fat with one method. Several
/// assistants may work on the same roster in turn.
pub struct HealthAssistant<'a> {
    method: BfpMethod,
    store: &'a mut UserRecordStore,
}

impl<'a> HealthAssistant<'a> {
    pub fn new(method: BfpMethod, store: &'a mut UserRecordStore) -> Self {
        Self { method, store }
    }

    pub fn store(&self) -> &UserRecordStore {
        self.store
    }

    pub fn add_user(&mut self, user: UserRecord) {
        self.store.add(user);
    }

    fn find_mut(&mut self, username: &str) -> Result<&mut UserRecord, LookupError> {
        self.store.find_by_name_mut(username).map_err(|e| {
            warn!("{}", e);
            e
        })
    }

    pub fn compute_bfp(&mut self, username: &str) -> Result<Option<Notice>, LookupError> {
        let method = self.method;
        self.find_mut(username)
            .map(|user| metrics::compute_bfp(method, user))
    }

    pub fn compute_daily_calories(
        &mut self,
        username: &str,
    ) -> Result<Option<Notice>, LookupError> {
        self.find_mut(username)
            .map(metrics::compute_daily_calories)
    }

    pub fn compute_meal_prep(&mut self, username: &str) -> Result<(), LookupError> {
        self.find_mut(username).map(metrics::compute_meal_prep)
    }

    /// Renders the profile of `username`, or of every user when `username` is "all".
    pub fn display(&self, username: &str) -> Result<String, LookupError> {
        if username == "all" {
            return Ok(Roster(self.store.list()).to_string());
        }
        self.store
            .list_one(username)
            .map(|profile| profile.to_string())
            .map_err(|e| {
                warn!("{}", e);
                e
            })
    }

    pub fn delete_user(&mut self, username: &str) -> Option<UserRecord> {
        info!("Deleting user by the name: {}", username);
        let removed = self.store.remove_by_name(username);
        if removed.is_none() {
            warn!("No user named {} to delete", username);
        }
        removed
    }

    /// Appends the raw attributes of every user to `target`.
    pub fn serialize(&self, sink: &dyn RecordSink, target: &str) -> Result<(), SourceError> {
        sink.append_lines(target, &self.store.lines())
    }

    /// Adds the raw records of `name` to the roster without computing anything.
    pub fn read_from_source(
        &mut self,
        source: &dyn RecordSource,
        name: &str,
    ) -> Result<usize, LoadError> {
        let records = BatchLoader::new(source).read_records(name)?;
        let count = records.len();
        records.into_iter().for_each(|record| self.store.add(record));
        info!("Read {} users from {}", count, name);
        Ok(count)
    }

    /// Adds the records of `name` to the roster, fully computed with this assistant's
    /// method.
    pub fn mass_load_and_compute(
        &mut self,
        source: &dyn RecordSource,
        name: &str,
    ) -> Result<usize, LoadError> {
        BatchLoader::new(source).load_into(name, self.method, self.store)
    }
}

#[cfg(test)]
mod tests {
    use healthassist_db::source::{MockRecordSink, MockRecordSource};
    use healthassist_model::{
        metrics::BodyFatCategory,
        user::{Gender, Lifestyle, Measurements},
    };

    use super::*;

    fn john() -> UserRecord {
        UserRecord::new(
            "John",
            Gender::Male,
            30,
            Measurements {
                weight: 70.0,
                height: 175.0,
                waist: 80.0,
                neck: 38.0,
                hip: 0.0,
            },
            Lifestyle::Active,
        )
    }

    #[test]
    fn methods_share_one_roster() {
        let mut store = UserRecordStore::new();

        let mut navy = HealthAssistant::new(BfpMethod::UsNavy, &mut store);
        navy.add_user(john());
        assert_eq!(navy.compute_bfp("john"), Ok(None));
        assert_eq!(navy.compute_daily_calories("john"), Ok(None));
        assert_eq!(navy.compute_meal_prep("john"), Ok(()));
        assert_eq!(navy.store().list()[0].category_label(), "USNavy: Normal");

        let mut bmi = HealthAssistant::new(BfpMethod::Bmi, &mut store);
        bmi.compute_bfp("john").unwrap();

        let john = store.find_by_name("john").unwrap();
        assert_eq!(john.category_label(), "Bmi: Normal");
        assert_eq!(john.body_fat.unwrap().category, Some(BodyFatCategory::Normal));
        assert_eq!(john.daily_calories, 3000);
        assert_eq!(john.macros.unwrap().protein, 225.0);
    }

    #[test]
    fn unknown_users_are_reported() {
        let mut store = UserRecordStore::new();
        let mut assistant = HealthAssistant::new(BfpMethod::Bmi, &mut store);

        assert_eq!(assistant.compute_bfp("jack"), Err(LookupError::EmptyRoster));

        assistant.add_user(john());
        assert_eq!(
            assistant.compute_meal_prep("jack"),
            Err(LookupError::NotFound("jack".to_owned()))
        );
        assert!(assistant.display("jack").is_err());
        assert_eq!(assistant.delete_user("jack"), None);
        assert_eq!(assistant.store().len(), 1);
    }

    #[test]
    fn display_all_lists_every_user() {
        let mut store = UserRecordStore::new();
        let mut assistant = HealthAssistant::new(BfpMethod::Bmi, &mut store);
        assistant.add_user(john());
        assistant.add_user(UserRecord::new(
            "jill",
            Gender::Female,
            25,
            Measurements::default(),
            Lifestyle::Moderate,
        ));

        let output = assistant.display("all").unwrap();

        assert!(output.contains("Name: john"));
        assert!(output.contains("Name: jill"));
        assert!(output.contains("--- END ALL USER ---"));
        assert!(assistant.display("jill").unwrap().contains("Name: jill"));
    }

    #[test]
    fn serialize_appends_raw_lines() {
        let mut store = UserRecordStore::new();
        let mut assistant = HealthAssistant::new(BfpMethod::UsNavy, &mut store);
        assistant.add_user(john());
        assistant.compute_bfp("john").unwrap();

        let mut sink = MockRecordSink::new();
        sink.expect_append_lines()
            .withf(|name, lines| {
                name == "us_user_data.csv" && lines == ["john,male,30,70,80,38,,175,active"]
            })
            .times(1)
            .returning(|_, _| Ok(()));

        assistant.serialize(&sink, "us_user_data.csv").unwrap();
    }

    #[test]
    fn read_from_source_keeps_records_raw() {
        let mut source = MockRecordSource::new();
        source
            .expect_read_lines()
            .returning(|_| Ok(vec!["jack,male,28,72,91,43,,172,sedentary".to_owned()]));
        let mut store = UserRecordStore::new();
        let mut assistant = HealthAssistant::new(BfpMethod::Bmi, &mut store);

        assert_eq!(assistant.read_from_source(&source, "users.csv").unwrap(), 1);
        assert_eq!(assistant.store().list()[0].body_fat, None);

        assert_eq!(
            assistant.mass_load_and_compute(&source, "users.csv").unwrap(),
            1
        );
        assert_eq!(assistant.store().len(), 2);
        assert_eq!(
            assistant.store().list()[1].category_label(),
            "Bmi: Normal"
        );
    }
}
