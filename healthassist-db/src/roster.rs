use healthassist_model::{profile::Profile, user::UserRecord};
use log::debug;

use crate::record::format_record_line;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("no user in list")]
    EmptyRoster,
    #[error("user {0} not found")]
    NotFound(String),
}

type Result<T> = std::result::Result<T, LookupError>;

/// Ordered roster of user records. Names are not required to be unique; lookups
/// return the first match.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UserRecordStore {
    records: Vec<UserRecord>,
}

impl UserRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: UserRecord) {
        debug!("Adding user {}", record.name);
        self.records.push(record);
    }

    fn position(&self, name: &str) -> Result<usize> {
        if self.records.is_empty() {
            return Err(LookupError::EmptyRoster);
        }
        self.records
            .iter()
            .position(|record| record.name == name)
            .ok_or_else(|| LookupError::NotFound(name.to_owned()))
    }

    pub fn find_by_name(&self, name: &str) -> Result<&UserRecord> {
        self.position(name).map(|i| &self.records[i])
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Result<&mut UserRecord> {
        let i = self.position(name)?;
        Ok(&mut self.records[i])
    }

    /// Removes the first record called `name`. Does nothing if there is none.
    pub fn remove_by_name(&mut self, name: &str) -> Option<UserRecord> {
        let i = self.position(name).ok()?;
        debug!("Removing user {}", name);
        Some(self.records.remove(i))
    }

    pub fn list(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn list_one(&self, name: &str) -> Result<Profile<'_>> {
        self.find_by_name(name).map(Profile)
    }

    /// Raw attributes of every record, one line each, in roster order.
    pub fn lines(&self) -> Vec<String> {
        self.records.iter().map(format_record_line).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<UserRecord> for UserRecordStore {
    fn from_iter<I: IntoIterator<Item = UserRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a UserRecordStore {
    type Item = &'a UserRecord;
    type IntoIter = std::slice::Iter<'a, UserRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
