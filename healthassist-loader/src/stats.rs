use std::fmt;

use healthassist_db::{
    roster::UserRecordStore,
    source::{RecordFiles, RecordSource},
};
use healthassist_model::{metrics::BfpMethod, user::Gender};
use itertools::Itertools;
use log::info;
use rustc_hash::FxHashMap;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::{config::Config, BatchLoader, LoadError};

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("{0} holds no records")]
    EmptyPopulation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MethodStats {
    pub healthy_percent: usize,
    pub healthy_male_percent: usize,
    pub healthy_female_percent: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    pub total_users: usize,
    pub male_percent: usize,
    pub female_percent: usize,
    pub bmi: MethodStats,
    pub us_navy: MethodStats,
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total users: {}", self.total_users)?;
        writeln!(
            f,
            "male/female percentage: {}% / {}%",
            self.male_percent, self.female_percent
        )?;
        for (label, stats) in [("bmi", &self.bmi), ("us", &self.us_navy)] {
            writeln!(f, "healthy {}: {}%", label, stats.healthy_percent)?;
            writeln!(
                f,
                "healthy {} male/female: {}% / {}%",
                label, stats.healthy_male_percent, stats.healthy_female_percent
            )?;
        }
        Ok(())
    }
}

/// Counts over one roster.
#[derive(Default)]
struct Tally<'a> {
    total: usize,
    by_gender: FxHashMap<&'a Gender, usize>,
    healthy: usize,
    healthy_by_gender: FxHashMap<&'a Gender, usize>,
}

impl<'a> Tally<'a> {
    fn of(roster: &'a UserRecordStore) -> Self {
        let mut tally = Self::default();
        for user in roster {
            tally.total += 1;
            *tally.by_gender.entry(&user.gender).or_default() += 1;
            if user.body_fat.as_ref().is_some_and(|b| b.is_normal()) {
                tally.healthy += 1;
                *tally.healthy_by_gender.entry(&user.gender).or_default() += 1;
            }
        }
        tally
    }

    fn gender_count(counts: &FxHashMap<&Gender, usize>, gender: &Gender) -> usize {
        counts.get(gender).copied().unwrap_or_default()
    }

    fn method_stats(&self, name: &str) -> Result<MethodStats, StatsError> {
        Ok(MethodStats {
            healthy_percent: percent(self.healthy, self.total, name)?,
            healthy_male_percent: percent(
                Self::gender_count(&self.healthy_by_gender, &Gender::Male),
                self.total,
                name,
            )?,
            healthy_female_percent: percent(
                Self::gender_count(&self.healthy_by_gender, &Gender::Female),
                self.total,
                name,
            )?,
        })
    }
}

/// Integer-truncated percentage of `count` in `total`.
fn percent(count: usize, total: usize, name: &str) -> Result<usize, StatsError> {
    (count * 100)
        .checked_div(total)
        .ok_or_else(|| StatsError::EmptyPopulation(name.to_owned()))
}

/// Population queries over the BMI and US Navy rosters. Every query reloads and
/// recomputes its rosters from the source.
pub struct PopulationStats {
    source: Box<dyn RecordSource>,
    config: Config,
}

impl PopulationStats {
    pub fn new(source: Box<dyn RecordSource>, config: Config) -> Self {
        Self { source, config }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Box::new(RecordFiles::new(&config.data_dir)), config.clone())
    }

    fn load(&self, method: BfpMethod) -> Result<UserRecordStore, LoadError> {
        BatchLoader::new(self.source.as_ref()).load(self.config.source_name(method), method)
    }

    fn select(
        &self,
        method: Option<BfpMethod>,
        gender: Option<&Gender>,
        healthy: bool,
    ) -> Result<Vec<String>, LoadError> {
        let methods = method.map_or_else(|| BfpMethod::iter().collect_vec(), |m| vec![m]);

        let mut names = Vec::new();
        for method in methods {
            let roster = self.load(method)?;
            names.extend(
                roster
                    .list()
                    .iter()
                    .filter(|user| gender.map_or(true, |g| &user.gender == g))
                    .filter(|user| {
                        user.body_fat.as_ref().is_some_and(|b| b.is_normal()) == healthy
                    })
                    .map(|user| user.name.clone()),
            );
        }
        Ok(names)
    }

    /// Names whose category is "Normal" under `method`, or under both methods when
    /// `method` is `None`, optionally restricted to `gender`.
    pub fn healthy_users(
        &self,
        method: Option<BfpMethod>,
        gender: Option<&Gender>,
    ) -> Result<Vec<String>, LoadError> {
        let names = self.select(method, gender, true)?;
        info!(
            "Healthy users ({}, {} method): {}",
            describe_gender(gender),
            describe_method(method),
            names.iter().join(", ")
        );
        Ok(names)
    }

    /// Names whose category is anything but "Normal", including unclassified records.
    pub fn unfit_users(
        &self,
        method: Option<BfpMethod>,
        gender: Option<&Gender>,
    ) -> Result<Vec<String>, LoadError> {
        let names = self.select(method, gender, false)?;
        info!(
            "Unfit users ({}, {} method): {}",
            describe_gender(gender),
            describe_method(method),
            names.iter().join(", ")
        );
        Ok(names)
    }

    /// Population summary over both rosters. Per-method percentages are relative to that
    /// method's roster; an empty roster is reported rather than divided by.
    pub fn full_stats(&self) -> Result<StatsReport, StatsError> {
        let bmi_roster = self.load(BfpMethod::Bmi)?;
        let us_roster = self.load(BfpMethod::UsNavy)?;
        let bmi = Tally::of(&bmi_roster);
        let us = Tally::of(&us_roster);

        let total_users = bmi.total + us.total;
        let gender_total = |gender: &Gender| {
            Tally::gender_count(&bmi.by_gender, gender) + Tally::gender_count(&us.by_gender, gender)
        };
        let all = format!("{} and {}", self.config.bmi_data, self.config.us_data);

        let report = StatsReport {
            total_users,
            male_percent: percent(gender_total(&Gender::Male), total_users, &all)?,
            female_percent: percent(gender_total(&Gender::Female), total_users, &all)?,
            bmi: bmi.method_stats(&self.config.bmi_data)?,
            us_navy: us.method_stats(&self.config.us_data)?,
        };
        info!("Computed population stats: {:?}", report);
        Ok(report)
    }
}

fn describe_gender(gender: Option<&Gender>) -> String {
    gender.map_or_else(|| "all".to_owned(), Gender::to_string)
}

fn describe_method(method: Option<BfpMethod>) -> String {
    method.map_or_else(|| "all".to_owned(), |m| m.to_string())
}
