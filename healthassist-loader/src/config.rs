use std::{env, path::PathBuf};

use dotenv::dotenv;
use healthassist_model::metrics::BfpMethod;
use log::debug;

const DATA_DIR_VAR: &str = "HEALTHASSIST_DATA_DIR";
const BMI_DATA_VAR: &str = "HEALTHASSIST_BMI_DATA";
const US_DATA_VAR: &str = "HEALTHASSIST_US_DATA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub bmi_data: String,
    pub us_data: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            bmi_data: "bmi_user_data.csv".to_owned(),
            us_data: "us_user_data.csv".to_owned(),
        }
    }
}

impl Config {
    /// Reads the configuration from the environment, loading `.env` first if present.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Self {
        dotenv().ok();
        let config = Self::from_vars(|key| env::var(key).ok());
        debug!("Using {:?}", config);
        config
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            data_dir: var(DATA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(default.data_dir),
            bmi_data: var(BMI_DATA_VAR).unwrap_or(default.bmi_data),
            us_data: var(US_DATA_VAR).unwrap_or(default.us_data),
        }
    }

    /// Roster file holding the records evaluated with `method`.
    pub fn source_name(&self, method: BfpMethod) -> &str {
        match method {
            BfpMethod::Bmi => &self.bmi_data,
            BfpMethod::UsNavy => &self.us_data,
        }
    }
}
