pub mod metrics;
pub mod profile;
pub mod user;
