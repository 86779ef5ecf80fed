pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::csv_fixture::{CsvFixture, FixtureOptions};
pub use config::toml_config::AppConfig;
pub use core::bmi::{compute_bmi, find_worst_bmi, get_bmi_scores, is_diet_recommended};
pub use core::engine::AssessmentEngine;
pub use domain::model::Coder;
pub use utils::error::{HealthError, Result};
