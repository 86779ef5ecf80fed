pub mod bmi;
pub mod engine;

pub use crate::domain::model::{Coder, DietAssessment, DietCase, DietReport, RankingReport};
pub use crate::domain::ports::{ConfigProvider, FixtureSource};
pub use crate::utils::error::Result;
