use crate::domain::model::{Coder, DietCase};
use crate::utils::error::Result;

/// Where measurement rows come from.
pub trait FixtureSource: Send + Sync {
    fn diet_cases(&self) -> Result<Vec<DietCase>>;
    fn coders(&self) -> Result<Vec<Coder>>;
}

pub trait ConfigProvider: Send + Sync {
    fn diet_cases_path(&self) -> Option<&str>;
    fn coders_path(&self) -> Option<&str>;
    fn skip_lines(&self) -> usize;
    fn delimiter(&self) -> u8;
    fn json_output(&self) -> bool;
}
