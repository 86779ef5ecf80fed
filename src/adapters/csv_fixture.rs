use crate::domain::model::{Coder, DietCase};
use crate::domain::ports::{ConfigProvider, FixtureSource};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureOptions {
    /// Leading records to drop, header included.
    pub skip_lines: usize,
    pub delimiter: u8,
}

impl Default for FixtureOptions {
    fn default() -> Self {
        Self {
            skip_lines: 1,
            delimiter: b',',
        }
    }
}

#[derive(Debug, Clone)]
enum FixtureInput {
    File(PathBuf),
    Inline(String),
}

/// Reads measurement rows from CSV files or strings.
///
/// Columns are positional: diet cases are `weight,height`, coder lists are
/// `height,weight`.
#[derive(Debug, Clone, Default)]
pub struct CsvFixture {
    diet_cases: Option<FixtureInput>,
    coders: Option<FixtureInput>,
    options: FixtureOptions,
}

impl CsvFixture {
    pub fn new(options: FixtureOptions) -> Self {
        Self {
            diet_cases: None,
            coders: None,
            options,
        }
    }

    /// Builds a fixture from the configured paths and CSV options.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let mut fixture = Self::new(FixtureOptions {
            skip_lines: config.skip_lines(),
            delimiter: config.delimiter(),
        });
        if let Some(path) = config.diet_cases_path() {
            fixture = fixture.with_diet_cases_file(path);
        }
        if let Some(path) = config.coders_path() {
            fixture = fixture.with_coders_file(path);
        }
        fixture
    }

    pub fn with_diet_cases_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.diet_cases = Some(FixtureInput::File(path.into()));
        self
    }

    pub fn with_coders_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.coders = Some(FixtureInput::File(path.into()));
        self
    }

    pub fn with_diet_cases_str(mut self, content: impl Into<String>) -> Self {
        self.diet_cases = Some(FixtureInput::Inline(content.into()));
        self
    }

    pub fn with_coders_str(mut self, content: impl Into<String>) -> Self {
        self.coders = Some(FixtureInput::Inline(content.into()));
        self
    }

    pub fn options(&self) -> FixtureOptions {
        self.options
    }

    fn read_rows<T: DeserializeOwned>(
        &self,
        field: &str,
        input: &Option<FixtureInput>,
    ) -> Result<Vec<T>> {
        let input = validate_required_field(field, input)?;

        let content = match input {
            FixtureInput::File(path) => {
                tracing::debug!("Reading fixture file: {}", path.display());
                std::fs::read_to_string(path)?
            }
            FixtureInput::Inline(content) => content.clone(),
        };

        self.parse_rows(content.as_bytes())
    }

    fn parse_rows<T: DeserializeOwned>(&self, data: &[u8]) -> Result<Vec<T>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.options.delimiter)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(data);

        let mut rows = Vec::new();
        for record in reader.records().skip(self.options.skip_lines) {
            let record = record?;
            rows.push(record.deserialize(None)?);
        }

        tracing::debug!("Parsed {} fixture rows", rows.len());
        Ok(rows)
    }
}

impl FixtureSource for CsvFixture {
    fn diet_cases(&self) -> Result<Vec<DietCase>> {
        self.read_rows("fixture.diet_cases", &self.diet_cases)
    }

    fn coders(&self) -> Result<Vec<Coder>> {
        self.read_rows("fixture.coders", &self.coders)
    }
}
