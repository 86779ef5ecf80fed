pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use toml_config::AppConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "healthy-coder")]
#[command(about = "Body-mass-index calculator and diet assessment tool")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Print reports as JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compute the BMI for a weight (kg) and height (m)
    Bmi {
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        height: f64,
    },
    /// Tell whether a diet is recommended for a weight (kg) and height (m)
    Diet {
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        height: f64,
    },
    /// Assess every row of a `weight,height` CSV fixture
    Assess {
        /// Defaults to fixture.diet_cases from the config
        file: Option<String>,
    },
    /// Score a `height,weight` CSV list of coders and find the worst BMI
    Rank {
        /// Defaults to fixture.coders from the config
        file: Option<String>,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Command-line values take precedence over the config file.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        match &self.command {
            Command::Assess { file: Some(file) } => {
                config.fixture.diet_cases = Some(file.clone());
            }
            Command::Rank { file: Some(file) } => {
                config.fixture.coders = Some(file.clone());
            }
            _ => {}
        }

        if self.json {
            config.output.format = Some("json".to_string());
        }
    }
}
