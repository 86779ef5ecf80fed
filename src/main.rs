use clap::Parser;
use healthy_coder::core::bmi::{self, SCORE_DECIMALS};
use healthy_coder::core::ConfigProvider;
use healthy_coder::utils::{logger, validation::Validate};
use healthy_coder::{AppConfig, AssessmentEngine, CliConfig, Command, CsvFixture, Result};
use serde::Serialize;
use std::fmt::Display;

fn main() {
    let cli = CliConfig::parse();

    // Config decides the log format, so it loads before the logger exists.
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if config.log_json() {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting healthy-coder");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli, &config) {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn load_config(cli: &CliConfig) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

fn run(cli: &CliConfig, config: &AppConfig) -> Result<()> {
    let json = config.json_output();

    match &cli.command {
        Command::Bmi { weight, height } => {
            let value = bmi::round_to(bmi::compute_bmi(*weight, *height)?, SCORE_DECIMALS);
            if json {
                print_json(&serde_json::json!({
                    "weight": weight,
                    "height": height,
                    "bmi": value,
                }))
            } else {
                println!("BMI: {:.2}", value);
                Ok(())
            }
        }
        Command::Diet { weight, height } => {
            let recommended = bmi::is_diet_recommended(*weight, *height)?;
            if json {
                print_json(&serde_json::json!({
                    "weight": weight,
                    "height": height,
                    "recommended": recommended,
                }))
            } else {
                let verdict = if recommended {
                    "Diet recommended"
                } else {
                    "Diet not recommended"
                };
                println!("{}", verdict);
                Ok(())
            }
        }
        Command::Assess { .. } => {
            let engine = AssessmentEngine::new(CsvFixture::from_config(config));
            print_report(&engine.assess_diet()?, json)
        }
        Command::Rank { .. } => {
            let engine = AssessmentEngine::new(CsvFixture::from_config(config));
            print_report(&engine.rank_coders()?, json)
        }
    }
}

fn print_report<T: Serialize + Display>(report: &T, json: bool) -> Result<()> {
    if json {
        print_json(report)
    } else {
        println!("{}", report);
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
