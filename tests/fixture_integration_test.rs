use anyhow::Result;
use healthy_coder::{AppConfig, AssessmentEngine, Coder, CsvFixture, HealthError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_assess_shipped_diet_fixture() -> Result<()> {
    let source = CsvFixture::default()
        .with_diet_cases_file(fixture("diet-recommended-input-data.csv"));
    let engine = AssessmentEngine::new(source);

    let report = engine.assess_diet()?;

    assert_eq!(report.total, 2);
    assert_eq!(report.recommended_count, 2);
    assert_eq!(report.assessments[0].bmi, 31.02);
    assert_eq!(report.assessments[1].bmi, 34.72);
    Ok(())
}

#[test]
fn test_rank_from_toml_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("healthy-coder.toml");
    let coders_path = fixture("coders.csv");

    std::fs::write(
        &config_path,
        format!(
            "[fixture]\ncoders = '{}'\nskip_lines = 1\n\n[output]\nformat = \"json\"\n",
            coders_path.display()
        ),
    )?;

    let config = AppConfig::from_file(&config_path)?;
    let engine = AssessmentEngine::new(CsvFixture::from_config(&config));

    let report = engine.rank_coders()?;

    assert_eq!(report.scores, vec![18.52, 29.59, 19.53]);
    assert_eq!(report.worst, Some(Coder::new(1.82, 98.0)));

    let json = serde_json::to_value(&report)?;
    assert_eq!(json["worst"]["weight"], 98.0);
    assert_eq!(json["scores"][1], 29.59);
    Ok(())
}

#[test]
fn test_zero_height_row_fails_the_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let csv_path = temp_dir.path().join("diet.csv");
    std::fs::write(&csv_path, "weight,height\n95.0,1.75\n80.0,0\n")?;

    let engine = AssessmentEngine::new(CsvFixture::default().with_diet_cases_file(&csv_path));

    let err = engine.assess_diet().unwrap_err();
    assert!(matches!(err, HealthError::ZeroHeight { weight } if weight == 80.0));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[test]
fn test_empty_coder_list_has_no_worst() -> Result<()> {
    let engine = AssessmentEngine::new(CsvFixture::default().with_coders_str("height,weight\n"));

    let report = engine.rank_coders()?;

    assert!(report.coders.is_empty());
    assert_eq!(report.worst, None);
    Ok(())
}
