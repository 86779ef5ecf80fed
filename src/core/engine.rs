use crate::core::bmi::{self, SCORE_DECIMALS};
use crate::core::{DietAssessment, DietReport, FixtureSource, RankingReport};
use crate::utils::error::Result;

pub struct AssessmentEngine<S: FixtureSource> {
    source: S,
}

impl<S: FixtureSource> AssessmentEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn assess_diet(&self) -> Result<DietReport> {
        tracing::info!("Loading diet cases");
        let cases = self.source.diet_cases()?;
        tracing::info!("Loaded {} diet cases", cases.len());

        let mut assessments = Vec::with_capacity(cases.len());
        for case in cases {
            let value = bmi::compute_bmi(case.weight, case.height)?;
            let recommended = value >= bmi::DIET_THRESHOLD;
            tracing::debug!(
                weight = case.weight,
                height = case.height,
                bmi = value,
                recommended,
                "Assessed diet case"
            );
            assessments.push(DietAssessment {
                weight: case.weight,
                height: case.height,
                bmi: bmi::round_to(value, SCORE_DECIMALS),
                recommended,
            });
        }

        let recommended_count = assessments.iter().filter(|a| a.recommended).count();
        tracing::info!(
            "Diet recommended for {}/{} cases",
            recommended_count,
            assessments.len()
        );

        Ok(DietReport {
            total: assessments.len(),
            recommended_count,
            assessments,
        })
    }

    pub fn rank_coders(&self) -> Result<RankingReport> {
        tracing::info!("Loading coders");
        let coders = self.source.coders()?;
        tracing::info!("Loaded {} coders", coders.len());

        let scores = bmi::get_bmi_scores(&coders)?;
        let worst = bmi::find_worst_bmi(&coders)?.copied();

        match &worst {
            Some(coder) => tracing::info!(
                "Worst BMI: height {} m, weight {} kg",
                coder.height(),
                coder.weight()
            ),
            None => tracing::warn!("No coders to rank"),
        }

        Ok(RankingReport {
            coders,
            scores,
            worst,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coder, DietCase};
    use crate::utils::error::HealthError;

    struct MockSource {
        cases: Vec<DietCase>,
        coders: Vec<Coder>,
    }

    impl FixtureSource for MockSource {
        fn diet_cases(&self) -> Result<Vec<DietCase>> {
            Ok(self.cases.clone())
        }

        fn coders(&self) -> Result<Vec<Coder>> {
            Ok(self.coders.clone())
        }
    }

    fn engine(cases: Vec<DietCase>, coders: Vec<Coder>) -> AssessmentEngine<MockSource> {
        AssessmentEngine::new(MockSource { cases, coders })
    }

    #[test]
    fn assess_diet_counts_recommendations() {
        let report = engine(
            vec![
                DietCase::new(50.0, 1.92),
                DietCase::new(89.0, 1.72),
                DietCase::new(110.0, 1.78),
            ],
            vec![],
        )
        .assess_diet()
        .unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.recommended_count, 2);
        assert!(!report.assessments[0].recommended);
        assert_eq!(report.assessments[0].bmi, 13.56);
        assert!(report.assessments[1].recommended);
        assert_eq!(report.assessments[1].bmi, 30.08);
        assert!(report.assessments[2].recommended);
    }

    #[test]
    fn assess_diet_flags_match_the_threshold() {
        let cases = vec![
            DietCase::new(25.0, 1.0),
            DietCase::new(24.99, 1.0),
            DietCase::new(95.0, 1.75),
        ];
        let report = engine(cases.clone(), vec![]).assess_diet().unwrap();

        for (case, assessment) in cases.iter().zip(&report.assessments) {
            assert_eq!(
                assessment.recommended,
                bmi::is_diet_recommended(case.weight, case.height).unwrap()
            );
        }
        assert_eq!(report.recommended_count, 2);
    }

    #[test]
    fn assess_diet_propagates_zero_height() {
        let result = engine(
            vec![DietCase::new(95.0, 1.75), DietCase::new(0.0, 0.0)],
            vec![],
        )
        .assess_diet();
        assert!(matches!(result, Err(HealthError::ZeroHeight { .. })));
    }

    #[test]
    fn rank_coders_reports_scores_and_worst() {
        let report = engine(
            vec![],
            vec![
                Coder::new(1.80, 60.0),
                Coder::new(1.82, 98.0),
                Coder::new(1.82, 64.7),
            ],
        )
        .rank_coders()
        .unwrap();

        assert_eq!(report.scores, vec![18.52, 29.59, 19.53]);
        assert_eq!(report.worst, Some(Coder::new(1.82, 98.0)));
    }

    #[test]
    fn rank_coders_with_no_coders() {
        let report = engine(vec![], vec![]).rank_coders().unwrap();
        assert!(report.scores.is_empty());
        assert_eq!(report.worst, None);
    }
}
