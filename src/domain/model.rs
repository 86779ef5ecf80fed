use serde::{Deserialize, Serialize};
use std::fmt;

/// A person's height (meters) and weight (kilograms).
///
/// Field order matches coder list CSV columns: `height,weight`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coder {
    height: f64,
    weight: f64,
}

impl Coder {
    pub fn new(height: f64, weight: f64) -> Self {
        Self { height, weight }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// One row of a diet fixture, columns `weight,height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DietCase {
    pub weight: f64,
    pub height: f64,
}

impl DietCase {
    pub fn new(weight: f64, height: f64) -> Self {
        Self { weight, height }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietAssessment {
    pub weight: f64,
    pub height: f64,
    pub bmi: f64,
    pub recommended: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietReport {
    pub assessments: Vec<DietAssessment>,
    pub recommended_count: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingReport {
    pub coders: Vec<Coder>,
    pub scores: Vec<f64>,
    pub worst: Option<Coder>,
}

impl fmt::Display for DietReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>8} {:>8} {:>8}  diet", "weight", "height", "bmi")?;
        for a in &self.assessments {
            writeln!(
                f,
                "{:>8.2} {:>8.2} {:>8.2}  {}",
                a.weight,
                a.height,
                a.bmi,
                if a.recommended { "recommended" } else { "-" }
            )?;
        }
        write!(
            f,
            "Diet recommended for {}/{} cases",
            self.recommended_count, self.total
        )
    }
}

impl fmt::Display for RankingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>8} {:>8} {:>8}", "height", "weight", "bmi")?;
        for (coder, score) in self.coders.iter().zip(&self.scores) {
            writeln!(
                f,
                "{:>8.2} {:>8.2} {:>8.2}",
                coder.height(),
                coder.weight(),
                score
            )?;
        }
        match &self.worst {
            Some(coder) => write!(
                f,
                "Worst BMI: height {} m, weight {} kg",
                coder.height(),
                coder.weight()
            ),
            None => write!(f, "No coders to rank"),
        }
    }
}
