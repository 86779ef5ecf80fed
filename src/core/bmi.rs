//! Body-mass-index calculations.
//!
//! Heights are meters and weights are kilograms. Positivity is not checked; the only
//! rejected input is a height whose square is zero.

use crate::domain::model::Coder;
use crate::utils::error::{HealthError, Result};

/// BMI at or above which a diet is recommended.
pub const DIET_THRESHOLD: f64 = 25.0;

/// Decimal places kept by [`get_bmi_scores`].
pub const SCORE_DECIMALS: i32 = 2;

/// Returns `weight / height²`.
///
/// Fails with [`HealthError::ZeroHeight`] instead of producing infinity or NaN. Heights
/// so small that their square underflows to zero count as zero.
pub fn compute_bmi(weight: f64, height: f64) -> Result<f64> {
    let squared = height * height;
    if squared == 0.0 {
        return Err(HealthError::ZeroHeight { weight });
    }
    Ok(weight / squared)
}

pub fn is_diet_recommended(weight: f64, height: f64) -> Result<bool> {
    Ok(compute_bmi(weight, height)? >= DIET_THRESHOLD)
}

/// Coder with the highest BMI, or `None` for an empty slice.
///
/// The first coder wins among equal maxima. Coders whose BMI is NaN are never picked.
pub fn find_worst_bmi(coders: &[Coder]) -> Result<Option<&Coder>> {
    let mut worst: Option<(&Coder, f64)> = None;

    for coder in coders {
        let bmi = compute_bmi(coder.weight(), coder.height())?;
        if bmi.is_nan() {
            continue;
        }
        match worst {
            Some((_, max)) if bmi > max => worst = Some((coder, bmi)),
            None => worst = Some((coder, bmi)),
            _ => {}
        }
    }

    Ok(worst.map(|(coder, _)| coder))
}

/// BMI of every coder, in input order, rounded to [`SCORE_DECIMALS`] places.
pub fn get_bmi_scores(coders: &[Coder]) -> Result<Vec<f64>> {
    coders
        .iter()
        .map(|coder| {
            compute_bmi(coder.weight(), coder.height()).map(|bmi| round_to(bmi, SCORE_DECIMALS))
        })
        .collect()
}

/// Rounds half away from zero, which is half-up for the positive values BMI takes.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
