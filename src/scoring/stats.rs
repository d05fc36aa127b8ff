//! Descriptive statistics over trait samples.
//!
//! Every function here refuses an empty sample with [`Error::EmptyInput`]
//! rather than returning `NaN` from a zero division.

use crate::core::{Error, Result};

pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::empty_input("cannot take the mean of zero values"));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance: the mean squared deviation from the mean.
pub fn variance(values: &[f64]) -> Result<f64> {
    let mean = mean(values)?;
    let sum_of_squares: f64 = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum();
    Ok(sum_of_squares / values.len() as f64)
}

/// Percentage of `population` strictly below `score`, in [0, 100].
///
/// A score above every member ranks 100; a score at or below the minimum
/// ranks 0. The population is sorted on a copy.
pub fn percentile(score: f64, population: &[f64]) -> Result<f64> {
    if population.is_empty() {
        return Err(Error::empty_input(
            "cannot rank a score within an empty population",
        ));
    }
    if !score.is_finite() || population.iter().any(|v| !v.is_finite()) {
        return Err(Error::invalid_input("percentile requires finite values"));
    }

    let mut sorted = population.to_vec();
    sorted.sort_by(f64::total_cmp);

    let below = sorted.partition_point(|&v| v < score);
    Ok(below as f64 / sorted.len() as f64 * 100.0)
}
