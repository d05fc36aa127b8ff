//! Optional interaction matrix between the members of an organization.

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Square matrix of interaction weights, one row and column per profile in
/// input order. `weights[i][j]` is how strongly member `i` interacts with
/// member `j`. Weights are expected in [0, 1]; larger weights are treated
/// as 1. The diagonal is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionMatrix {
    weights: Vec<Vec<f64>>,
}

impl InteractionMatrix {
    pub fn new(weights: Vec<Vec<f64>>) -> Self {
        Self { weights }
    }

    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[i][j].min(1.0)
    }

    /// Check the matrix is square, matches `members`, and holds finite,
    /// non-negative weights.
    pub fn validate(&self, members: usize) -> Result<()> {
        if self.weights.len() != members {
            return Err(Error::invalid_input(format!(
                "interaction matrix has {} rows for {} profiles",
                self.weights.len(),
                members
            )));
        }
        for (i, row) in self.weights.iter().enumerate() {
            if row.len() != members {
                return Err(Error::invalid_input(format!(
                    "interaction matrix row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    members
                )));
            }
            if let Some(w) = row.iter().find(|w| !w.is_finite() || **w < 0.0) {
                return Err(Error::invalid_input(format!(
                    "interaction matrix row {} has invalid weight {}",
                    i, w
                )));
            }
        }
        Ok(())
    }

    /// Summarize a matrix that has passed [`InteractionMatrix::validate`].
    ///
    /// With fewer than two members there are no pairs to miss, so density
    /// and reciprocity are both 1 and nobody counts as isolated.
    pub(crate) fn summarize(&self) -> InteractionSummary {
        let n = self.dimension();
        if n < 2 {
            return InteractionSummary {
                density: 1.0,
                reciprocity: 1.0,
                isolated_members: Vec::new(),
            };
        }

        let total: f64 = (0..n)
            .flat_map(|i| (0..n).filter(move |&j| j != i).map(move |j| (i, j)))
            .map(|(i, j)| self.weight(i, j))
            .sum();
        let density = total / (n * (n - 1)) as f64;

        let pairs = n * (n - 1) / 2;
        let asymmetry: f64 = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .map(|(i, j)| (self.weight(i, j) - self.weight(j, i)).abs())
            .sum();
        let reciprocity = 1.0 - asymmetry / pairs as f64;

        let isolated_members = (0..n)
            .filter(|&i| {
                (0..n)
                    .filter(|&j| j != i)
                    .all(|j| self.weight(i, j) == 0.0 && self.weight(j, i) == 0.0)
            })
            .collect();

        InteractionSummary {
            density,
            reciprocity,
            isolated_members,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionSummary {
    /// Mean off-diagonal weight, in [0, 1]
    pub density: f64,
    /// 1.0 when every interaction is returned with equal weight
    pub reciprocity: f64,
    /// Members with no interactions in either direction
    pub isolated_members: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_dimension_is_invalid() {
        let matrix = InteractionMatrix::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        assert!(matrix.validate(3).unwrap_err().is_invalid_input());
    }

    #[test]
    fn ragged_row_is_invalid() {
        let matrix = InteractionMatrix::new(vec![vec![0.0, 1.0], vec![1.0]]);
        assert!(matrix.validate(2).unwrap_err().is_invalid_input());
    }

    #[test]
    fn negative_weight_is_invalid() {
        let matrix = InteractionMatrix::new(vec![vec![0.0, -0.2], vec![1.0, 0.0]]);
        assert!(matrix.validate(2).unwrap_err().is_invalid_input());
    }

    #[test]
    fn summary_of_fully_connected_symmetric_matrix() {
        let matrix = InteractionMatrix::new(vec![
            vec![1.0, 1.0, 1.0],
            vec![1.0, 1.0, 1.0],
            vec![1.0, 1.0, 1.0],
        ]);
        let summary = matrix.summarize();
        assert_eq!(summary.density, 1.0);
        assert_eq!(summary.reciprocity, 1.0);
        assert!(summary.isolated_members.is_empty());
    }

    #[test]
    fn summary_detects_isolation_and_asymmetry() {
        let matrix = InteractionMatrix::new(vec![
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ]);
        let summary = matrix.summarize();
        assert!((summary.density - 1.0 / 6.0).abs() < 1e-12);
        assert!((summary.reciprocity - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(summary.isolated_members, vec![2]);
    }

    #[test]
    fn weights_above_one_are_capped() {
        let matrix = InteractionMatrix::new(vec![vec![0.0, 4.0], vec![4.0, 0.0]]);
        assert_eq!(matrix.summarize().density, 1.0);
    }

    #[test]
    fn single_member_matrix_has_full_density() {
        let matrix = InteractionMatrix::new(vec![vec![0.0]]);
        matrix.validate(1).unwrap();
        let summary = matrix.summarize();
        assert_eq!(summary.density, 1.0);
        assert!(summary.isolated_members.is_empty());
    }
}
