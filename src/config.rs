use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How Gauss-Jordan elimination picks the pivot row for each column.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotStrategy {
    /// First row at or below the diagonal with a usable pivot
    FirstNonZero,
    /// Row with the largest magnitude in the column (partial pivoting)
    #[default]
    LargestMagnitude,
}

impl FromStr for PivotStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" | "first_non_zero" | "firstnonzero" => Ok(PivotStrategy::FirstNonZero),
            "partial" | "largest" | "largest_magnitude" | "largestmagnitude" => {
                Ok(PivotStrategy::LargestMagnitude)
            }
            _ => Err(format!("Unknown pivot strategy: {}", s)),
        }
    }
}

/// Settings for the elimination-based determinant and inversion engines.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct EliminationConfig {
    pub pivot: PivotStrategy,

    /// A pivot whose magnitude is not strictly greater than this value is
    /// treated as zero. `None` scales the threshold to the matrix:
    /// `order * f64::EPSILON * max |a_ij|`.
    pub singular_tolerance: Option<f64>,
}

impl Default for EliminationConfig {
    fn default() -> Self {
        EliminationConfig {
            pivot: PivotStrategy::LargestMagnitude,
            singular_tolerance: None,
        }
    }
}

impl EliminationConfig {
    pub fn with_pivot(mut self, pivot: PivotStrategy) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn with_tolerance(mut self, singular_tolerance: f64) -> Self {
        self.singular_tolerance = Some(singular_tolerance.abs());
        self
    }

    /// Pivot threshold for a matrix of order `order` whose largest element
    /// magnitude is `scale`.
    pub(crate) fn pivot_threshold(&self, order: usize, scale: f64) -> f64 {
        match self.singular_tolerance {
            Some(tolerance) => tolerance,
            None => order as f64 * f64::EPSILON * scale,
        }
    }
}
