//! Document similarity metrics.
//!
//! Cosine similarity between single vectors and the full pairwise
//! similarity matrix over a feature matrix.
//!
//! Zero vectors have no direction, so their cosine similarity with anything,
//! themselves included, is defined as 0.0 rather than NaN.
//!
//! # Quick Start
//!
//! ```
//! use aprender_recommend::text::similarity::cosine_similarity;
//! use aprender_recommend::primitives::Vector;
//!
//! let v1 = Vector::from_slice(&[1.0, 2.0, 3.0]);
//! let v2 = Vector::from_slice(&[2.0, 3.0, 4.0]);
//!
//! let similarity = cosine_similarity(&v1, &v2).expect("cosine similarity should succeed");
//! assert!(similarity > 0.9);
//! ```

use crate::error::{RecommendError, Result};
use crate::primitives::{Matrix, Vector};

/// Compute cosine similarity between two vectors.
///
/// Returns a value in `[-1, 1]` (in `[0, 1]` for non-negative vectors).
/// If either vector has zero magnitude, including empty vectors, the result
/// is `0.0`.
///
/// # Formula
/// ```text
/// cosine_sim(A, B) = (A · B) / (||A|| * ||B||)
/// ```
///
/// # Errors
///
/// Returns [`RecommendError::DimensionMismatch`] if lengths differ.
///
/// # Examples
///
/// ```
/// use aprender_recommend::text::similarity::cosine_similarity;
/// use aprender_recommend::primitives::Vector;
///
/// let zero = Vector::from_slice(&[0.0, 0.0]);
/// let sim = cosine_similarity(&zero, &zero).expect("same length");
/// assert_eq!(sim, 0.0);
/// ```
pub fn cosine_similarity(a: &Vector<f64>, b: &Vector<f64>) -> Result<f64> {
    if a.len() != b.len() {
        return Err(RecommendError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    Ok(cosine_with_norms(a, b, a.norm(), b.norm()))
}

fn cosine_with_norms(a: &Vector<f64>, b: &Vector<f64>, norm_a: f64, norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    a.dot(b) / (norm_a * norm_b)
}

/// Compute the pairwise cosine similarity matrix of the rows of `features`.
///
/// Intended for non-negative feature vectors such as TF-IDF rows. The result
/// is an `n × n` matrix with:
///
/// - exact symmetry: only the upper triangle is computed, then mirrored
/// - entries clamped into `[0, 1]` to absorb rounding
/// - diagonal exactly `1.0` for non-zero rows and `0.0` for all-zero rows
///
/// A zero-column input (no vocabulary) therefore yields an all-zero matrix.
///
/// # Examples
///
/// ```
/// use aprender_recommend::primitives::Matrix;
/// use aprender_recommend::text::similarity::pairwise_cosine_similarity;
///
/// let features = Matrix::from_vec(3, 2, vec![
///     1.0, 0.0,
///     1.0, 1.0,
///     0.0, 0.0,
/// ]).expect("3 x 2");
///
/// let sim = pairwise_cosine_similarity(&features);
/// assert_eq!(sim.shape(), (3, 3));
/// assert_eq!(sim.get(0, 0), 1.0);
/// assert_eq!(sim.get(2, 2), 0.0);
/// assert_eq!(sim.get(0, 1), sim.get(1, 0));
/// ```
#[must_use]
pub fn pairwise_cosine_similarity(features: &Matrix<f64>) -> Matrix<f64> {
    let n = features.n_rows();
    let rows: Vec<Vector<f64>> = (0..n).map(|i| features.row(i)).collect();
    let norms: Vec<f64> = rows.iter().map(|row| row.norm()).collect();
    let mut similarities = Matrix::zeros(n, n);

    for i in 0..n {
        if norms[i] > 0.0 {
            similarities.set(i, i, 1.0);
        }
        for j in (i + 1)..n {
            let sim = cosine_with_norms(&rows[i], &rows[j], norms[i], norms[j])
                .clamp(0.0, 1.0);
            similarities.set(i, j, sim);
            similarities.set(j, i, sim);
        }
    }

    similarities
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
