//! Core compute primitives (Vector, Matrix).
//!
//! Dense `f64` storage backing the feature and similarity matrices.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
