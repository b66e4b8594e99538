use ndarray::ArrayView1;

use crate::{PerceptronErr, Result};

/// Computes the pre-activation of the neuron, that is, the dot product of its weights and inputs.
///
/// # Arguments
/// * `w` - The weight vector.
/// * `x` - The input vector.
///
/// # Returns
/// The weighted sum, or `PerceptronErr::DimensionMismatch` if the vectors' lengths differ.
pub fn weighted_sum(w: ArrayView1<f64>, x: ArrayView1<f64>) -> Result<f64> {
    if w.len() != x.len() {
        return Err(PerceptronErr::DimensionMismatch {
            got: x.len(),
            expected: w.len(),
        });
    }

    Ok(w.dot(&x))
}
