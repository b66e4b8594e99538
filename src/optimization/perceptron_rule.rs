use ndarray::{ArrayView1, ArrayViewMut1};

use crate::{PerceptronErr, Result, dataset::Label};

/// The learning rate used when none is given.
pub const DEFAULT_LEARNING_RATE: f64 = 0.25;

/// Rounds `x` to 3 decimal places, halves away from zero.
pub fn round3(x: f64) -> f64 {
    (x * 1000.).round() / 1000.
}

/// Corrects a single weight of a misclassified sample.
///
/// # Arguments
/// * `wij` - The current weight.
/// * `predicted` - The label the perceptron gave to the sample.
/// * `target` - The sample's expected label.
/// * `xi` - The input feature paired with `wij`.
/// * `learning_rate` - The step size of the correction.
///
/// # Returns
/// `wij - learning_rate * (predicted - target) * xi`, rounded to 3 decimals.
pub fn update_weight(wij: f64, predicted: Label, target: Label, xi: f64, learning_rate: f64) -> f64 {
    let err = predicted.as_f64() - target.as_f64();
    round3(wij - learning_rate * (err * xi))
}

/// The classical perceptron learning rule.
#[derive(Clone, Copy, Debug)]
pub struct PerceptronRule {
    learning_rate: f64,
}

impl PerceptronRule {
    /// Returns a new `PerceptronRule`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `update_params`.
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }

    /// Applies `update_weight` to every component of `w`.
    ///
    /// # Returns
    /// `PerceptronErr::DimensionMismatch` if `w` and `x` differ in length, `w` is left untouched.
    pub fn update_params(
        &self,
        mut w: ArrayViewMut1<f64>,
        x: ArrayView1<f64>,
        predicted: Label,
        target: Label,
    ) -> Result<()> {
        if w.len() != x.len() {
            return Err(PerceptronErr::DimensionMismatch {
                got: x.len(),
                expected: w.len(),
            });
        }

        let lr = self.learning_rate;
        w.zip_mut_with(&x, |wj, &xj| {
            *wj = update_weight(*wj, predicted, target, xj, lr);
        });

        Ok(())
    }
}

impl Default for PerceptronRule {
    fn default() -> Self {
        Self::new(DEFAULT_LEARNING_RATE)
    }
}
