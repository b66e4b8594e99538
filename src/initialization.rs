use ndarray::Array1;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Uniform};
use serde::Deserialize;

use crate::{PerceptronErr, Result, optimization::round3};

/// How the initial weight vector of a run is obtained.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WeightInit {
    /// Caller-supplied weights, used as they are.
    Explicit { weights: Vec<f64> },
    /// Every weight takes the same value.
    Const { value: f64 },
    /// Weights are drawn from `[low, high]` and rounded to 3 decimals.
    Uniform { low: f64, high: f64 },
}

impl WeightInit {
    /// Generates the initial weights.
    ///
    /// # Arguments
    /// * `dim` - The length of the input vectors. Ignored by `WeightInit::Explicit`, whose length
    ///   is validated against each sample during training.
    /// * `rng` - The random source for `WeightInit::Uniform`.
    ///
    /// # Returns
    /// An error if the uniform range is invalid (low > high or not finite).
    pub fn generate<R>(&self, dim: usize, rng: &mut R) -> Result<Array1<f64>>
    where
        R: Rng + ?Sized,
    {
        match *self {
            WeightInit::Explicit { ref weights } => Ok(Array1::from(weights.clone())),
            WeightInit::Const { value } => Ok(Array1::from_elem(dim, value)),
            WeightInit::Uniform { low, high } => {
                let distribution = Uniform::new_inclusive(low, high).map_err(|e| {
                    PerceptronErr::InvalidConfig(format!("invalid uniform range [{low}, {high}]: {e}"))
                })?;

                Ok(Array1::from_shape_fn(dim, |_| round3(distribution.sample(&mut *rng))))
            }
        }
    }
}

/// Returns a seeded rng if `seed` is given, otherwise one seeded from the OS.
pub fn generate_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
