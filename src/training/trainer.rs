use std::num::NonZeroUsize;

use log::{debug, warn};
use ndarray::Array1;

use crate::{
    Result,
    arch::forward_pass,
    dataset::Dataset,
    optimization::DEFAULT_LEARNING_RATE,
    trace::{TraceRecord, TraceSink},
};

/// The amount of epochs a `PerceptronTrainer` runs when none is given.
pub const DEFAULT_EPOCHS: NonZeroUsize = NonZeroUsize::new(3).unwrap();

/// Trains a single perceptron with the classical error-correcting rule.
///
/// There is no convergence check: a run always makes exactly `epochs * dataset.len()` forward
/// passes.
#[derive(Clone, Copy, Debug)]
pub struct PerceptronTrainer {
    epochs: NonZeroUsize,
    learning_rate: f64,
}

impl PerceptronTrainer {
    /// Returns a new `PerceptronTrainer`.
    ///
    /// # Arguments
    /// * `epochs` - The amount of full, in-order passes over the dataset.
    /// * `learning_rate` - The step size of every weight correction.
    pub fn new(epochs: NonZeroUsize, learning_rate: f64) -> Self {
        Self {
            epochs,
            learning_rate,
        }
    }

    pub fn epochs(&self) -> usize {
        self.epochs.get()
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Trains `weights` over `dataset`.
    ///
    /// # Arguments
    /// * `dataset` - The training samples, visited in order on every epoch.
    /// * `weights` - The initial weights.
    /// * `sink` - Receives an epoch marker at the start of each epoch, plus the sample and
    ///   updated weights records of every forward pass.
    ///
    /// # Returns
    /// The trained weights. A dimension mismatch on any sample aborts the whole run.
    pub fn train<S>(
        &self,
        dataset: &Dataset,
        mut weights: Array1<f64>,
        sink: &mut S,
    ) -> Result<Array1<f64>>
    where
        S: TraceSink + ?Sized,
    {
        let total = self.epochs.get();
        debug!(
            epochs = total,
            samples = dataset.len(),
            learning_rate = self.learning_rate;
            "starting perceptron training"
        );

        for epoch in 1..=total {
            sink.record(TraceRecord::Epoch { epoch, total });

            for (i, sample) in dataset.iter().enumerate() {
                forward_pass(
                    sample.input(),
                    sample.target(),
                    &mut weights,
                    self.learning_rate,
                    sink,
                )
                .inspect_err(|e| warn!("aborting training at epoch {epoch}, sample {i}: {e}"))?;

                sink.record(TraceRecord::Updated {
                    weights: weights.to_vec(),
                });
            }
        }

        debug!("training finished, weights: {weights}");
        Ok(weights)
    }
}

impl Default for PerceptronTrainer {
    fn default() -> Self {
        Self::new(DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE)
    }
}

/// Trains a perceptron, see `PerceptronTrainer::train`.
pub fn train<S>(
    dataset: &Dataset,
    initial_weights: Array1<f64>,
    epochs: NonZeroUsize,
    learning_rate: f64,
    sink: &mut S,
) -> Result<Array1<f64>>
where
    S: TraceSink + ?Sized,
{
    PerceptronTrainer::new(epochs, learning_rate).train(dataset, initial_weights, sink)
}
