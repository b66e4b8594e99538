use std::{fs, num::NonZeroUsize, path::Path};

use log::info;
use ndarray::Array1;
use serde::Deserialize;

use crate::{
    PerceptronErr, Result,
    dataset::Dataset,
    initialization::{WeightInit, generate_rng},
    optimization::DEFAULT_LEARNING_RATE,
    trace::TraceSink,
    training::{DEFAULT_EPOCHS, PerceptronTrainer, TrainerBuilder},
};

/// The amount of epochs of the OR gate example run.
pub const EXAMPLE_EPOCHS: usize = 4;

fn default_epochs() -> usize {
    DEFAULT_EPOCHS.get()
}

fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

/// A full training run: hyperparameters, initial weights and samples.
///
/// ```json
/// {
///   "epochs": 4,
///   "learning_rate": 0.25,
///   "init": { "kind": "explicit", "weights": [-0.05, -0.02, 0.02] },
///   "dataset": { "x_size": 3, "data": [-1, 0, 0, 0, -1, 0, 1, 1] }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    #[serde(default = "default_epochs")]
    pub epochs: usize,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default)]
    pub seed: Option<u64>,
    pub init: WeightInit,
    pub dataset: DatasetConfig,
}

/// Samples in flat row-major form, `x_size` inputs followed by the label on every row.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    pub x_size: usize,
    pub data: Vec<f64>,
}

impl RunConfig {
    /// Parses and validates a `RunConfig` from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a `RunConfig` from a JSON file.
    ///
    /// # Errors
    /// `PerceptronErr::Io` if the file can't be read, `PerceptronErr::Json` if it isn't a valid
    /// run configuration and `PerceptronErr::InvalidConfig` if its values are out of range.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// The 2-input OR gate with a `-1` bias feature, trained for `EXAMPLE_EPOCHS` epochs.
    pub fn or_gate() -> Self {
        #[rustfmt::skip]
        let data = vec![
            -1., 0., 0., 0.,
            -1., 0., 1., 1.,
            -1., 1., 0., 1.,
            -1., 1., 1., 1.,
        ];

        Self {
            epochs: EXAMPLE_EPOCHS,
            learning_rate: DEFAULT_LEARNING_RATE,
            seed: None,
            init: WeightInit::Explicit {
                weights: vec![-0.05, -0.02, 0.02],
            },
            dataset: DatasetConfig { x_size: 3, data },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(PerceptronErr::InvalidConfig("epochs must be positive".into()));
        }

        if !self.learning_rate.is_finite() {
            return Err(PerceptronErr::InvalidConfig(format!(
                "learning rate must be finite, got {}",
                self.learning_rate
            )));
        }

        let DatasetConfig { x_size, ref data } = self.dataset;
        let fits = x_size.checked_add(1).is_some_and(|row_size| {
            x_size > 0 && data.len() >= row_size && data.len() % row_size == 0
        });

        if !fits {
            return Err(PerceptronErr::InvalidConfig(format!(
                "dataset of {} values can't be split in rows of x_size={x_size} inputs plus a label",
                data.len()
            )));
        }

        Ok(())
    }

    pub fn dataset(&self) -> Result<Dataset> {
        Dataset::from_flat(&self.dataset.data, self.dataset.x_size)
    }

    pub fn initial_weights(&self) -> Result<Array1<f64>> {
        let mut rng = generate_rng(self.seed);
        self.init.generate(self.dataset.x_size, &mut rng)
    }

    pub fn trainer(&self) -> Result<PerceptronTrainer> {
        let epochs = NonZeroUsize::new(self.epochs)
            .ok_or_else(|| PerceptronErr::InvalidConfig("epochs must be positive".into()))?;

        let trainer = TrainerBuilder::new()
            .epochs(epochs)
            .learning_rate(self.learning_rate)
            .build();

        Ok(trainer)
    }

    /// Builds every component of the run and trains it.
    ///
    /// # Returns
    /// The trained weights.
    pub fn run<S>(&self, sink: &mut S) -> Result<Array1<f64>>
    where
        S: TraceSink + ?Sized,
    {
        self.validate()?;

        let trainer = self.trainer()?;
        let dataset = self.dataset()?;
        let weights = self.initial_weights()?;

        info!(
            "training on {} samples for {} epochs, learning rate {}",
            dataset.len(),
            trainer.epochs(),
            trainer.learning_rate()
        );

        trainer.train(&dataset, weights, sink)
    }
}
