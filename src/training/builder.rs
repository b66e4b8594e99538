use std::num::NonZeroUsize;

use super::{DEFAULT_EPOCHS, PerceptronTrainer};
use crate::optimization::DEFAULT_LEARNING_RATE;

/// Builds `PerceptronTrainer`s.
#[derive(Clone, Copy, Debug)]
pub struct TrainerBuilder {
    epochs: NonZeroUsize,
    learning_rate: f64,
}

impl TrainerBuilder {
    /// Creates a new `TrainerBuilder` with the default epochs and learning rate.
    pub fn new() -> Self {
        Self {
            epochs: DEFAULT_EPOCHS,
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }

    pub fn epochs(mut self, epochs: NonZeroUsize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn build(&self) -> PerceptronTrainer {
        PerceptronTrainer::new(self.epochs, self.learning_rate)
    }
}

impl Default for TrainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_overrides() {
        let trainer = TrainerBuilder::new()
            .epochs(NonZeroUsize::new(4).unwrap())
            .learning_rate(0.1)
            .build();

        assert_eq!(trainer.epochs(), 4);
        assert_eq!(trainer.learning_rate(), 0.1);
    }

    #[test]
    fn untouched_builder_matches_trainer_defaults() {
        let built = TrainerBuilder::default().build();
        let default = PerceptronTrainer::default();

        assert_eq!(built.epochs(), default.epochs());
        assert_eq!(built.learning_rate(), default.learning_rate());
    }
}
