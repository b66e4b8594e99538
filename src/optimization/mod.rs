mod perceptron_rule;

pub use perceptron_rule::{DEFAULT_LEARNING_RATE, PerceptronRule, round3, update_weight};
