pub mod arch;
pub mod config;
pub mod dataset;
pub mod error;
pub mod initialization;
pub mod optimization;
pub mod trace;
pub mod training;

pub use arch::{activation, forward_pass, weighted_sum};
pub use config::RunConfig;
pub use dataset::{Dataset, Label, Sample};
pub use error::{PerceptronErr, Result};
pub use optimization::{DEFAULT_LEARNING_RATE, update_weight};
pub use trace::{TraceRecord, TraceSink};
pub use training::{DEFAULT_EPOCHS, PerceptronTrainer, TrainerBuilder, train};
