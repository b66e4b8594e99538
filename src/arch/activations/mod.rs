mod step;

pub use step::{Step, activation};
