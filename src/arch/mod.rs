pub mod activations;
mod forward;
mod linear;

pub use activations::activation;
pub use forward::forward_pass;
pub use linear::weighted_sum;
