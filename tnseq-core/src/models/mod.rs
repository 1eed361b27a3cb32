pub mod gene;
pub mod sample;

pub use gene::*;
pub use sample::*;
