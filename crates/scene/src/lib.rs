pub mod features;
pub mod picking;
pub mod sample;

pub use features::*;
