pub mod layer;
pub mod points;
pub mod regions;
pub mod stack;
pub mod symbology;

pub use layer::*;
pub use stack::*;
