pub mod controller;
pub mod cycle;
pub mod descriptor;
pub mod state;
pub mod store;

pub use controller::*;
pub use cycle::*;
pub use descriptor::*;
pub use state::*;
pub use store::*;
