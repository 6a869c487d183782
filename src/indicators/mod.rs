pub mod frame;
pub mod registry;

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;

pub use frame::*;
pub use registry::*;
