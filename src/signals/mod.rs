//! Signal evaluation: scoring, blending and aggregation.

pub mod aggregation;
pub mod blending;
pub mod engine;
pub mod scoring;

pub use aggregation::*;
pub use blending::*;
pub use engine::*;
pub use scoring::*;
