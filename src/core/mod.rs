//! Core application primitives (agent, HTTP surface, scheduler)

pub mod agent;
pub mod http;
pub mod scheduler;

pub use agent::*;
pub use http::*;
pub use scheduler::*;
