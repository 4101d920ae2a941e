//! Tick filter core: stateless predicates for a streaming market data pipeline.
//! No state between calls, no allocation in the predicates; reentrant from any thread.

mod abi;
mod filters;
mod models;

pub use filters::{is_significant, is_valid};
pub use models::Tick;
