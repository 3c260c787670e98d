//! Cat fact retrieval
//!
//! `FactProvider` makes one bounded request to the fact endpoint and
//! answers from the built-in pool whenever that request fails.

mod pool;
mod provider;

pub use pool::{pick_fallback, FALLBACK_FACTS};
pub use provider::FactProvider;
