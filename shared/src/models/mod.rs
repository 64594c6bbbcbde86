//! Domain models for the distribution operations engine

mod catalog;
mod ledger;
mod order;

pub use catalog::*;
pub use ledger::*;
pub use order::*;
