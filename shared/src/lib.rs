//! Inventory and selection resolution engine for the distribution
//! operations platform
//!
//! Pure, synchronous computations shared by the browser front end (via
//! WASM) and any other consumer: ledger availability arithmetic, cascading
//! catalog resolution, per-row selection state, order-line validation, and
//! the dashboard percentage formulas. Network fetches and DOM rendering
//! stay with the callers; everything here operates on snapshots passed in.

pub mod analytics;
pub mod availability;
pub mod models;
pub mod selection;
pub mod types;
pub mod validation;

pub use analytics::*;
pub use availability::*;
pub use models::*;
pub use selection::*;
pub use types::*;
pub use validation::*;
