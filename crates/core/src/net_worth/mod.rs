//! Net worth aggregation.
//!
//! Totals, category breakdowns and the monthly trend are pure functions over
//! the asset, liability and monthly-record collections. The store feeds them
//! freshly loaded collections on every call; nothing is cached.

mod net_worth_calculator;
mod net_worth_model;

pub use net_worth_calculator::*;
pub use net_worth_model::*;
