//! Liabilities module - domain models for debts.

mod liabilities_model;

pub use liabilities_model::{Liability, LiabilityCategory, NewLiability};
