//! The net worth store: sole owner and writer of the persisted collections.

mod collection;
mod seed;
mod store_model;
mod store_service;

pub use collection::{CollectionRecord, IdentifiedRecord};
pub use store_model::{Created, Removal, UpdateOutcome};
pub use store_service::NetWorthStore;
