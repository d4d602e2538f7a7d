//! Assets module - domain models for things the user owns.

mod assets_model;

pub use assets_model::{Asset, AssetCategory, NewAsset};
