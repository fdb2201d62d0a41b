pub mod entity;

pub use entity::{AssetRef, AssetSource, MediaKind};
