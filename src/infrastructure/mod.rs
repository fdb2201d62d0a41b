// src/infrastructure/mod.rs

pub mod preview_registry;

pub use preview_registry::{
    PreviewHandle, PreviewHandleAcquired, PreviewHandleReleased, PreviewRegistry,
};
