//! Core gallery logic.
//!
//! This module provides:
//! - `GalleryPath` path navigation and `SelectionSet` multi-select
//! - `DirectoryApi` backend seam and its HTTP implementation [`RemoteDirectory`]
//! - [`ViewState`] and the [`GalleryController`] state machine driving it

mod client;
mod controller;
pub mod error;
mod listing;
#[cfg(test)]
mod mock;
mod path;
mod selection;
mod state;

pub use client::RemoteDirectory;
pub use controller::GalleryController;
pub use path::validate_segment;
pub use state::{LoadPhase, ViewState};
