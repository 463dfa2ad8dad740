//! UI components built with Leptos.
//!
//! - [`gallery`] - Folder grid, action dial, dialogs and overlays
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod gallery;
pub mod icons;

pub use gallery::GalleryView;
