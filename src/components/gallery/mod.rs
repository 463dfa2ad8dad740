//! Gallery UI components.
//!
//! Components:
//! - [`GalleryView`] - Header, grid and everything layered over it
//! - [`ActionDial`] - Floating actions for the current mode
//! - [`CreateFolderDialog`] - Name prompt for a new folder
//! - [`LoadingOverlay`], [`UploadOverlay`], [`FullscreenViewer`] - Overlays
//! - [`Notices`] - Auto-dismissing success and error messages

mod actions;
mod dialog;
#[allow(clippy::module_inception)]
mod gallery;
mod notices;
mod overlays;
mod tiles;

pub use actions::ActionDial;
pub use dialog::CreateFolderDialog;
pub use gallery::GalleryView;
pub use notices::Notices;
pub use overlays::{FullscreenViewer, LoadingOverlay, UploadOverlay};
pub use tiles::{FolderTile, MediaTile, ParentTile};
