//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`RawEntry`], [`EntryType`] - Listing records as sent by the backend
//! - [`Folder`], [`MediaItem`], [`MediaKind`], [`DirectoryEntry`] - Typed entries
//! - [`Listing`] - Folders and items of one directory

mod entry;

pub use entry::{
    DirectoryEntry, EntryType, Folder, Listing, MediaItem, MediaKind, RawEntry, last_segment,
};
