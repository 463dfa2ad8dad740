//! Utility modules for web, DOM, and network operations.
//!
//! Provides:
//! - [`fetch_text`], [`post_empty`], [`delete_json`] - Requests with timeout
//! - [`put_multipart`] - Upload with progress reporting
//! - [`save_url`] - Browser download of a remote file
//! - [`dom`] - Window/document access and file input helpers

pub mod dom;
mod download;
mod fetch;
mod upload;

pub use download::save_url;
pub use fetch::{delete_json, fetch_text, post_empty};
pub use upload::put_multipart;
