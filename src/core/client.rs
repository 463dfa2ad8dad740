//! Backend access for the gallery.
//!
//! [`DirectoryApi`] is the seam between the controller and the network.
//! [`RemoteDirectory`] implements it against the HTTP backend described by
//! an [`AppConfig`].

use std::rc::Rc;

use serde::Serialize;

use crate::config::{AppConfig, UPLOAD_FIELD};
use crate::models::{Folder, Listing, MediaItem, last_segment};
use crate::utils;

use super::error::FetchError;
use super::listing::parse_listing;
use super::path::GalleryPath;

/// What a delete request removes. Serializes to the request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DeleteTarget {
    /// Files in the current folder, by file name: `["a.jpg", "b.png"]`
    Items(Vec<String>),
    /// One empty subfolder: `{"folder": "name"}`
    Folder { folder: String },
}

impl DeleteTarget {
    /// Build an item deletion from selection identifiers.
    ///
    /// The file name is the final path segment of each identifier.
    pub fn from_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self::Items(ids.into_iter().map(|id| last_segment(id).to_string()).collect())
    }

    pub fn folder(name: impl Into<String>) -> Self {
        Self::Folder {
            folder: name.into(),
        }
    }
}

/// Operations the gallery needs from its backend.
#[allow(async_fn_in_trait)]
pub trait DirectoryApi {
    /// Upload payload type (`web_sys::File` in the browser).
    type File;

    /// List folders and items under `path`.
    async fn list(&self, path: &GalleryPath) -> Result<Listing, FetchError>;

    /// Create folder `name` under `path`. `name` is already validated.
    async fn create_folder(&self, path: &GalleryPath, name: &str) -> Result<Folder, FetchError>;

    async fn delete_entries(&self, path: &GalleryPath, target: &DeleteTarget) -> Result<(), FetchError>;

    /// Upload `files` into `path`, reporting percent complete.
    async fn upload(
        &self,
        path: &GalleryPath,
        files: &[Self::File],
        on_progress: impl Fn(u8) + 'static,
    ) -> Result<(), FetchError>;

    /// Save one item to the user's device.
    async fn save_item(&self, item: &MediaItem) -> Result<(), FetchError>;
}

/// HTTP implementation of [`DirectoryApi`].
#[derive(Clone, Debug)]
pub struct RemoteDirectory {
    config: Rc<AppConfig>,
}

impl RemoteDirectory {
    pub fn new(config: Rc<AppConfig>) -> Self {
        Self { config }
    }

    fn url(&self, path: &GalleryPath) -> String {
        self.config.api_url(&path.to_string())
    }
}

impl DirectoryApi for RemoteDirectory {
    type File = web_sys::File;

    async fn list(&self, path: &GalleryPath) -> Result<Listing, FetchError> {
        let body = utils::fetch_text(&self.url(path)).await?;
        parse_listing(&body, path, &self.config)
    }

    async fn create_folder(&self, path: &GalleryPath, name: &str) -> Result<Folder, FetchError> {
        // The backend addresses new folders as `{path}\{name}`.
        let url = format!("{}\\{}", self.url(path), name);
        utils::post_empty(&url).await?;
        Ok(Folder::new(name))
    }

    async fn delete_entries(&self, path: &GalleryPath, target: &DeleteTarget) -> Result<(), FetchError> {
        utils::delete_json(&self.url(path), target).await
    }

    async fn upload(
        &self,
        path: &GalleryPath,
        files: &[Self::File],
        on_progress: impl Fn(u8) + 'static,
    ) -> Result<(), FetchError> {
        utils::put_multipart(&self.url(path), UPLOAD_FIELD, files, on_progress).await
    }

    async fn save_item(&self, item: &MediaItem) -> Result<(), FetchError> {
        utils::save_url(&item.download_url, &item.name).await
    }
}
