//! In-memory [`DirectoryApi`] for controller tests.
//!
//! Listings are served from a map keyed by serialized path. A path can be
//! gated, in which case its next `list` call waits until the test releases
//! it, which lets tests interleave overlapping requests deterministically.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};

use futures::channel::oneshot;

use crate::models::{Folder, Listing, MediaItem, MediaKind};

use super::client::{DeleteTarget, DirectoryApi};
use super::error::FetchError;
use super::path::GalleryPath;

type ListResult = Result<Listing, FetchError>;

/// A recorded backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    List(String),
    CreateFolder(String, String),
    Delete(String, DeleteTarget),
    Upload(String, usize),
    Save(String),
}

#[derive(Default)]
pub struct MockDirectory {
    listings: RefCell<HashMap<String, ListResult>>,
    gates: RefCell<HashMap<String, VecDeque<oneshot::Receiver<ListResult>>>>,
    calls: RefCell<Vec<Call>>,
    mutation_error: RefCell<Option<FetchError>>,
    upload_steps: RefCell<Vec<u8>>,
    failing_saves: RefCell<HashSet<String>>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `listing` for `path` from now on.
    pub fn set_listing(&self, path: &str, listing: ListResult) {
        self.listings.borrow_mut().insert(path.to_string(), listing);
    }

    /// Hold the next `list` of `path` until the returned sender fires.
    pub fn gate(&self, path: &str) -> oneshot::Sender<ListResult> {
        let (tx, rx) = oneshot::channel();
        self.gates
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_back(rx);
        tx
    }

    /// Make create/delete/upload fail with `error`.
    pub fn fail_mutations(&self, error: FetchError) {
        *self.mutation_error.borrow_mut() = Some(error);
    }

    /// Progress values reported by the next uploads.
    pub fn set_upload_steps(&self, steps: &[u8]) {
        *self.upload_steps.borrow_mut() = steps.to_vec();
    }

    pub fn fail_save(&self, name: &str) {
        self.failing_saves.borrow_mut().insert(name.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::List(_)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn mutation_result(&self) -> Result<(), FetchError> {
        match self.mutation_error.borrow().clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl DirectoryApi for MockDirectory {
    type File = String;

    async fn list(&self, path: &GalleryPath) -> ListResult {
        let key = path.to_string();
        self.record(Call::List(key.clone()));

        let gate = self
            .gates
            .borrow_mut()
            .get_mut(&key)
            .and_then(VecDeque::pop_front);
        if let Some(rx) = gate {
            return rx
                .await
                .unwrap_or_else(|_| Err(FetchError::NetworkError("gate dropped".to_string())));
        }

        self.listings
            .borrow()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(Listing::default()))
    }

    async fn create_folder(&self, path: &GalleryPath, name: &str) -> Result<Folder, FetchError> {
        self.record(Call::CreateFolder(path.to_string(), name.to_string()));
        self.mutation_result().map(|_| Folder::new(name))
    }

    async fn delete_entries(&self, path: &GalleryPath, target: &DeleteTarget) -> Result<(), FetchError> {
        self.record(Call::Delete(path.to_string(), target.clone()));
        self.mutation_result()
    }

    async fn upload(
        &self,
        path: &GalleryPath,
        files: &[Self::File],
        on_progress: impl Fn(u8) + 'static,
    ) -> Result<(), FetchError> {
        self.record(Call::Upload(path.to_string(), files.len()));
        let steps = self.upload_steps.borrow().clone();
        for step in steps {
            on_progress(step);
        }
        self.mutation_result()
    }

    async fn save_item(&self, item: &MediaItem) -> Result<(), FetchError> {
        self.record(Call::Save(item.name.clone()));
        if self.failing_saves.borrow().contains(&item.name) {
            return Err(FetchError::HttpError(404));
        }
        Ok(())
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn media(dir: &str, name: &str) -> MediaItem {
    let file = if dir == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", dir, name)
    };
    MediaItem {
        name: name.to_string(),
        source_url: format!("https://static.test{}", file),
        download_url: format!("https://api.test{}", file),
        kind: MediaKind::from_name(name),
    }
}

/// Listing of `dir` with the given subfolders and files.
pub fn listing(dir: &str, folders: &[&str], files: &[&str]) -> ListResult {
    Ok(Listing {
        folders: folders.iter().map(|f| Folder::new(*f)).collect(),
        items: files.iter().map(|f| media(dir, f)).collect(),
    })
}
