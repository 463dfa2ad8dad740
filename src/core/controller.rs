//! Gallery controller.
//!
//! Orchestrates path navigation, selection, and backend calls on top of a
//! [`ViewState`] held in a [`StateStore`]. Every mutating operation ends with
//! an explicit [`GalleryController::reload`] of the current path.
//!
//! All methods run on the single-threaded browser executor. State is only
//! touched between awaits, never borrowed across one.

use std::rc::Rc;

use crate::models::Folder;

use super::client::{DeleteTarget, DirectoryApi};
use super::error::GalleryError;
use super::path::validate_segment;
use super::state::{StateStore, ViewState};

/// Outcome of a bulk download.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DownloadReport {
    pub saved: usize,
    /// Names of items that could not be saved
    pub failed: Vec<String>,
}

/// Drives a [`ViewState`] against a [`DirectoryApi`].
pub struct GalleryController<A, S> {
    api: Rc<A>,
    store: S,
}

impl<A, S: Clone> Clone for GalleryController<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            store: self.store.clone(),
        }
    }
}

impl<A, S> GalleryController<A, S>
where
    A: DirectoryApi,
    S: StateStore + Clone + 'static,
{
    pub fn new(api: Rc<A>, store: S) -> Self {
        Self { api, store }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Initial load of the root listing.
    pub async fn mount(&self) {
        self.reload().await;
    }

    /// Open subfolder `name`.
    ///
    /// In folder delete mode the folder is deleted instead.
    pub async fn navigate_into(&self, name: &str) {
        if self.store.inspect(|s| s.folder_delete_mode) == Some(true) {
            let _ = self.delete_folder(name).await;
            return;
        }

        let moved = self.store.mutate(|s| match s.path.descend(name) {
            Ok(path) => {
                s.path = path;
                true
            }
            Err(e) => {
                s.notify_error(e.to_string());
                false
            }
        });
        if moved == Some(true) {
            self.reload().await;
        }
    }

    /// Go to the parent folder. Does nothing at the root.
    pub async fn navigate_up(&self) {
        let moved = self.store.mutate(|s| {
            let parent = s.path.ascend();
            let changed = parent != s.path;
            s.path = parent;
            changed
        });
        if moved == Some(true) {
            self.reload().await;
        }
    }

    /// Re-list the current path.
    ///
    /// Returns `false` when the response was discarded because a newer
    /// request or a path change superseded it.
    pub async fn reload(&self) -> bool {
        let Some(ticket) = self.store.mutate(ViewState::begin_load) else {
            return false;
        };

        let result = self.api.list(&ticket.path).await;
        if let Err(e) = &result {
            leptos::logging::warn!("listing {} failed: {}", ticket.path, e);
        }

        let applied = self
            .store
            .mutate(|s| s.finish_load(&ticket, result))
            .unwrap_or(false);
        if !applied {
            leptos::logging::log!("discarded stale listing for {}", ticket.path);
        }
        applied
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Create folder `name` in the current path.
    ///
    /// Invalid names are rejected before any request is issued.
    pub async fn create_folder(&self, name: &str) -> Result<Folder, GalleryError> {
        if let Err(e) = validate_segment(name) {
            self.store.mutate(|s| s.notify_error(e.to_string()));
            return Err(e.into());
        }

        let Some(path) = self.store.mutate(|s| {
            s.loading = true;
            s.path.clone()
        }) else {
            return Err(GalleryError::Detached);
        };

        let result = self.api.create_folder(&path, name).await;
        self.store.mutate(|s| {
            s.loading = false;
            match &result {
                Ok(folder) => {
                    if s.path == path {
                        s.add_folder(folder.clone());
                    }
                    s.notify_success(format!("Folder '{}' created", name));
                }
                Err(e) => s.notify_error(format!("Failed to create folder '{}': {}", name, e)),
            }
        });

        self.reload().await;
        result.map_err(Into::into)
    }

    /// Delete every selected item. Returns the number of items requested.
    pub async fn delete_selection(&self) -> Result<usize, GalleryError> {
        let Some((path, ids)) = self.store.mutate(|s| {
            let ids: Vec<String> = s
                .selected_items()
                .iter()
                .map(|item| item.id().to_string())
                .collect();
            if !ids.is_empty() {
                s.loading = true;
            }
            (s.path.clone(), ids)
        }) else {
            return Err(GalleryError::Detached);
        };
        if ids.is_empty() {
            return Ok(0);
        }

        let target = DeleteTarget::from_ids(ids.iter().map(String::as_str));
        let result = self.api.delete_entries(&path, &target).await;
        self.store.mutate(|s| {
            s.loading = false;
            s.exit_select_mode();
            match &result {
                Ok(()) => {
                    s.remove_items(&ids);
                    s.notify_success(format!("Deleted {} item(s)", ids.len()));
                }
                Err(e) => {
                    s.clear_selection();
                    s.notify_error(format!("Failed to delete items: {}", e));
                }
            }
        });

        self.reload().await;
        result.map(|_| ids.len()).map_err(Into::into)
    }

    /// Delete the (empty) subfolder `name`.
    pub async fn delete_folder(&self, name: &str) -> Result<(), GalleryError> {
        let Some(path) = self.store.mutate(|s| {
            s.loading = true;
            s.path.clone()
        }) else {
            return Err(GalleryError::Detached);
        };

        let result = self
            .api
            .delete_entries(&path, &DeleteTarget::folder(name))
            .await;
        self.store.mutate(|s| {
            s.loading = false;
            s.folder_delete_mode = false;
            match &result {
                Ok(()) => s.notify_success(format!("Folder '{}' deleted", name)),
                Err(e) => s.notify_error(format!("Failed to delete folder '{}': {}", name, e)),
            }
        });

        self.reload().await;
        result.map_err(Into::into)
    }

    /// Upload `files` into the current path, tracking progress.
    pub async fn upload(&self, files: Vec<A::File>) -> Result<(), GalleryError> {
        if files.is_empty() {
            return Ok(());
        }
        let Some(path) = self.store.mutate(|s| {
            s.begin_upload();
            s.path.clone()
        }) else {
            return Err(GalleryError::Detached);
        };

        let store = self.store.clone();
        let result = self
            .api
            .upload(&path, &files, move |percent| {
                store.mutate(|s| s.record_progress(percent));
            })
            .await;

        let count = files.len();
        self.store.mutate(|s| {
            s.finish_upload(result.is_ok());
            match &result {
                Ok(()) => s.notify_success(format!("Uploaded {} file(s)", count)),
                Err(e) => s.notify_error(format!("Could not upload {} file(s): {}", count, e)),
            }
        });

        self.reload().await;
        result.map_err(Into::into)
    }

    /// Save every selected item, one at a time.
    ///
    /// A failed item is logged and skipped; the rest still download.
    pub async fn download_selection(&self) -> DownloadReport {
        let items = self.store.inspect(ViewState::selected_items).unwrap_or_default();
        let mut report = DownloadReport::default();

        for item in &items {
            match self.api.save_item(item).await {
                Ok(()) => report.saved += 1,
                Err(e) => {
                    leptos::logging::error!("failed to download {}: {}", item.name, e);
                    report.failed.push(item.name.clone());
                }
            }
        }

        if !report.failed.is_empty() {
            let total = items.len();
            let failed = report.failed.len();
            self.store.mutate(|s| {
                s.notify_error(format!("Failed to download {} of {} item(s)", failed, total))
            });
        }
        report
    }

    // =========================================================================
    // Local Intents
    // =========================================================================

    pub fn toggle_select(&self, id: &str) {
        self.store.mutate(|s| s.toggle_select(id));
    }

    pub fn select_all(&self) {
        self.store.mutate(ViewState::select_all);
    }

    pub fn clear_selection(&self) {
        self.store.mutate(ViewState::clear_selection);
    }

    pub fn toggle_select_mode(&self) {
        self.store.mutate(ViewState::toggle_select_mode);
    }

    pub fn exit_select_mode(&self) {
        self.store.mutate(ViewState::exit_select_mode);
    }

    pub fn toggle_folder_delete_mode(&self) {
        self.store.mutate(ViewState::toggle_folder_delete_mode);
    }

    pub fn open_viewer(&self, url: &str) {
        self.store.mutate(|s| s.open_viewer(url));
    }

    pub fn close_viewer(&self) {
        self.store.mutate(ViewState::close_viewer);
    }

    pub fn dismiss_error(&self) {
        self.store.mutate(ViewState::dismiss_error);
    }

    pub fn dismiss_success(&self) {
        self.store.mutate(ViewState::dismiss_success);
    }

    /// Auto-hide the error notice numbered `seq` unless a newer one replaced it.
    pub fn expire_error(&self, seq: u64) {
        self.store.mutate(|s| s.expire_error(seq));
    }

    pub fn expire_success(&self, seq: u64) {
        self.store.mutate(|s| s.expire_success(seq));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::pin::pin;

    use futures::poll;

    use super::*;
    use crate::core::error::{FetchError, ValidationError};
    use crate::core::mock::{Call, MockDirectory, listing, media};
    use crate::core::path::GalleryPath;

    type Store = Rc<RefCell<ViewState>>;

    fn setup() -> (Rc<MockDirectory>, GalleryController<MockDirectory, Store>, Store) {
        let api = Rc::new(MockDirectory::new());
        let store: Store = Rc::new(RefCell::new(ViewState::new()));
        let ctrl = GalleryController::new(Rc::clone(&api), store.clone());
        (api, ctrl, store)
    }

    fn names(store: &Store) -> Vec<String> {
        store.borrow().items.iter().map(|i| i.name.clone()).collect()
    }

    #[tokio::test]
    async fn test_mount_lists_root() {
        let (api, ctrl, store) = setup();
        api.set_listing("/", listing("/", &["vacation"], &["a.jpg"]));

        ctrl.mount().await;

        let state = store.borrow();
        assert_eq!(state.path, GalleryPath::root());
        assert_eq!(state.folders[0].name, "vacation");
        assert_eq!(state.items[0].name, "a.jpg");
        assert!(!state.loading);
        assert!(state.selection.is_empty());
        assert!(!state.select_mode);
    }

    #[tokio::test]
    async fn test_navigation_round_trip() {
        let (api, ctrl, store) = setup();
        api.set_listing("/", listing("/", &["vacation"], &[]));
        api.set_listing("/vacation", listing("/vacation", &["sub"], &["b.mp4"]));
        ctrl.mount().await;

        ctrl.navigate_into("vacation").await;
        assert_eq!(store.borrow().path.to_string(), "/vacation");
        assert_eq!(names(&store), vec!["b.mp4"]);

        ctrl.navigate_up().await;
        assert_eq!(store.borrow().path, GalleryPath::root());
        assert_eq!(store.borrow().folders[0].name, "vacation");

        // Root is its own parent; no extra listing request.
        let before = api.list_calls();
        ctrl.navigate_up().await;
        assert_eq!(api.list_calls(), before);
    }

    #[tokio::test]
    async fn test_navigation_clears_selection() {
        let (api, ctrl, store) = setup();
        api.set_listing("/", listing("/", &["sub"], &["a.jpg", "b.jpg"]));
        ctrl.mount().await;

        ctrl.toggle_select_mode();
        ctrl.select_all();
        assert_eq!(store.borrow().selection.len(), 2);

        ctrl.navigate_into("sub").await;
        let state = store.borrow();
        assert!(state.selection.is_empty());
        assert!(!state.select_mode);
    }

    #[tokio::test]
    async fn test_stale_listing_after_navigation_is_discarded() {
        let (api, ctrl, store) = setup();
        api.set_listing("/", listing("/", &["a"], &["root.jpg"]));
        ctrl.mount().await;

        let release_a = api.gate("/a");
        let mut into_a = pin!(ctrl.navigate_into("a"));
        assert!(poll!(into_a.as_mut()).is_pending());
        assert_eq!(store.borrow().path.to_string(), "/a");
        assert!(store.borrow().loading);

        // User goes back before /a answers.
        ctrl.navigate_up().await;
        assert_eq!(names(&store), vec!["root.jpg"]);

        release_a.send(listing("/a", &[], &["a.jpg"])).unwrap();
        into_a.await;

        let state = store.borrow();
        assert_eq!(state.path, GalleryPath::root());
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, "root.jpg");
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_older_listing_for_same_path_loses() {
        let (api, ctrl, store) = setup();
        let first = api.gate("/");
        let second = api.gate("/");

        let mut load_1 = pin!(ctrl.reload());
        let mut load_2 = pin!(ctrl.reload());
        assert!(poll!(load_1.as_mut()).is_pending());
        assert!(poll!(load_2.as_mut()).is_pending());

        second.send(listing("/", &[], &["new.jpg"])).unwrap();
        assert!(load_2.await);
        first.send(listing("/", &[], &["old.jpg"])).unwrap();
        assert!(!load_1.await);

        assert_eq!(names(&store), vec!["new.jpg"]);
    }

    #[tokio::test]
    async fn test_listing_failure_surfaces_error() {
        let (api, ctrl, store) = setup();
        api.set_listing("/", listing("/", &["x"], &["a.jpg"]));
        ctrl.mount().await;
        api.set_listing("/", Err(FetchError::NetworkError("offline".to_string())));

        assert!(ctrl.reload().await);

        let state = store.borrow();
        assert!(state.folders.is_empty());
        assert!(state.items.is_empty());
        assert!(!state.loading);
        assert!(state.error_message.as_deref().unwrap().contains("offline"));
    }

    #[tokio::test]
    async fn test_create_folder_rejects_invalid_names_without_request() {
        let (api, ctrl, store) = setup();
        ctrl.mount().await;
        let calls_before = api.calls().len();

        for bad in ["my folder", "a/b", "a\\b", ""] {
            let result = ctrl.create_folder(bad).await;
            assert!(matches!(result, Err(GalleryError::Validation(_))));
        }
        assert_eq!(api.calls().len(), calls_before);
        assert!(store.borrow().error_message.is_some());

        let result = ctrl.create_folder("my folder").await;
        assert_eq!(
            result,
            Err(GalleryError::Validation(ValidationError::InvalidSegment(
                "my folder".to_string()
            )))
        );
    }

    #[tokio::test]
    async fn test_create_folder_then_reload() {
        let (api, ctrl, store) = setup();
        api.set_listing("/", listing("/", &[], &[]));
        ctrl.navigate_into("trips").await;
        api.set_listing("/trips", listing("/trips", &["2024"], &[]));

        let folder = ctrl.create_folder("2024").await.unwrap();
        assert_eq!(folder.name, "2024");

        let calls = api.calls();
        assert!(calls.contains(&Call::CreateFolder("/trips".into(), "2024".into())));
        assert_eq!(calls.last(), Some(&Call::List("/trips".into())));

        let state = store.borrow();
        assert_eq!(state.folders.len(), 1);
        assert_eq!(state.success_message.as_deref(), Some("Folder '2024' created"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_create_folder_failure_still_reloads() {
        let (api, ctrl, store) = setup();
        ctrl.mount().await;
        api.fail_mutations(FetchError::HttpError(409));

        let result = ctrl.create_folder("dup").await;
        assert_eq!(result, Err(GalleryError::Fetch(FetchError::HttpError(409))));
        assert_eq!(api.list_calls(), 2);
        assert!(store.borrow().folders.is_empty());
        assert!(!store.borrow().loading);
    }

    #[tokio::test]
    async fn test_delete_selection_sends_file_names() {
        let (api, ctrl, store) = setup();
        api.set_listing("/v", listing("/v", &[], &["a.jpg", "b.png", "c.gif"]));
        store.borrow_mut().path = GalleryPath::parse("/v");
        ctrl.reload().await;

        ctrl.toggle_select_mode();
        ctrl.toggle_select(&media("/v", "a.jpg").source_url);
        ctrl.toggle_select(&media("/v", "c.gif").source_url);
        assert_eq!(ctrl.delete_selection().await, Ok(2));

        let delete = api
            .calls()
            .into_iter()
            .find(|c| matches!(c, Call::Delete(..)))
            .unwrap();
        assert_eq!(
            delete,
            Call::Delete(
                "/v".into(),
                DeleteTarget::Items(vec!["a.jpg".into(), "c.gif".into()])
            )
        );
        assert_eq!(
            store.borrow().success_message.as_deref(),
            Some("Deleted 2 item(s)")
        );
    }

    #[tokio::test]
    async fn test_delete_failure_resets_and_reloads() {
        let (api, ctrl, store) = setup();
        api.set_listing("/", listing("/", &[], &["a.jpg"]));
        ctrl.mount().await;
        ctrl.toggle_select_mode();
        ctrl.select_all();
        api.fail_mutations(FetchError::HttpError(500));

        let result = ctrl.delete_selection().await;
        assert_eq!(result, Err(GalleryError::Fetch(FetchError::HttpError(500))));

        let state = store.borrow();
        assert_eq!(
            state.error_message.as_deref(),
            Some("Failed to delete items: HTTP error: 500")
        );
        assert!(!state.loading);
        assert!(state.selection.is_empty());
        assert!(!state.select_mode);
        assert_eq!(api.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_delete_with_empty_selection_is_noop() {
        let (api, ctrl, _store) = setup();
        ctrl.mount().await;
        assert_eq!(ctrl.delete_selection().await, Ok(0));
        assert_eq!(api.calls(), vec![Call::List("/".into())]);
    }

    #[tokio::test]
    async fn test_folder_delete_mode_routes_clicks() {
        let (api, ctrl, store) = setup();
        api.set_listing("/", listing("/", &["empty"], &[]));
        ctrl.mount().await;

        ctrl.toggle_folder_delete_mode();
        ctrl.navigate_into("empty").await;

        assert!(api
            .calls()
            .contains(&Call::Delete("/".into(), DeleteTarget::folder("empty"))));
        let state = store.borrow();
        assert_eq!(state.path, GalleryPath::root());
        assert!(!state.folder_delete_mode);
        assert_eq!(state.success_message.as_deref(), Some("Folder 'empty' deleted"));
    }

    /// Store that records the upload progress readout after every change.
    #[derive(Clone)]
    struct ProgressLog {
        inner: Store,
        seen: Rc<RefCell<Vec<u8>>>,
    }

    impl StateStore for ProgressLog {
        fn mutate<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
            let out = self.inner.mutate(f);
            let state = self.inner.borrow();
            if state.uploading {
                self.seen.borrow_mut().push(state.progress);
            }
            out
        }

        fn inspect<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R> {
            self.inner.inspect(f)
        }
    }

    #[tokio::test]
    async fn test_upload_progress_then_refresh() {
        let api = Rc::new(MockDirectory::new());
        let store = ProgressLog {
            inner: Rc::new(RefCell::new(ViewState::new())),
            seen: Rc::new(RefCell::new(Vec::new())),
        };
        let ctrl = GalleryController::new(Rc::clone(&api), store.clone());
        ctrl.mount().await;
        store.inner.borrow_mut().progress = 77;
        api.set_upload_steps(&[0, 20, 15, 60, 100]);

        let files = vec!["a.jpg".to_string(), "b.jpg".into(), "c.jpg".into()];
        ctrl.upload(files).await.unwrap();

        let seen = store.seen.borrow().clone();
        assert_eq!(seen.first(), Some(&0));
        assert_eq!(seen.last(), Some(&100));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]), "{:?}", seen);

        let state = store.inner.borrow();
        assert_eq!(state.progress, 100);
        assert!(!state.uploading);
        assert_eq!(state.success_message.as_deref(), Some("Uploaded 3 file(s)"));
        assert_eq!(
            &api.calls()[1..],
            &[Call::Upload("/".into(), 3), Call::List("/".into())]
        );
    }

    #[tokio::test]
    async fn test_upload_failure_surfaces_error() {
        let (api, ctrl, store) = setup();
        ctrl.mount().await;
        api.fail_mutations(FetchError::UploadFailed("connection failed".into()));

        assert!(ctrl.upload(vec!["a.jpg".into()]).await.is_err());
        let state = store.borrow();
        assert!(!state.uploading);
        assert_eq!(
            state.error_message.as_deref(),
            Some("Could not upload 1 file(s): Upload failed: connection failed")
        );
        assert_eq!(api.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_download_continues_after_failure() {
        let (api, ctrl, store) = setup();
        api.set_listing("/", listing("/", &[], &["a.jpg", "b.jpg", "c.jpg"]));
        ctrl.mount().await;
        ctrl.toggle_select_mode();
        ctrl.select_all();
        api.fail_save("b.jpg");

        let report = ctrl.download_selection().await;

        assert_eq!(report.saved, 2);
        assert_eq!(report.failed, vec!["b.jpg".to_string()]);
        let saves: Vec<_> = api
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Save(_)))
            .collect();
        assert_eq!(
            saves,
            vec![
                Call::Save("a.jpg".into()),
                Call::Save("b.jpg".into()),
                Call::Save("c.jpg".into())
            ]
        );
        assert!(store.borrow().error_message.is_some());
        // Downloading leaves the selection alone.
        assert_eq!(store.borrow().selection.len(), 3);
    }

    #[tokio::test]
    async fn test_select_all_then_clear_is_empty() {
        let (api, ctrl, store) = setup();
        api.set_listing("/", listing("/", &[], &["a.jpg", "b.jpg"]));
        ctrl.mount().await;

        ctrl.toggle_select(&media("/", "a.jpg").source_url);
        ctrl.select_all();
        ctrl.clear_selection();
        assert!(store.borrow().selection.is_empty());
    }

    #[tokio::test]
    async fn test_notices_can_be_dismissed() {
        let (api, ctrl, store) = setup();
        api.set_listing("/", Err(FetchError::HttpError(503)));
        ctrl.mount().await;
        assert!(store.borrow().error_message.is_some());
        ctrl.dismiss_error();
        assert!(store.borrow().error_message.is_none());

        store.borrow_mut().notify_success("done");
        ctrl.dismiss_success();
        assert!(store.borrow().success_message.is_none());
    }

    #[tokio::test]
    async fn test_repeated_delete_notice_is_timed_from_latest() {
        let (api, ctrl, store) = setup();
        api.set_listing("/", listing("/", &[], &["a.jpg"]));
        ctrl.mount().await;

        ctrl.toggle_select_mode();
        ctrl.select_all();
        ctrl.delete_selection().await.unwrap();
        let first = store.borrow().success_seq;

        ctrl.toggle_select_mode();
        ctrl.select_all();
        ctrl.delete_selection().await.unwrap();
        let second = store.borrow().success_seq;

        ctrl.expire_success(first);
        assert_eq!(store.borrow().success_message.as_deref(), Some("Deleted 1 item(s)"));
        ctrl.expire_success(second);
        assert!(store.borrow().success_message.is_none());
    }
}
