//! Gallery view state and its transitions.
//!
//! [`ViewState`] is a plain value; every transition is a method on it so the
//! rules can be exercised without a browser. [`StateStore`] abstracts where
//! the value lives: a Leptos signal in the app, a `RefCell` in tests.

use leptos::prelude::*;

use crate::models::{Folder, Listing, MediaItem};

use super::error::FetchError;
use super::path::GalleryPath;
use super::selection::SelectionSet;

/// Coarse lifecycle of the listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    /// Nothing requested yet.
    Idle,
    /// A listing request for the current path is outstanding.
    Loading,
    /// The latest listing (or its failure) has been applied.
    Loaded,
}

/// Identifies one listing request.
///
/// A response may only be applied while its ticket is current, i.e. no newer
/// request was started and the active path is unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub path: GalleryPath,
}

/// Everything the presentation layer renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub path: GalleryPath,
    pub folders: Vec<Folder>,
    pub items: Vec<MediaItem>,
    /// Full-screen block while listing or mutating
    pub loading: bool,
    /// Upload overlay visibility
    pub uploading: bool,
    /// Upload progress in percent, meaningful only while `uploading`
    pub progress: u8,
    pub select_mode: bool,
    /// While set, clicking a folder deletes it instead of opening it
    pub folder_delete_mode: bool,
    pub selection: SelectionSet,
    /// Source URL shown in the fullscreen viewer
    pub viewer: Option<String>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    /// Bumped on every error notice, even when the text repeats
    pub error_seq: u64,
    /// Bumped on every success notice
    pub success_seq: u64,
    generation: u64,
    loaded: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Initial state: root path, nothing listed, blocked until the first
    /// listing arrives.
    pub fn new() -> Self {
        Self {
            path: GalleryPath::root(),
            folders: Vec::new(),
            items: Vec::new(),
            loading: true,
            uploading: false,
            progress: 0,
            select_mode: false,
            folder_delete_mode: false,
            selection: SelectionSet::new(),
            viewer: None,
            error_message: None,
            success_message: None,
            error_seq: 0,
            success_seq: 0,
            generation: 0,
            loaded: false,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        if self.generation == 0 {
            LoadPhase::Idle
        } else if self.loading {
            LoadPhase::Loading
        } else if self.loaded {
            LoadPhase::Loaded
        } else {
            LoadPhase::Idle
        }
    }

    // =========================================================================
    // Listing
    // =========================================================================

    /// Start a listing request for the current path.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket {
            generation: self.generation,
            path: self.path.clone(),
        }
    }

    /// Whether a response for `ticket` may still be applied.
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation && ticket.path == self.path
    }

    /// Apply a listing result. Returns `false` if the ticket was stale and
    /// the result was discarded.
    pub fn finish_load(&mut self, ticket: &LoadTicket, result: Result<Listing, FetchError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match result {
            Ok(listing) => {
                self.folders = listing.folders;
                self.items = listing.items;
            }
            Err(e) => {
                self.folders = Vec::new();
                self.items = Vec::new();
                self.notify_error(format!("Failed to load {}: {}", ticket.path, e));
            }
        }
        self.reset_modes();
        self.loading = false;
        self.loaded = true;
        true
    }

    fn reset_modes(&mut self) {
        self.selection = SelectionSet::new();
        self.select_mode = false;
        self.folder_delete_mode = false;
    }

    /// Append a newly created folder without mutating the shared list.
    pub fn add_folder(&mut self, folder: Folder) {
        if self.folders.iter().any(|f| f.name == folder.name) {
            return;
        }
        let mut folders = self.folders.clone();
        folders.push(folder);
        self.folders = folders;
    }

    /// Drop items whose id is in `ids`, along with their selection.
    pub fn remove_items(&mut self, ids: &[String]) {
        let items: Vec<MediaItem> = self
            .items
            .iter()
            .filter(|item| !ids.iter().any(|id| id == item.id()))
            .cloned()
            .collect();
        self.selection = self
            .selection
            .retain_present(|id| items.iter().any(|item| item.id() == id));
        self.items = items;
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Toggle one item. Ids not in the current listing are ignored.
    pub fn toggle_select(&mut self, id: &str) {
        if self.items.iter().any(|item| item.id() == id) {
            self.selection = self.selection.toggle(id);
        }
    }

    pub fn select_all(&mut self) {
        self.selection = SelectionSet::select_all(self.items.iter().map(MediaItem::id));
    }

    pub fn clear_selection(&mut self) {
        self.selection = SelectionSet::new();
    }

    pub fn toggle_select_mode(&mut self) {
        self.select_mode = !self.select_mode;
    }

    pub fn exit_select_mode(&mut self) {
        self.select_mode = false;
    }

    /// Selected items in listing order.
    pub fn selected_items(&self) -> Vec<MediaItem> {
        self.items
            .iter()
            .filter(|item| self.selection.contains(item.id()))
            .cloned()
            .collect()
    }

    // =========================================================================
    // Modes & Overlays
    // =========================================================================

    pub fn toggle_folder_delete_mode(&mut self) {
        self.folder_delete_mode = !self.folder_delete_mode;
    }

    /// Show `url` fullscreen. Ignored in select mode, where clicks select.
    pub fn open_viewer(&mut self, url: &str) {
        if self.select_mode {
            return;
        }
        self.viewer = Some(url.to_string());
        self.folder_delete_mode = false;
    }

    pub fn close_viewer(&mut self) {
        self.viewer = None;
    }

    // =========================================================================
    // Upload Progress
    // =========================================================================

    pub fn begin_upload(&mut self) {
        self.uploading = true;
        self.progress = 0;
    }

    /// Record a progress report. Values are clamped to 100 and never move
    /// the readout backwards.
    pub fn record_progress(&mut self, percent: u8) {
        self.progress = self.progress.max(percent.min(100));
    }

    pub fn finish_upload(&mut self, succeeded: bool) {
        if succeeded {
            self.progress = 100;
        }
        self.uploading = false;
    }

    // =========================================================================
    // Notices
    // =========================================================================

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
        self.error_seq += 1;
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.success_message = Some(message.into());
        self.success_seq += 1;
    }

    /// Hide the error notice if it is still the one numbered `seq`.
    pub fn expire_error(&mut self, seq: u64) {
        if self.error_seq == seq {
            self.error_message = None;
        }
    }

    /// Hide the success notice if it is still the one numbered `seq`.
    pub fn expire_success(&mut self, seq: u64) {
        if self.success_seq == seq {
            self.success_message = None;
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }

    pub fn dismiss_success(&mut self) {
        self.success_message = None;
    }
}

// =============================================================================
// State Storage
// =============================================================================

/// Storage for a [`ViewState`] shared between the controller and the UI.
///
/// Both methods return `None` once the storage is gone (e.g. the owning
/// component was disposed), in which case callers stop quietly.
pub trait StateStore {
    fn mutate<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R>;
    fn inspect<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R>;
}

impl StateStore for RwSignal<ViewState> {
    fn mutate<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn inspect<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

#[cfg(test)]
impl StateStore for std::rc::Rc<std::cell::RefCell<ViewState>> {
    fn mutate<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn inspect<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}
