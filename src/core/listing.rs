//! Listing normalization.
//!
//! Turns the raw `[{file, type, date?}]` body of the listing endpoint into a
//! typed [`Listing`] with display and download URLs resolved.

use crate::config::AppConfig;
use crate::models::{DirectoryEntry, EntryType, Folder, Listing, MediaItem, MediaKind, RawEntry};

use super::error::FetchError;
use super::path::GalleryPath;

/// Parse a listing response body for `path`.
///
/// Anything other than a JSON array of entry records is a
/// [`FetchError::MalformedResponse`].
pub fn parse_listing(body: &str, path: &GalleryPath, config: &AppConfig) -> Result<Listing, FetchError> {
    let entries: Vec<RawEntry> =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedResponse(e.to_string()))?;
    Ok(normalize(entries, path, config))
}

/// Convert raw records into typed entries, preserving server order.
pub fn normalize(entries: Vec<RawEntry>, path: &GalleryPath, config: &AppConfig) -> Listing {
    entries
        .into_iter()
        .filter(|raw| !raw.name().is_empty())
        .map(|raw| to_entry(raw, path, config))
        .collect()
}

fn to_entry(raw: RawEntry, path: &GalleryPath, config: &AppConfig) -> DirectoryEntry {
    let name = raw.name().to_string();
    match raw.entry_type {
        EntryType::Directory => DirectoryEntry::Folder(Folder {
            name,
            created_date: raw.date,
        }),
        EntryType::File => DirectoryEntry::Media(MediaItem {
            kind: MediaKind::from_name(&name),
            source_url: config.static_url(&path.join_name(&name)),
            download_url: config.api_url(&raw.file),
            name,
        }),
    }
}
