use serde::{Deserialize, Serialize};

// =============================================================================
// Raw API Records
// =============================================================================

/// Entry type tag as reported by the listing endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum EntryType {
    /// Directory
    #[serde(rename = "D")]
    Directory,
    /// Regular file
    #[serde(rename = "F")]
    File,
}

/// One record of the listing response body.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RawEntry {
    /// Full path of the entry on the server (e.g. `/vacation/a.jpg`)
    pub file: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Creation date as formatted by the server
    #[serde(default)]
    pub date: Option<String>,
}

impl RawEntry {
    /// Final path segment of [`RawEntry::file`].
    pub fn name(&self) -> &str {
        last_segment(&self.file)
    }
}

/// Final `/`- or `\`-separated segment of `path`.
pub fn last_segment(path: &str) -> &str {
    path.trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
}

// =============================================================================
// Typed Entries
// =============================================================================

/// Media classification derived from the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
    Unknown,
}

impl MediaKind {
    /// Detect media kind from a file name's extension (case-insensitive).
    pub fn from_name(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return Self::Unknown;
        };
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "webp" | "gif" | "bmp" | "svg" => Self::Image,
            "mp4" | "webm" | "ogg" | "mov" | "avi" | "mkv" | "flv" | "wmv" | "m4v" => Self::Video,
            _ => Self::Unknown,
        }
    }
}

/// A folder inside the current directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    pub created_date: Option<String>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_date: None,
        }
    }
}

/// A file inside the current directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaItem {
    pub name: String,
    /// Public URL for direct embedding; also the selection identifier.
    pub source_url: String,
    /// API URL that serves the original bytes.
    pub download_url: String,
    pub kind: MediaKind,
}

impl MediaItem {
    /// Identifier used by [`crate::core::SelectionSet`].
    pub fn id(&self) -> &str {
        &self.source_url
    }
}

/// A normalized listing entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectoryEntry {
    Folder(Folder),
    Media(MediaItem),
}

/// Folders and items of one directory, in server order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    pub folders: Vec<Folder>,
    pub items: Vec<MediaItem>,
}

impl FromIterator<DirectoryEntry> for Listing {
    fn from_iter<T: IntoIterator<Item = DirectoryEntry>>(iter: T) -> Self {
        let mut listing = Listing::default();
        for entry in iter {
            match entry {
                DirectoryEntry::Folder(folder) => listing.folders.push(folder),
                DirectoryEntry::Media(item) => listing.items.push(item),
            }
        }
        listing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_detection() {
        assert_eq!(MediaKind::from_name("a.jpg"), MediaKind::Image);
        assert_eq!(MediaKind::from_name("b.JPEG"), MediaKind::Image);
        assert_eq!(MediaKind::from_name("icon.svg"), MediaKind::Image);
        assert_eq!(MediaKind::from_name("clip.MOV"), MediaKind::Video);
        assert_eq!(MediaKind::from_name("clip.m4v"), MediaKind::Video);
        assert_eq!(MediaKind::from_name("notes.txt"), MediaKind::Unknown);
        assert_eq!(MediaKind::from_name("README"), MediaKind::Unknown);
    }

    #[test]
    fn test_raw_entry_parsing() {
        let body = r#"[{"file":"/v/a.jpg","type":"F"},{"file":"/v/sub","type":"D","date":"2024-01-01"}]"#;
        let entries: Vec<RawEntry> = serde_json::from_str(body).unwrap();
        assert_eq!(entries[0].entry_type, EntryType::File);
        assert_eq!(entries[0].name(), "a.jpg");
        assert_eq!(entries[1].entry_type, EntryType::Directory);
        assert_eq!(entries[1].date.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("/a/b/c.png"), "c.png");
        assert_eq!(last_segment("/a/sub/"), "sub");
        assert_eq!(last_segment("\\a\\b"), "b");
        assert_eq!(last_segment("plain"), "plain");
    }
}
