//! Logical folder path used for navigation.
//!
//! A [`GalleryPath`] is an ordered list of folder names below the gallery
//! root. It serializes to `/` for the root and `/a/b` otherwise, which is the
//! form the backend expects in request URLs.

use std::fmt;

use super::error::ValidationError;

/// Current directory as a sequence of validated segments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GalleryPath {
    segments: Vec<String>,
}

impl GalleryPath {
    /// The gallery root (`/`).
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a serialized path, dropping empty segments.
    ///
    /// Segments that would fail [`validate_segment`] are skipped as well, so
    /// the result always upholds the segment invariant.
    #[cfg(test)]
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split(['/', '\\'])
            .filter(|s| validate_segment(s).is_ok())
            .map(String::from)
            .collect();
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Name of the innermost folder, `None` at the root.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Path of a child folder.
    pub fn descend(&self, name: &str) -> Result<Self, ValidationError> {
        validate_segment(name)?;
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Ok(Self { segments })
    }

    /// Path of the parent folder. The root is its own parent.
    pub fn ascend(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }

    /// Serialized path of an entry directly inside this folder.
    pub fn join_name(&self, name: &str) -> String {
        if self.is_root() {
            format!("/{}", name)
        } else {
            format!("{}/{}", self, name)
        }
    }
}

impl fmt::Display for GalleryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

/// Check that `name` can be used as a single folder segment.
///
/// Rejects empty names and names containing `/`, `\` or any whitespace.
pub fn validate_segment(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    if name.chars().any(|c| c == '/' || c == '\\' || c.is_whitespace()) {
        return Err(ValidationError::InvalidSegment(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        assert_eq!(GalleryPath::root().to_string(), "/");
        let path = GalleryPath::root()
            .descend("vacation")
            .and_then(|p| p.descend("2024"))
            .unwrap();
        assert_eq!(path.to_string(), "/vacation/2024");
        assert_eq!(path.name(), Some("2024"));
    }

    #[test]
    fn test_ascend_inverts_descend() {
        let paths = [
            GalleryPath::root(),
            GalleryPath::parse("/a"),
            GalleryPath::parse("/a/b/c"),
        ];
        for path in paths {
            for name in ["x", "photos", "2024-01"] {
                assert_eq!(path.descend(name).unwrap().ascend(), path);
            }
        }
    }

    #[test]
    fn test_ascend_at_root_is_idempotent() {
        let root = GalleryPath::root();
        assert_eq!(root.ascend(), root);
        assert_eq!(root.ascend().ascend(), root);
    }

    #[test]
    fn test_descend_rejects_bad_names() {
        let root = GalleryPath::root();
        // Empty names get their own variant; both count as an invalid segment.
        assert_eq!(root.descend(""), Err(ValidationError::Empty));
        assert_eq!(root.descend("   "), Err(ValidationError::Empty));
        for bad in ["", "   ", "my folder", "a/b", "a\\b", "tab\there"] {
            assert!(matches!(
                root.descend(bad),
                Err(ValidationError::Empty | ValidationError::InvalidSegment(_))
            ));
        }
        for bad in ["my folder", "a/b", "a\\b", "tab\there"] {
            assert!(matches!(
                root.descend(bad),
                Err(ValidationError::InvalidSegment(_))
            ));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(GalleryPath::parse("/"), GalleryPath::root());
        assert_eq!(GalleryPath::parse(""), GalleryPath::root());
        assert_eq!(GalleryPath::parse("//a///b/").to_string(), "/a/b");
    }

    #[test]
    fn test_join_name() {
        assert_eq!(GalleryPath::root().join_name("a.jpg"), "/a.jpg");
        assert_eq!(GalleryPath::parse("/vacation").join_name("a.jpg"), "/vacation/a.jpg");
    }
}
