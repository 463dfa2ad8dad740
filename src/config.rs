//! Application configuration.
//!
//! Centralizes configuration constants and the [`AppConfig`] object holding
//! the backend base URLs. Base URLs are taken from the build environment
//! (`GALLERY_API_BASE`, `GALLERY_STATIC_BASE`) once, at startup.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header.
pub const APP_NAME: &str = "Gallery";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10000;

/// How long success and error notices stay visible, in milliseconds.
pub const NOTICE_TIMEOUT_MS: u32 = 4000;

/// Multipart form field carrying uploaded files.
pub const UPLOAD_FIELD: &str = "files";

/// API base used when `GALLERY_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Static-resource base used when `GALLERY_STATIC_BASE` is not set.
pub const DEFAULT_STATIC_BASE: &str = "http://localhost:8080/static";

/// Grid column breakpoints (min-width media queries).
pub mod breakpoints {
    pub const SM: &str = "(min-width: 600px)";
    pub const MD: &str = "(min-width: 960px)";
    pub const LG: &str = "(min-width: 1264px)";
}

/// Backend endpoints, constructed once and shared by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    api_base: String,
    static_base: String,
}

impl AppConfig {
    /// Build from explicit base URLs. Trailing slashes are stripped.
    pub fn new(api_base: impl Into<String>, static_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            static_base: static_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build from the compile-time environment, falling back to localhost.
    pub fn from_env() -> Self {
        Self::new(
            option_env!("GALLERY_API_BASE").unwrap_or(DEFAULT_API_BASE),
            option_env!("GALLERY_STATIC_BASE").unwrap_or(DEFAULT_STATIC_BASE),
        )
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn static_base(&self) -> &str {
        &self.static_base
    }

    /// API URL for a serialized path such as `/vacation` or `/`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, with_leading_slash(path))
    }

    /// Static-resource URL for a serialized path.
    pub fn static_url(&self, path: &str) -> String {
        format!("{}{}", self.static_base, with_leading_slash(path))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn with_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
