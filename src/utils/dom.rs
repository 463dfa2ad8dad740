//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, File, HtmlInputElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document of the current window.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Collect the files chosen in an `<input type="file">` change event.
pub fn take_selected_files(event: &web_sys::Event) -> Vec<File> {
    let Some(input) = event
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    else {
        return Vec::new();
    };

    let files = input
        .files()
        .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default();

    // Clear the input so choosing the same files again fires `change`.
    input.set_value("");
    files
}

/// Grid columns for the current viewport.
///
/// Arguments are the results of the `min-width` media queries in
/// [`crate::config::breakpoints`]: one column on phones, up to four on wide
/// screens.
pub fn column_count(sm: bool, md: bool, lg: bool) -> usize {
    match (sm, md, lg) {
        (_, _, true) => 4,
        (_, true, false) => 3,
        (true, false, false) => 2,
        (false, false, false) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count() {
        assert_eq!(column_count(false, false, false), 1);
        assert_eq!(column_count(true, false, false), 2);
        assert_eq!(column_count(true, true, false), 3);
        assert_eq!(column_count(true, true, true), 4);
    }
}
