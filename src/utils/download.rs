//! Saving remote files through the browser's download mechanism.

use gloo_timers::callback::Timeout;
use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};

use super::dom;
use super::fetch::fetch_bytes;
use crate::core::error::FetchError;

/// How long an object URL stays alive after its download is triggered.
const REVOKE_DELAY_MS: u32 = 60_000;

/// Fetch `url` and offer it to the user as `file_name`.
pub async fn save_url(url: &str, file_name: &str) -> Result<(), FetchError> {
    let bytes = fetch_bytes(url).await?;
    save_bytes(&bytes, file_name).map(drop)
}

/// Wrap `bytes` in a Blob and click a temporary `<a download>` for it.
///
/// Returns the object URL handed to the anchor. It is revoked after
/// [`REVOKE_DELAY_MS`], since the browser may start reading it only after
/// `click()` returns.
fn save_bytes(bytes: &[u8], file_name: &str) -> Result<String, FetchError> {
    let document = dom::document().ok_or(FetchError::NoWindow)?;

    let parts = Array::of1(&Uint8Array::from(bytes));
    let blob = Blob::new_with_u8_array_sequence(&parts).map_err(|_| FetchError::ResponseReadFailed)?;
    let href = Url::create_object_url_with_blob(&blob).map_err(|_| FetchError::ResponseReadFailed)?;

    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
        .ok_or(FetchError::NoWindow)?;
    anchor.set_href(&href);
    anchor.set_download(file_name);
    anchor.click();

    let pending = href.clone();
    Timeout::new(REVOKE_DELAY_MS, move || {
        let _ = Url::revoke_object_url(&pending);
    })
    .forget();
    Ok(href)
}
