//! Multipart upload with progress reporting.
//!
//! The Fetch API cannot report upload progress, so uploads go through
//! `XMLHttpRequest` and its `upload.onprogress` event. Completion callbacks
//! are bridged to a future with a oneshot channel.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

use crate::core::error::FetchError;

type Sender = Rc<RefCell<Option<oneshot::Sender<Result<(), FetchError>>>>>;

/// `PUT` `files` to `url` as repeated multipart `field` entries.
///
/// `on_progress` receives integer percentages as bytes are sent.
pub async fn put_multipart(
    url: &str,
    field: &str,
    files: &[File],
    on_progress: impl Fn(u8) + 'static,
) -> Result<(), FetchError> {
    let form = FormData::new().map_err(|_| FetchError::RequestCreationFailed)?;
    for file in files {
        form.append_with_blob_and_filename(field, file, &file.name())
            .map_err(|_| FetchError::RequestCreationFailed)?;
    }

    let xhr = XmlHttpRequest::new().map_err(|_| FetchError::RequestCreationFailed)?;
    xhr.open_with_async("PUT", url, true)
        .map_err(|_| FetchError::RequestCreationFailed)?;
    let upload = xhr.upload().map_err(|_| FetchError::RequestCreationFailed)?;

    let (tx, rx) = oneshot::channel();
    let sender: Sender = Rc::new(RefCell::new(Some(tx)));

    let on_progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
        if event.length_computable() {
            on_progress(percent(event.loaded(), event.total()));
        }
    });
    upload.set_onprogress(Some(on_progress.as_ref().unchecked_ref()));

    let xhr_for_load = xhr.clone();
    let load_sender = sender.clone();
    let on_load = Closure::<dyn FnMut(ProgressEvent)>::new(move |_: ProgressEvent| {
        let status = xhr_for_load.status().unwrap_or(0);
        let result = if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(FetchError::HttpError(status))
        };
        settle(&load_sender, result);
    });
    xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));

    let error_sender = sender.clone();
    let on_error = Closure::<dyn FnMut(ProgressEvent)>::new(move |_: ProgressEvent| {
        settle(
            &error_sender,
            Err(FetchError::UploadFailed("connection failed".to_string())),
        );
    });
    xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    xhr.set_onabort(Some(on_error.as_ref().unchecked_ref()));

    xhr.send_with_opt_form_data(Some(&form))
        .map_err(|_| FetchError::UploadFailed("request could not be sent".to_string()))?;

    let result = rx
        .await
        .map_err(|_| FetchError::UploadFailed("upload was interrupted".to_string()))?;

    upload.set_onprogress(None);
    xhr.set_onload(None);
    xhr.set_onerror(None);
    xhr.set_onabort(None);
    result
}

fn settle(sender: &Sender, result: Result<(), FetchError>) {
    if let Some(tx) = sender.borrow_mut().take() {
        let _ = tx.send(result);
    }
}

/// Convert a byte count into a whole percentage in `0..=100`.
pub fn percent(loaded: f64, total: f64) -> u8 {
    if total <= 0.0 || !loaded.is_finite() {
        return 0;
    }
    ((loaded / total) * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.0, 100.0), 0);
        assert_eq!(percent(50.0, 200.0), 25);
        assert_eq!(percent(1.0, 3.0), 33);
        assert_eq!(percent(300.0, 200.0), 100);
        assert_eq!(percent(10.0, 0.0), 0);
    }
}
