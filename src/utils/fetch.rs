//! Network fetching utilities with timeout support.
//!
//! Thin wrappers over `gloo-net` that map transport failures and non-2xx
//! statuses into [`FetchError`] and race every request against
//! [`FETCH_TIMEOUT_MS`].

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

// =============================================================================
// Timeout Racing
// =============================================================================

/// Race a request future against a timeout.
///
/// Returns [`FetchError::Timeout`] if `timeout_ms` elapses first. The losing
/// request is dropped; the browser may still complete it in the background.
pub async fn with_timeout<F, T>(request: F, timeout_ms: u32) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    race(request, TimeoutFuture::new(timeout_ms)).await
}

/// Resolve `request` unless `timer` fires first.
async fn race<F, D, T>(request: F, timer: D) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
    D: Future<Output = ()>,
{
    let request = pin!(request);
    let timer = pin!(timer);

    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(FetchError::Timeout),
    }
}

/// Bound only the wait for a response head, then read its body without a
/// deadline.
///
/// Media bodies can take far longer than [`FETCH_TIMEOUT_MS`] to transfer,
/// while a server that never answers still fails fast.
async fn head_then_body<H, D, B, BF, R, T>(head: H, timer: D, body: B) -> Result<T, FetchError>
where
    H: Future<Output = Result<R, FetchError>>,
    D: Future<Output = ()>,
    B: FnOnce(R) -> BF,
    BF: Future<Output = Result<T, FetchError>>,
{
    let resp = race(head, timer).await?;
    body(resp).await
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// GET a URL and return the body as text.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    with_timeout(
        async {
            let resp = checked(Request::get(url).send().await)?;
            resp.text().await.map_err(|_| FetchError::ResponseReadFailed)
        },
        FETCH_TIMEOUT_MS,
    )
    .await
}

/// GET a URL and return the raw body bytes.
///
/// Only the status and headers are subject to [`FETCH_TIMEOUT_MS`].
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, FetchError> {
    head_then_body(
        async { checked(Request::get(url).send().await) },
        TimeoutFuture::new(FETCH_TIMEOUT_MS),
        |resp| async move { resp.binary().await.map_err(|_| FetchError::ResponseReadFailed) },
    )
    .await
}

/// POST without a body. Only the status is inspected.
pub async fn post_empty(url: &str) -> Result<(), FetchError> {
    with_timeout(
        async {
            checked(Request::post(url).send().await)?;
            Ok(())
        },
        FETCH_TIMEOUT_MS,
    )
    .await
}

/// DELETE with a JSON body. Only the status is inspected.
pub async fn delete_json<T: Serialize + ?Sized>(url: &str, body: &T) -> Result<(), FetchError> {
    let request = Request::delete(url)
        .json(body)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    with_timeout(
        async {
            checked(request.send().await)?;
            Ok(())
        },
        FETCH_TIMEOUT_MS,
    )
    .await
}

/// Map a `gloo-net` send result, treating non-2xx statuses as errors.
fn checked(result: Result<Response, gloo_net::Error>) -> Result<Response, FetchError> {
    let resp = result.map_err(|e| FetchError::NetworkError(e.to_string()))?;
    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use futures::future::{pending, ready};

    use super::*;

    #[tokio::test]
    async fn test_race_prefers_finished_request() {
        let result = race(ready(Ok::<_, FetchError>(7)), ready(())).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn test_race_times_out_stalled_request() {
        let result = race(pending::<Result<u8, FetchError>>(), ready(())).await;
        assert_eq!(result, Err(FetchError::Timeout));
    }

    #[tokio::test]
    async fn test_slow_body_is_not_timed_out() {
        // The timer has already fired by the time the body is read.
        let result = head_then_body(ready(Ok(21)), ready(()), |n: u32| async move {
            tokio::task::yield_now().await;
            tokio::task::yield_now().await;
            Ok(n * 2)
        })
        .await;
        assert_eq!(result, Ok(42));
    }

    #[tokio::test]
    async fn test_stalled_head_times_out_without_reading_body() {
        let result = head_then_body(
            pending::<Result<u32, FetchError>>(),
            ready(()),
            |_: u32| async { Err::<u32, _>(FetchError::ResponseReadFailed) },
        )
        .await;
        assert_eq!(result, Err(FetchError::Timeout));
    }
}
