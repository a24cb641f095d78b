//! Request Context
//!
//! Per-request values visible to code running inside the request future.

use std::future::Future;

tokio::task_local! {
    static REQUEST_ID: String;
}

/// Run `future` with `request_id` as the current request ID
pub async fn with_request_id<F: Future>(request_id: String, future: F) -> F::Output {
    REQUEST_ID.scope(request_id, future).await
}

/// The ID of the request being handled, if any
#[must_use]
pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(Clone::clone).ok()
}
