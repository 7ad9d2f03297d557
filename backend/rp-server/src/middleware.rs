use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use log::{info, warn};

/// Log every request and the status it was answered with.
///
/// Bodies are not logged since login requests carry passwords.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    info!("[REQ-{} {}]", method, uri);

    let response = next.run(request).await;
    let status = response.status();
    let elapsed = started.elapsed();

    if status.is_server_error() {
        warn!("[RESP-{}] {} {} in {:?}", status, method, uri, elapsed);
    } else {
        info!("[RESP-{}] {} {} in {:?}", status, method, uri, elapsed);
    }

    response
}
