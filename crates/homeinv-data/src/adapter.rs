//! Safe-call adapter
//!
//! Every remote call goes through one of the two functions here. They turn a
//! transport outcome into `Result<T, Failure>`, so nothing above this layer
//! sees an HTTP status or a transport error directly. Exactly one attempt is
//! made.

use std::future::Future;

use homeinv_domain::Failure;
use homeinv_http::{RawResponse, Result as HttpResult};
use serde::de::DeserializeOwned;

/// Run `call` and decode its body.
///
/// - 2xx with a body: decoded into `T`
/// - 2xx with an empty or `null` body: [`Failure::empty_body`]
/// - 404: [`Failure::not_found`]
/// - any other status: `ERROR: <code> <phrase>`
/// - transport error: `ERROR: <error>`
pub async fn safe_call<T, F, Fut>(call: F) -> Result<T, Failure>
where
    T: DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = HttpResult<RawResponse>>,
{
    let response = check_status(call().await)?;

    if is_blank(&response.body) {
        return Err(Failure::empty_body());
    }

    serde_json::from_str(&response.body).map_err(Failure::decode)
}

/// Run `call` for an endpoint without a response payload. Any 2xx succeeds.
pub async fn safe_call_no_body<F, Fut>(call: F) -> Result<(), Failure>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = HttpResult<RawResponse>>,
{
    check_status(call().await).map(|_| ())
}

fn check_status(outcome: HttpResult<RawResponse>) -> Result<RawResponse, Failure> {
    let response = outcome.map_err(Failure::transport)?;

    match response.status {
        200..=299 => Ok(response),
        404 => Err(Failure::not_found()),
        code => Err(Failure::status(code, &response.reason)),
    }
}

fn is_blank(body: &str) -> bool {
    let trimmed = body.trim();
    trimmed.is_empty() || trimmed == "null"
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeinv_domain::FailureKind;
    use homeinv_http::HttpError;

    fn respond(status: u16, reason: &str, body: &str) -> HttpResult<RawResponse> {
        Ok(RawResponse::new(status, reason, body))
    }

    #[tokio::test]
    async fn test_success_with_body() {
        let value: i64 = safe_call(|| async { respond(200, "OK", "7") }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_success_with_empty_body() {
        let result: Result<Vec<i64>, _> = safe_call(|| async { respond(200, "OK", "") }).await;
        assert_eq!(result.unwrap_err().kind, FailureKind::EmptyBody);

        let result: Result<Vec<i64>, _> = safe_call(|| async { respond(200, "OK", "null") }).await;
        assert_eq!(result.unwrap_err().kind, FailureKind::EmptyBody);
    }

    #[tokio::test]
    async fn test_not_found() {
        let result: Result<i64, _> =
            safe_call(|| async { respond(404, "Not Found", "{\"message\":\"x\"}") }).await;
        let failure = result.unwrap_err();
        assert_eq!(failure.kind, FailureKind::NotFound);
        assert_eq!(failure.message, "The data was not found");
    }

    #[tokio::test]
    async fn test_other_status() {
        let result: Result<i64, _> =
            safe_call(|| async { respond(500, "Internal Server Error", "") }).await;
        let failure = result.unwrap_err();
        assert_eq!(failure.status, Some(500));
        assert_eq!(failure.message, "ERROR: 500 Internal Server Error");
    }

    #[tokio::test]
    async fn test_transport_error() {
        let result: Result<i64, _> =
            safe_call(|| async { Err(HttpError::InvalidUrl("nope".to_string())) }).await;
        let failure = result.unwrap_err();
        assert_eq!(failure.kind, FailureKind::Transport);
        assert_eq!(failure.message, "ERROR: Invalid URL: nope");
    }

    #[tokio::test]
    async fn test_decode_error() {
        let result: Result<i64, _> = safe_call(|| async { respond(200, "OK", "{\"a\":1}") }).await;
        assert_eq!(result.unwrap_err().kind, FailureKind::Decode);
    }

    #[tokio::test]
    async fn test_no_body_variant() {
        assert!(safe_call_no_body(|| async { respond(201, "Created", "") }).await.is_ok());
        assert!(safe_call_no_body(|| async { respond(204, "No Content", "") }).await.is_ok());

        let failure = safe_call_no_body(|| async { respond(404, "Not Found", "") })
            .await
            .unwrap_err();
        assert!(failure.is_not_found());

        let failure = safe_call_no_body(|| async { respond(409, "Conflict", "") })
            .await
            .unwrap_err();
        assert_eq!(failure.message, "ERROR: 409 Conflict");
    }
}
