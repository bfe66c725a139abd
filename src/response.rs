//! Pass-through HTTP response returned by endpoint methods.
//!
//! Most AirWatch endpoints hand back whatever the server said, including
//! 4xx/5xx statuses. `ApiResponse` buffers the body once so callers can
//! inspect the status, read the raw bytes, and parse JSON as many times as
//! they like.

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AirWatchError, Result};

/// Status, headers and raw body of one API call.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl ApiResponse {
    /// Wraps an already-buffered response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self { status, headers, body }
    }

    /// Reads the full body of a `reqwest::Response`.
    pub(crate) async fn from_reqwest(resp: reqwest::Response) -> Result<Self> {
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;
        Ok(Self::new(status, headers, body))
    }

    /// The HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The raw response body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consumes the response, returning the raw body.
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// The body as UTF-8 text, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserializes the body as JSON into `T`.
    ///
    /// # Errors
    ///
    /// `AirWatchError::Parse` if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// The body as a JSON value, or `None` when it is empty or not JSON.
    pub fn parsed(&self) -> Option<Value> {
        if self.body.is_empty() {
            return None;
        }
        serde_json::from_slice(&self.body).ok()
    }

    /// Converts a non-2xx response into [`AirWatchError::Api`], for callers
    /// that prefer `?` over inspecting the status.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        Err(AirWatchError::Api {
            status: self.status,
            body: self.text(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &'static str) -> ApiResponse {
        ApiResponse::new(
            StatusCode::from_u16(status).unwrap(),
            HeaderMap::new(),
            Bytes::from_static(body.as_bytes()),
        )
    }

    #[test]
    fn json_body_is_parsed() {
        let resp = response(200, r#"{"Id":42,"Udid":"abc"}"#);
        assert!(resp.is_success());
        let value = resp.parsed().unwrap();
        assert_eq!(value["Id"], 42);
        assert_eq!(value["Udid"], "abc");
    }

    #[test]
    fn json_deserializes_into_typed_struct() {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct Device {
            id: i64,
            udid: String,
        }
        let device: Device = response(200, r#"{"Id":7,"Udid":"u-7"}"#).json().unwrap();
        assert_eq!(device.id, 7);
        assert_eq!(device.udid, "u-7");
    }

    #[test]
    fn empty_or_non_json_body_parses_to_none() {
        assert!(response(204, "").parsed().is_none());
        assert!(response(400, "Bad Request").parsed().is_none());
    }

    #[test]
    fn json_on_invalid_body_is_a_parse_error() {
        let err = response(200, "not json").json::<Value>().unwrap_err();
        assert!(matches!(err, AirWatchError::Parse(_)));
    }

    #[test]
    fn error_for_status_passes_success_through() {
        let resp = response(200, "{}").error_for_status().unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn error_for_status_converts_failures() {
        let err = response(404, r#"{"message":"Device not found"}"#)
            .error_for_status()
            .unwrap_err();
        match err {
            AirWatchError::Api { status, body } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert!(body.contains("Device not found"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
