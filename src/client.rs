//! HTTP client for the AirWatch REST API.
//!
//! `AirWatchClient` wraps a `reqwest::Client` and an immutable
//! [`ClientConfig`], and exposes four low-level verbs (`get`, `post`, `put`,
//! `delete`) that every endpoint method delegates to. The endpoint methods
//! themselves live next to their domain types in [`apps`](crate::apps),
//! [`blobs`](crate::blobs), [`devices`](crate::devices),
//! [`profiles`](crate::profiles) and [`smart_groups`](crate::smart_groups).
//!
//! Request shape:
//! - URL: `https://{host}/api/{resource}` plus `{?query*}` expansion.
//! - Headers on every call: `aw-tenant-code`, `Accept: application/json`
//!   and `Authorization`. Bodied calls add `Content-Type: application/json`.
//!
//! Responses are returned as [`ApiResponse`] regardless of status. The
//! client never retries and applies no timeout unless the config has one.

use reqwest::header::{
    ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, EXPECT, HeaderMap, HeaderName, HeaderValue,
};
use reqwest::{Body, Client, Method, StatusCode};
use serde::Serialize;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{AirWatchError, Result};
use crate::query::QueryParams;
use crate::response::ApiResponse;

/// Header carrying the tenant API key.
pub const TENANT_CODE_HEADER: &str = "aw-tenant-code";

const APPLICATION_JSON: &str = "application/json";
const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";

fn build_api_client(config: &ClientConfig) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| AirWatchError::Configuration(format!("invalid {name} header value: {e}")))
}

/// Builds the headers attached to every request.
fn standard_headers(config: &ClientConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(TENANT_CODE_HEADER),
        header_value(TENANT_CODE_HEADER, config.tenant_api_key())?,
    );
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    let mut authorization = header_value("Authorization", config.authorization())?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);
    Ok(headers)
}

/// Client for one AirWatch tenant.
///
/// Holds only immutable configuration, so a single instance can be reused
/// for any number of calls and shared between tasks.
pub struct AirWatchClient {
    client: Client,
    base_url: Url,
    headers: HeaderMap,
}

impl AirWatchClient {
    /// Creates a client targeting `https://{host}/api/`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = format!("https://{}/api/", config.host());
        Self::with_base_url(config, &base_url)
    }

    /// Creates a client against a custom base URL, e.g. a local mock server
    /// or a reverse proxy. Resource paths are resolved relative to it, so it
    /// should end with `/api/`.
    pub fn with_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(AirWatchClient {
            client: build_api_client(&config)?,
            headers: standard_headers(&config)?,
            base_url,
        })
    }

    /// The URL every resource path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The headers attached to every request.
    pub fn request_headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Resolves `resource` against the base URL and expands `query` onto it.
    pub fn build_url(&self, resource: &str, query: Option<&QueryParams>) -> Result<Url> {
        let mut url = self.base_url.join(resource.trim_start_matches('/'))?;
        if let Some(query) = query {
            query.expand_into(&mut url);
        }
        Ok(url)
    }

    /// Core HTTP method: attaches the standard headers, serializes `body` as
    /// JSON when present, and buffers the response. All verbs delegate here.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        resource: &str,
        query: Option<&QueryParams>,
        body: Option<&B>,
    ) -> Result<ApiResponse> {
        let url = self.build_url(resource, query)?;
        tracing::debug!(%method, %url, "sending AirWatch request");

        let mut req = self.client.request(method, url).headers(self.headers.clone());
        if let Some(payload) = body {
            let bytes = serde_json::to_vec(payload)?;
            req = req
                .header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))
                .body(bytes);
        }

        let resp = ApiResponse::from_reqwest(req.send().await?).await?;
        tracing::debug!(status = %resp.status(), "received AirWatch response");
        Ok(resp)
    }

    /// Sends a GET request with optional query parameters.
    pub async fn get(&self, resource: &str, query: Option<&QueryParams>) -> Result<ApiResponse> {
        self.send::<()>(Method::GET, resource, query, None).await
    }

    /// Sends a POST request. `body` is serialized as JSON when present.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        resource: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse> {
        self.send(Method::POST, resource, None, body).await
    }

    /// Sends a PUT request with a JSON body.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        resource: &str,
        body: &B,
    ) -> Result<ApiResponse> {
        self.send(Method::PUT, resource, None, Some(body)).await
    }

    /// Sends a DELETE request with no body.
    pub async fn delete(&self, resource: &str) -> Result<ApiResponse> {
        self.send::<()>(Method::DELETE, resource, None, None).await
    }

    /// POSTs a raw byte stream of `content_length` bytes.
    ///
    /// Sent as `application/octet-stream` with `Expect: 100-continue` so the
    /// server can reject the upload before the body is transferred.
    pub(crate) async fn post_octet_stream(
        &self,
        resource: &str,
        query: &QueryParams,
        body: Body,
        content_length: u64,
    ) -> Result<ApiResponse> {
        let url = self.build_url(resource, Some(query))?;
        tracing::debug!(%url, content_length, "uploading binary payload");

        let resp = self
            .client
            .post(url)
            .headers(self.headers.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_OCTET_STREAM))
            .header(CONTENT_LENGTH, content_length)
            .header(EXPECT, HeaderValue::from_static("100-continue"))
            .body(body)
            .send()
            .await?;

        let resp = ApiResponse::from_reqwest(resp).await?;
        tracing::debug!(status = %resp.status(), "received upload response");
        Ok(resp)
    }

    /// GETs `resource` and pretty-prints the JSON body.
    ///
    /// Intended for interactive exploration of the API. Returns `None` and
    /// emits a warn event when the status is not 200 or the body is not JSON.
    pub async fn pretty_get(
        &self,
        resource: &str,
        query: Option<&QueryParams>,
    ) -> Result<Option<String>> {
        let resp = self.get(resource, query).await?;
        if resp.status() != StatusCode::OK {
            tracing::warn!(
                status = resp.status().as_u16(),
                body = %resp.text(),
                resource,
                "AirWatch request did not return 200"
            );
            return Ok(None);
        }

        match resp.parsed() {
            Some(value) => Ok(Some(serde_json::to_string_pretty(&value)?)),
            None => {
                tracing::warn!(resource, body = %resp.text(), "AirWatch response body is not JSON");
                Ok(None)
            }
        }
    }
}

impl std::fmt::Debug for AirWatchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirWatchClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}
