//! Binary package upload (`POST mam/blobs/uploadblob`).
//!
//! The file is streamed from disk, not buffered. The upload is the one place
//! where the client interprets status codes: a 4xx is logged and mapped to
//! `Ok(None)`, while 5xx responses surface as [`AirWatchError::Api`].

use std::io::ErrorKind;
use std::path::Path;

use reqwest::Body;
use serde_json::Value;
use tokio::fs::File;

use crate::client::AirWatchClient;
use crate::error::{AirWatchError, Result};
use crate::query::QueryParams;

/// Opens the package for streaming. A file that vanished after the metadata
/// check is still reported as [`AirWatchError::FileNotFound`].
async fn open_package(file_path: &Path) -> Result<File> {
    File::open(file_path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => AirWatchError::FileNotFound(file_path.to_path_buf()),
        _ => AirWatchError::Io(e),
    })
}

impl AirWatchClient {
    /// Uploads the file at `file_path` as a blob in the given organization
    /// group and returns the parsed JSON response (which carries the blob
    /// id used by [`begin_install`](AirWatchClient::begin_install)).
    ///
    /// # Errors
    ///
    /// - `AirWatchError::FileNotFound`: `file_path` is not an existing
    ///   regular file. Checked before any request is sent.
    /// - `AirWatchError::Api`: the server answered with a non-2xx status
    ///   outside the 4xx range.
    /// - `AirWatchError::Parse`: a 2xx body that is not JSON.
    /// - `AirWatchError::Network` / `AirWatchError::Io`: transport or
    ///   file read failure.
    ///
    /// A 4xx response is not an error: it is logged at warn level and
    /// `Ok(None)` is returned.
    pub async fn upload_blob(
        &self,
        file_path: impl AsRef<Path>,
        organization_group_id: i64,
    ) -> Result<Option<Value>> {
        let file_path = file_path.as_ref();
        let metadata = match tokio::fs::metadata(file_path).await {
            Ok(m) if m.is_file() => m,
            _ => return Err(AirWatchError::FileNotFound(file_path.to_path_buf())),
        };

        let filename = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| AirWatchError::FileNotFound(file_path.to_path_buf()))?;

        let mut query = QueryParams::new();
        query
            .push("filename", &filename)
            .push("organizationgroupid", organization_group_id);

        let file = open_package(file_path).await?;
        let resp = self
            .post_octet_stream("mam/blobs/uploadblob", &query, Body::from(file), metadata.len())
            .await?;

        let status = resp.status();
        if status.is_client_error() {
            tracing::warn!(
                error = %status,
                status = status.as_u16(),
                body = %resp.text(),
                filename = %filename,
                organization_group_id,
                "blob upload rejected"
            );
            return Ok(None);
        }

        let resp = resp.error_for_status()?;
        Ok(Some(resp.json()?))
    }
}
