//! Smart group endpoints.
//!
//! Smart groups are dynamic device groupings used to target app and profile
//! assignments. Besides the read endpoints, [`AirWatchClient::smart_group_update`]
//! adds devices to a group's explicit membership list.

use serde::Serialize;

use crate::client::AirWatchClient;
use crate::error::{AirWatchError, Result};
use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct DeviceAddition {
    id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SmartGroupUpdateBody {
    device_additions: Vec<DeviceAddition>,
}

impl SmartGroupUpdateBody {
    fn new(device_ids: &[i64]) -> Result<Self> {
        if device_ids.is_empty() {
            return Err(AirWatchError::Validation(
                "smart group update requires at least one device addition".to_string(),
            ));
        }
        Ok(SmartGroupUpdateBody {
            device_additions: device_ids.iter().map(|&id| DeviceAddition { id }).collect(),
        })
    }
}

impl AirWatchClient {
    /// Lists the smart groups visible to the account.
    ///
    /// # Errors
    ///
    /// - `AirWatchError::Network`: transport-level failure. Non-2xx statuses
    ///   are not errors; they come back in the [`ApiResponse`].
    pub async fn smart_groups_search(&self) -> Result<ApiResponse> {
        self.get("mdm/smartgroups/search", None).await
    }

    /// Lists the apps assigned to a smart group.
    ///
    /// # Errors
    ///
    /// - `AirWatchError::Network`: transport-level failure. Non-2xx statuses
    ///   are not errors; they come back in the [`ApiResponse`].
    pub async fn smart_group_apps(&self, smart_group_id: i64) -> Result<ApiResponse> {
        self.get(&format!("mdm/smartgroups/{smart_group_id}/apps"), None)
            .await
    }

    /// Returns one smart group's definition and membership.
    ///
    /// # Errors
    ///
    /// - `AirWatchError::Network`: transport-level failure. Non-2xx statuses
    ///   are not errors; they come back in the [`ApiResponse`].
    pub async fn smart_group_details(&self, smart_group_id: i64) -> Result<ApiResponse> {
        self.get(&format!("mdm/smartgroups/{smart_group_id}"), None)
            .await
    }

    /// Adds devices to a smart group.
    ///
    /// # Errors
    ///
    /// - `AirWatchError::Validation`: `device_ids` is empty. Nothing is sent
    ///   in that case.
    /// - `AirWatchError::Network`: transport-level failure.
    pub async fn smart_group_update(
        &self,
        smart_group_id: i64,
        device_ids: &[i64],
    ) -> Result<ApiResponse> {
        let body = SmartGroupUpdateBody::new(device_ids)?;
        self.put(&format!("mdm/smartgroups/{smart_group_id}"), &body)
            .await
    }
}
