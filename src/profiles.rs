//! Device profile install and removal.
//!
//! - [`AirWatchClient::profiles_install`] is idempotent: installing a
//!   profile that is already on the device succeeds again.
//! - [`AirWatchClient::profiles_remove`] is NOT idempotent: once the profile
//!   is gone, a repeat call returns HTTP 400 from the server.

use serde::Serialize;

use crate::apps::DeviceIdBody;
use crate::client::AirWatchClient;
use crate::devices::DeviceSelector;
use crate::error::Result;
use crate::response::ApiResponse;

/// Install body. Exactly the selected key is present; with no selector the
/// body is `{}`.
#[derive(Debug, Default, Serialize)]
struct ProfileTargetBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    deviceid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    serialnumber: Option<&'a str>,
}

impl<'a> ProfileTargetBody<'a> {
    fn for_selector(selector: Option<&'a DeviceSelector>) -> Self {
        match selector {
            Some(DeviceSelector::DeviceId(id)) => ProfileTargetBody {
                deviceid: Some(*id),
                serialnumber: None,
            },
            Some(DeviceSelector::SerialNumber(serial)) => ProfileTargetBody {
                deviceid: None,
                serialnumber: Some(serial.as_str()),
            },
            None => ProfileTargetBody::default(),
        }
    }
}

impl AirWatchClient {
    /// Installs a profile on the device identified by `target`.
    ///
    /// Use [`DeviceSelector::from_parts`] when both a device id and a serial
    /// number may be at hand; the device id wins.
    ///
    /// # Errors
    ///
    /// - `AirWatchError::Parse`: the request body could not be serialized.
    /// - `AirWatchError::Network`: transport-level failure. Non-2xx statuses
    ///   are not errors; they come back in the [`ApiResponse`].
    pub async fn profiles_install(
        &self,
        profile_id: i64,
        target: Option<&DeviceSelector>,
    ) -> Result<ApiResponse> {
        let body = ProfileTargetBody::for_selector(target);
        self.post(&format!("mdm/profiles/{profile_id}/install"), Some(&body))
            .await
    }

    /// Removes a profile from a device. A second call for the same device
    /// yields a 400 response.
    ///
    /// # Errors
    ///
    /// - `AirWatchError::Network`: transport-level failure. The repeat-call
    ///   400 is returned as an [`ApiResponse`].
    pub async fn profiles_remove(&self, profile_id: i64, device_id: i64) -> Result<ApiResponse> {
        let body = DeviceIdBody { deviceid: device_id };
        self.post(&format!("mdm/profiles/{profile_id}/remove"), Some(&body))
            .await
    }
}
