//! Device lookup endpoints.
//!
//! | Method | API Path |
//! |--------|----------|
//! | [`AirWatchClient::device_details`] | GET `mdm/devices/{id}` |
//! | [`AirWatchClient::device_profile_details`] | GET `mdm/devices/profiles` |
//! | [`AirWatchClient::search_devices`] | GET `mdm/devices` |
//!
//! Devices can be addressed by their numeric AirWatch id or by hardware
//! serial number; [`DeviceSelector`] captures that choice.

use crate::client::AirWatchClient;
use crate::error::Result;
use crate::query::QueryParams;
use crate::response::ApiResponse;

/// How a device is identified in a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceSelector {
    /// The numeric AirWatch device id.
    DeviceId(i64),
    /// The hardware serial number.
    SerialNumber(String),
}

impl DeviceSelector {
    /// Builds a selector from two optional identifiers. The device id takes
    /// precedence when both are given; `None` when neither is.
    pub fn from_parts(device_id: Option<i64>, serial_number: Option<String>) -> Option<Self> {
        match (device_id, serial_number) {
            (Some(id), _) => Some(DeviceSelector::DeviceId(id)),
            (None, Some(serial)) => Some(DeviceSelector::SerialNumber(serial)),
            (None, None) => None,
        }
    }

    /// The `searchby` value AirWatch expects for this selector.
    pub fn search_by(&self) -> &'static str {
        match self {
            DeviceSelector::DeviceId(_) => "deviceid",
            DeviceSelector::SerialNumber(_) => "serialnumber",
        }
    }

    /// The `id` value paired with [`search_by`](Self::search_by).
    pub fn id(&self) -> String {
        match self {
            DeviceSelector::DeviceId(id) => id.to_string(),
            DeviceSelector::SerialNumber(serial) => serial.clone(),
        }
    }

    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push("searchby", self.search_by()).push("id", self.id());
        query
    }
}

impl From<i64> for DeviceSelector {
    fn from(id: i64) -> Self {
        DeviceSelector::DeviceId(id)
    }
}

fn serial_number_query(serial_number: Option<&str>) -> QueryParams {
    let mut query = QueryParams::new();
    if let Some(serial) = serial_number {
        query.push("searchby", "Serialnumber").push("id", serial);
    }
    query
}

impl AirWatchClient {
    /// Retrieves one device by its AirWatch id.
    ///
    /// # Errors
    ///
    /// - `AirWatchError::Network`: transport-level failure. Non-2xx statuses
    ///   are not errors; they come back in the [`ApiResponse`].
    pub async fn device_details(&self, device_id: i64) -> Result<ApiResponse> {
        self.get(&format!("mdm/devices/{device_id}"), None).await
    }

    /// Lists the profiles installed on a device.
    ///
    /// # Errors
    ///
    /// - `AirWatchError::Network`: transport-level failure. Non-2xx statuses
    ///   are not errors; they come back in the [`ApiResponse`].
    pub async fn device_profile_details(&self, selector: &DeviceSelector) -> Result<ApiResponse> {
        self.get("mdm/devices/profiles", Some(&selector.to_query()))
            .await
    }

    /// Looks up devices, optionally narrowed to one serial number.
    ///
    /// # Errors
    ///
    /// - `AirWatchError::Network`: transport-level failure. Non-2xx statuses
    ///   are not errors; they come back in the [`ApiResponse`].
    pub async fn search_devices(&self, serial_number: Option<&str>) -> Result<ApiResponse> {
        self.get("mdm/devices", Some(&serial_number_query(serial_number)))
            .await
    }
}
