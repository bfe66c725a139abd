//! Application management (MAM) endpoints.
//!
//! | Method | API Path |
//! |--------|----------|
//! | [`AirWatchClient::apps_search`] | GET `mam/apps/search` |
//! | [`AirWatchClient::app_devices`] | GET `mam/apps/internal/{appId}/devices` |
//! | [`AirWatchClient::install_internal_app`] | POST `mam/apps/internal/{appId}/install` |
//! | [`AirWatchClient::begin_install`] | POST `mam/apps/internal/begininstall` |
//! | [`AirWatchClient::add_smart_group_assignment_to_app`] | POST `mam/apps/internal/{appId}/smartgroups/{groupId}` |
//! | [`AirWatchClient::remove_smart_group_assignment_from_app`] | DELETE `mam/apps/internal/{appId}/smartgroups/{groupId}` |
//!
//! Registering a new internal app is a two-step flow: upload the package
//! with [`upload_blob`](crate::client::AirWatchClient::upload_blob), then
//! pass the returned blob id to [`AirWatchClient::begin_install`].

use serde::Serialize;

use crate::client::AirWatchClient;
use crate::error::Result;
use crate::query::QueryParams;
use crate::response::ApiResponse;

// ── Request types ──────────────────────────────────────────────────────

/// Optional filters for [`AirWatchClient::apps_search`]. Unset fields are
/// left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSearchOptions {
    /// The app's bundle identifier, e.g. `"com.example.field"`.
    pub bundle_id: Option<String>,
    /// `"app"` or `"book"`.
    pub app_type: Option<String>,
    /// `"internal"`, `"public"` or `"purchased"`.
    pub application_type: Option<String>,
}

impl AppSearchOptions {
    /// Renders the set filters as `bundleid`, `type` and `applicationtype`.
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("bundleid", self.bundle_id.as_deref())
            .push_opt("type", self.app_type.as_deref())
            .push_opt("applicationtype", self.application_type.as_deref());
        query
    }
}

/// A device model an internal app can be deployed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceModel {
    /// AirWatch model id.
    pub model_id: u32,
    /// Display name, e.g. `"iPad"`.
    pub model_name: &'static str,
}

/// Apple device models supported by every internal app registered through
/// [`AirWatchClient::begin_install`].
pub const APPLE_DEVICE_MODELS: [DeviceModel; 3] = [
    DeviceModel {
        model_id: 1,
        model_name: "iPhone",
    },
    DeviceModel {
        model_id: 2,
        model_name: "iPad",
    },
    DeviceModel {
        model_id: 3,
        model_name: "iPod Touch",
    },
];

/// Parameters for registering an uploaded blob as an internal app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeginInstall {
    /// Blob id returned by the upload step.
    pub blob_id: i64,
    /// Name shown in the console and on devices.
    pub application_name: String,
    /// Organization group the app is created in.
    pub organization_group_id: i64,
    /// Free-text description. Omitted from the body when unset.
    pub description: Option<String>,
    /// Version string. Omitted from the body when unset, in which case
    /// AirWatch reads it from the package.
    pub app_version: Option<String>,
    /// `"Auto"` or `"OnDemand"`.
    pub push_mode: String,
}

impl BeginInstall {
    /// Registration with no description or version and `push_mode`
    /// `"Auto"`.
    pub fn new(
        blob_id: i64,
        application_name: impl Into<String>,
        organization_group_id: i64,
    ) -> Self {
        BeginInstall {
            blob_id,
            application_name: application_name.into(),
            organization_group_id,
            description: None,
            app_version: None,
            push_mode: "Auto".to_string(),
        }
    }

    fn body(&self) -> BeginInstallBody<'_> {
        BeginInstallBody {
            blob_id: self.blob_id,
            device_type: "Apple",
            application_name: &self.application_name,
            app_version: self.app_version.as_deref(),
            description: self.description.as_deref(),
            push_mode: &self.push_mode,
            location_group_id: self.organization_group_id,
            supported_models: SupportedModels {
                model: &APPLE_DEVICE_MODELS,
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct BeginInstallBody<'a> {
    blob_id: i64,
    device_type: &'static str,
    application_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    push_mode: &'a str,
    location_group_id: i64,
    supported_models: SupportedModels,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SupportedModels {
    model: &'static [DeviceModel],
}

#[derive(Debug, Serialize)]
pub(crate) struct DeviceIdBody {
    pub(crate) deviceid: i64,
}

// ── Endpoint methods ───────────────────────────────────────────────────

impl AirWatchClient {
    /// Searches applications, optionally filtered by bundle id and type.
    ///
    /// # Errors
    ///
    /// - `AirWatchError::Network`: transport-level failure. Non-2xx statuses
    ///   are not errors; they come back in the [`ApiResponse`].
    pub async fn apps_search(&self, options: &AppSearchOptions) -> Result<ApiResponse> {
        self.get("mam/apps/search", Some(&options.to_query())).await
    }

    /// Lists the ids of devices the internal app is installed on.
    ///
    /// # Errors
    ///
    /// - `AirWatchError::Network`: transport-level failure. Non-2xx statuses
    ///   are not errors; they come back in the [`ApiResponse`].
    pub async fn app_devices(&self, app_id: i64) -> Result<ApiResponse> {
        self.get(&format!("mam/apps/internal/{app_id}/devices"), None).await
    }

    /// Pushes an install of the internal app to one device.
    ///
    /// # Errors
    ///
    /// - `AirWatchError::Network`: transport-level failure. A 404 for an
    ///   unknown app or device is returned as a normal [`ApiResponse`].
    pub async fn install_internal_app(&self, app_id: i64, device_id: i64) -> Result<ApiResponse> {
        let body = DeviceIdBody { deviceid: device_id };
        self.post(&format!("mam/apps/internal/{app_id}/install"), Some(&body))
            .await
    }

    /// Registers an uploaded blob as an internal Apple app.
    ///
    /// # Errors
    ///
    /// - `AirWatchError::Parse`: the request body could not be serialized.
    /// - `AirWatchError::Network`: transport-level failure. Non-2xx statuses
    ///   are not errors; they come back in the [`ApiResponse`].
    pub async fn begin_install(&self, request: &BeginInstall) -> Result<ApiResponse> {
        self.post("mam/apps/internal/begininstall", Some(&request.body()))
            .await
    }

    /// Assigns the internal app to a smart group.
    ///
    /// Sent as a POST with no body.
    ///
    /// # Errors
    ///
    /// - `AirWatchError::Network`: transport-level failure.
    pub async fn add_smart_group_assignment_to_app(
        &self,
        app_id: i64,
        smart_group_id: i64,
    ) -> Result<ApiResponse> {
        let resource = format!("mam/apps/internal/{app_id}/smartgroups/{smart_group_id}");
        self.post::<()>(&resource, None).await
    }

    /// Removes the app's assignment to a smart group.
    ///
    /// # Errors
    ///
    /// - `AirWatchError::Network`: transport-level failure. Removing an
    ///   assignment that does not exist yields a non-2xx [`ApiResponse`],
    ///   not an error.
    pub async fn remove_smart_group_assignment_from_app(
        &self,
        app_id: i64,
        smart_group_id: i64,
    ) -> Result<ApiResponse> {
        self.delete(&format!("mam/apps/internal/{app_id}/smartgroups/{smart_group_id}"))
            .await
    }
}
