use serde::de::DeserializeOwned;
use tauri::{plugin::PluginApi, AppHandle, Runtime};

use crate::models::*;
use crate::Error;

pub fn init<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    _api: PluginApi<R, C>,
) -> crate::Result<PushBridgeHost<R>> {
    Ok(PushBridgeHost(app.clone()))
}

/// Desktop no-op implementation (kept for cross-platform compilation).
pub struct PushBridgeHost<R: Runtime>(AppHandle<R>);

impl<R: Runtime> PushBridgeHost<R> {
    pub fn request_permission(&self) -> crate::Result<PermissionState> {
        Err(Error::UnsupportedPlatform)
    }

    pub fn permission_state(&self) -> crate::Result<PermissionState> {
        Err(Error::UnsupportedPlatform)
    }
}
