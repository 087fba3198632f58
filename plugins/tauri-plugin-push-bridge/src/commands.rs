use tauri::{command, AppHandle, Runtime};

use crate::models::*;
use crate::{PushBridgeExt, Result};

#[command]
pub(crate) fn request_permission<R: Runtime>(app: AppHandle<R>) -> Result<PermissionState> {
    app.push_bridge().request_permission()
}

#[command]
pub(crate) fn permission_state<R: Runtime>(app: AppHandle<R>) -> Result<PermissionState> {
    app.push_bridge().permission_state()
}
