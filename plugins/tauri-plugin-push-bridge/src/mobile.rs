use std::sync::Arc;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tauri::{
    ipc::{Channel, InvokeResponseBody},
    plugin::{PluginApi, PluginHandle},
    AppHandle, Emitter, Runtime,
};

use crate::authorization::{AuthorizationApi, AuthorizationCallback};
use crate::bridge::{self, NotificationDispatcher, PushBridge, PushDelegate, RuntimeRegistrant};
use crate::interceptor::PresentationResponder;
use crate::models::*;
use crate::token::MessagingIdentityStore;

#[cfg(target_os = "ios")]
tauri::ios_plugin_binding!(init_plugin_push_bridge);

pub fn init<R: Runtime, C: DeserializeOwned>(
    _app: &AppHandle<R>,
    api: PluginApi<R, C>,
) -> crate::Result<PushBridgeHost<R>> {
    #[cfg(target_os = "android")]
    let handle = api.register_android_plugin("app.tauri.pushbridge", "PushBridgePlugin")?;
    #[cfg(target_os = "ios")]
    let handle = api.register_ios_plugin(init_plugin_push_bridge)?;

    let capabilities: OsCapabilities = handle.run_mobile_plugin("capabilities", ())?;
    Ok(PushBridgeHost {
        handle,
        capabilities,
    })
}

/// Access to the push bridge on iOS and Android.
pub struct PushBridgeHost<R: Runtime> {
    handle: PluginHandle<R>,
    capabilities: OsCapabilities,
}

impl<R: Runtime> PushBridgeHost<R> {
    /// Install the notification delegate and run the startup
    /// consent/registration sequence. Called once from the plugin `setup`
    /// hook, before the webview runtime comes up.
    pub fn start_bridge(&self, app: &AppHandle<R>) -> crate::Result<()> {
        let dispatcher: Arc<dyn NotificationDispatcher> = Arc::new(MobileDispatcher {
            handle: self.handle.clone(),
            modern_authorization: self.capabilities.modern_authorization,
        });
        let store: Arc<dyn MessagingIdentityStore> = Arc::new(MobileIdentityStore {
            handle: self.handle.clone(),
        });
        let runtime = WebviewRuntime { app: app.clone() };
        // The requester's once-guard has done its job by the time bootstrap
        // returns; later JS-driven re-requests go straight to the native
        // prompt API, which the OS deduplicates.
        let _ = bridge::bootstrap(dispatcher, store, &runtime);
        Ok(())
    }

    pub fn request_permission(&self) -> crate::Result<PermissionState> {
        self.handle
            .run_mobile_plugin(
                "requestPermission",
                AuthorizationRequest {
                    options: AuthorizationOptions::all(),
                },
            )
            .map_err(Into::into)
    }

    pub fn permission_state(&self) -> crate::Result<PermissionState> {
        self.handle
            .run_mobile_plugin("checkPermission", ())
            .map_err(Into::into)
    }
}

/// What the native layer reports about this OS at startup.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OsCapabilities {
    modern_authorization: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthorizationRequest {
    options: AuthorizationOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WatchRequest {
    channel: Channel,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompletePresentationRequest {
    id: u32,
    options: PresentationOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SetTokenRequest {
    token: DeviceToken,
}

struct MobileDispatcher<R: Runtime> {
    handle: PluginHandle<R>,
    modern_authorization: bool,
}

impl<R: Runtime> NotificationDispatcher for MobileDispatcher<R> {
    fn install_delegate(&self, delegate: Arc<dyn PushDelegate>) {
        let events = self.handle.clone();
        let channel = Channel::new(move |event| {
            let event = match event {
                InvokeResponseBody::Json(payload) => {
                    match serde_json::from_str::<PushEvent>(&payload) {
                        Ok(event) => event,
                        Err(error) => {
                            log::warn!("dropping malformed push event: {error}");
                            return Ok(());
                        }
                    }
                }
                _ => return Ok(()),
            };
            dispatch(&events, &delegate, event);
            Ok(())
        });
        // Synchronous on purpose: the native side must have the delegate in
        // place before any registration request goes out.
        if let Err(error) = self
            .handle
            .run_mobile_plugin::<()>("watchPushEvents", WatchRequest { channel })
        {
            log::warn!("failed to install push delegate: {error}");
        }
    }

    fn register_for_remote_notifications(&self) {
        if let Err(error) = self
            .handle
            .run_mobile_plugin::<()>("registerForRemoteNotifications", ())
        {
            log::warn!("remote notification registration request failed: {error}");
        }
    }

    fn authorization_api(&self) -> Arc<dyn AuthorizationApi> {
        if self.modern_authorization {
            Arc::new(ModernAuthorization {
                handle: self.handle.clone(),
            })
        } else {
            Arc::new(LegacyAuthorization {
                handle: self.handle.clone(),
            })
        }
    }
}

fn dispatch<R: Runtime>(
    handle: &PluginHandle<R>,
    delegate: &Arc<dyn PushDelegate>,
    event: PushEvent,
) {
    match event {
        PushEvent::TokenReceived { token } => delegate.device_token_received(token),
        PushEvent::RegistrationFailed { error } => delegate.registration_failed(error),
        PushEvent::WillPresent { id, notification } => {
            let handle = handle.clone();
            let responder = PresentationResponder::new(move |options| {
                if let Err(error) = handle.run_mobile_plugin::<()>(
                    "completePresentation",
                    CompletePresentationRequest { id, options },
                ) {
                    log::warn!("failed to deliver presentation reply: {error}");
                }
            });
            delegate.notification_will_present(notification, responder);
        }
    }
}

/// Consent request over the current-generation prompt API.
struct ModernAuthorization<R: Runtime> {
    handle: PluginHandle<R>,
}

impl<R: Runtime> AuthorizationApi for ModernAuthorization<R> {
    fn request_authorization(
        &self,
        options: AuthorizationOptions,
        on_resolved: AuthorizationCallback,
    ) {
        let handle = self.handle.clone();
        // The native call blocks until the user settles the prompt.
        tauri::async_runtime::spawn_blocking(move || {
            let outcome = handle
                .run_mobile_plugin::<PermissionState>(
                    "requestPermission",
                    AuthorizationRequest { options },
                )
                .map(|state| state == PermissionState::Granted)
                .map_err(|error| error.to_string());
            on_resolved(outcome);
        });
    }
}

/// Consent request over the settings-registration API older OS versions
/// expose. The native side resolves it once the settings are registered.
struct LegacyAuthorization<R: Runtime> {
    handle: PluginHandle<R>,
}

impl<R: Runtime> AuthorizationApi for LegacyAuthorization<R> {
    fn request_authorization(
        &self,
        options: AuthorizationOptions,
        on_resolved: AuthorizationCallback,
    ) {
        let handle = self.handle.clone();
        tauri::async_runtime::spawn_blocking(move || {
            let outcome = handle
                .run_mobile_plugin::<PermissionState>(
                    "registerNotificationSettings",
                    AuthorizationRequest { options },
                )
                .map(|state| state == PermissionState::Granted)
                .map_err(|error| error.to_string());
            on_resolved(outcome);
        });
    }
}

/// The messaging SDK side of the native layer.
struct MobileIdentityStore<R: Runtime> {
    handle: PluginHandle<R>,
}

impl<R: Runtime> MessagingIdentityStore for MobileIdentityStore<R> {
    fn set_token(&self, token: &[u8]) {
        if let Err(error) = self.handle.run_mobile_plugin::<()>(
            "setMessagingToken",
            SetTokenRequest {
                token: token.to_vec(),
            },
        ) {
            log::warn!("failed to forward device token: {error}");
        }
    }
}

/// Runtime handoff: announces the installed bridge to the webview runtime,
/// which attaches its own notification listeners once it sees the event.
struct WebviewRuntime<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> RuntimeRegistrant for WebviewRuntime<R> {
    fn register(&self, _host: &PushBridge) {
        if let Err(error) = self.app.emit("push-bridge://ready", ()) {
            log::warn!("failed to announce push bridge: {error}");
        }
    }
}
