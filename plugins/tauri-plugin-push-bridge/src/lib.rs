use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

pub use models::*;

#[cfg(desktop)]
mod desktop;
#[cfg(mobile)]
mod mobile;

mod authorization;
mod bridge;
mod commands;
mod error;
mod interceptor;
mod models;
mod token;

pub use authorization::{AuthorizationApi, AuthorizationCallback, PermissionRequester};
pub use bridge::{bootstrap, NotificationDispatcher, PushBridge, PushDelegate, RuntimeRegistrant};
pub use error::{Error, Result};
pub use interceptor::{NotificationInterceptor, PresentationResponder};
pub use token::{MessagingIdentityStore, TokenBridge};

#[cfg(desktop)]
use desktop::PushBridgeHost;
#[cfg(mobile)]
use mobile::PushBridgeHost;

/// Extensions to access the push bridge from app handles.
pub trait PushBridgeExt<R: Runtime> {
    fn push_bridge(&self) -> &PushBridgeHost<R>;
}

impl<R: Runtime, T: Manager<R>> PushBridgeExt<R> for T {
    fn push_bridge(&self) -> &PushBridgeHost<R> {
        self.state::<PushBridgeHost<R>>().inner()
    }
}

/// Initializes the push bridge plugin.
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("push-bridge")
        .invoke_handler(tauri::generate_handler![
            commands::request_permission,
            commands::permission_state
        ])
        .setup(|app, api| {
            #[cfg(mobile)]
            let push_bridge = {
                let host = mobile::init(app, api)?;
                host.start_bridge(app)?;
                host
            };
            #[cfg(desktop)]
            let push_bridge = desktop::init(app, api)?;
            app.manage(push_bridge);
            Ok(())
        })
        .build()
}
