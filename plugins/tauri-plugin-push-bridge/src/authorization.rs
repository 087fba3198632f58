use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::bridge::NotificationDispatcher;
use crate::models::AuthorizationOptions;

/// Resolved once the OS has settled the consent request, with the granted
/// flag or an OS-reported error message.
pub type AuthorizationCallback = Box<dyn FnOnce(Result<bool, String>) + Send>;

/// One generation of the OS consent API.
///
/// The OS exposes two of these (the prompt API and the older
/// settings-registration API); the host picks one at startup and both resolve
/// through the same callback contract.
pub trait AuthorizationApi: Send + Sync {
    fn request_authorization(
        &self,
        options: AuthorizationOptions,
        on_resolved: AuthorizationCallback,
    );
}

/// Startup consent request. Fire-and-forget: the outcome is logged and never
/// gates anything downstream.
pub struct PermissionRequester {
    dispatcher: Arc<dyn NotificationDispatcher>,
    requested: AtomicBool,
}

impl PermissionRequester {
    pub fn new(dispatcher: Arc<dyn NotificationDispatcher>) -> Self {
        Self {
            dispatcher,
            requested: AtomicBool::new(false),
        }
    }

    /// Ask for consent, then request remote-notification registration.
    /// Repeat calls are no-ops.
    pub fn request(&self, options: AuthorizationOptions) {
        if self.requested.swap(true, Ordering::SeqCst) {
            return;
        }
        self.dispatcher.authorization_api().request_authorization(
            options,
            Box::new(|outcome| match outcome {
                Ok(granted) => log::debug!("notification consent resolved: granted={granted}"),
                Err(error) => log::debug!("notification consent request failed: {error}"),
            }),
        );
        // Token issuance works under constrained delivery even when alerts
        // were denied, so registration is not conditional on the outcome.
        self.dispatcher.register_for_remote_notifications();
    }
}
