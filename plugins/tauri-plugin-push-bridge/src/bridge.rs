use std::sync::Arc;

use crate::authorization::{AuthorizationApi, PermissionRequester};
use crate::interceptor::{NotificationInterceptor, PresentationResponder};
use crate::models::{AuthorizationOptions, DeviceToken, PushNotification};
use crate::token::{MessagingIdentityStore, TokenBridge};

/// The slice of the OS notification subsystem the bridge drives.
pub trait NotificationDispatcher: Send + Sync {
    /// Install `delegate` as the receiver for token and presentation
    /// callbacks. Must happen before any registration request.
    fn install_delegate(&self, delegate: Arc<dyn PushDelegate>);

    /// Begin token issuance. Returns promptly; the token or a failure arrives
    /// later on the installed delegate.
    fn register_for_remote_notifications(&self);

    /// The consent API generation this OS exposes.
    fn authorization_api(&self) -> Arc<dyn AuthorizationApi>;
}

/// Single receiver for the OS notification callbacks the bridge handles,
/// registered once with the dispatcher.
pub trait PushDelegate: Send + Sync {
    fn device_token_received(&self, token: DeviceToken);
    fn registration_failed(&self, error: String);
    fn notification_will_present(
        &self,
        notification: PushNotification,
        responder: PresentationResponder,
    );
}

/// Hook for the UI runtime to attach its own notification collaborators.
/// Invoked once, after the delegate is installed.
pub trait RuntimeRegistrant {
    fn register(&self, host: &PushBridge);
}

/// The combined token/presentation receiver.
pub struct PushBridge {
    tokens: TokenBridge,
    interceptor: NotificationInterceptor,
}

impl PushBridge {
    pub fn new(store: Arc<dyn MessagingIdentityStore>) -> Self {
        Self {
            tokens: TokenBridge::new(store),
            interceptor: NotificationInterceptor,
        }
    }
}

impl PushDelegate for PushBridge {
    fn device_token_received(&self, token: DeviceToken) {
        self.tokens.token_received(&token);
    }

    fn registration_failed(&self, error: String) {
        self.tokens.registration_failed(&error);
    }

    fn notification_will_present(
        &self,
        notification: PushNotification,
        responder: PresentationResponder,
    ) {
        self.interceptor.will_present(&notification, responder);
    }
}

/// Startup sequence. The order is load-bearing: the delegate must be in place
/// before any registration is requested, and the runtime handoff comes last
/// because the runtime may hang further notification collaborators off the
/// installed delegate.
pub fn bootstrap(
    dispatcher: Arc<dyn NotificationDispatcher>,
    store: Arc<dyn MessagingIdentityStore>,
    runtime: &dyn RuntimeRegistrant,
) -> PermissionRequester {
    let bridge = Arc::new(PushBridge::new(store));
    dispatcher.install_delegate(bridge.clone());
    let requester = PermissionRequester::new(dispatcher);
    requester.request(AuthorizationOptions::all());
    runtime.register(&bridge);
    requester
}
