use serde::{Deserialize, Serialize};

/// Capability set requested from the OS consent prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationOptions {
    pub alert: bool,
    pub badge: bool,
    pub sound: bool,
}

impl AuthorizationOptions {
    pub const fn all() -> Self {
        Self {
            alert: true,
            badge: true,
            sound: true,
        }
    }
}

impl Default for AuthorizationOptions {
    fn default() -> Self {
        Self::all()
    }
}

/// How a notification arriving in the foreground should be rendered.
///
/// Same capability axes as [`AuthorizationOptions`], but a consent set and a
/// rendering decision are distinct things on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationOptions {
    pub alert: bool,
    pub badge: bool,
    pub sound: bool,
}

impl PresentationOptions {
    pub const fn all() -> Self {
        Self {
            alert: true,
            badge: true,
            sound: true,
        }
    }

    pub const fn suppressed() -> Self {
        Self {
            alert: false,
            badge: false,
            sound: false,
        }
    }
}

/// Current OS consent state for this install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionState {
    Prompt,
    Granted,
    Denied,
}

/// OS-issued opaque bytes identifying this install for push delivery.
pub type DeviceToken = Vec<u8>;

/// Payload of a notification delivered while the app is in the foreground.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushNotification {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Inbound OS callback as it crosses the native event channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum PushEvent {
    #[serde(rename_all = "camelCase")]
    TokenReceived { token: DeviceToken },
    #[serde(rename_all = "camelCase")]
    RegistrationFailed { error: String },
    #[serde(rename_all = "camelCase")]
    WillPresent {
        id: u32,
        notification: PushNotification,
    },
}
