use std::sync::Arc;

use crate::models::DeviceToken;

/// External identity store mapping device tokens to deliverable messaging
/// targets. Forwarding failures are its concern; the bridge never retries.
pub trait MessagingIdentityStore: Send + Sync {
    fn set_token(&self, token: &[u8]);
}

/// Forwards OS-issued device tokens to the messaging identity store.
pub struct TokenBridge {
    store: Arc<dyn MessagingIdentityStore>,
}

impl TokenBridge {
    pub fn new(store: Arc<dyn MessagingIdentityStore>) -> Self {
        Self { store }
    }

    /// Called for every token issuance, first delivery and rotations alike.
    /// The bytes are forwarded verbatim, once per call, in OS order.
    pub fn token_received(&self, token: &DeviceToken) {
        log::debug!("device token received ({} bytes)", token.len());
        self.store.set_token(token);
    }

    /// Token issuance failed. Terminal here; the OS owns any retry.
    pub fn registration_failed(&self, error: &str) {
        log::warn!("remote notification registration failed: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStore {
        tokens: Mutex<Vec<Vec<u8>>>,
    }

    impl MessagingIdentityStore for RecordingStore {
        fn set_token(&self, token: &[u8]) {
            self.tokens.lock().unwrap().push(token.to_vec());
        }
    }

    #[test]
    fn forwards_token_verbatim_exactly_once() {
        let store = Arc::new(RecordingStore::default());
        let bridge = TokenBridge::new(store.clone());

        bridge.token_received(&vec![0xA1, 0xB2, 0xC3, 0xD4]);

        let tokens = store.tokens.lock().unwrap();
        assert_eq!(*tokens, vec![vec![0xA1, 0xB2, 0xC3, 0xD4]]);
    }

    #[test]
    fn rotation_preserves_delivery_order() {
        let store = Arc::new(RecordingStore::default());
        let bridge = TokenBridge::new(store.clone());

        bridge.token_received(&vec![1, 2]);
        bridge.token_received(&vec![3, 4]);

        let tokens = store.tokens.lock().unwrap();
        assert_eq!(*tokens, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn registration_failure_never_touches_the_store() {
        let store = Arc::new(RecordingStore::default());
        let bridge = TokenBridge::new(store.clone());

        bridge.registration_failed("simulated issuance failure");

        assert!(store.tokens.lock().unwrap().is_empty());
    }
}
