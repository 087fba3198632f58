use crate::models::{PresentationOptions, PushNotification};

/// Reply handle for one foreground notification.
///
/// The OS drops the notification if no reply ever arrives, so the handle
/// replies exactly once on every path: `respond` consumes it, and dropping it
/// unreplied sends the full presentation set from `Drop`.
pub struct PresentationResponder {
    reply: Option<Box<dyn FnOnce(PresentationOptions) + Send>>,
}

impl PresentationResponder {
    pub fn new<F>(reply: F) -> Self
    where
        F: FnOnce(PresentationOptions) + Send + 'static,
    {
        Self {
            reply: Some(Box::new(reply)),
        }
    }

    pub fn respond(mut self, options: PresentationOptions) {
        if let Some(reply) = self.reply.take() {
            reply(options);
        }
    }
}

impl Drop for PresentationResponder {
    fn drop(&mut self) {
        if let Some(reply) = self.reply.take() {
            reply(PresentationOptions::all());
        }
    }
}

/// Decides how notifications arriving while the app is foregrounded are
/// rendered. Background and terminated delivery never reach this point; the
/// OS presents those itself.
#[derive(Debug, Default)]
pub struct NotificationInterceptor;

impl NotificationInterceptor {
    /// Current policy: always present with the full set.
    pub fn will_present(
        &self,
        notification: &PushNotification,
        responder: PresentationResponder,
    ) {
        log::debug!(
            "presenting foreground notification (title: {:?})",
            notification.title
        );
        responder.respond(PresentationOptions::all());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_responder() -> (PresentationResponder, Arc<Mutex<Vec<PresentationOptions>>>) {
        let replies = Arc::new(Mutex::new(Vec::new()));
        let sink = replies.clone();
        let responder = PresentationResponder::new(move |options| {
            sink.lock().unwrap().push(options);
        });
        (responder, replies)
    }

    fn sample_notification() -> PushNotification {
        PushNotification {
            title: Some("hello".into()),
            body: None,
            data: serde_json::Value::Null,
        }
    }

    #[test]
    fn replies_exactly_once_with_full_set() {
        let (responder, replies) = recording_responder();
        NotificationInterceptor.will_present(&sample_notification(), responder);

        let replies = replies.lock().unwrap();
        assert_eq!(*replies, vec![PresentationOptions::all()]);
    }

    #[test]
    fn dropping_an_unreplied_responder_still_completes() {
        let (responder, replies) = recording_responder();
        drop(responder);

        let replies = replies.lock().unwrap();
        assert_eq!(*replies, vec![PresentationOptions::all()]);
    }

    #[test]
    fn respond_consumes_the_reply() {
        let (responder, replies) = recording_responder();
        responder.respond(PresentationOptions::suppressed());

        let replies = replies.lock().unwrap();
        assert_eq!(*replies, vec![PresentationOptions::suppressed()]);
    }
}
