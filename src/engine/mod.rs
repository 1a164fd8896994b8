//! The chat core: classifier, escalation resolver and turn orchestrator

pub mod chat;
pub mod classifier;
pub mod escalation;

pub use chat::{ChatEngine, FollowUp, TurnInput, TurnOutcome};

/// Side-channel for the toast/alert notifications the escalation confirm
/// actions emit. Fire-and-forget: implementations must not block.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, kind: NotificationKind);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

/// Default notifier: surfaces notifications in the server log.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Error => tracing::warn!(notification = message, "notification"),
            _ => tracing::info!(notification = message, "notification"),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::{NotificationKind, Notifier};
    use std::sync::Mutex;

    /// Records notifications so tests can assert on side effects.
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub sent: Mutex<Vec<(String, NotificationKind)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, kind: NotificationKind) {
            self.sent.lock().unwrap().push((message.to_string(), kind));
        }
    }
}
