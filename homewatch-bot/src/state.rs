//! Change tracking for outgoing notifications

/// Remembers the last successfully delivered message
///
/// The poll loop computes a candidate message every cycle; only a candidate
/// that differs from the last delivered one goes out. The state lives for
/// the life of the process and nothing is persisted, so a restart always
/// re-sends the current status once.
#[derive(Debug, Default)]
pub struct NotificationState {
    last_sent: Option<String>,
}

impl NotificationState {
    /// Creates an empty state; the first candidate always counts as changed
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `message` differs from the last delivered one
    pub fn is_changed(&self, message: &str) -> bool {
        self.last_sent.as_deref() != Some(message)
    }

    /// Records a successful delivery
    ///
    /// Must only be called after the notifier accepted the message, so a
    /// failed delivery is retried on the next changed-or-not evaluation.
    pub fn mark_sent(&mut self, message: &str) {
        self.last_sent = Some(message.to_string());
    }
}
