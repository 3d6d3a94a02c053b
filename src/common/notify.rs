use tokio::sync::mpsc;

use super::events::UiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// Sink for user-facing flash messages. Core logic only ever talks to this.
pub trait Notifier {
    fn notify(&self, message: String, severity: Severity);
}

/// Forwards notifications onto the UI event channel.
#[derive(Clone)]
pub struct ChannelNotifier {
    sender: mpsc::Sender<UiEvent>,
}

impl ChannelNotifier {
    pub fn new(sender: mpsc::Sender<UiEvent>) -> Self {
        Self { sender }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, message: String, severity: Severity) {
        let event = UiEvent::Notify(Notification { message, severity });
        if let Err(err) = self.sender.try_send(event) {
            log::warn!("Failed to queue notification: {err}");
        }
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct RecordingNotifier {
    pub seen: std::cell::RefCell<Vec<Notification>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.seen.borrow().iter().map(|n| n.message.clone()).collect()
    }

    pub fn last_severity(&self) -> Option<Severity> {
        self.seen.borrow().last().map(|n| n.severity)
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, message: String, severity: Severity) {
        self.seen.borrow_mut().push(Notification { message, severity });
    }
}
