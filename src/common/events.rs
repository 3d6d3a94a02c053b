use chrono::{DateTime, Local};

use super::notify::Notification;

/// Events delivered to the UI thread.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// One beat of the shared one-second tick.
    Tick(DateTime<Local>),
    Notify(Notification),
}
