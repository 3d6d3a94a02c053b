pub mod error;
pub mod events;
pub mod notify;
pub mod route;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use events::UiEvent;
pub use notify::{ChannelNotifier, Notification, Notifier, Severity};
pub use route::{Location, Page};
pub use types::{
    ApplicationRecord, Audience, Conversation, Interview, InterviewStatus, JobPost, MessageEntry,
    Sender, Theme, UserRole, ViewRole,
};
