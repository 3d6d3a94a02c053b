use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta};

use crate::common::{Conversation, MessageEntry, Sender, ViewRole};

use super::dataset::demo_conversations;
use super::identity::{IdentityContext, view_pill, viewer_identity};
use super::timers::OneShot;

/// How long the simulated "typing" indicator stays up after a send.
pub const TYPING_VISIBLE_MS: i64 = 2_000;

pub fn select_conversations(role: ViewRole) -> Vec<Conversation> {
    demo_conversations(role)
}

/// Case-insensitive match on name, company or role label. Order preserved.
pub fn filter_conversations<'a>(conversations: &'a [Conversation], term: &str) -> Vec<&'a Conversation> {
    let term = term.to_lowercase();
    conversations
        .iter()
        .filter(|c| {
            term.is_empty()
                || c.name.to_lowercase().contains(&term)
                || c.company.to_lowercase().contains(&term)
                || c.role_label.to_lowercase().contains(&term)
        })
        .collect()
}

/// Up to two initials from the first letters of the name's words.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationItem {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub last_time: String,
    pub preview: String,
    /// Badge count; `None` when everything has been read.
    pub unread: Option<u32>,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleSide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    pub side: BubbleSide,
    pub text: String,
    pub time: String,
}

impl From<&MessageEntry> for Bubble {
    fn from(entry: &MessageEntry) -> Self {
        Bubble {
            side: match entry.sender {
                Sender::Me => BubbleSide::Right,
                Sender::Them => BubbleSide::Left,
            },
            text: entry.text.clone(),
            time: entry.time.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub subtitle: String,
    pub identity: String,
    /// Empty when no conversation is selected.
    pub bubbles: Vec<Bubble>,
    pub empty_hint: Option<String>,
    pub info_name: String,
    pub info_role: String,
    pub info_company: String,
    pub next_steps: Vec<String>,
    /// Latest message must be in view after every render.
    pub scroll_to_bottom: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagingSnapshot {
    pub view_pill: String,
    pub count_label: String,
    pub items: Vec<ConversationItem>,
    pub detail: DetailView,
    pub typing_visible: bool,
}

pub struct Messaging {
    view: ViewRole,
    conversations: Vec<Conversation>,
    search: String,
    active: Option<usize>,
    typing_visible: bool,
    typing_hide: OneShot,
}

impl Messaging {
    /// The role's first conversation is shown straight away. Being shown on
    /// arrival does not mark it read.
    pub fn new(view: ViewRole) -> Self {
        let conversations = select_conversations(view);
        let active = (!conversations.is_empty()).then_some(0);
        Self {
            view,
            conversations,
            search: String::new(),
            active,
            typing_visible: false,
            typing_hide: OneShot::default(),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn active(&self) -> Option<&Conversation> {
        self.active.and_then(|idx| self.conversations.get(idx))
    }

    pub fn select_conversation(&mut self, id: &str) -> bool {
        let Some(idx) = self.conversations.iter().position(|c| c.id == id) else {
            log::warn!("No conversation `{id}` in the {} inbox", self.view.token());
            return false;
        };
        self.active = Some(idx);
        self.conversations[idx].unread = 0;
        log::debug!("Conversation `{id}` selected");
        true
    }

    /// Append an outgoing message to the active conversation. Returns false
    /// (and changes nothing) when there is no active conversation or the text
    /// is blank.
    pub fn send_message(&mut self, text: &str, now: DateTime<Local>) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let Some(conversation) = self.active.and_then(|idx| self.conversations.get_mut(idx)) else {
            return false;
        };

        let time = now.format("%H:%M").to_string();
        conversation.messages.push(MessageEntry {
            sender: Sender::Me,
            text: text.to_string(),
            time: time.clone(),
        });
        conversation.last_preview = text.to_string();
        conversation.last_time = time;
        log::debug!(
            "Sent message to `{}` ({} messages)",
            conversation.id,
            conversation.messages.len()
        );

        self.typing_visible = true;
        self.typing_hide
            .arm(now, TimeDelta::milliseconds(TYPING_VISIBLE_MS));
        true
    }

    /// Hide the typing indicator once its window has elapsed.
    pub fn tick(&mut self, now: DateTime<Local>) {
        if self.typing_hide.fire_if_due(now) {
            self.typing_visible = false;
        }
    }

    /// Snapshot for a frame drawn at `now`. Due timers fire first, so a frame
    /// woken at the hide deadline already sees the indicator gone.
    pub fn frame(&mut self, now: DateTime<Local>) -> MessagingSnapshot {
        self.tick(now);
        self.snapshot()
    }

    /// Until the typing indicator is due to hide, if it is showing.
    pub fn next_deadline(&self, now: DateTime<Local>) -> Option<Duration> {
        self.typing_hide
            .remaining(now)
            .and_then(|left| left.to_std().ok())
    }

    pub fn render_detail(&self) -> DetailView {
        let identity = viewer_identity(self.view, IdentityContext::Messaging);
        match self.active() {
            None => DetailView {
                title: "Select a conversation".to_string(),
                subtitle: String::new(),
                identity,
                bubbles: Vec::new(),
                empty_hint: Some(
                    "No conversation selected yet. Choose a chat on the left to start."
                        .to_string(),
                ),
                info_name: "No conversation selected".to_string(),
                info_role: String::new(),
                info_company: String::new(),
                next_steps: Vec::new(),
                scroll_to_bottom: true,
            },
            Some(conv) => DetailView {
                title: conv.name.clone(),
                subtitle: conv.role_label.clone(),
                identity,
                bubbles: conv.messages.iter().map(Bubble::from).collect(),
                empty_hint: None,
                info_name: conv.name.clone(),
                info_role: conv.role_label.clone(),
                info_company: conv.company.clone(),
                next_steps: conv.next_steps.clone(),
                scroll_to_bottom: true,
            },
        }
    }

    pub fn snapshot(&self) -> MessagingSnapshot {
        let active_id = self.active().map(|c| c.id.as_str());
        let items: Vec<ConversationItem> = filter_conversations(&self.conversations, &self.search)
            .into_iter()
            .map(|c| ConversationItem {
                id: c.id.clone(),
                name: c.name.clone(),
                initials: initials(&c.name),
                last_time: c.last_time.clone(),
                preview: c.last_preview.clone(),
                unread: (c.unread > 0).then_some(c.unread),
                active: active_id == Some(c.id.as_str()),
            })
            .collect();
        let count = items.len();

        MessagingSnapshot {
            view_pill: view_pill(self.view, IdentityContext::Messaging),
            count_label: format!("{count} chat{}", if count == 1 { "" } else { "s" }),
            items,
            detail: self.render_detail(),
            typing_visible: self.typing_visible,
        }
    }

    #[cfg(test)]
    fn clear_active(&mut self) {
        self.active = None;
    }

    #[cfg(test)]
    fn unread_counts(&self) -> Vec<u32> {
        self.conversations.iter().map(|c| c.unread).collect()
    }
}
