//! Timer state driven by the shared one-second tick. Nothing here owns a
//! clock; callers pass `now`.

use chrono::{DateTime, Local, TimeDelta};

/// Keys currently listening to the tick. Replaced wholesale on re-render.
#[derive(Debug, Clone)]
pub struct TickSubscribers<K> {
    keys: Vec<K>,
}

impl<K> Default for TickSubscribers<K> {
    fn default() -> Self {
        Self { keys: Vec::new() }
    }
}

impl<K> TickSubscribers<K> {
    /// Drop every existing subscriber, then subscribe `keys`.
    pub fn replace(&mut self, keys: impl IntoIterator<Item = K>) {
        self.keys.clear();
        self.keys.extend(keys);
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

/// Whole seconds since the session opened, measured from the open instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElapsedClock {
    started: DateTime<Local>,
    seconds: u64,
}

impl ElapsedClock {
    pub fn start(now: DateTime<Local>) -> Self {
        Self {
            started: now,
            seconds: 0,
        }
    }

    pub fn update(&mut self, now: DateTime<Local>) {
        self.seconds = u64::try_from(now.signed_duration_since(self.started).num_seconds())
            .unwrap_or(0);
    }

    #[cfg(test)]
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// `mm:ss`; minutes keep growing past 59.
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

/// A single pending deadline. Arming again replaces the previous deadline.
#[derive(Debug, Clone, Default)]
pub struct OneShot {
    due: Option<DateTime<Local>>,
}

impl OneShot {
    pub fn arm(&mut self, now: DateTime<Local>, delay: TimeDelta) {
        self.due = Some(now + delay);
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    /// Time left until the deadline; zero once it has passed.
    pub fn remaining(&self, now: DateTime<Local>) -> Option<TimeDelta> {
        self.due
            .map(|due| due.signed_duration_since(now).max(TimeDelta::zero()))
    }

    /// Disarms and returns true when the deadline has been reached.
    pub fn fire_if_due(&mut self, now: DateTime<Local>) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
