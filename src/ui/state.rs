use chrono::{DateTime, Local, NaiveDate, TimeDelta};

use crate::common::{Location, Notification, UserRole};
use crate::controllers::interview_room::{InterviewFilters, StatusFilter};
use crate::controllers::job_board::JobDraft;

/// How long a flash message stays on screen.
pub const TOAST_LIFETIME_MS: i64 = 3_500;
const MAX_TOASTS: usize = 100;

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub expires_at: DateTime<Local>,
}

/// Raw widget contents of the interview filter bar.
#[derive(Debug, Clone, Default)]
pub struct FilterInputs {
    pub text: String,
    pub status: StatusFilter,
    /// `YYYY-MM-DD`; blank or unparsable means "any day".
    pub date: String,
}

impl FilterInputs {
    pub fn date_is_invalid(&self) -> bool {
        !self.date.trim().is_empty() && self.parsed_date().is_none()
    }

    fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    pub fn to_filters(&self) -> InterviewFilters {
        InterviewFilters {
            text: self.text.clone(),
            status: self.status,
            date: self.parsed_date(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignInInputs {
    pub name: String,
    pub company: String,
    pub role: UserRole,
}

impl Default for SignInInputs {
    fn default() -> Self {
        Self {
            name: String::new(),
            company: String::new(),
            role: UserRole::Candidate,
        }
    }
}

/// Local UI state that is not owned by a controller.
pub struct AppState {
    pub location: Location,
    pub filters: FilterInputs,
    pub chat_input: String,
    pub job_draft: JobDraft,
    pub sign_in: SignInInputs,
    pub toasts: Vec<Toast>,
}

impl AppState {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            filters: FilterInputs::default(),
            chat_input: String::new(),
            job_draft: JobDraft::default(),
            sign_in: SignInInputs::default(),
            toasts: Vec::new(),
        }
    }

    /// Per-role inputs start blank again after the view changes.
    pub fn reset_view_inputs(&mut self) {
        self.filters = FilterInputs::default();
        self.chat_input.clear();
    }

    pub fn push_toast(&mut self, notification: Notification, now: DateTime<Local>) {
        log::debug!("Toast: {}", notification.message);
        self.toasts.push(Toast {
            notification,
            expires_at: now + TimeDelta::milliseconds(TOAST_LIFETIME_MS),
        });

        if self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
    }

    pub fn expire_toasts(&mut self, now: DateTime<Local>) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Severity;
    use chrono::TimeZone;

    #[test]
    fn toasts_expire_after_their_lifetime() {
        let t0 = Local.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap();
        let mut state = AppState::new(Location::default());
        let note = |m: &str| Notification {
            message: m.to_string(),
            severity: Severity::Info,
        };
        state.push_toast(note("first"), t0);
        state.push_toast(note("second"), t0 + TimeDelta::seconds(2));

        state.expire_toasts(t0 + TimeDelta::milliseconds(3499));
        assert_eq!(state.toasts.len(), 2);
        state.expire_toasts(t0 + TimeDelta::milliseconds(3500));
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].notification.message, "second");
    }

    #[test]
    fn date_input_parsing() {
        let mut inputs = FilterInputs::default();
        assert_eq!(inputs.to_filters().date, None);
        assert!(!inputs.date_is_invalid());

        inputs.date = " 2026-03-10 ".into();
        assert_eq!(inputs.to_filters().date, NaiveDate::from_ymd_opt(2026, 3, 10));

        inputs.date = "10/03/2026".into();
        assert!(inputs.date_is_invalid());
        assert_eq!(inputs.to_filters().date, None);
    }
}
