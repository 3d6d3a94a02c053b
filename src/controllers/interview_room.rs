use chrono::{DateTime, Local, NaiveDate};

use crate::common::{Audience, Interview, InterviewStatus, ViewRole};

use super::countdown::{Countdown, classify_countdown};
use super::dataset::OPERATOR_COMPANY;
use super::identity::{IdentityContext, view_pill, viewer_identity};
use super::timers::{ElapsedClock, TickSubscribers};

const ROW_TIME_FORMAT: &str = "%b %-d, %Y %H:%M";
const NEXT_TIME_FORMAT: &str = "%b %-d %H:%M";

/// Interviews visible under `role`, in dataset order.
pub fn select_interviews(all: &[Interview], role: ViewRole) -> Vec<Interview> {
    all.iter()
        .filter(|iv| match role {
            ViewRole::Company => iv.company == OPERATOR_COMPANY,
            ViewRole::Freelancer => iv.audience == Audience::Freelancer,
            ViewRole::Candidate => iv.audience == Audience::Candidate,
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(InterviewStatus),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InterviewFilters {
    /// Matched against role title or company, ignoring case.
    pub text: String,
    pub status: StatusFilter,
    pub date: Option<NaiveDate>,
}

impl InterviewFilters {
    fn matches_text(&self, iv: &Interview) -> bool {
        let term = self.text.to_lowercase();
        term.is_empty()
            || iv.role_title.to_lowercase().contains(&term)
            || iv.company.to_lowercase().contains(&term)
    }

    fn matches_status(&self, iv: &Interview) -> bool {
        match self.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => iv.status == status,
        }
    }

    fn matches_date(&self, iv: &Interview) -> bool {
        self.date
            .is_none_or(|day| iv.scheduled.date_naive() == day)
    }

    pub fn matches(&self, iv: &Interview) -> bool {
        self.matches_text(iv) && self.matches_status(iv) && self.matches_date(iv)
    }
}

pub fn apply_filters<'a>(records: &'a [Interview], filters: &InterviewFilters) -> Vec<&'a Interview> {
    records.iter().filter(|iv| filters.matches(iv)).collect()
}

/// Earliest future interview that is still confirmed or pending. Ties keep
/// dataset order.
pub fn next_upcoming(records: &[Interview], now: DateTime<Local>) -> Option<&Interview> {
    records
        .iter()
        .filter(|iv| iv.scheduled > now && iv.status.is_open())
        .min_by_key(|iv| iv.scheduled)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewRow {
    pub id: u32,
    pub company: String,
    pub role_title: String,
    pub scheduled_label: String,
    pub status: InterviewStatus,
    pub countdown: Countdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub interview_id: u32,
    pub meta: String,
    pub role: String,
    pub company: String,
    pub scheduled: String,
    pub status: String,
    pub identity: String,
    pub elapsed: String,
}

/// Everything the interview page draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewRoomSnapshot {
    pub view_pill: String,
    pub count_label: String,
    pub next_label: String,
    pub rows: Vec<InterviewRow>,
    pub session: Option<SessionView>,
}

struct ActiveSession {
    interview: Interview,
    clock: ElapsedClock,
}

/// Row position plus the instant its countdown is measured against.
#[derive(Debug, Clone, Copy)]
struct RowTick {
    row: usize,
    scheduled: DateTime<Local>,
}

pub struct InterviewRoom {
    view: ViewRole,
    interviews: Vec<Interview>,
    filters: InterviewFilters,
    rows: Vec<InterviewRow>,
    row_ticks: TickSubscribers<RowTick>,
    next_label: String,
    session: Option<ActiveSession>,
}

impl InterviewRoom {
    pub fn new(view: ViewRole, all: &[Interview], now: DateTime<Local>) -> Self {
        let mut room = Self {
            view,
            interviews: select_interviews(all, view),
            filters: InterviewFilters::default(),
            rows: Vec::new(),
            row_ticks: TickSubscribers::default(),
            next_label: String::new(),
            session: None,
        };
        room.render_list(now);
        room
    }

    #[cfg(test)]
    pub fn interviews(&self) -> &[Interview] {
        &self.interviews
    }

    #[cfg(test)]
    pub fn filters(&self) -> &InterviewFilters {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: InterviewFilters, now: DateTime<Local>) {
        if filters != self.filters {
            self.filters = filters;
            self.render_list(now);
        }
    }

    /// Rebuild the rows for the current filters. Row subscriptions from the
    /// previous render are dropped before the new rows subscribe.
    fn render_list(&mut self, now: DateTime<Local>) {
        let filtered = apply_filters(&self.interviews, &self.filters);

        self.rows = filtered
            .iter()
            .map(|iv| InterviewRow {
                id: iv.id,
                company: iv.company.clone(),
                role_title: iv.role_title.clone(),
                scheduled_label: iv.scheduled.format(ROW_TIME_FORMAT).to_string(),
                status: iv.status,
                countdown: classify_countdown(now, iv.scheduled),
            })
            .collect();

        self.row_ticks.replace(
            filtered
                .iter()
                .enumerate()
                .map(|(row, iv)| RowTick {
                    row,
                    scheduled: iv.scheduled,
                }),
        );

        self.refresh_next(now);
        log::debug!(
            "Interview list rendered: {} of {} rows",
            self.rows.len(),
            self.interviews.len()
        );
    }

    fn refresh_next(&mut self, now: DateTime<Local>) {
        self.next_label = match next_upcoming(&self.interviews, now) {
            Some(next) => format!(
                "{} at {} — {}",
                next.role_title,
                next.company,
                next.scheduled.format(NEXT_TIME_FORMAT)
            ),
            None => "No upcoming interviews found.".to_string(),
        };
    }

    /// One beat of the shared tick: refresh every visible countdown and
    /// advance the session clock.
    pub fn tick(&mut self, now: DateTime<Local>) {
        for sub in self.row_ticks.iter() {
            if let Some(row) = self.rows.get_mut(sub.row) {
                row.countdown = classify_countdown(now, sub.scheduled);
            }
        }
        self.refresh_next(now);
        if let Some(session) = self.session.as_mut() {
            session.clock.update(now);
        }
    }

    /// Open the session panel for an interview of this view. Any running
    /// session clock is discarded first.
    pub fn open_session(&mut self, id: u32, now: DateTime<Local>) -> bool {
        let Some(interview) = self.interviews.iter().find(|iv| iv.id == id).cloned() else {
            log::warn!("No interview {id} in the {} view", self.view.token());
            return false;
        };

        if let Some(previous) = self.session.take() {
            log::debug!(
                "Cancelling session clock for interview {} at {}",
                previous.interview.id,
                previous.clock.label()
            );
        }
        log::info!(
            "Joining session for {} at {}",
            interview.role_title,
            interview.company
        );
        self.session = Some(ActiveSession {
            interview,
            clock: ElapsedClock::start(now),
        });
        true
    }

    pub fn close_session(&mut self) {
        if let Some(session) = self.session.take() {
            log::info!(
                "Left session for interview {} after {}",
                session.interview.id,
                session.clock.label()
            );
        }
    }

    #[cfg(test)]
    pub fn session_elapsed(&self) -> Option<u64> {
        self.session.as_ref().map(|s| s.clock.seconds())
    }

    pub fn snapshot(&self) -> InterviewRoomSnapshot {
        let count = self.rows.len();
        InterviewRoomSnapshot {
            view_pill: view_pill(self.view, IdentityContext::Interview),
            count_label: format!("{count} interview{}", if count == 1 { "" } else { "s" }),
            next_label: self.next_label.clone(),
            rows: self.rows.clone(),
            session: self.session.as_ref().map(|s| SessionView {
                interview_id: s.interview.id,
                meta: format!(
                    "Live session for {} at {}",
                    s.interview.role_title, s.interview.company
                ),
                role: format!("Role: {}", s.interview.role_title),
                company: format!("Company: {}", s.interview.company),
                scheduled: format!("Scheduled: {}", s.interview.scheduled.format("%c")),
                status: format!("Status: {}", s.interview.status.label()),
                identity: viewer_identity(self.view, IdentityContext::Interview),
                elapsed: s.clock.label(),
            }),
        }
    }

    #[cfg(test)]
    fn subscribed_rows(&self) -> usize {
        self.row_ticks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::countdown::CountdownStyle;
    use crate::controllers::dataset::demo_interviews;
    use chrono::{TimeDelta, TimeZone};

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap()
    }

    fn ids(records: &[&Interview]) -> Vec<u32> {
        records.iter().map(|iv| iv.id).collect()
    }

    fn interview(id: u32, minutes: i64, status: InterviewStatus) -> Interview {
        Interview {
            id,
            company: "Acme".into(),
            role_title: format!("Role {id}"),
            scheduled: now() + TimeDelta::minutes(minutes),
            status,
            audience: Audience::Candidate,
        }
    }

    #[test]
    fn roles_partition_the_audiences() {
        let all = demo_interviews(now());
        let candidate: Vec<u32> = select_interviews(&all, ViewRole::Candidate).iter().map(|i| i.id).collect();
        let freelancer: Vec<u32> = select_interviews(&all, ViewRole::Freelancer).iter().map(|i| i.id).collect();
        let company: Vec<u32> = select_interviews(&all, ViewRole::Company).iter().map(|i| i.id).collect();

        assert_eq!(candidate, vec![1, 2, 3, 6]);
        assert_eq!(freelancer, vec![4, 5]);
        assert!(candidate.iter().all(|id| !freelancer.contains(id)));
        assert_eq!(candidate.len() + freelancer.len(), all.len());
        assert_eq!(company, vec![1, 4, 6]);
    }

    #[test]
    fn filters_are_anded_and_order_independent() {
        let all = demo_interviews(now());
        let day = (now() + TimeDelta::minutes(45)).date_naive();
        let full = InterviewFilters {
            text: "TALENTTRACK".into(),
            status: StatusFilter::Only(InterviewStatus::Confirmed),
            date: Some(day),
        };
        assert_eq!(ids(&apply_filters(&all, &full)), vec![1, 4]);

        let text_only = InterviewFilters { text: full.text.clone(), ..Default::default() };
        let status_only = InterviewFilters { status: full.status, ..Default::default() };
        let date_only = InterviewFilters { date: full.date, ..Default::default() };

        let orders = [
            [&text_only, &status_only, &date_only],
            [&date_only, &text_only, &status_only],
            [&status_only, &date_only, &text_only],
        ];
        for order in orders {
            let mut current: Vec<Interview> = all.clone();
            for filter in order {
                current = apply_filters(&current, filter).into_iter().cloned().collect();
            }
            assert_eq!(current.iter().map(|iv| iv.id).collect::<Vec<_>>(), vec![1, 4]);
        }
    }

    #[test]
    fn text_filter_matches_role_title_or_company() {
        let all = demo_interviews(now());
        let by_title = InterviewFilters { text: "assistant".into(), ..Default::default() };
        assert_eq!(ids(&apply_filters(&all, &by_title)), vec![2, 3]);

        let none = InterviewFilters { text: "zebra".into(), ..Default::default() };
        assert!(apply_filters(&all, &none).is_empty());
    }

    #[test]
    fn date_filter_ignores_time_of_day() {
        let all = demo_interviews(now());
        let tomorrow = InterviewFilters {
            date: Some((now() + TimeDelta::days(1)).date_naive()),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&all, &tomorrow)), vec![3]);
    }

    #[test]
    fn next_upcoming_skips_past_and_closed() {
        let records = vec![
            interview(1, -5, InterviewStatus::Confirmed),
            interview(2, 30, InterviewStatus::Cancelled),
            interview(3, 90, InterviewStatus::Pending),
            interview(4, 60, InterviewStatus::Confirmed),
        ];
        assert_eq!(next_upcoming(&records, now()).map(|iv| iv.id), Some(4));

        let closed = vec![
            interview(1, -5, InterviewStatus::Confirmed),
            interview(2, 30, InterviewStatus::Completed),
            interview(3, 40, InterviewStatus::Cancelled),
        ];
        assert!(next_upcoming(&closed, now()).is_none());
    }

    #[test]
    fn next_upcoming_tie_keeps_dataset_order() {
        let records = vec![
            interview(7, 20, InterviewStatus::Pending),
            interview(3, 20, InterviewStatus::Confirmed),
        ];
        assert_eq!(next_upcoming(&records, now()).map(|iv| iv.id), Some(7));
    }

    #[test]
    fn count_and_next_labels() {
        let room = InterviewRoom::new(ViewRole::Freelancer, &demo_interviews(now()), now());
        let snap = room.snapshot();
        assert_eq!(snap.view_pill, "Freelancer View");
        assert_eq!(snap.count_label, "2 interviews");
        assert!(snap.next_label.starts_with("UX Audit Project Kickoff at TalentTrack Labs — "));

        let mut room = InterviewRoom::new(ViewRole::Candidate, &demo_interviews(now()), now());
        room.set_filters(InterviewFilters { text: "virtual".into(), ..Default::default() }, now());
        assert_eq!(room.snapshot().count_label, "1 interview");

        let none = InterviewRoom::new(ViewRole::Candidate, &demo_interviews(now()), now() + TimeDelta::days(3));
        assert_eq!(none.snapshot().next_label, "No upcoming interviews found.");
    }

    #[test]
    fn rerender_replaces_row_subscriptions() {
        let mut room = InterviewRoom::new(ViewRole::Candidate, &demo_interviews(now()), now());
        assert_eq!(room.subscribed_rows(), 4);

        room.set_filters(
            InterviewFilters { status: StatusFilter::Only(InterviewStatus::Pending), ..Default::default() },
            now(),
        );
        assert_eq!(room.subscribed_rows(), 1);
        assert_eq!(room.snapshot().rows[0].id, 2);

        room.set_filters(InterviewFilters { text: "nothing matches".into(), ..Default::default() }, now());
        assert_eq!(room.subscribed_rows(), 0);
        assert!(room.snapshot().rows.is_empty());
    }

    #[test]
    fn tick_refreshes_countdowns() {
        let mut room = InterviewRoom::new(ViewRole::Candidate, &demo_interviews(now()), now());
        let snap = room.snapshot();
        let first = &snap.rows[0];
        assert_eq!(first.countdown.label, "45 min");
        assert_eq!(first.countdown.style, CountdownStyle::Normal);

        room.tick(now() + TimeDelta::minutes(31));
        let rows = room.snapshot().rows;
        assert_eq!(rows[0].countdown.label, "14 min");
        assert_eq!(rows[0].countdown.style, CountdownStyle::Soon);
        assert_eq!(rows[3].countdown.label, "Finished");

        room.tick(now() + TimeDelta::minutes(50));
        assert_eq!(room.snapshot().rows[0].countdown.label, "In progress");
    }

    #[test]
    fn session_clock_restarts_when_reopened() {
        let mut room = InterviewRoom::new(ViewRole::Candidate, &demo_interviews(now()), now());
        assert!(room.open_session(1, now()));
        for s in 1..=3 {
            room.tick(now() + TimeDelta::seconds(s));
        }
        assert_eq!(room.snapshot().session.unwrap().elapsed, "00:03");

        let reopened = now() + TimeDelta::milliseconds(3_400);
        assert!(room.open_session(2, reopened));
        assert_eq!(room.session_elapsed(), Some(0));
        // The next shared tick lands only 600ms after reopening.
        room.tick(now() + TimeDelta::seconds(4));
        assert_eq!(room.session_elapsed(), Some(0));
        room.tick(now() + TimeDelta::seconds(5));
        let session = room.snapshot().session.unwrap();
        assert_eq!(session.interview_id, 2);
        assert_eq!(session.elapsed, "00:01");
        assert_eq!(session.identity, "You are joining as: Candidate — Sfiso Tshotwane");
        assert_eq!(session.status, "Status: Pending");

        room.close_session();
        room.tick(now() + TimeDelta::seconds(6));
        assert!(room.snapshot().session.is_none());
        assert_eq!(room.session_elapsed(), None);
    }

    #[test]
    fn unknown_or_foreign_interview_does_not_open() {
        let mut room = InterviewRoom::new(ViewRole::Freelancer, &demo_interviews(now()), now());
        assert!(!room.open_session(1, now()));
        assert!(!room.open_session(99, now()));
        assert!(room.snapshot().session.is_none());
    }

    #[test]
    fn freelancer_open_and_close_leaves_records_untouched() {
        let all = demo_interviews(now());
        let mut room = InterviewRoom::new(ViewRole::Freelancer, &all, now());
        let before_records = room.interviews().to_vec();
        let before_rows = room.snapshot().rows;
        assert_eq!(before_rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![4, 5]);

        assert!(room.open_session(before_rows[0].id, now()));
        room.close_session();

        assert_eq!(room.interviews(), before_records.as_slice());
        assert_eq!(room.snapshot().rows, before_rows);
        assert_eq!(room.filters(), &InterviewFilters::default());
    }
}
