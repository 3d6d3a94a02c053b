use chrono::{DateTime, Local};

use crate::common::{ApplicationRecord, JobPost, Notifier, Severity, StoreResult};
use crate::storage::{Profile, SessionStore};

use super::dataset::{DEMO_JOBS, DemoJob};

/// XP granted for applying to a job a company posted.
pub const APPLY_XP: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Posted(JobPost),
    Demo(DemoJob),
}

impl Listing {
    pub fn title(&self) -> &str {
        match self {
            Listing::Posted(post) => post.title.as_str(),
            Listing::Demo(job) => job.title,
        }
    }

    pub fn meta(&self) -> String {
        match self {
            Listing::Posted(post) => post.location.clone(),
            Listing::Demo(job) => format!("{} · {}", job.company, job.location),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Listing::Posted(post) if post.job_type.is_empty() => "Job",
            Listing::Posted(post) => post.job_type.as_str(),
            Listing::Demo(job) => job.job_type,
        }
    }

    /// "Posted {date}" for company posts.
    pub fn posted_label(&self) -> Option<String> {
        match self {
            Listing::Posted(post) => Some(match DateTime::parse_from_rfc3339(&post.date) {
                Ok(date) => format!("Posted {}", date.with_timezone(&Local).format("%Y-%m-%d")),
                Err(_) => format!("Posted {}", post.date),
            }),
            Listing::Demo(_) => None,
        }
    }
}

/// Input of the "post a job" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDraft {
    pub title: String,
    pub location: String,
    pub job_type: String,
}

/// Jobs page: listings, applying and posting, all backed by the profile.
pub struct JobBoard<S: SessionStore, N: Notifier> {
    profile: Profile<S>,
    notifier: N,
}

impl<S: SessionStore, N: Notifier> JobBoard<S, N> {
    pub fn new(profile: Profile<S>, notifier: N) -> Self {
        Self { profile, notifier }
    }

    pub fn profile(&self) -> &Profile<S> {
        &self.profile
    }

    /// Company posts newest first, then the standing demo cards.
    pub fn listings(&self) -> Vec<Listing> {
        self.profile
            .posts()
            .into_iter()
            .rev()
            .map(Listing::Posted)
            .chain(DEMO_JOBS.iter().cloned().map(Listing::Demo))
            .collect()
    }

    /// Record an application for the signed-in user. Returns false when
    /// nobody is signed in.
    pub fn apply(&self, listing: &Listing, now: DateTime<Local>) -> StoreResult<bool> {
        if self.profile.user_role().is_none() {
            self.notifier
                .notify("Sign in to apply for jobs.".to_string(), Severity::Info);
            return Ok(false);
        }

        let title = listing.title().to_string();
        self.profile.push_application(ApplicationRecord {
            title: title.clone(),
            date: now.to_rfc3339(),
            user: self.profile.user_name(),
        })?;
        log::info!("Application submitted for {title}");

        let message = match listing {
            Listing::Posted(_) => {
                self.profile.award_xp(APPLY_XP)?;
                format!("Application submitted for: {title}\nYou earned {APPLY_XP} XP!")
            }
            Listing::Demo(_) => format!("Application submitted for: {title}"),
        };
        self.notifier.notify(message, Severity::Success);
        Ok(true)
    }

    /// Publish a job for company and recruiter accounts.
    pub fn post_job(&self, draft: &JobDraft, now: DateTime<Local>) -> StoreResult<bool> {
        if !self.profile.user_role().is_some_and(|role| role.can_post_jobs()) {
            self.notifier.notify(
                "Only company accounts can post jobs.".to_string(),
                Severity::Error,
            );
            return Ok(false);
        }
        let title = draft.title.trim();
        if title.is_empty() {
            self.notifier
                .notify("A job title is required.".to_string(), Severity::Error);
            return Ok(false);
        }

        self.profile.push_post(JobPost {
            title: title.to_string(),
            location: draft.location.trim().to_string(),
            job_type: draft.job_type.trim().to_string(),
            date: now.to_rfc3339(),
        })?;
        log::info!("Job posted: {title}");
        self.notifier
            .notify(format!("Job posted: {title}"), Severity::Success);
        Ok(true)
    }

    /// Newest first.
    pub fn applications(&self) -> Vec<ApplicationRecord> {
        let mut apps = self.profile.applications();
        apps.reverse();
        apps
    }

    #[cfg(test)]
    fn notifier(&self) -> &N {
        &self.notifier
    }
}

/// "Applied: ..." line for the dashboard list.
pub fn applied_label(record: &ApplicationRecord) -> String {
    match DateTime::parse_from_rfc3339(&record.date) {
        Ok(date) => format!(
            "Applied: {}",
            date.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        ),
        Err(_) => format!("Applied: {}", record.date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::UserRole;
    use crate::common::notify::RecordingNotifier;
    use crate::storage::MemoryStore;
    use chrono::{TimeDelta, TimeZone};

    fn board() -> JobBoard<MemoryStore, RecordingNotifier> {
        JobBoard::new(Profile::new(MemoryStore::new()), RecordingNotifier::default())
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 5, 4, 10, 30, 0).unwrap()
    }

    fn draft(title: &str) -> JobDraft {
        JobDraft {
            title: title.to_string(),
            location: "Pretoria".to_string(),
            job_type: "Contract".to_string(),
        }
    }

    #[test]
    fn fresh_board_lists_the_demo_cards() {
        let titles: Vec<String> = board().listings().iter().map(|l| l.title().to_string()).collect();
        assert_eq!(titles, vec!["Junior Software Developer", "Data Analyst Intern"]);
    }

    #[test]
    fn posted_jobs_list_newest_first_above_demo_cards() {
        let board = board();
        board.profile().sign_in(UserRole::Company, "Lerato", Some("TalentTrack Labs")).unwrap();
        assert!(board.post_job(&draft("Payroll Clerk"), now()).unwrap());
        assert!(board.post_job(&draft("Support Engineer"), now() + TimeDelta::hours(1)).unwrap());

        let listings = board.listings();
        let titles: Vec<&str> = listings.iter().map(|l| l.title()).collect();
        assert_eq!(
            titles,
            vec!["Support Engineer", "Payroll Clerk", "Junior Software Developer", "Data Analyst Intern"]
        );
        assert_eq!(listings[0].tag(), "Contract");
        assert_eq!(listings[0].posted_label().as_deref(), Some("Posted 2026-05-04"));
        assert_eq!(listings[2].posted_label(), None);
    }

    #[test]
    fn only_company_roles_post() {
        let board = board();
        assert!(!board.post_job(&draft("Anything"), now()).unwrap());

        board.profile().sign_in(UserRole::Freelancer, "Sfiso", None).unwrap();
        assert!(!board.post_job(&draft("Anything"), now()).unwrap());
        assert_eq!(board.notifier().last_severity(), Some(Severity::Error));

        board.profile().sign_in(UserRole::Recruiter, "Lerato", None).unwrap();
        assert!(!board.post_job(&draft("   "), now()).unwrap());
        assert!(board.post_job(&draft("Recruiter Post"), now()).unwrap());
        assert_eq!(board.listings().len(), 3);
    }

    #[test]
    fn applying_needs_a_signed_in_role() {
        let board = board();
        let listing = board.listings().remove(0);
        assert!(!board.apply(&listing, now()).unwrap());
        assert!(board.applications().is_empty());
        assert_eq!(board.notifier().messages(), vec!["Sign in to apply for jobs."]);
    }

    #[test]
    fn applying_to_demo_card_records_without_xp() {
        let board = board();
        board.profile().sign_in(UserRole::Candidate, "Sfiso", None).unwrap();
        let listing = board.listings().remove(1);
        assert!(board.apply(&listing, now()).unwrap());

        let apps = board.applications();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].title, "Data Analyst Intern");
        assert_eq!(apps[0].user, "Sfiso");
        assert_eq!(apps[0].date, now().to_rfc3339());
        assert_eq!(board.profile().xp(), 0);
        assert_eq!(
            board.notifier().messages(),
            vec!["Application submitted for: Data Analyst Intern"]
        );
    }

    #[test]
    fn applying_to_posted_job_awards_xp() {
        let board = board();
        board.profile().sign_in(UserRole::Company, "Lerato", None).unwrap();
        board.post_job(&draft("Payroll Clerk"), now()).unwrap();
        board.profile().sign_in(UserRole::Candidate, "Sfiso", None).unwrap();

        let listing = board.listings().remove(0);
        assert!(board.apply(&listing, now()).unwrap());
        assert!(board.apply(&listing, now() + TimeDelta::minutes(1)).unwrap());

        assert_eq!(board.profile().xp(), 2 * APPLY_XP);
        let apps = board.applications();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].date, (now() + TimeDelta::minutes(1)).to_rfc3339());
        assert_eq!(
            board.notifier().messages().last().map(String::as_str),
            Some("Application submitted for: Payroll Clerk\nYou earned 10 XP!")
        );
    }

    #[test]
    fn applied_label_tolerates_foreign_dates() {
        let record = ApplicationRecord {
            title: "Tutor".into(),
            date: "last tuesday".into(),
            user: String::new(),
        };
        assert_eq!(applied_label(&record), "Applied: last tuesday");
    }
}
