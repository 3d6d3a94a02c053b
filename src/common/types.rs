use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Perspective under which a page filters and labels its mock data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewRole {
    #[default]
    Candidate,
    Company,
    Freelancer,
}

impl ViewRole {
    pub const ALL: [ViewRole; 3] = [ViewRole::Candidate, ViewRole::Company, ViewRole::Freelancer];

    /// Resolve a `view` token. Anything unrecognised (or absent) is a candidate.
    pub fn from_token(token: Option<&str>) -> Self {
        match token.map(str::trim) {
            Some("company") => ViewRole::Company,
            Some("freelancer") => ViewRole::Freelancer,
            _ => ViewRole::Candidate,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            ViewRole::Candidate => "candidate",
            ViewRole::Company => "company",
            ViewRole::Freelancer => "freelancer",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewRole::Candidate => "Candidate",
            ViewRole::Company => "Company",
            ViewRole::Freelancer => "Freelancer",
        }
    }
}

/// Role stored for the signed-in user. Wider than [`ViewRole`]: recruiters
/// share the company dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Candidate,
    Company,
    Recruiter,
    Freelancer,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Candidate,
        UserRole::Company,
        UserRole::Recruiter,
        UserRole::Freelancer,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "candidate" => Some(UserRole::Candidate),
            "company" => Some(UserRole::Company),
            "recruiter" => Some(UserRole::Recruiter),
            "freelancer" => Some(UserRole::Freelancer),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Candidate => "candidate",
            UserRole::Company => "company",
            UserRole::Recruiter => "recruiter",
            UserRole::Freelancer => "freelancer",
        }
    }

    pub fn can_post_jobs(self) -> bool {
        matches!(self, UserRole::Company | UserRole::Recruiter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewStatus {
    Confirmed,
    Pending,
    Completed,
    Cancelled,
}

impl InterviewStatus {
    pub const ALL: [InterviewStatus; 4] = [
        InterviewStatus::Confirmed,
        InterviewStatus::Pending,
        InterviewStatus::Completed,
        InterviewStatus::Cancelled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InterviewStatus::Confirmed => "Confirmed",
            InterviewStatus::Pending => "Pending",
            InterviewStatus::Completed => "Completed",
            InterviewStatus::Cancelled => "Cancelled",
        }
    }

    /// Still expected to take place.
    pub fn is_open(self) -> bool {
        matches!(self, InterviewStatus::Confirmed | InterviewStatus::Pending)
    }
}

/// Who an interview slot is listed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Candidate,
    Freelancer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interview {
    pub id: u32,
    pub company: String,
    pub role_title: String,
    pub scheduled: DateTime<Local>,
    pub status: InterviewStatus,
    pub audience: Audience,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Me,
    Them,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub sender: Sender,
    pub text: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: String,
    pub name: String,
    pub role_label: String,
    pub company: String,
    pub messages: Vec<MessageEntry>,
    pub unread: u32,
    pub last_preview: String,
    pub last_time: String,
    pub next_steps: Vec<String>,
}

/// Persisted under `TT_APPLICATIONS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub title: String,
    /// ISO-8601 submission time.
    pub date: String,
    pub user: String,
}

/// Persisted under `TT_POSTS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPost {
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, rename = "type")]
    pub job_type: String,
    pub date: String,
}
