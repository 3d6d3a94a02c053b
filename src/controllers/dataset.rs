//! Fixed demo records. Built once at start-up and never fetched.

use chrono::{DateTime, Local, TimeDelta};

use crate::common::{
    Audience, Conversation, Interview, InterviewStatus, MessageEntry, Sender, ViewRole,
};

/// The company the signed-in operator works for; the company view shows
/// every interview it hosts.
pub const OPERATOR_COMPANY: &str = "TalentTrack Labs";

/// Listing that exists before anyone posts a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoJob {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub job_type: &'static str,
}

pub const DEMO_JOBS: [DemoJob; 2] = [
    DemoJob {
        title: "Junior Software Developer",
        company: "NovaTech Labs",
        location: "Johannesburg · Hybrid",
        job_type: "Full-time",
    },
    DemoJob {
        title: "Data Analyst Intern",
        company: "InsightWorks",
        location: "Cape Town · On-site",
        job_type: "Internship",
    },
];

/// Every interview, scheduled relative to `now`.
pub fn demo_interviews(now: DateTime<Local>) -> Vec<Interview> {
    let slot = |id, company: &str, role_title: &str, minutes, status, audience| Interview {
        id,
        company: company.to_string(),
        role_title: role_title.to_string(),
        scheduled: now + TimeDelta::minutes(minutes),
        status,
        audience,
    };

    vec![
        slot(1, OPERATOR_COMPANY, "Junior Business Analyst", 45, InterviewStatus::Confirmed, Audience::Candidate),
        slot(2, "Global FinTech SA", "Junior Admin Assistant", 180, InterviewStatus::Pending, Audience::Candidate),
        slot(3, "Remote Talent Africa", "Virtual Assistant", 1440, InterviewStatus::Confirmed, Audience::Candidate),
        slot(4, OPERATOR_COMPANY, "UX Audit Project Kickoff", 90, InterviewStatus::Confirmed, Audience::Freelancer),
        slot(5, "PixelForge Studio", "Landing Page Redesign Brief", 240, InterviewStatus::Pending, Audience::Freelancer),
        slot(6, OPERATOR_COMPANY, "Graduate Talent Screening", -60, InterviewStatus::Completed, Audience::Candidate),
    ]
}

fn msg(sender: Sender, text: &str, time: &str) -> MessageEntry {
    MessageEntry {
        sender,
        text: text.to_string(),
        time: time.to_string(),
    }
}

struct Thread<'a> {
    id: &'a str,
    name: &'a str,
    role_label: &'a str,
    company: &'a str,
    unread: u32,
    preview: &'a str,
    messages: Vec<MessageEntry>,
    next_steps: [&'a str; 2],
}

impl From<Thread<'_>> for Conversation {
    fn from(thread: Thread<'_>) -> Self {
        let last_time = thread
            .messages
            .last()
            .map(|m| m.time.clone())
            .unwrap_or_default();
        Conversation {
            id: thread.id.to_string(),
            name: thread.name.to_string(),
            role_label: thread.role_label.to_string(),
            company: thread.company.to_string(),
            messages: thread.messages,
            unread: thread.unread,
            last_preview: thread.preview.to_string(),
            last_time,
            next_steps: thread.next_steps.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The inbox shown for `role`.
pub fn demo_conversations(role: ViewRole) -> Vec<Conversation> {
    use Sender::{Me, Them};

    let threads = match role {
        ViewRole::Candidate => vec![
            Thread {
                id: "c1",
                name: OPERATOR_COMPANY,
                role_label: "Recruiter · Junior Business Analyst",
                company: OPERATOR_COMPANY,
                unread: 2,
                preview: "We’d like to invite you to a first-round interview.",
                messages: vec![
                    msg(Them, "Hi Sfiso, thanks for applying! 👋", "09:45"),
                    msg(Me, "Hi! Thank you for the update 🙏", "09:50"),
                    msg(Them, "We’d like to invite you to a first-round interview.", "10:12"),
                ],
                next_steps: [
                    "Confirm interview time in the Interview Room.",
                    "Prepare 2–3 examples of your admin/tech experience.",
                ],
            },
            Thread {
                id: "c2",
                name: "Global FinTech SA",
                role_label: "HR · Junior Admin Assistant",
                company: "Global FinTech SA",
                unread: 0,
                preview: "Please upload your latest CV before Friday.",
                messages: vec![
                    msg(Them, "Hi, we received your application 🙌", "Yesterday"),
                    msg(Them, "Please upload your latest CV before Friday.", "Yesterday"),
                ],
                next_steps: [
                    "Update your CV on TalentTrack.",
                    "Double-check your contact details and availability.",
                ],
            },
        ],
        ViewRole::Company => vec![
            Thread {
                id: "co1",
                name: "Sfiso Tshotwane",
                role_label: "Candidate · Learner: Administration",
                company: OPERATOR_COMPANY,
                unread: 1,
                preview: "Thank you for the opportunity!",
                messages: vec![
                    msg(Me, "Hi Sfiso, are you available tomorrow at 10:00?", "13:40"),
                    msg(Them, "Yes, that works for me. Thank you for the opportunity!", "14:03"),
                ],
                next_steps: [
                    "Confirm interview slot in Interview Room.",
                    "Send pre-interview document link.",
                ],
            },
            Thread {
                id: "co2",
                name: "Ayanda Nkosi",
                role_label: "Candidate · Junior Developer",
                company: OPERATOR_COMPANY,
                unread: 0,
                preview: "I’ve attached my updated portfolio.",
                messages: vec![msg(
                    Them,
                    "Good morning, I’ve attached my updated portfolio.",
                    "09:18",
                )],
                next_steps: [
                    "Review candidate portfolio.",
                    "Share shortlist decision with your hiring manager.",
                ],
            },
        ],
        ViewRole::Freelancer => vec![
            Thread {
                id: "f1",
                name: "PixelForge Studio",
                role_label: "Client · Design Team Lead",
                company: "PixelForge Studio",
                unread: 3,
                preview: "Can you share the updated landing page by Friday?",
                messages: vec![
                    msg(Them, "Hey Sfiso, thanks for the first draft 👏", "10:10"),
                    msg(Me, "Awesome, I’ll refine the hero section.", "10:35"),
                    msg(Them, "Can you share the updated landing page by Friday?", "11:27"),
                ],
                next_steps: [
                    "Update the hero section and pricing layout.",
                    "Confirm delivery date and time in this chat.",
                ],
            },
            Thread {
                id: "f2",
                name: OPERATOR_COMPANY,
                role_label: "Client · Dashboard Revamp",
                company: OPERATOR_COMPANY,
                unread: 0,
                preview: "We’re happy with the previous sprint result.",
                messages: vec![msg(Them, "We’re happy with the previous sprint result.", "Mon")],
                next_steps: [
                    "Scope the next sprint tasks.",
                    "Share updated estimate for new components.",
                ],
            },
        ],
    };

    threads.into_iter().map(Conversation::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn interview_ids_are_unique() {
        let all = demo_interviews(Local::now());
        let ids: HashSet<_> = all.iter().map(|iv| iv.id).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn previews_quote_the_end_of_the_last_message() {
        for role in ViewRole::ALL {
            for conv in demo_conversations(role) {
                let last = conv.messages.last().unwrap();
                assert!(last.text.ends_with(&conv.last_preview), "{}", conv.id);
                assert_eq!(conv.last_time, last.time, "{}", conv.id);
            }
        }

        let company = demo_conversations(ViewRole::Company);
        assert_eq!(company[0].last_preview, "Thank you for the opportunity!");
        assert_eq!(company[1].last_preview, "I’ve attached my updated portfolio.");
    }

    #[test]
    fn every_role_has_an_inbox() {
        let unread: Vec<u32> = ViewRole::ALL
            .iter()
            .flat_map(|role| demo_conversations(*role))
            .map(|c| c.unread)
            .collect();
        assert_eq!(unread, vec![2, 0, 1, 0, 3, 0]);
    }
}
