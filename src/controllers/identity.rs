use crate::common::ViewRole;

use super::dataset::OPERATOR_COMPANY;

const DEMO_USER: &str = "Sfiso Tshotwane";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityContext {
    Interview,
    Messaging,
}

/// Header line naming who the viewer is acting as.
pub fn viewer_identity(role: ViewRole, context: IdentityContext) -> String {
    let verb = match context {
        IdentityContext::Interview => "joining",
        IdentityContext::Messaging => "chatting",
    };
    let who = match role {
        ViewRole::Company => OPERATOR_COMPANY,
        ViewRole::Candidate | ViewRole::Freelancer => DEMO_USER,
    };
    format!("You are {verb} as: {} — {who}", role.title())
}

pub fn view_pill(role: ViewRole, context: IdentityContext) -> String {
    match context {
        IdentityContext::Interview => format!("{} View", role.title()),
        IdentityContext::Messaging => format!("{} Messaging", role.title()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_lines() {
        assert_eq!(
            viewer_identity(ViewRole::Company, IdentityContext::Interview),
            "You are joining as: Company — TalentTrack Labs"
        );
        assert_eq!(
            viewer_identity(ViewRole::Freelancer, IdentityContext::Messaging),
            "You are chatting as: Freelancer — Sfiso Tshotwane"
        );
        assert_eq!(
            viewer_identity(ViewRole::from_token(Some("nobody")), IdentityContext::Interview),
            "You are joining as: Candidate — Sfiso Tshotwane"
        );
    }

    #[test]
    fn pills() {
        assert_eq!(view_pill(ViewRole::Company, IdentityContext::Interview), "Company View");
        assert_eq!(
            view_pill(ViewRole::Candidate, IdentityContext::Messaging),
            "Candidate Messaging"
        );
    }
}
