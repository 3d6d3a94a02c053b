use super::types::ViewRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    InterviewRoom,
    Messaging,
    Jobs,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::InterviewRoom, Page::Messaging, Page::Jobs];

    fn from_path(path: &str) -> Option<Self> {
        let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
        let stem = file.strip_suffix(".html").unwrap_or(file);
        match stem {
            "interview-room" | "interviews" => Some(Page::InterviewRoom),
            "messaging" | "messages" => Some(Page::Messaging),
            "jobs" => Some(Page::Jobs),
            _ => None,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Page::InterviewRoom => "interview-room.html",
            Page::Messaging => "messaging.html",
            Page::Jobs => "jobs.html",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::InterviewRoom => "Interview Room",
            Page::Messaging => "Messages",
            Page::Jobs => "Jobs",
        }
    }
}

/// A page plus its `view` query parameter, e.g. `messaging.html?view=company`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub page: Page,
    pub view: ViewRole,
}

impl Location {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (path, query) = match input.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (input, None),
        };

        let page = if path.is_empty() {
            Page::default()
        } else {
            Page::from_path(path).unwrap_or_else(|| {
                log::warn!("Unknown page `{path}`; opening the interview room");
                Page::default()
            })
        };

        let view = ViewRole::from_token(query.and_then(|q| query_param(q, "view")));
        Self { page, view }
    }

    pub fn to_href(self) -> String {
        format!("{}?view={}", self.page.file_name(), self.view.token())
    }
}

fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    let query = query.split('#').next().unwrap_or(query);
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == name).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_and_view() {
        let loc = Location::parse("messaging.html?view=company");
        assert_eq!(loc.page, Page::Messaging);
        assert_eq!(loc.view, ViewRole::Company);

        let loc = Location::parse("site/interview-room.html?lang=en&view=freelancer#top");
        assert_eq!(loc.page, Page::InterviewRoom);
        assert_eq!(loc.view, ViewRole::Freelancer);
    }

    #[test]
    fn missing_or_invalid_view_defaults_to_candidate() {
        assert_eq!(Location::parse("messaging.html").view, ViewRole::Candidate);
        assert_eq!(Location::parse("messaging.html?view=admin").view, ViewRole::Candidate);
        assert_eq!(Location::parse("messaging.html?view").view, ViewRole::Candidate);
    }

    #[test]
    fn href_round_trips() {
        let loc = Location {
            page: Page::Jobs,
            view: ViewRole::Freelancer,
        };
        assert_eq!(loc.to_href(), "jobs.html?view=freelancer");
        assert_eq!(Location::parse(&loc.to_href()), loc);
    }
}
