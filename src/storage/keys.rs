//! Persisted key names. Other pages of the site read the same keys, so these
//! strings are part of the external contract.

pub const THEME: &str = "tt-theme";
pub const USER_ROLE: &str = "TT_USER_ROLE";
pub const USER_NAME: &str = "TT_USER_NAME";
pub const COMPANY_NAME: &str = "TT_COMPANY_NAME";
pub const XP: &str = "TT_XP";
pub const COMPANY_CREDITS: &str = "TT_COMPANY_CREDITS";
/// JSON array of `{title, date, user}`.
pub const APPLICATIONS: &str = "TT_APPLICATIONS";
/// JSON array of `{title, location, type, date}`.
pub const POSTS: &str = "TT_POSTS";
