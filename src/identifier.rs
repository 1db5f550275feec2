use std::sync::LazyLock;

use regex::Regex;

use crate::schema::UserId;

static USER_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)AADI-\d+").expect("user id pattern is valid"));

pub(crate) static USER_ID_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^AADI-\d+$").expect("user id pattern is valid"));

/// Finds the first `AADI-<digits>` identifier in free text, in any case, and
/// returns it uppercased.
pub fn find_user_id(text: &str) -> Option<UserId> {
    USER_ID_PATTERN
        .find(text)
        .map(|m| UserId::from_match(m.as_str()))
}
