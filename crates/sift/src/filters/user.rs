//! Filter on the user an event originated from.

use sift_core::{Event, Filter, FilterResult};

/// A wildcard pattern over `nick!user@host` strings.
///
/// `*` matches any run of characters, including none; everything else
/// matches literally. Matching is anchored at both ends, so `*!*@host`
/// matches `alice!ident@host` but `alice` alone does not match
/// `alice!ident@host`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    pattern: String,
}

impl Mask {
    /// Creates a mask from a pattern string.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Returns the pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Tests a candidate hostmask against this pattern.
    pub fn matches(&self, candidate: &str, caseless: bool) -> bool {
        if caseless {
            let pattern: Vec<char> = self.pattern.chars().flat_map(char::to_lowercase).collect();
            let candidate: Vec<char> = candidate.chars().flat_map(char::to_lowercase).collect();
            wildcard_match(&pattern, &candidate)
        } else {
            let pattern: Vec<char> = self.pattern.chars().collect();
            let candidate: Vec<char> = candidate.chars().collect();
            wildcard_match(&pattern, &candidate)
        }
    }
}

impl From<&str> for Mask {
    fn from(pattern: &str) -> Self {
        Mask::new(pattern)
    }
}

impl From<String> for Mask {
    fn from(pattern: String) -> Self {
        Mask::new(pattern)
    }
}

/// Iterative wildcard matcher with backtracking.
///
/// On a mismatch the matcher backtracks to the most recent `*` and lets it
/// swallow one more character, so patterns like `*@*.example.org` never
/// recurse.
fn wildcard_match(pattern: &[char], text: &[char]) -> bool {
    let mut p = 0;
    let mut t = 0;
    let mut star_p = None;
    let mut star_t = 0;

    while t < text.len() {
        if p < pattern.len() && pattern[p] != '*' && pattern[p] == text[t] {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star_p = Some(p);
            star_t = t;
            p += 1;
        } else if let Some(sp) = star_p {
            p = sp + 1;
            star_t += 1;
            t = star_t;
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }

    p == pattern.len()
}

/// Passes events originating from one of the configured user masks.
///
/// Neutral for events that are not user-scoped or carry no nickname —
/// user filtering is inapplicable, and the decision is deferred to sibling
/// filters. Otherwise the canonical `nick!username@host` string is built
/// from the event (missing username/host become empty) and tested against
/// every mask in order; the first match passes the event.
pub struct UserFilter {
    masks: Vec<Mask>,
    caseless: bool,
}

impl UserFilter {
    /// Creates a filter admitting events from users matching the given
    /// masks. `caseless` makes matching case-insensitive.
    pub fn new<I, M>(masks: I, caseless: bool) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Mask>,
    {
        Self {
            masks: masks.into_iter().map(Into::into).collect(),
            caseless,
        }
    }
}

impl Filter for UserFilter {
    fn filter(&self, event: &dyn Event) -> FilterResult {
        let Some(source) = event.source() else {
            return FilterResult::Neutral;
        };
        let Some(nick) = source.nick.as_deref() else {
            return FilterResult::Neutral;
        };

        let hostmask = format!(
            "{}!{}@{}",
            nick,
            source.username.as_deref().unwrap_or(""),
            source.host.as_deref().unwrap_or(""),
        );

        if self
            .masks
            .iter()
            .any(|mask| mask.matches(&hostmask, self.caseless))
        {
            FilterResult::Pass
        } else {
            FilterResult::Fail
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_core::{IrcEvent, UserOrigin};

    fn from_user(nick: &str, user: &str, host: &str) -> IrcEvent {
        IrcEvent::builder("PRIVMSG")
            .source(UserOrigin::new(nick, user, host))
            .build()
    }

    #[test]
    fn exact_mask_matches() {
        let filter = UserFilter::new(["nick!user@host"], false);
        assert!(filter.filter(&from_user("nick", "user", "host")).is_pass());
        assert!(filter.filter(&from_user("other", "user", "host")).is_fail());
    }

    #[test]
    fn wildcards_span_segments() {
        let filter = UserFilter::new(["*!*@*.example.org"], false);
        assert!(
            filter
                .filter(&from_user("alice", "ident", "shell.example.org"))
                .is_pass()
        );
        assert!(
            filter
                .filter(&from_user("alice", "ident", "example.com"))
                .is_fail()
        );
    }

    #[test]
    fn matching_is_anchored() {
        // The pattern must cover the whole hostmask.
        let filter = UserFilter::new(["nick"], false);
        assert!(filter.filter(&from_user("nick", "user", "host")).is_fail());
    }

    #[test]
    fn star_matches_empty_run() {
        let filter = UserFilter::new(["nick*!user@host"], false);
        assert!(filter.filter(&from_user("nick", "user", "host")).is_pass());
    }

    #[test]
    fn caseless_matching() {
        let caseless = UserFilter::new(["NICK!USER@HOST"], true);
        assert!(caseless.filter(&from_user("nick", "user", "host")).is_pass());

        let cased = UserFilter::new(["NICK!USER@HOST"], false);
        assert!(cased.filter(&from_user("nick", "user", "host")).is_fail());
    }

    #[test]
    fn first_matching_mask_wins() {
        let filter = UserFilter::new(["bob!*@*", "alice!*@*"], false);
        assert!(filter.filter(&from_user("alice", "a", "host")).is_pass());
    }

    #[test]
    fn neutral_without_user_scope() {
        let filter = UserFilter::new(["*!*@*"], false);
        let event = IrcEvent::builder("PING").build();
        assert!(filter.filter(&event).is_neutral());
    }

    #[test]
    fn neutral_without_nick() {
        let filter = UserFilter::new(["*!*@*"], false);
        let event = IrcEvent::builder("PRIVMSG")
            .source(UserOrigin::default())
            .build();
        assert!(filter.filter(&event).is_neutral());
    }

    #[test]
    fn missing_username_and_host_become_empty() {
        let filter = UserFilter::new(["alice!@"], false);
        let event = IrcEvent::builder("PRIVMSG")
            .source(UserOrigin::nick_only("alice"))
            .build();
        assert!(filter.filter(&event).is_pass());
    }
}
