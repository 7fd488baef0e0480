//! Tri-state filter abstraction.
//!
//! A [`Filter`] is a pure predicate over an event, evaluating to one of the
//! three [`FilterResult`] variants. Filters are immutable once constructed
//! and are composed into a DAG at configuration time; evaluation never
//! mutates state and never fails.

use crate::event::Event;

/// Result of evaluating a filter against one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterResult {
    /// The event should be forwarded.
    Pass,
    /// The event must be suppressed.
    Fail,
    /// The filter has no opinion; the event is outside its scope.
    Neutral,
}

impl FilterResult {
    /// Returns `true` for [`FilterResult::Pass`].
    pub fn is_pass(self) -> bool {
        self == FilterResult::Pass
    }

    /// Returns `true` for [`FilterResult::Fail`].
    pub fn is_fail(self) -> bool {
        self == FilterResult::Fail
    }

    /// Returns `true` for [`FilterResult::Neutral`].
    pub fn is_neutral(self) -> bool {
        self == FilterResult::Neutral
    }

    /// Flips `Pass` and `Fail`; `Neutral` stays `Neutral`.
    ///
    /// Negation of "no opinion" is still no opinion.
    pub fn invert(self) -> Self {
        match self {
            FilterResult::Pass => FilterResult::Fail,
            FilterResult::Fail => FilterResult::Pass,
            FilterResult::Neutral => FilterResult::Neutral,
        }
    }
}

/// A tri-state predicate over events.
///
/// Implementations must be cheap and side-effect free: a filter may be
/// evaluated once per incoming event on the hot dispatch path.
///
/// Plain closures implement `Filter`, which keeps one-off rules and test
/// doubles lightweight:
///
/// ```
/// use sift_core::{Filter, FilterResult, IrcEvent};
///
/// let only_privmsg = |event: &dyn sift_core::Event| {
///     if event.command() == "PRIVMSG" {
///         FilterResult::Pass
///     } else {
///         FilterResult::Fail
///     }
/// };
///
/// let event = IrcEvent::builder("PRIVMSG").build();
/// assert_eq!(only_privmsg.filter(&event), FilterResult::Pass);
/// ```
pub trait Filter: Send + Sync {
    /// Evaluates one event for forwarding.
    fn filter(&self, event: &dyn Event) -> FilterResult;
}

impl<F> Filter for F
where
    F: Fn(&dyn Event) -> FilterResult + Send + Sync,
{
    fn filter(&self, event: &dyn Event) -> FilterResult {
        self(event)
    }
}

impl Filter for Box<dyn Filter> {
    fn filter(&self, event: &dyn Event) -> FilterResult {
        self.as_ref().filter(event)
    }
}
