//! Composite filters: AND, OR, NOT over child filters.
//!
//! Composites combine scoped children with truth tables that propagate
//! [`FilterResult::Neutral`] instead of inventing a decision: a composite
//! only answers `Pass` or `Fail` when at least one child did.
//!
//! | | short-circuits on | remembers | empty children |
//! |---|---|---|---|
//! | [`AndFilter`] | `Fail` | `Pass` | `Neutral` |
//! | [`OrFilter`] | `Pass` | `Fail` | `Neutral` |
//!
//! Children are owned exclusively and evaluated in the order given; the
//! composition graph is built once at configuration time and never mutated.

use sift_core::{Event, Filter, FilterResult};

/// Passes events that no child fails and at least one child passes.
///
/// Evaluation walks children in order: the first `Fail` is returned
/// immediately, a `Pass` is remembered, and `Neutral` children are skipped.
/// If every child was neutral the composite is neutral too.
pub struct AndFilter {
    filters: Vec<Box<dyn Filter>>,
}

impl AndFilter {
    /// Creates a conjunction over the given children.
    pub fn new(filters: Vec<Box<dyn Filter>>) -> Self {
        Self { filters }
    }
}

impl Filter for AndFilter {
    fn filter(&self, event: &dyn Event) -> FilterResult {
        let mut result = FilterResult::Neutral;
        for child in &self.filters {
            match child.filter(event) {
                FilterResult::Fail => return FilterResult::Fail,
                FilterResult::Pass => result = FilterResult::Pass,
                FilterResult::Neutral => {}
            }
        }
        result
    }
}

/// Passes events that any child passes.
///
/// The dual of [`AndFilter`]: the first `Pass` is returned immediately, a
/// `Fail` is remembered, and the composite fails only when at least one
/// child explicitly failed and none passed.
pub struct OrFilter {
    filters: Vec<Box<dyn Filter>>,
}

impl OrFilter {
    /// Creates a disjunction over the given children.
    pub fn new(filters: Vec<Box<dyn Filter>>) -> Self {
        Self { filters }
    }
}

impl Filter for OrFilter {
    fn filter(&self, event: &dyn Event) -> FilterResult {
        let mut result = FilterResult::Neutral;
        for child in &self.filters {
            match child.filter(event) {
                FilterResult::Pass => return FilterResult::Pass,
                FilterResult::Fail => result = FilterResult::Fail,
                FilterResult::Neutral => {}
            }
        }
        result
    }
}

/// Inverts a child filter's decision, leaving `Neutral` untouched.
pub struct NotFilter {
    filter: Box<dyn Filter>,
}

impl NotFilter {
    /// Creates a negation of the given child.
    pub fn new(filter: Box<dyn Filter>) -> Self {
        Self { filter }
    }
}

impl Filter for NotFilter {
    fn filter(&self, event: &dyn Event) -> FilterResult {
        self.filter.filter(event).invert()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use sift_core::IrcEvent;

    fn event() -> IrcEvent {
        IrcEvent::builder("PRIVMSG").build()
    }

    fn fixed(result: FilterResult) -> Box<dyn Filter> {
        Box::new(move |_: &dyn Event| result)
    }

    /// Filter that records how often it was evaluated.
    fn counting(result: FilterResult, counter: Arc<AtomicUsize>) -> Box<dyn Filter> {
        Box::new(move |_: &dyn Event| {
            counter.fetch_add(1, Ordering::SeqCst);
            result
        })
    }

    #[test]
    fn and_empty_is_neutral() {
        assert!(AndFilter::new(Vec::new()).filter(&event()).is_neutral());
    }

    #[test]
    fn and_all_pass() {
        let filter = AndFilter::new(vec![fixed(FilterResult::Pass), fixed(FilterResult::Pass)]);
        assert!(filter.filter(&event()).is_pass());
    }

    #[test]
    fn and_any_fail_wins_regardless_of_order() {
        for filters in [
            vec![fixed(FilterResult::Fail), fixed(FilterResult::Pass)],
            vec![fixed(FilterResult::Pass), fixed(FilterResult::Fail)],
            vec![fixed(FilterResult::Neutral), fixed(FilterResult::Fail)],
        ] {
            assert!(AndFilter::new(filters).filter(&event()).is_fail());
        }
    }

    #[test]
    fn and_neutral_children_defer() {
        let filter = AndFilter::new(vec![fixed(FilterResult::Neutral), fixed(FilterResult::Pass)]);
        assert!(filter.filter(&event()).is_pass());

        let filter = AndFilter::new(vec![
            fixed(FilterResult::Neutral),
            fixed(FilterResult::Neutral),
        ]);
        assert!(filter.filter(&event()).is_neutral());
    }

    #[test]
    fn and_short_circuits_after_fail() {
        let evaluations = Arc::new(AtomicUsize::new(0));
        let filter = AndFilter::new(vec![
            fixed(FilterResult::Fail),
            counting(FilterResult::Pass, evaluations.clone()),
        ]);

        assert!(filter.filter(&event()).is_fail());
        assert_eq!(evaluations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn or_empty_is_neutral() {
        assert!(OrFilter::new(Vec::new()).filter(&event()).is_neutral());
    }

    #[test]
    fn or_any_pass_wins() {
        let filter = OrFilter::new(vec![fixed(FilterResult::Fail), fixed(FilterResult::Pass)]);
        assert!(filter.filter(&event()).is_pass());
    }

    #[test]
    fn or_fails_only_when_some_child_failed() {
        let filter = OrFilter::new(vec![fixed(FilterResult::Fail), fixed(FilterResult::Neutral)]);
        assert!(filter.filter(&event()).is_fail());

        let filter = OrFilter::new(vec![
            fixed(FilterResult::Neutral),
            fixed(FilterResult::Neutral),
        ]);
        assert!(filter.filter(&event()).is_neutral());
    }

    #[test]
    fn or_short_circuits_after_pass() {
        let evaluations = Arc::new(AtomicUsize::new(0));
        let filter = OrFilter::new(vec![
            fixed(FilterResult::Pass),
            counting(FilterResult::Fail, evaluations.clone()),
        ]);

        assert!(filter.filter(&event()).is_pass());
        assert_eq!(evaluations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn not_flips_decisions_and_keeps_neutral() {
        assert!(
            NotFilter::new(fixed(FilterResult::Pass))
                .filter(&event())
                .is_fail()
        );
        assert!(
            NotFilter::new(fixed(FilterResult::Fail))
                .filter(&event())
                .is_pass()
        );
        assert!(
            NotFilter::new(fixed(FilterResult::Neutral))
                .filter(&event())
                .is_neutral()
        );
    }

    #[test]
    fn composites_nest() {
        // NOT(AND(pass, OR(fail, pass))) == NOT(pass) == fail
        let inner = OrFilter::new(vec![fixed(FilterResult::Fail), fixed(FilterResult::Pass)]);
        let conjunction = AndFilter::new(vec![fixed(FilterResult::Pass), Box::new(inner)]);
        let negated = NotFilter::new(Box::new(conjunction));
        assert!(negated.filter(&event()).is_fail());
    }
}
