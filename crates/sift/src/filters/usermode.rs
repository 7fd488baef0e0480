//! Filter on the channel modes held by the originating user.

use std::sync::Arc;

use sift_core::{Event, Filter, FilterResult, ModeProvider};

use super::channel::event_channels;

/// Passes events from users holding one of the configured channel modes.
///
/// For each channel the event concerns, the [`ModeProvider`] is asked which
/// modes the originating user holds there; the event passes as soon as any
/// channel yields a mode in the configured set.
///
/// Neutral when mode filtering is inapplicable: the event is not
/// user-scoped, concerns no channel, or carries no nickname.
pub struct UserModeFilter {
    provider: Arc<dyn ModeProvider>,
    modes: Vec<char>,
}

impl UserModeFilter {
    /// Creates a filter admitting events from users holding any of the
    /// given mode characters (e.g. `['o', 'v']`).
    pub fn new(provider: Arc<dyn ModeProvider>, modes: impl IntoIterator<Item = char>) -> Self {
        Self {
            provider,
            modes: modes.into_iter().collect(),
        }
    }
}

impl Filter for UserModeFilter {
    fn filter(&self, event: &dyn Event) -> FilterResult {
        let Some(source) = event.source() else {
            return FilterResult::Neutral;
        };
        let channels = event_channels(event);
        let Some(nick) = source.nick.as_deref() else {
            return FilterResult::Neutral;
        };
        if channels.is_empty() {
            return FilterResult::Neutral;
        }

        for channel in &channels {
            let held = self.provider.user_modes(event.connection(), channel, nick);
            if self.modes.iter().any(|mode| held.contains(mode)) {
                return FilterResult::Pass;
            }
        }
        FilterResult::Fail
    }
}
