//! Filter on the channel(s) an event concerns.

use sift_core::{ConfigError, Event, Filter, FilterResult};

/// Name of the parameter carrying channel names for a given protocol verb.
///
/// Verbs outside this table are treated as carrying no channels.
fn channel_param(command: &str) -> Option<&'static str> {
    Some(match command {
        "JOIN" | "PART" => "channels",
        "MODE" => "target",
        "TOPIC" | "KICK" => "channel",
        "PRIVMSG" => "receivers",
        _ => return None,
    })
}

/// Extracts the channel names a user-scoped event concerns.
///
/// Looks up the verb's channel-bearing parameter, splits each value on
/// commas, and keeps only tokens that name a channel (`#`/`&` prefix) —
/// a `PRIVMSG` to `alice,#rust` yields just `#rust`, and a user-mode
/// change (`MODE` targeting a nick) yields nothing.
pub(crate) fn event_channels(event: &dyn Event) -> Vec<String> {
    let Some(param) = channel_param(event.command()) else {
        return Vec::new();
    };
    let Some(value) = event.params().get(param) else {
        return Vec::new();
    };
    value
        .iter()
        .flat_map(|v| v.split(','))
        .filter(|token| token.starts_with(['#', '&']))
        .map(str::to_owned)
        .collect()
}

/// Passes events that are not channel-specific or that concern one of the
/// configured channels.
///
/// Events that are not user-scoped (server notices, pings, framework
/// events) pass unconditionally: channel filtering is inapplicable to them.
/// User-scoped events pass when the channels they concern intersect the
/// configured list, and fail otherwise — including events whose verb
/// carries no channel at all.
#[derive(Debug)]
pub struct ChannelFilter {
    channels: Vec<String>,
}

impl ChannelFilter {
    /// Creates a filter admitting events from the given channels.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidChannel`] if a name does not start with `#`
    /// or `&`.
    pub fn new<I, S>(channels: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let channels: Vec<String> = channels.into_iter().map(Into::into).collect();
        for name in &channels {
            if !name.starts_with(['#', '&']) {
                return Err(ConfigError::InvalidChannel { name: name.clone() });
            }
        }
        Ok(Self { channels })
    }
}

impl Filter for ChannelFilter {
    fn filter(&self, event: &dyn Event) -> FilterResult {
        if event.source().is_none() {
            return FilterResult::Pass;
        }

        let overlaps = event_channels(event)
            .iter()
            .any(|chan| self.channels.iter().any(|known| known == chan));
        if overlaps {
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

    fn privmsg(receivers: &str) -> IrcEvent {
        IrcEvent::builder("PRIVMSG")
            .param("receivers", receivers)
            .source(UserOrigin::new("alice", "alice", "example.org"))
            .build()
    }

    #[test]
    fn rejects_invalid_channel_names() {
        let err = ChannelFilter::new(["#ok", "bad"]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidChannel { name } if name == "bad"));
    }

    #[test]
    fn accepts_hash_and_ampersand_prefixes() {
        assert!(ChannelFilter::new(["#rust", "&local"]).is_ok());
    }

    #[test]
    fn passes_on_channel_intersection() {
        let filter = ChannelFilter::new(["#a"]).unwrap();
        assert!(filter.filter(&privmsg("#a,#b")).is_pass());
    }

    #[test]
    fn fails_without_intersection() {
        let filter = ChannelFilter::new(["#a"]).unwrap();
        assert!(filter.filter(&privmsg("#c")).is_fail());
    }

    #[test]
    fn passes_non_user_scoped_events() {
        let filter = ChannelFilter::new(["#a"]).unwrap();
        let event = IrcEvent::builder("PING").build();
        assert!(filter.filter(&event).is_pass());
    }

    #[test]
    fn fails_user_scoped_event_with_unknown_verb() {
        let filter = ChannelFilter::new(["#a"]).unwrap();
        let event = IrcEvent::builder("NICK")
            .source(UserOrigin::new("alice", "alice", "example.org"))
            .build();
        assert!(filter.filter(&event).is_fail());
    }

    #[test]
    fn ignores_non_channel_receivers() {
        let filter = ChannelFilter::new(["#a"]).unwrap();
        // Direct message mixed in with a channel message.
        assert!(filter.filter(&privmsg("bob,#a")).is_pass());
        assert!(filter.filter(&privmsg("bob")).is_fail());
    }

    #[test]
    fn user_mode_change_carries_no_channel() {
        let filter = ChannelFilter::new(["#a"]).unwrap();
        let event = IrcEvent::builder("MODE")
            .param("target", "alice")
            .source(UserOrigin::new("alice", "alice", "example.org"))
            .build();
        assert!(filter.filter(&event).is_fail());
    }

    #[test]
    fn pre_split_channel_lists_work() {
        let filter = ChannelFilter::new(["#b"]).unwrap();
        let event = IrcEvent::builder("JOIN")
            .param("channels", vec!["#a".to_owned(), "#b".to_owned()])
            .source(UserOrigin::new("alice", "alice", "example.org"))
            .build();
        assert!(filter.filter(&event).is_pass());
    }
}
