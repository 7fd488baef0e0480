//! Filter on the session an event arrived on.

use sift_core::{Connection, Event, Filter, FilterResult};

/// Passes events arriving on one of the configured sessions.
///
/// Comparison is by session identity, never by label. This filter always
/// has an opinion: an event without a session handle fails, since it cannot
/// have arrived on any configured session.
pub struct ConnectionFilter {
    connections: Vec<Connection>,
}

impl ConnectionFilter {
    /// Creates a filter admitting events from the given sessions.
    pub fn new(connections: impl IntoIterator<Item = Connection>) -> Self {
        Self {
            connections: connections.into_iter().collect(),
        }
    }
}

impl Filter for ConnectionFilter {
    fn filter(&self, event: &dyn Event) -> FilterResult {
        let matched = event
            .connection()
            .is_some_and(|conn| self.connections.iter().any(|known| known.same_as(conn)));
        if matched {
            FilterResult::Pass
        } else {
            FilterResult::Fail
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_core::IrcEvent;

    #[test]
    fn passes_configured_connection() {
        let conn = Connection::new("libera");
        let filter = ConnectionFilter::new([conn.clone()]);
        let event = IrcEvent::builder("PRIVMSG").connection(conn).build();
        assert!(filter.filter(&event).is_pass());
    }

    #[test]
    fn fails_other_connection_with_same_label() {
        let filter = ConnectionFilter::new([Connection::new("libera")]);
        let event = IrcEvent::builder("PRIVMSG")
            .connection(Connection::new("libera"))
            .build();
        assert!(filter.filter(&event).is_fail());
    }

    #[test]
    fn fails_event_without_connection() {
        let filter = ConnectionFilter::new([Connection::new("libera")]);
        let event = IrcEvent::builder("PRIVMSG").build();
        assert!(filter.filter(&event).is_fail());
    }

    #[test]
    fn passes_any_of_several_connections() {
        let a = Connection::new("a");
        let b = Connection::new("b");
        let filter = ConnectionFilter::new([a, b.clone()]);
        let event = IrcEvent::builder("JOIN").connection(b).build();
        assert!(filter.filter(&event).is_pass());
    }
}
