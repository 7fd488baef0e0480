//! Collaborator interfaces consumed by filters and handlers.
//!
//! These traits describe the two external services the core needs, reduced
//! to exactly the operations it calls. Implementations live in the
//! surrounding framework (or in test doubles).

use std::collections::HashSet;

use async_trait::async_trait;

use crate::connection::Connection;
use crate::event::Args;

/// Source of per-channel user mode information.
///
/// Backed in production by whatever tracks `MODE` state for the session;
/// the user-mode filter queries it synchronously on the dispatch path, so
/// implementations should answer from already-tracked state rather than
/// issuing protocol round-trips.
pub trait ModeProvider: Send + Sync {
    /// Returns the mode characters the given user holds in the given
    /// channel, e.g. `{'o', 'v'}`.
    ///
    /// An unknown user or channel yields an empty set.
    fn user_modes(
        &self,
        connection: Option<&Connection>,
        channel: &str,
        nick: &str,
    ) -> HashSet<char>;
}

/// Sink for events a handler wants to raise itself.
///
/// Handed to handlers that declare the emitter capability; emitting is
/// asynchronous because the surrounding framework may queue the event
/// behind in-flight dispatch.
#[async_trait]
pub trait EventEmitter: Send + Sync {
    /// Emits an event under the given routing tag.
    async fn emit(&self, name: &str, args: Args);
}
