//! Event model for the Sift framework.
//!
//! This module provides the core event infrastructure:
//!
//! - [`Event`] - trait describing what filters may inspect on an event
//! - [`IrcEvent`] - the concrete event type produced by protocol adapters
//! - [`Params`] / [`ParamValue`] - verb-dependent protocol parameters
//! - [`UserOrigin`] - the `nick!user@host` origin of user-scoped events
//! - [`Arg`] / [`Args`] - type-erased dispatch argument lists
//!
//! # Scoping
//!
//! An event is **user-scoped** when it originated from a user on the
//! network, in which case [`Event::source`] returns the originating
//! [`UserOrigin`]. Events raised by the server or by the framework itself
//! are not user-scoped; several filters treat them as outside their domain.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::connection::Connection;

// ============================================================================
// Parameters
// ============================================================================

/// One protocol parameter value: a bare string or a list of strings.
///
/// Which shape a parameter takes depends on the protocol verb; `PRIVMSG`
/// receivers arrive as a single comma-separated string, while an adapter may
/// hand `JOIN` channels over pre-split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A single string value, possibly comma-separated.
    One(String),
    /// A pre-split list of values.
    Many(Vec<String>),
}

impl ParamValue {
    /// Iterates over the individual values.
    ///
    /// `One` yields itself as a single item; `Many` yields each element.
    /// Comma splitting is left to the caller because not every parameter is
    /// comma-separated.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            ParamValue::One(s) => std::slice::from_ref(s).iter().map(String::as_str),
            ParamValue::Many(v) => v.as_slice().iter().map(String::as_str),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::One(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::One(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::Many(value)
    }
}

/// Mapping from parameter name to value for one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: HashMap<String, ParamValue>,
}

impl Params {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, replacing any previous value under the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Looks up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Returns `true` if no parameters are present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================================
// User origin
// ============================================================================

/// Origin of a user-scoped event, the pieces of `nick!user@host`.
///
/// All fields are optional: a server may deliver a prefix with only a
/// nickname. Filters that need a nickname treat its absence as "not
/// applicable" rather than as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserOrigin {
    /// Nickname of the originating user.
    pub nick: Option<String>,
    /// Username (ident) of the originating user.
    pub username: Option<String>,
    /// Hostname of the originating user.
    pub host: Option<String>,
}

impl UserOrigin {
    /// Creates an origin with all three fields set.
    pub fn new(
        nick: impl Into<String>,
        username: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            nick: Some(nick.into()),
            username: Some(username.into()),
            host: Some(host.into()),
        }
    }

    /// Creates an origin carrying only a nickname.
    pub fn nick_only(nick: impl Into<String>) -> Self {
        Self {
            nick: Some(nick.into()),
            ..Self::default()
        }
    }
}

// ============================================================================
// Core event trait
// ============================================================================

/// The attributes filters may inspect on an incoming event.
///
/// Events are type-erased during dispatch (`dyn Event`) and can be downcast
/// to concrete types via [`as_any`](Event::as_any). The trait is read-only:
/// filters are pure predicates and never mutate the events they judge.
pub trait Event: Send + Sync {
    /// Routing tag used to look up subscribed callbacks, e.g.
    /// `irc.received.privmsg`. Distinct from the protocol verb.
    fn name(&self) -> &str;

    /// Protocol verb, e.g. `PRIVMSG` or `JOIN`.
    fn command(&self) -> &str;

    /// Verb-dependent protocol parameters.
    fn params(&self) -> &Params;

    /// The session this event arrived on, if any.
    fn connection(&self) -> Option<&Connection>;

    /// The originating user. `Some` if and only if the event is user-scoped.
    fn source(&self) -> Option<&UserOrigin>;

    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

// ============================================================================
// Concrete event
// ============================================================================

/// A concrete protocol event, built by adapters and by tests.
///
/// Construct via [`IrcEvent::builder`]:
///
/// ```
/// use sift_core::event::{Event, IrcEvent, UserOrigin};
///
/// let event = IrcEvent::builder("PRIVMSG")
///     .param("receivers", "#rust,#irc")
///     .source(UserOrigin::new("alice", "alice", "host.example.org"))
///     .build();
///
/// assert_eq!(event.name(), "irc.received.privmsg");
/// assert!(event.source().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct IrcEvent {
    name: String,
    command: String,
    params: Params,
    connection: Option<Connection>,
    source: Option<UserOrigin>,
}

impl IrcEvent {
    /// Starts building an event for the given protocol verb.
    ///
    /// The routing tag defaults to `irc.received.<verb>` with the verb
    /// lowercased; override it with [`IrcEventBuilder::name`].
    pub fn builder(command: impl Into<String>) -> IrcEventBuilder {
        let command = command.into();
        IrcEventBuilder {
            name: format!("irc.received.{}", command.to_lowercase()),
            command,
            params: Params::new(),
            connection: None,
            source: None,
        }
    }
}

impl Event for IrcEvent {
    fn name(&self) -> &str {
        &self.name
    }

    fn command(&self) -> &str {
        &self.command
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn connection(&self) -> Option<&Connection> {
        self.connection.as_ref()
    }

    fn source(&self) -> Option<&UserOrigin> {
        self.source.as_ref()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Builder for [`IrcEvent`].
#[derive(Debug, Clone)]
pub struct IrcEventBuilder {
    name: String,
    command: String,
    params: Params,
    connection: Option<Connection>,
    source: Option<UserOrigin>,
}

impl IrcEventBuilder {
    /// Overrides the routing tag derived from the verb.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds one protocol parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.set(name, value);
        self
    }

    /// Sets the session the event arrived on.
    pub fn connection(mut self, connection: Connection) -> Self {
        self.connection = Some(connection);
        self
    }

    /// Marks the event as user-scoped with the given origin.
    pub fn source(mut self, source: UserOrigin) -> Self {
        self.source = Some(source);
        self
    }

    /// Finalizes the event.
    pub fn build(self) -> IrcEvent {
        IrcEvent {
            name: self.name,
            command: self.command,
            params: self.params,
            connection: self.connection,
            source: self.source,
        }
    }
}

// ============================================================================
// Dispatch arguments
// ============================================================================

/// One type-erased dispatch argument.
///
/// Event sources invoke subscribed callbacks with a heterogeneous argument
/// list; an `Arg` either carries an event payload, queryable via
/// [`as_event`](Arg::as_event), or an arbitrary value that callbacks can
/// [`downcast_ref`](Arg::downcast_ref) back to its concrete type.
#[derive(Clone)]
pub struct Arg {
    value: Arc<dyn Any + Send + Sync>,
    event: Option<Arc<dyn Event>>,
}

impl Arg {
    /// Wraps an event payload.
    pub fn event<E: Event + 'static>(event: E) -> Self {
        let event = Arc::new(event);
        Self {
            value: event.clone(),
            event: Some(event),
        }
    }

    /// Wraps an arbitrary non-event value.
    pub fn value<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            event: None,
        }
    }

    /// Returns the event payload, if this argument carries one.
    pub fn as_event(&self) -> Option<&dyn Event> {
        self.event.as_deref()
    }

    /// Attempts to downcast the argument to a concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }
}

impl std::fmt::Debug for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.event {
            Some(event) => f.debug_tuple("Arg::Event").field(&event.name()).finish(),
            None => f.write_str("Arg::Value"),
        }
    }
}

/// The full argument list handed to a dispatch callback.
///
/// Shared rather than cloned so that forwarding preserves the original
/// arguments by identity.
pub type Args = Arc<[Arg]>;

/// Builds an [`Args`] list from individual arguments.
pub fn args(list: impl IntoIterator<Item = Arg>) -> Args {
    list.into_iter().collect()
}
