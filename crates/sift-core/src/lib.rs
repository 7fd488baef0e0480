//! # Sift Core
//!
//! Foundation types for the Sift event filtering framework.
//!
//! This crate defines the vocabulary shared by filters, routers, and the
//! surrounding bot framework:
//!
//! - **Event model**: the [`Event`] trait, the concrete [`IrcEvent`], and
//!   type-erased dispatch arguments ([`Arg`], [`Args`])
//! - **Filter abstraction**: the tri-state [`FilterResult`] and the
//!   [`Filter`] trait
//! - **Connection identity**: the opaque [`Connection`] handle, compared by
//!   identity rather than value
//! - **Collaborator interfaces**: [`ModeProvider`] and [`EventEmitter`]
//! - **Error taxonomy**: [`ConfigError`] for construction-time validation
//!
//! ## Tri-state filtering
//!
//! Filters are *scoped* predicates: a channel filter has no opinion about an
//! event that never mentions a channel. Forcing every filter to answer
//! yes/no for events outside its domain would silently block or admit events
//! it was never meant to judge, so a filter evaluates to one of three
//! results:
//!
//! ```text
//! Pass    — forward the event
//! Fail    — suppress the event
//! Neutral — this filter does not apply; defer to siblings
//! ```
//!
//! Composite filters in the `sift` crate combine these results with
//! AND/OR/NOT semantics that propagate `Neutral` instead of inventing a
//! decision.

pub mod connection;
pub mod error;
pub mod event;
pub mod filter;
pub mod provider;

pub use connection::Connection;
pub use error::ConfigError;
pub use event::{Arg, Args, Event, IrcEvent, IrcEventBuilder, ParamValue, Params, UserOrigin};
pub use filter::{Filter, FilterResult};
pub use provider::{EventEmitter, ModeProvider};

/// Prelude for common imports.
pub mod prelude {
    pub use super::connection::Connection;
    pub use super::error::ConfigError;
    pub use super::event::{Arg, Args, Event, IrcEvent, Params, UserOrigin};
    pub use super::filter::{Filter, FilterResult};
    pub use super::provider::{EventEmitter, ModeProvider};
}
