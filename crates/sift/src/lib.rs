//! # Sift
//!
//! Tri-state event filtering and routing for IRC bot plugins.
//!
//! Sift sits between an event source (the bot framework's protocol session)
//! and a set of downstream handlers, deciding per event whether the
//! handlers get to see it. Decisions come from composable [`Filter`]s and
//! delivery from the [`FilterPlugin`] router.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────┐
//! │ Event source │────▶│ FilterPlugin │────▶│  Handler  │
//! │  (session)   │     │  (1 filter)  │────▶│  Handler  │
//! └──────────────┘     └──────────────┘────▶│  Handler  │
//!                                           └───────────┘
//! ```
//!
//! - **Atomic filters** ([`filters::ConnectionFilter`],
//!   [`filters::ChannelFilter`], [`filters::UserFilter`],
//!   [`filters::UserModeFilter`]) each judge one event attribute.
//! - **Composite filters** ([`filters::AndFilter`], [`filters::OrFilter`],
//!   [`filters::NotFilter`]) combine children with tri-state logic:
//!   a filter outside its domain answers `Neutral` and defers to siblings
//!   instead of fabricating a yes/no.
//! - **[`FilterPlugin`]** aggregates handler subscriptions, applies the
//!   configured filter exactly once per event, and fans passing events out
//!   to every interested handler.
//!
//! ## Example
//!
//! ```
//! use sift::{FilterPlugin, Handler, Subscriptions, filters};
//!
//! struct Logger;
//!
//! impl Handler for Logger {
//!     fn name(&self) -> &str {
//!         "logger"
//!     }
//!
//!     fn subscriptions(&self) -> Subscriptions {
//!         Subscriptions::new().on("irc.received.privmsg", |_args| async { Ok(()) })
//!     }
//! }
//!
//! // Only messages in #rust, except those from the noise-bot.
//! let plugin = FilterPlugin::builder()
//!     .handler(Logger)
//!     .filter(filters::all(vec![
//!         Box::new(filters::ChannelFilter::new(["#rust"])?),
//!         Box::new(filters::not(filters::UserFilter::new(
//!             ["noisebot!*@*"],
//!             true,
//!         ))),
//!     ]))
//!     .build()?;
//! # let _ = plugin;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod capability;
pub mod filters;
pub mod handler;
pub mod plugin;

pub use capability::{ConnectionAware, EmitterAware};
pub use handler::{BoxError, EventCallback, Handler, Subscriptions};
pub use plugin::{FilterPlugin, FilterPluginBuilder};

// Foundation types, re-exported for convenience.
pub use sift_core::{
    Arg, Args, ConfigError, Connection, Event, EventEmitter, Filter, FilterResult, IrcEvent,
    ModeProvider, Params, UserOrigin,
};

/// Prelude for common imports.
pub mod prelude {
    pub use super::filters::{
        AndFilter, ChannelFilter, ConnectionFilter, Mask, NotFilter, OrFilter, UserFilter,
        UserModeFilter,
    };
    pub use super::handler::{Handler, Subscriptions};
    pub use super::plugin::FilterPlugin;
    pub use sift_core::prelude::*;
}
