//! Atomic and composite event filters.
//!
//! Atomic filters inspect one attribute of an event — its session, channel,
//! originating user, or that user's channel modes. Composite filters combine
//! children with tri-state AND/OR/NOT semantics.
//!
//! # Example
//!
//! ```
//! use sift::filters::{self, ChannelFilter, UserFilter};
//!
//! // Events from #rust, unless they come from a known noise-bot.
//! let filter = filters::all(vec![
//!     Box::new(ChannelFilter::new(["#rust"])?),
//!     Box::new(filters::not(UserFilter::new(["noisebot!*@*"], true))),
//! ]);
//! # Ok::<(), sift_core::ConfigError>(())
//! ```

pub mod channel;
pub mod composite;
pub mod connection;
pub mod user;
pub mod usermode;

pub use channel::ChannelFilter;
pub use composite::{AndFilter, NotFilter, OrFilter};
pub use connection::ConnectionFilter;
pub use user::{Mask, UserFilter};
pub use usermode::UserModeFilter;

use sift_core::Filter;

/// Conjunction of the given filters; see [`AndFilter`].
pub fn all(filters: Vec<Box<dyn Filter>>) -> AndFilter {
    AndFilter::new(filters)
}

/// Disjunction of the given filters; see [`OrFilter`].
pub fn any(filters: Vec<Box<dyn Filter>>) -> OrFilter {
    OrFilter::new(filters)
}

/// Negation of the given filter; see [`NotFilter`].
pub fn not<F: Filter + 'static>(filter: F) -> NotFilter {
    NotFilter::new(Box::new(filter))
}
