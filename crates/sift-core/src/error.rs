//! Error types for the Sift framework.
//!
//! Construction-time validation is the only fallible surface in the core:
//! dispatch-time problems (a handler callback failing, an event carrying no
//! payload) are normal control flow, logged and contained rather than
//! surfaced as errors.

use thiserror::Error;

/// Errors raised while configuring a filter or the filter plugin.
///
/// These are fatal to construction and never recovered internally; the
/// caller fixes the configuration and retries.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// A configured channel name does not start with `#` or `&`.
    #[error("invalid channel name '{name}': channel names must start with '#' or '&'")]
    InvalidChannel {
        /// The offending channel name.
        name: String,
    },

    /// The plugin was built without any downstream handler.
    #[error("at least one downstream handler must be configured")]
    NoHandlers,

    /// The plugin was built without a top-level filter.
    #[error("a top-level filter must be configured")]
    NoFilter,
}
