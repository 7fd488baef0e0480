//! Downstream handler interface.
//!
//! A [`Handler`] is one unit of downstream behaviour: it declares which
//! routing tags it wants via [`subscriptions`](Handler::subscriptions) and
//! receives the full dispatch argument list for each forwarded event.
//!
//! The router queries `subscriptions()` **per dispatch** rather than caching
//! the result, so a handler whose interests change at runtime is always
//! invoked per its current declaration.
//!
//! # Example
//!
//! ```
//! use sift::{Handler, Subscriptions};
//!
//! struct Greeter;
//!
//! impl Handler for Greeter {
//!     fn name(&self) -> &str {
//!         "greeter"
//!     }
//!
//!     fn subscriptions(&self) -> Subscriptions {
//!         Subscriptions::new().on("irc.received.join", |_args| async { Ok(()) })
//!     }
//! }
//! ```

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;

use sift_core::Args;

use crate::capability::{ConnectionAware, EmitterAware};

/// Type-erased error returned by a handler callback.
///
/// Callback errors are contained by the router: logged at warn level and
/// never propagated to sibling handlers or to the event source.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A boxed async callback invoked with the full dispatch argument list.
pub type EventCallback = Arc<dyn Fn(Args) -> BoxFuture<'static, Result<(), BoxError>> + Send + Sync>;

/// A handler's declared mapping from routing tag to callback.
///
/// Declaration order is preserved; when the same tag is declared twice the
/// first entry wins on lookup.
#[derive(Clone, Default)]
pub struct Subscriptions {
    entries: Vec<(String, EventCallback)>,
}

impl Subscriptions {
    /// Creates an empty subscription map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares interest in a routing tag with an async callback.
    pub fn on<F, Fut>(mut self, event: impl Into<String>, callback: F) -> Self
    where
        F: Fn(Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), BoxError>> + Send + 'static,
    {
        self.entries
            .push((event.into(), Arc::new(move |args| Box::pin(callback(args)))));
        self
    }

    /// Declares interest with a pre-built boxed callback.
    pub fn on_callback(mut self, event: impl Into<String>, callback: EventCallback) -> Self {
        self.entries.push((event.into(), callback));
        self
    }

    /// Resolves the callback for a routing tag, if declared.
    pub fn get(&self, event: &str) -> Option<&EventCallback> {
        self.entries
            .iter()
            .find(|(name, _)| name == event)
            .map(|(_, callback)| callback)
    }

    /// Iterates over the declared routing tags in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the number of declared entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Subscriptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(name, _)| name))
            .finish()
    }
}

/// A downstream unit of behaviour that declares interest in named events.
///
/// Handlers also expose optional capabilities through the `as_*` accessors;
/// the default implementations declare no support. The router forwards each
/// capability provider it receives to every handler that declares the
/// matching capability.
pub trait Handler: Send + Sync {
    /// Display name used in log output.
    fn name(&self) -> &str;

    /// The handler's current routing-tag → callback declaration.
    ///
    /// Called once per registration pass *and* once per dispatch; keep it
    /// cheap.
    fn subscriptions(&self) -> Subscriptions;

    /// Declares the connection capability, if supported.
    fn as_connection_aware(&self) -> Option<&dyn ConnectionAware> {
        None
    }

    /// Declares the emitter capability, if supported.
    fn as_emitter_aware(&self) -> Option<&dyn EmitterAware> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_preserved() {
        let subs = Subscriptions::new()
            .on("b", |_| async { Ok(()) })
            .on("a", |_| async { Ok(()) });
        assert_eq!(subs.names().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn first_declaration_wins_on_lookup() {
        let subs = Subscriptions::new()
            .on("dup", |_| async { Ok(()) })
            .on("dup", |_| async { Err("second".into()) });

        let callback = subs.get("dup").expect("declared");
        let result = futures::executor::block_on(callback(sift_core::event::args([])));
        assert!(result.is_ok());
    }

    #[test]
    fn missing_tag_resolves_to_none() {
        assert!(Subscriptions::new().get("absent").is_none());
    }
}
