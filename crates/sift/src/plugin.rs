//! The event filter plugin: one filter in front of many handlers.
//!
//! [`FilterPlugin`] wraps an ordered set of downstream [`Handler`]s behind a
//! single top-level [`Filter`]. To the surrounding event source it looks
//! like one ordinary handler: its [`subscriptions`](Handler::subscriptions)
//! derive one routing entry per distinct tag its handlers want, and every
//! entry funnels into [`handle_event`](FilterPlugin::handle_event), which
//! applies the filter exactly once and fans passing events out.
//!
//! # Dispatch contract
//!
//! - The filter judges the first event payload found in the argument list.
//!   An event carrying no payload is forwarded unfiltered: filtering is
//!   inapplicable there, not a rejection.
//! - A `Fail` verdict suppresses the event with a debug log entry; `Pass`
//!   and `Neutral` forward it.
//! - Handlers run in registration order with the original argument list.
//!   Their subscriptions are re-queried at dispatch time, never served from
//!   a cache, so handlers may change their interests between events.
//! - A failing callback is logged and skipped; it never prevents the
//!   remaining handlers from running.
//!
//! # Example
//!
//! ```
//! use sift::{FilterPlugin, filters::ChannelFilter};
//! # use sift::{Handler, Subscriptions};
//! # struct Echo;
//! # impl Handler for Echo {
//! #     fn name(&self) -> &str { "echo" }
//! #     fn subscriptions(&self) -> Subscriptions {
//! #         Subscriptions::new().on("irc.received.privmsg", |_| async { Ok(()) })
//! #     }
//! # }
//!
//! let plugin = FilterPlugin::builder()
//!     .handler(Echo)
//!     .filter(ChannelFilter::new(["#rust"])?)
//!     .build()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use sift_core::{Args, ConfigError, Connection, EventEmitter, Filter, FilterResult};

use crate::capability::{ConnectionAware, EmitterAware};
use crate::handler::{EventCallback, Handler, Subscriptions};

struct PluginInner {
    handlers: Vec<Arc<dyn Handler>>,
    filter: Box<dyn Filter>,
}

/// Filters incoming events and routes the survivors to downstream handlers.
///
/// Cheap to clone; clones share the handler list and filter.
#[derive(Clone)]
pub struct FilterPlugin {
    inner: Arc<PluginInner>,
}

impl FilterPlugin {
    /// Starts building a plugin.
    pub fn builder() -> FilterPluginBuilder {
        FilterPluginBuilder::default()
    }

    /// Returns the number of downstream handlers.
    pub fn handler_count(&self) -> usize {
        self.inner.handlers.len()
    }

    /// Applies the filter to the event found in `args` and forwards passing
    /// events to every downstream handler subscribed to `event_name`.
    ///
    /// This is the dispatch target of every routing entry the plugin
    /// registers; event sources normally reach it through the callbacks in
    /// [`subscriptions`](Handler::subscriptions) rather than directly.
    pub async fn handle_event(&self, event_name: &str, args: Args) {
        match args.iter().find_map(|arg| arg.as_event()) {
            None => {
                // Custom framework events carry no payload to judge;
                // filtering is inapplicable, so they pass through.
                debug!(event = event_name, "no event payload, forwarding unfiltered");
            }
            Some(event) => {
                if self.inner.filter.filter(event) == FilterResult::Fail {
                    debug!(event = event_name, "event suppressed by filter");
                    return;
                }
            }
        }

        for handler in &self.inner.handlers {
            // Re-resolve against the handler's *current* declaration; a
            // cached callback could be stale if the handler changed its
            // subscriptions since registration.
            let subscriptions = handler.subscriptions();
            let Some(callback) = subscriptions.get(event_name) else {
                trace!(
                    handler = handler.name(),
                    event = event_name,
                    "handler not subscribed, skipping"
                );
                continue;
            };

            trace!(
                handler = handler.name(),
                event = event_name,
                "forwarding event"
            );
            if let Err(error) = callback(args.clone()).await {
                warn!(
                    handler = handler.name(),
                    event = event_name,
                    error = %error,
                    "handler callback failed"
                );
            }
        }
    }
}

impl Handler for FilterPlugin {
    fn name(&self) -> &str {
        "sift.filter"
    }

    /// Derives the plugin's own routing entries from its handlers.
    ///
    /// Each distinct tag any handler declares gets exactly one entry, no
    /// matter how many handlers want it; the entry dispatches into
    /// [`handle_event`](FilterPlugin::handle_event).
    fn subscriptions(&self) -> Subscriptions {
        let mut seen = HashSet::new();
        let mut subscriptions = Subscriptions::new();

        for handler in &self.inner.handlers {
            for tag in handler.subscriptions().names() {
                if !seen.insert(tag.to_owned()) {
                    continue;
                }

                let plugin = self.clone();
                let event = tag.to_owned();
                let callback: EventCallback = Arc::new(move |args| {
                    let plugin = plugin.clone();
                    let event = event.clone();
                    Box::pin(async move {
                        plugin.handle_event(&event, args).await;
                        Ok(())
                    })
                });
                subscriptions = subscriptions.on_callback(tag, callback);
            }
        }

        subscriptions
    }

    fn as_connection_aware(&self) -> Option<&dyn ConnectionAware> {
        Some(self)
    }

    fn as_emitter_aware(&self) -> Option<&dyn EmitterAware> {
        Some(self)
    }
}

impl ConnectionAware for FilterPlugin {
    fn set_connection(&self, connection: Connection) {
        for handler in &self.inner.handlers {
            if let Some(aware) = handler.as_connection_aware() {
                aware.set_connection(connection.clone());
            }
        }
    }
}

impl EmitterAware for FilterPlugin {
    fn set_emitter(&self, emitter: Arc<dyn EventEmitter>) {
        for handler in &self.inner.handlers {
            if let Some(aware) = handler.as_emitter_aware() {
                aware.set_emitter(emitter.clone());
            }
        }
    }
}

impl std::fmt::Debug for FilterPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterPlugin")
            .field("handler_count", &self.inner.handlers.len())
            .finish()
    }
}

/// Builder for [`FilterPlugin`].
#[derive(Default)]
pub struct FilterPluginBuilder {
    handlers: Vec<Arc<dyn Handler>>,
    filter: Option<Box<dyn Filter>>,
}

impl FilterPluginBuilder {
    /// Appends a downstream handler. Handlers are invoked in the order they
    /// are added.
    pub fn handler<H: Handler + 'static>(self, handler: H) -> Self {
        self.handler_arc(Arc::new(handler))
    }

    /// Appends an already-shared downstream handler.
    pub fn handler_arc(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Sets the top-level filter applied to every incoming event.
    pub fn filter<F: Filter + 'static>(mut self, filter: F) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Finalizes the plugin.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoHandlers`] without at least one handler,
    /// [`ConfigError::NoFilter`] without a filter.
    pub fn build(self) -> Result<FilterPlugin, ConfigError> {
        if self.handlers.is_empty() {
            return Err(ConfigError::NoHandlers);
        }
        let filter = self.filter.ok_or(ConfigError::NoFilter)?;

        Ok(FilterPlugin {
            inner: Arc::new(PluginInner {
                handlers: self.handlers,
                filter,
            }),
        })
    }
}
