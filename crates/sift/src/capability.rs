//! Optional handler capabilities.
//!
//! The surrounding framework wires providers (the session handle, an event
//! emitter) into whichever components want them. Rather than a deep
//! inheritance hierarchy, each injectable provider gets its own small trait
//! and handlers opt in through the `as_*` accessors on
//! [`Handler`](crate::handler::Handler).
//!
//! The filter plugin implements every capability itself and fans each
//! received provider out to its downstream handlers, so a handler wrapped by
//! the plugin is wired identically to one registered with the framework
//! directly.
//!
//! Logger and event-loop injection from older designs have no counterpart
//! here: logging goes through `tracing` and scheduling through the ambient
//! async runtime.

use std::sync::Arc;

use sift_core::{Connection, EventEmitter};

/// Capability: the handler wants the session handle events arrive on.
pub trait ConnectionAware: Send + Sync {
    /// Supplies the session handle. May be called once per configured
    /// session.
    fn set_connection(&self, connection: Connection);
}

/// Capability: the handler wants to emit events of its own.
pub trait EmitterAware: Send + Sync {
    /// Supplies the emitter the handler should raise events through.
    fn set_emitter(&self, emitter: Arc<dyn EventEmitter>);
}
