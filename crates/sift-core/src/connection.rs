//! Connection identity for events.
//!
//! A [`Connection`] represents one protocol session with a server. Filters
//! and handlers never inspect its contents; they only ever ask "is this the
//! same session?". Equality is therefore **identity**, not value: two
//! handles created separately are distinct even if their labels match, while
//! clones of one handle always compare equal.

use std::sync::Arc;

struct ConnectionInner {
    label: String,
}

/// Opaque handle identifying one protocol session.
///
/// Cheap to clone; clones share identity with the original.
///
/// # Example
///
/// ```
/// use sift_core::Connection;
///
/// let freenode = Connection::new("irc.libera.chat");
/// let clone = freenode.clone();
/// let other = Connection::new("irc.libera.chat");
///
/// assert_eq!(freenode, clone);
/// assert_ne!(freenode, other); // same label, different session
/// ```
#[derive(Clone)]
pub struct Connection {
    inner: Arc<ConnectionInner>,
}

impl Connection {
    /// Creates a new connection handle with a human-readable label.
    ///
    /// The label only appears in logs and `Debug` output; it plays no part
    /// in equality.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ConnectionInner {
                label: label.into(),
            }),
        }
    }

    /// Returns the label given at construction.
    pub fn label(&self) -> &str {
        &self.inner.label
    }

    /// Returns `true` if both handles refer to the same session.
    pub fn same_as(&self, other: &Connection) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Connection {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Connection {}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("label", &self.inner.label)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_identity() {
        let conn = Connection::new("irc.example.org");
        let clone = conn.clone();
        assert!(conn.same_as(&clone));
        assert_eq!(conn, clone);
    }

    #[test]
    fn equal_labels_are_distinct_sessions() {
        let a = Connection::new("irc.example.org");
        let b = Connection::new("irc.example.org");
        assert!(!a.same_as(&b));
        assert_ne!(a, b);
    }
}
