use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::handler::{LinkHandler, handler_id};

/// Result of routing one navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Ordinary link, the surface keeps navigating
    NotReserved,
    /// Reserved link delivered to the handler registered under `id`
    Handled { id: String },
    /// Reserved link without a matching handler; nothing ran
    Unhandled { id: String },
}

impl Dispatch {
    /// Reserved links are never loaded as a resource, handled or not
    pub fn suppresses_navigation(&self) -> bool {
        !matches!(self, Dispatch::NotReserved)
    }
}

/// Handler table owned by a single browsing surface
///
/// Handlers live exactly as long as the router: dropping or disposing it
/// releases every registration.
#[derive(Default)]
pub struct LinkRouter {
    handlers: BTreeMap<String, Arc<dyn LinkHandler>>,
}

impl LinkRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `id`, replacing any previous registration
    pub fn register(&mut self, id: impl Into<String>, handler: Arc<dyn LinkHandler>) {
        let id = id.into();
        if self.handlers.insert(id.clone(), handler).is_some() {
            tracing::debug!(handler = %id, "Link handler replaced");
        } else {
            tracing::debug!(handler = %id, "Link handler registered");
        }
    }

    pub fn unregister(&mut self, id: &str) -> Option<Arc<dyn LinkHandler>> {
        let removed = self.handlers.remove(id);
        if removed.is_some() {
            tracing::debug!(handler = %id, "Link handler unregistered");
        }
        removed
    }

    pub fn has_handler(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Route a navigation target.
    ///
    /// The matched handler is called once with the unmodified `link`.
    pub fn dispatch(&self, link: &str) -> Dispatch {
        let Some(id) = handler_id(link) else {
            return Dispatch::NotReserved;
        };

        match self.handlers.get(id) {
            Some(handler) => {
                tracing::debug!(handler = %id, %link, "Dispatching link");
                handler.handle(id, link);
                Dispatch::Handled { id: id.to_string() }
            }
            None => {
                tracing::debug!(handler = %id, %link, "No handler for reserved link");
                Dispatch::Unhandled { id: id.to_string() }
            }
        }
    }

    /// Release all handlers along with the router
    pub fn dispose(self) {}
}

impl fmt::Debug for LinkRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkRouter")
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Drop for LinkRouter {
    fn drop(&mut self) {
        if !self.handlers.is_empty() {
            tracing::debug!(count = self.handlers.len(), "Releasing link handlers");
        }
    }
}
