use std::collections::BTreeMap;

use super::handler::TagHandler;

/// Lookup table from tag identifier to exactly one handler variant.
///
/// The ingestion loop consults the registry once per tag occurrence; a
/// missing entry is the "no handler" signal and routing such tags (drop, or
/// generic annotation fallback) stays the driver's decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagHandlerRegistry {
    handlers: BTreeMap<&'static str, TagHandler>,
}

impl Default for TagHandlerRegistry {
    fn default() -> Self {
        let mut registry = Self {
            handlers: BTreeMap::new(),
        };
        for handler in TagHandler::ALL {
            registry.register(handler);
        }
        registry
    }
}

impl TagHandlerRegistry {
    /// Creates a registry with every handler variant bound to its tag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a handler under its fixed tag, returning any previous binding.
    pub fn register(&mut self, handler: TagHandler) -> Option<TagHandler> {
        self.handlers.insert(handler.tag(), handler)
    }

    /// Looks up the handler for a tag identifier; `None` means no handler.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&TagHandler> {
        self.handlers.get(tag)
    }

    /// Iterates the registered handlers in deterministic tag order.
    pub fn handlers(&self) -> impl Iterator<Item = (&'static str, &TagHandler)> {
        self.handlers.iter().map(|(tag, handler)| (*tag, handler))
    }

    /// Returns the number of registered tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
