//! Tag-driven ingestion handlers.
//!
//! One `(entity, tag, value)` token from an ingestion record becomes either
//! a semantic axiom addition or a fallback provenance annotation. Handlers
//! form a closed variant set dispatched through a registry lookup; the
//! surrounding ingestion loop stays outside this crate.

pub mod handler;
pub mod registry;

pub use handler::{parse_obo_boolean, TagHandler, TagOutcome};
pub use registry::TagHandlerRegistry;
