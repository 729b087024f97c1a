//! Composite ontology change synthesis and tag-driven ingestion primitives.
//!
//! The crate derives atomic model mutations from small, well-typed inputs
//! and hands them back as ordered, reusable bundles:
//!
//! - [`change::MakePrimitiveSubclassesDisjoint`] queries the told primitive
//!   subclasses of a class and bundles mutual-disjointness axioms for them,
//!   either as one n-ary axiom or pairwise for consumers that cannot
//!   interpret n-ary disjointness.
//! - [`tags::TagHandler`] turns one textual tag/value token from an
//!   ingestion record into a characteristic axiom addition or, for explicit
//!   negative declarations, a provenance annotation.
//!
//! Both paths collect their output into a [`change::CompositeChange`] (or
//! apply directly) against an [`ontology::Ontology`] store owned by the
//! caller; the crate never retains the store and assumes a single writer per
//! change session. Everything is synchronous.

pub mod change;
pub mod ontology;
pub mod tags;

pub use change::{Change, CompositeChange, DisjointnessMode, MakePrimitiveSubclassesDisjoint};
pub use ontology::{DataFactory, Iri, Ontology};
pub use tags::{TagHandler, TagHandlerRegistry};
