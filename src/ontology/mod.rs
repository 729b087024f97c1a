//! Core ontology domain primitives.
//!
//! The module defines validated value objects, the axiom and annotation
//! entities, a pure data factory and the mutable ontology aggregate that
//! change bundles are applied against. Only domain constructs live here;
//! change generation and tag ingestion build on top of these types.

pub mod entities;
pub mod factory;
pub mod store;
pub mod value_objects;

pub use entities::{
    Annotation, Axiom, AxiomError, ClassEntity, ClassExpression, Property,
};
pub use factory::DataFactory;
pub use store::{ChangeOutcome, Ontology, StoreError};
pub use value_objects::{Iri, IriError};
