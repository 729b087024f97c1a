//! Composite change generation.
//!
//! Changes are derived from small typed inputs and handed back as ordered,
//! reusable bundles instead of being applied ad hoc: the hierarchy query
//! collects primitive told subclasses, the disjointness synthesizer turns a
//! class set into axioms under a selectable shape, and the composite bundle
//! preserves emission order for sequential appliers and audit replay.

pub mod composite;
pub mod disjoint;
pub mod hierarchy;

pub use composite::{Change, CompositeChange};
pub use disjoint::{
    synthesize_disjointness, DisjointnessMode, MakeClassesMutuallyDisjoint,
    MakePrimitiveSubclassesDisjoint,
};
pub use hierarchy::primitive_subclasses_of;
