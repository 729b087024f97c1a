use std::collections::BTreeSet;

use tracing::debug;

use crate::ontology::entities::{Axiom, ClassEntity};
use crate::ontology::factory::DataFactory;
use crate::ontology::store::Ontology;

use super::composite::{Change, CompositeChange};
use super::hierarchy::primitive_subclasses_of;

/// Shape of the disjointness axioms produced for a class set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisjointnessMode {
    /// One n-ary `DisjointClasses` axiom over the whole set. Compact default.
    #[default]
    Single,
    /// One two-member axiom per unordered pair, n(n-1)/2 in total, for
    /// consumers that cannot interpret n-ary disjointness.
    Pairwise,
}

/// Synthesizes disjointness axioms for the supplied class set.
///
/// Fewer than two classes yield no axioms; disjointness is undefined below
/// that arity and the empty result is policy, not an error. Pairwise axioms
/// are enumerated in lexicographic IRI order so downstream change ordering
/// is reproducible.
#[must_use]
pub fn synthesize_disjointness(
    factory: &DataFactory,
    classes: &BTreeSet<ClassEntity>,
    mode: DisjointnessMode,
) -> Vec<Axiom> {
    if classes.len() < 2 {
        debug!(count = classes.len(), "too few classes for disjointness");
        return Vec::new();
    }
    let axioms = match mode {
        DisjointnessMode::Single => {
            // Arity checked above, so the constructor yields exactly one axiom.
            factory
                .disjoint_classes(classes.clone())
                .into_iter()
                .collect()
        }
        DisjointnessMode::Pairwise => {
            let ordered: Vec<&ClassEntity> = classes.iter().collect();
            let mut axioms = Vec::with_capacity(ordered.len() * (ordered.len() - 1) / 2);
            for (index, first) in ordered.iter().enumerate() {
                for second in &ordered[index + 1..] {
                    // Each pair holds two distinct members by construction.
                    let members = [(*first).clone(), (*second).clone()].into_iter().collect();
                    axioms.extend(factory.disjoint_classes(members));
                }
            }
            axioms
        }
    };
    debug!(?mode, produced = axioms.len(), "synthesized disjointness axioms");
    axioms
}

/// Composite change making an explicit set of classes mutually disjoint.
///
/// Every synthesized axiom is wrapped as an addition against the target
/// ontology; the bundle is generated eagerly and can be read or replayed any
/// number of times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MakeClassesMutuallyDisjoint {
    composite: CompositeChange,
}

impl MakeClassesMutuallyDisjoint {
    /// Generates the disjointness bundle for `classes` against `target`.
    #[must_use]
    pub fn new(
        factory: &DataFactory,
        classes: &BTreeSet<ClassEntity>,
        mode: DisjointnessMode,
        target: &Ontology,
    ) -> Self {
        let mut composite = CompositeChange::new();
        composite.add_changes(
            synthesize_disjointness(factory, classes, mode)
                .into_iter()
                .map(|axiom| Change::add_axiom(target.id().clone(), axiom)),
        );
        Self { composite }
    }

    /// Returns the generated changes in emission order.
    #[must_use]
    pub fn changes(&self) -> &[Change] {
        self.composite.changes()
    }

    /// Consumes the generator, yielding its composite bundle.
    #[must_use]
    pub fn into_composite(self) -> CompositeChange {
        self.composite
    }
}

/// Composite change making the told primitive subclasses of a class mutually
/// disjoint.
///
/// The told subclasses of `class` are collected from the target ontology,
/// filtered to named primitive classes, and handed to
/// [`MakeClassesMutuallyDisjoint`]. A common authoring pattern: if B, C and D
/// are primitive subclasses of A, the bundle asserts their mutual
/// disjointness in the target ontology.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MakePrimitiveSubclassesDisjoint {
    composite: CompositeChange,
}

impl MakePrimitiveSubclassesDisjoint {
    /// Generates the bundle with the compact single-axiom shape.
    #[must_use]
    pub fn new(factory: &DataFactory, class: &ClassEntity, target: &Ontology) -> Self {
        Self::with_mode(factory, class, target, DisjointnessMode::Single)
    }

    /// Generates the bundle with an explicit axiom shape.
    #[must_use]
    pub fn with_mode(
        factory: &DataFactory,
        class: &ClassEntity,
        target: &Ontology,
        mode: DisjointnessMode,
    ) -> Self {
        let subclasses = primitive_subclasses_of(class, target);
        debug!(class = %class, subclasses = subclasses.len(), "collected primitive subclasses");
        let delegate = MakeClassesMutuallyDisjoint::new(factory, &subclasses, mode, target);
        Self {
            composite: delegate.into_composite(),
        }
    }

    /// Returns the generated changes in emission order.
    #[must_use]
    pub fn changes(&self) -> &[Change] {
        self.composite.changes()
    }

    /// Consumes the generator, yielding its composite bundle.
    #[must_use]
    pub fn into_composite(self) -> CompositeChange {
        self.composite
    }
}
