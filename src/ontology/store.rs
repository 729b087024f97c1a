use std::collections::BTreeSet;

use thiserror::Error;
use tracing::trace;

use crate::change::composite::{Change, CompositeChange};

use super::entities::{Annotation, Axiom, ClassEntity};
use super::value_objects::Iri;

/// Mutable ontology aggregate holding asserted axioms and annotations.
///
/// Axioms and annotations live in ordered sets, so re-adding an element the
/// store already holds is a no-op and iteration order is deterministic. The
/// store assumes a single writer for the duration of a change session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ontology {
    id: Iri,
    label: Option<String>,
    axioms: BTreeSet<Axiom>,
    annotations: BTreeSet<Annotation>,
}

impl Ontology {
    /// Creates a new empty ontology with the supplied identifier.
    #[must_use]
    pub fn new(id: Iri) -> Self {
        Self {
            id,
            label: None,
            axioms: BTreeSet::new(),
            annotations: BTreeSet::new(),
        }
    }

    /// Sets a human readable label for the ontology.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the ontology identifier.
    #[must_use]
    pub fn id(&self) -> &Iri {
        &self.id
    }

    /// Returns the optional label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Asserts an axiom directly; returns `false` when it was already present.
    pub fn add_axiom(&mut self, axiom: Axiom) -> bool {
        self.axioms.insert(axiom)
    }

    /// Returns `true` when the axiom is asserted in this ontology.
    #[must_use]
    pub fn contains_axiom(&self, axiom: &Axiom) -> bool {
        self.axioms.contains(axiom)
    }

    /// Returns every asserted axiom in canonical order.
    #[must_use]
    pub fn axioms(&self) -> &BTreeSet<Axiom> {
        &self.axioms
    }

    /// Records a provenance annotation; returns `false` when already present.
    pub fn add_annotation(&mut self, annotation: Annotation) -> bool {
        self.annotations.insert(annotation)
    }

    /// Returns every recorded annotation in canonical order.
    #[must_use]
    pub fn annotations(&self) -> &BTreeSet<Annotation> {
        &self.annotations
    }

    /// Returns the asserted `SubClassOf` axioms whose superclass operand is
    /// the supplied named class.
    #[must_use]
    pub fn subclass_axioms_for_superclass(&self, superclass: &ClassEntity) -> Vec<&Axiom> {
        self.axioms
            .iter()
            .filter(|axiom| match axiom {
                Axiom::SubClassOf { sup, .. } => sup.as_named() == Some(superclass),
                _ => false,
            })
            .collect()
    }

    /// Returns `true` when some `EquivalentClasses` axiom defines the class.
    #[must_use]
    pub fn is_defined(&self, class: &ClassEntity) -> bool {
        self.axioms.iter().any(|axiom| match axiom {
            Axiom::EquivalentClasses { members } => members.contains(class),
            _ => false,
        })
    }

    /// Applies one atomic change, reporting what the store actually did.
    ///
    /// Additions of present axioms and removals of absent axioms succeed as
    /// no-ops under the set semantics; a change addressed to a different
    /// ontology is rejected before any mutation.
    pub fn apply(&mut self, change: &Change) -> Result<ChangeOutcome, StoreError> {
        if change.ontology() != &self.id {
            return Err(StoreError::WrongOntology {
                expected: self.id.clone(),
                got: change.ontology().clone(),
            });
        }
        let outcome = match change {
            Change::AddAxiom { axiom, .. } => {
                if self.axioms.insert(axiom.clone()) {
                    ChangeOutcome::Applied
                } else {
                    ChangeOutcome::AlreadyPresent
                }
            }
            Change::RemoveAxiom { axiom, .. } => {
                if self.axioms.remove(axiom) {
                    ChangeOutcome::Applied
                } else {
                    ChangeOutcome::NoEffect
                }
            }
        };
        trace!(ontology = %self.id, ?outcome, "applied change");
        Ok(outcome)
    }

    /// Applies a composite bundle sequentially, halting on the first failure.
    ///
    /// Changes applied before the failing one stay applied; the caller owns
    /// any compensation.
    pub fn apply_all(
        &mut self,
        composite: &CompositeChange,
    ) -> Result<Vec<ChangeOutcome>, StoreError> {
        let mut outcomes = Vec::with_capacity(composite.len());
        for change in composite.changes() {
            outcomes.push(self.apply(change)?);
        }
        Ok(outcomes)
    }
}

/// What the store did for one applied change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// The store state changed.
    Applied,
    /// The added axiom was already asserted.
    AlreadyPresent,
    /// The removed axiom was not asserted.
    NoEffect,
}

/// Errors reported by the ontology store when applying changes.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The change addressed an ontology other than this store.
    #[error("change addresses ontology `{got}`, store holds `{expected}`")]
    WrongOntology { expected: Iri, got: Iri },
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{ChangeOutcome, Ontology, StoreError};
    use crate::change::composite::{Change, CompositeChange};
    use crate::ontology::entities::{Annotation, Axiom, ClassEntity, ClassExpression, Property};
    use crate::ontology::value_objects::Iri;

    fn iri(text: &str) -> Iri {
        Iri::new(text).expect("valid iri")
    }

    fn class(text: &str) -> ClassEntity {
        ClassEntity::new(iri(text))
    }

    fn subclass(sub: ClassExpression, sup: &ClassEntity) -> Axiom {
        Axiom::sub_class_of(sub, ClassExpression::named(sup.clone()))
    }

    #[test]
    fn subclass_query_matches_named_superclass_only() {
        let target = class("https://example.org/A");
        let other = class("https://example.org/X");
        let mut ontology = Ontology::new(iri("https://example.org/onto"));
        ontology.add_axiom(subclass(
            ClassExpression::named(class("https://example.org/B")),
            &target,
        ));
        ontology.add_axiom(subclass(
            ClassExpression::anonymous("ObjectSomeValuesFrom(p C)"),
            &target,
        ));
        ontology.add_axiom(subclass(
            ClassExpression::named(class("https://example.org/C")),
            &other,
        ));

        let axioms = ontology.subclass_axioms_for_superclass(&target);
        assert_eq!(axioms.len(), 2);
        assert!(axioms.iter().all(|axiom| matches!(
            axiom,
            Axiom::SubClassOf { sup, .. } if sup.as_named() == Some(&target)
        )));
    }

    #[test]
    fn defined_classes_are_detected_through_equivalences() {
        let defined = class("https://example.org/E");
        let partner = class("https://example.org/F");
        let mut ontology = Ontology::new(iri("https://example.org/onto"));
        ontology.add_axiom(
            Axiom::equivalent_classes([defined.clone(), partner.clone()].into_iter().collect())
                .expect("two members"),
        );

        assert!(ontology.is_defined(&defined));
        assert!(ontology.is_defined(&partner));
        assert!(!ontology.is_defined(&class("https://example.org/G")));
    }

    #[test]
    fn apply_add_is_idempotent_under_set_semantics() {
        let mut ontology = Ontology::new(iri("https://example.org/onto"));
        let change = Change::add_axiom(
            ontology.id().clone(),
            Axiom::AsymmetricProperty {
                property: Property::new(iri("https://example.org/p")),
            },
        );

        assert_eq!(ontology.apply(&change), Ok(ChangeOutcome::Applied));
        assert_eq!(ontology.apply(&change), Ok(ChangeOutcome::AlreadyPresent));
        assert_eq!(ontology.axioms().len(), 1);
    }

    #[test]
    fn apply_remove_reports_missing_axioms_as_no_effect() {
        let mut ontology = Ontology::new(iri("https://example.org/onto"));
        let axiom = Axiom::AsymmetricProperty {
            property: Property::new(iri("https://example.org/p")),
        };
        let removal = Change::remove_axiom(ontology.id().clone(), axiom.clone());

        assert_eq!(ontology.apply(&removal), Ok(ChangeOutcome::NoEffect));

        ontology.add_axiom(axiom.clone());
        assert_eq!(ontology.apply(&removal), Ok(ChangeOutcome::Applied));
        assert!(!ontology.contains_axiom(&axiom));
    }

    #[test]
    fn apply_rejects_changes_for_other_ontologies() {
        let mut ontology = Ontology::new(iri("https://example.org/onto"));
        let foreign = Change::add_axiom(
            iri("https://example.org/other"),
            Axiom::AsymmetricProperty {
                property: Property::new(iri("https://example.org/p")),
            },
        );

        let err = ontology.apply(&foreign).expect_err("wrong ontology");
        assert!(matches!(err, StoreError::WrongOntology { .. }));
        assert!(ontology.axioms().is_empty());
    }

    #[test]
    fn apply_all_halts_on_first_failure_keeping_earlier_changes() {
        let mut ontology = Ontology::new(iri("https://example.org/onto"));
        let members: BTreeSet<_> = [
            class("https://example.org/B"),
            class("https://example.org/C"),
        ]
        .into_iter()
        .collect();
        let good = Change::add_axiom(
            ontology.id().clone(),
            Axiom::disjoint_classes(members).expect("two members"),
        );
        let bad = Change::add_axiom(
            iri("https://example.org/other"),
            Axiom::AsymmetricProperty {
                property: Property::new(iri("https://example.org/p")),
            },
        );
        let mut composite = CompositeChange::new();
        composite.add_changes([good.clone(), bad]);

        let err = ontology.apply_all(&composite).expect_err("halts");
        assert!(matches!(err, StoreError::WrongOntology { .. }));
        assert!(ontology.contains_axiom(good.axiom()));
        assert_eq!(ontology.axioms().len(), 1);
    }

    #[test]
    fn annotations_deduplicate() {
        let mut ontology = Ontology::new(iri("https://example.org/onto"));
        let annotation =
            Annotation::new(iri("https://example.org/p"), "is_asymmetric", "false");
        assert!(ontology.add_annotation(annotation.clone()));
        assert!(!ontology.add_annotation(annotation));
        assert_eq!(ontology.annotations().len(), 1);
    }
}
