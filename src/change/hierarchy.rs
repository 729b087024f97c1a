use std::collections::BTreeSet;

use tracing::trace;

use crate::ontology::entities::{Axiom, ClassEntity};
use crate::ontology::store::Ontology;

/// Collects the told primitive subclasses of `target`.
///
/// Every asserted `SubClassOf` axiom whose superclass operand is `target`
/// contributes its subclass operand, except when that operand is anonymous
/// or when the ontology defines it through an `EquivalentClasses` axiom.
/// The result is deduplicated and ordered by class IRI; it is empty when no
/// assertion matches. Pure query, no mutation.
#[must_use]
pub fn primitive_subclasses_of(
    target: &ClassEntity,
    ontology: &Ontology,
) -> BTreeSet<ClassEntity> {
    let mut subclasses = BTreeSet::new();
    for axiom in ontology.subclass_axioms_for_superclass(target) {
        let Axiom::SubClassOf { sub, .. } = axiom else {
            continue;
        };
        let Some(class) = sub.as_named() else {
            trace!(superclass = %target, "skipping anonymous subclass expression");
            continue;
        };
        if ontology.is_defined(class) {
            trace!(superclass = %target, subclass = %class, "skipping defined subclass");
            continue;
        }
        subclasses.insert(class.clone());
    }
    subclasses
}
