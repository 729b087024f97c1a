use std::collections::BTreeSet;

use super::entities::{Annotation, Axiom, AxiomError, ClassEntity, ClassExpression, Property};
use super::value_objects::Iri;

/// Pure constructor front for ontology entities and axioms.
///
/// The factory carries no state; it exists so that change generators and tag
/// handlers receive their construction capability as an explicit value
/// instead of reaching for shared protected state. Every method is
/// side-effect-free.
#[derive(Clone, Copy, Debug, Default)]
pub struct DataFactory;

impl DataFactory {
    /// Creates a new [`DataFactory`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Looks up a named class by identifier.
    #[must_use]
    pub fn class(&self, iri: Iri) -> ClassEntity {
        ClassEntity::new(iri)
    }

    /// Looks up a named object property by identifier.
    #[must_use]
    pub fn object_property(&self, iri: Iri) -> Property {
        Property::new(iri)
    }

    /// Builds an asserted subclass axiom.
    #[must_use]
    pub fn sub_class_of(&self, sub: ClassExpression, sup: ClassExpression) -> Axiom {
        Axiom::sub_class_of(sub, sup)
    }

    /// Builds a disjointness axiom over the supplied members.
    pub fn disjoint_classes(
        &self,
        members: BTreeSet<ClassEntity>,
    ) -> Result<Axiom, AxiomError> {
        Axiom::disjoint_classes(members)
    }

    /// Builds an equivalence axiom over the supplied members.
    pub fn equivalent_classes(
        &self,
        members: BTreeSet<ClassEntity>,
    ) -> Result<Axiom, AxiomError> {
        Axiom::equivalent_classes(members)
    }

    /// Builds an asymmetry characteristic axiom.
    #[must_use]
    pub fn asymmetric_property(&self, property: Property) -> Axiom {
        Axiom::AsymmetricProperty { property }
    }

    /// Builds a symmetry characteristic axiom.
    #[must_use]
    pub fn symmetric_property(&self, property: Property) -> Axiom {
        Axiom::SymmetricProperty { property }
    }

    /// Builds a transitivity characteristic axiom.
    #[must_use]
    pub fn transitive_property(&self, property: Property) -> Axiom {
        Axiom::TransitiveProperty { property }
    }

    /// Builds a reflexivity characteristic axiom.
    #[must_use]
    pub fn reflexive_property(&self, property: Property) -> Axiom {
        Axiom::ReflexiveProperty { property }
    }

    /// Builds a functionality characteristic axiom.
    #[must_use]
    pub fn functional_property(&self, property: Property) -> Axiom {
        Axiom::FunctionalProperty { property }
    }

    /// Builds a provenance annotation.
    #[must_use]
    pub fn annotation(
        &self,
        entity: Iri,
        tag: impl Into<String>,
        value: impl Into<String>,
    ) -> Annotation {
        Annotation::new(entity, tag, value)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::DataFactory;
    use crate::ontology::entities::{Axiom, AxiomError};
    use crate::ontology::value_objects::Iri;

    fn iri(text: &str) -> Iri {
        Iri::new(text).expect("valid iri")
    }

    #[test]
    fn characteristic_constructors_wrap_the_property() {
        let factory = DataFactory::new();
        let property = factory.object_property(iri("https://example.org/p"));
        assert!(matches!(
            factory.asymmetric_property(property.clone()),
            Axiom::AsymmetricProperty { property: p } if p == property
        ));
        assert!(matches!(
            factory.transitive_property(property.clone()),
            Axiom::TransitiveProperty { property: p } if p == property
        ));
    }

    #[test]
    fn disjointness_constructor_propagates_arity_errors() {
        let factory = DataFactory::new();
        let members: BTreeSet<_> = [factory.class(iri("https://example.org/B"))]
            .into_iter()
            .collect();
        let err = factory.disjoint_classes(members).expect_err("one member");
        assert_eq!(err, AxiomError::TooFewMembers { got: 1 });
    }
}
