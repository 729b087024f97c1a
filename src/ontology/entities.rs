use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::value_objects::Iri;

/// A named ontology class.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassEntity {
    iri: Iri,
}

impl ClassEntity {
    /// Creates a new [`ClassEntity`] with the supplied identifier.
    #[must_use]
    pub fn new(iri: Iri) -> Self {
        Self { iri }
    }

    /// Returns the unique identifier of the class.
    #[must_use]
    pub fn iri(&self) -> &Iri {
        &self.iri
    }
}

impl Display for ClassEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.iri, f)
    }
}

/// A class expression operand as it appears in asserted axioms.
///
/// Only named expressions designate a [`ClassEntity`]; anonymous compound
/// expressions carry an opaque textual rendering and never participate in
/// entity-level operations.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassExpression {
    /// A named class reference.
    Named(ClassEntity),
    /// An anonymous compound expression (restriction, intersection, ...).
    Anonymous {
        /// Opaque rendering of the compound expression.
        description: String,
    },
}

impl ClassExpression {
    /// Wraps a named class into an expression operand.
    #[must_use]
    pub fn named(class: ClassEntity) -> Self {
        Self::Named(class)
    }

    /// Builds an anonymous compound expression from its rendering.
    #[must_use]
    pub fn anonymous(description: impl Into<String>) -> Self {
        Self::Anonymous {
            description: description.into(),
        }
    }

    /// Returns `true` when the expression is not a named class.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous { .. })
    }

    /// Returns the named class behind the expression, if any.
    #[must_use]
    pub fn as_named(&self) -> Option<&ClassEntity> {
        match self {
            Self::Named(class) => Some(class),
            Self::Anonymous { .. } => None,
        }
    }
}

/// A named object property.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Property {
    iri: Iri,
}

impl Property {
    /// Creates a new [`Property`] with the supplied identifier.
    #[must_use]
    pub fn new(iri: Iri) -> Self {
        Self { iri }
    }

    /// Returns the property identifier.
    #[must_use]
    pub fn iri(&self) -> &Iri {
        &self.iri
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.iri, f)
    }
}

/// Logical statements held by an ontology store.
///
/// The n-ary variants maintain the invariant that their member set contains
/// at least two distinct classes; construct them through
/// [`Axiom::disjoint_classes`] and [`Axiom::equivalent_classes`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axiom {
    /// Asserted subclass relation between two class expressions.
    SubClassOf {
        sub: ClassExpression,
        sup: ClassExpression,
    },
    /// Pairwise-disjoint class members.
    DisjointClasses { members: BTreeSet<ClassEntity> },
    /// Mutually equivalent class members; a named member counts as defined.
    EquivalentClasses { members: BTreeSet<ClassEntity> },
    /// The property never holds in both directions between two individuals.
    AsymmetricProperty { property: Property },
    /// The property holds in both directions whenever it holds in one.
    SymmetricProperty { property: Property },
    /// The property composes with itself.
    TransitiveProperty { property: Property },
    /// The property relates every individual to itself.
    ReflexiveProperty { property: Property },
    /// The property relates each subject to at most one object.
    FunctionalProperty { property: Property },
}

impl Axiom {
    /// Builds an asserted subclass axiom.
    #[must_use]
    pub fn sub_class_of(sub: ClassExpression, sup: ClassExpression) -> Self {
        Self::SubClassOf { sub, sup }
    }

    /// Builds a disjointness axiom, rejecting member sets smaller than two.
    pub fn disjoint_classes(members: BTreeSet<ClassEntity>) -> Result<Self, AxiomError> {
        if members.len() < 2 {
            return Err(AxiomError::TooFewMembers {
                got: members.len(),
            });
        }
        Ok(Self::DisjointClasses { members })
    }

    /// Builds an equivalence axiom, rejecting member sets smaller than two.
    pub fn equivalent_classes(members: BTreeSet<ClassEntity>) -> Result<Self, AxiomError> {
        if members.len() < 2 {
            return Err(AxiomError::TooFewMembers {
                got: members.len(),
            });
        }
        Ok(Self::EquivalentClasses { members })
    }
}

/// Errors raised when constructing axioms.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AxiomError {
    /// An n-ary class axiom needs at least two distinct members.
    #[error("n-ary class axiom needs at least 2 distinct members, got {got}")]
    TooFewMembers { got: usize },
}

/// Provenance record attached to an entity without logical force.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Annotation {
    entity: Iri,
    tag: String,
    value: String,
}

impl Annotation {
    /// Creates a new [`Annotation`] for the supplied entity and tag.
    #[must_use]
    pub fn new(entity: Iri, tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            entity,
            tag: tag.into(),
            value: value.into(),
        }
    }

    /// Returns the annotated entity identifier.
    #[must_use]
    pub fn entity(&self) -> &Iri {
        &self.entity
    }

    /// Returns the tag name the annotation originated from.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the literal value carried by the annotation.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
