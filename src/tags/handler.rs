use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::change::composite::Change;
use crate::ontology::entities::{Annotation, Axiom, Property};
use crate::ontology::factory::DataFactory;
use crate::ontology::store::{Ontology, StoreError};
use crate::ontology::value_objects::Iri;

/// Total boolean parse over the ingestion format's boolean grammar.
///
/// Only the literal `"true"` parses as true; every other string, including
/// `"false"`, empty and malformed input, parses as false. Deliberately a
/// total function rather than a validating parser: ingestion keeps moving
/// and the false branch records the raw declaration as provenance.
#[must_use]
pub fn parse_obo_boolean(value: &str) -> bool {
    value == "true"
}

/// Closed set of boolean property-characteristic tag handlers.
///
/// One variant per supported tag identifier; the set is exhaustively
/// checkable and dispatch happens through a single registry lookup instead
/// of one type per tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagHandler {
    IsAsymmetric,
    IsSymmetric,
    IsTransitive,
    IsReflexive,
    IsFunctional,
}

impl TagHandler {
    /// Every handler variant, in registry order.
    pub const ALL: [Self; 5] = [
        Self::IsAsymmetric,
        Self::IsSymmetric,
        Self::IsTransitive,
        Self::IsReflexive,
        Self::IsFunctional,
    ];

    /// Returns the fixed tag identifier this handler answers to.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::IsAsymmetric => "is_asymmetric",
            Self::IsSymmetric => "is_symmetric",
            Self::IsTransitive => "is_transitive",
            Self::IsReflexive => "is_reflexive",
            Self::IsFunctional => "is_functional",
        }
    }

    fn characteristic_axiom(&self, factory: &DataFactory, property: Property) -> Axiom {
        match self {
            Self::IsAsymmetric => factory.asymmetric_property(property),
            Self::IsSymmetric => factory.symmetric_property(property),
            Self::IsTransitive => factory.transitive_property(property),
            Self::IsReflexive => factory.reflexive_property(property),
            Self::IsFunctional => factory.functional_property(property),
        }
    }

    /// Handles one `(entity, tag, value)` occurrence from the record stream.
    ///
    /// A true value asserts the characteristic axiom for the entity's object
    /// property and applies it immediately. Any other value records an
    /// explicit-negative annotation instead of asserting a vacuous negative
    /// axiom. Both branches are idempotent under the store's set semantics.
    /// The trailing comment is accepted for interface parity with
    /// provenance-only handlers and unused here.
    pub fn handle(
        &self,
        factory: &DataFactory,
        ontology: &mut Ontology,
        entity: &Iri,
        value: &str,
        _comment: Option<&str>,
    ) -> Result<TagOutcome, StoreError> {
        if parse_obo_boolean(value) {
            let property = factory.object_property(entity.clone());
            let change = Change::add_axiom(
                ontology.id().clone(),
                self.characteristic_axiom(factory, property),
            );
            let outcome = ontology.apply(&change)?;
            debug!(tag = self.tag(), entity = %entity, ?outcome, "asserted characteristic axiom");
            Ok(TagOutcome::AxiomAdded { change })
        } else {
            let annotation = factory.annotation(entity.clone(), self.tag(), "false");
            ontology.add_annotation(annotation.clone());
            debug!(tag = self.tag(), entity = %entity, raw = value, "recorded negative declaration");
            Ok(TagOutcome::Annotated { annotation })
        }
    }
}

/// What a tag handler emitted for one record occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TagOutcome {
    /// A characteristic axiom was applied to the target ontology.
    AxiomAdded { change: Change },
    /// A provenance annotation recorded an explicit negative declaration.
    Annotated { annotation: Annotation },
}
