use serde::{Deserialize, Serialize};

use crate::ontology::entities::Axiom;
use crate::ontology::value_objects::Iri;

/// Atomic mutation against an ontology store, addressed by ontology IRI.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Change {
    /// Adds an axiom to the addressed ontology.
    AddAxiom { ontology: Iri, axiom: Axiom },
    /// Removes an axiom from the addressed ontology.
    RemoveAxiom { ontology: Iri, axiom: Axiom },
}

impl Change {
    /// Builds an axiom addition against the addressed ontology.
    #[must_use]
    pub fn add_axiom(ontology: Iri, axiom: Axiom) -> Self {
        Self::AddAxiom { ontology, axiom }
    }

    /// Builds an axiom removal against the addressed ontology.
    #[must_use]
    pub fn remove_axiom(ontology: Iri, axiom: Axiom) -> Self {
        Self::RemoveAxiom { ontology, axiom }
    }

    /// Returns the IRI of the ontology the change addresses.
    #[must_use]
    pub fn ontology(&self) -> &Iri {
        match self {
            Self::AddAxiom { ontology, .. } | Self::RemoveAxiom { ontology, .. } => ontology,
        }
    }

    /// Returns the axiom the change carries.
    #[must_use]
    pub fn axiom(&self) -> &Axiom {
        match self {
            Self::AddAxiom { axiom, .. } | Self::RemoveAxiom { axiom, .. } => axiom,
        }
    }
}

/// Append-only ordered bundle of atomic changes meant to be applied together.
///
/// Insertion order is preserved and nothing is deduplicated: appliers may
/// commit sequentially and halt on the first failure, and audit trails replay
/// the recorded order verbatim. The bundle never validates changes against a
/// store and never applies anything itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeChange {
    changes: Vec<Change>,
}

impl CompositeChange {
    /// Creates an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single change.
    pub fn add_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    /// Appends a batch of changes in its iteration order.
    pub fn add_changes(&mut self, batch: impl IntoIterator<Item = Change>) {
        self.changes.extend(batch);
    }

    /// Returns the accumulated changes in insertion order.
    #[must_use]
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Consumes the bundle, yielding the accumulated changes.
    #[must_use]
    pub fn into_changes(self) -> Vec<Change> {
        self.changes
    }

    /// Returns the number of accumulated changes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns `true` when no change has been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

impl IntoIterator for CompositeChange {
    type Item = Change;
    type IntoIter = std::vec::IntoIter<Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

impl FromIterator<Change> for CompositeChange {
    fn from_iter<I: IntoIterator<Item = Change>>(iter: I) -> Self {
        Self {
            changes: iter.into_iter().collect(),
        }
    }
}
