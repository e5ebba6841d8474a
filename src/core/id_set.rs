//! Geordnete, duplikatfreie Menge von Objekt-IDs.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Handle eines renderbaren Szenen-Objekts. Stabil für die Dauer einer
/// Szenen-Session, wird innerhalb einer Session nie wiederverwendet.
pub type ObjectId = u32;

/// Geordnete HashSet von Objekt-IDs.
///
/// Kombiniert O(1)-Membership mit stabiler Einfüge-Reihenfolge: der Renderer
/// konsumiert ein flaches Array, die UI braucht schnelle Contains-Checks.
/// Entfernen erhält die Reihenfolge der verbleibenden Einträge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdSet(IndexSet<ObjectId>);

impl IdSet {
    /// Erstellt eine leere Menge.
    pub fn new() -> Self {
        Self(IndexSet::new())
    }

    /// Fügt IDs in der gegebenen Reihenfolge hinten an; pro ID idempotent.
    pub fn add<I: IntoIterator<Item = ObjectId>>(&mut self, ids: I) {
        for id in ids {
            self.0.insert(id);
        }
    }

    /// Entfernt IDs; die Reihenfolge der verbleibenden Einträge bleibt erhalten.
    pub fn remove<I: IntoIterator<Item = ObjectId>>(&mut self, ids: I) {
        for id in ids {
            self.0.shift_remove(&id);
        }
    }

    /// Ersetzt den Inhalt vollständig. Duplikate in der Eingabe kollabieren,
    /// das erste Vorkommen bestimmt die Position.
    pub fn set<I: IntoIterator<Item = ObjectId>>(&mut self, ids: I) {
        self.0.clear();
        self.add(ids);
    }

    /// O(1)-Membership-Test.
    pub fn has(&self, id: ObjectId) -> bool {
        self.0.contains(&id)
    }

    /// Leert die Menge.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Anzahl der enthaltenen IDs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` wenn keine IDs enthalten sind.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iteriert in Einfüge-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.0.iter().copied()
    }

    /// Letzte (zuletzt eingefügte) ID, falls vorhanden.
    pub fn last(&self) -> Option<ObjectId> {
        self.0.last().copied()
    }

    /// Flaches Array in Einfüge-Reihenfolge (Renderer-Konsum).
    pub fn to_vec(&self) -> Vec<ObjectId> {
        self.0.iter().copied().collect()
    }
}

impl FromIterator<ObjectId> for IdSet {
    fn from_iter<I: IntoIterator<Item = ObjectId>>(iter: I) -> Self {
        let mut set = Self::new();
        set.add(iter);
        set
    }
}

impl From<Vec<ObjectId>> for IdSet {
    fn from(ids: Vec<ObjectId>) -> Self {
        ids.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a IdSet {
    type Item = ObjectId;
    type IntoIter = std::iter::Copied<indexmap::set::Iter<'a, ObjectId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
