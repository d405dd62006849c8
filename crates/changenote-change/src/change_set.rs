//! Accepted change records grouped by type.

use std::collections::BTreeMap;

use crate::{ChangeRecord, ChangeType};

/// Change records grouped by [`ChangeType`].
///
/// Groups iterate in alphabetical order of the type names; records within a
/// group keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    groups: BTreeMap<ChangeType, Vec<ChangeRecord>>,
}

impl ChangeSet {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record to the group of its type.
    pub fn insert(&mut self, record: ChangeRecord) {
        self.groups
            .entry(record.change_type())
            .or_default()
            .push(record);
    }

    /// Returns true if no record was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of records across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Returns true if at least one record has the given type.
    #[must_use]
    pub fn contains_type(&self, change_type: ChangeType) -> bool {
        self.groups.contains_key(&change_type)
    }

    /// Records of one type, in insertion order.
    #[must_use]
    pub fn get(&self, change_type: ChangeType) -> Option<&[ChangeRecord]> {
        self.groups.get(&change_type).map(Vec::as_slice)
    }

    /// The types present in the set.
    pub fn types(&self) -> impl Iterator<Item = ChangeType> + '_ {
        self.groups.keys().copied()
    }

    /// Non-empty groups in rendering order.
    pub fn groups(&self) -> impl Iterator<Item = (ChangeType, &[ChangeRecord])> {
        self.groups
            .iter()
            .map(|(change_type, records)| (*change_type, records.as_slice()))
    }

    /// All records, group by group.
    pub fn records(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.groups.values().flatten()
    }
}

impl FromIterator<ChangeRecord> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = ChangeRecord>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<ChangeRecord> for ChangeSet {
    fn extend<I: IntoIterator<Item = ChangeRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}
