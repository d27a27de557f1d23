//! Inventory Index
//!
//! The composition layer over the core containers.
//!
//! ## Ownership Model
//! The index exclusively owns its three containers; only `add_record`
//! mutates them. Both maps store plain integer positions into the record
//! list. The list is append-only and never compacts, so positions stay
//! stable for the index's lifetime and no references cross container
//! boundaries.

use crate::collections::{GrowableList, ProbeMap};
use crate::error::Result;
use crate::record::{fold_key, Record};

/// In-memory index over a list of records
///
/// Point lookups by unique id, multi-value lookups by case-folded category.
#[derive(Debug)]
pub struct Inventory {
    /// All records, in insertion order; positions index into this list
    records: GrowableList<Record>,

    /// Unique id → position
    by_id: ProbeMap<String, usize>,

    /// Case-folded category label → positions, in insertion order
    by_category: ProbeMap<String, GrowableList<usize>>,
}

impl Inventory {
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            records: GrowableList::new(),
            by_id: ProbeMap::new(),
            by_category: ProbeMap::new(),
        }
    }

    /// Number of records in the index
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records have been added
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a record, indexing it by unique id and by every category label
    ///
    /// A duplicate unique id silently overwrites the earlier id mapping
    /// (last-write-wins, per the map's update semantics); the earlier record
    /// stays reachable through its categories.
    pub fn add_record(&mut self, record: Record) {
        let position = self.records.len();

        self.by_id.store(record.id.clone(), position);

        for label in record.categories.iter() {
            let key = fold_key(label);
            match self.by_category.retrieve_mut(key.as_str()) {
                Some(positions) => positions.push(position),
                None => {
                    let mut positions = GrowableList::new();
                    positions.push(position);
                    self.by_category.store(key, positions);
                }
            }
        }

        self.records.push(record);
    }

    /// Point lookup by unique id
    pub fn find_by_id(&self, id: &str) -> Option<&Record> {
        let position = *self.by_id.retrieve(id)?;
        // Positions stored by add_record always point at a live record
        self.records.get(position).ok()
    }

    /// Multi-value lookup by category label (case-insensitive)
    ///
    /// Returns the positions of every record carrying the label, in
    /// insertion order; callers dereference through [`Inventory::record_at`].
    pub fn find_by_category(&self, label: &str) -> Option<&GrowableList<usize>> {
        self.by_category.retrieve(fold_key(label).as_str())
    }

    /// Dereference a position obtained from a category lookup
    pub fn record_at(&self, position: usize) -> Result<&Record> {
        self.records.get(position)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
