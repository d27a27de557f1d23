//! ProbeMap implementation
//!
//! Open-addressing hash map with quadratic probing.
//!
//! ## Probe Sequence
//! ```text
//! slot(i) = (hash(key) + i²) mod capacity        i = 0, 1, 2, ...
//! ```
//!
//! Probing passes occupied slots holding *different* keys and stops at the
//! first *vacant* slot or a slot with an *equal* key. Quadratic offsets
//! reduce primary clustering relative to linear probing.
//!
//! ## Growth Policy
//! The table starts unallocated. A store grows it first whenever it is
//! uninitialized or the insert would push the load factor over 0.75:
//! initial capacity 32, doubling thereafter, re-inserting every occupied
//! entry through the same probe rule. Entries are never removed, so no
//! tombstone state exists and a vacant slot always terminates a probe.

use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Capacity of the first allocation
const INITIAL_CAPACITY: usize = 32;

/// A slot in the table: vacant, or an owned entry
#[derive(Debug, Clone)]
enum Slot<K, V> {
    Vacant,
    Occupied { key: K, value: V },
}

/// Open-addressing hash map with amortized O(1) store and retrieve
///
/// Keys are unique; storing an existing key overwrites its value
/// (last-write-wins) without changing the entry count. There is no delete
/// operation. The hash is deterministic and uniform but makes no
/// adversarial-input guarantees.
#[derive(Debug, Clone)]
pub struct ProbeMap<K, V> {
    /// Tagged slot array; `slots.len()` is the capacity
    slots: Box<[Slot<K, V>]>,

    /// Occupied slot count; `count / capacity <= 0.75` after every store
    count: usize,
}

impl<K: Hash + Eq, V> ProbeMap<K, V> {
    /// Create an empty map with no allocation
    pub fn new() -> Self {
        Self {
            slots: Box::default(),
            count: 0,
        }
    }

    /// Number of stored entries
    pub fn entry_count(&self) -> usize {
        self.count
    }

    /// True when at least one entry is stored
    pub fn has_entries(&self) -> bool {
        self.count > 0
    }

    /// Current slot-array capacity (0 until the first store)
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Insert or update an entry
    ///
    /// Grows first when the table is uninitialized or the insert would push
    /// the load factor over the 0.75 threshold, so the invariant holds
    /// immediately after every store.
    pub fn store(&mut self, key: K, value: V) {
        if self.capacity() == 0 || (self.count + 1) * 4 > self.capacity() * 3 {
            self.grow();
        }
        self.insert_entry(key, value);
    }

    /// Look up a value by key
    ///
    /// Follows the identical probe sequence as `store`; an uninitialized
    /// table reports absent without probing. Absence is an expected outcome,
    /// never an error.
    pub fn retrieve<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot_index = self.probe_for(key)?;
        match self.slots[slot_index] {
            Slot::Occupied { ref value, .. } => Some(value),
            Slot::Vacant => None,
        }
    }

    /// Look up a value by key, mutably
    pub fn retrieve_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot_index = self.probe_for(key)?;
        match self.slots[slot_index] {
            Slot::Occupied { ref mut value, .. } => Some(value),
            Slot::Vacant => None,
        }
    }

    /// Probe for an equal key; `Some(slot index)` when found, `None` when a
    /// vacant slot terminates the sequence or the table is unallocated
    ///
    /// The offsets `i² mod capacity` repeat with period `capacity`, so a
    /// bounded scan of `capacity` steps visits every slot the sequence can
    /// ever reach.
    fn probe_for<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let capacity = self.capacity();
        if capacity == 0 {
            return None;
        }

        let base = hash_of(key) as usize % capacity;
        for step in 0..capacity {
            let slot_index = (base + step * step) % capacity;
            match self.slots[slot_index] {
                Slot::Occupied { key: ref existing, .. } if existing.borrow() == key => {
                    return Some(slot_index);
                }
                Slot::Occupied { .. } => {}
                Slot::Vacant => return None,
            }
        }

        // Every reachable slot is occupied by a different key
        None
    }

    /// Place an entry along the probe sequence, overwriting an equal key
    ///
    /// The probe sequence does not reach every slot of the table, so even
    /// below the load-factor threshold a full scan can come up empty. When
    /// that happens the table grows and the placement retries against the
    /// larger capacity.
    fn insert_entry(&mut self, key: K, value: V) {
        loop {
            let capacity = self.capacity();
            let base = hash_of(&key) as usize % capacity;

            let mut target = None;
            for step in 0..capacity {
                let slot_index = (base + step * step) % capacity;
                match self.slots[slot_index] {
                    Slot::Occupied { key: ref existing, .. } if *existing == key => {
                        target = Some(slot_index);
                        break;
                    }
                    Slot::Occupied { .. } => {}
                    Slot::Vacant => {
                        target = Some(slot_index);
                        break;
                    }
                }
            }

            match target {
                Some(slot_index) => {
                    match &mut self.slots[slot_index] {
                        Slot::Occupied { value: stored, .. } => *stored = value,
                        vacant => {
                            *vacant = Slot::Occupied { key, value };
                            self.count += 1;
                        }
                    }
                    return;
                }
                None => self.grow(),
            }
        }
    }

    /// Allocate a larger table and re-insert every occupied entry
    fn grow(&mut self) {
        let new_capacity = if self.capacity() == 0 {
            INITIAL_CAPACITY
        } else {
            self.capacity() * 2
        };

        let old_slots = std::mem::replace(
            &mut self.slots,
            (0..new_capacity).map(|_| Slot::Vacant).collect(),
        );
        self.count = 0;

        for slot in old_slots.into_vec() {
            if let Slot::Occupied { key, value } = slot {
                self.insert_entry(key, value);
            }
        }
    }
}

impl<K: Hash + Eq, V> Default for ProbeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic, uniformly distributing hash over any hashable key
fn hash_of<Q: Hash + ?Sized>(key: &Q) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}
