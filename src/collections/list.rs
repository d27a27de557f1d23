//! GrowableList implementation
//!
//! Contiguous, insertion-ordered sequence with explicit capacity management.
//!
//! ## Storage Layout
//! ```text
//! ┌──────┬──────┬──────┬──────┬──────┬──────┐
//! │ S(0) │ S(1) │ S(2) │ None │ None │ None │
//! └──────┴──────┴──────┴──────┴──────┴──────┘
//!  ◄────── len ──────► ◄──── spare slots ───►
//!  ◄─────────────── capacity ──────────────►
//! ```
//!
//! Slots `[0, len)` are always occupied, in append order. Slots
//! `[len, capacity)` are allocated but vacant. Growth doubles capacity
//! (minimum 8), moves the live elements into the new buffer, and releases
//! the old one.

use crate::error::{InvexError, Result};

/// Insertion-ordered sequence with amortized O(1) append and O(1) access
#[derive(Debug, Clone)]
pub struct GrowableList<T> {
    /// Backing storage; `storage.len()` is the capacity
    storage: Box<[Option<T>]>,

    /// Count of live elements, always `<= capacity`
    len: usize,
}

impl<T> GrowableList<T> {
    /// Create an empty list with no allocation (`len = capacity = 0`)
    pub fn new() -> Self {
        Self {
            storage: Box::default(),
            len: 0,
        }
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no live elements are present
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated slot count, always `>= len()`
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Append a value, growing the backing storage when full
    ///
    /// Growth policy: `max(8, capacity * 2)`. Worst-case O(len) during a
    /// grow, amortized O(1) across a sequence of appends.
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            let new_capacity = if self.capacity() == 0 {
                8
            } else {
                self.capacity() * 2
            };
            self.grow(new_capacity);
        }
        self.storage[self.len] = Some(value);
        self.len += 1;
    }

    /// Checked access: `Err(IndexOutOfRange)` when `position >= len()`
    pub fn get(&self, position: usize) -> Result<&T> {
        if position >= self.len {
            return Err(InvexError::IndexOutOfRange {
                position,
                len: self.len,
            });
        }
        match self.storage[position] {
            Some(ref value) => Ok(value),
            // Unreachable: slots below len are occupied by invariant
            None => Err(InvexError::IndexOutOfRange {
                position,
                len: self.len,
            }),
        }
    }

    /// Checked mutable access: `Err(IndexOutOfRange)` when `position >= len()`
    pub fn get_mut(&mut self, position: usize) -> Result<&mut T> {
        if position >= self.len {
            return Err(InvexError::IndexOutOfRange {
                position,
                len: self.len,
            });
        }
        match self.storage[position] {
            Some(ref mut value) => Ok(value),
            None => Err(InvexError::IndexOutOfRange {
                position,
                len: self.len,
            }),
        }
    }

    /// Iterate live elements in append order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.storage[..self.len].iter().flatten()
    }

    /// Logical clear: `len = 0`, capacity retained
    ///
    /// Elements are dropped eagerly so nothing beyond the new length stays
    /// observable (or alive) through the retained buffer.
    pub fn clear(&mut self) {
        for slot in self.storage[..self.len].iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    /// Replace the backing storage with a larger buffer, moving live elements
    fn grow(&mut self, new_capacity: usize) {
        let mut new_storage: Box<[Option<T>]> = (0..new_capacity).map(|_| None).collect();
        for (new_slot, old_slot) in new_storage.iter_mut().zip(self.storage.iter_mut()) {
            *new_slot = old_slot.take();
        }
        self.storage = new_storage;
    }
}

impl<T> Default for GrowableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Equality over live elements only; capacity never participates
impl<T: PartialEq> PartialEq for GrowableList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for GrowableList<T> {}

/// Unchecked-contract access: panics on out-of-range positions
///
/// This is the narrow counterpart of [`GrowableList::get`]; callers take on
/// the bounds check themselves. Prefer the checked accessors.
impl<T> std::ops::Index<usize> for GrowableList<T> {
    type Output = T;

    fn index(&self, position: usize) -> &T {
        match self.storage[position] {
            Some(ref value) => value,
            None => panic!("position {} beyond list length {}", position, self.len),
        }
    }
}

impl<T> std::ops::IndexMut<usize> for GrowableList<T> {
    fn index_mut(&mut self, position: usize) -> &mut T {
        let len = self.len;
        match self.storage[position] {
            Some(ref mut value) => value,
            None => panic!("position {} beyond list length {}", position, len),
        }
    }
}

impl<T> FromIterator<T> for GrowableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push(value);
        }
        list
    }
}
