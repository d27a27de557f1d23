//! Record Model
//!
//! The immutable-after-construction value stored in the index, plus the
//! field-normalization and category-parsing helpers the loader and index
//! share.

use crate::collections::GrowableList;

/// A single indexed record
///
/// Owned by the record list once added; the lookup maps reference it only
/// through its integer position, never directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Category labels; never empty (an empty category field yields the
    /// sentinel label instead)
    pub categories: GrowableList<String>,
}

impl Record {
    /// Create a record from its three fields
    pub fn new(id: impl Into<String>, name: impl Into<String>, categories: GrowableList<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            categories,
        }
    }
}

/// Case-fold a grouping key or header name for case-insensitive comparison
pub fn fold_key(input: &str) -> String {
    input.to_lowercase()
}

/// Split a raw category field into labels
///
/// Segments are separated by `separator` and trimmed of surrounding
/// whitespace; empty segments (and an entirely empty field) become the
/// sentinel label. The result always holds at least one label.
pub fn parse_categories(input: &str, separator: char, sentinel: &str) -> GrowableList<String> {
    let mut labels = GrowableList::new();
    for segment in input.split(separator) {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            labels.push(sentinel.to_string());
        } else {
            labels.push(trimmed.to_string());
        }
    }
    labels
}
