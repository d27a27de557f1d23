//! Data-file Loader
//!
//! Builds an [`Inventory`] from a delimited data file.
//!
//! ## Load Protocol
//! 1. Open the file (unreadable → whole load fails)
//! 2. Read the header row (missing → `EmptySource`)
//! 3. Locate the id/name/category columns case-insensitively
//!    (any missing → `MissingColumn`, whole load fails)
//! 4. Import data rows one at a time; rows too short for the required
//!    columns or with an empty unique id are skipped individually and
//!    loading continues — no partial-row data ever reaches the index

use std::fs::File;
use std::io::BufReader;

use crate::config::Config;
use crate::csv::RowReader;
use crate::error::{InvexError, Result};
use crate::index::Inventory;
use crate::record::{fold_key, parse_categories, Record};

/// Outcome counters for a completed load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows imported into the index
    pub imported: usize,

    /// Rows skipped (too short, or empty unique id)
    pub skipped: usize,
}

/// Load the configured data file into a fresh index
///
/// Returns the built index and its import counters, or an error when the
/// file is unreadable, empty, or missing a required column — in which case
/// no index is built at all.
pub fn load_file(config: &Config) -> Result<(Inventory, LoadReport)> {
    let file = File::open(&config.data_file).map_err(|e| {
        tracing::error!("failed to open data file {}: {}", config.data_file.display(), e);
        InvexError::Io(e)
    })?;

    let mut rows = RowReader::new(BufReader::new(file));

    let header = rows.read_row()?.ok_or(InvexError::EmptySource)?;
    let columns = locate_columns(&header, config)?;

    tracing::debug!(
        id = columns.id,
        name = columns.name,
        category = columns.category,
        "header columns located"
    );

    let mut inventory = Inventory::new();
    let mut report = LoadReport {
        imported: 0,
        skipped: 0,
    };

    while let Some(row) = rows.read_row()? {
        if row.len() < columns.required_len() {
            tracing::debug!(fields = row.len(), "skipping short row");
            report.skipped += 1;
            continue;
        }

        if row[columns.id].is_empty() {
            tracing::debug!("skipping row with empty unique id");
            report.skipped += 1;
            continue;
        }

        let categories = parse_categories(
            &row[columns.category],
            config.category_separator,
            &config.sentinel_label,
        );
        let record = Record::new(row[columns.id].clone(), row[columns.name].clone(), categories);

        inventory.add_record(record);
        report.imported += 1;
    }

    tracing::info!(
        imported = report.imported,
        skipped = report.skipped,
        "data file loaded"
    );

    Ok((inventory, report))
}

/// Positions of the three required columns within the header row
struct ColumnLayout {
    id: usize,
    name: usize,
    category: usize,
}

impl ColumnLayout {
    /// Minimum field count a row needs to cover every required column
    fn required_len(&self) -> usize {
        self.id.max(self.name).max(self.category) + 1
    }
}

/// Locate the required columns by case-insensitive header match
fn locate_columns(header: &[String], config: &Config) -> Result<ColumnLayout> {
    let mut id = None;
    let mut name = None;
    let mut category = None;

    let want_id = fold_key(&config.id_column);
    let want_name = fold_key(&config.name_column);
    let want_category = fold_key(&config.category_column);

    for (position, column) in header.iter().enumerate() {
        let folded = fold_key(column);
        if folded == want_id {
            id = Some(position);
        } else if folded == want_name {
            name = Some(position);
        } else if folded == want_category {
            category = Some(position);
        }
    }

    Ok(ColumnLayout {
        id: id.ok_or_else(|| InvexError::MissingColumn(config.id_column.clone()))?,
        name: name.ok_or_else(|| InvexError::MissingColumn(config.name_column.clone()))?,
        category: category.ok_or_else(|| InvexError::MissingColumn(config.category_column.clone()))?,
    })
}
