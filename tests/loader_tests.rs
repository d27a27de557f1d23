//! Loader Tests
//!
//! Tests verify:
//! - Happy-path import
//! - Case-insensitive header detection
//! - Quoted-field handling end to end
//! - Per-row skip rules (short rows, empty ids)
//! - Whole-load failure modes (missing file, empty file, missing columns)

use std::fs;
use std::path::PathBuf;

use invex::error::InvexError;
use invex::{loader, Config};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn write_data_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("data.csv");
    fs::write(&path, contents).unwrap();
    path
}

fn config_for(path: PathBuf) -> Config {
    Config::builder().data_file(path).build()
}

// =============================================================================
// Happy Path Tests
// =============================================================================

#[test]
fn test_load_two_records() {
    let dir = TempDir::new().unwrap();
    let path = write_data_file(
        &dir,
        "uniq_id,product_name,category\n\
         A1,First,Books\n\
         A2,Second,books|Toys\n",
    );

    let (inventory, report) = loader::load_file(&config_for(path)).unwrap();

    assert_eq!(report.imported, 2);
    assert_eq!(report.skipped, 0);
    assert_eq!(inventory.len(), 2);
    assert_eq!(inventory.find_by_id("A1").unwrap().name, "First");
    assert_eq!(inventory.find_by_category("BOOKS").unwrap().len(), 2);
    assert_eq!(inventory.find_by_category("toys").unwrap().len(), 1);
}

#[test]
fn test_load_headers_match_case_insensitively() {
    let dir = TempDir::new().unwrap();
    let path = write_data_file(
        &dir,
        "UNIQ_ID,Product_Name,CATEGORY\n\
         A1,First,Books\n",
    );

    let (inventory, report) = loader::load_file(&config_for(path)).unwrap();

    assert_eq!(report.imported, 1);
    assert!(inventory.find_by_id("A1").is_some());
}

#[test]
fn test_load_reordered_and_extra_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_data_file(
        &dir,
        "price,category,uniq_id,product_name\n\
         9.99,Books,A1,First\n",
    );

    let (inventory, _) = loader::load_file(&config_for(path)).unwrap();

    let record = inventory.find_by_id("A1").unwrap();
    assert_eq!(record.name, "First");
    assert_eq!(record.categories.get(0).unwrap(), "Books");
}

#[test]
fn test_load_quoted_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_data_file(
        &dir,
        "uniq_id,product_name,category\n\
         A1,\"Name, with comma\",\"Books|Sci-Fi\"\n",
    );

    let (inventory, _) = loader::load_file(&config_for(path)).unwrap();

    let record = inventory.find_by_id("A1").unwrap();
    assert_eq!(record.name, "Name, with comma");
    assert_eq!(record.categories.len(), 2);
}

#[test]
fn test_load_empty_category_field_gets_sentinel() {
    let dir = TempDir::new().unwrap();
    let path = write_data_file(
        &dir,
        "uniq_id,product_name,category\n\
         A1,First,\n",
    );

    let (inventory, _) = loader::load_file(&config_for(path)).unwrap();

    assert_eq!(inventory.find_by_category("na").unwrap().len(), 1);
}

// =============================================================================
// Skip Rule Tests
// =============================================================================

#[test]
fn test_short_rows_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = write_data_file(
        &dir,
        "uniq_id,product_name,category\n\
         A1,First,Books\n\
         short-row\n\
         A2,Second,Toys\n",
    );

    let (inventory, report) = loader::load_file(&config_for(path)).unwrap();

    assert_eq!(report.imported, 2);
    assert_eq!(report.skipped, 1);
    assert!(inventory.find_by_id("A2").is_some());
    assert!(inventory.find_by_id("short-row").is_none());
}

#[test]
fn test_empty_id_rows_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = write_data_file(
        &dir,
        "uniq_id,product_name,category\n\
         ,NoId,Books\n\
         A1,First,Books\n",
    );

    let (inventory, report) = loader::load_file(&config_for(path)).unwrap();

    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped, 1);
    // The skipped row inserted nothing, not even its category
    assert_eq!(inventory.find_by_category("books").unwrap().len(), 1);
}

#[test]
fn test_header_only_file_loads_empty_index() {
    let dir = TempDir::new().unwrap();
    let path = write_data_file(&dir, "uniq_id,product_name,category\n");

    let (inventory, report) = loader::load_file(&config_for(path)).unwrap();

    assert_eq!(report.imported, 0);
    assert!(inventory.is_empty());
}

// =============================================================================
// Failure Mode Tests
// =============================================================================

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.csv");

    let err = loader::load_file(&config_for(path)).unwrap_err();
    assert!(matches!(err, InvexError::Io(_)));
}

#[test]
fn test_empty_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_data_file(&dir, "");

    let err = loader::load_file(&config_for(path)).unwrap_err();
    assert!(matches!(err, InvexError::EmptySource));
}

#[test]
fn test_missing_column_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_data_file(
        &dir,
        "uniq_id,product_name,description\n\
         A1,First,whatever\n",
    );

    let err = loader::load_file(&config_for(path)).unwrap_err();
    match err {
        InvexError::MissingColumn(name) => assert_eq!(name, "category"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_custom_column_names() {
    let dir = TempDir::new().unwrap();
    let path = write_data_file(
        &dir,
        "sku,title,tags\n\
         S1,Widget,hardware|tools\n",
    );

    let config = Config::builder()
        .data_file(path)
        .id_column("sku")
        .name_column("title")
        .category_column("tags")
        .build();

    let (inventory, report) = loader::load_file(&config).unwrap();

    assert_eq!(report.imported, 1);
    assert_eq!(inventory.find_by_id("S1").unwrap().name, "Widget");
    assert_eq!(inventory.find_by_category("TOOLS").unwrap().len(), 1);
}
