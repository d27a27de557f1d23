//! # invex
//!
//! An in-memory tabular-data index:
//! - Loads delimited records from a data file
//! - Point lookups by unique id
//! - Multi-value lookups by a case-folded grouping key
//! - Containers built from scratch (no std collections on the hot path)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Command Loop (CLI)                       │
//! │              find <id> / listInventory <cat>                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Inventory                               │
//! │          (record list + id map + category map)               │
//! └──────┬───────────────────┬──────────────────────┬───────────┘
//!        │                   │                      │
//!        ▼                   ▼                      ▼
//! ┌─────────────┐   ┌────────────────┐   ┌──────────────────────┐
//! │GrowableList │   │   ProbeMap     │   │      ProbeMap        │
//! │  <Record>   │   │ id → position  │   │ category → positions │
//! └─────────────┘   └────────────────┘   └──────────────────────┘
//! ```
//!
//! Both maps store integer positions into the record list, never references.
//! The list is append-only for the lifetime of the index, so positions are
//! stable and the three containers share no aliased state.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod collections;
pub mod csv;
pub mod record;
pub mod index;
pub mod loader;
pub mod command;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{InvexError, Result};
pub use config::Config;
pub use collections::{GrowableList, ProbeMap};
pub use index::Inventory;
pub use record::Record;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of invex
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
