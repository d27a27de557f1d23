//! Command Surface
//!
//! Parses interactive commands and dispatches them against an index.
//!
//! ## Commands
//! - `find <id>`            → unique-id lookup, full record display
//! - `listInventory <cat>`  → category lookup, count + one summary per match
//! - `exit` / `quit`        → terminate (handled by the caller)
//! - anything else          → "Unrecognized command"
//!
//! The dispatcher is a pure function over `&Inventory`: it renders output
//! text and carries no state of its own.

use crate::index::Inventory;
use crate::record::Record;

/// A parsed interactive command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up one record by unique id
    Find { id: String },

    /// List every record in a category
    ListInventory { category: String },

    /// Terminate the session
    Exit,

    /// Anything the parser did not recognize
    Unknown { token: String },
}

impl Command {
    /// Parse a command from one input line
    ///
    /// Returns `None` for blank lines. A missing argument parses as an
    /// empty one, which then simply fails its lookup.
    pub fn parse(line: &str) -> Option<Command> {
        let mut parts = line.split_whitespace();
        let token = parts.next()?;

        let command = match token {
            "exit" | "quit" => Command::Exit,
            "find" => Command::Find {
                id: parts.next().unwrap_or("").to_string(),
            },
            "listInventory" => Command::ListInventory {
                category: parts.next().unwrap_or("").to_string(),
            },
            other => Command::Unknown {
                token: other.to_string(),
            },
        };

        Some(command)
    }
}

/// Execute a command against the index, rendering its output text
///
/// `Exit` renders nothing; callers check for it before dispatching.
pub fn dispatch(inventory: &Inventory, command: &Command) -> String {
    match command {
        Command::Find { id } => match inventory.find_by_id(id) {
            Some(record) => render_record(record),
            None => "Product not found in inventory".to_string(),
        },
        Command::ListInventory { category } => match inventory.find_by_category(category) {
            Some(positions) if !positions.is_empty() => {
                let mut lines = Vec::with_capacity(positions.len() + 1);
                lines.push(format!(
                    "Found {} products in category '{}':",
                    positions.len(),
                    category
                ));
                for position in positions.iter() {
                    match inventory.record_at(*position) {
                        Ok(record) => lines.push(format!("{} : {}", record.id, record.name)),
                        Err(_) => continue,
                    }
                }
                lines.join("\n")
            }
            _ => "Category not found".to_string(),
        },
        Command::Unknown { token } => format!("Unrecognized command: {}", token),
        Command::Exit => String::new(),
    }
}

/// Full record display for `find`
fn render_record(record: &Record) -> String {
    let categories: Vec<&str> = record.categories.iter().map(String::as_str).collect();
    format!(
        "Product ID: {}\nProduct Name: {}\nProduct Categories: {}",
        record.id,
        record.name,
        categories.join(" | ")
    )
}
