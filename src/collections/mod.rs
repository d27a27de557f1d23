//! Core Containers
//!
//! The two from-scratch generic data structures the index is built on.
//!
//! ## Responsibilities
//! - `GrowableList<T>`: insertion-ordered sequence, amortized O(1) append
//! - `ProbeMap<K, V>`: open-addressing hash map, quadratic probing
//!
//! ## Design Choice
//! Neither container uses a std collection for its storage. Both own a boxed
//! slot slice with explicit capacity/length bookkeeping, so the growth factor
//! and load-factor behavior are exactly the documented policy rather than
//! whatever `Vec`/`HashMap` happen to do in a given release.

mod list;
mod map;

pub use list::GrowableList;
pub use map::ProbeMap;
