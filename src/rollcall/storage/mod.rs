//! # Storage Layer
//!
//! Persistence for the roster, kept behind the [`RosterStorage`] trait so the API can
//! run against a real file or against memory in tests.
//!
//! ## Exchange Format
//!
//! The roster is stored as pretty-printed JSON, one flat string record per student,
//! in roster order:
//!
//! ```text
//! {
//!   "students": [
//!     {
//!       "name": "Alice Pauline",
//!       "identifier": "A01A",
//!       "phone": "94351253",
//!       "email": "alice@example.com",
//!       "address": "123, Jurong West Ave 6, #08-111",
//!       "attendance": ["2024-01-15"]
//!     }
//!   ]
//! }
//! ```
//!
//! See [`json`] for the conversion rules.
//!
//! ## Load Policy
//!
//! Loading is all-or-nothing. A file without a `students` list is rejected outright.
//! The first record that is missing a field, carries a malformed or mistyped value,
//! or repeats an identifier aborts the load with an error naming its position.
//! Deciding what to do next (start empty, give up) is the caller's job.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStorage`]: one JSON file on disk, replaced atomically on save.
//! - [`memory::MemStorage`]: holds the serialized JSON in memory, for tests.

use crate::error::Result;
use crate::roster::Roster;

pub mod fs;
pub mod json;
pub mod memory;

/// Abstract interface for roster persistence.
pub trait RosterStorage {
    /// Load the saved roster. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<Roster>>;

    /// Replace whatever was saved with `roster`.
    fn save(&self, roster: &Roster) -> Result<()>;
}
