//! # Rollcall Architecture
//!
//! Rollcall is a **UI-agnostic student roster library**: it keeps a validated list of
//! students, records their attendance, and persists the list as JSON. The `rollcall`
//! binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs + args.rs)                                    │
//! │  - Parses arguments, prints results, owns exit codes        │
//! │  - Applies the load fallback policy from config             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the roster and its storage                          │
//! │  - Saves after mutations, rolls back on save failure        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validates inputs, mutates the roster, builds CmdResult   │
//! │  - No I/O                                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Roster + Views (roster.rs, view.rs)                        │
//! │  - Ordered, duplicate-free students; derived filtered views │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (storage/)                                   │
//! │  - RosterStorage trait, JSON file and in-memory backends    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Values All the Way Down
//!
//! Every field of a [`Student`](model::Student) is a validated newtype, so a student
//! that exists is a valid student. Students are immutable: marking attendance or
//! editing a field builds a new value that the [`Roster`](roster::Roster) swaps in.
//! Filtering never mutates anything; a [`FilteredView`](view::FilteredView) borrows
//! the roster and derives its contents on read.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`roster`]: The ordered student collection
//! - [`view`]: Filters and filtered views
//! - [`storage`]: Storage abstraction, JSON exchange format and backends
//! - [`model`]: Field value types and the student record
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod roster;
pub mod storage;
pub mod view;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
