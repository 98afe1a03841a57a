//! # Command Layer
//!
//! This module contains the **core business logic** of rollcall. Each command lives in
//! its own submodule as a plain function over a [`Roster`].
//!
//! ## Role and Responsibilities
//!
//! - Validate every input by constructing field values *before* touching the roster
//! - Apply the change through the roster's narrow mutation API
//! - Return a structured [`CmdResult`] (students to show, messages with levels)
//!
//! Because validation comes first and every roster mutation is all-or-nothing, a
//! command that returns `Err` has not changed the roster.
//!
//! ## Filtering
//!
//! Commands that need to narrow the roster (mark, delete, edit, find) do it with a
//! local [`FilteredView`](crate::view::FilteredView). The view is gone when the
//! command returns, so nothing ever leaves a narrowed list behind for the next
//! command or for the presentation layer.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: persistence happens in the API layer after a command succeeds
//! - **Argument parsing**: commands receive a typed [`Command`]
//! - **Clock reads**: `mark` is handed the day to record
//!
//! ## Command Modules
//!
//! - [`add`]: Add a new student
//! - [`delete`]: Remove a student by id
//! - [`edit`]: Change some fields of a student
//! - [`find`]: List students whose names contain a keyword
//! - [`list`]: List every student
//! - [`clear`]: Remove every student
//! - [`mark`]: Mark a student present for a day
//! - [`helpers`]: Shared lookups

use crate::error::Result;
use crate::model::{AttendanceDate, Student, StudentDraft};
use crate::roster::Roster;

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod find;
pub mod helpers;
pub mod list;
pub mod mark;

pub use edit::StudentEdit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// What a successful command hands back to the presentation layer.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Students created or changed by the command, in their new state.
    pub affected_students: Vec<Student>,
    /// Students the command asks to be displayed.
    pub listed_students: Vec<Student>,
    pub messages: Vec<CmdMessage>,
    /// The full student list should be redrawn.
    pub refresh_list: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_students(mut self, students: Vec<Student>) -> Self {
        self.affected_students = students;
        self
    }

    pub fn with_listed_students(mut self, students: Vec<Student>) -> Self {
        self.listed_students = students;
        self
    }

    pub fn with_refresh(mut self) -> Self {
        self.refresh_list = true;
        self
    }

    /// The first message's text, which is the command's headline feedback.
    pub fn feedback(&self) -> Option<&str> {
        self.messages.first().map(|m| m.content.as_str())
    }
}

/// A fully-typed request, as produced by whatever parses user input.
///
/// Field values are still raw strings; the command validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(StudentDraft),
    Delete { id: String },
    Edit { id: String, edit: StudentEdit },
    Find { keywords: Vec<String> },
    List,
    Clear,
    Mark { id: String },
}

impl Command {
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => add::COMMAND_WORD,
            Command::Delete { .. } => delete::COMMAND_WORD,
            Command::Edit { .. } => edit::COMMAND_WORD,
            Command::Find { .. } => find::COMMAND_WORD,
            Command::List => list::COMMAND_WORD,
            Command::Clear => clear::COMMAND_WORD,
            Command::Mark { .. } => mark::COMMAND_WORD,
        }
    }

    /// Whether a successful run changes the roster and so needs saving.
    pub fn mutates(&self) -> bool {
        !matches!(self, Command::Find { .. } | Command::List)
    }
}

/// Runs one command against the roster. `today` is the day `mark` records.
pub fn execute(
    roster: &mut Roster,
    command: &Command,
    today: AttendanceDate,
) -> Result<CmdResult> {
    match command {
        Command::Add(draft) => add::run(roster, draft),
        Command::Delete { id } => delete::run(roster, id),
        Command::Edit { id, edit } => edit::run(roster, id, edit),
        Command::Find { keywords } => find::run(roster, keywords),
        Command::List => list::run(roster),
        Command::Clear => clear::run(roster),
        Command::Mark { id } => mark::run(roster, id, today),
    }
}
