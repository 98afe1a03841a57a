use super::json::JsonRoster;
use super::RosterStorage;
use crate::error::{Result, RollcallError};
use crate::roster::Roster;
use std::cell::RefCell;
use std::io;

/// In-memory storage for testing.
///
/// Keeps the serialized JSON rather than the roster itself, so every save/load goes
/// through the same conversion as the file store. Uses `RefCell` since rollcall is
/// single-threaded.
#[derive(Default)]
pub struct MemStorage {
    content: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with raw file content, valid or not.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: RefCell::new(Some(content.into())),
            simulate_write_error: RefCell::new(false),
        }
    }

    /// Make every following `save` fail, for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }
}

impl RosterStorage for MemStorage {
    fn load(&self) -> Result<Option<Roster>> {
        match self.content.borrow().as_deref() {
            Some(content) => Ok(Some(JsonRoster::from_json(content)?.to_roster()?)),
            None => Ok(None),
        }
    }

    fn save(&self, roster: &Roster) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(RollcallError::Io(io::Error::other("simulated write error")));
        }
        let content = JsonRoster::from_roster(roster).to_json()?;
        *self.content.borrow_mut() = Some(content);
        Ok(())
    }
}
