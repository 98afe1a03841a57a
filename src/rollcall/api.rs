//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns the in-memory
//! [`Roster`] and the storage it came from, and is the single entry point for every
//! rollcall operation, whatever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** each [`Command`] to its command function
//! - **Persists** the roster after every successful mutating command
//! - **Rolls back** the in-memory roster when that save fails
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Terminal output**: No stdout or stderr
//! - **Load fallback policy**: [`RollcallApi::open`] reports load errors; the caller
//!   decides whether to start empty
//!
//! ## Generic Over RosterStorage
//!
//! `RollcallApi<S: RosterStorage>` runs against any storage backend:
//! - Production: `RollcallApi<JsonFileStorage>`
//! - Testing: `RollcallApi<MemStorage>`

use crate::commands::{self, CmdResult, Command, StudentEdit};
use crate::error::Result;
use crate::model::{AttendanceDate, StudentDraft};
use crate::roster::Roster;
use crate::storage::RosterStorage;
use crate::view::{FilteredView, StudentFilter};

/// The main API facade for rollcall operations.
pub struct RollcallApi<S: RosterStorage> {
    roster: Roster,
    storage: S,
}

impl<S: RosterStorage> RollcallApi<S> {
    pub fn new(storage: S, roster: Roster) -> Self {
        Self { roster, storage }
    }

    /// Loads the saved roster, or starts empty when nothing has been saved yet.
    pub fn open(storage: S) -> Result<Self> {
        let roster = storage.load()?.unwrap_or_default();
        Ok(Self::new(storage, roster))
    }

    /// Runs `command`, saving afterwards if it changed the roster.
    ///
    /// A failed command leaves the roster as it was. So does a failed save: the
    /// roster is restored to its state before the command and the storage error is
    /// returned.
    pub fn execute(&mut self, command: &Command, today: AttendanceDate) -> Result<CmdResult> {
        tracing::debug!(command = command.word(), "dispatching");

        if !command.mutates() {
            return commands::execute(&mut self.roster, command, today);
        }

        let previous = self.roster.clone();
        let result = commands::execute(&mut self.roster, command, today)?;
        if let Err(e) = self.storage.save(&self.roster) {
            tracing::warn!(command = command.word(), error = %e, "save failed, rolling back");
            self.roster = previous;
            return Err(e);
        }
        Ok(result)
    }

    /// Runs `command` with the current local day as the day `mark` records.
    pub fn execute_today(&mut self, command: &Command) -> Result<CmdResult> {
        let today = AttendanceDate::new(chrono::Local::now().date_naive())?;
        self.execute(command, today)
    }

    pub fn add_student(&mut self, draft: StudentDraft) -> Result<CmdResult> {
        self.execute_today(&Command::Add(draft))
    }

    pub fn delete_student(&mut self, id: &str) -> Result<CmdResult> {
        self.execute_today(&Command::Delete { id: id.to_string() })
    }

    pub fn edit_student(&mut self, id: &str, edit: StudentEdit) -> Result<CmdResult> {
        let command = Command::Edit {
            id: id.to_string(),
            edit,
        };
        self.execute_today(&command)
    }

    pub fn find_students<K: AsRef<str>>(&mut self, keywords: &[K]) -> Result<CmdResult> {
        let keywords = keywords.iter().map(|k| k.as_ref().to_string()).collect();
        self.execute_today(&Command::Find { keywords })
    }

    pub fn list_students(&mut self) -> Result<CmdResult> {
        self.execute_today(&Command::List)
    }

    pub fn clear(&mut self) -> Result<CmdResult> {
        self.execute_today(&Command::Clear)
    }

    pub fn mark_present(&mut self, id: &str) -> Result<CmdResult> {
        self.execute_today(&Command::Mark { id: id.to_string() })
    }

    pub fn view(&self, filter: StudentFilter) -> FilteredView<'_> {
        FilteredView::with_filter(&self.roster, filter)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollcallError;
    use crate::storage::memory::MemStorage;
    use crate::test_utils::{alice_draft, carl_draft, typical_roster};

    fn day(raw: &str) -> AttendanceDate {
        AttendanceDate::parse(raw).unwrap()
    }

    fn api_with_typical() -> RollcallApi<MemStorage> {
        let storage = MemStorage::new();
        storage.save(&typical_roster()).unwrap();
        RollcallApi::open(storage).unwrap()
    }

    #[test]
    fn test_open_empty_storage() {
        let api = RollcallApi::open(MemStorage::new()).unwrap();
        assert!(api.roster().is_empty());
    }

    #[test]
    fn test_open_loads_saved_roster() {
        let api = api_with_typical();
        assert!(api.roster().fully_equals(&typical_roster()));
    }

    #[test]
    fn test_open_reports_bad_file() {
        let storage = MemStorage::with_content(r#"{"students": [{"name": "Alex"}]}"#);
        assert!(matches!(
            RollcallApi::open(storage),
            Err(RollcallError::PersistenceFormat { index: 0, .. })
        ));
    }

    #[test]
    fn test_mutating_command_saves() {
        let mut api = RollcallApi::open(MemStorage::new()).unwrap();
        api.add_student(carl_draft()).unwrap();

        let reloaded = api.storage().load().unwrap().unwrap();
        assert!(reloaded.fully_equals(api.roster()));
    }

    #[test]
    fn test_read_only_command_does_not_save() {
        let mut api = RollcallApi::new(MemStorage::new(), typical_roster());
        api.list_students().unwrap();
        api.find_students(&["alice"]).unwrap();
        assert!(api.storage().content().is_none());
    }

    #[test]
    fn test_mark_records_given_day() {
        let mut api = api_with_typical();
        let command = Command::Mark { id: "C03C".into() };
        let result = api.execute(&command, day("2024-03-04")).unwrap();

        assert!(result.feedback().unwrap().contains("C03C"));
        let carl = &result.affected_students[0];
        assert!(carl.is_present());
        assert!(carl.attendance().contains(&day("2024-03-04")));
    }

    #[test]
    fn test_mark_leaves_whole_roster_visible() {
        let mut api = api_with_typical();
        api.mark_present("A01A").unwrap();
        assert_eq!(api.view(StudentFilter::All).len(), api.roster().len());
    }

    #[test]
    fn test_presence_is_not_persisted() {
        let mut api = api_with_typical();
        api.mark_present("A01A").unwrap();

        let reloaded = api.storage().load().unwrap().unwrap();
        let alice = reloaded.all().iter().find(|s| s.id().as_str() == "A01A").unwrap();
        assert!(!alice.is_present());
    }

    #[test]
    fn test_failed_command_does_not_save() {
        let mut api = api_with_typical();
        let before = api.storage().content();
        assert!(matches!(
            api.add_student(alice_draft()),
            Err(RollcallError::DuplicateStudent(_))
        ));
        assert_eq!(api.storage().content(), before);
    }

    #[test]
    fn test_save_failure_rolls_back() {
        let mut api = api_with_typical();
        let before = api.roster().clone();
        api.storage().set_simulate_write_error(true);

        assert!(matches!(api.clear(), Err(RollcallError::Io(_))));
        assert!(api.roster().fully_equals(&before));
        assert_eq!(api.roster().revision(), before.revision());

        assert!(api.delete_student("A01A").is_err());
        assert_eq!(api.roster().len(), 3);
    }

    #[test]
    fn test_edit_through_api() {
        let mut api = api_with_typical();
        let edit = StudentEdit {
            phone: Some("91234567".into()),
            ..StudentEdit::default()
        };
        api.edit_student("B02B", edit).unwrap();

        let reloaded = api.storage().load().unwrap().unwrap();
        let benson = reloaded.all().iter().find(|s| s.id().as_str() == "B02B").unwrap();
        assert_eq!(benson.phone().as_str(), "91234567");
    }
}
