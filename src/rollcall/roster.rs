//! # Roster Store
//!
//! The in-memory, ordered collection of students. It is the single owner of every
//! [`Student`] in a session: commands hand it new record values and it decides
//! whether they may go in.
//!
//! ## Invariants
//!
//! - No two students share a [`StudentId`], at every observable point.
//! - Insertion order is preserved; `replace` keeps the replaced record's position.
//! - A failed mutation leaves the roster exactly as it was (contents and
//!   [`revision`](Roster::revision)).

use crate::error::{Result, RollcallError};
use crate::model::{Student, StudentId};

#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
    revision: u64,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from records in order, rejecting the first duplicate identity.
    pub fn from_students(students: Vec<Student>) -> Result<Self> {
        let mut roster = Self::new();
        for student in students {
            roster.add(student)?;
        }
        roster.revision = 0;
        Ok(roster)
    }

    /// Appends a student unless one with the same id is already present.
    pub fn add(&mut self, student: Student) -> Result<()> {
        if self.contains(student.id()) {
            return Err(RollcallError::DuplicateStudent(student.id().clone()));
        }
        self.students.push(student);
        self.touch();
        Ok(())
    }

    /// Removes and returns the student with the given id.
    pub fn remove(&mut self, id: &StudentId) -> Result<Student> {
        let pos = self.position(id).ok_or(RollcallError::StudentNotFound)?;
        let removed = self.students.remove(pos);
        self.touch();
        Ok(removed)
    }

    /// Swaps the student identified by `target` for `replacement`, in place.
    ///
    /// The replacement may carry a new id, as long as no *other* student holds it.
    pub fn replace(&mut self, target: &StudentId, replacement: Student) -> Result<()> {
        let pos = self.position(target).ok_or(RollcallError::StudentNotFound)?;
        if replacement.id() != target && self.contains(replacement.id()) {
            return Err(RollcallError::DuplicateStudent(replacement.id().clone()));
        }
        self.students[pos] = replacement;
        self.touch();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.students.clear();
        self.touch();
    }

    pub fn get(&self, id: &StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    pub fn contains(&self, id: &StudentId) -> bool {
        self.get(id).is_some()
    }

    pub fn all(&self) -> &[Student] {
        &self.students
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Increases by one on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Record-by-record `fully_equals` comparison, order included.
    pub fn fully_equals(&self, other: &Roster) -> bool {
        self.len() == other.len()
            && self
                .students
                .iter()
                .zip(other.students.iter())
                .all(|(a, b)| a.fully_equals(b))
    }

    fn position(&self, id: &StudentId) -> Option<usize> {
        self.students.iter().position(|s| s.id() == id)
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Name, Phone};
    use crate::test_utils::{alice, benson, carl, typical_roster};

    fn ids(roster: &Roster) -> Vec<&str> {
        roster.iter().map(|s| s.id().as_str()).collect()
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut roster = Roster::new();
        roster.add(carl()).unwrap();
        roster.add(alice()).unwrap();
        roster.add(benson()).unwrap();
        assert_eq!(ids(&roster), vec!["C03C", "A01A", "B02B"]);
        assert_eq!(roster.revision(), 3);
    }

    #[test]
    fn test_add_duplicate_leaves_roster_unchanged() {
        let mut roster = typical_roster();
        let before = roster.clone();
        let revision = roster.revision();

        let impostor = benson().with_phone(Phone::new("11111111").unwrap());
        let err = roster.add(impostor).unwrap_err();
        assert!(matches!(err, RollcallError::DuplicateStudent(ref id) if id.as_str() == "B02B"));

        assert_eq!(roster.len(), before.len());
        assert!(roster.fully_equals(&before));
        assert_eq!(roster.revision(), revision);
    }

    #[test]
    fn test_remove_not_found() {
        let mut roster = typical_roster();
        let missing = StudentId::new("Z99Z").unwrap();
        match roster.remove(&missing) {
            Err(RollcallError::StudentNotFound) => {}
            other => panic!("Expected StudentNotFound, got {:?}", other),
        }
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_remove_returns_record() {
        let mut roster = typical_roster();
        let removed = roster.remove(alice().id()).unwrap();
        assert!(removed.fully_equals(&alice()));
        assert_eq!(ids(&roster), vec!["B02B", "C03C"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut roster = typical_roster();
        let renamed = benson().with_name(Name::new("Benson Renamed").unwrap());
        roster.replace(benson().id(), renamed).unwrap();

        assert_eq!(ids(&roster), vec!["A01A", "B02B", "C03C"]);
        assert_eq!(roster.all()[1].name().as_str(), "Benson Renamed");
    }

    #[test]
    fn test_replace_with_new_identity() {
        let mut roster = typical_roster();
        let moved = benson().with_id(StudentId::new("D04D").unwrap());
        roster.replace(benson().id(), moved).unwrap();
        assert_eq!(ids(&roster), vec!["A01A", "D04D", "C03C"]);
    }

    #[test]
    fn test_replace_rejects_collision_with_other_record() {
        let mut roster = typical_roster();
        let clash = benson().with_id(alice().id().clone());
        let err = roster.replace(benson().id(), clash).unwrap_err();
        assert!(matches!(err, RollcallError::DuplicateStudent(_)));
        assert!(roster.fully_equals(&typical_roster()));
    }

    #[test]
    fn test_from_students_rejects_duplicates() {
        let err = Roster::from_students(vec![alice(), benson(), alice()]).unwrap_err();
        assert!(matches!(err, RollcallError::DuplicateStudent(_)));

        let roster = Roster::from_students(vec![alice(), benson()]).unwrap();
        assert_eq!(roster.revision(), 0);
    }

    #[test]
    fn test_clear() {
        let mut roster = typical_roster();
        roster.clear();
        assert!(roster.is_empty());
        assert!(roster.get(alice().id()).is_none());
    }
}
