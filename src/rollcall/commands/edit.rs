use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RollcallError};
use crate::model::{Address, Email, Name, Phone, Student, StudentId, ValidationError};
use crate::roster::Roster;

use super::helpers::student_by_id;

pub const COMMAND_WORD: &str = "edit";
pub const USAGE: &str = "edit: Edits the details of the student identified by the student id. \
Existing values will be overwritten by the input values.\n\
Parameters: STUDENT_ID [--name NAME] [--id STUDENT_ID] [--phone PHONE] [--email EMAIL] \
[--address ADDRESS]\n\
Example: edit A01A --phone 91234567 --email johndoe@example.com";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

/// Replacement values for some of a student's fields. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentEdit {
    pub name: Option<String>,
    pub id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl StudentEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.id.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
    }

    /// Builds the edited record. Attendance and session presence carry over.
    pub fn apply(&self, student: &Student) -> std::result::Result<Student, ValidationError> {
        let mut edited = student.clone();
        if let Some(raw) = &self.name {
            edited = edited.with_name(Name::new(raw.as_str())?);
        }
        if let Some(raw) = &self.id {
            edited = edited.with_id(StudentId::new(raw.as_str())?);
        }
        if let Some(raw) = &self.phone {
            edited = edited.with_phone(Phone::new(raw.as_str())?);
        }
        if let Some(raw) = &self.email {
            edited = edited.with_email(Email::new(raw.as_str())?);
        }
        if let Some(raw) = &self.address {
            edited = edited.with_address(Address::new(raw.as_str())?);
        }
        Ok(edited)
    }
}

pub fn run(roster: &mut Roster, raw_id: &str, edit: &StudentEdit) -> Result<CmdResult> {
    if edit.is_empty() {
        return Err(RollcallError::Command(format!(
            "{}\n{}",
            MESSAGE_NOT_EDITED, USAGE
        )));
    }

    let (id, edited) = {
        let (id, student) = student_by_id(roster, raw_id)?;
        (id, edit.apply(student)?)
    };
    roster.replace(&id, edited.clone())?;

    let mut result = CmdResult::default()
        .with_affected_students(vec![edited.clone()])
        .with_refresh();
    result.add_message(CmdMessage::success(format!(
        "Edited student: {} ({})",
        edited.name(),
        edited.id()
    )));
    Ok(result)
}
