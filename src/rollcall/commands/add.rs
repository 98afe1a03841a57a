use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Student, StudentDraft};
use crate::roster::Roster;

pub const COMMAND_WORD: &str = "add";
pub const USAGE: &str = "add: Adds a student to the student list.\n\
Parameters: --name NAME --id STUDENT_ID --phone PHONE --email EMAIL --address ADDRESS\n\
Example: add --name \"John Doe\" --id A01A --phone 98765432 --email johnd@example.com \
--address \"311, Clementi Ave 2, #02-25\"";

/// Adds a new student. A draft without attendance starts with none recorded.
pub fn run(roster: &mut Roster, draft: &StudentDraft) -> Result<CmdResult> {
    let mut draft = draft.clone();
    draft.attendance.get_or_insert_with(Vec::new);

    let student = Student::create(&draft)?;
    roster.add(student.clone())?;

    let mut result = CmdResult::default().with_refresh();
    result.add_message(CmdMessage::success(format!(
        "New student added: {} ({})",
        student.name(),
        student.id()
    )));
    result.affected_students.push(student);
    Ok(result)
}
