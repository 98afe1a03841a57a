use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;

use super::helpers::student_by_id;

pub const COMMAND_WORD: &str = "delete";
pub const USAGE: &str = "delete: Deletes the student identified by the student id.\n\
Parameters: STUDENT_ID\n\
Example: delete A01A";

pub fn run(roster: &mut Roster, raw_id: &str) -> Result<CmdResult> {
    let (id, _) = student_by_id(roster, raw_id)?;
    let removed = roster.remove(&id)?;

    let mut result = CmdResult::default().with_refresh();
    result.add_message(CmdMessage::success(format!(
        "Deleted student: {} ({})",
        removed.name(),
        removed.id()
    )));
    result.affected_students.push(removed);
    Ok(result)
}
