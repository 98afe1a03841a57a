use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;

pub const COMMAND_WORD: &str = "clear";
pub const USAGE: &str = "clear: Removes every student from the student list.";

pub fn run(roster: &mut Roster) -> Result<CmdResult> {
    roster.clear();
    let mut result = CmdResult::default().with_refresh();
    result.add_message(CmdMessage::success("Student list has been cleared!"));
    Ok(result)
}
