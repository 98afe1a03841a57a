use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use crate::view::FilteredView;

pub const COMMAND_WORD: &str = "list";
pub const USAGE: &str = "list: Lists all students.";

pub fn run(roster: &Roster) -> Result<CmdResult> {
    let listed: Vec<_> = FilteredView::new(roster).iter().cloned().collect();
    let mut result = CmdResult::default().with_refresh();
    result.add_message(CmdMessage::info("Listed all students"));
    Ok(result.with_listed_students(listed))
}
