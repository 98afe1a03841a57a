use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RollcallError};
use crate::roster::Roster;
use crate::view::{FilteredView, StudentFilter};

pub const COMMAND_WORD: &str = "find";
pub const USAGE: &str = "find: Finds all students whose names contain any of the specified \
keywords (case-insensitive) and displays them.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

pub fn run(roster: &Roster, keywords: &[String]) -> Result<CmdResult> {
    if keywords.iter().all(|k| k.trim().is_empty()) {
        return Err(RollcallError::Command(format!(
            "At least one keyword must be provided.\n{}",
            USAGE
        )));
    }

    let filter = StudentFilter::name_keywords(keywords.iter().cloned());
    let view = FilteredView::with_filter(roster, filter);
    let listed: Vec<_> = view.iter().cloned().collect();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("{} students listed!", listed.len())));
    Ok(result.with_listed_students(listed))
}
