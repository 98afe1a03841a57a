use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AttendanceDate;
use crate::roster::Roster;

use super::helpers::student_by_id;

pub const COMMAND_WORD: &str = "mark";
pub const USAGE: &str = "mark: Marks the student identified by the student id as present.\n\
Parameters: STUDENT_ID\n\
Example: mark A01A";

/// Marks the student with id `raw_id` present and records `on` in their attendance.
pub fn run(roster: &mut Roster, raw_id: &str, on: AttendanceDate) -> Result<CmdResult> {
    let (id, marked) = {
        let (id, student) = student_by_id(roster, raw_id)?;
        (id, student.marked_present(on))
    };
    roster.replace(&id, marked.clone())?;

    let mut result = CmdResult::default()
        .with_affected_students(vec![marked])
        .with_refresh();
    result.add_message(CmdMessage::success(format!(
        "Marked student as present: {}",
        id
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollcallError;
    use crate::model::StudentId;
    use crate::test_utils::{alice, typical_roster};
    use crate::view::FilteredView;

    fn day(raw: &str) -> AttendanceDate {
        AttendanceDate::parse(raw).unwrap()
    }

    #[test]
    fn marks_student_present() {
        let mut roster = Roster::from_students(vec![alice()]).unwrap();
        let result = run(&mut roster, "A01A", day("2024-03-04")).unwrap();

        let stored = roster.get(&StudentId::new("A01A").unwrap()).unwrap();
        assert!(stored.is_present());
        assert!(stored.attendance().contains(&day("2024-03-04")));
        assert!(result.feedback().unwrap().contains("A01A"));
        assert!(result.refresh_list);
    }

    #[test]
    fn unknown_student_is_not_found_and_roster_unchanged() {
        let mut roster = Roster::from_students(vec![alice()]).unwrap();
        let before = roster.clone();

        let err = run(&mut roster, "B02B", day("2024-03-04")).unwrap_err();
        assert!(matches!(err, RollcallError::StudentNotFound));
        assert_eq!(
            err.to_string(),
            "Requested student was not found in the student list."
        );
        assert!(roster.fully_equals(&before));
        assert!(roster.iter().all(|s| !s.is_present()));
    }

    #[test]
    fn whole_roster_is_visible_after_mark() {
        let mut roster = typical_roster();
        run(&mut roster, "B02B", day("2024-03-04")).unwrap();
        assert_eq!(FilteredView::new(&roster).len(), roster.len());

        let _ = run(&mut roster, "Z99Z", day("2024-03-04"));
        assert_eq!(FilteredView::new(&roster).len(), roster.len());
    }

    #[test]
    fn marking_twice_does_not_duplicate_the_day() {
        let mut roster = typical_roster();
        run(&mut roster, "C03C", day("2024-03-04")).unwrap();
        run(&mut roster, "C03C", day("2024-03-04")).unwrap();
        run(&mut roster, "C03C", day("2024-03-05")).unwrap();

        let carl = roster.get(&StudentId::new("C03C").unwrap()).unwrap();
        assert_eq!(carl.attendance().len(), 2);
    }

    #[test]
    fn keeps_roster_position() {
        let mut roster = typical_roster();
        run(&mut roster, "A01A", day("2024-03-04")).unwrap();
        assert_eq!(roster.all()[0].id().as_str(), "A01A");
        assert_eq!(roster.all()[0].attendance().len(), 2);
    }
}
