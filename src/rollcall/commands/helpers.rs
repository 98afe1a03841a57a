use crate::error::{Result, RollcallError};
use crate::model::{Student, StudentId};
use crate::roster::Roster;
use crate::view::{FilteredView, StudentFilter};

/// Validates `raw` as a student id and finds the matching student.
pub fn student_by_id<'a>(roster: &'a Roster, raw: &str) -> Result<(StudentId, &'a Student)> {
    let id = StudentId::new(raw)?;
    let view = FilteredView::with_filter(roster, StudentFilter::id_equals(id.clone()));
    let student = view.first().ok_or(RollcallError::StudentNotFound)?;
    Ok((id, student))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldKind;
    use crate::test_utils::typical_roster;

    #[test]
    fn finds_existing_student() {
        let roster = typical_roster();
        let (id, student) = student_by_id(&roster, "B02B").unwrap();
        assert_eq!(id.as_str(), "B02B");
        assert_eq!(student.name().as_str(), "Benson Meier");
    }

    #[test]
    fn invalid_id_is_a_validation_error() {
        let roster = typical_roster();
        match student_by_id(&roster, "b02b") {
            Err(RollcallError::Validation(err)) => assert_eq!(err.field(), FieldKind::StudentId),
            other => panic!("Expected validation error, got {:?}", other.map(|(id, _)| id)),
        }
    }

    #[test]
    fn unknown_id_is_not_found() {
        let roster = typical_roster();
        assert!(matches!(
            student_by_id(&roster, "Z99Z"),
            Err(RollcallError::StudentNotFound)
        ));
    }
}
