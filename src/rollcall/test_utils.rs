//! Typical students shared by the unit tests.

use crate::model::{Student, StudentDraft};
use crate::roster::Roster;

pub fn draft(
    name: &str,
    id: &str,
    phone: &str,
    email: &str,
    address: &str,
    attendance: &[&str],
) -> StudentDraft {
    StudentDraft {
        name: Some(name.to_string()),
        id: Some(id.to_string()),
        phone: Some(phone.to_string()),
        email: Some(email.to_string()),
        address: Some(address.to_string()),
        attendance: Some(attendance.iter().map(|d| d.to_string()).collect()),
    }
}

pub fn alice_draft() -> StudentDraft {
    draft(
        "Alice Pauline",
        "A01A",
        "94351253",
        "alice@example.com",
        "123, Jurong West Ave 6, #08-111",
        &["2024-01-15"],
    )
}

pub fn benson_draft() -> StudentDraft {
    draft(
        "Benson Meier",
        "B02B",
        "98765432",
        "johnd@example.com",
        "311, Clementi Ave 2, #02-25",
        &["2024-01-15", "2024-01-22"],
    )
}

pub fn carl_draft() -> StudentDraft {
    draft(
        "Carl Kurz",
        "C03C",
        "+6595352563",
        "heinz@example.com",
        "wall street",
        &[],
    )
}

pub fn alice() -> Student {
    Student::create(&alice_draft()).expect("alice is valid")
}

pub fn benson() -> Student {
    Student::create(&benson_draft()).expect("benson is valid")
}

pub fn carl() -> Student {
    Student::create(&carl_draft()).expect("carl is valid")
}

/// Alice, Benson and Carl, in that order.
pub fn typical_roster() -> Roster {
    Roster::from_students(vec![alice(), benson(), carl()]).expect("typical ids are unique")
}
