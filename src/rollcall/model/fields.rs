//! Self-validating field values.
//!
//! Every attribute of a [`Student`](super::Student) is wrapped in a type whose only
//! constructor checks the raw value against the field's format rule. Once a value
//! exists it is known to be valid, so nothing downstream re-checks it.
//!
//! | Field          | Rule                                                        |
//! |----------------|-------------------------------------------------------------|
//! | `Name`         | letters, digits, spaces, `'` `-` `.`; starts alphanumeric   |
//! | `StudentId`    | uppercase letter, two digits, uppercase letter (`A01A`)     |
//! | `Phone`        | optional leading `+`, then at least 8 digits                |
//! | `Email`        | `local@domain`, domain has at least one `.`                 |
//! | `Address`      | anything that is not blank                                  |
//! | `AttendanceDate` | `YYYY-MM-DD`, strictly before [`SENTINEL_DATE`]           |

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters, spaces, apostrophes, hyphens or periods, start with a letter or digit, and it should not be blank";
pub const STUDENT_ID_CONSTRAINTS: &str =
    "Student IDs should be one uppercase letter, two digits and one uppercase letter, e.g. A01A";
pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain digits with an optional leading '+', and it should be at least 8 digits long";
pub const EMAIL_CONSTRAINTS: &str =
    "Emails should be of the format local-part@domain, and the domain should contain at least one '.' between non-empty labels";
pub const ADDRESS_CONSTRAINTS: &str = "Addresses can take any values, and it should not be blank";
pub const ATTENDANCE_DATE_CONSTRAINTS: &str =
    "Attendance dates should be valid calendar dates in YYYY-MM-DD format";

/// Out-of-range marker for attendance. No legal attendance date may reach it.
pub const SENTINEL_DATE: NaiveDate = NaiveDate::MAX;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} '.\-]*$").expect("valid name regex"));
static STUDENT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][0-9]{2}[A-Z]$").expect("valid student id regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{8,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9](?:[A-Za-z0-9._%+\-]*[A-Za-z0-9])?@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)+$",
    )
    .expect("valid email regex")
});
static ATTENDANCE_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

/// The attribute a [`ValidationError`] refers to.
///
/// Displays as the field's type name, which is what missing-field messages show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    StudentId,
    Phone,
    Email,
    Address,
    Attendance,
}

impl FieldKind {
    /// The fixed, user-facing format rule for this field.
    pub fn constraint(self) -> &'static str {
        match self {
            FieldKind::Name => NAME_CONSTRAINTS,
            FieldKind::StudentId => STUDENT_ID_CONSTRAINTS,
            FieldKind::Phone => PHONE_CONSTRAINTS,
            FieldKind::Email => EMAIL_CONSTRAINTS,
            FieldKind::Address => ADDRESS_CONSTRAINTS,
            FieldKind::Attendance => ATTENDANCE_DATE_CONSTRAINTS,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Name => "Name",
            FieldKind::StudentId => "StudentId",
            FieldKind::Phone => "Phone",
            FieldKind::Email => "Email",
            FieldKind::Address => "Address",
            FieldKind::Attendance => "Attendance",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value was present but does not satisfy the field's format rule.
    #[error("{message}")]
    Constraint {
        field: FieldKind,
        message: &'static str,
    },

    #[error("Student's {0} field is missing!")]
    MissingField(FieldKind),
}

impl ValidationError {
    pub fn constraint(field: FieldKind) -> Self {
        ValidationError::Constraint {
            field,
            message: field.constraint(),
        }
    }

    pub fn field(&self) -> FieldKind {
        match self {
            ValidationError::Constraint { field, .. } => *field,
            ValidationError::MissingField(field) => *field,
        }
    }
}

macro_rules! string_field {
    ($(#[$meta:meta])* $ty:ident, $kind:expr, $check:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $ty(String);

        impl $ty {
            pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
                let raw = raw.into();
                if Self::is_valid(&raw) {
                    Ok(Self(raw))
                } else {
                    Err(ValidationError::constraint($kind))
                }
            }

            pub fn is_valid(raw: &str) -> bool {
                let check: fn(&str) -> bool = $check;
                check(raw)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_field!(
    /// A student's display name.
    Name,
    FieldKind::Name,
    |raw| NAME_RE.is_match(raw)
);

string_field!(
    /// The natural key of a student. Comparison is exact and case-sensitive.
    StudentId,
    FieldKind::StudentId,
    |raw| STUDENT_ID_RE.is_match(raw)
);

string_field!(Phone, FieldKind::Phone, |raw| PHONE_RE.is_match(raw));

string_field!(Email, FieldKind::Email, |raw| EMAIL_RE.is_match(raw));

string_field!(Address, FieldKind::Address, |raw| !raw.trim().is_empty());

/// A calendar day on which a student was present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttendanceDate(NaiveDate);

impl AttendanceDate {
    pub fn new(date: NaiveDate) -> Result<Self, ValidationError> {
        if date < SENTINEL_DATE {
            Ok(Self(date))
        } else {
            Err(ValidationError::constraint(FieldKind::Attendance))
        }
    }

    /// Parses an ISO `YYYY-MM-DD` string. Unparseable input reports the same
    /// constraint as an out-of-range date.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !ATTENDANCE_DATE_RE.is_match(raw) {
            return Err(ValidationError::constraint(FieldKind::Attendance));
        }
        let date = raw
            .parse::<NaiveDate>()
            .map_err(|_| ValidationError::constraint(FieldKind::Attendance))?;
        Self::new(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for AttendanceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AttendanceDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The set of days a student was present, kept in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attendance(BTreeSet<AttendanceDate>);

impl Attendance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every entry; a single bad date rejects the whole list.
    pub fn parse_all<I, S>(raw: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter()
            .map(|s| AttendanceDate::parse(s.as_ref()))
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Self)
    }

    /// Records a day. Returns `false` if it was already recorded.
    pub fn record(&mut self, date: AttendanceDate) -> bool {
        self.0.insert(date)
    }

    pub fn contains(&self, date: &AttendanceDate) -> bool {
        self.0.contains(date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttendanceDate> {
        self.0.iter()
    }

    pub fn last(&self) -> Option<&AttendanceDate> {
        self.0.last()
    }
}

impl FromIterator<AttendanceDate> for Attendance {
    fn from_iter<T: IntoIterator<Item = AttendanceDate>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
