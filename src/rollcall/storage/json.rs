//! JSON exchange records.
//!
//! Every field is carried as an optional string so that a record with a missing key
//! or an explicit `null` can be told apart from one with a malformed value; both are
//! rejected on the way back into the model, with different errors.

use crate::error::{Result, RollcallError};
use crate::model::{FieldKind, Student, StudentDraft, ValidationError};
use crate::roster::Roster;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Exchange keys in record order, with the field each one carries.
const FIELD_KEYS: [(&str, FieldKind); 6] = [
    ("name", FieldKind::Name),
    ("identifier", FieldKind::StudentId),
    ("phone", FieldKind::Phone),
    ("email", FieldKind::Email),
    ("address", FieldKind::Address),
    ("attendance", FieldKind::Attendance),
];

/// A student as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonStudent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub attendance: Option<Vec<String>>,
}

impl JsonStudent {
    pub fn from_model(student: &Student) -> Self {
        Self {
            name: Some(student.name().to_string()),
            identifier: Some(student.id().to_string()),
            phone: Some(student.phone().to_string()),
            email: Some(student.email().to_string()),
            address: Some(student.address().to_string()),
            attendance: Some(
                student
                    .attendance()
                    .iter()
                    .map(|d| d.to_string())
                    .collect(),
            ),
        }
    }

    /// Validates the record with the same rules as any other student input.
    pub fn to_model(&self) -> std::result::Result<Student, ValidationError> {
        Student::create(&StudentDraft {
            name: self.name.clone(),
            id: self.identifier.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            attendance: self.attendance.clone(),
        })
    }
}

/// The whole roster file. The `students` key is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JsonRoster {
    pub students: Vec<JsonStudent>,
}

/// The file as first read: records stay untyped until each is checked on its own.
#[derive(Deserialize)]
struct RawRoster {
    students: Vec<Value>,
}

impl JsonRoster {
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            students: roster.iter().map(JsonStudent::from_model).collect(),
        }
    }

    /// Converts every record, stopping at the first bad or duplicated one.
    pub fn to_roster(&self) -> Result<Roster> {
        let mut students: Vec<Student> = Vec::with_capacity(self.students.len());
        for (index, record) in self.students.iter().enumerate() {
            let student = record
                .to_model()
                .map_err(|source| RollcallError::PersistenceFormat { index, source })?;
            if students.iter().any(|s| s.same_identity(&student)) {
                return Err(RollcallError::DuplicateRecord {
                    index,
                    id: student.id().clone(),
                });
            }
            students.push(student);
        }
        Roster::from_students(students)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a roster file. A record whose values have the wrong JSON type fails
    /// with its position, like any other bad record.
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: RawRoster = serde_json::from_str(content)?;
        let students = raw
            .students
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let field = mistyped_field(&record);
                serde_json::from_value::<JsonStudent>(record).map_err(|source| match field {
                    Some(field) => RollcallError::PersistenceFormat {
                        index,
                        source: ValidationError::constraint(field),
                    },
                    None => RollcallError::RecordShape { index, source },
                })
            })
            .collect::<Result<Vec<JsonStudent>>>()?;
        Ok(Self { students })
    }
}

/// The first field holding something other than a string (or, for attendance, a list
/// of strings). `null` counts as absent.
fn mistyped_field(record: &Value) -> Option<FieldKind> {
    let object = record.as_object()?;
    FIELD_KEYS.iter().find_map(|&(key, field)| {
        let well_typed = match (object.get(key), field) {
            (None | Some(Value::Null), _) => true,
            (Some(Value::Array(items)), FieldKind::Attendance) => {
                items.iter().all(Value::is_string)
            }
            (Some(Value::String(_)), kind) => kind != FieldKind::Attendance,
            _ => false,
        };
        (!well_typed).then_some(field)
    })
}
