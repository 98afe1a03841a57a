//! Core data types: validated field values and the [`Student`] record built from them.

pub mod fields;
pub mod student;

pub use fields::{
    Address, Attendance, AttendanceDate, Email, FieldKind, Name, Phone, StudentId,
    ValidationError, SENTINEL_DATE,
};
pub use student::{Student, StudentDraft};
