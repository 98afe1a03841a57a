use super::fields::{
    Address, Attendance, AttendanceDate, Email, FieldKind, Name, Phone, StudentId,
    ValidationError,
};

/// Raw, unvalidated field values for a student.
///
/// `None` means the value was never supplied, which is reported differently from a
/// value that is present but malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: Option<String>,
    pub id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub attendance: Option<Vec<String>>,
}

/// A validated student record.
///
/// Identity is the [`StudentId`]: two records describe the same student when their
/// ids match, whatever their other fields say. Records are values; changing one
/// means building a new record and handing it to the roster.
#[derive(Debug, Clone)]
pub struct Student {
    name: Name,
    id: StudentId,
    phone: Phone,
    email: Email,
    address: Address,
    attendance: Attendance,
    // Session-only, never persisted
    present: bool,
}

impl Student {
    pub fn new(
        name: Name,
        id: StudentId,
        phone: Phone,
        email: Email,
        address: Address,
        attendance: Attendance,
    ) -> Self {
        Self {
            name,
            id,
            phone,
            email,
            address,
            attendance,
            present: false,
        }
    }

    /// Validates a draft field by field, in declaration order. The first missing or
    /// malformed value is returned.
    pub fn create(draft: &StudentDraft) -> Result<Self, ValidationError> {
        let name = required(draft.name.clone(), FieldKind::Name, Name::new)?;
        let id = required(draft.id.clone(), FieldKind::StudentId, StudentId::new)?;
        let phone = required(draft.phone.clone(), FieldKind::Phone, Phone::new)?;
        let email = required(draft.email.clone(), FieldKind::Email, Email::new)?;
        let address = required(draft.address.clone(), FieldKind::Address, Address::new)?;
        let attendance = match &draft.attendance {
            Some(dates) => Attendance::parse_all(dates)?,
            None => return Err(ValidationError::MissingField(FieldKind::Attendance)),
        };

        Ok(Self::new(name, id, phone, email, address, attendance))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn attendance(&self) -> &Attendance {
        &self.attendance
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Returns this student marked present for the session, with `on` added to the
    /// attendance set. Marking the same day twice changes nothing further.
    pub fn marked_present(&self, on: AttendanceDate) -> Self {
        let mut next = self.clone();
        next.attendance.record(on);
        next.present = true;
        next
    }

    pub fn with_name(mut self, name: Name) -> Self {
        self.name = name;
        self
    }

    pub fn with_id(mut self, id: StudentId) -> Self {
        self.id = id;
        self
    }

    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phone = phone;
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = email;
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    pub fn same_identity(&self, other: &Student) -> bool {
        self.id == other.id
    }

    /// Field-by-field equality over everything that is persisted.
    pub fn fully_equals(&self, other: &Student) -> bool {
        self.name == other.name
            && self.id == other.id
            && self.phone == other.phone
            && self.email == other.email
            && self.address == other.address
            && self.attendance == other.attendance
    }
}

fn required<T>(
    raw: Option<String>,
    field: FieldKind,
    build: impl FnOnce(String) -> Result<T, ValidationError>,
) -> Result<T, ValidationError> {
    let raw = raw.ok_or(ValidationError::MissingField(field))?;
    build(raw)
}
