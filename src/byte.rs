use core::fmt;
use thiserror::Error;

#[doc = r#"
A byte with a leading 0 bit, as carried after every status byte.

Notes, velocities and program numbers are all data bytes on the wire,
so they are all limited to `0..=127`.
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash)]
pub struct DataByte(pub(crate) u8);

impl DataByte {
    /// The largest value a data byte can hold
    pub const MAX: u8 = 0x7F;

    /// Returns `None` if the leading bit of `byte` is set
    pub const fn new(byte: u8) -> Option<Self> {
        if byte > Self::MAX {
            None
        } else {
            Some(Self(byte))
        }
    }

    /// Checks an arbitrary integer for some named field
    pub(crate) fn checked(field: Field, value: i64) -> Result<Self, RangeError> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(RangeError::new(field, value, Self::MAX as i64))
    }

    /// The byte's value
    pub const fn value(&self) -> u8 {
        self.0
    }
}

/// Names the event field a value belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Field {
    /// Note number
    Note,
    /// Note velocity
    Velocity,
    /// Program number
    Program,
    /// Channel index
    Channel,
    /// Delta time in ticks
    Delta,
}

impl Field {
    /// The field's name as it appears in a request body
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Velocity => "velocity",
            Self::Program => "program",
            Self::Channel => "channel",
            Self::Delta => "delta",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value fell outside of `0..=max` for its field.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Error)]
#[error("{field} {value} is out of range 0..={max}")]
pub struct RangeError {
    field: Field,
    value: i64,
    max: i64,
}

impl RangeError {
    pub(crate) const fn new(field: Field, value: i64, max: i64) -> Self {
        Self { field, value, max }
    }
    /// The field that was out of range
    pub const fn field(&self) -> Field {
        self.field
    }
    /// The rejected value
    pub const fn value(&self) -> i64 {
        self.value
    }
    /// The largest accepted value for the field
    pub const fn max(&self) -> i64 {
        self.max
    }
}

#[test]
fn data_byte_rejects_leading_bit() {
    assert_eq!(DataByte::new(0x7F), Some(DataByte(0x7F)));
    assert_eq!(DataByte::new(0x80), None);
}

#[test]
fn checked_reports_field_and_value() {
    let err = DataByte::checked(Field::Note, -1).unwrap_err();
    assert_eq!(err.field(), Field::Note);
    assert_eq!(err.value(), -1);
    assert_eq!(err.to_string(), "note -1 is out of range 0..=127");

    assert!(DataByte::checked(Field::Program, 300).is_err());
    assert_eq!(DataByte::checked(Field::Program, 0).unwrap().value(), 0);
}
