use crate::{DataByte, Field, RangeError};

/// A program (patch) number, `0..=127`.
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash)]
pub struct Program(DataByte);

impl Program {
    /// Create a new program.
    ///
    /// Checks for correctness (leading 0 bit).
    pub fn from_databyte(byte: u8) -> Result<Self, RangeError> {
        Self::try_from(byte as i64)
    }

    /// Returns the underlying byte of the program
    pub const fn byte(&self) -> u8 {
        self.0.value()
    }
}

impl TryFrom<i64> for Program {
    type Error = RangeError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        DataByte::checked(Field::Program, value).map(Self)
    }
}

#[test]
fn program_range() {
    assert_eq!(Program::from_databyte(127).unwrap().byte(), 127);
    assert_eq!(
        Program::from_databyte(128).unwrap_err().field(),
        Field::Program
    );
}
