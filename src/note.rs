use core::fmt;

use crate::{DataByte, Field, RangeError};

#[doc = r#"
Identifies a key for some message.

Notes are interpeted as a 7-bit number: `0` is `C-1`, `60` is middle C
(`C4`) and `127` is `G9`.

# Example
```rust
# use midiwrite::prelude::*;
let note = Note::from_databyte(60).unwrap(); // 60 is between 0-127
assert_eq!(note.byte(), 0x3C);
assert_eq!(note.to_string(), "C4");

assert!(Note::from_databyte(128).is_err());
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash)]
pub struct Note(DataByte);

impl Note {
    /// Create a new note.
    ///
    /// Checks for correctness (leading 0 bit).
    pub fn from_databyte(byte: u8) -> Result<Self, RangeError> {
        Self::try_from(byte as i64)
    }

    /// Returns the underlying byte of the note
    pub const fn byte(&self) -> u8 {
        self.0.value()
    }

    /// The octave of the note, from `-1` to `9`
    pub const fn octave(&self) -> i8 {
        (self.byte() / 12) as i8 - 1
    }
}

impl TryFrom<i64> for Note {
    type Error = RangeError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        DataByte::checked(Field::Note, value).map(Self)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [&str; 12] = [
            "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
        ];
        write!(f, "{}{}", NAMES[(self.byte() % 12) as usize], self.octave())
    }
}

#[test]
fn test_note() {
    let c = Note::from_databyte(12).unwrap();
    assert_eq!(c.octave(), 0);
    assert_eq!(c.to_string(), "C0");

    let a_sharp = Note::from_databyte(94).unwrap();
    assert_eq!(a_sharp.octave(), 6);
    assert_eq!(a_sharp.to_string(), "A#6");

    assert_eq!(Note::from_databyte(0).unwrap().to_string(), "C-1");
    assert_eq!(Note::from_databyte(127).unwrap().to_string(), "G9");
}

#[test]
fn note_out_of_range() {
    let err = Note::try_from(128i64).unwrap_err();
    assert_eq!(err.field(), Field::Note);
    assert_eq!(err.value(), 128);
    assert!(Note::try_from(-1i64).is_err());
}
