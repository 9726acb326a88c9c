use core::fmt;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::{Field, RangeError};

#[doc = r#"
One of the sixteen MIDI channels.

The discriminant is the value carried in the low nibble of a status byte,
so [`Channel::One`] is `0` and [`Channel::Sixteen`] is `15`.

# Example
```rust
# use midiwrite::prelude::*;
let channel = Channel::try_from(9u8).unwrap();
assert_eq!(channel, Channel::Ten);
assert_eq!(channel.index(), 9);
assert!(Channel::try_from(16u8).is_err());
```
"#]
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Channel {
    One = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
    Sixteen,
}

impl Channel {
    /// The largest channel index
    pub const MAX_INDEX: u8 = 15;

    /// Create a channel from its zero-based index
    pub fn from_index(index: i64) -> Result<Self, RangeError> {
        u8::try_from(index)
            .ok()
            .and_then(|byte| Self::try_from(byte).ok())
            .ok_or(RangeError::new(
                Field::Channel,
                index,
                Self::MAX_INDEX as i64,
            ))
    }

    /// The zero-based index, as written into a status byte
    pub fn index(self) -> u8 {
        self.into()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ch{}", self.index() + 1)
    }
}

#[test]
fn channel_indices() {
    assert_eq!(Channel::from_index(0).unwrap(), Channel::One);
    assert_eq!(Channel::from_index(15).unwrap(), Channel::Sixteen);
    assert_eq!(Channel::Sixteen.index(), 15);

    let err = Channel::from_index(16).unwrap_err();
    assert_eq!(err.field(), Field::Channel);
    assert_eq!(err.max(), 15);
    assert!(Channel::from_index(-3).is_err());
}
