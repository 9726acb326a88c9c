use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use super::Track;

#[doc = r#"
The format of a MIDI file, as written in its header chunk.

- Format 0: a single track holding every channel
- Format 1: several tracks played at the same time
- Format 2: several independent single-track patterns
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum FormatType {
    /// Format 0
    SingleMultiChannel = 0,
    /// Format 1
    Simultaneous = 1,
    /// Format 2
    SequentiallyIndependent = 2,
}

impl FormatType {
    /// The format word of the header chunk
    pub fn to_bytes(self) -> [u8; 2] {
        u16::from(self).to_be_bytes()
    }
}

/// The tracks of a file, arranged by format.
#[derive(Clone, Debug, PartialEq)]
pub enum Format {
    /// Format 0
    SingleMultiChannel(Track),
    /// Format 1
    Simultaneous(Vec<Track>),
    /// Format 2
    SequentiallyIndependent(Vec<Track>),
}

impl Format {
    /// Returns the format type of the format.
    pub const fn format_type(&self) -> FormatType {
        match self {
            Self::SingleMultiChannel(_) => FormatType::SingleMultiChannel,
            Self::Simultaneous(_) => FormatType::Simultaneous,
            Self::SequentiallyIndependent(_) => FormatType::SequentiallyIndependent,
        }
    }

    /// The tracks in declaration order
    pub fn tracks(&self) -> &[Track] {
        match self {
            Self::SingleMultiChannel(track) => core::slice::from_ref(track),
            Self::Simultaneous(tracks) | Self::SequentiallyIndependent(tracks) => tracks,
        }
    }
}

#[test]
fn format_words() {
    assert_eq!(FormatType::SingleMultiChannel.to_bytes(), [0, 0]);
    assert_eq!(FormatType::Simultaneous.to_bytes(), [0, 1]);
    assert_eq!(FormatType::SequentiallyIndependent.to_bytes(), [0, 2]);
    assert_eq!(FormatType::try_from(1u16).unwrap(), FormatType::Simultaneous);
    assert!(FormatType::try_from(3u16).is_err());
}
