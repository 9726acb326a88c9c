#![doc = r#"
SMPTE (Society of Motion Picture and Television Engineers) time division

MIDI supports two timing methods:

1. **Musical Time** - Based on beats and tempo (ticks per quarter note)
2. **Absolute Time** - Based on SMPTE time code (frames per second)

With SMPTE timing, delta times count subdivisions of a video frame rather than
of a beat, so events keep their position regardless of tempo. The header
stores the frame rate as a negative number in its high byte and the ticks per
frame in its low byte.
"#]

use serde::{Deserialize, Serialize};

/// The possible FPS (Frames Per Second) for MIDI files
///
/// The MIDI specification defines only four possible frame types:
/// - 24 fps: Standard film rate
/// - 25 fps: PAL/SECAM television standard
/// - 29.97 fps: NTSC color television (drop-frame timecode)
/// - 30 fps: NTSC black & white, some digital video formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmpteFps {
    /// 24 frames per second - Standard film rate
    TwentyFour,
    /// 25 frames per second - PAL/SECAM television standard
    TwentyFive,
    /// 29.97 frames per second (30000/1001) - NTSC color television drop-frame rate
    TwentyNine,
    /// 30 frames per second - NTSC black & white, some digital formats
    Thirty,
}

impl SmpteFps {
    /// The frame rate as it is named in the header: 24, 25, 29 or 30.
    ///
    /// Drop-frame is written as 29, not its nominal 30.
    pub const fn as_header_value(&self) -> i8 {
        match self {
            Self::TwentyFour => 24,
            Self::TwentyFive => 25,
            Self::TwentyNine => 29,
            Self::Thirty => 30,
        }
    }

    /// The high byte of an SMPTE division: the negated frame rate in two's complement
    pub const fn as_header_byte(&self) -> u8 {
        (-self.as_header_value()) as u8
    }
}

#[test]
fn header_bytes_are_negated_rates() {
    assert_eq!(SmpteFps::TwentyFour.as_header_byte(), 0xE8);
    assert_eq!(SmpteFps::TwentyFive.as_header_byte(), 0xE7);
    assert_eq!(SmpteFps::TwentyNine.as_header_byte(), 0xE3);
    assert_eq!(SmpteFps::Thirty.as_header_byte(), 0xE2);
}
