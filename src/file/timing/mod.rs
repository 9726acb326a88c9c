mod smpte;
pub use smpte::*;

use crate::file::FileError;

/// The header timing type.
///
/// This is either the number of ticks per quarter note or
/// the alternative SMPTE format. See the
/// [`RawHeaderChunk`](crate::file::builder::chunk::RawHeaderChunk) docs for
/// more information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    /// The midi file's delta times are defined using a tick rate per quarter note
    TicksPerQuarterNote(TicksPerQuarterNote),

    /// The midi file's delta times are defined using an SMPTE and MIDI Time Code
    Smpte(SmpteHeader),
}

impl Timing {
    /// The tickrate per quarter note defines what a "quarter note" means.
    ///
    /// The leading bit of the division must stay clear, so 1-32767
    pub const fn new_ticks_per_quarter_note(tpqn: u16) -> Result<Self, FileError> {
        if tpqn == 0 || tpqn > 0x7FFF {
            return Err(FileError::InvalidDivision(tpqn));
        }
        Ok(Self::TicksPerQuarterNote(TicksPerQuarterNote {
            inner: tpqn.to_be_bytes(),
        }))
    }

    /// Define the timing in terms of fps and ticks per frame
    pub const fn new_smpte(fps: SmpteFps, ticks_per_frame: u8) -> Result<Self, FileError> {
        if ticks_per_frame == 0 {
            return Err(FileError::InvalidTicksPerFrame);
        }
        Ok(Self::Smpte(SmpteHeader {
            fps,
            ticks_per_frame,
        }))
    }

    /// The two division bytes of the header chunk
    pub const fn to_bytes(&self) -> [u8; 2] {
        match self {
            Self::TicksPerQuarterNote(t) => t.inner,
            Self::Smpte(s) => [s.fps.as_header_byte(), s.ticks_per_frame],
        }
    }

    /// Returns Some if the midi timing is defined
    /// as ticks per quarter note
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        match self {
            Self::TicksPerQuarterNote(t) => Some(t.ticks_per_quarter_note()),
            _ => None,
        }
    }
}

/// A representation of the `tpqn` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub struct TicksPerQuarterNote {
    pub(crate) inner: [u8; 2],
}
impl TicksPerQuarterNote {
    /// Returns the ticks per quarter note for the file.
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        let v = u16::from_be_bytes(self.inner);
        v & 0x7FFF
    }
}

/// A representation of the `smpte` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub struct SmpteHeader {
    pub(crate) fps: SmpteFps,
    pub(crate) ticks_per_frame: u8,
}

impl SmpteHeader {
    /// Returns the frames per second
    pub const fn fps(&self) -> SmpteFps {
        self.fps
    }

    /// Returns the ticks per frame
    pub const fn ticks_per_frame(&self) -> u8 {
        self.ticks_per_frame
    }
}
