use crate::file::{FormatType, Timing};

/// The header chunk of a file, ready to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHeaderChunk {
    format: FormatType,
    num_tracks: u16,
    timing: Timing,
}

impl RawHeaderChunk {
    /// Chunk identifier
    pub const ID: [u8; 4] = *b"MThd";
    /// The length of every header chunk's payload
    pub const LENGTH: u32 = 6;
    /// Bytes taken by the whole chunk
    pub const SIZE: usize = 8 + Self::LENGTH as usize;

    /// Create a new header chunk
    pub const fn new(format: FormatType, num_tracks: u16, timing: Timing) -> Self {
        Self {
            format,
            num_tracks,
            timing,
        }
    }

    /// The declared number of tracks
    pub const fn num_tracks(&self) -> u16 {
        self.num_tracks
    }

    /// Appends the chunk to `out`
    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&Self::ID);
        out.extend_from_slice(&Self::LENGTH.to_be_bytes());
        out.extend_from_slice(&self.format.to_bytes());
        out.extend_from_slice(&self.num_tracks.to_be_bytes());
        out.extend_from_slice(&self.timing.to_bytes());
    }
}

#[test]
fn header_chunk_layout() {
    use pretty_assertions::assert_eq;

    let header = RawHeaderChunk::new(
        FormatType::Simultaneous,
        3,
        Timing::new_ticks_per_quarter_note(480).unwrap(),
    );
    let mut out = Vec::new();
    header.write(&mut out);
    assert_eq!(
        out,
        [
            b'M', b'T', b'h', b'd', //
            0x00, 0x00, 0x00, 0x06, //
            0x00, 0x01, //
            0x00, 0x03, //
            0x01, 0xE0,
        ]
    );
    assert_eq!(out.len(), RawHeaderChunk::SIZE);
}
