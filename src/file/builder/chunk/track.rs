use crate::file::FileError;

/// An encoded event stream, framed as a track chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTrackChunk {
    data: Vec<u8>,
}

impl RawTrackChunk {
    /// Chunk identifier
    pub const ID: [u8; 4] = *b"MTrk";

    /// Frame an event stream. Fails if its length does not fit in 32 bits.
    pub fn new(data: Vec<u8>) -> Result<Self, FileError> {
        if u32::try_from(data.len()).is_err() {
            return Err(FileError::ChunkTooLarge(data.len()));
        }
        Ok(Self { data })
    }

    /// The value of the length field
    pub fn length(&self) -> u32 {
        // checked in `new`
        self.data.len() as u32
    }

    /// Bytes taken by the whole chunk
    pub fn size(&self) -> usize {
        8 + self.data.len()
    }

    /// The event stream
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Appends the chunk to `out`
    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&Self::ID);
        out.extend_from_slice(&self.length().to_be_bytes());
        out.extend_from_slice(&self.data);
    }
}

#[test]
fn track_chunk_layout() {
    use pretty_assertions::assert_eq;

    let chunk = RawTrackChunk::new(vec![0x00, 0xFF, 0x2F, 0x00]).unwrap();
    assert_eq!(chunk.length(), 4);

    let mut out = Vec::new();
    chunk.write(&mut out);
    assert_eq!(
        out,
        [
            b'M', b'T', b'r', b'k', //
            0x00, 0x00, 0x00, 0x04, //
            0x00, 0xFF, 0x2F, 0x00,
        ]
    );
    assert_eq!(out.len(), chunk.size());
}
