use thiserror::Error;

/// A file could not be framed from the given header and tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FileError {
    /// A file needs at least one track chunk
    #[error("A file must contain at least one track")]
    NoTracks,
    /// The header's track count is a u16
    #[error("{0} tracks do not fit in a header chunk")]
    TooManyTracks(usize),
    /// Format 0 holds exactly one track
    #[error("Format 0 files hold exactly one track, found {0}")]
    MultipleTracksForSingleMultiChannel(usize),
    /// A track chunk's length is a u32
    #[error("A track of {0} bytes does not fit in a chunk")]
    ChunkTooLarge(usize),
    /// Ticks per quarter note must be within 1-32767
    #[error("Invalid ticks per quarter note: {0}")]
    InvalidDivision(u16),
    /// SMPTE timing needs at least one tick per frame
    #[error("SMPTE timing needs at least one tick per frame")]
    InvalidTicksPerFrame,
}

/// Events could not be encoded into a file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// No encodable event was given while at least one is required
    #[error("No encodable events were provided")]
    EmptyEventSet,
    /// Folding dropped events' deltas into the next event overflowed 28 bits
    #[error("Delta time before event {index} exceeds 0x0FFFFFFF ticks")]
    DeltaOverflow {
        /// Position of the event the delta was being folded into
        index: usize,
    },
    /// Framing
    #[error("Framing file: {0}")]
    File(#[from] FileError),
}

/// The Encode Result type (see [`EncodeError`])
pub type EncodeResult<T> = Result<T, EncodeError>;
