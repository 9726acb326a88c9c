#![doc = r#"
Rusty representation of a [`MidiFile`], and its encoding into bytes
"#]

/// Contains the [`MidiFileBuilder`] and the chunk framing
/// used when writing files.
pub mod builder;

mod error;
pub use error::*;

mod format;
pub use format::*;

mod header;
pub use header::*;

mod track;
pub use track::*;

mod timing;
pub use timing::*;

use crate::{
    event::EventSequence,
    file::builder::{
        MidiFileBuilder,
        chunk::{RawHeaderChunk, RawTrackChunk},
    },
};

/// Choices that change the bytes of an encoded track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    /// Omit a status byte when it repeats the previous one
    pub running_status: bool,
    /// Fail with [`EncodeError::EmptyEventSet`] when a track has nothing to write
    pub require_events: bool,
}

#[doc = r#"
A MIDI file: its timing and its tracks, arranged by format.

Built with a [`MidiFileBuilder`], which guarantees the tracks can be framed
under the format.
"#]
#[derive(Clone, Debug, PartialEq)]
pub struct MidiFile {
    timing: Timing,
    format: Format,
}

impl MidiFile {
    /// Returns header info
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Returns a track list
    pub fn tracks(&self) -> &[Track] {
        self.format.tracks()
    }

    /// Returns the format type for the file.
    pub fn format_type(&self) -> FormatType {
        self.format.format_type()
    }

    /// Encodes the whole file: the header chunk, then every track chunk in order.
    pub fn to_bytes(&self, options: &EncodeOptions) -> EncodeResult<Vec<u8>> {
        let tracks = self.tracks();
        let num_tracks = u16::try_from(tracks.len())
            .map_err(|_| FileError::TooManyTracks(tracks.len()))?;

        let chunks = tracks
            .iter()
            .map(|track| -> EncodeResult<RawTrackChunk> {
                Ok(RawTrackChunk::new(track.encode_events(options)?)?)
            })
            .collect::<EncodeResult<Vec<_>>>()?;

        let size = RawHeaderChunk::SIZE + chunks.iter().map(RawTrackChunk::size).sum::<usize>();
        let mut out = Vec::with_capacity(size);
        let header = RawHeaderChunk::new(self.format_type(), num_tracks, self.timing);
        header.write(&mut out);
        for chunk in &chunks {
            chunk.write(&mut out);
        }
        Ok(out)
    }
}

/// Encodes one track of events into a complete file.
///
/// The header declares a single track. Unsupported events are dropped; the
/// end-of-track marker is always appended.
pub fn encode(
    header: &MidiFileHeader,
    events: EventSequence,
    options: &EncodeOptions,
) -> EncodeResult<Vec<u8>> {
    MidiFileBuilder::from_header(*header)
        .track(Track::new(events))
        .build()?
        .to_bytes(options)
}
