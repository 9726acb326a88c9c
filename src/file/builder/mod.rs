pub mod chunk;

use super::{Format, FormatType, MidiFile, MidiFileHeader, Track};
use crate::file::FileError;

#[doc = r#"
A builder used to create a new [`MidiFile`].

Tracks are kept in the order they are added. [`MidiFileBuilder::build`]
checks that they can be framed under the chosen format.

# Example
```rust
# use midiwrite::prelude::*;
let timing = Timing::new_ticks_per_quarter_note(480).unwrap();
let melody = Track::new(validate([RawEvent::note_on(60, 90, 0)]).unwrap());
let bass = Track::new(validate([RawEvent::note_on(36, 90, 1)]).unwrap());

let file = MidiFileBuilder::new(timing)
    .format(FormatType::Simultaneous)
    .track(melody)
    .track(bass)
    .build()
    .unwrap();
assert_eq!(file.tracks().len(), 2);

// format 0 holds a single track
let err = MidiFileBuilder::new(timing)
    .format(FormatType::SingleMultiChannel)
    .tracks([Track::default(), Track::default()])
    .build()
    .unwrap_err();
assert_eq!(err, FileError::MultipleTracksForSingleMultiChannel(2));
```
"#]
#[derive(Clone, Debug)]
pub struct MidiFileBuilder {
    header: MidiFileHeader,
    tracks: Vec<Track>,
}

impl MidiFileBuilder {
    /// Start a format 1 file with the given timing
    pub fn new(timing: super::Timing) -> Self {
        Self::from_header(MidiFileHeader::new(FormatType::Simultaneous, timing))
    }

    /// Start a file from a header
    pub fn from_header(header: MidiFileHeader) -> Self {
        Self {
            header,
            tracks: Vec::new(),
        }
    }

    /// Sets the format of the file
    pub fn format(mut self, format: FormatType) -> Self {
        self.header = MidiFileHeader::new(format, *self.header.timing());
        self
    }

    /// Appends a track
    pub fn track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// Appends several tracks
    pub fn tracks<I>(mut self, tracks: I) -> Self
    where
        I: IntoIterator<Item = Track>,
    {
        self.tracks.extend(tracks);
        self
    }

    /// Attempts to finish the midifile from the provided tracks.
    pub fn build(self) -> Result<MidiFile, FileError> {
        let Self { header, mut tracks } = self;

        if tracks.is_empty() {
            return Err(FileError::NoTracks);
        }
        if u16::try_from(tracks.len()).is_err() {
            return Err(FileError::TooManyTracks(tracks.len()));
        }

        let format = match header.format() {
            FormatType::SingleMultiChannel => {
                if tracks.len() != 1 {
                    return Err(FileError::MultipleTracksForSingleMultiChannel(tracks.len()));
                }
                match tracks.pop() {
                    Some(track) => Format::SingleMultiChannel(track),
                    None => return Err(FileError::NoTracks),
                }
            }
            FormatType::Simultaneous => Format::Simultaneous(tracks),
            FormatType::SequentiallyIndependent => Format::SequentiallyIndependent(tracks),
        };

        Ok(MidiFile {
            timing: *header.timing(),
            format,
        })
    }
}

#[test]
fn no_tracks() {
    let timing = super::Timing::new_ticks_per_quarter_note(96).unwrap();
    assert_eq!(
        MidiFileBuilder::new(timing).build().unwrap_err(),
        FileError::NoTracks
    );
}

#[test]
fn keeps_track_order() {
    use crate::event::{RawEvent, validate};

    let timing = super::Timing::new_ticks_per_quarter_note(96).unwrap();
    let first = Track::new(validate([RawEvent::program_change(1, 0)]).unwrap());
    let second = Track::new(validate([RawEvent::program_change(2, 0)]).unwrap());

    let file = MidiFileBuilder::new(timing)
        .format(FormatType::SequentiallyIndependent)
        .tracks([first.clone(), second.clone()])
        .build()
        .unwrap();
    assert_eq!(file.format_type(), FormatType::SequentiallyIndependent);
    assert_eq!(file.tracks(), [first, second]);
}
