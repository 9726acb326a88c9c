#![warn(missing_docs)]
#![doc = r#"
Encode note and program events into Standard MIDI Files.

# Overview

`midiwrite` turns a flat list of loosely typed events (as they arrive in a
request body) into the bytes of a Standard MIDI File:

1. [`RawEvent`](crate::event::RawEvent)s are checked by
   [`validate`](crate::event::validate), producing an
   [`EventSequence`](crate::event::EventSequence) of strongly typed
   [`TrackEvent`](crate::event::TrackEvent)s.
2. [`encode`](crate::file::encode) (or a [`MidiFile`](crate::file::MidiFile)
   assembled with the [`MidiFileBuilder`](crate::file::builder::MidiFileBuilder))
   frames those events into a header chunk and track chunks.
3. A [`Persist`](crate::persist::Persist) implementation writes the bytes out.

[`Generator`](crate::service::Generator) wires the three steps together the way
a request handler would.

# Example
```rust
use midiwrite::prelude::*;

let events = validate([
    RawEvent::note_on(60, 127, 0),
    RawEvent::note_off(60, 0, 0),
])
.unwrap();

let header = MidiFileHeader::new(
    FormatType::SingleMultiChannel,
    Timing::new_ticks_per_quarter_note(96).unwrap(),
);
let bytes = encode(&header, events, &EncodeOptions::default()).unwrap();

assert_eq!(&bytes[..4], b"MThd");
assert_eq!(
    &bytes[22..],
    &[0x00, 0x90, 0x3C, 0x7F, 0x00, 0x80, 0x3C, 0x00, 0x00, 0xFF, 0x2F, 0x00]
);
```
"#]

mod byte;
pub use byte::*;

mod channel;
pub use channel::*;

mod note;
pub use note::*;

mod program;
pub use program::*;

mod ticks;
pub use ticks::*;

mod velocity;
pub use velocity::*;

pub mod config;
pub mod event;
pub mod file;
pub mod message;
pub mod persist;
pub mod service;
pub mod vlq;

/// Commonly used types
pub mod prelude {
    pub use crate::{
        byte::*,
        channel::*,
        config::{Config, Division},
        event::{
            EventKind, EventSequence, RawEvent, TrackEvent, TrackMessage, ValidationError,
            ValidationErrorKind, validate,
        },
        file::{
            EncodeError, EncodeOptions, FileError, Format, FormatType, MidiFile, MidiFileHeader,
            SmpteFps, Timing, Track, builder::MidiFileBuilder, encode,
        },
        message::{ChannelVoiceMessage, VoiceEvent},
        note::*,
        persist::{FileStore, Persist, PersistError},
        program::*,
        service::{GenerateRequest, Generator, ServiceError, Status},
        ticks::*,
        velocity::*,
    };
}
