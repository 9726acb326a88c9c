#![doc = r#"
Contains types for MIDI file chunks

# Overview

MIDI files are organized into chunks, each identified by a 4-character ASCII type identifier
followed by a 32-bit big-endian length field and then the chunk data. Only the two standard
chunk types are ever written.

## [`RawHeaderChunk`]

The header chunk (identified by "MThd") is always the first chunk in a MIDI file. This chunk
type contains meta information about the MIDI file:

- [`FormatType`](crate::file::FormatType), which identifies how tracks should be played
  (single track, simultaneous tracks, or independent tracks)
- the number of track chunks that follow
- [`Timing`](crate::file::Timing), which defines how delta-ticks (timestamps) are to be
  interpreted - either as ticks per quarter note or in SMPTE time code format

The header chunk always has a fixed length of 6 bytes.

## [`RawTrackChunk`]

Track chunks (identified by "MTrk") contain the encoded events of one
[`Track`](crate::file::Track): each event preceded by its delta-time, the last one being
the end-of-track marker. The length field always equals the byte length of that stream.

# Example Structure

```text
[Header Chunk: "MThd" 00 00 00 06 <format> <ntrks> <division>]
[Track Chunk 1: "MTrk" <length> <events>]
[Track Chunk 2: "MTrk" <length> <events>]
...
[Track Chunk N: "MTrk" <length> <events>]
```
"#]

mod header;
pub use header::*;

mod track;
pub use track::*;
