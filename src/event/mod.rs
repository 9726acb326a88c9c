#![doc = r#"
Events as they arrive in a request, and as they are handed to the encoder

A [`RawEvent`] mirrors one entry of a request body: a `kind` tag and a set of
optional integer fields. [`validate`] turns a list of them into an
[`EventSequence`], checking every field against its range on the way.

Kinds other than `noteOn`, `noteOff` and `programChange` are not errors.
They become [`TrackMessage::Unsupported`] and are dropped when the track is
encoded.
"#]

mod error;
pub use error::*;

mod validate;
pub use validate::*;

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::{DeltaTicks, message::ChannelVoiceMessage};

/// The `kind` tag of a [`RawEvent`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    /// `"noteOn"`
    NoteOn,
    /// `"noteOff"`
    NoteOff,
    /// `"programChange"`
    ProgramChange,
    /// Any other tag, kept verbatim
    Unsupported(String),
}

impl EventKind {
    /// The tag as written in a request body
    pub fn as_str(&self) -> &str {
        match self {
            Self::NoteOn => "noteOn",
            Self::NoteOff => "noteOff",
            Self::ProgramChange => "programChange",
            Self::Unsupported(kind) => kind,
        }
    }
}

impl From<String> for EventKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "noteOn" => Self::NoteOn,
            "noteOff" => Self::NoteOff,
            "programChange" => Self::ProgramChange,
            _ => Self::Unsupported(value),
        }
    }
}

impl From<EventKind> for String {
    fn from(value: EventKind) -> Self {
        match value {
            EventKind::Unsupported(kind) => kind,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[doc = r##"
One event of a request body, before any range checks.

Fields are wide signed integers so that negative or oversized values can be
reported instead of failing to deserialize.

# Example
```rust
# use midiwrite::prelude::*;
let event: RawEvent = serde_json::from_str(
    r#"{ "kind": "noteOn", "note": 60, "velocity": 100, "channel": 0 }"#,
)
.unwrap();
assert_eq!(event, RawEvent::note_on(60, 100, 0));
```
"##]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    /// What the event is
    pub kind: EventKind,
    /// Note number, for note events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<i64>,
    /// Velocity byte, for note events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<i64>,
    /// Program number, for program changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<i64>,
    /// Zero-based channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<i64>,
    /// Ticks since the previous event
    #[serde(default)]
    pub delta: i64,
}

impl RawEvent {
    /// A note on with no delta
    pub fn note_on(note: i64, velocity: i64, channel: i64) -> Self {
        Self::note(EventKind::NoteOn, note, velocity, channel)
    }

    /// A note off with no delta
    pub fn note_off(note: i64, velocity: i64, channel: i64) -> Self {
        Self::note(EventKind::NoteOff, note, velocity, channel)
    }

    /// A program change with no delta
    pub fn program_change(program: i64, channel: i64) -> Self {
        Self {
            kind: EventKind::ProgramChange,
            note: None,
            velocity: None,
            program: Some(program),
            channel: Some(channel),
            delta: 0,
        }
    }

    /// An event of some kind the encoder does not write
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Unsupported(kind.into()),
            note: None,
            velocity: None,
            program: None,
            channel: None,
            delta: 0,
        }
    }

    /// Sets the ticks since the previous event
    pub fn with_delta(mut self, delta: i64) -> Self {
        self.delta = delta;
        self
    }

    fn note(kind: EventKind, note: i64, velocity: i64, channel: i64) -> Self {
        Self {
            kind,
            note: Some(note),
            velocity: Some(velocity),
            program: None,
            channel: Some(channel),
            delta: 0,
        }
    }
}

/// What a [`TrackEvent`] carries.
#[derive(Clone, Debug, PartialEq)]
pub enum TrackMessage {
    /// A note or program message for one channel
    ChannelVoice(ChannelVoiceMessage),
    /// An event of a kind the encoder does not write.
    ///
    /// It produces no bytes; its delta is folded into the next written event.
    Unsupported {
        /// The original `kind` tag
        kind: String,
    },
}

impl From<ChannelVoiceMessage> for TrackMessage {
    fn from(value: ChannelVoiceMessage) -> Self {
        Self::ChannelVoice(value)
    }
}

/// A validated event and the ticks since the event before it.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackEvent {
    delta: DeltaTicks,
    message: TrackMessage,
}

impl TrackEvent {
    /// Create a new track event
    pub fn new(delta: DeltaTicks, message: impl Into<TrackMessage>) -> Self {
        Self {
            delta,
            message: message.into(),
        }
    }

    /// Ticks since the previous event
    pub const fn delta(&self) -> DeltaTicks {
        self.delta
    }

    /// The message of the event
    pub const fn message(&self) -> &TrackMessage {
        &self.message
    }
}

/// Validated events, in the order they will be written.
pub type EventSequence = Vec<TrackEvent>;

#[test]
fn kinds_deserialize_from_tags() {
    let tags = r#"["noteOn", "noteOff", "programChange", "pitchBend"]"#;
    let kinds: Vec<EventKind> = serde_json::from_str(tags).unwrap();
    assert_eq!(
        kinds,
        [
            EventKind::NoteOn,
            EventKind::NoteOff,
            EventKind::ProgramChange,
            EventKind::Unsupported("pitchBend".to_owned()),
        ]
    );
    assert_eq!(
        serde_json::to_string(&EventKind::ProgramChange).unwrap(),
        r#""programChange""#
    );
}

#[test]
fn missing_delta_defaults_to_zero() {
    let event: RawEvent =
        serde_json::from_str(r#"{ "kind": "programChange", "program": 4, "channel": 2 }"#)
            .unwrap();
    assert_eq!(event, RawEvent::program_change(4, 2));
    assert_eq!(event.delta, 0);
}
