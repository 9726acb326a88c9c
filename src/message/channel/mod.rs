#![doc = r#"
Contains all Channel Message types

# Hierarchy
```text
                |-----------------|
                | Channel Message |
                |-----------------|
                 /               \
|-----------------------|   |----------------------|
| Channel Voice Message |   | Channel Mode Message |
|-----------------------|   |----------------------|
```

Mode messages (all notes off, local control, ...) are never produced by
this crate, so only the voice branch is modeled.
"#]

mod voice_event;
pub use voice_event::*;

use crate::Channel;

#[doc = r#"
A voice event addressed to one channel.

The status byte carries the message type in its high nibble and the channel
in its low nibble.

# Example
```rust
# use midiwrite::prelude::*;
let message = ChannelVoiceMessage::new(
    Channel::Two,
    VoiceEvent::NoteOn {
        note: Note::from_databyte(60).unwrap(),
        velocity: Velocity::MAX,
    },
);
assert_eq!(message.status(), 0x91);

let mut out = Vec::new();
message.write(&mut out);
assert_eq!(out, [0x91, 0x3C, 0x7F]);
```
"#]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelVoiceMessage {
    channel: Channel,
    event: VoiceEvent,
}

impl ChannelVoiceMessage {
    /// Create a new channel voice message
    pub const fn new(channel: Channel, event: VoiceEvent) -> Self {
        Self { channel, event }
    }

    /// The channel the message is addressed to
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// The event carried by the message
    pub const fn event(&self) -> &VoiceEvent {
        &self.event
    }

    /// The status byte: message type in the high nibble, channel in the low
    pub fn status(&self) -> u8 {
        self.event.status_nibble() | self.channel.index()
    }

    /// The number of bytes [`write`](Self::write) appends
    pub const fn size(&self) -> usize {
        1 + self.event.data_len()
    }

    /// Appends the status byte followed by the data bytes
    pub fn write(&self, out: &mut Vec<u8>) {
        out.push(self.status());
        self.event.write_data(out);
    }

    /// Appends only the data bytes, for when the status is implied by running status
    pub fn write_data(&self, out: &mut Vec<u8>) {
        self.event.write_data(out);
    }
}

#[test]
fn status_combines_type_and_channel() {
    use crate::{Note, Program, Velocity};

    let note = Note::from_databyte(64).unwrap();
    let off = ChannelVoiceMessage::new(
        Channel::Sixteen,
        VoiceEvent::NoteOff {
            note,
            velocity: Velocity::ZERO,
        },
    );
    assert_eq!(off.status(), 0x8F);

    let program = ChannelVoiceMessage::new(
        Channel::Ten,
        VoiceEvent::ProgramChange {
            program: Program::from_databyte(5).unwrap(),
        },
    );
    assert_eq!(program.status(), 0xC9);

    let mut out = Vec::new();
    program.write(&mut out);
    assert_eq!(out, [0xC9, 0x05]);
    assert_eq!(program.size(), out.len());

    out.clear();
    off.write(&mut out);
    assert_eq!(out, [0x8F, 0x40, 0x00]);
    assert_eq!(off.size(), out.len());
}
