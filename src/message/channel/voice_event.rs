use crate::{Note, Program, Velocity};

/// The voice events a request can describe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VoiceEvent {
    /// Release a note
    NoteOff {
        /// The note released
        note: Note,
        /// Release velocity
        velocity: Velocity,
    },
    /// Strike a note
    NoteOn {
        /// The note struck
        note: Note,
        /// Strike velocity
        velocity: Velocity,
    },
    /// Select the instrument for a channel
    ProgramChange {
        /// The new program
        program: Program,
    },
}

impl VoiceEvent {
    /// The message type, as the high nibble of the status byte
    pub const fn status_nibble(&self) -> u8 {
        match self {
            Self::NoteOff { .. } => 0x80,
            Self::NoteOn { .. } => 0x90,
            Self::ProgramChange { .. } => 0xC0,
        }
    }

    /// The number of data bytes following the status byte
    pub const fn data_len(&self) -> usize {
        match self {
            Self::NoteOff { .. } | Self::NoteOn { .. } => 2,
            Self::ProgramChange { .. } => 1,
        }
    }

    pub(crate) fn write_data(&self, out: &mut Vec<u8>) {
        match self {
            Self::NoteOff { note, velocity } | Self::NoteOn { note, velocity } => {
                out.extend_from_slice(&[note.byte(), velocity.byte()])
            }
            Self::ProgramChange { program } => out.push(program.byte()),
        }
    }
}
