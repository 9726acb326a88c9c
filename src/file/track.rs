use tracing::debug;

use super::{EncodeError, EncodeOptions, EncodeResult};
use crate::{DeltaTicks, event::EventSequence, event::TrackEvent, event::TrackMessage, vlq};

/// The end-of-track meta event, without its delta time
pub const END_OF_TRACK: [u8; 3] = [0xFF, 0x2F, 0x00];

#[doc = r#"
The events of one track, in the order they are written.

# Unsupported events

[`TrackMessage::Unsupported`] events are not written. Their delta is added to
the delta of the next written event (or to the end-of-track marker), so every
later event keeps its position in time.
"#]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Track {
    events: EventSequence,
}

impl Track {
    /// Create a track from validated events
    pub fn new(events: EventSequence) -> Self {
        Self { events }
    }

    /// The events of the track
    pub fn events(&self) -> &[TrackEvent] {
        &self.events
    }

    /// Encodes the track's event stream: every written event preceded by its
    /// delta time, then the end-of-track marker.
    ///
    /// This is the payload of the track chunk, without the chunk header.
    pub fn encode_events(&self, options: &EncodeOptions) -> EncodeResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.written_len());
        let mut carried = DeltaTicks::ZERO;
        let mut running_status: Option<u8> = None;
        let mut written = 0usize;

        for (index, event) in self.events.iter().enumerate() {
            let delta = carried
                .checked_add(event.delta())
                .ok_or(EncodeError::DeltaOverflow { index })?;

            match event.message() {
                TrackMessage::ChannelVoice(message) => {
                    vlq::write(delta, &mut out);
                    let status = message.status();
                    if options.running_status && running_status == Some(status) {
                        message.write_data(&mut out);
                    } else {
                        message.write(&mut out);
                    }
                    running_status = Some(status);
                    carried = DeltaTicks::ZERO;
                    written += 1;
                }
                TrackMessage::Unsupported { kind } => {
                    debug!(index, kind = kind.as_str(), "dropping unsupported event");
                    carried = delta;
                }
            }
        }

        if written == 0 && options.require_events {
            return Err(EncodeError::EmptyEventSet);
        }

        vlq::write(carried, &mut out);
        out.extend_from_slice(&END_OF_TRACK);
        Ok(out)
    }

    /// The length of [`Track::encode_events`] with running status off, and an
    /// upper bound with it on.
    fn written_len(&self) -> usize {
        let mut carried = DeltaTicks::ZERO;
        let mut len = END_OF_TRACK.len();
        for event in &self.events {
            let delta = carried
                .checked_add(event.delta())
                .unwrap_or(DeltaTicks::MAX);
            match event.message() {
                TrackMessage::ChannelVoice(message) => {
                    len += vlq::len(delta) + message.size();
                    carried = DeltaTicks::ZERO;
                }
                TrackMessage::Unsupported { .. } => carried = delta,
            }
        }
        len + vlq::len(carried)
    }
}

impl From<EventSequence> for Track {
    fn from(value: EventSequence) -> Self {
        Self::new(value)
    }
}
