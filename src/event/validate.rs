use super::{
    EventKind, EventSequence, RawEvent, TrackEvent, TrackMessage, ValidationError,
    ValidationErrorKind, ValidationResult,
};
use crate::{
    Channel, DeltaTicks, Field, Note, Program, Velocity,
    message::{ChannelVoiceMessage, VoiceEvent},
};

/// Checks every field of every event and builds the sequence the encoder consumes.
///
/// Fails on the first event with a field out of range, or missing a field its
/// kind requires. Events of unsupported kinds are passed through untouched.
/// Nothing is reordered.
pub fn validate<I>(events: I) -> ValidationResult<EventSequence>
where
    I: IntoIterator<Item = RawEvent>,
{
    events
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            raw.to_track_event()
                .map_err(|kind| ValidationError::new(index, kind))
        })
        .collect()
}

impl RawEvent {
    /// Validate this single event.
    pub fn to_track_event(&self) -> Result<TrackEvent, ValidationErrorKind> {
        let delta = DeltaTicks::try_from(self.delta)?;

        let message = match &self.kind {
            EventKind::NoteOn => {
                let (note, velocity) = self.note_fields()?;
                TrackMessage::ChannelVoice(ChannelVoiceMessage::new(
                    self.channel_field()?,
                    VoiceEvent::NoteOn { note, velocity },
                ))
            }
            EventKind::NoteOff => {
                let (note, velocity) = self.note_fields()?;
                TrackMessage::ChannelVoice(ChannelVoiceMessage::new(
                    self.channel_field()?,
                    VoiceEvent::NoteOff { note, velocity },
                ))
            }
            EventKind::ProgramChange => {
                let program = Program::try_from(self.required(Field::Program, self.program)?)?;
                TrackMessage::ChannelVoice(ChannelVoiceMessage::new(
                    self.channel_field()?,
                    VoiceEvent::ProgramChange { program },
                ))
            }
            EventKind::Unsupported(kind) => TrackMessage::Unsupported { kind: kind.clone() },
        };

        Ok(TrackEvent::new(delta, message))
    }

    fn note_fields(&self) -> Result<(Note, Velocity), ValidationErrorKind> {
        let note = Note::try_from(self.required(Field::Note, self.note)?)?;
        let velocity = Velocity::try_from(self.required(Field::Velocity, self.velocity)?)?;
        Ok((note, velocity))
    }

    fn channel_field(&self) -> Result<Channel, ValidationErrorKind> {
        Ok(Channel::from_index(
            self.required(Field::Channel, self.channel)?,
        )?)
    }

    fn required(&self, field: Field, value: Option<i64>) -> Result<i64, ValidationErrorKind> {
        value.ok_or(ValidationErrorKind::MissingField {
            kind: match self.kind {
                EventKind::NoteOn => "noteOn",
                EventKind::NoteOff => "noteOff",
                EventKind::ProgramChange => "programChange",
                EventKind::Unsupported(_) => "unsupported",
            },
            field,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn valid_events_keep_their_order() {
        let events = validate([
            RawEvent::program_change(12, 3),
            RawEvent::note_on(60, 127, 3).with_delta(10),
            RawEvent::unsupported("controlChange"),
            RawEvent::note_off(60, 0, 3).with_delta(96),
        ])
        .unwrap();

        assert_eq!(events.len(), 4);
        assert_eq!(events[1].delta().ticks(), 10);
        assert_eq!(events[3].delta().ticks(), 96);
        assert_eq!(
            events[2].message(),
            &TrackMessage::Unsupported {
                kind: "controlChange".to_owned()
            }
        );

        let TrackMessage::ChannelVoice(message) = events[0].message() else {
            panic!("expected a program change");
        };
        assert_eq!(message.channel(), Channel::Four);
        assert_eq!(message.status(), 0xC3);
    }

    #[test]
    fn first_bad_event_is_reported() {
        let err = validate([
            RawEvent::note_on(60, 100, 0),
            RawEvent::note_on(60, 128, 0),
            RawEvent::note_on(200, 100, 0),
        ])
        .unwrap_err();

        assert_eq!(err.index(), 1);
        assert!(err.is_out_of_range());
        let ValidationErrorKind::OutOfRange(range) = err.error_kind() else {
            panic!("expected out of range");
        };
        assert_eq!(range.field(), Field::Velocity);
        assert_eq!(range.value(), 128);
    }

    #[test]
    fn missing_fields() {
        let mut event = RawEvent::note_on(60, 100, 0);
        event.velocity = None;
        let err = validate([event]).unwrap_err();
        assert_eq!(
            err.error_kind(),
            &ValidationErrorKind::MissingField {
                kind: "noteOn",
                field: Field::Velocity
            }
        );

        let mut event = RawEvent::program_change(1, 0);
        event.channel = None;
        let err = validate([event]).unwrap_err();
        assert!(!err.is_out_of_range());
        assert_eq!(
            err.to_string(),
            "Validating event 0, programChange requires `channel`"
        );
    }

    #[test]
    fn unsupported_events_skip_field_checks() {
        let mut event = RawEvent::unsupported("sysEx");
        event.channel = Some(99);
        event.note = Some(-5);
        assert!(validate([event]).is_ok());
    }

    #[test]
    fn unsupported_events_still_need_a_valid_delta() {
        let result = validate([RawEvent::unsupported("sysEx").with_delta(-1)]);
        assert!(result.unwrap_err().is_out_of_range());
    }
}
