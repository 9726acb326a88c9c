//! Files are read back with an independent decoder.

use midiwrite::prelude::*;
use midly::{MetaMessage, MidiMessage, Smf, TrackEventKind};

fn encode_with(format: FormatType, events: Vec<RawEvent>, options: EncodeOptions) -> Vec<u8> {
    let header = MidiFileHeader::new(format, Timing::new_ticks_per_quarter_note(960).unwrap());
    encode(&header, validate(events).unwrap(), &options).unwrap()
}

fn note_on(e: &midly::TrackEvent<'_>, delta: u32, channel: u8, key: u8, vel: u8) {
    assert_eq!(e.delta.as_int(), delta);
    let TrackEventKind::Midi {
        channel: ch,
        message: MidiMessage::NoteOn { key: k, vel: v },
    } = e.kind
    else {
        panic!("expected note on, found {:?}", e.kind);
    };
    assert_eq!(ch.as_int(), channel);
    assert_eq!(k.as_int(), key);
    assert_eq!(v.as_int(), vel);
}

fn note_off(e: &midly::TrackEvent<'_>, delta: u32, channel: u8, key: u8, vel: u8) {
    assert_eq!(e.delta.as_int(), delta);
    let TrackEventKind::Midi {
        channel: ch,
        message: MidiMessage::NoteOff { key: k, vel: v },
    } = e.kind
    else {
        panic!("expected note off, found {:?}", e.kind);
    };
    assert_eq!(ch.as_int(), channel);
    assert_eq!(k.as_int(), key);
    assert_eq!(v.as_int(), vel);
}

fn end_of_track(e: &midly::TrackEvent<'_>) {
    assert!(matches!(
        e.kind,
        TrackEventKind::Meta(MetaMessage::EndOfTrack)
    ));
}

#[test]
fn every_note_on_decodes() {
    for channel in 0..16i64 {
        for note in (0..128i64).step_by(7) {
            for velocity in [0, 1, 63, 64, 100, 126, 127] {
                let bytes = encode_with(
                    FormatType::SingleMultiChannel,
                    vec![RawEvent::note_on(note, velocity, channel)],
                    EncodeOptions::default(),
                );
                let smf = Smf::parse(&bytes).unwrap();
                assert_eq!(smf.tracks.len(), 1);

                let track = &smf.tracks[0];
                assert_eq!(track.len(), 2);
                note_on(&track[0], 0, channel as u8, note as u8, velocity as u8);
                end_of_track(&track[1]);
            }
        }
    }
}

#[test]
fn unit_velocities_decode_within_one_step() {
    for step in 0..=20 {
        let unit = step as f64 / 20.;
        let event = TrackEvent::new(
            DeltaTicks::ZERO,
            ChannelVoiceMessage::new(
                Channel::One,
                VoiceEvent::NoteOn {
                    note: Note::from_databyte(60).unwrap(),
                    velocity: Velocity::from_unit(unit),
                },
            ),
        );
        let header = MidiFileHeader::new(
            FormatType::SingleMultiChannel,
            Timing::new_ticks_per_quarter_note(960).unwrap(),
        );
        let bytes = encode(&header, vec![event], &EncodeOptions::default()).unwrap();

        let smf = Smf::parse(&bytes).unwrap();
        let TrackEventKind::Midi {
            message: MidiMessage::NoteOn { vel, .. },
            ..
        } = smf.tracks[0][0].kind
        else {
            panic!("expected note on");
        };
        assert!((vel.as_int() as f64 / 127. - unit).abs() <= 1. / 127.);
    }
}

#[test]
fn header_fields_decode() {
    let bytes = encode_with(
        FormatType::Simultaneous,
        vec![RawEvent::program_change(19, 4)],
        EncodeOptions::default(),
    );
    let smf = Smf::parse(&bytes).unwrap();

    assert_eq!(smf.header.format, midly::Format::Parallel);
    assert_eq!(
        smf.header.timing,
        midly::Timing::Metrical(midly::num::u15::new(960))
    );

    let TrackEventKind::Midi { channel, message } = smf.tracks[0][0].kind else {
        panic!("expected program change");
    };
    assert_eq!(channel.as_int(), 4);
    assert_eq!(
        message,
        MidiMessage::ProgramChange {
            program: midly::num::u7::new(19)
        }
    );
}

#[test]
fn mixed_sequence_with_running_status_decodes() {
    let events = vec![
        RawEvent::program_change(0, 0),
        RawEvent::note_on(60, 100, 0).with_delta(10),
        RawEvent::unsupported("controlChange").with_delta(5),
        RawEvent::note_on(64, 100, 0).with_delta(5),
        RawEvent::note_off(60, 40, 0).with_delta(960),
        RawEvent::note_off(64, 40, 0),
        RawEvent::unsupported("marker").with_delta(20),
    ];

    for running_status in [false, true] {
        let bytes = encode_with(
            FormatType::SingleMultiChannel,
            events.clone(),
            EncodeOptions {
                running_status,
                ..Default::default()
            },
        );
        let smf = Smf::parse(&bytes).unwrap();
        let track = &smf.tracks[0];
        assert_eq!(track.len(), 6);

        assert!(matches!(
            track[0].kind,
            TrackEventKind::Midi {
                message: MidiMessage::ProgramChange { .. },
                ..
            }
        ));
        note_on(&track[1], 10, 0, 60, 100);
        // the dropped event's 5 ticks are folded in
        note_on(&track[2], 10, 0, 64, 100);
        note_off(&track[3], 960, 0, 60, 40);
        note_off(&track[4], 0, 0, 64, 40);
        assert_eq!(track[5].delta.as_int(), 20);
        end_of_track(&track[5]);
    }
}
