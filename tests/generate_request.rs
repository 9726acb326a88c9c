use std::fs;

use midiwrite::prelude::*;
use pretty_assertions::assert_eq;

fn generator(dir: &tempfile::TempDir) -> Generator<FileStore> {
    let config = Config::from_ron(&format!(
        r#"(output_root: {:?}, format: SingleMultiChannel, division: TicksPerQuarterNote(96))"#,
        dir.path().join("output")
    ))
    .unwrap();
    Generator::from_config(&config).unwrap()
}

#[test]
fn writes_file_under_output_root() {
    let dir = tempfile::tempdir().unwrap();
    let body = br#"{
        "destinationName": "middle-c.mid",
        "events": [
            { "kind": "noteOn", "note": 60, "velocity": 127, "channel": 0 },
            { "kind": "noteOff", "note": 60, "velocity": 0, "channel": 0 }
        ]
    }"#;

    let path = generator(&dir).handle_json(body).unwrap();
    assert_eq!(path, dir.path().join("output").join("middle-c.mid"));

    let expected: &[u8] = &[
        b'M', b'T', b'h', b'd', 0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00, 0x01, 0x00, 0x60, //
        b'M', b'T', b'r', b'k', 0x00, 0x00, 0x00, 0x0C, //
        0x00, 0x90, 0x3C, 0x7F, //
        0x00, 0x80, 0x3C, 0x00, //
        0x00, 0xFF, 0x2F, 0x00,
    ];
    assert_eq!(fs::read(&path).unwrap(), expected);
}

#[test]
fn original_request_shape() {
    let dir = tempfile::tempdir().unwrap();
    let body = br#"{
        "fileName": "legacy.mid",
        "events": [
            { "kind": "programChange", "program": 24, "channel": 2 },
            { "kind": "controlChange", "controller": 7, "value": 100, "channel": 2 },
            { "kind": "noteOn", "note": 52, "velocity": 90, "channel": 2 }
        ]
    }"#;

    let path = generator(&dir).handle_json(body).unwrap();
    let bytes = fs::read(path).unwrap();
    assert_eq!(
        &bytes[22..],
        [0x00, 0xC2, 0x18, 0x00, 0x92, 0x34, 0x5A, 0x00, 0xFF, 0x2F, 0x00]
    );
}

#[test]
fn rejected_requests_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let generator = generator(&dir);

    let out_of_range = br#"{ "destinationName": "bad.mid", "events": [
        { "kind": "noteOn", "note": 128, "velocity": 1, "channel": 0 }
    ] }"#;
    let err = generator.handle_json(out_of_range).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(err.status(), Status::UNPROCESSABLE_ENTITY);

    let escaping = br#"{ "destinationName": "../bad.mid", "events": [] }"#;
    let err = generator.handle_json(escaping).unwrap_err();
    assert!(matches!(err, ServiceError::Persist(PersistError::InvalidName(_))));
    assert_eq!(err.status(), Status::BAD_REQUEST);

    let malformed = br#"{ "destinationName": "bad.mid" }"#;
    let err = generator.handle_json(malformed).unwrap_err();
    assert!(matches!(err, ServiceError::Request(_)));
    assert_eq!(err.status(), Status::BAD_REQUEST);

    let nul = br#"{ "destinationName": "bad\u0000.mid", "events": [] }"#;
    let err = generator.handle_json(nul).unwrap_err();
    assert!(matches!(err, ServiceError::Persist(PersistError::InvalidName(_))));
    assert_eq!(err.status(), Status::BAD_REQUEST);

    assert!(!dir.path().join("output").join("bad.mid").exists());
    assert!(!dir.path().join("bad.mid").exists());
}

#[test]
fn write_failure_is_a_server_error() {
    let dir = tempfile::tempdir().unwrap();
    // a file where the output directory should be
    fs::write(dir.path().join("output"), b"").unwrap();

    let err = generator(&dir)
        .handle_json(br#"{ "destinationName": "a.mid", "events": [] }"#)
        .unwrap_err();
    assert!(matches!(err, ServiceError::Persist(_)));
    assert_eq!(err.status(), Status::INTERNAL_SERVER_ERROR);
}
