#![doc = r#"
The request handler: a JSON body in, a written file or a status out

```text
{ "destinationName": "song.mid", "events": [ ... ] }
        |
        | GenerateRequest::from_json
        v
  validate -> encode -> Persist::persist
```

Each stage fails with its own [`ServiceError`] variant, and every variant maps
to a [`Status`] so a caller can tell a bad request from a failed write.
"#]

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    config::Config,
    event::{RawEvent, ValidationError, validate},
    file::{EncodeError, EncodeOptions, FileError, MidiFileHeader, encode},
    persist::{FileStore, Persist, PersistError},
};

/// The body of a request to generate a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// File name to write the result under
    #[serde(alias = "fileName")]
    pub destination_name: String,
    /// The events of the single track
    pub events: Vec<RawEvent>,
}

impl GenerateRequest {
    /// Decodes a request body
    pub fn from_json(body: &[u8]) -> Result<Self, ServiceError> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// A response status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Status(u16);

impl Status {
    /// 200
    pub const OK: Self = Self(200);
    /// 400, the body could not be decoded or named an invalid destination
    pub const BAD_REQUEST: Self = Self(400);
    /// 422, the body decoded but its events cannot be encoded
    pub const UNPROCESSABLE_ENTITY: Self = Self(422);
    /// 500, the file could not be written
    pub const INTERNAL_SERVER_ERROR: Self = Self(500);

    /// The numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// True for 5xx codes
    pub const fn is_server_error(&self) -> bool {
        self.0 >= 500
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}

/// A request could not be served
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The body is not a valid request
    #[error("Decoding request: {0}")]
    Request(#[from] serde_json::Error),
    /// An event failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The events could not be encoded
    #[error("Encoding: {0}")]
    Encode(#[from] EncodeError),
    /// The file could not be written
    #[error(transparent)]
    Persist(#[from] PersistError),
}

impl ServiceError {
    /// The status reported to the caller
    pub fn status(&self) -> Status {
        match self {
            Self::Request(_) => Status::BAD_REQUEST,
            Self::Validation(_) | Self::Encode(_) => Status::UNPROCESSABLE_ENTITY,
            Self::Persist(e) if e.is_invalid_name() => Status::BAD_REQUEST,
            Self::Persist(_) => Status::INTERNAL_SERVER_ERROR,
        }
    }
}

#[doc = r##"
Serves requests with a fixed header, encoder options and store.

# Example
```rust
# use midiwrite::prelude::*;
let dir = tempfile::tempdir().unwrap();
let config = Config {
    output_root: dir.path().to_path_buf(),
    ..Config::default()
};
let generator = Generator::from_config(&config).unwrap();

let path = generator
    .handle_json(br#"{
        "destinationName": "c.mid",
        "events": [
            { "kind": "noteOn", "note": 60, "velocity": 127, "channel": 0 },
            { "kind": "noteOff", "note": 60, "velocity": 0, "channel": 0 }
        ]
    }"#)
    .unwrap();
assert!(path.ends_with("c.mid"));

let err = generator
    .handle_json(br#"{ "destinationName": "c.mid", "events": [
        { "kind": "noteOn", "note": 60, "velocity": 300, "channel": 0 }
    ] }"#)
    .unwrap_err();
assert_eq!(err.status(), Status::UNPROCESSABLE_ENTITY);
```
"##]
#[derive(Debug, Clone)]
pub struct Generator<P> {
    header: MidiFileHeader,
    options: EncodeOptions,
    store: P,
}

impl Generator<FileStore> {
    /// A generator writing under the configured output root
    pub fn from_config(config: &Config) -> Result<Self, FileError> {
        Self::new(config, FileStore::new(config.output_root.clone()))
    }
}

impl<P: Persist> Generator<P> {
    /// A generator writing to `store`
    pub fn new(config: &Config, store: P) -> Result<Self, FileError> {
        Ok(Self {
            header: config.header()?,
            options: config.encode_options(),
            store,
        })
    }

    /// The store files are written to
    pub fn store(&self) -> &P {
        &self.store
    }

    /// Validates, encodes and persists one request.
    ///
    /// Nothing is written unless validation and encoding both succeed.
    pub fn generate(&self, request: GenerateRequest) -> Result<PathBuf, ServiceError> {
        let GenerateRequest {
            destination_name,
            events,
        } = request;

        let num_events = events.len();
        let events = validate(events).inspect_err(|e| {
            warn!(destination = %destination_name, error = %e, "rejected events");
        })?;
        let bytes = encode(&self.header, events, &self.options)?;
        let path = self.store.persist(&destination_name, &bytes)?;

        info!(
            destination = %destination_name,
            events = num_events,
            bytes = bytes.len(),
            "generated file"
        );
        Ok(path)
    }

    /// Decodes a JSON body and serves it.
    pub fn handle_json(&self, body: &[u8]) -> Result<PathBuf, ServiceError> {
        self.generate(GenerateRequest::from_json(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, io};

    /// Keeps everything in memory; optionally fails every write.
    #[derive(Default)]
    struct MemoryStore {
        written: RefCell<Vec<(String, Vec<u8>)>>,
        fail: bool,
    }

    impl Persist for MemoryStore {
        fn persist(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, PersistError> {
            if self.fail {
                return Err(PersistError::WriteFailed {
                    path: PathBuf::from(name),
                    source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
                });
            }
            self.written
                .borrow_mut()
                .push((name.to_owned(), bytes.to_vec()));
            Ok(PathBuf::from(name))
        }
    }

    fn in_memory() -> Generator<MemoryStore> {
        Generator::new(&Config::default(), MemoryStore::default()).unwrap()
    }

    fn request(events: Vec<RawEvent>) -> GenerateRequest {
        GenerateRequest {
            destination_name: "out.mid".to_owned(),
            events,
        }
    }

    #[test]
    fn accepts_original_field_name() {
        let request = GenerateRequest::from_json(
            br#"{ "fileName": "a.mid", "events": [{ "kind": "programChange", "program": 3, "channel": 1 }] }"#,
        )
        .unwrap();
        assert_eq!(request.destination_name, "a.mid");
        assert_eq!(request.events, [RawEvent::program_change(3, 1)]);
    }

    #[test]
    fn writes_once_per_request() {
        let generator = in_memory();
        generator
            .generate(request(vec![RawEvent::note_on(60, 100, 0)]))
            .unwrap();

        let written = generator.store().written.borrow();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, "out.mid");
        assert_eq!(&written[0].1[..4], b"MThd");
    }

    #[test]
    fn invalid_events_are_never_written() {
        let generator = in_memory();
        let err = generator
            .generate(request(vec![RawEvent::note_on(60, 100, 16)]))
            .unwrap_err();

        assert!(matches!(&err, ServiceError::Validation(e) if e.is_out_of_range()));
        assert_eq!(err.status(), Status::UNPROCESSABLE_ENTITY);
        assert!(generator.store().written.borrow().is_empty());
    }

    #[test]
    fn statuses() {
        let generator = in_memory();
        assert_eq!(
            generator.handle_json(b"not json").unwrap_err().status(),
            Status::BAD_REQUEST
        );

        let failing = Generator::new(
            &Config::default(),
            MemoryStore {
                fail: true,
                ..Default::default()
            },
        )
        .unwrap();
        let err = failing.generate(request(Vec::new())).unwrap_err();
        assert_eq!(err.status(), Status::INTERNAL_SERVER_ERROR);
        assert!(err.status().is_server_error());

        let strict = Generator::new(
            &Config {
                require_events: true,
                ..Config::default()
            },
            MemoryStore::default(),
        )
        .unwrap();
        let err = strict.generate(request(Vec::new())).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Encode(EncodeError::EmptyEventSet)
        ));
        assert_eq!(err.status(), Status::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn format_zero_config() {
        let generator = Generator::new(
            &Config {
                format: crate::file::FormatType::SingleMultiChannel,
                ..Config::default()
            },
            MemoryStore::default(),
        )
        .unwrap();
        generator.generate(request(Vec::new())).unwrap();
        let written = generator.store().written.borrow();
        // format word, then one track
        assert_eq!(written[0].1[8..12], [0x00, 0x00, 0x00, 0x01]);
    }
}
