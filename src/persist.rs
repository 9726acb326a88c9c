#![doc = r#"
Writing encoded files somewhere durable

The encoder never touches the file system. Its output is handed to a
[`Persist`] implementation together with the name the caller asked for.
[`FileStore`] writes it under a configured root directory.
"#]

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Component, Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

/// Somewhere encoded files can be written to.
pub trait Persist {
    /// Writes `bytes` under `name`, returning where they went.
    fn persist(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, PersistError>;
}

impl<P: Persist + ?Sized> Persist for &P {
    fn persist(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, PersistError> {
        (**self).persist(name, bytes)
    }
}

/// A file could not be persisted
#[derive(Debug, Error)]
pub enum PersistError {
    /// The destination is not a plain file name
    #[error("Invalid destination name {0:?}")]
    InvalidName(String),
    /// The output root could not be created
    #[error("Creating output directory {}: {source}", path.display())]
    CreateDir {
        /// The output root
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },
    /// The destination could not be opened or written
    #[error("Writing {}: {source}", path.display())]
    WriteFailed {
        /// The destination
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },
}

impl PersistError {
    /// True if the name was rejected before any I/O happened
    pub const fn is_invalid_name(&self) -> bool {
        matches!(self, Self::InvalidName(_))
    }
}

#[doc = r#"
Writes files into one directory.

Names must be a single path component with no NUL byte: `song.mid` is
accepted, `../song.mid`, `a/b.mid` and `.` are not.

# Example
```rust
# use midiwrite::prelude::*;
let dir = tempfile::tempdir().unwrap();
let store = FileStore::new(dir.path().join("output"));

let path = store.persist("song.mid", b"MThd").unwrap();
assert_eq!(path, dir.path().join("output").join("song.mid"));
assert_eq!(std::fs::read(&path).unwrap(), b"MThd");

assert!(store.persist("../song.mid", b"MThd").unwrap_err().is_invalid_name());
```
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store writing under `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The output root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where `name` would be written
    pub fn destination(&self, name: &str) -> Result<PathBuf, PersistError> {
        let invalid = || PersistError::InvalidName(name.to_owned());
        if name.contains(['/', '\\', '\0']) {
            return Err(invalid());
        }
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file_name)), None) => Ok(self.root.join(file_name)),
            _ => Err(invalid()),
        }
    }
}

impl Persist for FileStore {
    fn persist(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, PersistError> {
        let path = self.destination(name)?;

        fs::create_dir_all(&self.root).map_err(|source| PersistError::CreateDir {
            path: self.root.clone(),
            source,
        })?;

        debug!(path = %path.display(), len = bytes.len(), "writing file");
        let write = |path: &Path| -> io::Result<()> {
            let mut file = File::create(path)?;
            file.write_all(bytes)?;
            file.sync_all()
        };
        write(&path).map_err(|source| PersistError::WriteFailed {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), len = bytes.len(), "wrote file");
        Ok(path)
    }
}
