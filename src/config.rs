#![doc = r#"
Process-wide settings

A [`Config`] is read once from a RON file and handed to whatever needs it;
nothing reads settings from globals.

```text
(
    output_root: "output",
    format: Simultaneous,
    division: TicksPerQuarterNote(960),
    running_status: false,
    require_events: false,
)
```

Every field may be omitted, in which case its default (shown above) is used.
"#]

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::file::{EncodeOptions, FileError, FormatType, MidiFileHeader, SmpteFps, Timing};

/// The time division written into every file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Division {
    /// Ticks per quarter note, 1-32767
    TicksPerQuarterNote(u16),
    /// SMPTE frames per second and ticks per frame
    Smpte {
        /// Frame rate
        fps: SmpteFps,
        /// Subdivisions of a frame
        ticks_per_frame: u8,
    },
}

impl Division {
    /// Checks the division and converts it to header timing
    pub fn timing(&self) -> Result<Timing, FileError> {
        match *self {
            Self::TicksPerQuarterNote(tpqn) => Timing::new_ticks_per_quarter_note(tpqn),
            Self::Smpte {
                fps,
                ticks_per_frame,
            } => Timing::new_smpte(fps, ticks_per_frame),
        }
    }
}

impl Default for Division {
    fn default() -> Self {
        Self::TicksPerQuarterNote(960)
    }
}

/// Settings for encoding and writing files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory files are written into
    pub output_root: PathBuf,
    /// Format written into file headers
    pub format: FormatType,
    /// Time division written into file headers
    pub division: Division,
    /// Omit repeated status bytes
    pub running_status: bool,
    /// Reject requests with no encodable event
    pub require_events: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("output"),
            format: FormatType::Simultaneous,
            division: Division::default(),
            running_status: false,
            require_events: false,
        }
    }
}

impl Config {
    /// Reads a configuration from a RON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let ron_string = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&ron_string)
    }

    /// Parses a configuration from a RON string
    pub fn from_ron(ron_string: &str) -> Result<Self, ConfigError> {
        let config: Config = ron::from_str(ron_string)?;
        // the division has to be writable into a header
        config.header()?;
        Ok(config)
    }

    /// The header every file is written with
    pub fn header(&self) -> Result<MidiFileHeader, FileError> {
        Ok(MidiFileHeader::new(self.format, self.division.timing()?))
    }

    /// The encoder options
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            running_status: self.running_status,
            require_events: self.require_events,
        }
    }
}

/// A configuration could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Reading config {}: {source}", path.display())]
    Read {
        /// The config path
        path: PathBuf,
        /// The underlying error
        source: std::io::Error,
    },
    /// The file is not valid RON for a [`Config`]
    #[error("Parsing config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// The division cannot be written into a header
    #[error("Invalid config: {0}")]
    Invalid(#[from] FileError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(Config::from_ron("()").unwrap(), Config::default());
    }

    #[test]
    fn defaults_match_header() {
        let header = Config::default().header().unwrap();
        assert_eq!(header.format(), FormatType::Simultaneous);
        assert_eq!(header.timing().ticks_per_quarter_note(), Some(960));
        assert_eq!(Config::default().encode_options(), EncodeOptions::default());
    }

    #[test]
    fn full_config() {
        let config = Config::from_ron(
            r#"(
                output_root: "/var/lib/midi",
                format: SingleMultiChannel,
                division: Smpte(fps: TwentyFive, ticks_per_frame: 40),
                running_status: true,
                require_events: true,
            )"#,
        )
        .unwrap();

        assert_eq!(config.output_root, PathBuf::from("/var/lib/midi"));
        assert_eq!(config.format, FormatType::SingleMultiChannel);
        assert_eq!(config.header().unwrap().timing().to_bytes(), [0xE7, 0x28]);
        assert_eq!(
            config.encode_options(),
            EncodeOptions {
                running_status: true,
                require_events: true,
            }
        );
    }

    #[test]
    fn invalid_division() {
        let result = Config::from_ron("(division: TicksPerQuarterNote(0))");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid(FileError::InvalidDivision(0)))
        ));
    }

    #[test]
    fn malformed_ron() {
        let err = Config::from_ron("(format: Format7)").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("midiwrite.ron");
        fs::write(&path, "(running_status: true)").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.running_status);

        let missing = Config::load(&dir.path().join("missing.ron")).unwrap_err();
        assert!(matches!(missing, ConfigError::Read { .. }));
    }
}
