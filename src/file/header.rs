use crate::prelude::*;

#[doc = r#"
   The format and timing a file is written with.

   The track count is not part of it: it is taken from the tracks
   actually written, so the header can never disagree with them.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiFileHeader {
    format: FormatType,
    timing: Timing,
}

impl MidiFileHeader {
    /// Create a new header from a format and timing
    pub const fn new(format: FormatType, timing: Timing) -> Self {
        Self { format, timing }
    }
    /// Get the format type
    pub const fn format(&self) -> FormatType {
        self.format
    }
    /// Get the timing props
    pub const fn timing(&self) -> &Timing {
        &self.timing
    }
}
