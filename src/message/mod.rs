#![doc = r#"
Messages that can be written into a track

Only channel voice messages are produced from request events. Meta events
(such as the end-of-track marker) are framing and are written by
[`Track`](crate::file::Track) itself.
"#]

pub mod channel;
pub use channel::*;
