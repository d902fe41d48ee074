pub mod quality;
pub mod release;

pub use quality::{MediaSource, Resolution, VideoCodec};
pub use release::{ParsedRelease, UNKNOWN_SUBTITLE};
