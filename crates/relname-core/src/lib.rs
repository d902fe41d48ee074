//! # Relname Core
//!
//! Extracts structured metadata from scene and P2P release names. A name is
//! split at a single boundary offset into a human title (left) and a block of
//! technical tags (right); each recognized tag is normalized into a typed
//! field and the result carries a 0-100 confidence score.
//!
//! ## Quick Start
//!
//! ```rust
//! use relname_core::{MediaSource, Resolution, VideoCodec};
//!
//! let release = relname_core::parse("Breaking.Bad.S01E01.Pilot.1080p.BluRay.x264-ROVERS");
//!
//! assert_eq!(release.title, "Breaking Bad");
//! assert_eq!(release.season, Some(1));
//! assert_eq!(release.episode, Some(1));
//! assert_eq!(release.resolution, Some(Resolution::FHD1080));
//! assert_eq!(release.source, Some(MediaSource::BluRay));
//! assert_eq!(release.codec, Some(VideoCodec::H264));
//! assert_eq!(release.release_group.as_deref(), Some("ROVERS"));
//! assert_eq!(release.unparsed.as_deref(), Some("Pilot"));
//! ```
pub mod error;
pub mod parser;
pub mod scoring;
pub mod types;

// Re-export primary API
pub use error::{RelnameError, Result};
pub use parser::{Parser, ParserConfig, PatternCatalog, Tracker, parse, parse_with_hints};
pub use types::{MediaSource, ParsedRelease, Resolution, UNKNOWN_SUBTITLE, VideoCodec};
