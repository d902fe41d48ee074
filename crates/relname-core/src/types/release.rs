use serde::{Deserialize, Serialize};

use super::quality::{MediaSource, Resolution, VideoCodec};

/// Sentinel entry recorded when a subtitle marker carries no language code.
pub const UNKNOWN_SUBTITLE: &str = "Unknown";

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// The primary output of the relname parsing engine.
///
/// Built fresh for every parse. Absent fields are `None` (or empty / `false`)
/// and are omitted when serialized, so "season 0" and "no season" stay distinct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedRelease {
    /// Original input string.
    pub input: String,

    /// Human-authored title, cleaned of separators and bracketed noise.
    pub title: String,

    /// Release year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,

    /// Air date for daily content, always `YYYY.MM.DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Season number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,

    /// Episode number (first episode for multi-episode releases).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<u32>,

    /// Video resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,

    /// Media source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<MediaSource>,

    /// Video codec.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec: Option<VideoCodec>,

    /// Audio description, e.g. "TRUEHD 7.1 ATMOS".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,

    /// Release group name (e.g., "SPARKS", "RARBG").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_group: Option<String>,

    /// Container extension (lowercase, without leading dot).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,

    /// Spoken language, title-cased.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Subtitle language codes in reading order; may hold [`UNKNOWN_SUBTITLE`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtitles: Vec<String>,

    /// Edition, e.g. "Extended" or "Directors Cut".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_complete: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_proper: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_repack: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_hardcoded: bool,

    /// Text in the metadata region that no pattern recognized (episode titles, site tags).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unparsed: Option<String>,

    /// Confidence score in `[0, 100]`.
    pub confidence: u8,
}

impl ParsedRelease {
    /// Creates a new empty `ParsedRelease` for the given input.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if a non-empty title was extracted.
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Returns `true` if the release looks like episodic content.
    #[must_use]
    pub fn is_episodic(&self) -> bool {
        self.season.is_some() || self.episode.is_some() || self.date.is_some()
    }

    /// Returns `true` if any metadata beyond the title was extracted.
    #[must_use]
    pub fn has_metadata(&self) -> bool {
        self.year.is_some()
            || self.is_episodic()
            || self.resolution.is_some()
            || self.source.is_some()
            || self.codec.is_some()
            || self.audio.is_some()
            || self.release_group.is_some()
    }
}

impl std::fmt::Display for ParsedRelease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParsedRelease(title={:?}", self.title)?;
        if let Some(year) = self.year {
            write!(f, ", year={year}")?;
        }
        match (self.season, self.episode) {
            (Some(s), Some(e)) => write!(f, ", S{s:02}E{e:02}")?,
            (Some(s), None) => write!(f, ", S{s:02}")?,
            (None, Some(e)) => write!(f, ", E{e:02}")?,
            (None, None) => {}
        }
        if let Some(ref res) = self.resolution {
            write!(f, ", res={res}")?;
        }
        if let Some(ref group) = self.release_group {
            write!(f, ", group={group}")?;
        }
        write!(f, ", conf={})", self.confidence)
    }
}
