//! # Pattern Catalog
//!
//! The ordered table of metadata matchers consumed by the boundary scanner.
//! Each entry pairs a compiled regex with a [`Tag`]; the tag decides the scan
//! category and which field the match populates.

use std::ops::Range;
use std::sync::{Arc, LazyLock};

use regex::{Captures, Regex};

use crate::error::Result;

/// Earliest year accepted as a release year.
pub const EARLIEST_YEAR: u16 = 1895;

/// Tokens that are never accepted as a release group.
const RESERVED_GROUP_TOKENS: &[&str] = &[
    "1080p", "720p", "480p", "2160p", "4K", "BluRay", "WEBRip", "HDTV", "WEB", "x264", "x265",
    "H264", "H265", "AAC", "AC3", "DTS", "FLAC", "PROPER", "REPACK",
];

static DEFAULT_CATALOG: LazyLock<Arc<PatternCatalog>> = LazyLock::new(|| {
    Arc::new(PatternCatalog::new().expect("built-in release patterns are valid regexes"))
});

/// Scan category of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Unambiguous technical tags. Scanned first; they move the boundary.
    Definite,
    /// Words that may belong to either the title or the metadata.
    Extending,
    /// Pieces of a composite audio description, joined after the scan.
    AudioFragment,
}

/// Kind of metadata token a pattern recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Resolution,
    Source,
    Codec,
    /// `S01E02`, `S02E01-E08`
    SeasonEpisode,
    /// Bare `S01`
    Season,
    /// `Season 2`
    WordedSeason,
    /// `1x01`
    AltEpisode,
    /// `E05`, `EP05`, `Episode 5`
    EpisodeOnly,
    /// `2023.10.15`
    Date,
    /// `S01 Complete`
    SeasonPack,
    Year,
    Edition,
    Complete,
    Proper,
    Repack,
    Hardcoded,
    Language,
    Subtitles,
    ReleaseGroup,
    AudioCodec,
    AudioChannels,
    AudioMode,
    AudioEnhancer,
}

impl Tag {
    /// Returns the scan category this tag belongs to.
    #[must_use]
    pub fn category(self) -> Category {
        match self {
            Self::Resolution
            | Self::Source
            | Self::Codec
            | Self::SeasonEpisode
            | Self::Season
            | Self::WordedSeason
            | Self::AltEpisode
            | Self::EpisodeOnly
            | Self::Date
            | Self::SeasonPack => Category::Definite,
            Self::Year
            | Self::Edition
            | Self::Complete
            | Self::Proper
            | Self::Repack
            | Self::Hardcoded
            | Self::Language
            | Self::Subtitles
            | Self::ReleaseGroup => Category::Extending,
            Self::AudioCodec | Self::AudioChannels | Self::AudioMode | Self::AudioEnhancer => {
                Category::AudioFragment
            }
        }
    }
}

/// A compiled matcher and the tag it reports.
#[derive(Debug)]
pub struct Pattern {
    tag: Tag,
    regex: Regex,
}

impl Pattern {
    fn new(tag: Tag, pattern: &str) -> Result<Self> {
        Ok(Self {
            tag,
            regex: Regex::new(pattern)?,
        })
    }

    /// The tag this pattern reports.
    #[must_use]
    pub fn tag(&self) -> Tag {
        self.tag
    }
}

/// One pattern match located in a working string.
#[derive(Debug)]
pub struct Candidate<'h> {
    pub tag: Tag,
    pub start: usize,
    pub end: usize,
    pub caps: Captures<'h>,
}

impl<'h> Candidate<'h> {
    /// The full matched text.
    #[must_use]
    pub fn text(&self) -> &'h str {
        self.caps.get(0).map_or("", |m| m.as_str())
    }

    /// Byte range of the match in the haystack.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the two spans share at least one byte.
    #[must_use]
    pub fn overlaps(&self, other: &Range<usize>) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Immutable, process-wide set of metadata patterns.
///
/// Safe to share between threads; every parse borrows it read-only.
#[derive(Debug)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
    pub(crate) re_container: Regex,
    pub(crate) re_date: Regex,
    pub(crate) re_season_pack: Regex,
    pub(crate) re_year_range: Regex,
    pub(crate) re_subtitle_code: Regex,
    pub(crate) re_leftover_episode: Regex,
    pub(crate) re_brackets: Regex,
    pub(crate) re_trailing_paren: Regex,
}

impl PatternCatalog {
    /// Compiles the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns `RelnameError::RegexError` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        let date = r"\b([0-9]{4})[.\-]([0-9]{2})[.\-]([0-9]{2})\b";
        let season_pack = r"(?i)\bS([0-9]{1,2})[.\s_]?Complete\b";

        let patterns = vec![
            // Definite
            Pattern::new(
                Tag::Resolution,
                r"(?i)\b(2160p|4K|1080p|720p|480p|360p)\b",
            )?,
            Pattern::new(
                Tag::Source,
                r"(?i)\b(BLU-?RAY|WEB-?DL|WEBRIP|WEB|HDTV|CAM|TC|DVD(?:RIP)?|BRRIP|BDRIP)\b",
            )?,
            Pattern::new(
                Tag::Codec,
                r"(?i)\b(H\.?264|X264|AVC|H\.?265|X265|HEVC|MPEG-?2|MPEG-?4|XVID)\b",
            )?,
            Pattern::new(
                Tag::SeasonEpisode,
                r"(?i)\bS([0-9]{1,2})E([0-9]{1,3})(?:-?E[0-9]{1,3})*\b",
            )?,
            Pattern::new(Tag::Season, r"(?i)\bS([0-9]{1,2})\b")?,
            Pattern::new(Tag::WordedSeason, r"(?i)\bSeason[.\s_]?([0-9]{1,2})\b")?,
            Pattern::new(Tag::AltEpisode, r"(?i)\b([0-9]{1,2})x([0-9]{1,3})\b")?,
            Pattern::new(Tag::EpisodeOnly, r"(?i)\b(?:EP?|Episode[.\s_]?)([0-9]{1,3})\b")?,
            Pattern::new(Tag::Date, date)?,
            Pattern::new(Tag::SeasonPack, season_pack)?,
            // Extending
            Pattern::new(Tag::Year, r"\b([0-9]{4})\b")?,
            Pattern::new(
                Tag::Edition,
                r"(?i)\b(Directors?[.\s_]?Cut|Extended[.\s_]?Cut|Final[.\s_]?Cut|Extended|Unrated|Rated|Theatrical|Remastered|Uncut)\b",
            )?,
            Pattern::new(Tag::Complete, r"(?i)\bComplete\b")?,
            Pattern::new(Tag::Proper, r"(?i)\bPROPER\b")?,
            Pattern::new(Tag::Repack, r"(?i)\bREPACK\b")?,
            Pattern::new(Tag::Hardcoded, r"(?i)\b(?:HC|HARDCODED)\b")?,
            Pattern::new(
                Tag::Language,
                r"(?i)\b(ENGLISH|FRENCH|SPANISH|GERMAN|ITALIAN|DANISH|DUTCH|JAPANESE|CANTONESE|MANDARIN|RUSSIAN|POLISH|VIETNAMESE|SWEDISH|NORWEGIAN|FINNISH|TURKISH|PORTUGUESE|KOREAN|HINDI|MULTI)\b",
            )?,
            Pattern::new(
                Tag::Subtitles,
                r"(?i)\b((?:(?:ENG|FRE|SPA|GER|ITA|DAN|DUT|JAP|CHI|RUS|POL|VIE|SWE|NOR|FIN|TUR|POR|KOR)[.\s_]?)*)SUB(?:S|BED)?\b",
            )?,
            Pattern::new(Tag::ReleaseGroup, r"-([A-Za-z0-9]+)(\[[^\]]+\])?$")?,
            // Audio fragments
            Pattern::new(
                Tag::AudioCodec,
                r"(?i)\b(?:TRUEHD|DTS-HD(?:[.\s]?MA)?|DTS|FLAC|MP3|OGG|WAV|OPUS|LPCM|PCM|EAC3|E-AC-3|AC3|AAC|DDP|DD)(?:[0-9]\.[0-9])?\b",
            )?,
            Pattern::new(Tag::AudioChannels, r"\b[1-9]\.[0-2]\b")?,
            Pattern::new(Tag::AudioMode, r"(?i)\b(?:MONO|STEREO)\b")?,
            Pattern::new(Tag::AudioEnhancer, r"(?i)\b(?:ATMOS|DTS-X)\b|\bDD\+(?:[0-9]\.[0-9])?")?,
        ];

        Ok(Self {
            patterns,
            re_container: Regex::new(r"(?i)\.(mkv|mp4|avi|mov|wmv|flv|webm)$")?,
            re_date: Regex::new(date)?,
            re_season_pack: Regex::new(season_pack)?,
            re_year_range: Regex::new(r"\b([0-9]{4})-([0-9]{4})\b")?,
            re_subtitle_code: Regex::new(r"[A-Za-z]{3}")?,
            re_leftover_episode: Regex::new(r"(?i)\bE[0-9]{1,3}\b")?,
            re_brackets: Regex::new(r"\[[^\]]+\]")?,
            re_trailing_paren: Regex::new(r"\([^)]+\)\s*$")?,
        })
    }

    /// Returns the process-wide default catalog.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::clone(&DEFAULT_CATALOG)
    }

    /// All patterns in catalog order.
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// Collects every admissible match of the patterns whose category passes
    /// `include`, ordered rightmost first.
    ///
    /// A match lying entirely inside a longer match is dropped, so `S08` is
    /// not reported next to `S08.Complete`. Ties on start offset put the longer
    /// match first, then keep catalog order.
    pub fn candidates<'h>(
        &self,
        haystack: &'h str,
        latest_year: u16,
        include: impl Fn(Category) -> bool,
    ) -> Vec<Candidate<'h>> {
        let mut found: Vec<Candidate<'h>> = self
            .patterns
            .iter()
            .filter(|p| include(p.tag.category()))
            .flat_map(|p| {
                p.regex.captures_iter(haystack).filter_map(move |caps| {
                    let whole = caps.get(0)?;
                    if whole.is_empty() || !admits(p.tag, &caps, latest_year) {
                        return None;
                    }
                    Some(Candidate {
                        tag: p.tag,
                        start: whole.start(),
                        end: whole.end(),
                        caps,
                    })
                })
            })
            .collect();

        let spans: Vec<Range<usize>> = found.iter().map(Candidate::span).collect();
        let mut keep = nested_spans(&spans).into_iter().map(|nested| !nested);
        found.retain(|_| keep.next().unwrap_or(true));

        found.sort_by(|a, b| b.start.cmp(&a.start).then(b.len().cmp(&a.len())));
        found
    }

    /// Byte ranges of every admissible match of every pattern.
    pub fn all_spans(&self, haystack: &str, latest_year: u16) -> Vec<Range<usize>> {
        self.patterns
            .iter()
            .flat_map(|p| {
                p.regex
                    .captures_iter(haystack)
                    .filter(move |caps| admits(p.tag, caps, latest_year))
                    .filter_map(|caps| caps.get(0).map(|m| m.range()))
            })
            .collect()
    }
}

/// Flags every span lying inside a strictly longer span, in one sweep over
/// the spans ordered by start, longest first.
fn nested_spans(spans: &[Range<usize>]) -> Vec<bool> {
    let mut order: Vec<usize> = (0..spans.len()).collect();
    order.sort_by(|&a, &b| {
        spans[a]
            .start
            .cmp(&spans[b].start)
            .then(spans[b].end.cmp(&spans[a].end))
    });

    let mut nested = vec![false; spans.len()];
    // Span with the furthest end so far; earliest start wins ties.
    let mut reach: Option<Range<usize>> = None;
    for i in order {
        let span = &spans[i];
        match &reach {
            Some(r) if r.end > span.end || (r.end == span.end && r.start < span.start) => {
                nested[i] = true;
            }
            Some(r) if r.end >= span.end => {}
            _ => reach = Some(span.clone()),
        }
    }
    nested
}

/// Match-level filters: a rejected match is not a candidate at all.
fn admits(tag: Tag, caps: &Captures<'_>, latest_year: u16) -> bool {
    match tag {
        Tag::Year => caps[1]
            .parse::<u16>()
            .is_ok_and(|y| is_plausible_year(y, latest_year)),
        Tag::ReleaseGroup => is_valid_group(&caps[1]),
        _ => true,
    }
}

/// Returns `true` if `year` lies in `EARLIEST_YEAR..=latest_year`.
#[must_use]
pub fn is_plausible_year(year: u16, latest_year: u16) -> bool {
    (EARLIEST_YEAR..=latest_year).contains(&year)
}

fn is_valid_group(group: &str) -> bool {
    group.len() >= 2
        && !RESERVED_GROUP_TOKENS
            .iter()
            .any(|t| t.eq_ignore_ascii_case(group))
}
