//! # Field Extractor
//!
//! Turns a confirmed match into a normalized field value. Every handler
//! follows the same rule: populate the field if it is unset and report
//! [`Outcome::Accepted`], otherwise leave the record untouched and report
//! [`Outcome::Rejected`].

use regex::Captures;

use crate::parser::patterns::{Candidate, PatternCatalog, Tag};
use crate::types::{MediaSource, ParsedRelease, Resolution, UNKNOWN_SUBTITLE, VideoCodec};

/// Result of offering a match to its handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The field was unset and has been populated.
    Accepted,
    /// The field was already populated; the match is a duplicate.
    Rejected,
}

impl Outcome {
    fn from_set(populated: bool) -> Self {
        if populated { Self::Accepted } else { Self::Rejected }
    }
}

/// Offers `candidate` to the handler of its tag.
///
/// Audio fragments are accumulated by the scanner rather than written to a
/// field, so their handler always accepts.
pub fn apply(
    catalog: &PatternCatalog,
    candidate: &Candidate<'_>,
    release: &mut ParsedRelease,
) -> Outcome {
    let caps = &candidate.caps;
    match candidate.tag {
        Tag::Resolution => fill(&mut release.resolution, || extract_resolution(&caps[1])),
        Tag::Source => fill(&mut release.source, || extract_source(&caps[1])),
        Tag::Codec => fill(&mut release.codec, || extract_codec(&caps[1])),
        Tag::SeasonEpisode | Tag::AltEpisode => {
            if release.season.is_some() || release.episode.is_some() {
                return Outcome::Rejected;
            }
            match (number(caps, 1), number(caps, 2)) {
                (Some(season), Some(episode)) => {
                    release.season = Some(season);
                    release.episode = Some(episode);
                    Outcome::Accepted
                }
                _ => Outcome::Rejected,
            }
        }
        Tag::Season | Tag::WordedSeason => fill(&mut release.season, || number(caps, 1)),
        Tag::EpisodeOnly => fill(&mut release.episode, || number(caps, 1)),
        Tag::Date => fill(&mut release.date, || Some(format_date(caps))),
        Tag::SeasonPack => {
            if release.season.is_some() || release.is_complete {
                return Outcome::Rejected;
            }
            match number(caps, 1) {
                Some(season) => {
                    release.season = Some(season);
                    release.is_complete = true;
                    Outcome::Accepted
                }
                None => Outcome::Rejected,
            }
        }
        Tag::Year => fill(&mut release.year, || caps[1].parse().ok()),
        Tag::Edition => fill(&mut release.edition, || Some(title_case(&caps[1]))),
        Tag::Complete => flag(&mut release.is_complete),
        Tag::Proper => flag(&mut release.is_proper),
        Tag::Repack => flag(&mut release.is_repack),
        Tag::Hardcoded => flag(&mut release.is_hardcoded),
        Tag::Language => fill(&mut release.language, || Some(title_case(&caps[1]))),
        Tag::Subtitles => {
            if !release.subtitles.is_empty() {
                return Outcome::Rejected;
            }
            release.subtitles = extract_subtitles(catalog, &caps[1]);
            Outcome::Accepted
        }
        Tag::ReleaseGroup => fill(&mut release.release_group, || Some(caps[1].to_string())),
        Tag::AudioCodec | Tag::AudioChannels | Tag::AudioMode | Tag::AudioEnhancer => {
            Outcome::Accepted
        }
    }
}

fn fill<T>(slot: &mut Option<T>, value: impl FnOnce() -> Option<T>) -> Outcome {
    if slot.is_some() {
        return Outcome::Rejected;
    }
    *slot = value();
    Outcome::from_set(slot.is_some())
}

fn flag(slot: &mut bool) -> Outcome {
    if *slot {
        return Outcome::Rejected;
    }
    *slot = true;
    Outcome::Accepted
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

/// Normalizes a captured date to `YYYY.MM.DD`.
pub fn format_date(caps: &Captures<'_>) -> String {
    format!("{}.{}.{}", &caps[1], &caps[2], &caps[3])
}

pub fn extract_resolution(token: &str) -> Option<Resolution> {
    match token.to_lowercase().as_str() {
        "2160p" | "4k" => Some(Resolution::UHD2160),
        "1080p" => Some(Resolution::FHD1080),
        "720p" => Some(Resolution::HD720),
        "480p" => Some(Resolution::SD480),
        "360p" => Some(Resolution::LD360),
        _ => None,
    }
}

pub fn extract_source(token: &str) -> Option<MediaSource> {
    match token.to_uppercase().as_str() {
        "BLURAY" | "BLU-RAY" => Some(MediaSource::BluRay),
        "WEB-DL" | "WEBDL" => Some(MediaSource::WebDL),
        "WEBRIP" | "WEB" => Some(MediaSource::WebRip),
        "HDTV" => Some(MediaSource::HDTV),
        "CAM" => Some(MediaSource::Cam),
        "TC" => Some(MediaSource::Telecine),
        "DVD" | "DVDRIP" => Some(MediaSource::DVD),
        "BRRIP" => Some(MediaSource::BRRip),
        "BDRIP" => Some(MediaSource::BDRip),
        _ => None,
    }
}

pub fn extract_codec(token: &str) -> Option<VideoCodec> {
    let codec = token.to_uppercase().replace(['.', '-'], "");
    match codec.as_str() {
        "H264" | "X264" | "AVC" => Some(VideoCodec::H264),
        "H265" | "X265" | "HEVC" => Some(VideoCodec::H265),
        "MPEG2" => Some(VideoCodec::MPEG2),
        "MPEG4" | "XVID" => Some(VideoCodec::MPEG4),
        _ => None,
    }
}

/// Upper-cased language codes found before a subtitle marker, or the
/// unknown sentinel when the marker stands alone.
fn extract_subtitles(catalog: &PatternCatalog, prefix: &str) -> Vec<String> {
    let codes: Vec<String> = catalog
        .re_subtitle_code
        .find_iter(prefix)
        .map(|m| m.as_str().to_uppercase())
        .collect();
    if codes.is_empty() {
        vec![UNKNOWN_SUBTITLE.to_string()]
    } else {
        codes
    }
}

/// "DIRECTORS.CUT" -> "Directors Cut"
pub fn title_case(raw: &str) -> String {
    raw.split(|c: char| c == '.' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::patterns::Category;

    fn first<'h>(catalog: &PatternCatalog, haystack: &'h str, tag: Tag) -> Candidate<'h> {
        catalog
            .candidates(haystack, 2025, |_| true)
            .into_iter()
            .find(|c| c.tag == tag)
            .unwrap()
    }

    #[test]
    fn resolution_folds_4k() {
        assert_eq!(extract_resolution("4K"), Some(Resolution::UHD2160));
        assert_eq!(extract_resolution("1080P"), Some(Resolution::FHD1080));
        assert_eq!(extract_resolution("999p"), None);
    }

    #[test]
    fn source_synonyms() {
        assert_eq!(extract_source("Blu-Ray"), Some(MediaSource::BluRay));
        assert_eq!(extract_source("webdl"), Some(MediaSource::WebDL));
        assert_eq!(extract_source("WEB"), Some(MediaSource::WebRip));
        assert_eq!(extract_source("cam"), Some(MediaSource::Cam));
    }

    #[test]
    fn codec_variants() {
        for (input, expected) in [
            ("x264", VideoCodec::H264),
            ("H.264", VideoCodec::H264),
            ("AVC", VideoCodec::H264),
            ("x265", VideoCodec::H265),
            ("HEVC", VideoCodec::H265),
            ("h.265", VideoCodec::H265),
            ("MPEG-2", VideoCodec::MPEG2),
            ("XviD", VideoCodec::MPEG4),
        ] {
            assert_eq!(extract_codec(input), Some(expected), "failed for input: {input}");
        }
    }

    #[test]
    fn title_case_collapses_separators() {
        assert_eq!(title_case("DIRECTORS.CUT"), "Directors Cut");
        assert_eq!(title_case("final cut"), "Final Cut");
        assert_eq!(title_case("KOREAN"), "Korean");
    }

    #[test]
    fn second_resolution_is_rejected() {
        let catalog = PatternCatalog::new().unwrap();
        let mut release = ParsedRelease::new("x");

        let m = first(&catalog, "Movie.720p", Tag::Resolution);
        assert_eq!(apply(&catalog, &m, &mut release), Outcome::Accepted);
        assert_eq!(release.resolution, Some(Resolution::HD720));

        let m = first(&catalog, "Movie.1080p", Tag::Resolution);
        assert_eq!(apply(&catalog, &m, &mut release), Outcome::Rejected);
        assert_eq!(release.resolution, Some(Resolution::HD720));
    }

    #[test]
    fn season_pack_sets_season_and_complete() {
        let catalog = PatternCatalog::new().unwrap();
        let mut release = ParsedRelease::new("x");
        let m = first(&catalog, "Show.S08.Complete", Tag::SeasonPack);
        assert_eq!(apply(&catalog, &m, &mut release), Outcome::Accepted);
        assert_eq!(release.season, Some(8));
        assert!(release.is_complete);
    }

    #[test]
    fn subtitle_codes_in_reading_order() {
        let catalog = PatternCatalog::new().unwrap();
        let mut release = ParsedRelease::new("x");
        let m = first(&catalog, "Movie.2010.eng.fre.SUBS", Tag::Subtitles);
        assert_eq!(apply(&catalog, &m, &mut release), Outcome::Accepted);
        assert_eq!(release.subtitles, vec!["ENG", "FRE"]);
    }

    #[test]
    fn bare_subtitle_marker_records_unknown() {
        let catalog = PatternCatalog::new().unwrap();
        let mut release = ParsedRelease::new("x");
        let m = first(&catalog, "Movie.2010.SUBBED", Tag::Subtitles);
        assert_eq!(apply(&catalog, &m, &mut release), Outcome::Accepted);
        assert_eq!(release.subtitles, vec![UNKNOWN_SUBTITLE]);

        let m = first(&catalog, "Movie.SUBS", Tag::Subtitles);
        assert_eq!(apply(&catalog, &m, &mut release), Outcome::Rejected);
    }

    #[test]
    fn status_flags_reject_duplicates() {
        let catalog = PatternCatalog::new().unwrap();
        let mut release = ParsedRelease::new("x");
        let m = first(&catalog, "Movie.PROPER", Tag::Proper);
        assert_eq!(apply(&catalog, &m, &mut release), Outcome::Accepted);
        assert_eq!(apply(&catalog, &m, &mut release), Outcome::Rejected);
        assert!(release.is_proper);
        assert!(!release.is_repack);
    }

    #[test]
    fn audio_fragments_leave_record_untouched() {
        let catalog = PatternCatalog::new().unwrap();
        let mut release = ParsedRelease::new("x");
        let found = catalog.candidates("DTS", 2025, |k| k == Category::AudioFragment);
        assert_eq!(apply(&catalog, &found[0], &mut release), Outcome::Accepted);
        assert_eq!(release, ParsedRelease::new("x"));
    }
}
