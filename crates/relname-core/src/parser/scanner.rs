//! # Boundary Scanner
//!
//! Finds the single offset that splits a working string into title (left)
//! and metadata (right). Three passes over the pattern catalog:
//!
//! 1. **Definite** tags, rightmost first. Each accepted tag moves the
//!    boundary to its start. The first duplicate field ends the pass.
//! 2. **Extending** tags and audio fragments at or after the boundary. Fills
//!    fields without moving the boundary; audio fragments are collected and
//!    joined in reading order afterwards.
//! 3. **Extending** tags before the boundary, walking left. A tag is taken
//!    only if its field is unset, it touches the boundary through separators
//!    alone, and it does not start the name.

use std::ops::Range;

use tracing::{debug, trace};

use crate::parser::extract::{Outcome, apply};
use crate::parser::patterns::{Candidate, Category, PatternCatalog};
use crate::types::ParsedRelease;

/// Characters allowed between two adjacent metadata tokens.
pub const SEPARATORS: [char; 4] = ['.', ' ', '-', '_'];

/// Returns `true` if `c` separates tokens.
#[must_use]
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Walks a working string and computes the title/metadata boundary.
pub struct BoundaryScanner<'c> {
    catalog: &'c PatternCatalog,
    latest_year: u16,
}

impl<'c> BoundaryScanner<'c> {
    pub fn new(catalog: &'c PatternCatalog, latest_year: u16) -> Self {
        Self {
            catalog,
            latest_year,
        }
    }

    /// Runs all three phases, populating `release`, and returns the boundary.
    pub fn scan(&self, work: &str, release: &mut ParsedRelease) -> usize {
        let mut boundary = work.len();
        let claimed = self.scan_definite(work, release, &mut boundary);

        // Episode with no season marker anywhere: season 1 by convention.
        if release.episode.is_some() && release.season.is_none() {
            release.season = Some(1);
        }

        let possible = self.catalog.candidates(work, self.latest_year, |k| {
            k != Category::Definite
        });
        self.fill_possible(&possible, &claimed, boundary, release);
        self.extend_left(work, &possible, &claimed, &mut boundary, release);

        trace!(boundary, "scan complete");
        boundary
    }

    /// Phase 1. Returns the spans of accepted matches.
    fn scan_definite(
        &self,
        work: &str,
        release: &mut ParsedRelease,
        boundary: &mut usize,
    ) -> Vec<Range<usize>> {
        let mut claimed = Vec::new();
        let definite = self.catalog.candidates(work, self.latest_year, |k| {
            k == Category::Definite
        });

        for candidate in &definite {
            if candidate.start >= *boundary {
                continue;
            }
            match apply(self.catalog, candidate, release) {
                Outcome::Accepted => {
                    trace!(tag = ?candidate.tag, text = candidate.text(), "definite");
                    *boundary = candidate.start;
                    claimed.push(candidate.span());
                }
                Outcome::Rejected => {
                    debug!(
                        tag = ?candidate.tag,
                        text = candidate.text(),
                        "duplicate definite tag, stopping"
                    );
                    break;
                }
            }
        }
        claimed
    }

    /// Phase 2.
    fn fill_possible(
        &self,
        possible: &[Candidate<'_>],
        claimed: &[Range<usize>],
        boundary: usize,
        release: &mut ParsedRelease,
    ) {
        let mut audio = Vec::new();

        for candidate in possible {
            if candidate.start < boundary {
                break;
            }
            if claimed.iter().any(|span| candidate.overlaps(span)) {
                continue;
            }
            if candidate.tag.category() == Category::AudioFragment {
                audio.push(candidate.text().to_uppercase());
                continue;
            }
            match apply(self.catalog, candidate, release) {
                Outcome::Accepted => {
                    trace!(tag = ?candidate.tag, text = candidate.text(), "possible");
                }
                Outcome::Rejected => {
                    debug!(
                        tag = ?candidate.tag,
                        text = candidate.text(),
                        "duplicate possible tag, stopping"
                    );
                    break;
                }
            }
        }

        if !audio.is_empty() {
            audio.reverse();
            release.audio = Some(audio.join(" "));
        }
    }

    /// Phase 3.
    fn extend_left(
        &self,
        work: &str,
        possible: &[Candidate<'_>],
        claimed: &[Range<usize>],
        boundary: &mut usize,
        release: &mut ParsedRelease,
    ) {
        let extending = possible
            .iter()
            .filter(|c| c.tag.category() == Category::Extending);

        for candidate in extending {
            if candidate.start >= *boundary {
                continue;
            }
            if claimed.iter().any(|span| candidate.overlaps(span)) {
                continue;
            }
            if candidate.start == 0 || !is_adjacent(work, candidate.span(), *boundary) {
                break;
            }
            if apply(self.catalog, candidate, release) == Outcome::Rejected {
                debug!(tag = ?candidate.tag, "field already set, stopping extension");
                break;
            }
            trace!(tag = ?candidate.tag, text = candidate.text(), "extended boundary");
            *boundary = candidate.start;
        }
    }
}

/// Returns `true` if only separators lie between `span` and `boundary`.
///
/// A span that straddles the boundary is never adjacent.
#[must_use]
pub fn is_adjacent(work: &str, span: Range<usize>, boundary: usize) -> bool {
    let gap = if span.end <= boundary {
        &work[span.end..boundary]
    } else if span.start >= boundary {
        &work[boundary..span.start]
    } else {
        return false;
    };
    gap.chars().all(is_separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MediaSource, Resolution, VideoCodec};

    fn scan(work: &str) -> (usize, ParsedRelease) {
        let catalog = PatternCatalog::new().unwrap();
        let scanner = BoundaryScanner::new(&catalog, 2025);
        let mut release = ParsedRelease::new(work);
        let boundary = scanner.scan(work, &mut release);
        (boundary, release)
    }

    #[test]
    fn adjacency_through_separators_only() {
        let work = "Movie.2010.-_ 1080p";
        assert!(is_adjacent(work, 6..10, 14));
        assert!(!is_adjacent("Movie.2010.x.1080p", 6..10, 13));
        assert!(is_adjacent("1080p.2010", 6..10, 5));
        assert!(!is_adjacent(work, 6..10, 8));
    }

    #[test]
    fn definite_block_sets_boundary() {
        let work = "Some.Movie.1080p.BluRay.x264-SPARKS";
        let (boundary, r) = scan(work);
        assert_eq!(&work[..boundary], "Some.Movie.");
        assert_eq!(r.resolution, Some(Resolution::FHD1080));
        assert_eq!(r.source, Some(MediaSource::BluRay));
        assert_eq!(r.codec, Some(VideoCodec::H264));
        assert_eq!(r.release_group.as_deref(), Some("SPARKS"));
    }

    #[test]
    fn duplicate_definite_stops_phase_one() {
        let work = "Some.Movie.2020.1080p.720p.BluRay.WEB.x264.H265-GROUP";
        let (boundary, r) = scan(work);
        assert_eq!(&work[boundary..], "H265-GROUP");
        assert_eq!(r.codec, Some(VideoCodec::H265));
        assert!(r.resolution.is_none());
        assert!(r.source.is_none());
        assert!(r.year.is_none());
    }

    #[test]
    fn phase_two_does_not_move_boundary() {
        let work = "The.Matrix.1080p.BluRay.1999.x264-SPARKS";
        let (boundary, r) = scan(work);
        assert_eq!(&work[..boundary], "The.Matrix.");
        assert_eq!(r.year, Some(1999));
    }

    #[test]
    fn phase_two_stops_at_duplicate_field() {
        let work = "Movie.1080p.FRENCH.2016.2015-GRP";
        let (boundary, r) = scan(work);
        assert_eq!(&work[..boundary], "Movie.");
        assert_eq!(r.year, Some(2015));
        assert_eq!(r.release_group.as_deref(), Some("GRP"));
        assert!(r.language.is_none());
    }

    #[test]
    fn phase_two_stop_keeps_collected_audio() {
        let (_, r) = scan("Movie.1080p.DTS.2016.5.1.2015-GRP");
        assert_eq!(r.year, Some(2015));
        assert_eq!(r.audio.as_deref(), Some("5.1"));
    }

    #[test]
    fn phase_two_ignores_title_region() {
        let work = "Godzilla 2.0 1080p TrueHD 7.1 Atmos";
        let (_, r) = scan(work);
        assert_eq!(r.audio.as_deref(), Some("TRUEHD 7.1 ATMOS"));
    }

    #[test]
    fn phase_three_takes_adjacent_tokens() {
        let work = "The.Lord.of.the.Rings.2001.EXTENDED.1080p.BluRay.x265-RARBG";
        let (boundary, r) = scan(work);
        assert_eq!(&work[..boundary], "The.Lord.of.the.Rings.");
        assert_eq!(r.year, Some(2001));
        assert_eq!(r.edition.as_deref(), Some("Extended"));
    }

    #[test]
    fn phase_three_stops_at_non_adjacent_token() {
        let work = "The.Year.2000.Problem.1080p.BluRay.x264-SPARKS";
        let (boundary, r) = scan(work);
        assert_eq!(&work[..boundary], "The.Year.2000.Problem.");
        assert!(r.year.is_none());
    }

    #[test]
    fn phase_three_never_consumes_first_word() {
        let work = "1984.1080p.BluRay.x264-SPARKS";
        let (boundary, r) = scan(work);
        assert_eq!(boundary, 5);
        assert!(r.year.is_none());
    }

    #[test]
    fn phase_three_stops_on_set_field() {
        let work = "Epic.Film.Extended.1080p.THEATRICAL.BluRay.x264-GROUP";
        let (boundary, r) = scan(work);
        assert_eq!(&work[..boundary], "Epic.Film.Extended.");
        assert_eq!(r.edition.as_deref(), Some("Theatrical"));
    }

    #[test]
    fn episode_only_defaults_season_to_one() {
        let (_, r) = scan("Show.E05.720p.HDTV");
        assert_eq!(r.episode, Some(5));
        assert_eq!(r.season, Some(1));

        let (_, r) = scan("Show.S03.E05.720p.HDTV");
        assert_eq!(r.episode, Some(5));
        assert_eq!(r.season, Some(3));
    }

    #[test]
    fn season_pack_is_not_double_counted() {
        let work = "Game.of.Thrones.S08.Complete.1080p.BluRay.x264-ROVERS[rartv]";
        let (boundary, r) = scan(work);
        assert_eq!(&work[..boundary], "Game.of.Thrones.");
        assert_eq!(r.season, Some(8));
        assert!(r.is_complete);
        assert_eq!(r.release_group.as_deref(), Some("ROVERS"));
    }

    #[test]
    fn no_metadata_keeps_whole_string() {
        let (boundary, r) = scan("Some Movie");
        assert_eq!(boundary, "Some Movie".len());
        assert!(!r.has_metadata());
    }
}
