//! Weighted confidence score for a parsed release.
//!
//! Year-or-season and resolution are the strongest signals that a name was
//! split correctly; the minor fields each add a single point.

use crate::types::ParsedRelease;

pub const YEAR_SEASON_WEIGHT: u8 = 40;
pub const RESOLUTION_WEIGHT: u8 = 20;
pub const SOURCE_WEIGHT: u8 = 10;
pub const RELEASE_GROUP_WEIGHT: u8 = 10;
pub const MINOR_FIELD_WEIGHT: u8 = 1;

const MAX_CONFIDENCE: u32 = 100;

/// Sums the weights of the populated fields, capped at 100.
#[must_use]
pub fn score(release: &ParsedRelease) -> u8 {
    let weighted = [
        (
            release.year.is_some() || release.season.is_some(),
            YEAR_SEASON_WEIGHT,
        ),
        (release.resolution.is_some(), RESOLUTION_WEIGHT),
        (release.source.is_some(), SOURCE_WEIGHT),
        (release.release_group.is_some(), RELEASE_GROUP_WEIGHT),
        (release.episode.is_some(), MINOR_FIELD_WEIGHT),
        (release.codec.is_some(), MINOR_FIELD_WEIGHT),
        (release.audio.is_some(), MINOR_FIELD_WEIGHT),
        (release.container.is_some(), MINOR_FIELD_WEIGHT),
        (release.language.is_some(), MINOR_FIELD_WEIGHT),
        (release.edition.is_some(), MINOR_FIELD_WEIGHT),
        (release.is_complete, MINOR_FIELD_WEIGHT),
        (release.is_proper, MINOR_FIELD_WEIGHT),
        (release.is_repack, MINOR_FIELD_WEIGHT),
        (release.is_hardcoded, MINOR_FIELD_WEIGHT),
    ];

    let total: u32 = weighted
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, weight)| u32::from(*weight))
        .sum();

    // Cannot truncate: capped at 100.
    total.min(MAX_CONFIDENCE) as u8
}
