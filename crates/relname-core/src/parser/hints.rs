//! # Tracker Hints
//!
//! Post-pass that re-reads ambiguous fields using the naming conventions of
//! a known tracker. Unknown trackers leave the release unchanged.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::RelnameError;
use crate::parser::patterns::{PatternCatalog, is_plausible_year};
use crate::scoring;
use crate::types::ParsedRelease;

/// Trackers with a naming convention worth special handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tracker {
    /// BroadcasTheNet: season packs named "S01 Complete".
    Btn,
    /// PassThePopcorn: collections carry a year range.
    Ptp,
    /// HDBits: strictly standardized names.
    Hdb,
}

impl Tracker {
    /// Identifiers accepted by [`Tracker::from_str`], lowercase.
    #[must_use]
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Btn => &["btn", "broadcasthenet"],
            Self::Ptp => &["ptp", "passthepopcorn"],
            Self::Hdb => &["hdb", "hdbits"],
        }
    }
}

impl FromStr for Tracker {
    type Err = RelnameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase();
        [Self::Btn, Self::Ptp, Self::Hdb]
            .into_iter()
            .find(|t| t.aliases().contains(&id.as_str()))
            .ok_or_else(|| RelnameError::UnknownTracker {
                tracker: s.to_string(),
            })
    }
}

impl fmt::Display for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Btn => write!(f, "BTN"),
            Self::Ptp => write!(f, "PTP"),
            Self::Hdb => write!(f, "HDB"),
        }
    }
}

/// Applies `tracker`'s conventions to `release`, which was parsed from `name`.
pub fn adjust(
    tracker: Tracker,
    catalog: &PatternCatalog,
    name: &str,
    latest_year: u16,
    boost: f32,
    release: &mut ParsedRelease,
) {
    match tracker {
        Tracker::Btn => {
            let season = catalog
                .re_season_pack
                .captures(name)
                .and_then(|caps| caps[1].parse::<u32>().ok());
            if let Some(season) = season {
                debug!(%tracker, season, "season pack");
                release.season = Some(season);
                release.is_complete = true;
                release.confidence = scoring::score(release);
            }
        }
        Tracker::Ptp => {
            let first_year = catalog
                .re_year_range
                .captures(name)
                .and_then(|caps| caps[1].parse::<u16>().ok())
                .filter(|&y| is_plausible_year(y, latest_year));
            if let Some(year) = first_year {
                debug!(%tracker, year, "year range");
                release.year = Some(year);
                release.confidence = scoring::score(release);
            }
        }
        Tracker::Hdb => {
            let boosted = (f32::from(release.confidence) * boost).round().min(100.0);
            // Cannot truncate: clamped to [0, 100].
            release.confidence = boosted.max(0.0) as u8;
        }
    }
}
