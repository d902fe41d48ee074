//! # Parser Interface
//!
//! Runs the full pipeline over one release name: pre-extraction, the
//! three-phase boundary scan, confidence scoring, and title/unparsed
//! finishing. Tracker hints are an optional post-pass.

use std::sync::{Arc, LazyLock};

use chrono::{Datelike, Utc};
use tracing::debug;

use crate::parser::finish;
use crate::parser::hints::{self, Tracker};
use crate::parser::patterns::PatternCatalog;
use crate::parser::prepass::pre_extract;
use crate::parser::scanner::BoundaryScanner;
use crate::scoring;
use crate::types::ParsedRelease;

static DEFAULT_PARSER: LazyLock<Parser> = LazyLock::new(|| Parser::new(ParserConfig::default()));

/// Configuration for the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    /// Latest plausible release year. `None` uses the current calendar year.
    pub reference_year: Option<u16>,
    /// When set, a REPACK tag clears PROPER.
    pub repack_supersedes_proper: bool,
    /// Confidence multiplier applied for strict-naming trackers.
    pub hint_confidence_boost: f32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            reference_year: None,
            repack_supersedes_proper: false,
            hint_confidence_boost: 1.1,
        }
    }
}

impl ParserConfig {
    /// Create a new parser configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the upper bound of the plausible year range.
    pub fn with_reference_year(mut self, year: u16) -> Self {
        self.reference_year = Some(year);
        self
    }

    /// Let REPACK override PROPER.
    pub fn with_repack_supersedes_proper(mut self, enabled: bool) -> Self {
        self.repack_supersedes_proper = enabled;
        self
    }

    /// Set the strict-naming confidence boost.
    pub fn with_hint_confidence_boost(mut self, boost: f32) -> Self {
        self.hint_confidence_boost = boost.clamp(1.0, 2.0);
        self
    }

    /// Upper bound for year candidates.
    pub fn latest_year(&self) -> u16 {
        self.reference_year
            .unwrap_or_else(|| u16::try_from(Utc::now().year()).unwrap_or(u16::MAX))
    }
}

/// Release-name parser. Cheap to clone; the pattern catalog is shared.
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
    catalog: Arc<PatternCatalog>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl Parser {
    /// Create a parser over the process-wide pattern catalog.
    pub fn new(config: ParserConfig) -> Self {
        Self::with_catalog(config, PatternCatalog::shared())
    }

    /// Create a parser over a specific catalog.
    pub fn with_catalog(config: ParserConfig, catalog: Arc<PatternCatalog>) -> Self {
        Self { config, catalog }
    }

    /// Parse a release name. Never fails; an unrecognizable name yields a
    /// record with only the title set and zero confidence.
    ///
    /// # Examples
    /// ```
    /// use relname_core::parser::{Parser, ParserConfig};
    /// use relname_core::Resolution;
    ///
    /// let parser = Parser::new(ParserConfig::new().with_reference_year(2025));
    /// let release = parser.parse("The.Matrix.1999.1080p.BluRay.x264-SPARKS");
    ///
    /// assert_eq!(release.title, "The Matrix");
    /// assert_eq!(release.year, Some(1999));
    /// assert_eq!(release.resolution, Some(Resolution::FHD1080));
    /// assert_eq!(release.release_group.as_deref(), Some("SPARKS"));
    /// ```
    pub fn parse(&self, name: &str) -> ParsedRelease {
        let latest_year = self.config.latest_year();
        let mut release = ParsedRelease::new(name);

        let work = pre_extract(&self.catalog, name.trim(), latest_year, &mut release);
        let boundary = BoundaryScanner::new(&self.catalog, latest_year).scan(&work, &mut release);

        if self.config.repack_supersedes_proper && release.is_repack {
            release.is_proper = false;
        }

        release.confidence = scoring::score(&release);
        release.title = finish::title(&self.catalog, &work, boundary);
        release.unparsed = finish::unparsed(&self.catalog, &work, boundary, latest_year);

        debug!(%release, "parsed");
        release
    }

    /// Parse, then apply the naming conventions of `tracker`.
    ///
    /// Unknown tracker identifiers leave the parse unadjusted.
    pub fn parse_with_hints(&self, name: &str, tracker: &str) -> ParsedRelease {
        let mut release = self.parse(name);
        match tracker.parse::<Tracker>() {
            Ok(tracker) => hints::adjust(
                tracker,
                &self.catalog,
                name,
                self.config.latest_year(),
                self.config.hint_confidence_boost,
                &mut release,
            ),
            Err(err) => debug!(%err, "no tracker hint applied"),
        }
        release
    }

    /// Get the parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}

/// Parse a release name with default settings.
pub fn parse(name: &str) -> ParsedRelease {
    DEFAULT_PARSER.parse(name)
}

/// Parse a release name with default settings and a tracker hint.
pub fn parse_with_hints(name: &str, tracker: &str) -> ParsedRelease {
    DEFAULT_PARSER.parse_with_hints(name, tracker)
}
