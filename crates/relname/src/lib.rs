//! # Relname
//!
//! Release-name parsing and title matching in one import.
//!
//! ```rust
//! use relname::{DEFAULT_MATCH_THRESHOLD, match_titles, parse};
//!
//! let release = parse("The.Lord.of.the.Rings.2001.EXTENDED.1080p.BluRay.x265-RARBG");
//! assert_eq!(release.title, "The Lord of the Rings");
//! assert_eq!(release.edition.as_deref(), Some("Extended"));
//!
//! assert!(match_titles(&release.title, "Lord of the Rings", DEFAULT_MATCH_THRESHOLD));
//! ```

pub use relname_core::*;
pub use relname_match::{
    DEFAULT_MATCH_THRESHOLD, STOPWORDS, match_titles, normalize_title, similarity,
};
