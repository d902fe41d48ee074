pub mod extract;
pub mod finish;
pub mod hints;
pub mod patterns;
pub mod prepass;
pub mod scanner;
pub mod unified;

pub use extract::Outcome;
pub use hints::Tracker;
pub use patterns::{Category, PatternCatalog, Tag};
pub use scanner::BoundaryScanner;
pub use unified::{Parser, ParserConfig, parse, parse_with_hints};
