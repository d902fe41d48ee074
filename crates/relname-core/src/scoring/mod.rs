pub mod confidence;

pub use confidence::{
    MINOR_FIELD_WEIGHT, RELEASE_GROUP_WEIGHT, RESOLUTION_WEIGHT, SOURCE_WEIGHT, YEAR_SEASON_WEIGHT,
    score,
};
