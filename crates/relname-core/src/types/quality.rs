use std::fmt;

use serde::{Deserialize, Serialize};

/// Video resolution, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resolution {
    /// 360p
    #[serde(rename = "360p")]
    LD360,
    /// 480p, standard definition
    #[serde(rename = "480p")]
    SD480,
    /// 720p, high definition
    #[serde(rename = "720p")]
    HD720,
    /// 1080p, Full HD
    #[serde(rename = "1080p")]
    FHD1080,
    /// 2160p, also written 4K
    #[serde(rename = "2160p")]
    UHD2160,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LD360 => write!(f, "360p"),
            Self::SD480 => write!(f, "480p"),
            Self::HD720 => write!(f, "720p"),
            Self::FHD1080 => write!(f, "1080p"),
            Self::UHD2160 => write!(f, "2160p"),
        }
    }
}

/// Video codec, with encoder names folded onto the format they produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoCodec {
    H264,
    H265,
    MPEG2,
    MPEG4,
}

impl fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::H264 => write!(f, "H264"),
            Self::H265 => write!(f, "H265"),
            Self::MPEG2 => write!(f, "MPEG2"),
            Self::MPEG4 => write!(f, "MPEG4"),
        }
    }
}

/// Media source the release was captured or ripped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaSource {
    #[serde(rename = "BluRay")]
    BluRay,
    #[serde(rename = "WEB-DL")]
    WebDL,
    #[serde(rename = "WEBRip")]
    WebRip,
    #[serde(rename = "HDTV")]
    HDTV,
    #[serde(rename = "CAM")]
    Cam,
    /// Telecine.
    #[serde(rename = "TC")]
    Telecine,
    #[serde(rename = "DVD")]
    DVD,
    #[serde(rename = "BRRIP")]
    BRRip,
    #[serde(rename = "BDRIP")]
    BDRip,
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BluRay => write!(f, "BluRay"),
            Self::WebDL => write!(f, "WEB-DL"),
            Self::WebRip => write!(f, "WEBRip"),
            Self::HDTV => write!(f, "HDTV"),
            Self::Cam => write!(f, "CAM"),
            Self::Telecine => write!(f, "TC"),
            Self::DVD => write!(f, "DVD"),
            Self::BRRip => write!(f, "BRRIP"),
            Self::BDRip => write!(f, "BDRIP"),
        }
    }
}
