//! Shared types used across the pipeline stages.
//!
//! These types cross module boundaries (builder → renderer → assembler) and
//! are serialized for the `plan --json` output, so they live here rather than
//! in any one stage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output image format for rendered assets.
///
/// `Svg` is accepted as a selection value but has no raster encoder, so
/// [`extension`](ImageFormat::extension) returns `None` and any request that
/// would need it is rejected before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpg,
    Gif,
    Svg,
}

impl ImageFormat {
    /// File extension for this format, or `None` when no raster encoding exists.
    pub fn extension(self) -> Option<&'static str> {
        match self {
            ImageFormat::Png => Some("png"),
            ImageFormat::Jpg => Some("jpg"),
            ImageFormat::Gif => Some("gif"),
            ImageFormat::Svg => None,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Gif => "gif",
            ImageFormat::Svg => "svg",
        };
        f.write_str(name)
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpg),
            "gif" => Ok(ImageFormat::Gif),
            "svg" => Ok(ImageFormat::Svg),
            other => Err(format!("unknown image format `{other}`")),
        }
    }
}

/// Natural pixel dimensions of a decoded source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// One rendered, encoded output image ready for archiving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAsset {
    /// Path inside the archive, directories implied by `/` separators.
    pub path: String,
    pub bytes: Vec<u8>,
}
