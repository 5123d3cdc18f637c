//! Zip assembly for rendered assets.
//!
//! Every asset is written at its archive path verbatim; directory structure
//! is implied by `/` prefixes, so one platform family lands in one folder.
//! An empty asset list is legitimate (a selection can resolve to nothing) and
//! produces a valid near-empty archive rather than an error.

use crate::types::RenderedAsset;
use std::io::{Cursor, Write};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("zip write failed: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Archive file name from the base label plus an optional user suffix.
///
/// `("Iconsmith", Some("logo"))` → `Iconsmith - logo.zip`.
pub fn archive_name(base_label: &str, suffix: Option<&str>) -> String {
    match suffix.map(str::trim) {
        Some(s) if !s.is_empty() => format!("{base_label} - {s}.zip"),
        _ => format!("{base_label}.zip"),
    }
}

/// Serialize all assets into one deflate-compressed zip blob.
pub fn assemble(assets: &[RenderedAsset]) -> Result<Vec<u8>, ArchiveError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for asset in assets {
        writer.start_file(asset.path.as_str(), options)?;
        writer.write_all(&asset.bytes)?;
    }

    Ok(writer.finish()?.into_inner())
}
