//! Renderer trait and shared error type.
//!
//! The [`Renderer`] trait is the seam between the pipeline (which decides
//! what to render and in what order) and pixel work. The production
//! implementation is [`RasterRenderer`](super::raster::RasterRenderer); tests
//! drive the pipeline with the recording mock below.

use crate::requests::ResizeRequest;
use crate::types::{ImageFormat, RenderedAsset};
use image::DynamicImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("source image has zero dimensions")]
    EmptySource,
    #[error("no raster encoder for {0} output")]
    UnsupportedEncoding(ImageFormat),
    #[error("encoding {path} failed: {source}")]
    Encode {
        path: String,
        source: image::ImageError,
    },
    #[error("render cancelled")]
    Cancelled,
}

/// Trait for scaled-render backends.
///
/// `Sync` because the pipeline fans renders out with rayon; implementations
/// must not share a mutable drawing surface between calls.
pub trait Renderer: Sync {
    /// Render the source into the request's target box and encode it.
    fn render(
        &self,
        source: &DynamicImage,
        request: &ResizeRequest,
    ) -> Result<RenderedAsset, RenderError>;
}
