//! Production renderer built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Resample | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | Composite | `image::imageops::overlay` onto a fresh RGBA canvas |
//! | Encode PNG / GIF | `DynamicImage::write_to` (lossless RGBA / indexed) |
//! | Encode JPG | `JpegEncoder::new_with_quality` (alpha dropped) |

use super::backend::{RenderError, Renderer};
use super::calculations::fit_inside;
use crate::requests::ResizeRequest;
use crate::types::{Dimensions, ImageFormat, RenderedAsset};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage, imageops};
use std::io::Cursor;

/// Renderer that letterboxes onto a transparent canvas and encodes in memory.
pub struct RasterRenderer {
    jpeg_quality: u8,
}

impl RasterRenderer {
    /// `jpeg_quality` is clamped to 1–100.
    pub fn new(jpeg_quality: u8) -> Self {
        Self {
            jpeg_quality: jpeg_quality.clamp(1, 100),
        }
    }

    fn encode(&self, canvas: RgbaImage, request: &ResizeRequest) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        let mut cursor = Cursor::new(&mut bytes);
        let encode_err = |source| RenderError::Encode {
            path: request.path.clone(),
            source,
        };

        match request.format {
            ImageFormat::Png => DynamicImage::ImageRgba8(canvas)
                .write_to(&mut cursor, image::ImageFormat::Png)
                .map_err(encode_err)?,
            ImageFormat::Gif => DynamicImage::ImageRgba8(canvas)
                .write_to(&mut cursor, image::ImageFormat::Gif)
                .map_err(encode_err)?,
            ImageFormat::Jpg => {
                // JPEG has no alpha channel; transparent letterbox margins
                // collapse to black, matching what a drawing surface exports
                let rgb = DynamicImage::ImageRgba8(canvas).to_rgb8();
                let encoder = JpegEncoder::new_with_quality(&mut cursor, self.jpeg_quality);
                DynamicImage::ImageRgb8(rgb)
                    .write_with_encoder(encoder)
                    .map_err(encode_err)?;
            }
            ImageFormat::Svg => return Err(RenderError::UnsupportedEncoding(ImageFormat::Svg)),
        }

        Ok(bytes)
    }
}

impl Default for RasterRenderer {
    fn default() -> Self {
        Self::new(90)
    }
}

impl Renderer for RasterRenderer {
    fn render(
        &self,
        source: &DynamicImage,
        request: &ResizeRequest,
    ) -> Result<RenderedAsset, RenderError> {
        let natural = Dimensions::new(source.width(), source.height());
        if natural.width == 0 || natural.height == 0 {
            return Err(RenderError::EmptySource);
        }

        let target = Dimensions::new(request.width, request.height);
        let placement = fit_inside(natural, target);

        // Fresh canvas per request — renders stay independent across threads
        let mut canvas = RgbaImage::new(request.width, request.height);
        let scaled = source.resize_exact(placement.width, placement.height, FilterType::Lanczos3);
        imageops::overlay(&mut canvas, &scaled, placement.x, placement.y);

        let bytes = self.encode(canvas, request)?;
        Ok(RenderedAsset {
            path: request.path.clone(),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba};

    fn solid_red(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([255, 0, 0, 255]),
        ))
    }

    fn request(path: &str, width: u32, height: u32, format: ImageFormat) -> ResizeRequest {
        ResizeRequest {
            path: path.to_string(),
            width,
            height,
            format,
        }
    }

    #[test]
    fn png_output_has_exact_target_dimensions() {
        let renderer = RasterRenderer::default();
        let asset = renderer
            .render(&solid_red(100, 100), &request("icon.png", 32, 32, ImageFormat::Png))
            .unwrap();

        let decoded = image::load_from_memory(&asset.bytes).unwrap();
        assert_eq!(decoded.dimensions(), (32, 32));
        assert_eq!(asset.path, "icon.png");
    }

    #[test]
    fn wide_source_is_centered_with_transparent_margins() {
        // 2:1 source into a 40x40 box → content rows 10..30, margins transparent
        let renderer = RasterRenderer::default();
        let asset = renderer
            .render(&solid_red(200, 100), &request("wide.png", 40, 40, ImageFormat::Png))
            .unwrap();

        let decoded = image::load_from_memory(&asset.bytes).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(20, 5)[3], 0, "top margin not transparent");
        assert_eq!(decoded.get_pixel(20, 35)[3], 0, "bottom margin not transparent");
        let center = decoded.get_pixel(20, 20);
        assert_eq!(center[3], 255);
        assert!(center[0] > 200, "content missing at center");
    }

    #[test]
    fn tall_source_margins_are_symmetric() {
        let renderer = RasterRenderer::default();
        let asset = renderer
            .render(&solid_red(50, 100), &request("tall.png", 60, 60, ImageFormat::Png))
            .unwrap();

        let decoded = image::load_from_memory(&asset.bytes).unwrap().to_rgba8();
        // content is 30x60, margins 15px each side
        assert_eq!(decoded.get_pixel(7, 30)[3], 0);
        assert_eq!(decoded.get_pixel(52, 30)[3], 0);
        assert_eq!(decoded.get_pixel(30, 30)[3], 255);
    }

    #[test]
    fn jpg_output_decodes_with_black_letterbox() {
        let renderer = RasterRenderer::new(85);
        let asset = renderer
            .render(&solid_red(200, 100), &request("photo.jpg", 40, 40, ImageFormat::Jpg))
            .unwrap();

        let decoded = image::load_from_memory(&asset.bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (40, 40));
        let margin = decoded.get_pixel(20, 2);
        assert!(margin[0] < 32 && margin[1] < 32 && margin[2] < 32);
        assert!(decoded.get_pixel(20, 20)[0] > 180);
    }

    #[test]
    fn gif_output_round_trips() {
        let renderer = RasterRenderer::default();
        let asset = renderer
            .render(&solid_red(64, 64), &request("anim.gif", 16, 16, ImageFormat::Gif))
            .unwrap();

        let decoded =
            image::load_from_memory_with_format(&asset.bytes, image::ImageFormat::Gif).unwrap();
        assert_eq!(decoded.dimensions(), (16, 16));
    }

    #[test]
    fn svg_request_is_rejected() {
        let renderer = RasterRenderer::default();
        let result = renderer.render(
            &solid_red(64, 64),
            &request("vector.svg", 16, 16, ImageFormat::Svg),
        );
        assert!(matches!(result, Err(RenderError::UnsupportedEncoding(_))));
    }

    #[test]
    fn upscaling_fills_the_whole_canvas() {
        let renderer = RasterRenderer::default();
        let asset = renderer
            .render(&solid_red(8, 8), &request("big.png", 128, 128, ImageFormat::Png))
            .unwrap();

        let decoded = image::load_from_memory(&asset.bytes).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0)[3], 255);
        assert_eq!(decoded.get_pixel(127, 127)[3], 255);
    }
}
