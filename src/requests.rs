//! Request builder — expands a platform selection into concrete resize
//! requests.
//!
//! [`build_requests`] is a pure function of its inputs plus the static
//! [`catalog`](crate::catalog): no pixel data, no I/O, fully unit-testable.
//! Output order is stable — selection order first, catalog declaration order
//! within each tag — so repeated calls with the same inputs produce identical
//! lists (golden-file friendly).
//!
//! Per-tag failures never abort the batch. A tag that cannot be expanded
//! (an SVG output, a format with no extension) lands in
//! [`BuildOutcome::skipped`] and the remaining tags proceed.

use crate::catalog::{Catalog, DensityNaming, PlatformTag, catalog_for};
use crate::types::{Dimensions, ImageFormat};
use serde::Serialize;
use thiserror::Error;

/// One concrete resize target: final archive path plus absolute pixel size.
///
/// The format is carried alongside the path so the encoder never has to
/// re-derive it from a file suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResizeRequest {
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

/// Why a selection entry produced no requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("unknown platform tag `{0}`")]
    UnknownTag(String),
    #[error("no raster extension for {format} output (tag `{tag}`)")]
    UnsupportedOutputFormat {
        tag: PlatformTag,
        format: ImageFormat,
    },
}

/// Result of expanding a selection: requests to render plus skip diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildOutcome {
    pub requests: Vec<ResizeRequest>,
    pub skipped: Vec<SkipReason>,
}

/// Parse raw selection strings into tags, collecting unknown-tag diagnostics.
///
/// Duplicates collapse to their first occurrence so a selection behaves as a
/// set regardless of how the caller assembled it.
pub fn parse_selection(raw: &[String]) -> (Vec<PlatformTag>, Vec<SkipReason>) {
    let mut tags = Vec::new();
    let mut skipped = Vec::new();
    for entry in raw {
        match entry.parse::<PlatformTag>() {
            Ok(tag) => {
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
            Err(_) => skipped.push(SkipReason::UnknownTag(entry.clone())),
        }
    }
    (tags, skipped)
}

/// Expand a platform selection into the full ordered request list.
///
/// `format` applies to every catalog set; the direct-conversion tags
/// (`png`/`jpg`/`gif`/`svg`) carry their own format instead. Relative catalog
/// dimensions are `round(natural * base_ratio * density)`, clamped to at
/// least one pixel.
pub fn build_requests(
    selection: &[PlatformTag],
    file_stem: &str,
    format: ImageFormat,
    natural: Dimensions,
) -> BuildOutcome {
    let mut outcome = BuildOutcome::default();
    let mut seen: Vec<PlatformTag> = Vec::new();

    for &tag in selection {
        if seen.contains(&tag) {
            continue;
        }
        seen.push(tag);

        match catalog_for(tag) {
            Catalog::Direct(direct_format) => {
                let Some(ext) = direct_format.extension() else {
                    outcome.skipped.push(SkipReason::UnsupportedOutputFormat {
                        tag,
                        format: direct_format,
                    });
                    continue;
                };
                outcome.requests.push(ResizeRequest {
                    path: format!("{file_stem}.{ext}"),
                    width: natural.width.max(1),
                    height: natural.height.max(1),
                    format: direct_format,
                });
            }
            Catalog::Fixed { dir, specs } => {
                let Some(ext) = format.extension() else {
                    outcome
                        .skipped
                        .push(SkipReason::UnsupportedOutputFormat { tag, format });
                    continue;
                };
                for spec in specs {
                    outcome.requests.push(ResizeRequest {
                        path: format!("{dir}/{}.{ext}", spec.stem),
                        width: spec.width,
                        height: spec.height,
                        format,
                    });
                }
            }
            Catalog::Squares { dir, sizes } => {
                let Some(ext) = format.extension() else {
                    outcome
                        .skipped
                        .push(SkipReason::UnsupportedOutputFormat { tag, format });
                    continue;
                };
                for &size in sizes {
                    outcome.requests.push(ResizeRequest {
                        path: format!("{dir}/{size}x{size}.{ext}"),
                        width: size,
                        height: size,
                        format,
                    });
                }
            }
            Catalog::Density {
                dir,
                base_ratio,
                naming,
                buckets,
            } => {
                let Some(ext) = format.extension() else {
                    outcome
                        .skipped
                        .push(SkipReason::UnsupportedOutputFormat { tag, format });
                    continue;
                };
                for bucket in buckets {
                    let stem = match naming {
                        DensityNaming::StemSuffix => format!("{file_stem}{}", bucket.label),
                        DensityNaming::BucketLabel => bucket.label.to_string(),
                    };
                    outcome.requests.push(ResizeRequest {
                        path: format!("{dir}/{stem}.{ext}"),
                        width: scaled_dimension(natural.width, base_ratio, bucket.factor),
                        height: scaled_dimension(natural.height, base_ratio, bucket.factor),
                        format,
                    });
                }
            }
        }
    }

    outcome
}

/// `round(natural * ratio * density)`, never truncated to zero.
fn scaled_dimension(natural: u32, base_ratio: f64, density: f64) -> u32 {
    let exact = f64::from(natural) * base_ratio * density;
    (exact.round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions::new(width, height)
    }

    #[test]
    fn empty_selection_yields_empty_list() {
        let outcome = build_requests(&[], "icon", ImageFormat::Png, dims(512, 512));
        assert!(outcome.requests.is_empty());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn favicon_expands_to_21_square_requests() {
        let outcome = build_requests(
            &[PlatformTag::Favicon],
            "icon",
            ImageFormat::Png,
            dims(512, 512),
        );
        assert_eq!(outcome.requests.len(), 21);
        assert_eq!(outcome.requests[0].path, "Favicons/favicon-16x16.png");
        assert_eq!(outcome.requests[20].path, "Favicons/favicon-310x310.png");
        for req in &outcome.requests {
            assert_eq!(req.width, req.height);
            assert_eq!(req.format, ImageFormat::Png);
        }
    }

    #[test]
    fn android_image_densities_from_1200x800() {
        let outcome = build_requests(
            &[PlatformTag::AndroidImage],
            "icon",
            ImageFormat::Png,
            dims(1200, 800),
        );
        let widths: Vec<u32> = outcome.requests.iter().map(|r| r.width).collect();
        let heights: Vec<u32> = outcome.requests.iter().map(|r| r.height).collect();
        assert_eq!(widths, [225, 300, 450, 600, 900, 1200]);
        assert_eq!(heights, [150, 200, 300, 400, 600, 800]);
        assert_eq!(outcome.requests[0].path, "Android Image/ldpi.png");
        assert_eq!(outcome.requests[5].path, "Android Image/xxxhdpi.png");
    }

    #[test]
    fn ios_image_suffixes_file_stem() {
        let outcome = build_requests(
            &[PlatformTag::IosImage],
            "banner",
            ImageFormat::Png,
            dims(900, 600),
        );
        let paths: Vec<&str> = outcome.requests.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "iOS Image/banner@1x.png",
                "iOS Image/banner@2x.png",
                "iOS Image/banner@3x.png",
            ]
        );
        // base = 900/3 = 300, then x1 x2 x3
        let widths: Vec<u32> = outcome.requests.iter().map(|r| r.width).collect();
        assert_eq!(widths, [300, 600, 900]);
    }

    #[test]
    fn density_rounds_half_up_and_clamps_to_one() {
        // 2 * 1/3 = 0.67 → rounds to 1; 1 * 1/4 * 0.75 = 0.19 → clamps to 1
        assert_eq!(scaled_dimension(2, 1.0 / 3.0, 1.0), 1);
        assert_eq!(scaled_dimension(1, 0.25, 0.75), 1);
        assert_eq!(scaled_dimension(1000, 1.0 / 3.0, 1.0), 333);
        assert_eq!(scaled_dimension(1000, 1.0 / 3.0, 2.0), 667);
    }

    #[test]
    fn direct_tags_use_their_own_format() {
        let outcome = build_requests(
            &[PlatformTag::Jpg, PlatformTag::Gif],
            "photo",
            ImageFormat::Png,
            dims(640, 480),
        );
        assert_eq!(outcome.requests.len(), 2);
        assert_eq!(outcome.requests[0].path, "photo.jpg");
        assert_eq!(outcome.requests[0].format, ImageFormat::Jpg);
        assert_eq!(outcome.requests[0].width, 640);
        assert_eq!(outcome.requests[1].path, "photo.gif");
        assert_eq!(outcome.requests[1].format, ImageFormat::Gif);
    }

    #[test]
    fn svg_tag_is_skipped_with_diagnostic() {
        let outcome = build_requests(
            &[PlatformTag::Svg, PlatformTag::Chrome],
            "icon",
            ImageFormat::Png,
            dims(256, 256),
        );
        // Chrome still expands; the SVG tag alone is reported
        assert_eq!(outcome.requests.len(), 3);
        assert_eq!(
            outcome.skipped,
            [SkipReason::UnsupportedOutputFormat {
                tag: PlatformTag::Svg,
                format: ImageFormat::Svg,
            }]
        );
    }

    #[test]
    fn svg_output_format_fails_fast_per_tag() {
        let outcome = build_requests(
            &[PlatformTag::Favicon, PlatformTag::Firefox],
            "icon",
            ImageFormat::Svg,
            dims(256, 256),
        );
        assert!(outcome.requests.is_empty());
        assert_eq!(outcome.skipped.len(), 2);
    }

    #[test]
    fn duplicate_tags_collapse() {
        let once = build_requests(
            &[PlatformTag::Favicon],
            "icon",
            ImageFormat::Png,
            dims(512, 512),
        );
        let twice = build_requests(
            &[PlatformTag::Favicon, PlatformTag::Favicon],
            "icon",
            ImageFormat::Png,
            dims(512, 512),
        );
        assert_eq!(once, twice);
    }

    #[test]
    fn output_is_deterministic() {
        let selection = [
            PlatformTag::Windows,
            PlatformTag::Favicon,
            PlatformTag::AndroidImage,
        ];
        let a = build_requests(&selection, "icon", ImageFormat::Png, dims(1024, 768));
        let b = build_requests(&selection, "icon", ImageFormat::Png, dims(1024, 768));
        assert_eq!(a, b);
    }

    #[test]
    fn selection_order_drives_output_order() {
        let outcome = build_requests(
            &[PlatformTag::Firefox, PlatformTag::Chrome],
            "icon",
            ImageFormat::Png,
            dims(256, 256),
        );
        let paths: Vec<&str> = outcome.requests.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "Firefox/48x48.png",
                "Firefox/96x96.png",
                "Chrome Store/16x16.png",
                "Chrome Store/48x48.png",
                "Chrome Store/128x128.png",
            ]
        );
    }

    #[test]
    fn paths_are_unique_for_every_platform() {
        for tag in PlatformTag::ALL {
            let outcome = build_requests(&[tag], "icon", ImageFormat::Png, dims(1024, 1024));
            let paths: HashSet<_> = outcome.requests.iter().map(|r| &r.path).collect();
            assert_eq!(paths.len(), outcome.requests.len(), "collision in {tag}");
        }
    }

    #[test]
    fn paths_are_unique_across_full_selection() {
        let outcome = build_requests(&PlatformTag::ALL, "icon", ImageFormat::Png, dims(2048, 2048));
        let paths: HashSet<_> = outcome.requests.iter().map(|r| &r.path).collect();
        assert_eq!(paths.len(), outcome.requests.len());
        // Windows + iOS + Android and friends together exceed 80 requests
        assert!(outcome.requests.len() > 80);
    }

    #[test]
    fn jpg_format_changes_every_extension() {
        let outcome = build_requests(
            &[PlatformTag::MacOs],
            "icon",
            ImageFormat::Jpg,
            dims(512, 512),
        );
        assert!(outcome.requests.iter().all(|r| r.path.ends_with(".jpg")));
        assert!(
            outcome
                .requests
                .iter()
                .all(|r| r.format == ImageFormat::Jpg)
        );
    }

    #[test]
    fn parse_selection_reports_unknown_tags() {
        let raw = vec!["favicon".to_string(), "999".to_string()];
        let (tags, skipped) = parse_selection(&raw);
        assert_eq!(tags, [PlatformTag::Favicon]);
        assert_eq!(skipped, [SkipReason::UnknownTag("999".to_string())]);
    }

    #[test]
    fn parse_selection_dedupes_preserving_order() {
        let raw = vec![
            "chrome".to_string(),
            "favicon".to_string(),
            "chrome".to_string(),
        ];
        let (tags, skipped) = parse_selection(&raw);
        assert_eq!(tags, [PlatformTag::Chrome, PlatformTag::Favicon]);
        assert!(skipped.is_empty());
    }

    #[test]
    fn requests_serialize_for_plan_output() {
        let outcome = build_requests(
            &[PlatformTag::Firefox],
            "icon",
            ImageFormat::Png,
            dims(128, 128),
        );
        let json = serde_json::to_string(&outcome.requests).unwrap();
        assert!(json.contains("\"Firefox/48x48.png\""));
        assert!(json.contains("\"format\":\"png\""));
    }
}
