//! Pure placement math for fit-inside-and-center scaling.
//!
//! All functions here are pure and testable without any I/O or images.

use crate::types::Dimensions;

/// Where the scaled source lands on the target canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Scaled content width, ≤ target width.
    pub width: u32,
    /// Scaled content height, ≤ target height.
    pub height: u32,
    /// Left margin in pixels.
    pub x: i64,
    /// Top margin in pixels.
    pub y: i64,
}

/// Fit the source inside the target box, preserving aspect ratio, centered.
///
/// One scale factor applies to both axes: `min(tw/nw, th/nh)`. The content
/// exactly fills the tighter axis and is letterboxed on the other, with the
/// margin split evenly. Never crops, never exceeds the target box.
pub fn fit_inside(natural: Dimensions, target: Dimensions) -> Placement {
    let scale = f64::min(
        f64::from(target.width) / f64::from(natural.width),
        f64::from(target.height) / f64::from(natural.height),
    );
    let width = ((f64::from(natural.width) * scale).round() as u32)
        .clamp(1, target.width);
    let height = ((f64::from(natural.height) * scale).round() as u32)
        .clamp(1, target.height);
    Placement {
        width,
        height,
        x: (i64::from(target.width) - i64::from(width)) / 2,
        y: (i64::from(target.height) - i64::from(height)) / 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(nw: u32, nh: u32, tw: u32, th: u32) -> Placement {
        fit_inside(Dimensions::new(nw, nh), Dimensions::new(tw, th))
    }

    #[test]
    fn same_aspect_fills_target_exactly() {
        let p = fit(1024, 1024, 64, 64);
        assert_eq!((p.width, p.height, p.x, p.y), (64, 64, 0, 0));
    }

    #[test]
    fn landscape_into_square_letterboxes_vertically() {
        // 2:1 into 100x100 → 100x50 content, 25px margins top and bottom
        let p = fit(800, 400, 100, 100);
        assert_eq!((p.width, p.height), (100, 50));
        assert_eq!((p.x, p.y), (0, 25));
    }

    #[test]
    fn portrait_into_square_letterboxes_horizontally() {
        let p = fit(400, 800, 100, 100);
        assert_eq!((p.width, p.height), (50, 100));
        assert_eq!((p.x, p.y), (25, 0));
    }

    #[test]
    fn margins_are_symmetric() {
        let p = fit(300, 100, 90, 90);
        assert_eq!(p.width, 90);
        assert_eq!(p.height, 30);
        let bottom = i64::from(90u32) - p.y - i64::from(p.height);
        assert_eq!(p.y, bottom);
    }

    #[test]
    fn upscales_small_sources() {
        let p = fit(10, 10, 256, 256);
        assert_eq!((p.width, p.height, p.x, p.y), (256, 256, 0, 0));
    }

    #[test]
    fn scale_is_min_of_both_axis_ratios() {
        // tw/nw = 0.5, th/nh = 0.25 → scale 0.25
        let p = fit(200, 400, 100, 100);
        assert_eq!((p.width, p.height), (50, 100));
    }

    #[test]
    fn extreme_aspect_never_rounds_to_zero() {
        // 1000:1 into 16x16 → height would round to 0 without the clamp
        let p = fit(1000, 1, 16, 16);
        assert_eq!(p.width, 16);
        assert_eq!(p.height, 1);
    }

    #[test]
    fn content_never_exceeds_target() {
        for (nw, nh) in [(1, 1), (3, 7), (1920, 1080), (33, 100)] {
            for (tw, th) in [(16, 16), (71, 71), (310, 150)] {
                let p = fit(nw, nh, tw, th);
                assert!(p.width <= tw && p.height <= th);
                assert!(p.x >= 0 && p.y >= 0);
            }
        }
    }
}
