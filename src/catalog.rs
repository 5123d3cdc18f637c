//! Static size catalog for every supported platform asset set.
//!
//! The catalog is pure data: one table per platform tag, fixed at compile
//! time and never mutated. Two entry styles exist:
//!
//! - **Absolute**: explicit pixel sizes per named file (favicons, iOS icons,
//!   Windows tiles, macOS icons). Dimensions are design constants taken from
//!   each platform's published asset specification.
//! - **Density-scaled**: a single base size expressed as a fraction of the
//!   source image's natural size, multiplied by a per-bucket density factor
//!   (iOS `@1x/@2x/@3x` at 1/3 natural, Android `ldpi…xxxhdpi` at 1/4 natural).
//!
//! Square icon families (Android icons, Chrome, Firefox) share one expansion
//! scheme: a flat size list where each entry becomes `{size}x{size}`.
//!
//! The [`requests`](crate::requests) module resolves tags against this catalog;
//! nothing here touches pixel data.

use crate::types::ImageFormat;
use std::fmt;
use std::str::FromStr;

/// Identifier selecting which catalog (or direct conversion) to expand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformTag {
    /// Direct conversion to PNG at natural size.
    Png,
    /// Direct conversion to JPG at natural size.
    Jpg,
    /// Direct conversion to GIF at natural size.
    Gif,
    /// SVG selection — accepted, but no raster output exists for it.
    Svg,
    IosIcon,
    IosImage,
    AndroidIcon,
    AndroidImage,
    Chrome,
    Windows,
    Firefox,
    MacOs,
    Favicon,
}

impl PlatformTag {
    /// All tags, in the order `platforms` lists them.
    pub const ALL: [PlatformTag; 13] = [
        PlatformTag::Png,
        PlatformTag::Jpg,
        PlatformTag::Gif,
        PlatformTag::Svg,
        PlatformTag::IosIcon,
        PlatformTag::IosImage,
        PlatformTag::AndroidIcon,
        PlatformTag::AndroidImage,
        PlatformTag::Chrome,
        PlatformTag::Windows,
        PlatformTag::Firefox,
        PlatformTag::MacOs,
        PlatformTag::Favicon,
    ];

    /// Canonical CLI name.
    pub fn name(self) -> &'static str {
        match self {
            PlatformTag::Png => "png",
            PlatformTag::Jpg => "jpg",
            PlatformTag::Gif => "gif",
            PlatformTag::Svg => "svg",
            PlatformTag::IosIcon => "ios-icon",
            PlatformTag::IosImage => "ios-image",
            PlatformTag::AndroidIcon => "android-icon",
            PlatformTag::AndroidImage => "android-image",
            PlatformTag::Chrome => "chrome",
            PlatformTag::Windows => "windows",
            PlatformTag::Firefox => "firefox",
            PlatformTag::MacOs => "macos",
            PlatformTag::Favicon => "favicon",
        }
    }

    /// One-line description for the `platforms` listing.
    pub fn describe(self) -> &'static str {
        match self {
            PlatformTag::Png => "single PNG at natural size",
            PlatformTag::Jpg => "single JPG at natural size",
            PlatformTag::Gif => "single GIF at natural size",
            PlatformTag::Svg => "SVG passthrough (no raster output)",
            PlatformTag::IosIcon => "iOS app icon set (incl. Apple Watch)",
            PlatformTag::IosImage => "iOS universal image @1x/@2x/@3x",
            PlatformTag::AndroidIcon => "Android launcher icons",
            PlatformTag::AndroidImage => "Android density buckets ldpi-xxxhdpi",
            PlatformTag::Chrome => "Chrome Web Store icons",
            PlatformTag::Windows => "Windows app tiles and logos",
            PlatformTag::Firefox => "Firefox add-on icons",
            PlatformTag::MacOs => "macOS app icon set",
            PlatformTag::Favicon => "website favicons",
        }
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlatformTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace('_', "-");
        PlatformTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.name() == normalized)
            .ok_or_else(|| format!("unknown platform tag `{s}`"))
    }
}

/// One fixed-size named asset within a platform set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    /// File stem without extension, e.g. `Icon-20@2x`.
    pub stem: &'static str,
    pub width: u32,
    pub height: u32,
}

const fn icon(stem: &'static str, size: u32) -> IconSpec {
    IconSpec {
        stem,
        width: size,
        height: size,
    }
}

/// One member of a density-bucketed family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityBucket {
    /// `@2x`-style suffix or `hdpi`-style bucket name, per [`DensityNaming`].
    pub label: &'static str,
    pub factor: f64,
}

/// How density bucket file stems are formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityNaming {
    /// `{file_stem}{label}`, e.g. `banner@2x`.
    StemSuffix,
    /// The label alone, e.g. `xhdpi`.
    BucketLabel,
}

/// Catalog resolution for a platform tag.
#[derive(Debug, Clone, Copy)]
pub enum Catalog {
    /// One request at natural size, encoded as the given format.
    Direct(ImageFormat),
    /// Explicitly named fixed-size assets under `dir`.
    Fixed {
        dir: &'static str,
        specs: &'static [IconSpec],
    },
    /// Square family expanded from a flat size list, stems `{size}x{size}`.
    Squares {
        dir: &'static str,
        sizes: &'static [u32],
    },
    /// Density family relative to the source's natural size.
    Density {
        dir: &'static str,
        base_ratio: f64,
        naming: DensityNaming,
        buckets: &'static [DensityBucket],
    },
}

const FAVICON_SPECS: &[IconSpec] = &[
    icon("favicon-16x16", 16),
    icon("favicon-24x24", 24),
    icon("favicon-32x32", 32),
    icon("favicon-48x48", 48),
    icon("favicon-57x57", 57),
    icon("favicon-60x60", 60),
    icon("favicon-64x64", 64),
    icon("favicon-70x70", 70),
    icon("favicon-72x72", 72),
    icon("favicon-76x76", 76),
    icon("favicon-96x96", 96),
    icon("favicon-114x114", 114),
    icon("favicon-120x120", 120),
    icon("favicon-128x128", 128),
    icon("favicon-144x144", 144),
    icon("favicon-150x150", 150),
    icon("favicon-152x152", 152),
    icon("favicon-180x180", 180),
    icon("favicon-192x192", 192),
    icon("favicon-196x196", 196),
    icon("favicon-310x310", 310),
];

const MACOS_SPECS: &[IconSpec] = &[
    icon("icon-16x16", 16),
    icon("icon-32x32", 32),
    icon("icon-64x64", 64),
    icon("icon-128x128", 128),
    icon("icon-256x256", 256),
    icon("icon-512x512", 512),
];

const IOS_ICON_SPECS: &[IconSpec] = &[
    icon("Icon-20", 20),
    icon("Icon-20@2x", 40),
    icon("Icon-20@3x", 60),
    icon("Icon-29", 29),
    icon("Icon-29@2x", 58),
    icon("Icon-29@3x", 87),
    icon("Icon-40", 40),
    icon("Icon-40@2x", 80),
    icon("Icon-40@3x", 120),
    icon("Icon-50", 50),
    icon("Icon-50@2x", 100),
    icon("Icon-57", 57),
    icon("Icon-57@2x", 114),
    icon("Icon-60@2x", 120),
    icon("Icon-60@3x", 180),
    icon("Icon-72", 72),
    icon("Icon-72@2x", 144),
    icon("Icon-76", 76),
    icon("Icon-76@2x", 152),
    icon("Icon-83.5@2x", 167),
    icon("iTunesArtwork-1024", 1024),
    icon("AppleWatch-Icon-24@2x", 48),
    icon("AppleWatch-Icon-27.5@2x", 55),
    icon("AppleWatch-Icon-29@2x", 58),
    icon("AppleWatch-Icon-29@3x", 87),
    icon("AppleWatch-Icon-40@2x", 80),
    icon("AppleWatch-Icon-44@2x", 88),
    icon("AppleWatch-Icon-86@2x", 172),
    icon("AppleWatch-Icon-98@2x", 196),
];

const WINDOWS_SPECS: &[IconSpec] = &[
    icon("Square44x44Logo.targetsize-16", 16),
    icon("Square44x44Logo.targetsize-20", 20),
    icon("Square44x44Logo.targetsize-24", 24),
    icon("Square44x44Logo.targetsize-30", 30),
    icon("Square44x44Logo.targetsize-32", 32),
    icon("Square44x44Logo.targetsize-36", 36),
    icon("Square44x44Logo.targetsize-40", 40),
    icon("Square44x44Logo.targetsize-48", 48),
    icon("Square44x44Logo.targetsize-60", 60),
    icon("Square44x44Logo.targetsize-64", 64),
    icon("Square44x44Logo.targetsize-72", 72),
    icon("Square44x44Logo.targetsize-80", 80),
    icon("Square44x44Logo.targetsize-96", 96),
    icon("Square44x44Logo.targetsize-256", 256),
    icon("Square71x71Logo.scale-100", 71),
    icon("Square71x71Logo.scale-125", 89),
    icon("Square71x71Logo.scale-150", 107),
    icon("Square71x71Logo.scale-200", 142),
    icon("Square71x71Logo.scale-400", 284),
    icon("Square150x150Logo.scale-100", 150),
    icon("Square150x150Logo.scale-125", 188),
    icon("Square150x150Logo.scale-150", 225),
    icon("Square150x150Logo.scale-200", 300),
    icon("Square150x150Logo.scale-400", 600),
    icon("Square310x310Logo.scale-100", 310),
    icon("Square310x310Logo.scale-125", 388),
    icon("Square310x310Logo.scale-150", 465),
    icon("Square310x310Logo.scale-200", 620),
    icon("Square310x310Logo.scale-400", 1240),
    icon("StoreLogo.scale-71", 71),
    icon("StoreLogo.scale-150", 150),
    icon("StoreLogo.scale-300", 300),
];

const ANDROID_ICON_SIZES: &[u32] = &[48, 72, 96, 144, 192];
const CHROME_SIZES: &[u32] = &[16, 48, 128];
const FIREFOX_SIZES: &[u32] = &[48, 96];

const IOS_IMAGE_BUCKETS: &[DensityBucket] = &[
    DensityBucket {
        label: "@1x",
        factor: 1.0,
    },
    DensityBucket {
        label: "@2x",
        factor: 2.0,
    },
    DensityBucket {
        label: "@3x",
        factor: 3.0,
    },
];

const ANDROID_IMAGE_BUCKETS: &[DensityBucket] = &[
    DensityBucket {
        label: "ldpi",
        factor: 0.75,
    },
    DensityBucket {
        label: "mdpi",
        factor: 1.0,
    },
    DensityBucket {
        label: "hdpi",
        factor: 1.5,
    },
    DensityBucket {
        label: "xhdpi",
        factor: 2.0,
    },
    DensityBucket {
        label: "xxhdpi",
        factor: 3.0,
    },
    DensityBucket {
        label: "xxxhdpi",
        factor: 4.0,
    },
];

/// Resolve a platform tag to its catalog.
pub fn catalog_for(tag: PlatformTag) -> Catalog {
    match tag {
        PlatformTag::Png => Catalog::Direct(ImageFormat::Png),
        PlatformTag::Jpg => Catalog::Direct(ImageFormat::Jpg),
        PlatformTag::Gif => Catalog::Direct(ImageFormat::Gif),
        PlatformTag::Svg => Catalog::Direct(ImageFormat::Svg),
        PlatformTag::Favicon => Catalog::Fixed {
            dir: "Favicons",
            specs: FAVICON_SPECS,
        },
        PlatformTag::MacOs => Catalog::Fixed {
            dir: "MacOS.appiconset",
            specs: MACOS_SPECS,
        },
        PlatformTag::IosIcon => Catalog::Fixed {
            dir: "AppIcon.appiconset",
            specs: IOS_ICON_SPECS,
        },
        PlatformTag::Windows => Catalog::Fixed {
            dir: "Windows",
            specs: WINDOWS_SPECS,
        },
        PlatformTag::AndroidIcon => Catalog::Squares {
            dir: "Android Icons",
            sizes: ANDROID_ICON_SIZES,
        },
        PlatformTag::Chrome => Catalog::Squares {
            dir: "Chrome Store",
            sizes: CHROME_SIZES,
        },
        PlatformTag::Firefox => Catalog::Squares {
            dir: "Firefox",
            sizes: FIREFOX_SIZES,
        },
        PlatformTag::IosImage => Catalog::Density {
            dir: "iOS Image",
            base_ratio: 1.0 / 3.0,
            naming: DensityNaming::StemSuffix,
            buckets: IOS_IMAGE_BUCKETS,
        },
        PlatformTag::AndroidImage => Catalog::Density {
            dir: "Android Image",
            base_ratio: 1.0 / 4.0,
            naming: DensityNaming::BucketLabel,
            buckets: ANDROID_IMAGE_BUCKETS,
        },
    }
}

/// Number of assets a tag expands to (density families have a fixed bucket count).
pub fn asset_count(tag: PlatformTag) -> usize {
    match catalog_for(tag) {
        Catalog::Direct(format) => usize::from(format.extension().is_some()),
        Catalog::Fixed { specs, .. } => specs.len(),
        Catalog::Squares { sizes, .. } => sizes.len(),
        Catalog::Density { buckets, .. } => buckets.len(),
    }
}
