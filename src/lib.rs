//! # Iconsmith
//!
//! Generate a complete, correctly-named, correctly-sized set of platform
//! image assets from a single source image — iOS and macOS icon sets,
//! Android launcher icons and density buckets, Windows tiles, Chrome and
//! Firefox extension icons, favicons — bundled into one zip archive.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! ```text
//! 1. Catalog    platform tags → fixed size tables        (pure data)
//! 2. Build      selection + natural size → request list  (pure function)
//! 3. Render     one task per request, fit-inside-center  (parallel)
//! 4. Assemble   rendered assets → zip blob               (single join)
//! ```
//!
//! The request builder never touches pixels and the renderer never decides
//! paths or sizes, so stages 1–2 are unit-testable with no rendering
//! environment and stage 3 is testable through a mock renderer.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Static size tables per platform tag, fixed at compile time |
//! | [`requests`] | Expands a selection into an ordered, deterministic request list |
//! | [`render`] | Fit-inside-and-center scaling and in-memory encoding |
//! | [`pipeline`] | Parallel fan-out, settle-all join, partial-success reporting |
//! | [`archive`] | Zip assembly with directory structure implied by paths |
//! | [`config`] | Optional `iconsmith.toml`: archive label, JPEG quality, thread cap |
//! | [`output`] | CLI formatting — pure `format_*` functions plus print wrappers |
//! | [`types`] | Shared types: `ImageFormat`, `Dimensions`, `RenderedAsset` |
//!
//! # Design Decisions
//!
//! ## Formats Travel With Requests
//!
//! Each [`requests::ResizeRequest`] carries its `ImageFormat` end to end.
//! The encoder never sniffs a file suffix to pick a codec, so a request for
//! `photo.jpg` cannot silently come back PNG-encoded.
//!
//! ## Settle All, Then Partition
//!
//! The render fan-out joins on every task and partitions results into
//! succeeded assets and failed requests. One bad render neither aborts its
//! siblings nor disappears: the archive holds the successful subset and the
//! outcome names every missing output with its reason.
//!
//! ## One Canvas Per Render
//!
//! Every render allocates a fresh RGBA canvas. There is no shared drawing
//! surface, which keeps renders independent and lets rayon schedule them
//! freely across threads with no locking.
//!
//! ## Deterministic Output
//!
//! For a fixed selection, stem, format, and natural size, the request list
//! is byte-for-byte reproducible: selection order first, catalog declaration
//! order within a platform. `plan --json` exists so that ordering can be
//! pinned in golden files.

pub mod archive;
pub mod catalog;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod requests;
pub mod types;
