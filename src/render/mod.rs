//! Scaled rendering — pure Rust, built on the `image` crate.
//!
//! | Concern | Where |
//! |---|---|
//! | **Placement math** | [`calculations`] (pure, no I/O) |
//! | **Renderer seam** | [`backend::Renderer`] trait |
//! | **Production renderer** | [`raster::RasterRenderer`] (Lanczos3 + in-memory encode) |
//!
//! Every render allocates its own canvas and produces one encoded byte
//! buffer; renders share no mutable state, which is what lets the pipeline
//! fan them out across threads without locking.

pub mod backend;
pub mod calculations;
pub mod raster;

pub use backend::{RenderError, Renderer};
pub use calculations::{Placement, fit_inside};
pub use raster::RasterRenderer;
