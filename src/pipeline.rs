//! Pipeline orchestration: expand, render in parallel, settle, archive.
//!
//! One invocation per user action, no persistent state. Renders fan out with
//! rayon — each task owns its canvas, so no locking is needed — and the
//! pipeline joins on *all* of them before assembly starts. Failed renders are
//! collected, not thrown: the outcome separates succeeded assets from failed
//! requests so callers can report partial success, and an archive of the
//! successful subset is still produced.
//!
//! A [`CancelToken`] lets the caller abandon in-flight work; already-spawned
//! tasks check it before touching pixels. Parallelism is bounded by the rayon
//! pool the caller configures (see [`crate::config::effective_threads`]); a
//! combined Windows + iOS + Android selection exceeds 80 requests, and each
//! render allocates its own surface.

use crate::archive::{self, ArchiveError};
use crate::requests::{self, ResizeRequest, SkipReason};
use crate::render::{RenderError, Renderer};
use crate::types::{Dimensions, ImageFormat, RenderedAsset};
use image::DynamicImage;
use rayon::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("archive assembly failed: {0}")]
    Archive(#[from] ArchiveError),
    #[error("cancelled")]
    Cancelled,
}

/// Cooperative cancellation flag shared with in-flight render tasks.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Inputs beyond the image and selection.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// File stem for direct conversions and `@Nx` image families.
    pub file_stem: String,
    /// Output format for catalog sets (direct tags carry their own).
    pub format: ImageFormat,
    /// Archive base label, e.g. `Iconsmith`.
    pub base_label: String,
    /// Optional archive name suffix supplied by the caller.
    pub suffix: Option<String>,
}

/// One request that could not be rendered, with the reason.
#[derive(Debug)]
pub struct FailedRequest {
    pub request: ResizeRequest,
    pub reason: RenderError,
}

/// Result of a full pipeline invocation.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// The zip blob, ready for the download collaborator.
    pub archive: Vec<u8>,
    pub archive_name: String,
    /// Paths written into the archive, in request order.
    pub written: Vec<String>,
    pub failures: Vec<FailedRequest>,
    /// Selection entries that expanded to nothing.
    pub skipped: Vec<SkipReason>,
}

impl PipelineOutcome {
    /// True when at least one request existed and none succeeded.
    pub fn is_total_failure(&self) -> bool {
        self.written.is_empty() && !self.failures.is_empty()
    }
}

/// Run the full pipeline for one source image.
///
/// The builder's skip diagnostics are merged with any the caller collected
/// during selection parsing (`pre_skipped`). Returns `Err` only for archive
/// failure or cancellation; per-request render failures land in the outcome.
pub fn run(
    renderer: &impl Renderer,
    source: &DynamicImage,
    selection: &[crate::catalog::PlatformTag],
    pre_skipped: Vec<SkipReason>,
    opts: &PipelineOptions,
    cancel: &CancelToken,
) -> Result<PipelineOutcome, PipelineError> {
    let natural = Dimensions::new(source.width(), source.height());
    let mut build = requests::build_requests(selection, &opts.file_stem, opts.format, natural);

    let mut skipped = pre_skipped;
    skipped.append(&mut build.skipped);

    // Settle all: every request resolves to ok or err before assembly
    let settled: Vec<Result<RenderedAsset, FailedRequest>> = build
        .requests
        .par_iter()
        .map(|request| {
            if cancel.is_cancelled() {
                return Err(FailedRequest {
                    request: request.clone(),
                    reason: RenderError::Cancelled,
                });
            }
            renderer.render(source, request).map_err(|reason| FailedRequest {
                request: request.clone(),
                reason,
            })
        })
        .collect();

    if cancel.is_cancelled() {
        return Err(PipelineError::Cancelled);
    }

    let mut assets = Vec::new();
    let mut failures = Vec::new();
    for result in settled {
        match result {
            Ok(asset) => assets.push(asset),
            Err(failure) => failures.push(failure),
        }
    }

    let archive = archive::assemble(&assets)?;
    Ok(PipelineOutcome {
        archive,
        archive_name: archive::archive_name(&opts.base_label, opts.suffix.as_deref()),
        written: assets.into_iter().map(|a| a.path).collect(),
        failures,
        skipped,
    })
}
