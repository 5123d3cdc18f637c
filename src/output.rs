//! CLI output formatting.
//!
//! Each view has a `format_*` function returning `Vec<String>` (pure, no
//! I/O — unit testable) and a `print_*` wrapper that writes to stdout.
//!
//! ```text
//! Favicons (21 assets)
//!     favicon-16x16.png  16x16
//!     ...
//!
//! Rendered 21 assets → Iconsmith.zip
//! Failed (1)
//!     Chrome Store/48x48.png: encoding failed
//! ```

use crate::catalog::{PlatformTag, asset_count};
use crate::pipeline::PipelineOutcome;
use crate::requests::ResizeRequest;

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Top-level archive folder for a path, or "." for root-level files.
fn family(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((dir, _)) => dir,
        None => ".",
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}

/// Format a request plan grouped by platform family directory.
pub fn format_plan(requests: &[ResizeRequest]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Option<&str> = None;

    for request in requests {
        let dir = family(&request.path);
        if current != Some(dir) {
            if current.is_some() {
                lines.push(String::new());
            }
            let count = requests.iter().filter(|r| family(&r.path) == dir).count();
            let label = if dir == "." { "(archive root)" } else { dir };
            lines.push(format!("{label} ({count} assets)"));
            current = Some(dir);
        }
        lines.push(format!(
            "{}{}  {}x{}",
            indent(1),
            file_name(&request.path),
            request.width,
            request.height
        ));
    }

    if lines.is_empty() {
        lines.push("Nothing to render".to_string());
    }
    lines
}

/// Format the post-build summary: written count, skips, failures.
pub fn format_build_summary(outcome: &PipelineOutcome) -> Vec<String> {
    let mut lines = vec![format!(
        "Rendered {} asset{} → {}",
        outcome.written.len(),
        if outcome.written.len() == 1 { "" } else { "s" },
        outcome.archive_name
    )];

    if !outcome.skipped.is_empty() {
        lines.push(format!("Skipped ({})", outcome.skipped.len()));
        for reason in &outcome.skipped {
            lines.push(format!("{}{reason}", indent(1)));
        }
    }

    if !outcome.failures.is_empty() {
        lines.push(format!("Failed ({})", outcome.failures.len()));
        for failure in &outcome.failures {
            lines.push(format!(
                "{}{}: {}",
                indent(1),
                failure.request.path,
                failure.reason
            ));
        }
    }

    lines
}

/// Format the platform listing for the `platforms` subcommand.
pub fn format_platforms() -> Vec<String> {
    PlatformTag::ALL
        .iter()
        .map(|&tag| {
            format!(
                "{:<14} {:>3} asset{}  {}",
                tag.name(),
                asset_count(tag),
                if asset_count(tag) == 1 { " " } else { "s" },
                tag.describe()
            )
        })
        .collect()
}

pub fn print_plan(requests: &[ResizeRequest]) {
    for line in format_plan(requests) {
        println!("{line}");
    }
}

pub fn print_build_summary(outcome: &PipelineOutcome) {
    for line in format_build_summary(outcome) {
        println!("{line}");
    }
}

pub fn print_platforms() {
    for line in format_platforms() {
        println!("{line}");
    }
}
