use clap::{Parser, Subcommand};
use iconsmith::pipeline::{CancelToken, PipelineOptions};
use iconsmith::render::RasterRenderer;
use iconsmith::types::{Dimensions, ImageFormat};
use iconsmith::{config, output, pipeline, requests};
use std::path::PathBuf;

/// Shared flags for commands that expand a platform selection.
#[derive(clap::Args, Clone)]
struct SelectionArgs {
    /// Platform sets to generate (comma-separated), e.g. favicon,ios-icon.
    /// Run `iconsmith platforms` for the full list.
    #[arg(long, value_delimiter = ',', required = true)]
    platforms: Vec<String>,

    /// Output format for catalog sets: png, jpg, gif
    #[arg(long, default_value = "png")]
    format: ImageFormat,

    /// File stem for direct conversions and @Nx families
    /// [default: source file name]
    #[arg(long)]
    stem: Option<String>,
}

#[derive(Parser)]
#[command(name = "iconsmith")]
#[command(about = "Generate platform icon and image asset sets from one source image")]
#[command(long_about = "\
Generate platform icon and image asset sets from one source image

Give iconsmith a single image and a platform selection; it renders every
asset the selected platforms call for (fit inside the target box, aspect
preserved, centered) and bundles them into one zip:

  Favicons/favicon-16x16.png ... favicon-310x310.png
  AppIcon.appiconset/Icon-20@2x.png, AppleWatch-Icon-44@2x.png, ...
  Android Icons/48x48.png, Android Image/ldpi.png ... xxxhdpi.png
  Windows/Square150x150Logo.scale-200.png, ...

Density families scale from the source's natural size: iOS images are 1/3
natural at @1x/@2x/@3x, Android images 1/4 natural across ldpi-xxxhdpi.

Run 'iconsmith gen-config' for a documented iconsmith.toml.")]
#[command(version)]
struct Cli {
    /// Config file [default: ./iconsmith.toml if present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the full asset set and write the zip archive
    Build {
        /// Source image (png, jpg, gif)
        image: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Archive name suffix: "<label> - <suffix>.zip"
        #[arg(long)]
        suffix: Option<String>,

        /// Directory to write the archive into
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
    /// Print the request list without rendering anything
    Plan {
        /// Source image — only its dimensions are read
        image: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Emit the request list as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every supported platform tag
    Platforms,
    /// Print a stock iconsmith.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Build {
            image,
            selection,
            suffix,
            output_dir,
        } => {
            let (tags, skipped) = requests::parse_selection(&selection.platforms);
            let source = image::open(&image)?;
            let stem = resolve_stem(selection.stem, &image);

            init_thread_pool(&config.processing);
            let renderer = RasterRenderer::new(config.encoding.jpeg_quality);
            let opts = PipelineOptions {
                file_stem: stem,
                format: selection.format,
                base_label: config.archive.base_label.clone(),
                suffix,
            };
            let outcome = pipeline::run(
                &renderer,
                &source,
                &tags,
                skipped,
                &opts,
                &CancelToken::new(),
            )?;

            std::fs::create_dir_all(&output_dir)?;
            let archive_path = output_dir.join(&outcome.archive_name);
            std::fs::write(&archive_path, &outcome.archive)?;
            output::print_build_summary(&outcome);
            println!("Wrote {}", archive_path.display());

            if outcome.is_total_failure() {
                return Err("every render failed; archive contains no assets".into());
            }
        }
        Command::Plan {
            image,
            selection,
            json,
        } => {
            let (tags, skipped) = requests::parse_selection(&selection.platforms);
            let (width, height) = image::image_dimensions(&image)?;
            let stem = resolve_stem(selection.stem, &image);

            let outcome = requests::build_requests(
                &tags,
                &stem,
                selection.format,
                Dimensions::new(width, height),
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome.requests)?);
            } else {
                output::print_plan(&outcome.requests);
            }
            for reason in skipped.iter().chain(&outcome.skipped) {
                eprintln!("warning: {reason}");
            }
        }
        Command::Platforms => {
            output::print_platforms();
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// File stem for output naming: explicit flag, else the source file name.
fn resolve_stem(explicit: Option<String>, image: &std::path::Path) -> String {
    explicit.unwrap_or_else(|| {
        image
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string())
    })
}

/// Initialize the rayon thread pool from processing config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
