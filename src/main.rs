use std::ops::RangeInclusive;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use white_balance_rs::image_pipeline::{
    CorrectionConfig, CorrectionMode, CorrectionPipeline, OutputFormat, PipelineTimings,
    RasterImage, TiffCompression,
};
use white_balance_rs::logger;

/// Range the gain options accept; the library itself takes any positive gain.
const GAIN_RANGE: RangeInclusive<f64> = 0.5..=2.0;

const DEFAULT_OUTPUT_STEM: &str = "white_balanced";

#[derive(Parser)]
#[command(name = "white-balance")]
#[command(version, about = "Correct the color cast of a photograph", long_about = None)]
struct Cli {
    /// Image to correct (JPEG or PNG)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file [default: white_balanced.png or white_balanced.tiff]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Png)]
    format: FormatArg,

    /// Compression for TIFF output; only valid with `--format tiff` [default: deflate-balanced]
    #[arg(long, value_enum)]
    compression: Option<CompressionArg>,

    /// Print a per-step timing summary
    #[arg(long)]
    timings: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    mode: ModeCommand,
}

#[derive(Subcommand)]
enum ModeCommand {
    /// Scale channels so the scene averages to neutral gray
    GrayWorld,

    /// Multiply the red and blue channels by fixed gains
    Manual {
        /// Red channel gain (0.5 - 2.0)
        #[arg(long, value_name = "GAIN", default_value_t = 1.0, value_parser = parse_gain)]
        red_gain: f64,

        /// Blue channel gain (0.5 - 2.0)
        #[arg(long, value_name = "GAIN", default_value_t = 1.0, value_parser = parse_gain)]
        blue_gain: f64,
    },

    /// Regrade the image so one reference pixel becomes neutral gray
    #[command(group(ArgGroup::new("point").required(true).args(["x", "center"])))]
    Neutral {
        /// Column of the reference pixel
        #[arg(long, requires = "y")]
        x: Option<usize>,

        /// Row of the reference pixel
        #[arg(long, requires = "x")]
        y: Option<usize>,

        /// Use the center pixel as the reference
        #[arg(long, conflicts_with_all = ["x", "y"])]
        center: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Png,
    Tiff,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => OutputFormat::Png,
            FormatArg::Tiff => OutputFormat::Tiff,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CompressionArg {
    None,
    Lzw,
    DeflateFast,
    DeflateBalanced,
    DeflateBest,
}

impl From<CompressionArg> for TiffCompression {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => TiffCompression::None,
            CompressionArg::Lzw => TiffCompression::Lzw,
            CompressionArg::DeflateFast => TiffCompression::DeflateFast,
            CompressionArg::DeflateBalanced => TiffCompression::DeflateBalanced,
            CompressionArg::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

fn parse_gain(s: &str) -> Result<f64, String> {
    let gain: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if GAIN_RANGE.contains(&gain) {
        Ok(gain)
    } else {
        Err(format!(
            "gain must be between {} and {}",
            GAIN_RANGE.start(),
            GAIN_RANGE.end()
        ))
    }
}

/// Resolves the CLI mode against the decoded image, so `--center` sees the
/// same dimensions the correction will.
fn resolve_mode(mode: &ModeCommand, image: &RasterImage) -> CorrectionMode {
    match *mode {
        ModeCommand::GrayWorld => CorrectionMode::GrayWorld,
        ModeCommand::Manual { red_gain, blue_gain } => CorrectionMode::ManualGain { red_gain, blue_gain },
        ModeCommand::Neutral { x: Some(x), y: Some(y), .. } => CorrectionMode::NeutralPoint { x, y },
        ModeCommand::Neutral { .. } => CorrectionMode::NeutralPoint {
            x: image.width() / 2,
            y: image.height() / 2,
        },
    }
}

fn run(cli: &Cli) -> anyhow::Result<(PathBuf, PipelineTimings)> {
    let format = OutputFormat::from(cli.format);
    if cli.compression.is_some() && format != OutputFormat::Tiff {
        bail!("--compression only applies to TIFF output; add `--format tiff`");
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{DEFAULT_OUTPUT_STEM}.{}", format.extension())));

    let mut builder = CorrectionConfig::builder().output_format(format);
    if let Some(compression) = cli.compression {
        builder = builder.compression(compression.into());
    }
    let mut pipeline = CorrectionPipeline::new(builder.build());

    let mut timings = PipelineTimings::new();
    let image = timings
        .time("read_input_file", || pipeline.read_file(&cli.input))
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    pipeline.set_mode(resolve_mode(&cli.mode, &image));
    info!("Mode: {}", pipeline.config().mode);
    info!("Output format: {:?}", pipeline.config().output_format);

    timings.merge(
        pipeline
            .correct_to_file_with_timings(&image, &output)
            .with_context(|| format!("failed to correct {}", cli.input.display()))?,
    );

    Ok((output, timings))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let (output, timings) = run(&cli).inspect_err(|e| error!("Correction failed: {:#}", e))?;

    info!(output = %output.display(), "Correction successful!");

    if cli.timings {
        println!("{timings}");
    }

    Ok(())
}
