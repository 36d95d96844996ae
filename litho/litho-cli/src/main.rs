//! lithoforge: convert an image into a printable lithophane STL.
//!
//! The pipeline is strictly sequential: decode and sample the image,
//! build the height field, tessellate the plate, stream it into the STL
//! writer. Any stage failure aborts the run with a message and a
//! non-zero exit; there are no retries and no partial recovery.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use litho_field::{HeightField, ReliefParams};
use litho_image::{load_luminance, SampleOptions};
use litho_mesh::{BackStyle, BorderParams, PlateBuilder, PlateParams};
use litho_stl::{StlFormat, StlWriter};
use tracing::info;

/// Convert an image into a lithophane STL for 3D printing.
///
/// Local plate thickness encodes pixel brightness: darker pixels come
/// out thicker and block more light when the print is backlit.
#[derive(Debug, Parser)]
#[command(name = "lithoforge")]
#[command(about = "Convert images to printable lithophane STL", long_about = None)]
#[command(version)]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output STL path; defaults to the input name with `.stl`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write ASCII STL instead of binary.
    #[arg(long)]
    ascii: bool,

    /// Invert the relief so bright pixels come out thick.
    #[arg(long)]
    negative: bool,

    /// Mirror the plate along its width.
    #[arg(long)]
    mirror_x: bool,

    /// Mirror the plate along its height.
    #[arg(long)]
    mirror_y: bool,

    /// Skip the border frame and emit plain side walls.
    #[arg(long)]
    no_border: bool,

    /// Tessellate the flat back as a center fan instead of a full grid.
    #[arg(long)]
    fan_back: bool,

    /// Physical plate width in mm.
    #[arg(long, default_value_t = 100.0)]
    width_mm: f64,

    /// Distance between adjacent samples in mm.
    #[arg(long, default_value_t = 0.2)]
    step: f64,

    /// Thickness of the brightest cells in mm.
    #[arg(long, default_value_t = 0.5)]
    min_thickness: f64,

    /// Thickness of the darkest cells in mm.
    #[arg(long, default_value_t = 3.5)]
    max_thickness: f64,

    /// Border frame plane height in mm.
    #[arg(long, default_value_t = 5.0)]
    border_thickness: f64,

    /// Border frame rim width in mm.
    #[arg(long, default_value_t = 4.0)]
    border_width: f64,

    /// Gaussian smoothing sigma applied before resampling.
    #[arg(long, default_value_t = 6.0)]
    smooth: f32,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let sample_options = SampleOptions {
        desired_width_mm: cli.width_mm,
        step_mm: cli.step,
        blur_sigma: cli.smooth,
        mirror_x: cli.mirror_x,
        mirror_y: cli.mirror_y,
    };
    let grid = load_luminance(&cli.input, &sample_options)
        .with_context(|| format!("failed to sample {}", cli.input.display()))?;

    let relief = ReliefParams::default()
        .with_thickness(cli.min_thickness, cli.max_thickness)
        .negated(cli.negative);
    let field = HeightField::from_luminance(&grid, &relief)
        .context("failed to build the height field")?;

    let builder = PlateBuilder::new(&field, &plate_params(cli))
        .context("invalid plate layout")?;

    let output = output_path(cli);
    let format = if cli.ascii {
        StlFormat::Ascii
    } else {
        StlFormat::Binary
    };
    let mut writer = StlWriter::create(&output, format)
        .with_context(|| format!("failed to open {}", output.display()))?;
    let triangles = builder
        .emit(&mut writer)
        .with_context(|| format!("failed to write {}", output.display()))?;
    writer
        .finalize()
        .with_context(|| format!("failed to finalize {}", output.display()))?;

    info!(triangles, output = %output.display(), "conversion complete");
    println!("wrote {triangles} triangles to {}", output.display());
    Ok(())
}

fn plate_params(cli: &Cli) -> PlateParams {
    let mut params = PlateParams::with_step(cli.step);
    if cli.fan_back {
        params = params.back_style(BackStyle::Fan);
    }
    if !cli.no_border {
        params = params.bordered(BorderParams {
            thickness_mm: cli.border_thickness,
            width_mm: cli.border_width,
        });
    }
    params
}

fn output_path(cli: &Cli) -> PathBuf {
    cli.output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("stl"))
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lithoforge").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn output_path_derives_from_input() {
        let cli = cli(&["photos/cat.png"]);
        assert_eq!(output_path(&cli), PathBuf::from("photos/cat.stl"));
    }

    #[test]
    fn explicit_output_path_wins() {
        let cli = cli(&["cat.png", "-o", "out/plate.stl"]);
        assert_eq!(output_path(&cli), PathBuf::from("out/plate.stl"));
    }

    #[test]
    fn border_is_on_by_default() {
        let params = plate_params(&cli(&["cat.png"]));
        assert!(params.border.is_some());
        assert_eq!(params.back_style, BackStyle::Grid);
    }

    #[test]
    fn no_border_flag_disables_the_frame() {
        let params = plate_params(&cli(&["cat.png", "--no-border"]));
        assert!(params.border.is_none());
    }

    #[test]
    fn fan_back_flag_selects_fan_tessellation() {
        let params = plate_params(&cli(&["cat.png", "--fan-back"]));
        assert_eq!(params.back_style, BackStyle::Fan);
    }

    #[test]
    fn defaults_match_the_documented_surface() {
        let cli = cli(&["cat.png"]);
        assert!(!cli.ascii);
        assert!(!cli.negative);
        assert!(!cli.mirror_x && !cli.mirror_y);
        assert!((cli.width_mm - 100.0).abs() < f64::EPSILON);
        assert!((cli.step - 0.2).abs() < f64::EPSILON);
        assert!((cli.min_thickness - 0.5).abs() < f64::EPSILON);
        assert!((cli.max_thickness - 3.5).abs() < f64::EPSILON);
        assert!((cli.border_thickness - 5.0).abs() < f64::EPSILON);
        assert!((cli.border_width - 4.0).abs() < f64::EPSILON);
    }
}
