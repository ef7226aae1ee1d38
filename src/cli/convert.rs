//! Convert command implementation.
//!
//! Reads one image, renders a plate per configured ink pair and writes the
//! plates tiled into a 2x2 poster.

use std::path::PathBuf;

use clap::Args;
use image::RgbaImage;

use crate::codec::{read_image, write_image};
use crate::config::{PlatesConfig, PLATE_COUNT};
use crate::error::{PlatesError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{tile_grid, Pipeline, ThresholdMode};
use crate::types::MixAngle;

/// Render an image as a 2x2 grid of two-ink plates
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Image to read (png, jpg, gif, bmp, ico, webp)
    pub input: PathBuf,

    /// Poster to write; the extension picks the format (xpm allowed)
    pub output: PathBuf,

    /// YAML configuration with the threshold and ink pairs
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Maximum per-channel difference accepted by the fine gate
    #[arg(long, short)]
    pub threshold: Option<u8>,

    /// Channel difference arithmetic
    #[arg(long, value_enum)]
    pub threshold_mode: Option<ThresholdMode>,

    /// Full-turn angle used to mix hues
    #[arg(long, value_enum)]
    pub mix_angle: Option<MixAngle>,

    /// Wrapping thresholds and the truncated mix angle of older releases
    #[arg(long, conflicts_with_all = ["threshold_mode", "mix_angle"])]
    pub legacy: bool,

    /// Print per-stage diagnostics
    #[arg(long, short)]
    pub verbose: bool,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let printer = Printer::new(args.verbose);
    run_with(&args, &printer)
}

/// Run the conversion, reporting progress through `printer`.
pub fn run_with(args: &ConvertArgs, printer: &Printer) -> Result<()> {
    let config = resolve_config(args, printer)?;

    let image = read_image(&args.input)?;
    printer.status(
        "Reading",
        &format!(
            "{} ({}x{})",
            display_path(&args.input),
            image.width(),
            image.height()
        ),
    );
    printer.debug(
        "Threshold",
        &format!("{} ({:?})", config.threshold, config.threshold_mode),
    );
    printer.debug("Angle", &format!("{:?}", config.mix_angle));

    let plates = Pipeline::new(printer)
        .with_mode(config.threshold_mode)
        .with_mix_angle(config.mix_angle)
        .render(&image, &config)?;
    printer.status("Rendered", &plural(plates.len(), "plate", "plates"));

    let [a, b, c, d] = into_quad(plates)?;
    let poster = tile_grid([&a, &b, &c, &d])?;

    write_image(&args.output, &poster)?;
    printer.status(
        "Finished",
        &format!(
            "{} ({}x{})",
            display_path(&args.output),
            poster.width(),
            poster.height()
        ),
    );

    Ok(())
}

/// Load the configuration file, if any, and apply command-line overrides.
fn resolve_config(args: &ConvertArgs, printer: &Printer) -> Result<PlatesConfig> {
    let mut config = match &args.config {
        Some(path) => {
            printer.info("Loading", &display_path(path));
            PlatesConfig::load(path)?
        }
        None => PlatesConfig::default(),
    };

    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(mode) = args.threshold_mode {
        config.threshold_mode = mode;
    }
    if let Some(angle) = args.mix_angle {
        config.mix_angle = angle;
    }
    if args.legacy {
        config.threshold_mode = ThresholdMode::Wrapping;
        config.mix_angle = MixAngle::Truncated;
    }

    Ok(config)
}

fn into_quad(plates: Vec<RgbaImage>) -> Result<[RgbaImage; PLATE_COUNT]> {
    plates.try_into().map_err(|plates: Vec<RgbaImage>| PlatesError::Config {
        message: format!(
            "Expected {} plates, rendered {}",
            PLATE_COUNT,
            plates.len()
        ),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use image::Rgba;
    use tempfile::tempdir;

    fn args(input: PathBuf, output: PathBuf) -> ConvertArgs {
        ConvertArgs {
            input,
            output,
            config: None,
            threshold: None,
            threshold_mode: None,
            mix_angle: None,
            legacy: false,
            verbose: false,
        }
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("plates.yaml");
        std::fs::write(&config_path, "threshold: 12\nthreshold_mode: wrapping\n").unwrap();

        let mut args = args(PathBuf::from("in.png"), PathBuf::from("out.png"));
        args.config = Some(config_path);

        let config = resolve_config(&args, &Printer::silent()).unwrap();
        assert_eq!(config.threshold, 12);
        assert_eq!(config.threshold_mode, ThresholdMode::Wrapping);

        args.threshold = Some(99);
        args.threshold_mode = Some(ThresholdMode::Widened);
        let config = resolve_config(&args, &Printer::silent()).unwrap();
        assert_eq!(config.threshold, 99);
        assert_eq!(config.threshold_mode, ThresholdMode::Widened);
    }

    #[test]
    fn test_legacy_selects_both_compatibility_options() {
        let mut args = args(PathBuf::from("in.png"), PathBuf::from("out.png"));
        args.legacy = true;

        let config = resolve_config(&args, &Printer::silent()).unwrap();
        assert_eq!(config.threshold_mode, ThresholdMode::Wrapping);
        assert_eq!(config.mix_angle, MixAngle::Truncated);
    }

    #[test]
    fn test_run_writes_double_sized_poster() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");

        let image = RgbaImage::from_pixel(3, 2, Rgba([0, 0, 255, 255]));
        image.save(&input).unwrap();

        run_with(&args(input, output.clone()), &Printer::silent()).unwrap();

        let poster = image::open(&output).unwrap().to_rgba8();
        assert_eq!(poster.dimensions(), (6, 4));
        assert_eq!(Colour::from(*poster.get_pixel(0, 0)), Colour::rgb(0, 0, 255));
    }

    #[test]
    fn test_missing_input_aborts_before_writing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.png");

        let err = run_with(
            &args(dir.path().join("missing.png"), output.clone()),
            &Printer::silent(),
        )
        .unwrap_err();

        assert!(matches!(err, PlatesError::Io { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_into_quad_rejects_wrong_count() {
        let plates = vec![RgbaImage::new(1, 1); 3];
        assert!(matches!(into_quad(plates), Err(PlatesError::Config { .. })));
    }
}
