pub mod convert;

use clap::Parser;

/// puppyart - Render an image as four two-ink poster plates
#[derive(Parser, Debug)]
#[command(name = "puppyart")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub args: convert::ConvertArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ThresholdMode;
    use crate::types::MixAngle;
    use clap::error::ErrorKind;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positionals_only() {
        let cli = Cli::try_parse_from(["puppyart", "in.png", "out.png"]).unwrap();
        assert_eq!(cli.args.input, PathBuf::from("in.png"));
        assert_eq!(cli.args.output, PathBuf::from("out.png"));
        assert_eq!(cli.args.config, None);
        assert_eq!(cli.args.threshold, None);
        assert_eq!(cli.args.threshold_mode, None);
        assert_eq!(cli.args.mix_angle, None);
        assert!(!cli.args.legacy);
        assert!(!cli.args.verbose);
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::try_parse_from([
            "puppyart",
            "-c",
            "plates.yaml",
            "-t",
            "40",
            "--threshold-mode",
            "wrapping",
            "-v",
            "in.png",
            "out.xpm",
        ])
        .unwrap();
        assert_eq!(cli.args.config, Some(PathBuf::from("plates.yaml")));
        assert_eq!(cli.args.threshold, Some(40));
        assert_eq!(cli.args.threshold_mode, Some(ThresholdMode::Wrapping));
        assert!(cli.args.verbose);
    }

    #[test]
    fn test_mix_angle_option() {
        let cli =
            Cli::try_parse_from(["puppyart", "--mix-angle", "truncated", "in.png", "out.png"])
                .unwrap();
        assert_eq!(cli.args.mix_angle, Some(MixAngle::Truncated));
    }

    #[test]
    fn test_legacy_conflicts_with_explicit_modes() {
        let cli = Cli::try_parse_from(["puppyart", "--legacy", "in.png", "out.png"]).unwrap();
        assert!(cli.args.legacy);

        let err = Cli::try_parse_from([
            "puppyart",
            "--legacy",
            "--mix-angle",
            "exact",
            "in.png",
            "out.png",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_missing_output_is_usage_error() {
        let err = Cli::try_parse_from(["puppyart", "in.png"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_threshold_out_of_range() {
        let err = Cli::try_parse_from(["puppyart", "-t", "300", "in.png", "out.png"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
