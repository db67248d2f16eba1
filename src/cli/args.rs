use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "quadcrop",
    version,
    about = "Cut two quadrant-biased random crops from every PNG in a directory tree"
)]
pub struct CliArgs {
    /// Directory searched recursively for .png files
    pub source_dir: PathBuf,

    /// Directory receiving <name>_crop_1.png and <name>_crop_2.png (created if missing)
    pub dest_dir: PathBuf,

    /// Log drawn crop geometry (RUST_LOG overrides)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_positionals_required() {
        assert!(CliArgs::try_parse_from(["quadcrop"]).is_err());
        assert!(CliArgs::try_parse_from(["quadcrop", "src"]).is_err());
        assert!(CliArgs::try_parse_from(["quadcrop", "src", "dst", "extra"]).is_err());

        let args = CliArgs::try_parse_from(["quadcrop", "src", "dst"]).unwrap();
        assert_eq!(args.source_dir, PathBuf::from("src"));
        assert_eq!(args.dest_dir, PathBuf::from("dst"));
        assert!(!args.verbose);
    }

    #[test]
    fn test_verbose_flag() {
        let args = CliArgs::try_parse_from(["quadcrop", "-v", "src", "dst"]).unwrap();
        assert!(args.verbose);
    }
}
