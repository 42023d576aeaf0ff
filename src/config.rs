use std::path::PathBuf;
use clap::Parser;
use crate::constants::*;

/// Animated parachute splash screen.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Directory holding parachute.png and cloud.png
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,

    /// Window width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(i32).range(1..))]
    pub width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(i32).range(1..))]
    pub height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Seed for cloud placement and timing
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["parachute-splash"]).unwrap();
        assert_eq!(args.assets, PathBuf::from("assets"));
        assert_eq!((args.width, args.height, args.fps), (DEFAULT_WIDTH, DEFAULT_HEIGHT, FPS));
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "parachute-splash", "--assets", "sprites", "--width", "400", "--height", "800", "--seed", "7",
        ])
        .unwrap();
        assert_eq!(args.assets, PathBuf::from("sprites"));
        assert_eq!((args.width, args.height), (400, 800));
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn test_rejects_zero_width() {
        assert!(Args::try_parse_from(["parachute-splash", "--width", "0"]).is_err());
    }
}
