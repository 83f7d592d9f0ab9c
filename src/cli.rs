//! Command line surface

use crate::{
    control::{Intent, RuntimeRequest},
    error::Result,
    external::display::xrandr,
};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Display output used when none is given.
pub const DEFAULT_DEVICE: &str = "HDMI-1-2";

/// Adjust the brightness of a display output and remember it, so it can be
/// reapplied later with --refresh.
#[derive(Debug, Parser)]
#[clap(version)]
#[clap(group(
    ArgGroup::new("intent")
        .required(true)
        .args(&["increase", "decrease", "refresh"]),
))]
pub struct Args {
    /// Increase the brightness by this amount
    #[clap(long, value_name = "DELTA")]
    pub increase: Option<f64>,

    /// Decrease the brightness by this amount
    #[clap(long, value_name = "DELTA")]
    pub decrease: Option<f64>,

    /// Reapply the last applied device and brightness
    #[clap(long)]
    pub refresh: bool,

    /// Display output to adjust
    #[clap(long, default_value = DEFAULT_DEVICE)]
    pub device: String,

    /// Config file, ~/.config/brightness/config.json by default
    #[clap(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Program used to set the brightness
    #[clap(long, value_name = "PATH", default_value = xrandr::DEFAULT_PROGRAM)]
    pub program: String,

    /// Log debug messages
    #[clap(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn request(&self) -> Result<RuntimeRequest> {
        let intent = Intent::from_selectors(self.increase, self.decrease, self.refresh)?;
        Ok(RuntimeRequest::new(&self.device, intent))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::BrightnessError;

    #[test]
    fn test_parse_increase() {
        let args = Args::try_parse_from(["brightness", "--increase", "0.1"]).unwrap();
        let request = args.request().unwrap();
        assert_eq!(request.intent, Intent::Increase(0.1));
        assert_eq!(request.target_device, DEFAULT_DEVICE);
        assert_eq!(args.program, "xrandr");
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_parse_options() {
        let args = Args::try_parse_from([
            "brightness",
            "--refresh",
            "--device",
            "eDP-1",
            "--config",
            "/tmp/b.json",
            "--program",
            "/usr/local/bin/xrandr",
        ])
        .unwrap();
        let request = args.request().unwrap();
        assert_eq!(request, RuntimeRequest::new("eDP-1", Intent::Refresh));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/b.json")));
        assert_eq!(args.program, "/usr/local/bin/xrandr");
    }

    #[test]
    fn test_intent_is_required_and_exclusive() {
        Args::try_parse_from(["brightness"]).expect_err("Missing intent accepted");
        Args::try_parse_from(["brightness", "--increase", "0.1", "--refresh"])
            .expect_err("Conflicting intents accepted");
        Args::try_parse_from(["brightness", "--increase", "0.1", "--decrease", "0.1"])
            .expect_err("Conflicting intents accepted");
    }

    #[test]
    fn test_non_positive_delta() {
        let args = Args::try_parse_from(["brightness", "--decrease", "0"]).unwrap();
        assert!(matches!(args.request(), Err(BrightnessError::Usage(_))));
    }
}
