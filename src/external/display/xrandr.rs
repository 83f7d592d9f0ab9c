use super::DisplayControl;
use crate::error::{BrightnessError, Result};
use std::process::Command;

/// Program used when no other is configured.
pub const DEFAULT_PROGRAM: &str = "xrandr";

/// A [DisplayControl] which runs `xrandr --output <device> --brightness <value>`.
///
/// There is no timeout: a hung program hangs the caller.
#[derive(Debug, Clone)]
pub struct Xrandr {
    program: String,
}

impl Xrandr {
    /// Create a controller which runs `program` instead of plain `xrandr`.
    /// Anything accepting xrandr's `--output` and `--brightness` options works.
    pub fn new(program: &str) -> Xrandr {
        Xrandr {
            program: program.to_owned(),
        }
    }
}

impl Default for Xrandr {
    fn default() -> Self {
        Xrandr::new(DEFAULT_PROGRAM)
    }
}

impl DisplayControl for Xrandr {
    fn set_brightness(&self, device: &str, brightness: f64) -> Result<()> {
        let value = brightness.to_string();
        log::debug!(
            "Running {} --output {} --brightness {}",
            self.program,
            device,
            value
        );
        let output = Command::new(&self.program)
            .args(["--output", device, "--brightness", value.as_str()])
            .output()
            .map_err(|e| BrightnessError::ExternalCommand {
                program: self.program.clone(),
                message: format!("couldn't start: {}", e),
            })?;
        if output.status.success() {
            return Ok(());
        }
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Err(BrightnessError::ExternalCommand {
            program: self.program.clone(),
            message: format!("{}, output: {}", output.status, combined.trim()),
        })
    }
}
