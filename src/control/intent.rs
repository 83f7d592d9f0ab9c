use crate::error::{BrightnessError, Result};

/// The single operation requested for an invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Raise the brightness by the given positive amount
    Increase(f64),
    /// Lower the brightness by the given positive amount
    Decrease(f64),
    /// Reapply the last persisted device and brightness
    Refresh,
}

impl Intent {
    /// Build an intent out of the three mutually exclusive selectors.
    ///
    /// Exactly one of them has to be set and deltas have to be finite and
    /// greater than zero.
    pub fn from_selectors(
        increase: Option<f64>,
        decrease: Option<f64>,
        refresh: bool,
    ) -> Result<Intent> {
        let intent = match (increase, decrease, refresh) {
            (Some(delta), None, false) => Intent::Increase(check_delta("increase", delta)?),
            (None, Some(delta), false) => Intent::Decrease(check_delta("decrease", delta)?),
            (None, None, true) => Intent::Refresh,
            (None, None, false) => {
                return Err(BrightnessError::Usage(
                    "one of --increase, --decrease or --refresh must be specified".to_owned(),
                ))
            }
            _ => {
                return Err(BrightnessError::Usage(
                    "only one of --increase, --decrease or --refresh can be specified".to_owned(),
                ))
            }
        };
        Ok(intent)
    }
}

fn check_delta(name: &str, delta: f64) -> Result<f64> {
    if delta.is_finite() && delta > 0.0 {
        Ok(delta)
    } else {
        Err(BrightnessError::Usage(format!(
            "--{} needs a positive amount, got {}",
            name, delta
        )))
    }
}

/// What one invocation of the tool is asked to do.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeRequest {
    /// Device adjusted by [Intent::Increase] and [Intent::Decrease].
    /// [Intent::Refresh] uses the persisted device instead.
    pub target_device: String,
    pub intent: Intent,
}

impl RuntimeRequest {
    pub fn new(target_device: &str, intent: Intent) -> RuntimeRequest {
        RuntimeRequest {
            target_device: target_device.to_owned(),
            intent,
        }
    }
}
