use serde::{Deserialize, Serialize};

/// Brightness assumed for a display which has never been adjusted.
pub const DEFAULT_BRIGHTNESS: f64 = 1.0;

/// The record stored in the config file.
///
/// The brightness is always kept within `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersistedState {
    #[serde(rename = "last_applied_device")]
    pub device: String,
    #[serde(rename = "last_applied_brightness")]
    pub brightness: f64,
}

impl PersistedState {
    /// State used when there is nothing on disk yet.
    pub fn new(device: &str) -> PersistedState {
        PersistedState {
            device: device.to_owned(),
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    /// Fill in a state from what was read from disk, falling back to
    /// `default_device` and [DEFAULT_BRIGHTNESS] for missing fields.
    pub(crate) fn from_stored(stored: StoredState, default_device: &str) -> PersistedState {
        let device = stored
            .last_applied_device
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| default_device.to_owned());
        let brightness = match stored.last_applied_brightness {
            Some(b) if !(0.0..=1.0).contains(&b) => {
                let clamped = b.clamp(0.0, 1.0);
                log::warn!(
                    "Stored brightness {} is out of range, clamping to {}",
                    b,
                    clamped
                );
                clamped
            }
            Some(b) => b,
            None => DEFAULT_BRIGHTNESS,
        };
        PersistedState { device, brightness }
    }
}

/// On-disk schema. Both fields are optional and unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct StoredState {
    #[serde(default)]
    pub last_applied_device: Option<String>,
    #[serde(default)]
    pub last_applied_brightness: Option<f64>,
}
