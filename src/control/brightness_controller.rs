use super::intent::{Intent, RuntimeRequest};
use crate::{config::ConfigStore, error::Result, external::display::DisplayControl};

const MIN_BRIGHTNESS: f64 = 0.0;
const MAX_BRIGHTNESS: f64 = 1.0;

/// The result of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    pub device: String,
    pub brightness: f64,
    /// Set when the requested step would have left `[0.0, 1.0]` and the value
    /// was pinned to the boundary instead.
    pub clamped: bool,
}

/// Applies [RuntimeRequest]s through a [DisplayControl] and records the
/// outcome in a [ConfigStore].
pub struct BrightnessController<D: DisplayControl> {
    display: D,
}

impl<D: DisplayControl> BrightnessController<D> {
    pub fn new(display: D) -> BrightnessController<D> {
        BrightnessController { display }
    }

    /// Run `request` against the state in `store`.
    ///
    /// The store is only written once the display has accepted the new value.
    /// If the display succeeds but saving fails, the error is returned even
    /// though the display already shows the new brightness.
    pub fn run(&self, request: &RuntimeRequest, store: &mut ConfigStore) -> Result<Adjustment> {
        let adjustment = compute(request, store.state().device.as_str(), store.state().brightness);
        log::debug!("Computed {:?} for {:?}", adjustment, request.intent);

        log::debug!(
            "Applying brightness {} to {}",
            adjustment.brightness,
            adjustment.device
        );
        if let Err(e) = self
            .display
            .set_brightness(&adjustment.device, adjustment.brightness)
        {
            log::debug!("Applying failed, config left untouched");
            return Err(e);
        }

        store.save(&adjustment.device, adjustment.brightness)?;
        log::info!(
            "Brightness of {} set to {}",
            adjustment.device,
            adjustment.brightness
        );
        Ok(adjustment)
    }
}

/// Decide which device and brightness a request resolves to, given the last
/// persisted ones.
pub fn compute(request: &RuntimeRequest, last_device: &str, last_brightness: f64) -> Adjustment {
    let unclamped = match request.intent {
        Intent::Refresh => {
            return Adjustment {
                device: last_device.to_owned(),
                brightness: last_brightness,
                clamped: false,
            }
        }
        Intent::Increase(delta) => last_brightness + delta,
        Intent::Decrease(delta) => last_brightness - delta,
    };

    let clamped = !(MIN_BRIGHTNESS..=MAX_BRIGHTNESS).contains(&unclamped);
    let brightness = unclamped.clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS);
    if clamped {
        log::warn!(
            "Requested brightness {} is out of range, clamping to {}",
            unclamped,
            brightness
        );
    }
    Adjustment {
        device: request.target_device.clone(),
        brightness,
        clamped,
    }
}
