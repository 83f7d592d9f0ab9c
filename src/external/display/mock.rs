use super::DisplayControl;
use crate::error::{BrightnessError, Result};
use std::{
    cell::Cell,
    sync::{Arc, Mutex},
};

/// A mock [DisplayControl], recording every brightness it was asked to apply.
#[derive(Clone, Default)]
pub struct MockDisplay {
    calls: Arc<Mutex<Vec<(String, f64)>>>,
    should_fail: Arc<Mutex<Cell<bool>>>,
}

impl MockDisplay {
    pub fn new() -> MockDisplay {
        MockDisplay::default()
    }

    /// Set whether calls on this controller should return an error or not
    pub fn set_failure_mode(&self, should_fail: bool) {
        self.should_fail.lock().unwrap().set(should_fail);
    }

    /// All calls made so far, including failed ones, in order.
    pub fn calls(&self) -> Vec<(String, f64)> {
        self.calls.lock().unwrap().clone()
    }
}

impl DisplayControl for MockDisplay {
    fn set_brightness(&self, device: &str, brightness: f64) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((device.to_owned(), brightness));
        if self.should_fail.lock().unwrap().get() {
            return Err(BrightnessError::ExternalCommand {
                program: "mock".to_owned(),
                message: "Mock DisplayControl is failing".to_owned(),
            });
        }
        Ok(())
    }
}
