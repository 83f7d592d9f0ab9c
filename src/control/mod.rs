//! Brightness adjustment: deciding what to apply, applying it and recording it

pub mod brightness_controller;
pub mod intent;

pub use brightness_controller::BrightnessController;
pub use intent::{Intent, RuntimeRequest};

#[cfg(test)]
mod test;
