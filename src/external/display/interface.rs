use crate::error::Result;

/// A trait allowing to set the brightness of a named display output.
pub trait DisplayControl {
    /// Apply `brightness` (a fraction in `[0.0, 1.0]`) to `device`.
    ///
    /// Blocks until the change has been applied or has failed.
    fn set_brightness(&self, device: &str, brightness: f64) -> Result<()>;
}
