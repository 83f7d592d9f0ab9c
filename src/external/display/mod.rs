/// Control of display output brightness
pub mod interface;
#[cfg(test)]
pub mod mock;
pub mod xrandr;

pub use interface::*;
