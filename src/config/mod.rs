//! Persistence of the last applied device and brightness

pub mod state;
pub mod store;

pub use store::ConfigStore;
