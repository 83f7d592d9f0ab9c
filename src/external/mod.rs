//! Provides abstractions over the programs which control the system's displays

pub mod display;
