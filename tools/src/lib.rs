//! Helpers shared by the beer-color-tools binaries.

pub mod logger;
