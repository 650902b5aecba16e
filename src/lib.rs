//! Shared library for `cgpa-tracker`
//! Contains the CGPA engine, record persistence, and configuration used by the CLI

pub mod core;
pub mod logger;

pub use crate::core::config;

/// Returns the current version of the `cgpa-tracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
