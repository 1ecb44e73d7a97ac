//! latchhook - latch hook pattern generator
//!
//! Command-line front end for `latchhook-core`: image decoding, PNG
//! encoding, YAML configuration and the run that ties them together.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
