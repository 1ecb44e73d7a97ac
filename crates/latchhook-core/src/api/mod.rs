//! Public API for the latchhook-core crate.
//!
//! This module provides the high-level API: the [`LatchHook`] pipeline
//! builder and the [`LatchHookError`] unified error type.

mod builder;
mod error;

pub use builder::LatchHook;
pub use error::LatchHookError;
