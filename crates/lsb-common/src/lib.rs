//! Common utilities for the lsb pipeline.
//!
//! This crate provides shared infrastructure used by all pipeline stages:
//! - **Warning System** - collected, colored diagnostics for unsupported input

pub mod warning;

pub use warning::{Component, Diagnostics, Warning};
