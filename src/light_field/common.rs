//! Common utilities module
//!
//! This module contains shared utilities used across the light field reader.

pub mod error;

pub use error::{LightFieldError, Result};
