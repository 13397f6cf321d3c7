//! # TAV Common Library
//!
//! Shared code for the task action vocabulary tools:
//! - Error type and result alias
//! - TOML configuration loading and setting resolution
//! - Human-readable millisecond formatting

pub mod config;
pub mod error;
pub mod human_time;

pub use error::{Error, Result};
