//! tav-extract library interface
//!
//! Parse & extract stage for annotated task demonstrations: reads ELAN EAF
//! files and the task encoding workbook, assembles per-video action
//! sequences and aggregates an action vocabulary across all videos.

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod workflow;

pub use crate::error::{ExtractError, ExtractResult, FailureKind};
pub use crate::workflow::{BatchReport, Stage1Pipeline};
