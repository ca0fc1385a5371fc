//! # Discovery Module
//!
//! Finds project descriptors on disk and turns them into [`Unit`](crate::graph::Unit)s.
//!
//! ## Modules
//!
//! - [`scanner`] - Recursive directory walk collecting `.csproj` / `.vbproj` files
//! - [`descriptor`] - MSBuild XML parsing of a single descriptor
//! - [`loader`] - Concurrent, bounded parsing of many descriptors

use std::path::PathBuf;
use thiserror::Error;

pub mod descriptor;
pub mod loader;
pub mod scanner;

pub use descriptor::{parse_descriptor, parse_descriptor_str};
pub use loader::{DescriptorLoader, LoadOutcome, SkippedDescriptor};
pub use scanner::{Discovery, discover};

/// Errors that abort discovery as a whole
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Cannot read root directory {path}: {source}")]
    RootUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Root is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Invalid job count: {count} (must be > 0)")]
    InvalidJobCount { count: usize },

    #[error("Task join error: {source}")]
    TaskJoinError {
        #[from]
        source: tokio::task::JoinError,
    },

    #[error("Semaphore acquire error: {source}")]
    SemaphoreError {
        #[from]
        source: tokio::sync::AcquireError,
    },
}

/// Errors for a single descriptor file (the file is skipped)
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("Unsupported descriptor type: {path}")]
    UnsupportedDialect { path: PathBuf },

    #[error("Failed to read file: {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse project XML: {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        source: quick_xml::DeError,
    },
}
