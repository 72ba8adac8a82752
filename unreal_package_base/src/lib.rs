#![deny(missing_docs)]

//! Fundamental types, error taxonomy, build registry and flag definitions shared between the
//! `unreal_package` reader/writer and any branch-specific serialization hooks.

pub mod build;
pub mod diagnostics;
pub mod error;
pub mod flags;
pub mod platform;
pub mod types;

pub use build::{
    detect_build, detect_build_target, find_overrides, Build, BuildDescriptor, BuildTarget,
    EngineBranchId,
};
pub use diagnostics::{DiagnosticEvent, Diagnostics};
pub use error::Error;
pub use platform::{CookedPlatform, Platform};
pub use types::{
    CompressedChunk, ExportGuid, GenerationInfo, HeritageEntry, ImportGuid, NameIndex,
    PackageIndex, TextureAllocation, ThumbnailEntry,
};

/// Convenience `Result` alias used throughout the package I/O engine.
pub type Result<T> = std::result::Result<T, Error>;
