//! Version-aware reader/writer for Unreal Engine package files, UE1 through UE4/5 and
//! licensee forks.
//!
//! [`Package::load`] and [`Package::save`] are the entry points; everything else in this
//! crate exists to support them. [`unreal_package_base`] carries the parts of the model that
//! don't depend on the stream/table machinery (the build registry, error taxonomy, and
//! shared value types), so that crate has no dependency on this one.

pub mod branch;
pub mod custom_version;
pub mod options;
pub mod package;
pub mod resolver;
pub mod stream;
pub mod summary;
pub mod tables;
pub mod thresholds;

pub use branch::{EngineBranch, LogicalFlag, ObjectSafeBranch};
pub use custom_version::{CustomVersion, CustomVersionFormat};
pub use options::{LoadFlags, LoadOptions, SaveOptions};
pub use package::{Package, PackageEvent};
pub use resolver::{ClassRegistry, ObjectHandle, PlaceholderObject, Resolver};
pub use stream::{Endianness, PackageStream, ReadRecord};
pub use summary::Summary;
pub use tables::{ExportEntry, ExportShape, ImportEntry, NameEntry};

pub use unreal_package_base::{
    BuildTarget, CompressedChunk, CookedPlatform, Diagnostics, DiagnosticEvent, EngineBranchId,
    Error, ExportGuid, GenerationInfo, HeritageEntry, ImportGuid, NameIndex, PackageIndex,
    Platform, Result, TextureAllocation, ThumbnailEntry,
};
