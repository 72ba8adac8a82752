//! Fundamental value types shared by every table in a package.

use std::fmt;

use unreal_helpers::Guid;

/// A reference into the Name table: an index plus an instance suffix.
///
/// The suffix is rendered as `_<suffix-1>` when non-zero; a name with suffix `0` is the
/// bare interned string. The same string with different suffixes is a single Name-table
/// entry shared by many references.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct NameIndex {
    /// Index into the owning package's Name table.
    pub index: i32,
    /// Instance suffix; `0` means "no suffix".
    pub suffix: i32,
}

impl NameIndex {
    /// Create a new `NameIndex`.
    pub fn new(index: i32, suffix: i32) -> Self {
        NameIndex { index, suffix }
    }

    /// Render this reference against a resolved base string, appending `_<suffix-1>` when
    /// the suffix is non-zero.
    pub fn display(&self, base: &str) -> String {
        if self.suffix == 0 {
            base.to_string()
        } else {
            format!("{base}_{}", self.suffix - 1)
        }
    }
}

/// Package Index: `0` = none, `n>0` refers to `Exports[n-1]`, `n<0` refers to `Imports[-n-1]`.
///
/// This encoding is used everywhere objects cross-reference each other within a package and
/// MUST round-trip verbatim.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PackageIndex {
    /// Raw signed index.
    pub index: i32,
}

impl PackageIndex {
    /// Create a new `PackageIndex` from its raw encoding.
    pub fn new(index: i32) -> Self {
        PackageIndex { index }
    }

    /// The "none" index.
    pub const NONE: PackageIndex = PackageIndex { index: 0 };

    /// Create a `PackageIndex` addressing `Imports[import_index]`.
    pub fn from_import(import_index: i32) -> Self {
        PackageIndex::new(-import_index - 1)
    }

    /// Create a `PackageIndex` addressing `Exports[export_index]`.
    pub fn from_export(export_index: i32) -> Self {
        PackageIndex::new(export_index + 1)
    }

    /// `true` when this index is `0`.
    pub fn is_none(&self) -> bool {
        self.index == 0
    }

    /// `true` when this index refers to the import table.
    pub fn is_import(&self) -> bool {
        self.index < 0
    }

    /// `true` when this index refers to the export table.
    pub fn is_export(&self) -> bool {
        self.index > 0
    }

    /// Zero-based position in the import table, if this index refers to one.
    pub fn import_index(&self) -> Option<usize> {
        self.is_import().then(|| (-self.index - 1) as usize)
    }

    /// Zero-based position in the export table, if this index refers to one.
    pub fn export_index(&self) -> Option<usize> {
        self.is_export().then(|| (self.index - 1) as usize)
    }
}

impl fmt::Display for PackageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index)
    }
}

/// A historical save-point of a package, recording the table sizes at that save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationInfo {
    /// Export count at this generation.
    pub export_count: i32,
    /// Name count at this generation.
    pub name_count: i32,
    /// Net-object count at this generation (`0` for generations synthesized on write).
    pub net_object_count: i32,
}

impl GenerationInfo {
    /// Create a new `GenerationInfo`.
    pub fn new(export_count: i32, name_count: i32, net_object_count: i32) -> Self {
        GenerationInfo {
            export_count,
            name_count,
            net_object_count,
        }
    }
}

/// Pre-UE2 ancestor identity, superseded by [`GenerationInfo`] lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeritageEntry {
    /// Package GUID of this ancestor save.
    pub guid: Guid,
}

/// A single block of a chunk-compressed package.
///
/// Invariant: chunks partition or cover the file regions the Summary points to whenever
/// the Summary's compression flags are non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressedChunk {
    /// Offset of this chunk's data once decompressed.
    pub uncompressed_offset: i32,
    /// Size of this chunk's data once decompressed.
    pub uncompressed_size: i32,
    /// Offset of this chunk's data on disk.
    pub compressed_offset: i32,
    /// Size of this chunk's data on disk.
    pub compressed_size: i32,
}

/// A single thumbnail directory entry; the thumbnail body itself is read lazily by external
/// consumers from `data_offset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThumbnailEntry {
    /// Object class name.
    pub class_name: String,
    /// Full object path.
    pub object_path: String,
    /// File offset of the thumbnail body.
    pub data_offset: i32,
}

/// An import/export GUID pairing from the `ImportExportGUIDs` table (UE3 only).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportGuid {
    /// Index into the Import table.
    pub import_index: i32,
    /// The import's package GUID.
    pub guid: Guid,
}

/// See [`ImportGuid`]; the export-side pairing stores the GUID first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportGuid {
    /// The export's package GUID.
    pub guid: Guid,
    /// Index into the Export table.
    pub export_index: i32,
}

/// A `(uncompressed_size, uncompressed_offset)` entry from the texture allocations table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextureAllocation {
    /// Width in texels.
    pub size_x: i32,
    /// Height in texels.
    pub size_y: i32,
    /// Number of mip levels.
    pub num_mips: i32,
    /// Platform-specific texture format flags.
    pub format: i32,
    /// Texture group.
    pub texture_group: i32,
    /// Offset into the export's saved bulk data that this allocation starts at.
    pub export_indices: Vec<i32>,
}
