//! Package File Summary.

use unreal_helpers::Guid;
use unreal_package_base::{CompressedChunk, GenerationInfo, HeritageEntry, TextureAllocation};

/// The Summary: every field the base reader populates before branch hooks run.
///
/// Build-specific inserts live on the branch, not here; this struct only carries fields the
/// base algorithm itself reads.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    /// Raw legacy-version int32 read first (negative ⇒ UE4/UE5).
    pub legacy_version: i32,
    /// Engine version (UE1-UE3) or the "UE3-version" slot of a UE4 header.
    pub file_version: i32,
    /// Licensee-controlled sub-version sharing the packed int32 with `file_version` pre-UE4.
    pub licensee_version: i32,
    /// UE4 file version, present only when `legacy_version` is negative.
    pub ue4_file_version: i32,
    /// UE4 licensee version, present only when `legacy_version` is negative.
    pub ue4_licensee_version: i32,

    /// Header size in bytes (`ADDED_TOTAL_HEADER_SIZE`).
    pub header_size: i32,
    /// Cooked folder name (`ADDED_FOLDER_NAME`).
    pub folder_name: String,
    /// Package flags bitfield.
    pub package_flags: u32,

    /// Name table entry count.
    pub name_count: i32,
    /// Name table file offset.
    pub name_offset: i32,
    /// UE4 localization id (`ADDED_LOCALIZATION_ID`).
    pub localization_id: Option<String>,
    /// UE4 gatherable-text-data count (`ADDED_GATHERABLE_TEXT_DATA`).
    pub gatherable_text_data_count: i32,
    /// UE4 gatherable-text-data file offset.
    pub gatherable_text_data_offset: i32,

    /// Export table entry count.
    pub export_count: i32,
    /// Export table file offset.
    pub export_offset: i32,
    /// Import table entry count.
    pub import_count: i32,
    /// Import table file offset.
    pub import_offset: i32,

    /// Heritage entry count, pre-`HERITAGE_TABLE_DEPRECATED` only.
    pub heritage_count: i32,
    /// Heritage table file offset.
    pub heritage_offset: i32,
    /// Heritage entries once read (pre-`HERITAGE_TABLE_DEPRECATED` only).
    pub heritage: Vec<HeritageEntry>,

    /// Depends table file offset (`ADDED_DEPENDS_TABLE`); `0` means no table.
    pub depends_offset: i32,

    /// String-asset-references count (UE4 only).
    pub string_asset_references_count: i32,
    /// String-asset-references file offset (UE4 only).
    pub string_asset_references_offset: i32,
    /// Searchable-names file offset (UE4 only).
    pub searchable_names_offset: i32,

    /// ImportExportGUIDs import-side pair count (`ADDED_IMPORT_EXPORT_GUIDS_TABLE`, UE3 only).
    pub import_guids_count: i32,
    /// ImportExportGUIDs export-side pair count.
    pub export_guids_count: i32,
    /// ImportExportGUIDs table file offset.
    pub import_export_guids_offset: i32,

    /// Thumbnail table file offset (`ADDED_THUMBNAIL_TABLE`).
    pub thumbnail_table_offset: i32,

    /// Package GUID.
    pub guid: Guid,
    /// Historical save-points, newest last (post-`HERITAGE_TABLE_DEPRECATED`).
    pub generations: Vec<GenerationInfo>,

    /// Engine version scalar (pre-UE4) or `CompatibleWithEngineVersion` (UE4).
    pub engine_version: i32,
    /// UE4 structured `PackageFileEngineVersion.changelist`, when applicable.
    pub engine_changelist: i32,
    /// Cooker version scalar.
    pub cooker_version: i32,

    /// Compression flags (`COMPRESSION_ADDED`); `0` means uncompressed.
    pub compression_flags: u32,
    /// Compressed chunk directory.
    pub compressed_chunks: Vec<CompressedChunk>,

    /// Package source tag (`ADDED_PACKAGE_SOURCE`).
    pub package_source: i32,
    /// Additional packages this package asks the cooker to also cook.
    pub additional_packages_to_cook: Vec<String>,
    /// Texture allocation directory (`ADDED_TEXTURE_ALLOCATIONS`).
    pub texture_allocations: Vec<TextureAllocation>,

    /// UE4 asset-registry-data file offset.
    pub asset_registry_data_offset: i32,
    /// UE4 bulk-data-start-offset.
    pub bulk_data_start_offset: i32,
    /// UE4 world-composition tile info file offset.
    pub world_tile_info_data_offset: i32,
    /// UE4 chunk identifiers this package belongs to.
    pub chunk_ids: Vec<i32>,
    /// UE4 preload-dependency count.
    pub preload_dependency_count: i32,
    /// UE4 preload-dependency file offset.
    pub preload_dependency_offset: i32,
}

impl Summary {
    /// `true` if `legacy_version` indicates a UE4/UE5 header.
    pub fn is_ue4(&self) -> bool {
        self.legacy_version < 0
    }

    /// Unpack a pre-UE4 packed `licensee<<16 | version` int32.
    pub fn unpack_legacy_version(packed: i32) -> (i32, i32) {
        let packed = packed as u32;
        let version = (packed & 0xFFFF) as i32;
        let licensee = ((packed >> 16) & 0xFFFF) as i32;
        (version, licensee)
    }

    /// Approximates the header-size invariant (header size ≥ every table offset +
    /// sizeof(table)) without per-table sizes: every present table offset must not exceed the
    /// declared header size. Catches offsets that start past the header entirely, but not an
    /// offset that starts inside the header and overruns it.
    pub fn header_size_reaches_every_table_offset(&self) -> bool {
        let offsets = [
            self.name_offset,
            self.export_offset,
            self.import_offset,
            self.depends_offset,
            self.import_export_guids_offset,
            self.thumbnail_table_offset,
        ];
        offsets.iter().all(|&offset| offset == 0 || self.header_size >= offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_packed_pre_ue4_version() {
        // version=68, licensee=0 packed as the low word.
        let (version, licensee) = Summary::unpack_legacy_version(68);
        assert_eq!(version, 68);
        assert_eq!(licensee, 0);
    }

    #[test]
    fn unpacks_packed_pre_ue4_version_with_licensee() {
        let packed = (25i32 << 16) | 128;
        let (version, licensee) = Summary::unpack_legacy_version(packed);
        assert_eq!(version, 128);
        assert_eq!(licensee, 25);
    }

    #[test]
    fn is_ue4_detects_negative_legacy_version() {
        let mut summary = Summary::default();
        summary.legacy_version = -6;
        assert!(summary.is_ue4());
        summary.legacy_version = 68;
        assert!(!summary.is_ue4());
    }

    #[test]
    fn header_size_reaches_every_table_offset_flags_offset_past_header() {
        let mut summary = Summary::default();
        summary.header_size = 64;
        summary.name_offset = 32;
        summary.export_offset = 48;
        assert!(summary.header_size_reaches_every_table_offset());

        summary.export_offset = 96;
        assert!(!summary.header_size_reaches_every_table_offset());
    }
}
