//! Named version gates for Summary fields.
//!
//! Each constant is the lowest engine version at which the named field starts appearing.
//! Keeping them named (rather than inlining magic numbers at every gate) is what lets a
//! single version mismatch be diagnosed instead of silently misparsed.

/// First version carrying an explicit `HeaderSize` field.
pub const ADDED_TOTAL_HEADER_SIZE: i32 = 37;
/// First version carrying the package's cooked `FolderName`.
pub const ADDED_FOLDER_NAME: i32 = 41;
/// First version at which the Heritage list is replaced by the Generations list.
pub const HERITAGE_TABLE_DEPRECATED: i32 = 70;
/// First version carrying a Depends table.
pub const ADDED_DEPENDS_TABLE: i32 = 47;
/// First version carrying the ImportExportGUIDs table (UE3 only).
pub const ADDED_IMPORT_EXPORT_GUIDS_TABLE: i32 = 415;
/// First version carrying the Thumbnail table offset.
pub const ADDED_THUMBNAIL_TABLE: i32 = 584;
/// First version carrying compression flags and a compressed-chunk list.
pub const COMPRESSION_ADDED: i32 = 334;
/// First version carrying the `PackageSource` field.
pub const ADDED_PACKAGE_SOURCE: i32 = 482;
/// First version carrying the additional-packages-to-cook list.
pub const ADDED_ADDITIONAL_PACKAGES_TO_COOK: i32 = 516;
/// First version carrying the texture-allocations list.
pub const ADDED_TEXTURE_ALLOCATIONS: i32 = 434;
/// First UE4 file version carrying `GatherableTextData`.
pub const ADDED_GATHERABLE_TEXT_DATA: i32 = 459;
/// First UE4 file version carrying `LocalizationId`.
pub const ADDED_LOCALIZATION_ID: i32 = 516;
/// Object-flags widen from 32 to 64 bits at this version.
pub const OBJECT_FLAGS_64_BIT: i32 = 195;
/// Export archetype-index field first appears at this version.
pub const ADDED_ARCHETYPE: i32 = 142;
/// `serial_size`/`serial_offset` widen from a packed index to a plain `i32` at this version.
pub const SERIAL_SIZE_WIDENED: i32 = 55;
/// Last version whose Export entry still carries a per-export component map; removed at this
/// version and later.
pub const REMOVED_COMPONENT_MAP: i32 = 543;
/// Last version whose Export entry still carries a per-export net-object-count list; removed
/// at this version and later, once that bookkeeping moved to the Generations list entirely.
pub const REMOVED_EXPORT_NET_OBJECT_COUNT: i32 = 543;
/// Last version whose Export entry still carries a per-export package GUID/package-flags
/// mirror; removed at this version and later, alongside the net-object-count list.
pub const REMOVED_EXPORT_PACKAGE_GUID: i32 = 543;

/// UE4 file-version window in which an 8-byte cooked-version pair is skipped before the
/// custom-version list.
pub const UE4_COOKED_VERSION_PAIR_RANGE: std::ops::Range<i32> = 138..142;
