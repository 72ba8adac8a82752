//! Integration tests for version-detection and table-parsing edge cases across the engine
//! generations this crate supports.
//!
//! Each fixture is assembled with [`PackageStream`]'s own write primitives rather than raw
//! byte literals, so a fixture is exercising the same encoding the reader decodes.

use std::io::{Cursor, SeekFrom};

use unreal_helpers::Guid;
use unreal_package::{
    CustomVersion, CustomVersionFormat, LoadOptions, NameIndex, Package, PackageIndex, PackageStream,
};

fn empty_fixture_writer() -> PackageStream<Cursor<Vec<u8>>> {
    PackageStream::new(Cursor::new(Vec::new()))
}

/// A synthetic UE1 package with one name, one import and one export, whose
/// load must populate the primary tables (not stop at the pre-Heritage-deprecated return).
#[test]
fn ue1_package_populates_primary_tables_and_resolves_outer() {
    let mut w = empty_fixture_writer();
    w.write_signature().unwrap();
    w.write_i32(68).unwrap(); // legacy_version: version=68, licensee=0

    w.write_i32(0).unwrap(); // header_size, unused by the reader
    w.write_fstring("").unwrap(); // folder_name
    w.write_u32(0).unwrap(); // package_flags

    let name_count_pos = w.position_mut().unwrap();
    w.write_i32(0).unwrap(); // name_count (patched)
    let name_offset_pos = w.position_mut().unwrap();
    w.write_i32(0).unwrap(); // name_offset (patched)

    let export_count_pos = w.position_mut().unwrap();
    w.write_i32(0).unwrap();
    let export_offset_pos = w.position_mut().unwrap();
    w.write_i32(0).unwrap();

    let import_count_pos = w.position_mut().unwrap();
    w.write_i32(0).unwrap();
    let import_offset_pos = w.position_mut().unwrap();
    w.write_i32(0).unwrap();

    w.write_i32(1).unwrap(); // heritage_count
    let heritage_offset_pos = w.position_mut().unwrap();
    w.write_i32(0).unwrap(); // heritage_offset (patched)

    // Names: "Core" (0), "Object" (1), "MyObject" (2).
    let name_offset = w.position_mut().unwrap();
    for value in ["Core", "Object", "MyObject"] {
        w.write_fstring(value).unwrap();
        w.write_u32(0).unwrap(); // name_flags, pre-OBJECT_FLAGS_64_BIT width
    }

    // Imports: Core.Object.
    let import_offset = w.position_mut().unwrap();
    w.write_name_index(&NameIndex::new(0, 0)).unwrap(); // class_package "Core"
    w.write_name_index(&NameIndex::new(1, 0)).unwrap(); // class_name "Object"
    w.write_package_index(&PackageIndex::NONE).unwrap(); // outer_index
    w.write_name_index(&NameIndex::new(0, 0)).unwrap(); // object_name "Core"

    // Exports: MyObject, class_index=-1 (Imports[0]), top-level.
    let export_offset = w.position_mut().unwrap();
    w.write_package_index(&PackageIndex::from_import(0)).unwrap(); // class_index
    w.write_package_index(&PackageIndex::NONE).unwrap(); // super_index
    w.write_package_index(&PackageIndex::NONE).unwrap(); // outer_index
    w.write_name_index(&NameIndex::new(2, 0)).unwrap(); // object_name "MyObject"
    w.write_u32(0x0007_0000).unwrap(); // object_flags, pre-OBJECT_FLAGS_64_BIT width
    w.write_i32(4).unwrap(); // serial_size
    let header_end = name_offset; // everything up to the Name table is "header"
    w.write_i32(header_end as i32).unwrap(); // serial_offset
    w.write_i32(0).unwrap(); // component_count (version < REMOVED_COMPONENT_MAP)
    w.write_u32(0).unwrap(); // export_flags
    w.write_i32(0).unwrap(); // generation_net_object_count count (version < REMOVED_EXPORT_NET_OBJECT_COUNT)
    w.write_guid(&Guid::new([0; 16])).unwrap(); // package_guid (version < REMOVED_EXPORT_PACKAGE_GUID)
    w.write_u32(0).unwrap(); // package_flags mirror

    // Heritage list: one GUID.
    let heritage_offset = w.position_mut().unwrap();
    w.write_guid(&Guid::new([7; 16])).unwrap();

    for (pos, value) in [
        (name_count_pos, 3),
        (name_offset_pos, name_offset as i32),
        (export_count_pos, 1),
        (export_offset_pos, export_offset as i32),
        (import_count_pos, 1),
        (import_offset_pos, import_offset as i32),
        (heritage_offset_pos, heritage_offset as i32),
    ] {
        w.seek_mut(SeekFrom::Start(pos)).unwrap();
        w.write_i32(value).unwrap();
    }

    let bytes = w.into_inner().into_inner();

    let (mut package, events) = Package::load(Cursor::new(bytes), &LoadOptions::default()).unwrap();

    assert_eq!(package.names()[0].value, "Core");
    assert_eq!(package.exports()[0].object_name.index, 2);
    assert_eq!(package.name_at(2), Some("MyObject"));
    assert_eq!(package.imports()[0].class_name.index, 1);
    assert_eq!(package.name_at(1), Some("Object"));
    assert!(!events.is_empty());

    let object = package
        .object(PackageIndex::from_export(0))
        .expect("export 0 resolves");
    assert!(object.borrow().outer.is_none());
}

/// A compressed UE3 package must stop after the Summary and leave every
/// table empty, reporting the compression through diagnostics rather than an error.
#[test]
fn compressed_package_stops_after_summary() {
    let mut w = empty_fixture_writer();
    w.write_signature().unwrap();
    w.write_i32(500).unwrap(); // legacy_version: version=500, licensee=0 (Default build)

    w.write_i32(0).unwrap(); // header_size
    w.write_fstring("").unwrap(); // folder_name
    w.write_u32(0).unwrap(); // package_flags
    w.write_i32(0).unwrap(); // name_count
    w.write_i32(0).unwrap(); // name_offset
    w.write_i32(0).unwrap(); // export_count
    w.write_i32(0).unwrap(); // export_offset
    w.write_i32(0).unwrap(); // import_count
    w.write_i32(0).unwrap(); // import_offset

    w.write_i32(0).unwrap(); // depends_offset (version >= ADDED_DEPENDS_TABLE)
    w.write_i32(0).unwrap(); // import_export_guids_offset (version >= 415, not UE4)
    w.write_i32(0).unwrap(); // import_guids_count
    w.write_i32(0).unwrap(); // export_guids_count
    w.write_guid(&Guid::new([0; 16])).unwrap(); // guid
    w.write_i32(1).unwrap(); // generations count
    w.write_i32(0).unwrap(); // generation export_count
    w.write_i32(0).unwrap(); // generation name_count
    w.write_i32(0).unwrap(); // generation net_object_count
    w.write_i32(0).unwrap(); // engine_version
    w.write_i32(0).unwrap(); // cooker_version

    w.write_u32(1).unwrap(); // compression_flags != 0
    w.write_i32(1).unwrap(); // compressed chunk count
    w.write_i32(0).unwrap(); // uncompressed_offset
    w.write_i32(100).unwrap(); // uncompressed_size
    w.write_i32(0).unwrap(); // compressed_offset
    w.write_i32(50).unwrap(); // compressed_size

    let bytes = w.into_inner().into_inner();

    let (package, events) = Package::load(Cursor::new(bytes), &LoadOptions::default()).unwrap();

    assert!(package.is_compressed());
    assert!(package.names().is_empty());
    assert!(package.exports().is_empty());
    assert!(package.imports().is_empty());
    assert!(events.is_empty());
    assert!(package
        .diagnostics()
        .events()
        .iter()
        .any(|event| event.tag == "compression" && event.message.contains("external decoder required")));
}

/// `legacy_version=-6` selects the `Optimized` custom-version shape, which
/// consumes exactly 20 bytes per entry, and parsing continues past it without error.
#[test]
fn optimized_custom_version_list_is_twenty_bytes_per_entry_and_parsing_continues() {
    let mut w = empty_fixture_writer();
    w.write_signature().unwrap();
    w.write_i32(-6).unwrap(); // legacy_version selects CustomVersionFormat::Optimized
    w.write_i32(700).unwrap(); // ue3_version (unused once is_ue4())
    w.write_i32(700).unwrap(); // ue4_file_version, outside the cooked-version-pair window
    w.write_i32(0).unwrap(); // ue4_licensee_version

    let versions = vec![
        CustomVersion::new(Guid::new([1; 16]), 7),
        CustomVersion::new(Guid::new([2; 16]), 9),
    ];
    let before = w.position_mut().unwrap();
    unreal_package::custom_version::write_custom_versions(&mut w, CustomVersionFormat::Optimized, &versions)
        .unwrap();
    let after = w.position_mut().unwrap();
    assert_eq!(after - before, 4 + 2 * 20);

    w.write_i32(0).unwrap(); // header_size
    w.write_fstring("").unwrap(); // folder_name
    w.write_u32(0).unwrap(); // package_flags
    w.write_i32(0).unwrap(); // name_count
    w.write_i32(0).unwrap(); // name_offset

    w.write_fstring("en").unwrap(); // localization_id (ue4_file_version >= 516)
    w.write_i32(0).unwrap(); // gatherable_text_data_count
    w.write_i32(0).unwrap(); // gatherable_text_data_offset

    w.write_i32(0).unwrap(); // export_count
    w.write_i32(0).unwrap(); // export_offset
    w.write_i32(0).unwrap(); // import_count
    w.write_i32(0).unwrap(); // import_offset

    w.write_i32(0).unwrap(); // depends_offset
    w.write_i32(0).unwrap(); // string_asset_references_count
    w.write_i32(0).unwrap(); // string_asset_references_offset
    w.write_i32(0).unwrap(); // searchable_names_offset
    w.write_i32(0).unwrap(); // thumbnail_table_offset

    w.write_guid(&Guid::new([0; 16])).unwrap(); // guid
    w.write_i32(0).unwrap(); // generations count
    w.write_i32(0).unwrap(); // engine_version
    w.write_i32(0).unwrap(); // engine_changelist
    w.write_i32(0).unwrap(); // cooker_version

    w.write_u32(0).unwrap(); // compression_flags (no compression)
    w.write_i32(0).unwrap(); // compressed chunk count

    w.write_i32(0).unwrap(); // package_source
    w.write_i32(0).unwrap(); // additional_packages_to_cook count

    w.write_i32(0).unwrap(); // texture_allocations count

    w.write_i32(0).unwrap(); // asset_registry_data_offset
    w.write_i32(0).unwrap(); // bulk_data_start_offset
    w.write_i32(0).unwrap(); // world_tile_info_data_offset
    w.write_i32(0).unwrap(); // chunk_id_count
    w.write_i32(0).unwrap(); // preload_dependency_count
    w.write_i32(0).unwrap(); // preload_dependency_offset

    let bytes = w.into_inner().into_inner();

    let (package, _events) = Package::load(Cursor::new(bytes), &LoadOptions::default()).unwrap();
    assert_eq!(package.custom_versions(), versions.as_slice());
    assert!(package.names().is_empty());
}

/// A depends-offset of `0` on a version past the Depends threshold yields
/// an empty Dependencies list, not an error.
#[test]
fn zero_depends_offset_is_an_empty_list_not_an_error() {
    let mut w = empty_fixture_writer();
    w.write_signature().unwrap();
    w.write_i32(200).unwrap(); // version=200, licensee=0

    w.write_i32(0).unwrap(); // header_size
    w.write_fstring("").unwrap(); // folder_name
    w.write_u32(0).unwrap(); // package_flags
    w.write_i32(0).unwrap(); // name_count
    w.write_i32(0).unwrap(); // name_offset
    w.write_i32(0).unwrap(); // export_count
    w.write_i32(0).unwrap(); // export_offset
    w.write_i32(0).unwrap(); // import_count
    w.write_i32(0).unwrap(); // import_offset

    w.write_i32(0).unwrap(); // depends_offset == 0
    w.write_guid(&Guid::new([0; 16])).unwrap(); // guid
    w.write_i32(0).unwrap(); // generations count
    w.write_i32(0).unwrap(); // engine_version
    w.write_i32(0).unwrap(); // cooker_version
    // version (200) < COMPRESSION_ADDED (334): no compression fields.

    let bytes = w.into_inner().into_inner();

    let (package, _events) = Package::load(Cursor::new(bytes), &LoadOptions::default()).unwrap();
    assert!(package.depends().is_empty());
    assert!(!package.is_compressed());
}

/// `GatherableTextData` present (UE4 file version >= 459) but
/// `LocalizationId` absent (< 516) must read the former offsets and leave the latter unset.
#[test]
fn gatherable_text_data_without_localization_id() {
    let mut w = empty_fixture_writer();
    w.write_signature().unwrap();
    w.write_i32(-6).unwrap(); // legacy_version: UE4 header, Optimized custom versions
    w.write_i32(480).unwrap(); // ue3_version (unused)
    w.write_i32(480).unwrap(); // ue4_file_version: >= 459, < 516
    w.write_i32(0).unwrap(); // ue4_licensee_version

    write_empty_custom_versions(&mut w);

    w.write_i32(0).unwrap(); // header_size
    w.write_fstring("").unwrap(); // folder_name
    w.write_u32(0).unwrap(); // package_flags
    w.write_i32(0).unwrap(); // name_count
    w.write_i32(0).unwrap(); // name_offset

    // No localization_id field: ue4_file_version (480) < ADDED_LOCALIZATION_ID (516).
    w.write_i32(11).unwrap(); // gatherable_text_data_count
    w.write_i32(22).unwrap(); // gatherable_text_data_offset

    w.write_i32(0).unwrap(); // export_count
    w.write_i32(0).unwrap(); // export_offset
    w.write_i32(0).unwrap(); // import_count
    w.write_i32(0).unwrap(); // import_offset

    w.write_i32(0).unwrap(); // depends_offset
    w.write_i32(0).unwrap(); // string_asset_references_count
    w.write_i32(0).unwrap(); // string_asset_references_offset
    w.write_i32(0).unwrap(); // searchable_names_offset
    // thumbnail table: ue4_file_version (480) < ADDED_THUMBNAIL_TABLE (584), field absent.

    w.write_guid(&Guid::new([0; 16])).unwrap(); // guid
    w.write_i32(0).unwrap(); // generations count
    w.write_i32(0).unwrap(); // engine_version
    w.write_i32(0).unwrap(); // engine_changelist
    w.write_i32(0).unwrap(); // cooker_version

    w.write_u32(0).unwrap(); // compression_flags
    w.write_i32(0).unwrap(); // compressed chunk count

    // package_source: 480 < ADDED_PACKAGE_SOURCE (482), field absent.
    // additional_packages_to_cook: 480 < ADDED_ADDITIONAL_PACKAGES_TO_COOK (516), field absent.

    w.write_i32(0).unwrap(); // texture_allocations count (480 >= ADDED_TEXTURE_ALLOCATIONS 434)

    w.write_i32(0).unwrap(); // asset_registry_data_offset
    w.write_i32(0).unwrap(); // bulk_data_start_offset
    w.write_i32(0).unwrap(); // world_tile_info_data_offset
    w.write_i32(0).unwrap(); // chunk_id_count
    w.write_i32(0).unwrap(); // preload_dependency_count
    w.write_i32(0).unwrap(); // preload_dependency_offset

    let bytes = w.into_inner().into_inner();

    let (package, _events) = Package::load(Cursor::new(bytes), &LoadOptions::default()).unwrap();
    assert_eq!(package.summary().gatherable_text_data_count, 11);
    assert_eq!(package.summary().gatherable_text_data_offset, 22);
    assert!(package.summary().localization_id.is_none());
}

fn write_empty_custom_versions(w: &mut PackageStream<Cursor<Vec<u8>>>) {
    w.write_i32(0).unwrap();
}

/// `(version=128, licensee=25)` must resolve to UT2004, which is declared
/// before UT2003's overlapping `(128, 0..=25)` predicate.
#[test]
fn ut2004_wins_the_declaration_order_tie_break() {
    let mut w = empty_fixture_writer();
    w.write_signature().unwrap();
    w.write_i32(pack_legacy_version(128, 25)).unwrap();

    w.write_i32(0).unwrap(); // header_size
    w.write_fstring("").unwrap(); // folder_name
    w.write_u32(0).unwrap(); // package_flags
    w.write_i32(0).unwrap(); // name_count
    w.write_i32(0).unwrap(); // name_offset
    w.write_i32(0).unwrap(); // export_count
    w.write_i32(0).unwrap(); // export_offset
    w.write_i32(0).unwrap(); // import_count
    w.write_i32(0).unwrap(); // import_offset
    // version 128 >= HERITAGE_TABLE_DEPRECATED (70): no Heritage fields, straight to Depends.
    w.write_i32(0).unwrap(); // depends_offset
    w.write_guid(&Guid::new([0; 16])).unwrap();
    w.write_i32(0).unwrap(); // generations count
    w.write_i32(0).unwrap(); // engine_version
    w.write_i32(0).unwrap(); // cooker_version

    let bytes = w.into_inner().into_inner();

    let (package, _events) = Package::load(Cursor::new(bytes), &LoadOptions::default()).unwrap();
    assert_eq!(package.build().name, "Unreal Tournament 2004");
}

fn pack_legacy_version(version: i32, licensee: i32) -> i32 {
    (licensee << 16) | version
}
