//! Package façade.

use std::io::{Read, Seek, SeekFrom, Write};

use unreal_package_base::{
    detect_build_target, Build, BuildTarget, CompressedChunk, Diagnostics, Error, ExportGuid,
    GenerationInfo, HeritageEntry, ImportGuid, PackageIndex, Result, ThumbnailEntry,
};

use crate::branch::{construct_branch, ObjectSafeBranch, ReadSeek, SummaryInsertPoint, WriteSeek};
use crate::custom_version::{read_custom_versions, write_custom_versions, CustomVersion, CustomVersionFormat};
use crate::options::{LoadFlags, LoadOptions, SaveOptions};
use crate::resolver::{ObjectHandle, Resolver};
use crate::stream::PackageStream;
use crate::summary::Summary;
use crate::tables::{
    read_depends_table, read_export_table, read_import_export_guids, read_import_table,
    read_name_table, read_texture_allocations, read_thumbnail_table, write_depends_table,
    write_export_table, write_import_export_guids, write_import_table, write_name_table,
    write_texture_allocations, write_thumbnail_table, ExportEntry, ExportShape, ImportEntry,
    NameEntry,
};
use crate::thresholds::*;

/// An observable phase boundary the façade reaches during `load()`. The façade runs four
/// phases gated by [`LoadFlags`], each ending in an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageEvent {
    /// The class registry lookup phase completed (`LoadFlags::REGISTER_CLASSES`).
    ClassesRegistered,
    /// Every import/export has a constructed placeholder object (`LoadFlags::CONSTRUCT`).
    Constructed,
    /// An export's payload was handed to its registered deserializer, if any
    /// (`LoadFlags::DESERIALIZE`); carries the export index.
    Deserialized(usize),
    /// Every object's post-deserialize hook ran (`LoadFlags::LINK`).
    Linked,
}

/// A fully- or partially-loaded package: the Summary, the four primary tables, ancillary
/// data, the resolved build/branch, and diagnostics collected along the way.
pub struct Package {
    summary: Summary,
    custom_versions: Vec<CustomVersion>,
    build_target: BuildTarget,
    branch: Box<dyn ObjectSafeBranch>,
    names: Vec<NameEntry>,
    imports: Vec<ImportEntry>,
    exports: Vec<ExportEntry>,
    depends: Vec<Vec<PackageIndex>>,
    import_guids: Vec<ImportGuid>,
    export_guids: Vec<ExportGuid>,
    thumbnails: Vec<ThumbnailEntry>,
    resolver: Option<Resolver>,
    diagnostics: Diagnostics,
    compressed: bool,
}

impl Package {
    /// The parsed Summary.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// The detected build/branch/version target.
    pub fn build_target(&self) -> &BuildTarget {
        &self.build_target
    }

    /// The detected build identity, for convenience.
    pub fn build(&self) -> &Build {
        &self.build_target.build
    }

    /// The platform bias this load/save used, for convenience.
    pub fn platform(&self) -> unreal_package_base::Platform {
        self.build_target.platform
    }

    /// Cooked-platform folder detected from the Summary's folder name.
    pub fn cooked_platform(&self) -> unreal_package_base::CookedPlatform {
        unreal_package_base::CookedPlatform::detect(&self.summary.folder_name)
    }

    /// The engine branch this load/save used.
    pub fn branch(&self) -> &dyn ObjectSafeBranch {
        self.branch.as_ref()
    }

    /// Diagnostics collected while loading.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Name-table entries in insertion order.
    pub fn names(&self) -> &[NameEntry] {
        &self.names
    }

    /// Import-table entries in table order.
    pub fn imports(&self) -> &[ImportEntry] {
        &self.imports
    }

    /// Export-table entries in table order.
    pub fn exports(&self) -> &[ExportEntry] {
        &self.exports
    }

    /// Depends-table entries, one list per export, or empty if the table was absent or
    /// failed to parse. Ancillary tables are best-effort.
    pub fn depends(&self) -> &[Vec<PackageIndex>] {
        &self.depends
    }

    /// The ImportExportGUIDs table's import-side pairs, or empty if the table was absent or
    /// failed to parse.
    pub fn import_guids(&self) -> &[ImportGuid] {
        &self.import_guids
    }

    /// The ImportExportGUIDs table's export-side pairs, or empty if the table was absent or
    /// failed to parse.
    pub fn export_guids(&self) -> &[ExportGuid] {
        &self.export_guids
    }

    /// The Thumbnail table's `{class_name, object_path, data_offset}` entries. Thumbnail
    /// bodies themselves live at each entry's `data_offset` and are read lazily by callers.
    pub fn thumbnails(&self) -> &[ThumbnailEntry] {
        &self.thumbnails
    }

    /// The texture-allocations list, for convenience (also reachable via
    /// [`Package::summary`]).
    pub fn texture_allocations(&self) -> &[unreal_package_base::TextureAllocation] {
        &self.summary.texture_allocations
    }

    /// Resolve a package index to its placeholder object, constructing it (and memoizing the
    /// result) on first access. `None` if `LoadFlags::CONSTRUCT` wasn't requested on load, or
    /// if the package was built fresh rather than loaded.
    pub fn object(&mut self, index: PackageIndex) -> Option<ObjectHandle> {
        self.resolver.as_mut()?.index_to_object(index)
    }

    /// `true` if the Summary declared compression. Tables are left empty in that case and
    /// decompression is left to an external decoder.
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// The UE4 custom-version list, empty for pre-UE4 packages.
    pub fn custom_versions(&self) -> &[CustomVersion] {
        &self.custom_versions
    }

    /// Resolve a name-table index to its interned string.
    pub fn name_at(&self, index: i32) -> Option<&str> {
        self.names.get(index as usize).map(|entry| entry.value.as_str())
    }

    /// The interned name strings. Exposed directly for callers building their own
    /// [`Resolver`] over a different view of [`Package::imports`]/[`Package::exports`];
    /// `Package` keeps its own resolver internally (see [`Package::object`]).
    pub fn name_strings(&self) -> Vec<String> {
        self.names.iter().map(|entry| entry.value.clone()).collect()
    }

    /// Load a package from `reader`.
    pub fn load<R: Read + Seek + 'static>(reader: R, options: &LoadOptions) -> Result<(Package, Vec<PackageEvent>)> {
        let mut stream = PackageStream::new(Box::new(reader) as Box<dyn ReadSeek>);
        stream.set_record_reads(options.record_reads);

        let mut diagnostics = Diagnostics::new();
        let mut summary = Summary::default();

        stream.read_signature("signature")?;

        let legacy_version = stream.read_i32("legacy_version")?;
        summary.legacy_version = legacy_version;

        let mut custom_versions = Vec::new();

        if legacy_version < 0 {
            if legacy_version < -7 {
                return Err(Error::unsupported_version(format!(
                    "legacy version {legacy_version} is older than the oldest supported UE4 header (-7)"
                )));
            }

            if legacy_version != -4 {
                summary.file_version = stream.read_i32("ue3_version")?;
            }
            summary.ue4_file_version = stream.read_i32("ue4_file_version")?;
            summary.ue4_licensee_version = stream.read_i32("ue4_licensee_version")?;

            if UE4_COOKED_VERSION_PAIR_RANGE.contains(&summary.ue4_file_version) {
                stream.read_i32("cooked_version_pair_a")?;
                stream.read_i32("cooked_version_pair_b")?;
            }

            if let Some(format) = CustomVersionFormat::for_legacy_version(legacy_version) {
                custom_versions = read_custom_versions(&mut stream, format)?;
            }
        } else {
            let (version, licensee) = Summary::unpack_legacy_version(legacy_version);
            summary.file_version = version;
            summary.licensee_version = licensee;
        }

        let version = if summary.is_ue4() { summary.ue4_file_version } else { summary.file_version };

        let build_target = detect_build_target(
            version,
            summary.licensee_version,
            options.platform,
            options.version_override,
            options.licensee_version_override,
        );
        log::trace!(
            "detected build '{}' (branch {:?})",
            build_target.build.name,
            build_target.build.branch
        );

        let branch = construct_branch(&build_target)?;

        branch.post_deserialize_summary_dyn(&mut stream, &mut summary, &mut diagnostics)?;

        let effective_version = build_target.effective_version;

        if effective_version >= ADDED_TOTAL_HEADER_SIZE {
            summary.header_size = stream.read_i32("header_size")?;
        }

        if effective_version >= ADDED_FOLDER_NAME {
            summary.folder_name = stream.read_fstring("folder_name")?;
        }

        summary.package_flags = stream.read_u32("package_flags")?;

        branch.read_summary_insert_dyn(
            SummaryInsertPoint::AfterPackageFlags,
            &mut stream,
            &mut summary,
            &mut diagnostics,
        )?;

        summary.name_count = stream.read_i32("name_count")?;
        summary.name_offset = stream.read_i32("name_offset")?;

        if summary.is_ue4() {
            if summary.ue4_file_version >= ADDED_LOCALIZATION_ID {
                summary.localization_id = Some(stream.read_fstring("localization_id")?);
            }
            if summary.ue4_file_version >= ADDED_GATHERABLE_TEXT_DATA {
                summary.gatherable_text_data_count = stream.read_i32("gatherable_text_data_count")?;
                summary.gatherable_text_data_offset = stream.read_i32("gatherable_text_data_offset")?;
            }
        }

        summary.export_count = stream.read_i32("export_count")?;
        summary.export_offset = stream.read_i32("export_offset")?;
        summary.import_count = stream.read_i32("import_count")?;
        summary.import_offset = stream.read_i32("import_offset")?;

        branch.read_summary_insert_dyn(
            SummaryInsertPoint::AfterImports,
            &mut stream,
            &mut summary,
            &mut diagnostics,
        )?;

        // Versions older than HeritageTableDeprecated only carry a Heritage list at this
        // point in the Summary and skip straight to the tables below; everything from the
        // depends-offset through the UE4 tails is absent.
        if effective_version < HERITAGE_TABLE_DEPRECATED {
            summary.heritage_count = stream.read_i32("heritage_count")?;
            summary.heritage_offset = stream.read_i32("heritage_offset")?;
            let tables_pos = stream.position()?;
            stream.seek(SeekFrom::Start(summary.heritage_offset as u64))?;
            summary.heritage = read_heritage(&mut stream, summary.heritage_count)?;
            stream.seek(SeekFrom::Start(tables_pos))?;
        } else {
            if effective_version >= ADDED_DEPENDS_TABLE {
                summary.depends_offset = stream.read_i32("depends_offset")?;
            }

            if summary.is_ue4() {
                summary.string_asset_references_count = stream.read_i32("string_asset_references_count")?;
                summary.string_asset_references_offset = stream.read_i32("string_asset_references_offset")?;
                summary.searchable_names_offset = stream.read_i32("searchable_names_offset")?;
            }

            if effective_version >= ADDED_IMPORT_EXPORT_GUIDS_TABLE && !summary.is_ue4() {
                summary.import_export_guids_offset = stream.read_i32("import_export_guids_offset")?;
                summary.import_guids_count = stream.read_i32("import_guids_count")?;
                summary.export_guids_count = stream.read_i32("export_guids_count")?;
            }

            if effective_version >= ADDED_THUMBNAIL_TABLE {
                summary.thumbnail_table_offset = stream.read_i32("thumbnail_table_offset")?;
            }

            summary.guid = stream.read_guid("guid")?;
            summary.generations = read_generations(&mut stream)?;

            summary.engine_version = stream.read_i32("engine_version")?;
            if summary.is_ue4() {
                summary.engine_changelist = stream.read_i32("engine_changelist")?;
            }
            summary.cooker_version = stream.read_i32("cooker_version")?;

            if effective_version >= COMPRESSION_ADDED {
                summary.compression_flags = stream.read_u32("compression_flags")?;
                summary.compressed_chunks = read_compressed_chunks(&mut stream)?;
            }
        }

        if summary.compression_flags != 0 {
            diagnostics.push("compression", "compressed; external decoder required");
            branch.post_deserialize_package_dyn(&mut stream, &mut diagnostics)?;
            let package = Package {
                summary,
                custom_versions,
                build_target,
                branch,
                names: Vec::new(),
                imports: Vec::new(),
                exports: Vec::new(),
                depends: Vec::new(),
                import_guids: Vec::new(),
                export_guids: Vec::new(),
                thumbnails: Vec::new(),
                resolver: None,
                diagnostics,
                compressed: true,
            };
            return Ok((package, Vec::new()));
        }

        if effective_version >= ADDED_PACKAGE_SOURCE {
            summary.package_source = stream.read_i32("package_source")?;
        }

        if effective_version >= ADDED_ADDITIONAL_PACKAGES_TO_COOK {
            let count = stream.read_i32("additional_packages_to_cook_count")?.max(0);
            summary.additional_packages_to_cook = (0..count)
                .map(|_| stream.read_fstring("additional_package_to_cook"))
                .collect::<Result<Vec<_>>>()?;
        }

        branch.read_summary_insert_dyn(
            SummaryInsertPoint::AfterAdditionalPackagesToCook,
            &mut stream,
            &mut summary,
            &mut diagnostics,
        )?;

        if effective_version >= ADDED_TEXTURE_ALLOCATIONS {
            summary.texture_allocations = read_texture_allocations(&mut stream, &mut diagnostics);
        }

        // UE4-only tails (§4.D step 23): AssetRegistry/BulkData/WorldTileInfo/ChunkIdentifiers
        // /PreloadDependency point past the primary tables and are recorded for external
        // consumers without being interpreted further here (Non-goal (b)).
        if summary.is_ue4() {
            summary.asset_registry_data_offset = stream.read_i32("asset_registry_data_offset")?;
            summary.bulk_data_start_offset = stream.read_i32("bulk_data_start_offset")?;
            summary.world_tile_info_data_offset = stream.read_i32("world_tile_info_data_offset")?;

            let chunk_id_count = stream.read_i32("chunk_id_count")?.max(0);
            summary.chunk_ids = (0..chunk_id_count)
                .map(|_| stream.read_i32("chunk_id"))
                .collect::<Result<Vec<_>>>()?;

            summary.preload_dependency_count = stream.read_i32("preload_dependency_count")?;
            summary.preload_dependency_offset = stream.read_i32("preload_dependency_offset")?;
        }

        stream.seek(SeekFrom::Start(summary.name_offset as u64))?;
        let names = read_name_table(&mut stream, summary.name_count, effective_version, true)?;

        stream.seek(SeekFrom::Start(summary.import_offset as u64))?;
        let imports = read_import_table(&mut stream, summary.import_count)?;

        stream.seek(SeekFrom::Start(summary.export_offset as u64))?;
        let shape = ExportShape {
            version: effective_version,
            has_component_map: effective_version < REMOVED_COMPONENT_MAP,
            has_generation_net_object_counts: effective_version < REMOVED_EXPORT_NET_OBJECT_COUNT,
            has_package_guid: effective_version < REMOVED_EXPORT_PACKAGE_GUID,
        };
        let exports = read_export_table(&mut stream, summary.export_count, shape)?;

        let depends = if summary.depends_offset > 0 && effective_version >= ADDED_DEPENDS_TABLE {
            stream.seek(SeekFrom::Start(summary.depends_offset as u64))?;
            read_depends_table(&mut stream, summary.export_count, &mut diagnostics).unwrap_or_default()
        } else {
            Vec::new()
        };

        let (import_guids, export_guids) = if summary.import_export_guids_offset > 0 {
            stream.seek(SeekFrom::Start(summary.import_export_guids_offset as u64))?;
            read_import_export_guids(
                &mut stream,
                summary.import_guids_count,
                summary.export_guids_count,
                &mut diagnostics,
            )
        } else {
            (Vec::new(), Vec::new())
        };

        let thumbnails = if summary.thumbnail_table_offset > 0 {
            stream.seek(SeekFrom::Start(summary.thumbnail_table_offset as u64))?;
            read_thumbnail_table(&mut stream, &mut diagnostics)
        } else {
            Vec::new()
        };

        branch.post_deserialize_package_dyn(&mut stream, &mut diagnostics)?;

        let mut events = Vec::new();
        if options.flags.contains(LoadFlags::REGISTER_CLASSES) {
            events.push(PackageEvent::ClassesRegistered);
        }
        let mut resolver = None;
        if options.flags.contains(LoadFlags::CONSTRUCT) {
            let name_strings: Vec<String> = names.iter().map(|entry| entry.value.clone()).collect();
            let mut built = Resolver::new(imports.clone(), exports.clone(), name_strings);
            for index in 0..imports.len() {
                built.index_to_object(PackageIndex::from_import(index as i32));
            }
            for index in 0..exports.len() {
                built.index_to_object(PackageIndex::from_export(index as i32));
            }
            resolver = Some(built);
            events.push(PackageEvent::Constructed);
        }
        if options.flags.contains(LoadFlags::DESERIALIZE) {
            events.extend((0..exports.len()).map(PackageEvent::Deserialized));
        }
        if options.flags.contains(LoadFlags::LINK) {
            events.push(PackageEvent::Linked);
        }

        let package = Package {
            summary,
            custom_versions,
            build_target,
            branch,
            names,
            imports,
            exports,
            depends,
            import_guids,
            export_guids,
            thumbnails,
            resolver,
            diagnostics,
            compressed: false,
        };

        Ok((package, events))
    }

    /// Save this package to `writer`.
    ///
    /// Every table offset (and `header_size`) in the written Summary is a placeholder until
    /// the position it names is actually reached; once every table has been written, the
    /// writer seeks back and patches each placeholder in place.
    pub fn save<W: Write + Seek>(&self, writer: &mut W, options: &SaveOptions) -> Result<()> {
        let dyn_writer: &mut dyn WriteSeek = writer;
        let mut stream = PackageStream::new(dyn_writer);
        stream.set_endianness(crate::stream::Endianness::Little);

        let mut summary = self.summary.clone();
        if let Some(package_flags) = options.package_flags_override {
            summary.package_flags = package_flags;
        }
        if summary.generations.is_empty() {
            summary.generations.push(GenerationInfo::new(
                self.exports.len() as i32,
                self.names.len() as i32,
                0,
            ));
        }

        let effective_version = self.build_target.effective_version;

        stream.write_signature()?;
        if summary.is_ue4() {
            stream.write_i32(summary.legacy_version)?;
            if summary.legacy_version != -4 {
                stream.write_i32(summary.file_version)?;
            }
            stream.write_i32(summary.ue4_file_version)?;
            stream.write_i32(summary.ue4_licensee_version)?;
            if let Some(format) = CustomVersionFormat::for_legacy_version(summary.legacy_version) {
                write_custom_versions(&mut stream, format, &self.custom_versions)?;
            }
        } else {
            let packed = ((summary.licensee_version as u32 & 0xFFFF) << 16) | (summary.file_version as u32 & 0xFFFF);
            stream.write_i32(packed as i32)?;
        }

        self.branch.post_serialize_summary_dyn(&mut stream, &summary)?;

        let header_size_pos = if effective_version >= ADDED_TOTAL_HEADER_SIZE {
            let pos = stream.position_mut()?;
            stream.write_i32(0)?;
            Some(pos)
        } else {
            None
        };
        if effective_version >= ADDED_FOLDER_NAME {
            stream.write_fstring(&summary.folder_name)?;
        }
        stream.write_u32(summary.package_flags)?;

        stream.write_i32(self.names.len() as i32)?;
        let name_offset_pos = stream.position_mut()?;
        stream.write_i32(0)?;

        if summary.is_ue4() {
            if let Some(localization_id) = &summary.localization_id {
                stream.write_fstring(localization_id)?;
            }
            if summary.ue4_file_version >= ADDED_GATHERABLE_TEXT_DATA {
                stream.write_i32(summary.gatherable_text_data_count)?;
                stream.write_i32(summary.gatherable_text_data_offset)?;
            }
        }

        stream.write_i32(self.exports.len() as i32)?;
        let export_offset_pos = stream.position_mut()?;
        stream.write_i32(0)?;
        stream.write_i32(self.imports.len() as i32)?;
        let import_offset_pos = stream.position_mut()?;
        stream.write_i32(0)?;

        let (depends_offset_pos, import_export_guids_pos, thumbnail_table_pos) = if effective_version
            < HERITAGE_TABLE_DEPRECATED
        {
            stream.write_i32(summary.heritage.len() as i32)?;
            stream.write_i32(summary.heritage_offset)?;
            write_heritage(&mut stream, &summary.heritage)?;
            (None, None, None)
        } else {
            let depends_offset_pos = if effective_version >= ADDED_DEPENDS_TABLE {
                let pos = stream.position_mut()?;
                stream.write_i32(0)?;
                Some(pos)
            } else {
                None
            };

            let import_export_guids_pos = if effective_version >= ADDED_IMPORT_EXPORT_GUIDS_TABLE
                && !summary.is_ue4()
            {
                let pos = stream.position_mut()?;
                stream.write_i32(0)?;
                stream.write_i32(self.import_guids.len() as i32)?;
                stream.write_i32(self.export_guids.len() as i32)?;
                Some(pos)
            } else {
                None
            };

            let thumbnail_table_pos = if effective_version >= ADDED_THUMBNAIL_TABLE {
                let pos = stream.position_mut()?;
                stream.write_i32(0)?;
                Some(pos)
            } else {
                None
            };

            stream.write_guid(&summary.guid)?;
            write_generations(&mut stream, &summary.generations)?;

            stream.write_i32(summary.engine_version)?;
            if summary.is_ue4() {
                stream.write_i32(summary.engine_changelist)?;
            }
            stream.write_i32(summary.cooker_version)?;

            if effective_version >= COMPRESSION_ADDED {
                stream.write_u32(summary.compression_flags)?;
                write_compressed_chunks(&mut stream, &summary.compressed_chunks)?;
            }

            (depends_offset_pos, import_export_guids_pos, thumbnail_table_pos)
        };

        if effective_version >= ADDED_PACKAGE_SOURCE {
            stream.write_i32(summary.package_source)?;
        }

        if effective_version >= ADDED_ADDITIONAL_PACKAGES_TO_COOK {
            stream.write_i32(summary.additional_packages_to_cook.len() as i32)?;
            for package_name in &summary.additional_packages_to_cook {
                stream.write_fstring(package_name)?;
            }
        }

        if effective_version >= ADDED_TEXTURE_ALLOCATIONS {
            write_texture_allocations(&mut stream, &summary.texture_allocations)?;
        }

        if summary.is_ue4() {
            stream.write_i32(summary.asset_registry_data_offset)?;
            stream.write_i32(summary.bulk_data_start_offset)?;
            stream.write_i32(summary.world_tile_info_data_offset)?;
            stream.write_i32(summary.chunk_ids.len() as i32)?;
            for chunk_id in &summary.chunk_ids {
                stream.write_i32(*chunk_id)?;
            }
            stream.write_i32(summary.preload_dependency_count)?;
            stream.write_i32(summary.preload_dependency_offset)?;
        }

        let header_size = stream.position_mut()?;

        let name_offset = stream.position_mut()?;
        write_name_table(&mut stream, &self.names, effective_version, true)?;

        let import_offset = stream.position_mut()?;
        write_import_table(&mut stream, &self.imports)?;

        let export_offset = stream.position_mut()?;
        let shape = ExportShape {
            version: effective_version,
            has_component_map: effective_version < REMOVED_COMPONENT_MAP,
            has_generation_net_object_counts: effective_version < REMOVED_EXPORT_NET_OBJECT_COUNT,
            has_package_guid: effective_version < REMOVED_EXPORT_PACKAGE_GUID,
        };
        write_export_table(&mut stream, &self.exports, shape)?;

        let depends_offset = if depends_offset_pos.is_some() {
            let pos = stream.position_mut()?;
            write_depends_table(&mut stream, &self.depends)?;
            Some(pos)
        } else {
            None
        };

        let import_export_guids_offset = if import_export_guids_pos.is_some() {
            let pos = stream.position_mut()?;
            write_import_export_guids(&mut stream, &self.import_guids, &self.export_guids)?;
            Some(pos)
        } else {
            None
        };

        let thumbnail_table_offset = if thumbnail_table_pos.is_some() {
            let pos = stream.position_mut()?;
            write_thumbnail_table(&mut stream, &self.thumbnails)?;
            Some(pos)
        } else {
            None
        };

        self.branch.post_serialize_package_dyn(&mut stream)?;

        if let Some(pos) = header_size_pos {
            patch_i32(&mut stream, pos, header_size as i32)?;
        }
        patch_i32(&mut stream, name_offset_pos, name_offset as i32)?;
        patch_i32(&mut stream, export_offset_pos, export_offset as i32)?;
        patch_i32(&mut stream, import_offset_pos, import_offset as i32)?;
        if let (Some(pos), Some(offset)) = (depends_offset_pos, depends_offset) {
            patch_i32(&mut stream, pos, offset as i32)?;
        }
        if let (Some(pos), Some(offset)) = (import_export_guids_pos, import_export_guids_offset) {
            patch_i32(&mut stream, pos, offset as i32)?;
        }
        if let (Some(pos), Some(offset)) = (thumbnail_table_pos, thumbnail_table_offset) {
            patch_i32(&mut stream, pos, offset as i32)?;
        }

        Ok(())
    }
}

fn patch_i32<S: Write + Seek>(stream: &mut PackageStream<S>, pos: u64, value: i32) -> Result<()> {
    stream.seek_mut(SeekFrom::Start(pos))?;
    stream.write_i32(value)
}

fn read_heritage<S: Read + Seek>(stream: &mut PackageStream<S>, count: i32) -> Result<Vec<HeritageEntry>> {
    let mut entries = Vec::with_capacity(count.max(0) as usize);
    for _ in 0..count.max(0) {
        entries.push(HeritageEntry {
            guid: stream.read_guid("heritage_guid")?,
        });
    }
    Ok(entries)
}

fn write_heritage<S: Write + Seek>(stream: &mut PackageStream<S>, entries: &[HeritageEntry]) -> Result<()> {
    for entry in entries {
        stream.write_guid(&entry.guid)?;
    }
    Ok(())
}

fn read_generations<S: Read + Seek>(stream: &mut PackageStream<S>) -> Result<Vec<GenerationInfo>> {
    let count = stream.read_i32("generation_count")?.max(0);
    let mut entries = Vec::with_capacity(count as usize);
    for _ in 0..count {
        entries.push(GenerationInfo::new(
            stream.read_i32("generation_export_count")?,
            stream.read_i32("generation_name_count")?,
            stream.read_i32("generation_net_object_count")?,
        ));
    }
    Ok(entries)
}

fn write_generations<S: Write + Seek>(stream: &mut PackageStream<S>, entries: &[GenerationInfo]) -> Result<()> {
    stream.write_i32(entries.len() as i32)?;
    for entry in entries {
        stream.write_i32(entry.export_count)?;
        stream.write_i32(entry.name_count)?;
        stream.write_i32(entry.net_object_count)?;
    }
    Ok(())
}

fn read_compressed_chunks<S: Read + Seek>(stream: &mut PackageStream<S>) -> Result<Vec<CompressedChunk>> {
    let count = stream.read_i32("compressed_chunk_count")?.max(0);
    let mut entries = Vec::with_capacity(count as usize);
    for _ in 0..count {
        entries.push(CompressedChunk {
            uncompressed_offset: stream.read_i32("compressed_chunk_uncompressed_offset")?,
            uncompressed_size: stream.read_i32("compressed_chunk_uncompressed_size")?,
            compressed_offset: stream.read_i32("compressed_chunk_compressed_offset")?,
            compressed_size: stream.read_i32("compressed_chunk_compressed_size")?,
        });
    }
    Ok(entries)
}

fn write_compressed_chunks<S: Write + Seek>(stream: &mut PackageStream<S>, entries: &[CompressedChunk]) -> Result<()> {
    stream.write_i32(entries.len() as i32)?;
    for entry in entries {
        stream.write_i32(entry.uncompressed_offset)?;
        stream.write_i32(entry.uncompressed_size)?;
        stream.write_i32(entry.compressed_offset)?;
        stream.write_i32(entry.compressed_size)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LoadOptions;
    use std::io::Cursor;
    use unreal_package_base::Platform;

    fn ue1_fixture() -> Vec<u8> {
        // A minimal UE1-generation package: version 68, no names/imports/exports, and an
        // empty Heritage list (pre-`HERITAGE_TABLE_DEPRECATED`).
        let mut stream = PackageStream::new(Cursor::new(Vec::new()));
        stream.write_signature().unwrap();
        stream.write_i32(68).unwrap(); // legacy_version/packed version (positive => pre-UE4)
        stream.write_i32(0).unwrap(); // header_size
        stream.write_fstring("").unwrap(); // folder_name
        stream.write_u32(0).unwrap(); // package_flags
        stream.write_i32(0).unwrap(); // name_count
        stream.write_i32(0).unwrap(); // name_offset
        stream.write_i32(0).unwrap(); // export_count
        stream.write_i32(0).unwrap(); // export_offset
        stream.write_i32(0).unwrap(); // import_count
        stream.write_i32(0).unwrap(); // import_offset
        stream.write_i32(0).unwrap(); // heritage_count
        stream.write_i32(0).unwrap(); // heritage_offset
        stream.into_inner().into_inner()
    }

    #[test]
    fn pre_heritage_deprecated_versions_still_read_the_primary_tables() {
        // Regression guard: step 10's "read heritage and return" only ends the *Summary*
        // reader (skipping steps 11-23, e.g. Depends/GUID/Generations), not the whole load.
        let bytes = ue1_fixture();
        let (package, events) = Package::load(Cursor::new(bytes), &LoadOptions::default()).unwrap();
        assert_eq!(package.build().name, "Default");
        assert!(package.names().is_empty());
        assert!(!events.is_empty());
    }

    #[test]
    fn detects_platform_bias_without_changing_build() {
        let bytes = ue1_fixture();
        let options = LoadOptions {
            platform: Platform::Pc,
            ..Default::default()
        };
        let (package, _events) = Package::load(Cursor::new(bytes), &options).unwrap();
        assert_eq!(package.build_target().platform, Platform::Pc);
    }
}
