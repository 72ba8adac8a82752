//! ImportExportGUIDs, Thumbnail and Texture-Allocation ancillary tables.
//!
//! All three are best-effort: a parse failure is logged via [`Diagnostics`] and the table
//! comes back empty rather than aborting the load.

use unreal_package_base::{Diagnostics, Error, ExportGuid, ImportGuid, Result, TextureAllocation, ThumbnailEntry};

use crate::stream::PackageStream;

/// Read the ImportExportGUIDs table: `import_count` `(import_index, GUID)` pairs followed by
/// `export_count` `(GUID, export_index)` pairs.
pub fn read_import_export_guids<S: std::io::Read + std::io::Seek>(
    stream: &mut PackageStream<S>,
    import_count: i32,
    export_count: i32,
    diagnostics: &mut Diagnostics,
) -> (Vec<ImportGuid>, Vec<ExportGuid>) {
    let result: Result<(Vec<ImportGuid>, Vec<ExportGuid>)> = (|| {
        let mut imports = Vec::with_capacity(import_count.max(0) as usize);
        for _ in 0..import_count.max(0) {
            imports.push(ImportGuid {
                import_index: stream.read_i32("import_guid_index")?,
                guid: stream.read_guid("import_guid")?,
            });
        }

        let mut exports = Vec::with_capacity(export_count.max(0) as usize);
        for _ in 0..export_count.max(0) {
            exports.push(ExportGuid {
                guid: stream.read_guid("export_guid")?,
                export_index: stream.read_i32("export_guid_index")?,
            });
        }

        Ok((imports, exports))
    })();

    match result {
        Ok(tables) => tables,
        Err(err) => {
            diagnostics.push("import_export_guids", format!("couldn't parse ImportExportGUIDs: {err}"));
            (Vec::new(), Vec::new())
        }
    }
}

/// Write the ImportExportGUIDs table in the shape [`read_import_export_guids`] reads back.
pub fn write_import_export_guids<S: std::io::Write + std::io::Seek>(
    stream: &mut PackageStream<S>,
    imports: &[ImportGuid],
    exports: &[ExportGuid],
) -> Result<()> {
    for entry in imports {
        stream.write_i32(entry.import_index)?;
        stream.write_guid(&entry.guid)?;
    }
    for entry in exports {
        stream.write_guid(&entry.guid)?;
        stream.write_i32(entry.export_index)?;
    }
    Ok(())
}

/// Read the Thumbnail table: a count, then per-entry `{class_name, object_path, data_offset}`.
/// Thumbnail bodies themselves are read lazily by external consumers from `data_offset`.
pub fn read_thumbnail_table<S: std::io::Read + std::io::Seek>(
    stream: &mut PackageStream<S>,
    diagnostics: &mut Diagnostics,
) -> Vec<ThumbnailEntry> {
    let result: Result<Vec<ThumbnailEntry>> = (|| {
        let count = stream.read_i32("thumbnail_count")?;
        if count < 0 {
            return Err(Error::format_error(stream.position()?, "negative thumbnail count"));
        }
        let mut entries = Vec::with_capacity(count as usize);
        for _ in 0..count {
            entries.push(ThumbnailEntry {
                class_name: stream.read_fstring("thumbnail_class_name")?,
                object_path: stream.read_fstring("thumbnail_object_path")?,
                data_offset: stream.read_i32("thumbnail_data_offset")?,
            });
        }
        Ok(entries)
    })();

    match result {
        Ok(entries) => entries,
        Err(err) => {
            diagnostics.push("thumbnails", format!("couldn't parse Thumbnails: {err}"));
            Vec::new()
        }
    }
}

/// Write the Thumbnail table in the shape [`read_thumbnail_table`] reads back.
pub fn write_thumbnail_table<S: std::io::Write + std::io::Seek>(
    stream: &mut PackageStream<S>,
    entries: &[ThumbnailEntry],
) -> Result<()> {
    stream.write_i32(entries.len() as i32)?;
    for entry in entries {
        stream.write_fstring(&entry.class_name)?;
        stream.write_fstring(&entry.object_path)?;
        stream.write_i32(entry.data_offset)?;
    }
    Ok(())
}

/// Read the Texture Allocations table: a count, then per-entry dimensions/format/indices.
pub fn read_texture_allocations<S: std::io::Read + std::io::Seek>(
    stream: &mut PackageStream<S>,
    diagnostics: &mut Diagnostics,
) -> Vec<TextureAllocation> {
    let result: Result<Vec<TextureAllocation>> = (|| {
        let count = stream.read_i32("texture_allocation_count")?;
        if count < 0 {
            return Err(Error::format_error(stream.position()?, "negative texture allocation count"));
        }
        let mut entries = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let size_x = stream.read_i32("texture_allocation_size_x")?;
            let size_y = stream.read_i32("texture_allocation_size_y")?;
            let num_mips = stream.read_i32("texture_allocation_num_mips")?;
            let format = stream.read_i32("texture_allocation_format")?;
            let texture_group = stream.read_i32("texture_allocation_texture_group")?;
            let export_count = stream.read_i32("texture_allocation_export_count")?;
            let mut export_indices = Vec::with_capacity(export_count.max(0) as usize);
            for _ in 0..export_count.max(0) {
                export_indices.push(stream.read_i32("texture_allocation_export_index")?);
            }
            entries.push(TextureAllocation {
                size_x,
                size_y,
                num_mips,
                format,
                texture_group,
                export_indices,
            });
        }
        Ok(entries)
    })();

    match result {
        Ok(entries) => entries,
        Err(err) => {
            diagnostics.push("texture_allocations", format!("couldn't parse Texture Allocations: {err}"));
            Vec::new()
        }
    }
}

/// Write the Texture Allocations table in the shape [`read_texture_allocations`] reads back.
pub fn write_texture_allocations<S: std::io::Write + std::io::Seek>(
    stream: &mut PackageStream<S>,
    entries: &[TextureAllocation],
) -> Result<()> {
    stream.write_i32(entries.len() as i32)?;
    for entry in entries {
        stream.write_i32(entry.size_x)?;
        stream.write_i32(entry.size_y)?;
        stream.write_i32(entry.num_mips)?;
        stream.write_i32(entry.format)?;
        stream.write_i32(entry.texture_group)?;
        stream.write_i32(entry.export_indices.len() as i32)?;
        for index in &entry.export_indices {
            stream.write_i32(*index)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, SeekFrom};
    use unreal_helpers::Guid;

    #[test]
    fn import_export_guids_round_trip() {
        let imports = vec![ImportGuid { import_index: 0, guid: Guid::new([1; 16]) }];
        let exports = vec![ExportGuid { guid: Guid::new([2; 16]), export_index: 0 }];
        let mut stream = PackageStream::new(Cursor::new(Vec::new()));
        write_import_export_guids(&mut stream, &imports, &exports).unwrap();
        stream.seek(SeekFrom::Start(0)).unwrap();
        let mut diagnostics = Diagnostics::new();
        let (read_imports, read_exports) = read_import_export_guids(&mut stream, 1, 1, &mut diagnostics);
        assert_eq!(read_imports, imports);
        assert_eq!(read_exports, exports);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn thumbnail_table_round_trips() {
        let entries = vec![ThumbnailEntry {
            class_name: "Texture2D".into(),
            object_path: "Pkg.MyTexture".into(),
            data_offset: 1024,
        }];
        let mut stream = PackageStream::new(Cursor::new(Vec::new()));
        write_thumbnail_table(&mut stream, &entries).unwrap();
        stream.seek(SeekFrom::Start(0)).unwrap();
        let mut diagnostics = Diagnostics::new();
        let read = read_thumbnail_table(&mut stream, &mut diagnostics);
        assert_eq!(read, entries);
    }

    #[test]
    fn texture_allocations_round_trip() {
        let entries = vec![TextureAllocation {
            size_x: 512,
            size_y: 512,
            num_mips: 9,
            format: 2,
            texture_group: 0,
            export_indices: vec![3, 4],
        }];
        let mut stream = PackageStream::new(Cursor::new(Vec::new()));
        write_texture_allocations(&mut stream, &entries).unwrap();
        stream.seek(SeekFrom::Start(0)).unwrap();
        let mut diagnostics = Diagnostics::new();
        let read = read_texture_allocations(&mut stream, &mut diagnostics);
        assert_eq!(read, entries);
    }
}
