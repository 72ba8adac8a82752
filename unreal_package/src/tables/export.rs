//! Export table.

use unreal_helpers::Guid;
use unreal_package_base::{NameIndex, PackageIndex, Result};

use crate::stream::PackageStream;
use crate::thresholds::{ADDED_ARCHETYPE, OBJECT_FLAGS_64_BIT, SERIAL_SIZE_WIDENED};

/// A single Export-table entry: a descriptor of an object stored in this package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportEntry {
    /// Class of this object, as a package index (`0` means "Class" itself).
    pub class_index: PackageIndex,
    /// Parent struct/state for structural classes (`0` if none).
    pub super_index: PackageIndex,
    /// Owning object, as a package index.
    pub outer_index: PackageIndex,
    /// Object name.
    pub object_name: NameIndex,
    /// Archetype this object was instanced from (`ADDED_ARCHETYPE` and later).
    pub archetype_index: PackageIndex,
    /// Object flags, widened to 64 bits at [`OBJECT_FLAGS_64_BIT`].
    pub object_flags: u64,
    /// Size in bytes of this object's serialized payload.
    pub serial_size: i32,
    /// File offset of this object's serialized payload.
    pub serial_offset: i32,
    /// Export flags bitfield.
    pub export_flags: u32,
    /// Net-object-count list, when present.
    pub generation_net_object_counts: Vec<i32>,
    /// Per-generation package GUID mirror, when present.
    pub package_guid: Option<Guid>,
    /// Per-generation package-flags mirror, when present.
    pub package_flags: Option<u32>,
}

/// Fields governing how an [`ExportEntry`] is shaped for a given version: the per-field
/// version gates for the export record.
#[derive(Debug, Clone, Copy)]
pub struct ExportShape {
    /// Engine version driving the per-field gates below.
    pub version: i32,
    /// `true` once the entry carries a component map (UE3 only); not modeled further since
    /// component objects are out of scope (Non-goal (b)) and the map is read as a raw count.
    pub has_component_map: bool,
    /// `true` once the entry carries a generation net-object-count list.
    pub has_generation_net_object_counts: bool,
    /// `true` once the entry carries a per-export package GUID/flags mirror.
    pub has_package_guid: bool,
}

/// Read `count` Export-table entries starting at the stream's current position.
pub fn read_export_table<S: std::io::Read + std::io::Seek>(
    stream: &mut PackageStream<S>,
    count: i32,
    shape: ExportShape,
) -> Result<Vec<ExportEntry>> {
    let count = count.max(0) as usize;
    let mut exports = Vec::with_capacity(count);
    for _ in 0..count {
        let class_index = stream.read_package_index("export_class_index")?;
        let super_index = stream.read_package_index("export_super_index")?;
        let outer_index = stream.read_package_index("export_outer_index")?;
        let object_name = stream.read_name_index("export_object_name")?;

        let archetype_index = if shape.version >= ADDED_ARCHETYPE {
            stream.read_package_index("export_archetype_index")?
        } else {
            PackageIndex::NONE
        };

        let object_flags = if shape.version >= OBJECT_FLAGS_64_BIT {
            stream.read_u64("export_object_flags")?
        } else {
            stream.read_u32("export_object_flags")? as u64
        };

        let (serial_size, serial_offset) = if shape.version >= SERIAL_SIZE_WIDENED {
            (
                stream.read_i32("export_serial_size")?,
                stream.read_i32("export_serial_offset")?,
            )
        } else {
            (
                stream.read_packed_index("export_serial_size")?,
                stream.read_packed_index("export_serial_offset")?,
            )
        };

        if shape.has_component_map {
            let component_count = stream.read_i32("export_component_count")?;
            for _ in 0..component_count.max(0) {
                stream.read_name_index("export_component_name")?;
                stream.read_package_index("export_component_object")?;
            }
        }

        let export_flags = stream.read_u32("export_flags")?;

        let generation_net_object_counts = if shape.has_generation_net_object_counts {
            let generation_count = stream.read_i32("export_generation_count")?;
            let mut counts = Vec::with_capacity(generation_count.max(0) as usize);
            for _ in 0..generation_count.max(0) {
                counts.push(stream.read_i32("export_net_object_count")?);
            }
            counts
        } else {
            Vec::new()
        };

        let (package_guid, package_flags) = if shape.has_package_guid {
            (
                Some(stream.read_guid("export_package_guid")?),
                Some(stream.read_u32("export_package_flags")?),
            )
        } else {
            (None, None)
        };

        exports.push(ExportEntry {
            class_index,
            super_index,
            outer_index,
            object_name,
            archetype_index,
            object_flags,
            serial_size,
            serial_offset,
            export_flags,
            generation_net_object_counts,
            package_guid,
            package_flags,
        });
    }
    log::debug!("read {} export entries", exports.len());
    Ok(exports)
}

/// Write an Export table in the shape [`read_export_table`] expects to read back.
pub fn write_export_table<S: std::io::Write + std::io::Seek>(
    stream: &mut PackageStream<S>,
    exports: &[ExportEntry],
    shape: ExportShape,
) -> Result<()> {
    for entry in exports {
        stream.write_package_index(&entry.class_index)?;
        stream.write_package_index(&entry.super_index)?;
        stream.write_package_index(&entry.outer_index)?;
        stream.write_name_index(&entry.object_name)?;

        if shape.version >= ADDED_ARCHETYPE {
            stream.write_package_index(&entry.archetype_index)?;
        }

        if shape.version >= OBJECT_FLAGS_64_BIT {
            stream.write_u64(entry.object_flags)?;
        } else {
            stream.write_u32(entry.object_flags as u32)?;
        }

        if shape.version >= SERIAL_SIZE_WIDENED {
            stream.write_i32(entry.serial_size)?;
            stream.write_i32(entry.serial_offset)?;
        } else {
            stream.write_packed_index(entry.serial_size)?;
            stream.write_packed_index(entry.serial_offset)?;
        }

        if shape.has_component_map {
            stream.write_i32(0)?;
        }

        stream.write_u32(entry.export_flags)?;

        if shape.has_generation_net_object_counts {
            stream.write_i32(entry.generation_net_object_counts.len() as i32)?;
            for count in &entry.generation_net_object_counts {
                stream.write_i32(*count)?;
            }
        }

        if shape.has_package_guid {
            stream.write_guid(&entry.package_guid.unwrap_or_default())?;
            stream.write_u32(entry.package_flags.unwrap_or(0))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, SeekFrom};

    fn shape(version: i32) -> ExportShape {
        ExportShape {
            version,
            has_component_map: false,
            has_generation_net_object_counts: false,
            has_package_guid: false,
        }
    }

    #[test]
    fn export_round_trips_ue1_shape() {
        let exports = vec![ExportEntry {
            class_index: PackageIndex::from_import(0),
            super_index: PackageIndex::NONE,
            outer_index: PackageIndex::NONE,
            object_name: NameIndex::new(3, 0),
            archetype_index: PackageIndex::NONE,
            object_flags: 0x00070000,
            serial_size: 4,
            serial_offset: 64,
            export_flags: 0,
            generation_net_object_counts: Vec::new(),
            package_guid: None,
            package_flags: None,
        }];
        let shape = shape(68);
        let mut stream = PackageStream::new(Cursor::new(Vec::new()));
        write_export_table(&mut stream, &exports, shape).unwrap();
        stream.seek(SeekFrom::Start(0)).unwrap();
        let read = read_export_table(&mut stream, 1, shape).unwrap();
        assert_eq!(read, exports);
    }

    #[test]
    fn export_serial_invariant_holds_for_seed_scenario() {
        let export = ExportEntry {
            serial_offset: 100,
            serial_size: 10,
            ..Default::default()
        };
        let file_length = 200i64;
        assert!(export.serial_size >= 0);
        assert!((export.serial_offset as i64) + (export.serial_size as i64) <= file_length);
    }
}
