//! Import table.

use unreal_package_base::{NameIndex, PackageIndex, Result};

use crate::stream::PackageStream;

/// A single Import-table entry: a reference to an object owned by another package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportEntry {
    /// Name of the package the imported object's class lives in.
    pub class_package: NameIndex,
    /// Class name of the imported object.
    pub class_name: NameIndex,
    /// Outer object, encoded as a package index. Resolves to another import, or `0` for a
    /// top-level import.
    pub outer_index: PackageIndex,
    /// Object name.
    pub object_name: NameIndex,
}

/// Read `count` Import-table entries starting at the stream's current position.
pub fn read_import_table<S: std::io::Read + std::io::Seek>(
    stream: &mut PackageStream<S>,
    count: i32,
) -> Result<Vec<ImportEntry>> {
    let count = count.max(0) as usize;
    let mut imports = Vec::with_capacity(count);
    for _ in 0..count {
        imports.push(ImportEntry {
            class_package: stream.read_name_index("import_class_package")?,
            class_name: stream.read_name_index("import_class_name")?,
            outer_index: stream.read_package_index("import_outer_index")?,
            object_name: stream.read_name_index("import_object_name")?,
        });
    }
    log::debug!("read {} import entries", imports.len());
    Ok(imports)
}

/// Write an Import table in the shape [`read_import_table`] expects to read back.
pub fn write_import_table<S: std::io::Write + std::io::Seek>(
    stream: &mut PackageStream<S>,
    imports: &[ImportEntry],
) -> Result<()> {
    for entry in imports {
        stream.write_name_index(&entry.class_package)?;
        stream.write_name_index(&entry.class_name)?;
        stream.write_package_index(&entry.outer_index)?;
        stream.write_name_index(&entry.object_name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, SeekFrom};

    #[test]
    fn import_table_round_trips() {
        let imports = vec![ImportEntry {
            class_package: NameIndex::new(0, 0),
            class_name: NameIndex::new(1, 0),
            outer_index: PackageIndex::NONE,
            object_name: NameIndex::new(2, 0),
        }];
        let mut stream = PackageStream::new(Cursor::new(Vec::new()));
        write_import_table(&mut stream, &imports).unwrap();
        stream.seek(SeekFrom::Start(0)).unwrap();
        let read = read_import_table(&mut stream, 1).unwrap();
        assert_eq!(read, imports);
    }
}
