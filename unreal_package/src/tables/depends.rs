//! Depends table.
//!
//! Best-effort: a parse failure here is logged and the table is dropped, it never aborts the
//! load.

use unreal_package_base::{Diagnostics, PackageIndex, Result};

use crate::stream::PackageStream;

/// Read the Depends table: for each of `export_count` exports, a count-prefixed list of
/// package indices naming imports/exports whose payload must be loaded first.
///
/// Returns `None` (with a diagnostic pushed) if any entry fails to parse; the table is logged
/// and dropped rather than failing the load.
pub fn read_depends_table<S: std::io::Read + std::io::Seek>(
    stream: &mut PackageStream<S>,
    export_count: i32,
    diagnostics: &mut Diagnostics,
) -> Option<Vec<Vec<PackageIndex>>> {
    let export_count = export_count.max(0) as usize;
    let mut depends = Vec::with_capacity(export_count);

    for export_index in 0..export_count {
        let result: Result<Vec<PackageIndex>> = (|| {
            let count = stream.read_i32("depends_entry_count")?;
            if count < 0 {
                return Err(unreal_package_base::Error::format_error(
                    stream.position()?,
                    format!("negative depends entry count for export {export_index}"),
                ));
            }
            let mut entries = Vec::with_capacity(count as usize);
            for _ in 0..count {
                entries.push(stream.read_package_index("depends_index")?);
            }
            Ok(entries)
        })();

        match result {
            Ok(entries) => depends.push(entries),
            Err(err) => {
                diagnostics.push("depends", format!("couldn't parse Dependencies: {err}"));
                return None;
            }
        }
    }

    log::debug!("read {} depends entries", depends.len());
    Some(depends)
}

/// Write a Depends table in the shape [`read_depends_table`] expects to read back.
pub fn write_depends_table<S: std::io::Write + std::io::Seek>(
    stream: &mut PackageStream<S>,
    depends: &[Vec<PackageIndex>],
) -> Result<()> {
    for entries in depends {
        stream.write_i32(entries.len() as i32)?;
        for index in entries {
            stream.write_package_index(index)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, SeekFrom};

    #[test]
    fn empty_depends_is_not_an_error() {
        let mut diagnostics = Diagnostics::new();
        let mut stream = PackageStream::new(Cursor::new(Vec::new()));
        let depends = read_depends_table(&mut stream, 0, &mut diagnostics).unwrap();
        assert!(depends.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn depends_round_trips() {
        let depends = vec![vec![PackageIndex::from_import(0), PackageIndex::from_export(2)]];
        let mut stream = PackageStream::new(Cursor::new(Vec::new()));
        write_depends_table(&mut stream, &depends).unwrap();
        stream.seek(SeekFrom::Start(0)).unwrap();
        let mut diagnostics = Diagnostics::new();
        let read = read_depends_table(&mut stream, 1, &mut diagnostics).unwrap();
        assert_eq!(read, depends);
    }

    #[test]
    fn negative_count_is_dropped_not_fatal() {
        let mut stream = PackageStream::new(Cursor::new((-1i32).to_le_bytes().to_vec()));
        let mut diagnostics = Diagnostics::new();
        let depends = read_depends_table(&mut stream, 1, &mut diagnostics);
        assert!(depends.is_none());
        assert!(!diagnostics.is_empty());
    }
}
