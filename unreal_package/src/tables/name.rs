//! Name table.

use unreal_package_base::Result;

use crate::stream::PackageStream;
use crate::thresholds::OBJECT_FLAGS_64_BIT;

/// A single Name-table entry: the interned string plus per-entry object flags.
///
/// The flags widen from 32 to 64 bits at [`OBJECT_FLAGS_64_BIT`]; earlier versions carry no
/// flags at all, in which case `flags` is `0`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameEntry {
    /// The interned string.
    pub value: String,
    /// Per-entry object flags, widened to 64 bits on recent versions.
    pub flags: u64,
}

/// Read `count` Name-table entries starting at the stream's current position.
///
/// The table must be read at `NameOffset` regardless of stream position; callers are
/// responsible for seeking to `Summary::name_offset` before calling this.
pub fn read_name_table<S: std::io::Read + std::io::Seek>(
    stream: &mut PackageStream<S>,
    count: i32,
    version: i32,
    has_flags: bool,
) -> Result<Vec<NameEntry>> {
    let count = count.max(0) as usize;
    let mut names = Vec::with_capacity(count);
    for _ in 0..count {
        let value = stream.read_fstring("name_value")?;
        let flags = if !has_flags {
            0
        } else if version >= OBJECT_FLAGS_64_BIT {
            stream.read_u64("name_flags")?
        } else {
            stream.read_u32("name_flags")? as u64
        };
        names.push(NameEntry { value, flags });
    }
    log::debug!("read {} name entries", names.len());
    Ok(names)
}

/// Write a Name table in the shape [`read_name_table`] expects to read back.
pub fn write_name_table<S: std::io::Write + std::io::Seek>(
    stream: &mut PackageStream<S>,
    names: &[NameEntry],
    version: i32,
    has_flags: bool,
) -> Result<()> {
    for entry in names {
        stream.write_fstring(&entry.value)?;
        if has_flags {
            if version >= OBJECT_FLAGS_64_BIT {
                stream.write_u64(entry.flags)?;
            } else {
                stream.write_u32(entry.flags as u32)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, SeekFrom};

    #[test]
    fn name_table_round_trips_without_flags() {
        let names = vec![
            NameEntry { value: "Core".into(), flags: 0 },
            NameEntry { value: "Object".into(), flags: 0 },
        ];
        let mut stream = PackageStream::new(Cursor::new(Vec::new()));
        write_name_table(&mut stream, &names, 68, false).unwrap();
        stream.seek(SeekFrom::Start(0)).unwrap();
        let read = read_name_table(&mut stream, 2, 68, false).unwrap();
        assert_eq!(read, names);
    }

    #[test]
    fn name_table_round_trips_with_64_bit_flags() {
        let names = vec![NameEntry {
            value: "Core".into(),
            flags: 0x1_0000_0002,
        }];
        let mut stream = PackageStream::new(Cursor::new(Vec::new()));
        write_name_table(&mut stream, &names, 200, true).unwrap();
        stream.seek(SeekFrom::Start(0)).unwrap();
        let read = read_name_table(&mut stream, 1, 200, true).unwrap();
        assert_eq!(read, names);
    }
}
