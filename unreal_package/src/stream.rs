//! Endian-aware byte stream.

use std::io::{self, Read, Seek, SeekFrom, Write};

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};
use unreal_helpers::Guid;
use unreal_package_base::{Error, NameIndex, PackageIndex, Result};

/// The two magic values a Summary's signature tag may carry. Little-endian files start with
/// `SIGNATURE_LE`; a file that reads `SIGNATURE_BE` at offset 0 is big-endian and every
/// subsequent multibyte read must be byte-swapped.
pub const SIGNATURE_LE: u32 = 0x9E2A83C1;
/// See [`SIGNATURE_LE`].
pub const SIGNATURE_BE: u32 = 0xC1832A9E;

/// Byte order a [`PackageStream`] applies to every multibyte read/write after construction.
///
/// Chosen at runtime from the Summary's signature tag rather than encoded as a
/// `byteorder::ByteOrder` type parameter, since a single stream value must be able to flip
/// after reading four bytes (a generic parameter is fixed at compile time).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Native Unreal little-endian.
    Little,
    /// Byte-swapped console cook.
    Big,
}

/// A single per-read diagnostic record, captured only when [`PackageStream::record_reads`]
/// is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRecord {
    /// Caller-supplied field name.
    pub name: &'static str,
    /// Byte offset the read started at.
    pub offset: u64,
    /// Number of bytes consumed.
    pub size: u64,
}

/// Cursor over a package file with an explicit, runtime-flippable byte order.
pub struct PackageStream<S> {
    inner: S,
    endianness: Endianness,
    record_reads: bool,
    reads: Vec<ReadRecord>,
}

impl<S> PackageStream<S> {
    /// Wrap `inner`, assuming little-endian until a signature read says otherwise.
    pub fn new(inner: S) -> Self {
        PackageStream {
            inner,
            endianness: Endianness::Little,
            record_reads: false,
            reads: Vec::new(),
        }
    }

    /// Enable or disable per-read telemetry collection.
    pub fn set_record_reads(&mut self, enabled: bool) {
        self.record_reads = enabled;
        if !enabled {
            self.reads.clear();
        }
    }

    /// The reads recorded so far. Always empty unless [`Self::set_record_reads`] was called.
    pub fn reads(&self) -> &[ReadRecord] {
        &self.reads
    }

    /// Current byte order.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Override the byte order directly, bypassing signature detection.
    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
    }

    /// Unwrap the stream, discarding accumulated telemetry.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn record(&mut self, name: &'static str, offset: u64, size: u64) {
        if self.record_reads {
            self.reads.push(ReadRecord { name, offset, size });
        }
    }
}

impl<S: Read + Seek> PackageStream<S> {
    /// Current byte offset.
    pub fn position(&mut self) -> io::Result<u64> {
        self.inner.stream_position()
    }

    /// Seek to an absolute or relative position.
    pub fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }

    /// Read the Summary's four-byte signature tag, establishing stream endianness.
    ///
    /// `0x9E2A83C1` is little-endian, its byte-swap is big-endian; anything else is a
    /// [`Error::BadSignature`].
    pub fn read_signature(&mut self, name: &'static str) -> Result<u32> {
        let offset = self.position()?;
        let tag = self.inner.read_u32::<LittleEndian>()?;
        self.record(name, offset, 4);
        match tag {
            SIGNATURE_LE => {
                self.endianness = Endianness::Little;
                Ok(SIGNATURE_LE)
            }
            SIGNATURE_BE => {
                self.endianness = Endianness::Big;
                Ok(SIGNATURE_LE)
            }
            other => Err(Error::bad_signature(other)),
        }
    }

    /// Read a `u8`.
    pub fn read_u8(&mut self, name: &'static str) -> Result<u8> {
        let offset = self.position()?;
        let value = self.inner.read_u8()?;
        self.record(name, offset, 1);
        Ok(value)
    }

    /// Read an `i8`.
    pub fn read_i8(&mut self, name: &'static str) -> Result<i8> {
        let offset = self.position()?;
        let value = self.inner.read_i8()?;
        self.record(name, offset, 1);
        Ok(value)
    }

    /// Read a `bool` encoded as a 32-bit integer (Unreal's `UBOOL` convention).
    pub fn read_bool32(&mut self, name: &'static str) -> Result<bool> {
        Ok(self.read_u32(name)? != 0)
    }

    /// Read a `u16`, respecting [`Self::endianness`].
    pub fn read_u16(&mut self, name: &'static str) -> Result<u16> {
        let offset = self.position()?;
        let value = match self.endianness {
            Endianness::Little => self.inner.read_u16::<LittleEndian>()?,
            Endianness::Big => self.inner.read_u16::<BigEndian>()?,
        };
        self.record(name, offset, 2);
        Ok(value)
    }

    /// Read an `i16`, respecting [`Self::endianness`].
    pub fn read_i16(&mut self, name: &'static str) -> Result<i16> {
        let offset = self.position()?;
        let value = match self.endianness {
            Endianness::Little => self.inner.read_i16::<LittleEndian>()?,
            Endianness::Big => self.inner.read_i16::<BigEndian>()?,
        };
        self.record(name, offset, 2);
        Ok(value)
    }

    /// Read a `u32`, respecting [`Self::endianness`].
    pub fn read_u32(&mut self, name: &'static str) -> Result<u32> {
        let offset = self.position()?;
        let value = match self.endianness {
            Endianness::Little => self.inner.read_u32::<LittleEndian>()?,
            Endianness::Big => self.inner.read_u32::<BigEndian>()?,
        };
        self.record(name, offset, 4);
        Ok(value)
    }

    /// Read an `i32`, respecting [`Self::endianness`].
    pub fn read_i32(&mut self, name: &'static str) -> Result<i32> {
        let offset = self.position()?;
        let value = match self.endianness {
            Endianness::Little => self.inner.read_i32::<LittleEndian>()?,
            Endianness::Big => self.inner.read_i32::<BigEndian>()?,
        };
        self.record(name, offset, 4);
        Ok(value)
    }

    /// Read a `u64`, respecting [`Self::endianness`].
    pub fn read_u64(&mut self, name: &'static str) -> Result<u64> {
        let offset = self.position()?;
        let value = match self.endianness {
            Endianness::Little => self.inner.read_u64::<LittleEndian>()?,
            Endianness::Big => self.inner.read_u64::<BigEndian>()?,
        };
        self.record(name, offset, 8);
        Ok(value)
    }

    /// Read an `i64`, respecting [`Self::endianness`].
    pub fn read_i64(&mut self, name: &'static str) -> Result<i64> {
        let offset = self.position()?;
        let value = match self.endianness {
            Endianness::Little => self.inner.read_i64::<LittleEndian>()?,
            Endianness::Big => self.inner.read_i64::<BigEndian>()?,
        };
        self.record(name, offset, 8);
        Ok(value)
    }

    /// Read an `f32`, respecting [`Self::endianness`].
    pub fn read_f32(&mut self, name: &'static str) -> Result<f32> {
        let offset = self.position()?;
        let value = match self.endianness {
            Endianness::Little => self.inner.read_f32::<LittleEndian>()?,
            Endianness::Big => self.inner.read_f32::<BigEndian>()?,
        };
        self.record(name, offset, 4);
        Ok(value)
    }

    /// Read a 16-byte GUID as four little-endian 32-bit words.
    pub fn read_guid(&mut self, name: &'static str) -> Result<Guid> {
        let offset = self.position()?;
        let mut bytes = [0u8; 16];
        self.inner.read_exact(&mut bytes)?;
        self.record(name, offset, 16);
        Ok(Guid::new(bytes))
    }

    /// Read a `NameIndex`: an index plus an instance suffix, each a 32-bit integer.
    pub fn read_name_index(&mut self, name: &'static str) -> Result<NameIndex> {
        let index = self.read_i32(name)?;
        let suffix = self.read_i32(name)?;
        Ok(NameIndex::new(index, suffix))
    }

    /// Read a `PackageIndex`: a bare signed 32-bit integer.
    pub fn read_package_index(&mut self, name: &'static str) -> Result<PackageIndex> {
        Ok(PackageIndex::new(self.read_i32(name)?))
    }

    /// Read a length-prefixed `FString`: a signed 32-bit count, positive ⇒ NUL-terminated
    /// ANSI, negative ⇒ NUL-terminated UTF-16LE (`|n|` code units).
    ///
    /// `FormatError` is raised for a count whose terminator byte/code-unit isn't zero, or
    /// whose size would cross EOF.
    pub fn read_fstring(&mut self, name: &'static str) -> Result<String> {
        let start = self.position()?;
        let count = self.read_i32(name)?;

        if count == 0 {
            return Ok(String::new());
        }

        if count > 0 {
            let len = count as usize;
            let mut bytes = vec![0u8; len];
            self.inner.read_exact(&mut bytes)?;
            self.record(name, start, 4 + len as u64);
            let terminator = bytes.pop().unwrap_or(0);
            if terminator != 0 {
                return Err(Error::format_error(
                    start,
                    format!("FString {name}: missing ANSI NUL terminator (got {terminator})"),
                ));
            }
            Ok(String::from_utf8(bytes)?)
        } else {
            let len = count.unsigned_abs() as usize;
            let mut units = vec![0u16; len];
            for unit in units.iter_mut() {
                *unit = match self.endianness {
                    Endianness::Little => self.inner.read_u16::<LittleEndian>()?,
                    Endianness::Big => self.inner.read_u16::<BigEndian>()?,
                };
            }
            self.record(name, start, 4 + (len as u64) * 2);
            let terminator = units.pop().unwrap_or(0);
            if terminator != 0 {
                return Err(Error::format_error(
                    start,
                    format!("FString {name}: missing UTF-16 NUL terminator (got {terminator})"),
                ));
            }
            Ok(String::from_utf16(&units)?)
        }
    }

    /// UE1-style packed (compact) integer: 7 bits per byte, a continuation bit in the MSB
    /// of each byte, and a sign bit in bit 6 of the first byte.
    pub fn read_packed_index(&mut self, name: &'static str) -> Result<i32> {
        let offset = self.position()?;
        let first = self.inner.read_u8()?;
        let negative = first & 0x80 != 0;
        let mut value = (first & 0x3F) as u32;
        let mut shift = 6;
        let mut size = 1u64;

        if first & 0x40 != 0 {
            loop {
                let byte = self.inner.read_u8()?;
                size += 1;
                value |= ((byte & 0x7F) as u32) << shift;
                shift += 7;
                if byte & 0x80 == 0 || shift >= 32 {
                    break;
                }
            }
        }

        self.record(name, offset, size);
        let value = value as i32;
        Ok(if negative { -value } else { value })
    }
}

impl<S: Write + Seek> PackageStream<S> {
    /// Current byte offset, write-side.
    pub fn position_mut(&mut self) -> io::Result<u64> {
        self.inner.stream_position()
    }

    /// Seek to an absolute or relative position, write-side.
    pub fn seek_mut(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }

    /// Write the signature tag matching [`Self::endianness`].
    pub fn write_signature(&mut self) -> Result<()> {
        let tag = match self.endianness {
            Endianness::Little => SIGNATURE_LE,
            Endianness::Big => SIGNATURE_BE,
        };
        self.inner.write_u32::<LittleEndian>(tag)?;
        Ok(())
    }

    /// Write a `u8`.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.inner.write_u8(value)?;
        Ok(())
    }

    /// Write an `i8`.
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.inner.write_i8(value)?;
        Ok(())
    }

    /// Write a `bool` encoded as a 32-bit integer.
    pub fn write_bool32(&mut self, value: bool) -> Result<()> {
        self.write_u32(value as u32)
    }

    /// Write a `u16`, respecting [`Self::endianness`].
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        match self.endianness {
            Endianness::Little => self.inner.write_u16::<LittleEndian>(value)?,
            Endianness::Big => self.inner.write_u16::<BigEndian>(value)?,
        }
        Ok(())
    }

    /// Write an `i16`, respecting [`Self::endianness`].
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        match self.endianness {
            Endianness::Little => self.inner.write_i16::<LittleEndian>(value)?,
            Endianness::Big => self.inner.write_i16::<BigEndian>(value)?,
        }
        Ok(())
    }

    /// Write a `u32`, respecting [`Self::endianness`].
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        match self.endianness {
            Endianness::Little => self.inner.write_u32::<LittleEndian>(value)?,
            Endianness::Big => self.inner.write_u32::<BigEndian>(value)?,
        }
        Ok(())
    }

    /// Write an `i32`, respecting [`Self::endianness`].
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        match self.endianness {
            Endianness::Little => self.inner.write_i32::<LittleEndian>(value)?,
            Endianness::Big => self.inner.write_i32::<BigEndian>(value)?,
        }
        Ok(())
    }

    /// Write a `u64`, respecting [`Self::endianness`].
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        match self.endianness {
            Endianness::Little => self.inner.write_u64::<LittleEndian>(value)?,
            Endianness::Big => self.inner.write_u64::<BigEndian>(value)?,
        }
        Ok(())
    }

    /// Write an `i64`, respecting [`Self::endianness`].
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        match self.endianness {
            Endianness::Little => self.inner.write_i64::<LittleEndian>(value)?,
            Endianness::Big => self.inner.write_i64::<BigEndian>(value)?,
        }
        Ok(())
    }

    /// Write an `f32`, respecting [`Self::endianness`].
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        match self.endianness {
            Endianness::Little => self.inner.write_f32::<LittleEndian>(value)?,
            Endianness::Big => self.inner.write_f32::<BigEndian>(value)?,
        }
        Ok(())
    }

    /// Write a 16-byte GUID as four little-endian 32-bit words.
    pub fn write_guid(&mut self, guid: &Guid) -> Result<()> {
        let bytes: [u8; 16] = (*guid).into();
        self.inner.write_all(&bytes)?;
        Ok(())
    }

    /// Write a `NameIndex`.
    pub fn write_name_index(&mut self, name: &NameIndex) -> Result<()> {
        self.write_i32(name.index)?;
        self.write_i32(name.suffix)?;
        Ok(())
    }

    /// Write a `PackageIndex`.
    pub fn write_package_index(&mut self, index: &PackageIndex) -> Result<()> {
        self.write_i32(index.index)
    }

    /// Write a length-prefixed `FString`, choosing ANSI encoding when `value` is pure ASCII
    /// and UTF-16LE otherwise.
    pub fn write_fstring(&mut self, value: &str) -> Result<()> {
        if value.is_empty() {
            self.write_i32(0)?;
            return Ok(());
        }

        if value.is_ascii() {
            self.write_i32(value.len() as i32 + 1)?;
            self.inner.write_all(value.as_bytes())?;
            self.inner.write_u8(0)?;
        } else {
            let units: Vec<u16> = value.encode_utf16().collect();
            self.write_i32(-(units.len() as i32 + 1))?;
            for unit in &units {
                match self.endianness {
                    Endianness::Little => self.inner.write_u16::<LittleEndian>(*unit)?,
                    Endianness::Big => self.inner.write_u16::<BigEndian>(*unit)?,
                }
            }
            match self.endianness {
                Endianness::Little => self.inner.write_u16::<LittleEndian>(0)?,
                Endianness::Big => self.inner.write_u16::<BigEndian>(0)?,
            }
        }
        Ok(())
    }

    /// UE1-style packed (compact) integer; see [`PackageStream::read_packed_index`].
    pub fn write_packed_index(&mut self, mut value: i32) -> Result<()> {
        let negative = value < 0;
        if negative {
            value = -value;
        }
        let mut value = value as u32;

        let mut first = (value & 0x3F) as u8;
        value >>= 6;
        if negative {
            first |= 0x80;
        }
        if value != 0 {
            first |= 0x40;
            self.inner.write_u8(first)?;
            loop {
                let mut byte = (value & 0x7F) as u8;
                value >>= 7;
                if value != 0 {
                    byte |= 0x80;
                }
                self.inner.write_u8(byte)?;
                if value == 0 {
                    break;
                }
            }
        } else {
            self.inner.write_u8(first)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn stream(bytes: Vec<u8>) -> PackageStream<Cursor<Vec<u8>>> {
        PackageStream::new(Cursor::new(bytes))
    }

    #[test]
    fn detects_little_endian_signature() {
        let mut s = stream(SIGNATURE_LE.to_le_bytes().to_vec());
        s.read_signature("tag").unwrap();
        assert_eq!(s.endianness(), Endianness::Little);
    }

    #[test]
    fn detects_big_endian_signature() {
        let mut s = stream(SIGNATURE_BE.to_le_bytes().to_vec());
        s.read_signature("tag").unwrap();
        assert_eq!(s.endianness(), Endianness::Big);
    }

    #[test]
    fn rejects_bad_signature() {
        let mut s = stream(vec![1, 2, 3, 4]);
        assert!(s.read_signature("tag").is_err());
    }

    #[test]
    fn ansi_fstring_round_trips() {
        let mut s = stream(Vec::new());
        s.write_fstring("Core").unwrap();
        s.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(s.read_fstring("name").unwrap(), "Core");
    }

    #[test]
    fn utf16_fstring_round_trips() {
        let mut s = stream(Vec::new());
        s.write_fstring("héllo").unwrap();
        s.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(s.read_fstring("name").unwrap(), "héllo");
    }

    #[test]
    fn empty_fstring_round_trips() {
        let mut s = stream(Vec::new());
        s.write_fstring("").unwrap();
        s.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(s.read_fstring("name").unwrap(), "");
    }

    #[test]
    fn fstring_missing_ansi_terminator_is_format_error() {
        // count=5, 5 bytes, no NUL at the end.
        let mut bytes = 5i32.to_le_bytes().to_vec();
        bytes.extend_from_slice(b"hello");
        let mut s = stream(bytes);
        match s.read_fstring("name") {
            Err(Error::FormatError { .. }) => {}
            other => panic!("expected FormatError, got {other:?}"),
        }
    }

    #[test]
    fn packed_index_round_trips_negative() {
        let mut s = stream(Vec::new());
        s.write_packed_index(-1000).unwrap();
        s.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(s.read_packed_index("name").unwrap(), -1000);
    }

    #[test]
    fn packed_index_round_trips_small_positive() {
        let mut s = stream(Vec::new());
        s.write_packed_index(5).unwrap();
        s.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(s.read_packed_index("name").unwrap(), 5);
    }

    #[test]
    fn package_index_round_trips_import_and_export() {
        assert_eq!(PackageIndex::from_import(0).index, -1);
        assert_eq!(PackageIndex::from_export(0).index, 1);
    }
}
