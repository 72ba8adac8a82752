//! Extension for anything that implements Read to more easily read Unreal data formats.

use std::io::{Read, Seek};
use std::mem::size_of;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::FStringError;

/// Extension for anything that implements Read to more easily read Unreal data formats.
pub trait UnrealReadExt {
    /// Read string of format \<length i32\>\<string\>\<null\>
    fn read_fstring(&mut self) -> Result<Option<String>, FStringError>;
    /// Read u8 as bool
    fn read_bool(&mut self) -> std::io::Result<bool>;
}

impl<R: Read + Seek> UnrealReadExt for R {
    fn read_fstring(&mut self) -> Result<Option<String>, FStringError> {
        let len = self.read_i32::<LittleEndian>()?;
        let position = self.stream_position()?;

        if len == i32::MIN || !(-131072..=131072).contains(&len) {
            return Err(FStringError::InvalidStringSize(len, position));
        }

        if len == 0 {
            return Ok(None);
        }

        if len < 0 {
            let len = (-len) as usize;

            let mut buf = vec![0u8; (len - 1) * size_of::<u16>()];
            self.read_exact(&mut buf)?;
            let terminator = self.read_u16::<LittleEndian>()?;
            if terminator != 0 {
                return Err(FStringError::InvalidStringTerminator(
                    terminator,
                    self.stream_position()?,
                ));
            }

            let wide: Vec<u16> = buf
                .chunks_exact(2)
                .map(|e| u16::from_le_bytes([e[0], e[1]]))
                .collect();

            Ok(Some(String::from_utf16(&wide)?))
        } else {
            let len = len as usize;

            let mut buf = vec![0u8; len - 1];
            self.read_exact(&mut buf)?;
            let terminator = self.read_u8()?;
            if terminator != 0 {
                return Err(FStringError::InvalidStringTerminator(
                    terminator as u16,
                    self.stream_position()?,
                ));
            }

            Ok(Some(String::from_utf8(buf)?))
        }
    }

    fn read_bool(&mut self) -> std::io::Result<bool> {
        let res = self.read_u8()?;
        Ok(res > 0)
    }
}
