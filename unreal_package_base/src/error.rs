//! Error taxonomy for package parsing and serialization.

use std::io;
use std::string::{FromUtf16Error, FromUtf8Error};

use thiserror::Error;
use unreal_helpers::error::FStringError;

/// Errors thrown by the package I/O engine.
///
/// `BadSignature`, `UnsupportedVersion` and `FormatError` are fatal; `TableRecoverable` is
/// logged and the affected table is dropped without aborting the load; `ObjectDeserializeError`
/// is raised by an external object serializer and rethrown with the offending export index
/// attached.
#[derive(Error, Debug)]
pub enum Error {
    /// An `std::io::Error` occurred.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A `FromUtf8Error` occurred while decoding an ANSI `FString`.
    #[error(transparent)]
    Utf8(#[from] FromUtf8Error),
    /// A `FromUtf16Error` occurred while decoding a wide `FString`.
    #[error(transparent)]
    Utf16(#[from] FromUtf16Error),
    /// An `FStringError` occurred.
    #[error(transparent)]
    FString(#[from] FStringError),

    /// The first four bytes matched neither the little- nor big-endian package signature.
    #[error("bad signature: expected 0x9E2A83C1 or its byte-swap, got {0:#010X}")]
    BadSignature(u32),

    /// The legacy version or a build-gated branch hook explicitly refuses to load this file.
    #[error("unsupported version: {0}")]
    UnsupportedVersion(Box<str>),

    /// A structural inconsistency was found at a specific file offset: a table offset past
    /// EOF, a negative count, or a string length overflow.
    #[error("format error at offset {offset}: {message}")]
    FormatError {
        /// Byte offset the inconsistency was detected at.
        offset: u64,
        /// Human-readable description.
        message: Box<str>,
    },

    /// A package index referred to a table position that doesn't exist.
    #[error("invalid package index {0}")]
    InvalidPackageIndex(i32),

    /// An object serializer raised an error while deserializing a specific export's payload.
    #[error("failed to deserialize export {export_index} ({class_name}): {source}")]
    ObjectDeserialize {
        /// Zero-based export index that failed.
        export_index: usize,
        /// The export's class name, for diagnostics.
        class_name: Box<str>,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Part of the library is not implemented for this build/branch combination.
    #[error("{0}")]
    Unimplemented(Box<str>),
}

impl Error {
    /// Create a `BadSignature` error.
    pub fn bad_signature(tag: u32) -> Self {
        Error::BadSignature(tag)
    }

    /// Create an `UnsupportedVersion` error.
    pub fn unsupported_version(msg: impl Into<String>) -> Self {
        Error::UnsupportedVersion(msg.into().into_boxed_str())
    }

    /// Create a `FormatError` at a given offset.
    pub fn format_error(offset: u64, msg: impl Into<String>) -> Self {
        Error::FormatError {
            offset,
            message: msg.into().into_boxed_str(),
        }
    }

    /// Create an `InvalidPackageIndex` error.
    pub fn invalid_package_index(index: i32) -> Self {
        Error::InvalidPackageIndex(index)
    }

    /// Create an `ObjectDeserialize` error.
    pub fn object_deserialize(
        export_index: usize,
        class_name: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::ObjectDeserialize {
            export_index,
            class_name: class_name.into().into_boxed_str(),
            source: Box::new(source),
        }
    }

    /// Create an `Unimplemented` error.
    pub fn unimplemented(msg: impl Into<String>) -> Self {
        Error::Unimplemented(msg.into().into_boxed_str())
    }
}
