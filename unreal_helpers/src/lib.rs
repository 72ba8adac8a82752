#![deny(missing_docs)]

//! Various small functions to make working with Unreal data formats easier.

#[cfg(feature = "guid")]
pub mod guid;
#[cfg(feature = "guid")]
pub use guid::Guid;

pub mod error;

#[cfg(feature = "read_write")]
pub mod read_ext;
#[cfg(feature = "read_write")]
pub use read_ext::UnrealReadExt;
#[cfg(feature = "read_write")]
pub mod write_ext;
#[cfg(feature = "read_write")]
pub use write_ext::UnrealWriteExt;
