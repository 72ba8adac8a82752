//! UE4 custom-version list.
//!
//! Modern Unreal packages carry, instead of a single linear file version, a list of
//! per-subsystem version stamps keyed by GUID. The *shape* of each list entry changed twice
//! early in UE4's life, and which shape applies is keyed off the legacy version bucket, not
//! off a field inside the list itself.

use unreal_helpers::Guid;
use unreal_package_base::Result;

use crate::stream::PackageStream;

/// A single subsystem version stamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomVersion {
    /// Subsystem identity.
    pub key: Guid,
    /// Subsystem-local version number.
    pub version: i32,
    /// Optional debug-only label, present only in the `Enums` wire shape.
    pub friendly_name: Option<String>,
}

impl CustomVersion {
    /// Create a new entry with no friendly name.
    pub fn new(key: Guid, version: i32) -> Self {
        CustomVersion {
            key,
            version,
            friendly_name: None,
        }
    }
}

/// Which on-disk shape a custom-version-list entry takes, selected from the Summary's legacy
/// version bucket.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CustomVersionFormat {
    /// `legacy_version == -2`: `{Guid key, FString friendly_name, i32 version}`.
    Enums,
    /// `legacy_version ∈ [-5, -3]`: `{Guid key, i32 version}`.
    Guids,
    /// `legacy_version <= -6`: `{Guid key, i32 version}`, identical wire shape to `Guids`
    /// but a distinct bucket (kept separate since the two diverged again later).
    Optimized,
}

impl CustomVersionFormat {
    /// Select the wire shape for a given legacy version, or `None` if `legacy_version` isn't
    /// in any known custom-version-list bucket (i.e. this isn't a UE4 header at all).
    pub fn for_legacy_version(legacy_version: i32) -> Option<CustomVersionFormat> {
        match legacy_version {
            -2 => Some(CustomVersionFormat::Enums),
            -5..=-3 => Some(CustomVersionFormat::Guids),
            v if v <= -6 => Some(CustomVersionFormat::Optimized),
            _ => None,
        }
    }
}

/// Read a count-prefixed custom-version list in the shape `format` dictates.
pub fn read_custom_versions<S: std::io::Read + std::io::Seek>(
    stream: &mut PackageStream<S>,
    format: CustomVersionFormat,
) -> Result<Vec<CustomVersion>> {
    let count = stream.read_i32("custom_version_count")?.max(0) as usize;
    let mut versions = Vec::with_capacity(count);
    for _ in 0..count {
        let key = stream.read_guid("custom_version_key")?;
        let entry = match format {
            CustomVersionFormat::Enums => {
                let friendly_name = stream.read_fstring("custom_version_friendly_name")?;
                let version = stream.read_i32("custom_version_version")?;
                CustomVersion {
                    key,
                    version,
                    friendly_name: Some(friendly_name),
                }
            }
            CustomVersionFormat::Guids | CustomVersionFormat::Optimized => {
                let version = stream.read_i32("custom_version_version")?;
                CustomVersion::new(key, version)
            }
        };
        versions.push(entry);
    }
    Ok(versions)
}

/// Write a count-prefixed custom-version list in the shape `format` dictates.
pub fn write_custom_versions<S: std::io::Write + std::io::Seek>(
    stream: &mut PackageStream<S>,
    format: CustomVersionFormat,
    versions: &[CustomVersion],
) -> Result<()> {
    stream.write_i32(versions.len() as i32)?;
    for entry in versions {
        stream.write_guid(&entry.key)?;
        match format {
            CustomVersionFormat::Enums => {
                stream.write_fstring(entry.friendly_name.as_deref().unwrap_or(""))?;
                stream.write_i32(entry.version)?;
            }
            CustomVersionFormat::Guids | CustomVersionFormat::Optimized => {
                stream.write_i32(entry.version)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn optimized_bucket_is_twenty_bytes_per_entry() {
        let versions = vec![
            CustomVersion::new(Guid::new([1; 16]), 7),
            CustomVersion::new(Guid::new([2; 16]), 9),
        ];
        let mut stream = PackageStream::new(Cursor::new(Vec::new()));
        write_custom_versions(&mut stream, CustomVersionFormat::Optimized, &versions).unwrap();
        let written = stream.into_inner().into_inner();
        assert_eq!(written.len(), 4 + 2 * 20);

        let mut stream = PackageStream::new(Cursor::new(written));
        let read = read_custom_versions(&mut stream, CustomVersionFormat::Optimized).unwrap();
        assert_eq!(read, versions);
        assert_eq!(stream.position().unwrap(), 4 + 2 * 20);
    }

    #[test]
    fn enums_bucket_round_trips_friendly_name() {
        let versions = vec![CustomVersion {
            key: Guid::new([3; 16]),
            version: 4,
            friendly_name: Some("Core.Networking".to_string()),
        }];
        let mut stream = PackageStream::new(Cursor::new(Vec::new()));
        write_custom_versions(&mut stream, CustomVersionFormat::Enums, &versions).unwrap();
        let written = stream.into_inner().into_inner();

        let mut stream = PackageStream::new(Cursor::new(written));
        let read = read_custom_versions(&mut stream, CustomVersionFormat::Enums).unwrap();
        assert_eq!(read, versions);
    }

    #[test]
    fn bucket_selection_matches_legacy_version() {
        assert_eq!(
            CustomVersionFormat::for_legacy_version(-2),
            Some(CustomVersionFormat::Enums)
        );
        assert_eq!(
            CustomVersionFormat::for_legacy_version(-4),
            Some(CustomVersionFormat::Guids)
        );
        assert_eq!(
            CustomVersionFormat::for_legacy_version(-7),
            Some(CustomVersionFormat::Optimized)
        );
        assert_eq!(CustomVersionFormat::for_legacy_version(68), None);
    }
}
