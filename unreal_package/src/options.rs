//! Caller-supplied knobs for load/save.
//!
//! These replace the process-global `Platform`/`OverrideVersion` mutable state the original
//! engine carries with an explicit struct threaded through `load`/`save`.

use unreal_package_base::Platform;

bitflags::bitflags! {
    /// Which phases of the façade's load pipeline to run.
    pub struct LoadFlags: u32 {
        /// Discover and register class-name -> type bindings from the external class registry.
        const REGISTER_CLASSES = 0x1;
        /// Materialize placeholder objects for every import and export in table order.
        const CONSTRUCT = 0x2;
        /// Hand each export's byte range to its registered object serializer, if any.
        const DESERIALIZE = 0x4;
        /// Call each object's post-deserialize hook.
        const LINK = 0x8;
        /// All four phases.
        const ALL = Self::REGISTER_CLASSES.bits | Self::CONSTRUCT.bits | Self::DESERIALIZE.bits | Self::LINK.bits;
    }
}

impl Default for LoadFlags {
    fn default() -> Self {
        LoadFlags::ALL
    }
}

/// Options controlling a single `load()` call.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Platform bias applied before build detection.
    pub platform: Platform,
    /// Force the detected version, bypassing the value read from the file.
    pub version_override: Option<i32>,
    /// Force the detected licensee version, bypassing the value read from the file.
    pub licensee_version_override: Option<i32>,
    /// Which load phases to run.
    pub flags: LoadFlags,
    /// Capture per-read telemetry; off by default.
    pub record_reads: bool,
}

/// Options controlling a single `save()` call.
#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    /// Package flags to force onto the Summary before writing, overriding whatever the
    /// in-memory package currently carries.
    pub package_flags_override: Option<u32>,
}
