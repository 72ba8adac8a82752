//! Engine Branch: polymorphic per-build serialization rules.

mod default;
mod licensee;
mod ue4;

pub use default::DefaultBranch;
pub use licensee::LicenseeBranch;
pub use ue4::Ue4Branch;

use std::io::{Read, Seek, Write};

use unreal_package_base::{BuildTarget, Diagnostics, EngineBranchId, Result};

use crate::stream::PackageStream;
use crate::summary::Summary;

/// Logical identity of a flag bit, independent of which numeric position any given branch
/// assigns it to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LogicalFlag {
    /// `EPackageFlags::PKG_ALLOW_DOWNLOAD`.
    PackageAllowDownload,
    /// `EPackageFlags::PKG_SERVER_SIDE_ONLY`.
    PackageServerSideOnly,
    /// `EPackageFlags::PKG_COOKED`.
    PackageCooked,
    /// `EObjectFlags::RF_PUBLIC`.
    ObjectPublic,
    /// `EObjectFlags::RF_STANDALONE`.
    ObjectStandalone,
    /// `EObjectFlags::RF_TRANSACTIONAL`.
    ObjectTransactional,
    /// `EClassFlags::CLASS_ABSTRACT`.
    ClassAbstract,
    /// `EFunctionFlags::FUNC_NATIVE`.
    FunctionNative,
}

/// A named point in the base Summary-reading sequence where a licensee fork's extra fields
/// are spliced in ("Build-specific inserts").
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SummaryInsertPoint {
    /// Immediately after step 7 (package-flags) is read.
    AfterPackageFlags,
    /// Immediately after step 9 (import table count/offset) is read.
    AfterImports,
    /// Immediately after step 21 (additional-packages-to-cook) is read.
    AfterAdditionalPackagesToCook,
}

/// Per-build serialization rules, selected by the build registry.
///
/// Hooks default to no-ops so a branch only needs to override the ones its build actually
/// changes; [`DefaultBranch`] never overrides anything.
pub trait EngineBranch {
    /// Which [`EngineBranchId`] this implementation serves, for diagnostics.
    fn id(&self) -> EngineBranchId;

    /// Fix-ups applied to a freshly-parsed Summary before table reads begin.
    fn post_deserialize_summary<S: Read + Seek>(
        &self,
        _stream: &mut PackageStream<S>,
        _summary: &mut Summary,
        _diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        Ok(())
    }

    /// Symmetric fix-up applied immediately before a Summary is written.
    fn post_serialize_summary<S: Write + Seek>(
        &self,
        _stream: &mut PackageStream<S>,
        _summary: &Summary,
    ) -> Result<()> {
        Ok(())
    }

    /// Invoked once all tables have been read.
    fn post_deserialize_package<S: Read + Seek>(
        &self,
        _stream: &mut PackageStream<S>,
        _diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        Ok(())
    }

    /// Symmetric hook invoked once all tables have been written.
    fn post_serialize_package<S: Write + Seek>(&self, _stream: &mut PackageStream<S>) -> Result<()> {
        Ok(())
    }

    /// Read (or write, symmetrically on save) this build's extra fields at `point`, if any.
    ///
    /// HMS reads an extra `i32` after package-flags, Huxley reads a `0xFEFEFEFE` sentinel,
    /// R6Vegas reads a cooker-version after imports, DCUO retroactively shifts table offsets
    /// after additional-packages-to-cook.
    fn read_summary_insert<S: Read + Seek>(
        &self,
        _point: SummaryInsertPoint,
        _stream: &mut PackageStream<S>,
        _summary: &mut Summary,
        _diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        Ok(())
    }

    /// Map a [`LogicalFlag`] to the bit position this branch's engine generation assigns it.
    ///
    /// The default mapping is [`DefaultBranch`]'s bit layout, the de-facto standard; branches
    /// override only the bits their engine generation actually moved.
    fn flag_bit(&self, flag: LogicalFlag) -> u32 {
        match flag {
            LogicalFlag::PackageAllowDownload => 0x00000001,
            LogicalFlag::PackageServerSideOnly => 0x00000020,
            LogicalFlag::PackageCooked => 0x00000008,
            LogicalFlag::ObjectPublic => 0x00000001,
            LogicalFlag::ObjectStandalone => 0x00000002,
            LogicalFlag::ObjectTransactional => 0x00000008,
            LogicalFlag::ClassAbstract => 0x00000001,
            LogicalFlag::FunctionNative => 0x00000400,
        }
    }
}

/// Construct the branch implementation for a detected build.
///
/// SFX, Midway3 and SCX are speculative-only and refused here with `Error::unimplemented`,
/// matching their registry entries' `speculative` flag.
pub fn construct_branch(target: &BuildTarget) -> Result<Box<dyn ObjectSafeBranch>> {
    if target.build.speculative {
        return Err(unreal_package_base::Error::unimplemented(format!(
            "build '{}' is detected but its serialization rules are speculative and unsupported",
            target.build.name
        )));
    }

    Ok(match target.build.branch {
        EngineBranchId::Default => Box::new(DefaultBranch),
        EngineBranchId::Ue4 => Box::new(Ue4Branch),
        other => Box::new(LicenseeBranch::new(other)),
    })
}

/// Object-safe facade over [`EngineBranch`], erasing the stream's concrete type so branches
/// can be stored as `Box<dyn ObjectSafeBranch>` behind the façade.
pub trait ObjectSafeBranch {
    /// See [`EngineBranch::id`].
    fn id(&self) -> EngineBranchId;
    /// See [`EngineBranch::flag_bit`].
    fn flag_bit(&self, flag: LogicalFlag) -> u32;
    /// See [`EngineBranch::post_deserialize_summary`], over a boxed `dyn` reader.
    fn post_deserialize_summary_dyn(
        &self,
        stream: &mut PackageStream<Box<dyn ReadSeek>>,
        summary: &mut Summary,
        diagnostics: &mut Diagnostics,
    ) -> Result<()>;
    /// See [`EngineBranch::read_summary_insert`], over a boxed `dyn` reader.
    fn read_summary_insert_dyn(
        &self,
        point: SummaryInsertPoint,
        stream: &mut PackageStream<Box<dyn ReadSeek>>,
        summary: &mut Summary,
        diagnostics: &mut Diagnostics,
    ) -> Result<()>;
    /// See [`EngineBranch::post_deserialize_package`], over a boxed `dyn` reader.
    fn post_deserialize_package_dyn(
        &self,
        stream: &mut PackageStream<Box<dyn ReadSeek>>,
        diagnostics: &mut Diagnostics,
    ) -> Result<()>;
    /// See [`EngineBranch::post_serialize_summary`], over a boxed `dyn` writer.
    fn post_serialize_summary_dyn(
        &self,
        stream: &mut PackageStream<&mut dyn WriteSeek>,
        summary: &Summary,
    ) -> Result<()>;
    /// See [`EngineBranch::post_serialize_package`], over a boxed `dyn` writer.
    fn post_serialize_package_dyn(&self, stream: &mut PackageStream<&mut dyn WriteSeek>) -> Result<()>;
}

/// A type-erased `Read + Seek`, used so the façade can hold one boxed branch regardless of
/// the concrete stream type the caller opened.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// A type-erased `Write + Seek`, the write-side counterpart of [`ReadSeek`] used by `save`.
pub trait WriteSeek: Write + Seek {}
impl<T: Write + Seek> WriteSeek for T {}

impl<B: EngineBranch> ObjectSafeBranch for B {
    fn id(&self) -> EngineBranchId {
        EngineBranch::id(self)
    }

    fn flag_bit(&self, flag: LogicalFlag) -> u32 {
        EngineBranch::flag_bit(self, flag)
    }

    fn post_deserialize_summary_dyn(
        &self,
        stream: &mut PackageStream<Box<dyn ReadSeek>>,
        summary: &mut Summary,
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        self.post_deserialize_summary(stream, summary, diagnostics)
    }

    fn read_summary_insert_dyn(
        &self,
        point: SummaryInsertPoint,
        stream: &mut PackageStream<Box<dyn ReadSeek>>,
        summary: &mut Summary,
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        self.read_summary_insert(point, stream, summary, diagnostics)
    }

    fn post_deserialize_package_dyn(
        &self,
        stream: &mut PackageStream<Box<dyn ReadSeek>>,
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        self.post_deserialize_package(stream, diagnostics)
    }

    fn post_serialize_summary_dyn(
        &self,
        stream: &mut PackageStream<&mut dyn WriteSeek>,
        summary: &Summary,
    ) -> Result<()> {
        self.post_serialize_summary(stream, summary)
    }

    fn post_serialize_package_dyn(&self, stream: &mut PackageStream<&mut dyn WriteSeek>) -> Result<()> {
        self.post_serialize_package(stream)
    }
}
