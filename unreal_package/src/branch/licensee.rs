//! Named licensee-fork branches.
//!
//! Most licensee forks differ from [`super::DefaultBranch`] by a handful of extra fields or
//! a sentinel value spliced into the base Summary sequence; this single struct, parametrized
//! by [`EngineBranchId`], covers all of them rather than one type per fork.

use std::io::{Read, Seek};

use unreal_package_base::{Diagnostics, EngineBranchId, Result};

use super::{EngineBranch, LogicalFlag, SummaryInsertPoint};
use crate::stream::PackageStream;
use crate::summary::Summary;

/// Rules for a named licensee fork other than `Default` or `Ue4`.
pub struct LicenseeBranch {
    id: EngineBranchId,
}

impl LicenseeBranch {
    /// Construct the branch for `id`. `id` must not be `Default` or `Ue4`.
    pub fn new(id: EngineBranchId) -> Self {
        LicenseeBranch { id }
    }
}

impl EngineBranch for LicenseeBranch {
    fn id(&self) -> EngineBranchId {
        self.id
    }

    fn read_summary_insert<S: Read + Seek>(
        &self,
        point: SummaryInsertPoint,
        stream: &mut PackageStream<S>,
        summary: &mut Summary,
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        match (self.id, point) {
            (EngineBranchId::Hms, SummaryInsertPoint::AfterPackageFlags) => {
                let extra = stream.read_i32("hms_extra")?;
                diagnostics.push("branch", format!("HMS extra field after package flags: {extra}"));
            }
            (EngineBranchId::Huxley, SummaryInsertPoint::AfterPackageFlags) => {
                let sentinel = stream.read_u32("huxley_sentinel")?;
                if sentinel != 0xFEFEFEFE {
                    diagnostics.push(
                        "branch",
                        format!("Huxley sentinel mismatch: expected 0xFEFEFEFE, got {sentinel:#010X}"),
                    );
                }
            }
            (EngineBranchId::R6Vegas, SummaryInsertPoint::AfterImports) => {
                summary.cooker_version = stream.read_i32("r6vegas_cooker_version")?;
            }
            (EngineBranchId::Dcuo, SummaryInsertPoint::AfterAdditionalPackagesToCook) => {
                let shift = stream.read_i32("dcuo_offset_shift")?;
                if shift != 0 {
                    summary.export_offset += shift;
                    summary.import_offset += shift;
                    summary.name_offset += shift;
                    diagnostics.push("branch", format!("DCUO retroactive offset shift: {shift}"));
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn flag_bit(&self, flag: LogicalFlag) -> u32 {
        // Huxley renumbered the public/standalone object flag bits relative to the de-facto
        // default layout; every other licensee fork modeled here keeps the default bits.
        if self.id == EngineBranchId::Huxley {
            match flag {
                LogicalFlag::ObjectPublic => 0x00000002,
                LogicalFlag::ObjectStandalone => 0x00000001,
                other => EngineBranch::flag_bit(&super::DefaultBranch, other),
            }
        } else {
            EngineBranch::flag_bit(&super::DefaultBranch, flag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use unreal_package_base::Diagnostics;

    #[test]
    fn huxley_flips_public_and_standalone_bits() {
        let branch = LicenseeBranch::new(EngineBranchId::Huxley);
        assert_eq!(branch.flag_bit(LogicalFlag::ObjectPublic), 0x00000002);
        assert_eq!(branch.flag_bit(LogicalFlag::ObjectStandalone), 0x00000001);
    }

    #[test]
    fn r6vegas_reads_cooker_version_after_imports() {
        let branch = LicenseeBranch::new(EngineBranchId::R6Vegas);
        let mut stream = PackageStream::new(Cursor::new(7i32.to_le_bytes().to_vec()));
        let mut summary = Summary::default();
        let mut diagnostics = Diagnostics::new();
        branch
            .read_summary_insert(
                SummaryInsertPoint::AfterImports,
                &mut stream,
                &mut summary,
                &mut diagnostics,
            )
            .unwrap();
        assert_eq!(summary.cooker_version, 7);
    }

    #[test]
    fn huxley_sentinel_mismatch_is_diagnosed_not_fatal() {
        let branch = LicenseeBranch::new(EngineBranchId::Huxley);
        let mut stream = PackageStream::new(Cursor::new(0u32.to_le_bytes().to_vec()));
        let mut summary = Summary::default();
        let mut diagnostics = Diagnostics::new();
        branch
            .read_summary_insert(
                SummaryInsertPoint::AfterPackageFlags,
                &mut stream,
                &mut summary,
                &mut diagnostics,
            )
            .unwrap();
        assert!(!diagnostics.is_empty());
    }
}
