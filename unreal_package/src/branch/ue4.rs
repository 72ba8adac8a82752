//! UE4/UE5 rules.

use std::io::{Read, Seek};

use unreal_package_base::{Diagnostics, EngineBranchId, Result};

use super::EngineBranch;
use crate::stream::PackageStream;
use crate::summary::Summary;

/// UE4/UE5 branch. The base reader already handles everything UE4 changed structurally
/// (legacy-version detection, custom-version lists, localization-id gating); this branch
/// currently only needs the shared default hooks.
pub struct Ue4Branch;

impl EngineBranch for Ue4Branch {
    fn id(&self) -> EngineBranchId {
        EngineBranchId::Ue4
    }

    fn post_deserialize_summary<S: Read + Seek>(
        &self,
        _stream: &mut PackageStream<S>,
        summary: &mut Summary,
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        if !summary.header_size_reaches_every_table_offset() {
            diagnostics.push(
                "summary",
                "a table offset falls past the declared header size",
            );
        }
        Ok(())
    }
}
