//! Generic UE1/UE2/UE3 rules; the baseline every other branch's `flag_bit` defaults match.

use unreal_package_base::EngineBranchId;

use super::EngineBranch;

/// UE1/UE2/UE3 generic branch. Overrides nothing: its rules define the default hook bodies
/// and `flag_bit` layout on [`EngineBranch`] itself.
pub struct DefaultBranch;

impl EngineBranch for DefaultBranch {
    fn id(&self) -> EngineBranchId {
        EngineBranchId::Default
    }
}
