//! Build registry: maps `(version, licensee_version)` to a [`Build`] identity and an
//! [`EngineBranchId`].

use lazy_static::lazy_static;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::platform::Platform;

/// Identifies which [`crate::branch`] implementation a [`Build`] should use.
///
/// Variants beyond `Default` and `Ue4` are one per licensee family. The
/// numeric mapping has no on-disk meaning (branches are selected by the build registry, not
/// by serializing this id) but `num_enum` round-tripping is handy for diagnostics/tooling
/// that wants a stable identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum EngineBranchId {
    /// Generic UE1/UE2/UE3 rules.
    Default,
    /// UE4/UE5 rules.
    Ue4,
    /// America's Army 2.
    Aa2,
    /// Duke Nukem Forever.
    Dnf,
    /// BioWare's SFX branch (Mass Effect). Speculative: detected but not instantiated.
    Sfx,
    /// All Points Bulletin.
    Apb,
    /// Red Steel / Ubisoft "RSS" branch.
    Rss,
    /// Rocket League.
    Rl,
    /// "SCX" late licensee branch. Speculative: detected but not instantiated.
    Scx,
    /// "Lead" internal tools branch.
    Lead,
    /// Happy Mask Salesman-style "HMS" branch.
    Hms,
    /// Huxley.
    Huxley,
    /// Tom Clancy's Rainbow Six: Vegas.
    R6Vegas,
    /// DC Universe Online.
    Dcuo,
    /// Tera.
    Tera,
    /// Unreal Tournament 2003.
    Ut2003,
    /// Unreal Tournament 2004.
    Ut2004,
    /// Midway3 licensee branch. Speculative: detected but not instantiated.
    Midway3,
}

/// A generation tag recorded alongside some build descriptors for diagnostics.
pub type Generation = &'static str;

/// A single row of the build registry: a name, a version/licensee predicate, and the
/// overrides applying once it matches.
pub struct BuildDescriptor {
    /// Human name, used in diagnostics and `Build::name`.
    pub name: &'static str,
    /// Branch this build uses.
    pub branch: EngineBranchId,
    /// Engine generation tag, if known.
    pub generation: Option<Generation>,
    /// Predicate deciding whether `(version, licensee_version, platform)` matches this row.
    pub matches: fn(version: i32, licensee_version: i32, platform: Platform) -> bool,
    /// Version to substitute after detection, if any.
    pub version_override: Option<i32>,
    /// Licensee version to substitute after detection, if any.
    pub licensee_version_override: Option<i32>,
    /// `true` if this entry detects but declines to serialize, for forks whose on-disk layout
    /// isn't documented well enough to build a branch for.
    pub speculative: bool,
}

/// The resolved identity of a package's engine build, as returned by [`detect_build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Build {
    /// Human name of the matched build, or `"Default"`/`"Unknown"` if nothing matched.
    pub name: &'static str,
    /// Branch this build uses.
    pub branch: EngineBranchId,
    /// Engine generation tag, if known.
    pub generation: Option<Generation>,
    /// `true` if the matched descriptor is speculative and must not be instantiated.
    pub speculative: bool,
}

impl Build {
    const DEFAULT: Build = Build {
        name: "Default",
        branch: EngineBranchId::Default,
        generation: None,
        speculative: false,
    };

    const UNKNOWN: Build = Build {
        name: "Unknown",
        branch: EngineBranchId::Default,
        generation: None,
        speculative: false,
    };
}

macro_rules! exact {
    ($version:expr, $licensee:expr) => {
        |version, licensee, _platform| version == $version && licensee == $licensee
    };
}

macro_rules! licensee_range {
    ($version:expr, $licensees:expr) => {
        |version, licensee, _platform| version == $version && $licensees.contains(&licensee)
    };
}

lazy_static! {
    /// The compile-time build table. Detection is a linear scan in declaration order; ties
    /// (overlapping predicates) are resolved by declaration order, which intentionally
    /// encodes author-chosen precedence.
    static ref BUILD_REGISTRY: Vec<BuildDescriptor> = vec![
        // UT2004 is declared before UT2003 so that the shared (128, 25) point resolves to
        // UT2004, not the UT2003 range that also covers it.
        BuildDescriptor {
            name: "Unreal Tournament 2004",
            branch: EngineBranchId::Ut2004,
            generation: Some("UE2"),
            matches: licensee_range!(128, 26..=29),
            version_override: None,
            licensee_version_override: None,
            speculative: false,
        },
        BuildDescriptor {
            name: "Unreal Tournament 2004",
            branch: EngineBranchId::Ut2004,
            generation: Some("UE2"),
            matches: exact!(128, 25),
            version_override: None,
            licensee_version_override: None,
            speculative: false,
        },
        BuildDescriptor {
            name: "Unreal Tournament 2003",
            branch: EngineBranchId::Ut2003,
            generation: Some("UE2"),
            matches: licensee_range!(128, 0..=25),
            version_override: None,
            licensee_version_override: None,
            speculative: false,
        },
        BuildDescriptor {
            name: "America's Army 2",
            branch: EngineBranchId::Aa2,
            generation: Some("UE2.5"),
            matches: |version, _licensee, _platform| (300..=400).contains(&version),
            version_override: None,
            licensee_version_override: None,
            speculative: false,
        },
        BuildDescriptor {
            name: "Duke Nukem Forever",
            branch: EngineBranchId::Dnf,
            generation: Some("UE2.5"),
            matches: licensee_range!(150, 0..=5),
            version_override: None,
            licensee_version_override: None,
            speculative: false,
        },
        BuildDescriptor {
            name: "Red Steel",
            branch: EngineBranchId::Rss,
            generation: Some("UE3"),
            matches: licensee_range!(369, 0..=5),
            version_override: None,
            licensee_version_override: None,
            speculative: false,
        },
        BuildDescriptor {
            name: "Huxley",
            branch: EngineBranchId::Huxley,
            generation: Some("UE3"),
            matches: licensee_range!(401, 0..=30),
            version_override: None,
            licensee_version_override: None,
            speculative: false,
        },
        BuildDescriptor {
            name: "Tom Clancy's Rainbow Six: Vegas",
            branch: EngineBranchId::R6Vegas,
            generation: Some("UE3"),
            matches: licensee_range!(241, 0..=10),
            version_override: None,
            licensee_version_override: None,
            speculative: false,
        },
        BuildDescriptor {
            name: "All Points Bulletin",
            branch: EngineBranchId::Apb,
            generation: Some("UE3"),
            matches: licensee_range!(547, 30..=32),
            version_override: None,
            licensee_version_override: None,
            speculative: false,
        },
        BuildDescriptor {
            name: "Rocket League",
            branch: EngineBranchId::Rl,
            generation: Some("UE3"),
            matches: licensee_range!(868, 0..=20),
            version_override: None,
            licensee_version_override: None,
            speculative: false,
        },
        BuildDescriptor {
            name: "DC Universe Online",
            branch: EngineBranchId::Dcuo,
            generation: Some("UE3"),
            matches: licensee_range!(513, 0..=20),
            version_override: None,
            licensee_version_override: None,
            speculative: false,
        },
        BuildDescriptor {
            name: "Tera",
            branch: EngineBranchId::Tera,
            generation: Some("UE3"),
            matches: licensee_range!(632, 0..=40),
            version_override: None,
            licensee_version_override: None,
            speculative: false,
        },
        BuildDescriptor {
            name: "Happy Mask Salesman",
            branch: EngineBranchId::Hms,
            generation: Some("UE3"),
            matches: licensee_range!(576, 0..=10),
            version_override: None,
            licensee_version_override: None,
            speculative: false,
        },
        BuildDescriptor {
            name: "Lead",
            branch: EngineBranchId::Lead,
            generation: Some("UE3"),
            matches: licensee_range!(655, 0..=5),
            version_override: None,
            licensee_version_override: None,
            speculative: false,
        },
        // Speculative: byte layout is undocumented upstream; detected but refused.
        BuildDescriptor {
            name: "Mass Effect (SFX)",
            branch: EngineBranchId::Sfx,
            generation: Some("UE3"),
            matches: licensee_range!(491, 0..=60),
            version_override: None,
            licensee_version_override: None,
            speculative: true,
        },
        BuildDescriptor {
            name: "Midway3",
            branch: EngineBranchId::Midway3,
            generation: Some("UE3"),
            matches: licensee_range!(610, 0..=10),
            version_override: None,
            licensee_version_override: None,
            speculative: true,
        },
        BuildDescriptor {
            name: "SCX (late licensee)",
            branch: EngineBranchId::Scx,
            generation: Some("UE3"),
            matches: licensee_range!(788, 0..=10),
            version_override: None,
            licensee_version_override: None,
            speculative: true,
        },
    ];
}

/// Detect the [`Build`] matching `(version, licensee_version)`, biased by `platform`.
///
/// Traverses [`BUILD_REGISTRY`] in declaration order and returns the first descriptor whose
/// predicate accepts the pair. If nothing matches, the build is `Default` when
/// `licensee_version == 0`, otherwise `Unknown`.
pub fn detect_build(version: i32, licensee_version: i32, platform: Platform) -> Build {
    for descriptor in BUILD_REGISTRY.iter() {
        if (descriptor.matches)(version, licensee_version, platform) {
            return Build {
                name: descriptor.name,
                branch: descriptor.branch,
                generation: descriptor.generation,
                speculative: descriptor.speculative,
            };
        }
    }

    if licensee_version == 0 {
        Build::DEFAULT
    } else {
        Build::UNKNOWN
    }
}

/// The full output of build detection: the matched [`Build`] plus the effective version
/// numbers and platform bias that produced it.
///
/// Kept distinct from [`Build`] so caller-supplied overrides are visible on the detection
/// result without mutating the static registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildTarget {
    /// The matched build identity.
    pub build: Build,
    /// Version actually used for subsequent parsing, after any override was applied.
    pub effective_version: i32,
    /// Licensee version actually used for subsequent parsing, after any override.
    pub effective_licensee_version: i32,
    /// Platform bias supplied by the caller.
    pub platform: Platform,
}

/// Detect a [`BuildTarget`], applying `version_override`/`licensee_version_override` (when
/// set) both to detection input and to the effective versions carried forward.
pub fn detect_build_target(
    version: i32,
    licensee_version: i32,
    platform: Platform,
    version_override: Option<i32>,
    licensee_version_override: Option<i32>,
) -> BuildTarget {
    let version = version_override.unwrap_or(version);
    let licensee_version = licensee_version_override.unwrap_or(licensee_version);
    let build = detect_build(version, licensee_version, platform);
    let (build_version_override, build_licensee_override) =
        find_overrides(version, licensee_version, platform);

    BuildTarget {
        build,
        effective_version: build_version_override.unwrap_or(version),
        effective_licensee_version: build_licensee_override.unwrap_or(licensee_version),
        platform,
    }
}

/// Look up the version/licensee-version overrides for a build, if the matched descriptor
/// specified any.
pub fn find_overrides(version: i32, licensee_version: i32, platform: Platform) -> (Option<i32>, Option<i32>) {
    for descriptor in BUILD_REGISTRY.iter() {
        if (descriptor.matches)(version, licensee_version, platform) {
            return (descriptor.version_override, descriptor.licensee_version_override);
        }
    }
    (None, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_branch_id_round_trips_through_its_numeric_form() {
        let value: u8 = EngineBranchId::Ut2004.into();
        assert_eq!(EngineBranchId::try_from(value).unwrap(), EngineBranchId::Ut2004);
    }

    #[test]
    fn ue1_package_is_default_build() {
        let build = detect_build(68, 0, Platform::Undetermined);
        assert_eq!(build.name, "Default");
        assert_eq!(build.branch, EngineBranchId::Default);
    }

    #[test]
    fn ut2004_wins_tie_break_over_ut2003() {
        let build = detect_build(128, 25, Platform::Undetermined);
        assert_eq!(build.name, "Unreal Tournament 2004");
        assert_eq!(build.branch, EngineBranchId::Ut2004);
    }

    #[test]
    fn ut2003_below_the_ut2004_tie_point() {
        let build = detect_build(128, 10, Platform::Undetermined);
        assert_eq!(build.name, "Unreal Tournament 2003");
    }

    #[test]
    fn unmatched_nonzero_licensee_is_unknown() {
        let build = detect_build(999, 7, Platform::Undetermined);
        assert_eq!(build.name, "Unknown");
    }

    #[test]
    fn build_target_applies_overrides_before_detection() {
        let target = detect_build_target(68, 0, Platform::Undetermined, Some(128), Some(25));
        assert_eq!(target.build.name, "Unreal Tournament 2004");
        assert_eq!(target.effective_version, 128);
        assert_eq!(target.effective_licensee_version, 25);
    }

    #[test]
    fn speculative_builds_are_flagged() {
        let build = detect_build(491, 10, Platform::Undetermined);
        assert!(build.speculative);
    }
}
