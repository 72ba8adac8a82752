//! Platform bias and folder-name detection.

/// Coarse platform bias supplied by the caller before detection runs. Folder-name heuristics
/// refine this into a [`CookedPlatform`] once the Summary's folder name is known.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Platform {
    /// No bias supplied.
    #[default]
    Undetermined,
    /// Bias towards desktop builds.
    Pc,
    /// Bias towards console builds.
    Console,
}

/// The cooked-platform folder a package was saved under, detected from the Summary's folder
/// name field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CookedPlatform {
    /// Folder name didn't match a known cooked-platform convention.
    Unknown,
    /// `CookedPC`
    CookedPc,
    /// `CookedPCConsole`
    CookedPcConsole,
    /// `CookedPCServer`
    CookedPcServer,
    /// `CookedXenon`
    CookedXenon,
    /// `CookedIPhone`
    CookedIPhone,
}

impl CookedPlatform {
    /// Detect a cooked-platform folder name from the Summary's folder-name field.
    pub fn detect(folder_name: &str) -> CookedPlatform {
        match folder_name {
            "CookedPC" => CookedPlatform::CookedPc,
            "CookedPCConsole" => CookedPlatform::CookedPcConsole,
            "CookedPCServer" => CookedPlatform::CookedPcServer,
            "CookedXenon" => CookedPlatform::CookedXenon,
            "CookedIPhone" => CookedPlatform::CookedIPhone,
            _ => CookedPlatform::Unknown,
        }
    }
}
