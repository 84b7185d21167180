use std::fmt;

/// Operating system families the scanner is published for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Linux,
    MacOs,
}

impl OsFamily {
    /// Maps `std::env::consts::OS`; anything other than macOS is treated as Linux
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => OsFamily::MacOs,
            _ => OsFamily::Linux,
        }
    }

    /// Spelling used in release asset names
    pub fn asset_label(&self) -> &'static str {
        match self {
            OsFamily::Linux => "Linux",
            OsFamily::MacOs => "macOS",
        }
    }
}

/// CPU architecture families the scanner is published for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuArch {
    X64,
    Arm64,
}

impl CpuArch {
    /// Maps `std::env::consts::ARCH`; anything other than x86_64 is treated as ARM64
    pub fn from_arch(arch: &str) -> Self {
        match arch {
            "x86_64" => CpuArch::X64,
            _ => CpuArch::Arm64,
        }
    }

    /// Spelling used in release asset names
    pub fn asset_label(&self) -> &'static str {
        match self {
            CpuArch::X64 => "64bit",
            CpuArch::Arm64 => "ARM64",
        }
    }

    /// Spelling used for tool cache directories
    pub fn cache_label(&self) -> &'static str {
        match self {
            CpuArch::X64 => "x64",
            CpuArch::Arm64 => "arm64",
        }
    }
}

/// Platform value object: the (OS, architecture) pair of the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    os: OsFamily,
    arch: CpuArch,
}

impl Platform {
    pub fn new(os: OsFamily, arch: CpuArch) -> Self {
        Self { os, arch }
    }

    /// Platform of the running process
    pub fn detect() -> Self {
        Self::new(
            OsFamily::from_os(std::env::consts::OS),
            CpuArch::from_arch(std::env::consts::ARCH),
        )
    }

    pub fn os(&self) -> OsFamily {
        self.os
    }

    pub fn arch(&self) -> CpuArch {
        self.arch
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os.asset_label(), self.arch.asset_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_family_mapping() {
        assert_eq!(OsFamily::from_os("macos"), OsFamily::MacOs);
        assert_eq!(OsFamily::from_os("linux"), OsFamily::Linux);
        assert_eq!(OsFamily::from_os("freebsd"), OsFamily::Linux);
    }

    #[test]
    fn test_cpu_arch_mapping() {
        assert_eq!(CpuArch::from_arch("x86_64"), CpuArch::X64);
        assert_eq!(CpuArch::from_arch("aarch64"), CpuArch::Arm64);
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(
            Platform::new(OsFamily::Linux, CpuArch::X64).to_string(),
            "Linux-64bit"
        );
        assert_eq!(
            Platform::new(OsFamily::MacOs, CpuArch::Arm64).to_string(),
            "macOS-ARM64"
        );
    }
}
