use serde::{Deserialize, Serialize};
use std::fmt;

/// Host description printed by `--info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformInfo {
    pub os: String,
    pub os_version: String,
    pub arch: String,
    pub kernel_version: Option<String>,
}

impl fmt::Display for PlatformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.os, self.os_version, self.arch)?;
        if let Some(kernel) = &self.kernel_version {
            write!(f, " [kernel {}]", kernel)?;
        }
        Ok(())
    }
}

pub struct PlatformDetector;

impl PlatformDetector {
    pub fn detect() -> PlatformInfo {
        let info = os_info::get();

        PlatformInfo {
            os: info.os_type().to_string(),
            os_version: info.version().to_string(),
            arch: std::env::consts::ARCH.to_string(),
            kernel_version: sysinfo::System::kernel_version(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_detection() {
        let info = PlatformDetector::detect();

        assert!(!info.os.is_empty());
        assert_eq!(info.arch, std::env::consts::ARCH);
        println!("Detected platform: {}", info);
    }
}
