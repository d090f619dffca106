use crate::error::{ExplorerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Parses an OS identifier as reported by `std::env::consts::OS`.
    pub fn from_os(os: &str) -> Result<Self> {
        match os.trim().to_ascii_lowercase().as_str() {
            "windows" => Ok(Platform::Windows),
            "macos" | "darwin" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            _ => Err(ExplorerError::UnsupportedPlatform(os.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_identifiers() {
        assert_eq!(Platform::from_os("windows").unwrap(), Platform::Windows);
        assert_eq!(Platform::from_os("macos").unwrap(), Platform::MacOs);
        assert_eq!(Platform::from_os("darwin").unwrap(), Platform::MacOs);
        assert_eq!(Platform::from_os("Linux").unwrap(), Platform::Linux);
    }

    #[test]
    fn rejects_other_identifiers() {
        let err = Platform::from_os("freebsd").unwrap_err();
        assert!(matches!(err, ExplorerError::UnsupportedPlatform(ref os) if os == "freebsd"));
        assert_eq!(err.to_string(), "unsupported platform: freebsd");
    }
}
