use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::BuildInfoError;

/// Semantic version whose numeric parts each fit in one byte.
///
/// The packed [`Version::number`] places major, minor and patch in
/// consecutive bytes, so every component must stay below 256.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
    pub pre_release: String,
    pub build_metadata: String,
}

impl Version {
    pub fn new(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: impl Into<String>,
        build_metadata: impl Into<String>,
    ) -> Result<Self, BuildInfoError> {
        Ok(Self {
            major: component("major", major)?,
            minor: component("minor", minor)?,
            patch: component("patch", patch)?,
            pre_release: pre_release.into(),
            build_metadata: build_metadata.into(),
        })
    }

    /// Parses `MAJOR.MINOR.PATCH[-PRE][+BUILD]`.
    pub fn parse(text: &str) -> Result<Self, BuildInfoError> {
        let text = text.trim();
        let (rest, build_metadata) = text.split_once('+').unwrap_or((text, ""));
        let (core, pre_release) = rest.split_once('-').unwrap_or((rest, ""));

        let numbers = core
            .split('.')
            .map(|part| {
                part.parse::<u64>().map_err(|err| {
                    BuildInfoError::InvalidVersion(format!("`{text}`: `{part}` {err}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        match numbers.as_slice() {
            [major, minor, patch] => {
                Self::new(*major, *minor, *patch, pre_release, build_metadata)
            }
            _ => Err(BuildInfoError::InvalidVersion(format!(
                "`{text}`: expected MAJOR.MINOR.PATCH"
            ))),
        }
    }

    /// Version of this crate as declared in its manifest.
    pub fn from_package() -> Result<Self, BuildInfoError> {
        Self::parse(env!("CARGO_PKG_VERSION"))
    }

    /// `(major << 16) + (minor << 8) + patch`.
    pub fn number(&self) -> u32 {
        (u32::from(self.major) << 16) + (u32::from(self.minor) << 8) + u32::from(self.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if self.patch != 0 {
            write!(f, ".{}", self.patch)?;
        }
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build_metadata.is_empty() {
            write!(f, "+{}", self.build_metadata)?;
        }
        Ok(())
    }
}

fn component(name: &'static str, value: u64) -> Result<u8, BuildInfoError> {
    u8::try_from(value).map_err(|_| BuildInfoError::VersionOutOfRange {
        component: name,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_zero_patch_and_empty_suffixes() {
        let version = Version::new(1, 2, 0, "", "").unwrap();
        assert_eq!(version.to_string(), "1.2");

        let version = Version::new(1, 2, 3, "", "").unwrap();
        assert_eq!(version.to_string(), "1.2.3");
    }

    #[test]
    fn appends_pre_release_and_build_metadata() {
        let version = Version::new(0, 9, 1, "rc.1", "exp.sha.5114f85").unwrap();
        assert_eq!(version.to_string(), "0.9.1-rc.1+exp.sha.5114f85");

        let version = Version::new(2, 0, 0, "", "20250101").unwrap();
        assert_eq!(version.to_string(), "2.0+20250101");
    }

    #[test]
    fn packs_components_into_number() {
        let version = Version::new(1, 2, 3, "", "").unwrap();
        assert_eq!(version.number(), 0x0001_0203);

        let version = Version::new(255, 255, 255, "", "").unwrap();
        assert_eq!(version.number(), 0x00FF_FFFF);
    }

    #[test]
    fn rejects_components_above_one_byte() {
        let err = Version::new(1, 256, 0, "", "").unwrap_err();
        assert!(matches!(
            err,
            BuildInfoError::VersionOutOfRange {
                component: "minor",
                value: 256
            }
        ));
    }

    #[test]
    fn parses_full_semver() {
        let version = Version::parse("3.4.5-beta+build.7").unwrap();
        assert_eq!(version.major, 3);
        assert_eq!(version.minor, 4);
        assert_eq!(version.patch, 5);
        assert_eq!(version.pre_release, "beta");
        assert_eq!(version.build_metadata, "build.7");
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(matches!(
            Version::parse("1.2"),
            Err(BuildInfoError::InvalidVersion(_))
        ));
        assert!(matches!(
            Version::parse("1.x.3"),
            Err(BuildInfoError::InvalidVersion(_))
        ));
        assert!(matches!(
            Version::parse("1.2.300"),
            Err(BuildInfoError::VersionOutOfRange { .. })
        ));
    }

    #[test]
    fn package_version_is_valid() {
        let version = Version::from_package().unwrap();
        assert_eq!(version.number() >> 16, u32::from(version.major));
    }
}
