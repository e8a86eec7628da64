//! Compile-time build identifiers produced by `build.rs`.

use std::ffi::{CStr, CString};

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use crate::version::Version;

const UNKNOWN: &str = "unknown";

/// Identifier strings fixed at build time, null-terminated for C callers.
#[derive(Debug)]
pub struct Identifiers {
    git_commit: CString,
    time: CString,
    version: CString,
    unix_time: u32,
    version_num: u32,
}

static CURRENT: Lazy<Identifiers> = Lazy::new(Identifiers::from_build_env);

/// Returns the identifiers embedded into this build.
pub fn current() -> &'static Identifiers {
    &CURRENT
}

impl Identifiers {
    fn from_build_env() -> Self {
        let (version, version_num) = match Version::from_package() {
            Ok(version) => (version.to_string(), version.number()),
            Err(err) => {
                tracing::warn!(error = %err, "package version cannot be packed, reporting it verbatim");
                (env!("CARGO_PKG_VERSION").to_string(), 0)
            }
        };

        Self {
            git_commit: c_string(option_env!("BUILD_INFO_GIT_COMMIT").unwrap_or(UNKNOWN)),
            time: c_string(option_env!("BUILD_INFO_TIME").unwrap_or(UNKNOWN)),
            version: c_string(&version),
            unix_time: option_env!("BUILD_INFO_UNIX_TIME")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(0),
            version_num,
        }
    }

    /// Output of `git describe` for the built tree.
    pub fn git_commit_str(&self) -> &CStr {
        &self.git_commit
    }

    /// Local build time, `%Y-%m-%d %H:%M:%S`.
    pub fn time_str(&self) -> &CStr {
        &self.time
    }

    pub fn version_str(&self) -> &CStr {
        &self.version
    }

    pub fn unix_time(&self) -> u32 {
        self.unix_time
    }

    pub fn version_num(&self) -> u32 {
        self.version_num
    }

    /// Build instant, when the build script could read the clock.
    pub fn built_at(&self) -> Option<DateTime<Utc>> {
        if self.unix_time == 0 {
            return None;
        }
        DateTime::from_timestamp(i64::from(self.unix_time), 0)
    }
}

fn c_string(value: &str) -> CString {
    CString::new(value).unwrap_or_else(|_| {
        tracing::warn!(value, "build identifier contains a NUL byte");
        CString::new(UNKNOWN).unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_non_empty() {
        let ids = current();
        assert!(!ids.git_commit_str().to_bytes().is_empty());
        assert!(!ids.time_str().to_bytes().is_empty());
        assert!(!ids.version_str().to_bytes().is_empty());
    }

    #[test]
    fn returns_the_same_storage_every_call() {
        assert_eq!(
            current().version_str().as_ptr(),
            current().version_str().as_ptr()
        );
    }

    #[test]
    fn version_number_matches_version_string() {
        let version = Version::from_package().unwrap();
        let ids = current();
        assert_eq!(ids.version_num(), version.number());
        assert_eq!(ids.version_str().to_str().unwrap(), version.to_string());
    }

    #[test]
    fn built_at_follows_unix_time() {
        let ids = current();
        match ids.built_at() {
            Some(at) => assert_eq!(at.timestamp(), i64::from(ids.unix_time())),
            None => assert_eq!(ids.unix_time(), 0),
        }
    }
}
