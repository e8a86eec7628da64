#![doc(test(attr(deny(warnings))))]

//! Build Info keeps build identifiers (git commit, build time, version)
//! alongside a fixed set of typed fields and one bounded string field, all
//! reachable through paired get/set accessors.
//!
//! ```
//! use build_info::record::BuildInfoRecord;
//!
//! let mut record: BuildInfoRecord = BuildInfoRecord::new().unwrap();
//! record.set_uint16(512);
//! assert_eq!(record.get_uint16(), 512);
//!
//! let mut buf = [0u8; 4];
//! assert!(!record.get_string(&mut buf));
//! assert_eq!(&buf, b"Val\0");
//! ```

pub mod config;
pub mod errors;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod identifiers;
pub mod record;
pub mod utils;
pub mod version;

pub use config::RecordConfig;
pub use errors::BuildInfoError;
pub use record::{BoundedString, BuildInfoRecord};
pub use version::Version;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        let ids = identifiers::current();
        tracing::info!(
            version = %ids.version_str().to_string_lossy(),
            commit = %ids.git_commit_str().to_string_lossy(),
            built = %ids.time_str().to_string_lossy(),
            "Build Info tracing initialized."
        );
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
