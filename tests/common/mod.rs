#![allow(dead_code)]

use build_info::{BuildInfoRecord, RecordConfig};

/// Fill byte for guard regions around destination buffers.
pub const GUARD: u8 = 0x5A;

/// Fresh record with zeroed primitives and the generated string.
pub fn fresh_record() -> BuildInfoRecord {
    build_info::init();
    BuildInfoRecord::from_config(&RecordConfig::default()).expect("generated string fits")
}

/// Buffer of `len` writable bytes framed by one guard byte on each side.
pub fn guarded(len: usize) -> Vec<u8> {
    vec![GUARD; len + 2]
}
