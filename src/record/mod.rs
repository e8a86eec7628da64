//! The build-info record: identifiers, typed primitive fields and one
//! bounded string field.

pub mod bounded;

use std::ffi::CStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::RecordConfig;
use crate::errors::BuildInfoError;
use crate::identifiers::{self, Identifiers};

pub use bounded::BoundedString;

/// Capacity of the generated string field, terminator included.
pub const STRING_CAPACITY: usize = 6;
/// Content the string field holds before any write.
pub const STRING_INITIAL: &str = "Value";

macro_rules! primitive_fields {
    ($( $(#[$meta:meta])* $field:ident: $ty:ty => $get:ident, $set:ident; )*) => {
        /// Backing storage for every read-write primitive field.
        ///
        /// Each field defaults to its type's zero value.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct PrimitiveFields {
            $( $(#[$meta])* pub $field: $ty, )*
        }

        impl<const C: usize> BuildInfoRecord<C> {
            $(
                #[doc = concat!("Current value of the `", stringify!($ty), "` field.")]
                pub fn $get(&self) -> $ty {
                    self.primitives.$field
                }

                #[doc = concat!("Overwrites the `", stringify!($ty), "` field.")]
                pub fn $set(&mut self, value: $ty) {
                    self.primitives.$field = value;
                }
            )*
        }
    };
}

primitive_fields! {
    int8: i8 => get_int8, set_int8;
    uint8: u8 => get_uint8, set_uint8;
    int16: i16 => get_int16, set_int16;
    uint16: u16 => get_uint16, set_uint16;
    int32: i32 => get_int32, set_int32;
    uint32: u32 => get_uint32, set_uint32;
    int64: i64 => get_int64, set_int64;
    uint64: u64 => get_uint64, set_uint64;
    float: f32 => get_float, set_float;
    double: f64 => get_double, set_double;
    #[serde(rename = "bool")]
    boolean: bool => get_bool, set_bool;
}

/// In-process build metadata record.
///
/// Identifier strings are shared, read-only and live for the whole process;
/// the primitive fields and the string field belong to this record.
#[derive(Debug, Clone)]
pub struct BuildInfoRecord<const C: usize = STRING_CAPACITY> {
    identifiers: &'static Identifiers,
    primitives: PrimitiveFields,
    string: BoundedString<C>,
}

impl<const C: usize> BuildInfoRecord<C> {
    /// Record with zeroed primitives and the generated string content.
    pub fn new() -> Result<Self, BuildInfoError> {
        Self::from_config(&RecordConfig::default())
    }

    /// Record seeded from configured initial values.
    pub fn from_config(config: &RecordConfig) -> Result<Self, BuildInfoError> {
        let string = BoundedString::with_content(&config.string)?;
        Ok(Self::with_parts(config.primitives, string))
    }

    pub fn with_parts(primitives: PrimitiveFields, string: BoundedString<C>) -> Self {
        Self {
            identifiers: identifiers::current(),
            primitives,
            string,
        }
    }

    pub fn primitives(&self) -> &PrimitiveFields {
        &self.primitives
    }

    pub fn git_commit_str(&self) -> &'static CStr {
        self.identifiers.git_commit_str()
    }

    pub fn time_str(&self) -> &'static CStr {
        self.identifiers.time_str()
    }

    pub fn version_str(&self) -> &'static CStr {
        self.identifiers.version_str()
    }

    pub fn unix_time(&self) -> u32 {
        self.identifiers.unix_time()
    }

    pub fn version_num(&self) -> u32 {
        self.identifiers.version_num()
    }

    pub fn built_at(&self) -> Option<DateTime<Utc>> {
        self.identifiers.built_at()
    }

    pub fn string(&self) -> &BoundedString<C> {
        &self.string
    }

    /// Characters stored in the string field, terminator excluded.
    pub fn len_string(&self) -> usize {
        self.string.len()
    }

    pub fn ptr_string(&self) -> &CStr {
        self.string.as_c_str()
    }

    /// See [`BoundedString::get`].
    pub fn get_string(&self, destination: &mut [u8]) -> bool {
        self.string.get(destination)
    }

    /// See [`BoundedString::set`].
    pub fn set_string(&mut self, source: &[u8], length: usize) -> bool {
        self.string.set(source, length)
    }

    pub fn set_string_str(&mut self, value: &str) -> bool {
        self.string.set_str(value)
    }
}
