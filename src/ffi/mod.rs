//! C ABI over one process-wide build-info record.
//!
//! Every call takes the record's mutex for the duration of the access, so
//! C callers on several threads never observe a half-written field.

use std::os::raw::c_char;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;

use crate::identifiers;
use crate::record::{BoundedString, BuildInfoRecord, PrimitiveFields, STRING_CAPACITY};

static RECORD: Lazy<Mutex<BuildInfoRecord>> = Lazy::new(|| {
    let record = BuildInfoRecord::new().unwrap_or_else(|err| {
        tracing::error!(error = %err, "generated string does not fit, starting empty");
        BuildInfoRecord::with_parts(PrimitiveFields::default(), BoundedString::new())
    });
    Mutex::new(record)
});

fn with_record<R>(access: impl FnOnce(&mut BuildInfoRecord) -> R) -> R {
    let mut record = RECORD.lock().unwrap_or_else(PoisonError::into_inner);
    access(&mut record)
}

macro_rules! ffi_primitives {
    ($( $ty:ty: $ffi_get:ident => $get:ident, $ffi_set:ident => $set:ident; )*) => {
        $(
            #[no_mangle]
            pub extern "C" fn $ffi_get() -> $ty {
                with_record(|record| record.$get())
            }

            #[no_mangle]
            pub extern "C" fn $ffi_set(value: $ty) {
                with_record(|record| record.$set(value))
            }
        )*
    };
}

ffi_primitives! {
    i8: build_info_get_int8 => get_int8, build_info_set_int8 => set_int8;
    u8: build_info_get_uint8 => get_uint8, build_info_set_uint8 => set_uint8;
    i16: build_info_get_int16 => get_int16, build_info_set_int16 => set_int16;
    u16: build_info_get_uint16 => get_uint16, build_info_set_uint16 => set_uint16;
    i32: build_info_get_int32 => get_int32, build_info_set_int32 => set_int32;
    u32: build_info_get_uint32 => get_uint32, build_info_set_uint32 => set_uint32;
    i64: build_info_get_int64 => get_int64, build_info_set_int64 => set_int64;
    u64: build_info_get_uint64 => get_uint64, build_info_set_uint64 => set_uint64;
    f32: build_info_get_float => get_float, build_info_set_float => set_float;
    f64: build_info_get_double => get_double, build_info_set_double => set_double;
    bool: build_info_get_bool => get_bool, build_info_set_bool => set_bool;
}

#[no_mangle]
pub extern "C" fn build_info_ptr_git_commit_str() -> *const c_char {
    identifiers::current().git_commit_str().as_ptr()
}

#[no_mangle]
pub extern "C" fn build_info_ptr_time_str() -> *const c_char {
    identifiers::current().time_str().as_ptr()
}

#[no_mangle]
pub extern "C" fn build_info_ptr_version_str() -> *const c_char {
    identifiers::current().version_str().as_ptr()
}

#[no_mangle]
pub extern "C" fn build_info_unix_time() -> u32 {
    identifiers::current().unix_time()
}

#[no_mangle]
pub extern "C" fn build_info_version_num() -> u32 {
    identifiers::current().version_num()
}

#[no_mangle]
pub extern "C" fn build_info_len_string() -> usize {
    with_record(|record| record.len_string())
}

/// Pointer to the string field. Invalidated by the next successful
/// `build_info_set_string`.
#[no_mangle]
pub extern "C" fn build_info_ptr_string() -> *const c_char {
    with_record(|record| record.ptr_string().as_ptr())
}

/// Copies the string field into `buffer`, always terminating it.
///
/// # Safety
///
/// `buffer` must be null or valid for writes of `length` bytes.
#[no_mangle]
pub unsafe extern "C" fn build_info_get_string(buffer: *mut c_char, length: usize) -> bool {
    if buffer.is_null() {
        return false;
    }
    let destination = std::slice::from_raw_parts_mut(buffer.cast::<u8>(), length);
    with_record(|record| record.get_string(destination))
}

/// Replaces the string field; `length` counts the terminator slot.
///
/// # Safety
///
/// `source` must be null or readable up to its first NUL byte or for
/// `length - 1` bytes, whichever comes first.
#[no_mangle]
pub unsafe extern "C" fn build_info_set_string(source: *const c_char, length: usize) -> bool {
    if source.is_null() {
        return false;
    }

    let source = source.cast::<u8>();
    let limit = length.saturating_sub(1).min(STRING_CAPACITY);
    let mut count = 0;
    while count < limit && *source.add(count) != 0 {
        count += 1;
    }
    let candidate = std::slice::from_raw_parts(source, count);
    with_record(|record| record.set_string(candidate, length))
}
