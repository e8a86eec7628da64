use std::ffi::CStr;
use std::fmt;
use std::os::raw::c_char;

use crate::errors::BuildInfoError;

/// Fixed-capacity, always null-terminated byte string.
///
/// `C` counts the terminator, so at most `C - 1` characters are stored.
/// The buffer never grows and no operation writes outside of it or outside
/// of a caller-provided destination.
#[derive(Clone, PartialEq, Eq)]
pub struct BoundedString<const C: usize> {
    buf: [u8; C],
    len: usize,
}

impl<const C: usize> BoundedString<C> {
    const HAS_TERMINATOR_SLOT: () = assert!(C >= 1, "a bounded string needs room for its terminator");

    /// Creates an empty string.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::HAS_TERMINATOR_SLOT;
        Self {
            buf: [0; C],
            len: 0,
        }
    }

    /// Creates a string holding `content`, failing when it does not fit.
    pub fn with_content(content: &str) -> Result<Self, BuildInfoError> {
        let mut value = Self::new();
        if value.set_str(content) {
            Ok(value)
        } else {
            Err(BuildInfoError::ContentTooLong {
                capacity: C,
                length: content.len(),
            })
        }
    }

    /// Total buffer size, terminator included.
    pub const fn capacity(&self) -> usize {
        C
    }

    /// Number of characters stored, terminator excluded.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    /// Read-only view of the current content.
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(&self.buf).unwrap_or_default()
    }

    /// Raw pointer to the terminated content, for C callers.
    pub fn as_ptr(&self) -> *const c_char {
        self.buf.as_ptr().cast()
    }

    /// Copies the content into `destination`, always terminating it.
    ///
    /// At most `destination.len() - 1` characters are copied. The terminator
    /// lands right after the copied characters, which is the last byte of
    /// `destination` when the content had to be cut. Returns `false` when the
    /// content was truncated. An empty destination cannot even hold the
    /// terminator: nothing is written and `false` is returned.
    pub fn get(&self, destination: &mut [u8]) -> bool {
        let Some(last) = destination.len().checked_sub(1) else {
            tracing::debug!("bounded string read into an empty destination");
            return false;
        };

        let count = self.len.min(last);
        destination[..count].copy_from_slice(&self.buf[..count]);
        destination[count] = 0;

        let complete = count == self.len;
        if !complete {
            tracing::debug!(
                stored = self.len,
                destination = destination.len(),
                "bounded string read truncated"
            );
        }
        complete
    }

    /// Replaces the content with the first `length - 1` characters of `source`.
    ///
    /// `length` counts the terminator slot: `0` writes nothing and succeeds,
    /// `1` stores the empty string. Copying stops early at a NUL byte or at
    /// the end of `source`. When `length` exceeds the capacity nothing is
    /// written and `false` is returned.
    pub fn set(&mut self, source: &[u8], length: usize) -> bool {
        if length == 0 {
            return true;
        }
        if length > C {
            tracing::debug!(capacity = C, length, "bounded string write rejected");
            return false;
        }

        let candidate = &source[..(length - 1).min(source.len())];
        let count = candidate
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(candidate.len());

        self.buf[..count].copy_from_slice(&candidate[..count]);
        self.buf[count..].fill(0);
        self.len = count;
        true
    }

    /// Replaces the content with `value`, all or nothing.
    pub fn set_str(&mut self, value: &str) -> bool {
        self.set(value.as_bytes(), value.len() + 1)
    }
}

impl<const C: usize> Default for BoundedString<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const C: usize> fmt::Debug for BoundedString<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedString")
            .field("capacity", &C)
            .field("content", &self.as_c_str())
            .finish()
    }
}

impl<const C: usize> fmt::Display for BoundedString<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}
