use std::ffi::{CString, NulError};
use std::os::raw::c_char;
use std::ptr;

/// Failures that can occur while building a value to hand across the bridge.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// A JNI call failed. `JavaException` means the JVM has an exception pending.
    #[error("JNI call failed: {0}")]
    Jni(#[from] jni::errors::Error),
    #[error("string contained an interior NUL byte at offset {0}")]
    InteriorNul(usize),
    #[error("panic while {0}")]
    Panic(&'static str),
}

impl From<NulError> for BridgeError {
    fn from(err: NulError) -> Self {
        BridgeError::InteriorNul(err.nul_position())
    }
}

/// Opaque error type for C callers.
#[allow(non_camel_case_types)]
#[repr(C)]
pub struct native_error_t;

struct ErrorHandle {
    message: CString,
}

pub(crate) fn cstring_from_str_lossy(value: &str) -> CString {
    let sanitized = value.replace('\0', " ");
    CString::new(sanitized).unwrap_or_default()
}

pub(crate) fn clear_error(out_error: *mut *mut native_error_t) {
    if !out_error.is_null() {
        // Safety: caller provided a valid out_error pointer.
        unsafe {
            *out_error = ptr::null_mut();
        }
    }
}

pub(crate) fn write_error(out_error: *mut *mut native_error_t, message: impl Into<String>) {
    if out_error.is_null() {
        return;
    }
    let handle = Box::new(ErrorHandle {
        message: cstring_from_str_lossy(&message.into()),
    });
    // Safety: out_error is non-null and points to writable memory.
    unsafe {
        *out_error = Box::into_raw(handle) as *mut native_error_t;
    }
}

/// Returns the message for an error allocated by this library.
///
/// The returned pointer is valid as long as the error handle is alive.
#[unsafe(no_mangle)]
pub extern "C" fn native_error_message(error: *const native_error_t) -> *const c_char {
    if error.is_null() {
        return ptr::null();
    }
    // Safety: error must be a valid handle allocated by this library.
    let handle = unsafe { &*(error as *const ErrorHandle) };
    handle.message.as_ptr()
}

/// Frees an error returned by this library.
#[unsafe(no_mangle)]
pub extern "C" fn native_error_free(error: *mut native_error_t) {
    if error.is_null() {
        return;
    }
    // Safety: error must be a valid handle allocated by this library.
    unsafe {
        drop(Box::from_raw(error as *mut ErrorHandle));
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::CStr;

    use super::*;

    #[test]
    fn lossy_cstring_replaces_interior_nul() {
        let value = cstring_from_str_lossy("a\0b");
        assert_eq!(value.as_bytes(), b"a b");
    }

    #[test]
    fn write_error_round_trips_message() {
        let mut error: *mut native_error_t = ptr::null_mut();
        write_error(&mut error, "boom");
        assert!(!error.is_null());

        let message = unsafe { CStr::from_ptr(native_error_message(error)) };
        assert_eq!(message.to_str().unwrap(), "boom");

        native_error_free(error);
    }

    #[test]
    fn clear_error_resets_pointer() {
        let mut error: *mut native_error_t = ptr::null_mut();
        write_error(&mut error, "stale");
        let stale = error;
        clear_error(&mut error);
        assert!(error.is_null());
        native_error_free(stale);
    }

    #[test]
    fn null_out_error_is_ignored() {
        write_error(ptr::null_mut(), "nobody listens");
        clear_error(ptr::null_mut());
        assert!(native_error_message(ptr::null()).is_null());
        native_error_free(ptr::null_mut());
    }

    #[test]
    fn nul_error_keeps_offset() {
        let err = CString::new("ab\0c").unwrap_err();
        let err = BridgeError::from(err);
        assert!(matches!(err, BridgeError::InteriorNul(2)));
        assert_eq!(err.to_string(), "string contained an interior NUL byte at offset 2");
    }
}
