//! The greeting handed across the native bridge.

use std::os::raw::c_char;
use std::panic;
use std::ptr;

use log::{error, trace};

use crate::error::{BridgeError, clear_error, native_error_t, write_error};
use crate::ffi::owned_cstring;
use crate::logging::{TARGET, ensure_logger};

/// Text returned by every bridge entry point.
pub const GREETING: &str = "Hello from C++";

/// Returns the greeting. Callers copy it before handing it to another runtime.
pub fn greeting() -> &'static str {
    GREETING
}

/// Returns a copy of the greeting as a NUL-terminated UTF-8 string.
///
/// The returned string is heap-allocated and must be freed with `native_string_free`.
/// Returns null and fills `out_error` if the copy cannot be built.
#[unsafe(no_mangle)]
pub extern "C" fn native_greeting(out_error: *mut *mut native_error_t) -> *mut c_char {
    ensure_logger();
    clear_error(out_error);
    let result = panic::catch_unwind(|| owned_cstring(greeting()))
        .unwrap_or(Err(BridgeError::Panic("copying the greeting")));

    match result {
        Ok(value) => {
            trace!(target: TARGET, "greeting copied for C caller");
            value.into_raw()
        }
        Err(err) => {
            error!(target: TARGET, "native_greeting failed: {err}");
            write_error(out_error, err.to_string());
            ptr::null_mut()
        }
    }
}
