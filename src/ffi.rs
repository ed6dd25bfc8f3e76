//! Shared utilities for the C ABI.

use std::ffi::CString;
use std::os::raw::c_char;

use crate::error::BridgeError;

/// Copies `value` into a NUL-terminated buffer whose ownership goes to the caller.
pub(crate) fn owned_cstring(value: &str) -> Result<CString, BridgeError> {
    Ok(CString::new(value)?)
}

/// Frees a string allocated by this library.
#[unsafe(no_mangle)]
pub extern "C" fn native_string_free(value: *mut c_char) {
    if value.is_null() {
        return;
    }
    // Safety: value must be a string returned by this library and not freed yet.
    unsafe {
        drop(CString::from_raw(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_cstring_rejects_interior_nul() {
        assert!(matches!(owned_cstring("x\0y"), Err(BridgeError::InteriorNul(1))));
    }

    #[test]
    fn owned_cstring_keeps_utf8_bytes() {
        let value = owned_cstring("Grüße").unwrap();
        assert_eq!(value.as_bytes(), "Grüße".as_bytes());
    }
}
