//! Native bridge for rviz_for_android: JNI and C entry points.

mod error;
mod ffi;
mod greeting;
mod jni_bridge;
mod logging;

pub use error::{BridgeError, native_error_free, native_error_message, native_error_t};
pub use ffi::native_string_free;
pub use greeting::{GREETING, greeting, native_greeting};
pub use jni_bridge::{
    CallContext, JAVA_CLASS, Java_com_nerd3c_rviz_1for_1android_MainActivity_stringFromJNI,
    get_greeting, jni_symbol_name,
};
