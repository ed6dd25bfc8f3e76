//! JNI entry points for `com.nerd3c.rviz_for_android.MainActivity`.

use std::panic::{self, AssertUnwindSafe};
use std::ptr;

use jni::JNIEnv;
use jni::objects::{JObject, JString};
use jni::sys::jstring;
use log::{debug, error, trace};

use crate::error::BridgeError;
use crate::greeting::greeting;
use crate::logging::{TARGET, ensure_logger};

/// Binary name of the Java class that declares the native methods.
pub const JAVA_CLASS: &str = "com/nerd3c/rviz_for_android/MainActivity";

/// Runtime-supplied parameters of a JNI call.
///
/// `instance` is the receiver of the Java method. Nothing in the bridge reads it.
pub struct CallContext<'local> {
    env: JNIEnv<'local>,
    instance: JObject<'local>,
}

impl<'local> CallContext<'local> {
    pub fn new(env: JNIEnv<'local>, instance: JObject<'local>) -> Self {
        Self { env, instance }
    }

    pub fn instance(&self) -> &JObject<'local> {
        &self.instance
    }

    /// Creates a new Java string. The JVM owns the returned local reference.
    pub fn new_string(&mut self, value: &str) -> Result<JString<'local>, BridgeError> {
        Ok(self.env.new_string(value)?)
    }
}

/// Builds a JVM-owned copy of the greeting.
pub fn get_greeting<'local>(ctx: &mut CallContext<'local>) -> Result<JString<'local>, BridgeError> {
    ctx.new_string(greeting())
}

/// Implements `native String stringFromJNI()`.
///
/// Returns null when the string cannot be built. If the JVM ran out of memory its
/// `OutOfMemoryError` stays pending and is thrown on return to Java.
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_nerd3c_rviz_1for_1android_MainActivity_stringFromJNI<'local>(
    env: JNIEnv<'local>,
    this: JObject<'local>,
) -> jstring {
    ensure_logger();
    let mut ctx = CallContext::new(env, this);
    let result = panic::catch_unwind(AssertUnwindSafe(|| get_greeting(&mut ctx)));

    match result {
        Ok(Ok(value)) => {
            trace!(target: TARGET, "greeting copied for JVM caller");
            value.into_raw()
        }
        Ok(Err(BridgeError::Jni(jni::errors::Error::JavaException))) => {
            debug!(target: TARGET, "stringFromJNI left a pending Java exception");
            ptr::null_mut()
        }
        Ok(Err(err)) => {
            error!(target: TARGET, "stringFromJNI failed: {err}");
            ptr::null_mut()
        }
        Err(_) => {
            let err = BridgeError::Panic("building the greeting");
            error!(target: TARGET, "stringFromJNI failed: {err}");
            ptr::null_mut()
        }
    }
}

/// Returns the short JNI symbol name of a native method.
///
/// `class` is a binary class name with either `/` or `.` separators.
pub fn jni_symbol_name(class: &str, method: &str) -> String {
    let mut symbol = String::from("Java_");
    mangle_into(&mut symbol, class);
    symbol.push('_');
    mangle_into(&mut symbol, method);
    symbol
}

fn mangle_into(out: &mut String, name: &str) {
    for c in name.chars() {
        match c {
            '/' | '.' => out.push('_'),
            '_' => out.push_str("_1"),
            ';' => out.push_str("_2"),
            '[' => out.push_str("_3"),
            c if c.is_ascii_alphanumeric() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("_0{unit:04x}"));
                }
            }
        }
    }
}
