//! Process logger for the bridge: logcat on Android, `env_logger` elsewhere.

use std::sync::Once;

pub(crate) const TARGET: &str = "native_lib";

static INIT: Once = Once::new();

/// Installs the process logger the first time any entry point runs.
///
/// If the host already installed a `log` backend, that one keeps receiving records.
pub(crate) fn ensure_logger() {
    INIT.call_once(install);
}

#[cfg(target_os = "android")]
fn install() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_tag(TARGET)
            .with_max_level(log::LevelFilter::Debug),
    );
}

#[cfg(not(target_os = "android"))]
fn install() {
    let env = env_logger::Env::default().default_filter_or("native_lib=info");
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!(target: TARGET, "keeping the host's logger");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_installs_are_harmless() {
        ensure_logger();
        ensure_logger();
        assert!(INIT.is_completed());
    }
}
