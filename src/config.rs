//! Central configuration for the screen-flow crate

use std::sync::LazyLock;

/// Recursion ceiling for nested choice-option groups.
///
/// Option trees are server-built and finite, but the flattener refuses to
/// descend past this depth so a pathological payload cannot exhaust the
/// stack. Branches beyond the ceiling are dropped with a warning.
/// Default: 32
pub static OPTION_MAX_DEPTH: LazyLock<usize> = LazyLock::new(|| {
    std::env::var("SCREEN_OPTION_MAX_DEPTH")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(32)
});

/// Default credential ceremony timeout in milliseconds, applied when the
/// server omits one from the ceremony parameters.
/// Default: 300000 (5 minutes)
pub static CEREMONY_TIMEOUT_MSEC: LazyLock<u32> = LazyLock::new(|| {
    std::env::var("CEREMONY_TIMEOUT_MSEC")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(300_000)
});

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use std::env;

    // The LazyLock statics may already be initialized by another test, so
    // these exercise the same parsing logic the statics use.

    #[test]
    #[serial]
    fn test_option_max_depth_default() {
        let original_value = env::var("SCREEN_OPTION_MAX_DEPTH").ok();

        unsafe {
            env::remove_var("SCREEN_OPTION_MAX_DEPTH");
        }

        let depth: usize = env::var("SCREEN_OPTION_MAX_DEPTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(32);
        assert_eq!(depth, 32);

        if let Some(value) = original_value {
            unsafe {
                env::set_var("SCREEN_OPTION_MAX_DEPTH", value);
            }
        }
    }

    #[test]
    #[serial]
    fn test_ceremony_timeout_custom() {
        let original_value = env::var("CEREMONY_TIMEOUT_MSEC").ok();

        unsafe {
            env::set_var("CEREMONY_TIMEOUT_MSEC", "60000");
        }

        let timeout: u32 = env::var("CEREMONY_TIMEOUT_MSEC")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300_000);
        assert_eq!(timeout, 60_000);

        unsafe {
            if let Some(value) = original_value {
                env::set_var("CEREMONY_TIMEOUT_MSEC", value);
            } else {
                env::remove_var("CEREMONY_TIMEOUT_MSEC");
            }
        }
    }

    #[test]
    #[serial]
    fn test_ceremony_timeout_invalid_falls_back() {
        let original_value = env::var("CEREMONY_TIMEOUT_MSEC").ok();

        unsafe {
            env::set_var("CEREMONY_TIMEOUT_MSEC", "not-a-number");
        }

        let timeout: u32 = env::var("CEREMONY_TIMEOUT_MSEC")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300_000);
        assert_eq!(timeout, 300_000);

        unsafe {
            if let Some(value) = original_value {
                env::set_var("CEREMONY_TIMEOUT_MSEC", value);
            } else {
                env::remove_var("CEREMONY_TIMEOUT_MSEC");
            }
        }
    }
}
