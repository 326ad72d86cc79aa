use std::sync::Once;

pub static INIT_TEST_ONCE: Once = Once::new();

/// Initialize process-wide test state (logging) exactly once per test binary.
#[macro_export]
macro_rules! setup_test {
    () => {{
        $crate::test_utils::INIT_TEST_ONCE.call_once(|| {
            $crate::logging::configure_logging().unwrap();
        });
    }};
}
