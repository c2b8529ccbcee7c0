//! Process-wide codec settings.

use std::sync::atomic::{AtomicBool, Ordering};

static SIMPLE_STRING_OUTPUT: AtomicBool = AtomicBool::new(false);

/// Whether the process asked for versions to be written in the plain-string form.
///
/// Reserved. The encoders in this crate always write the structured form and do
/// not read this value; decoding accepts both forms regardless.
pub fn simple_string_output() -> bool {
    SIMPLE_STRING_OUTPUT.load(Ordering::Relaxed)
}

/// Records the plain-string preference. Has no effect on encoding.
pub fn set_simple_string_output(enabled: bool) {
    SIMPLE_STRING_OUTPUT.store(enabled, Ordering::Relaxed);
}
