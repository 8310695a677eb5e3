//! Logging utilities
//!
//! Helpers for structured logging with tracing. The crate never installs a
//! subscriber; applications decide where these events go.

use regex::Regex;
use std::sync::LazyLock;
use std::time::Instant;
use tracing::debug;

static SECRET_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(api[_-]?key|passw(or)?d|pwd|token|secret|credential|private[_-]?key)")
        .unwrap()
});

/// RAII guard for logging scope entry and exit
///
/// # Example
///
/// ```rust
/// use envbind::logging::LogGuard;
///
/// fn load() {
///     let _guard = LogGuard::new("load");
///     // Guard logs the exit and elapsed time when dropped
/// }
/// ```
pub struct LogGuard {
    name: String,
    start: Instant,
}

impl LogGuard {
    /// Create a new log guard
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!("Entering: {}", name);

        Self {
            name,
            start: Instant::now(),
        }
    }

    /// Get elapsed time since guard creation
    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        debug!("Exiting: {} (elapsed: {:?})", self.name, elapsed);
    }
}

/// Whether an environment key looks like it holds a secret
pub fn is_secret_key(key: &str) -> bool {
    SECRET_KEY_REGEX.is_match(key)
}

/// Value of `key` as it may appear in logs
///
/// # Example
///
/// ```rust
/// use envbind::logging::redact_value;
///
/// assert_eq!(redact_value("DATABASE_PASSWORD", "hunter2"), "[REDACTED]");
/// assert_eq!(redact_value("PORT", "8080"), "8080");
/// ```
pub fn redact_value<'a>(key: &str, value: &'a str) -> &'a str {
    if is_secret_key(key) {
        "[REDACTED]"
    } else {
        value
    }
}
