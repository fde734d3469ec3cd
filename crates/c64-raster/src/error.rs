use std::fmt;

/// A ROM or snapshot image shorter than its fixed size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSizeError {
    /// Which image was being built ("character ROM", "snapshot").
    pub what: &'static str,
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for ImageSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is {} bytes, expected at least {}",
            self.what, self.actual, self.expected,
        )
    }
}

impl std::error::Error for ImageSizeError {}
