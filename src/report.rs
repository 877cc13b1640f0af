use core::fmt;

/// Before/after sizes of one pack or unpack call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub before: usize,
    pub after: usize,
}

impl Report {
    #[must_use]
    pub const fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    /// Size reduction relative to `before`, in percent.
    ///
    /// Negative when the output grew; `0.0` for empty input.
    #[must_use]
    pub fn savings_percent(&self) -> f64 {
        if self.before == 0 {
            return 0.0;
        }
        (self.before as f64 - self.after as f64) / self.before as f64 * 100.0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<15}{} bytes", "Before:", self.before)?;
        writeln!(f, "{:<15}{} bytes", "After:", self.after)?;
        write!(f, "{:<15}{:.2}%", "Compression:", self.savings_percent())
    }
}
