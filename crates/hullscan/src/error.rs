use std::fmt;

/// Error type shared by the point model and the scanner.
///
/// All variants are local and recoverable; the scan state is left untouched
/// (or cleared, for a failed `start`) so the caller can fix the input and retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanError {
    /// A stepping operation was called before `start()`.
    NotStarted,
    /// Fewer than two points at scan start or at the phase transition.
    InsufficientPoints { found: usize },
    /// Accessor called with an index outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "scan not started: call start() first"),
            Self::InsufficientPoints { found } => {
                write!(f, "need at least 2 points to scan, found {found}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "point index {index} out of range for set of {len}")
            }
        }
    }
}

impl std::error::Error for ScanError {}
