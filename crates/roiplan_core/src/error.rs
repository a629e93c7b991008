use std::fmt;

/// Errors from configuring a sensitivity sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepError {
    /// A sweep needs at least two steps to define a stride
    TooFewSteps { steps: usize },
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::TooFewSteps { steps } => {
                write!(f, "sweep needs at least 2 steps, got {steps}")
            }
        }
    }
}

impl std::error::Error for SweepError {}

/// Errors from writing a result export
#[derive(Debug)]
pub enum ExportError {
    Csv(csv::Error),
    Io(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Csv(e) => write!(f, "CSV encoding failed: {e}"),
            ExportError::Io(e) => write!(f, "export write failed: {e}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Csv(e) => Some(e),
            ExportError::Io(e) => Some(e),
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Csv(err)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err)
    }
}

