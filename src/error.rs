use thiserror::Error;

/// Process-boundary error: a message plus the exit code `macro` should return.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Why a single series produced no result.
///
/// Analytics return this per series; aggregate operations swallow it (and log
/// it) so one series never affects another.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// Transport, HTTP status, or response decoding failure.
    #[error("fetch failed: {0}")]
    Fetch(String),
    /// The source answered, but with zero observations.
    #[error("no observations returned")]
    NoObservations,
    /// Fewer than two usable values, or a zero base value.
    #[error("insufficient data")]
    InsufficientData,
    /// A record whose value or date could not be parsed.
    #[error("malformed record: {0}")]
    Malformed(String),
}

impl SeriesError {
    /// True for outcomes a caller should report as "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(self, SeriesError::NoObservations | SeriesError::InsufficientData)
    }
}

impl From<SeriesError> for AppError {
    fn from(err: SeriesError) -> Self {
        let code = if err.is_not_found() { 3 } else { 4 };
        AppError::new(code, err.to_string())
    }
}
