/// Failure categories, each with a stable process exit code so shell callers
/// can tell bad input apart from missing artifacts or inference failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed CLI/file input, out-of-bounds request fields, empty dataset.
    InvalidInput,
    /// A model or dataset artifact is absent or unreadable at load time.
    /// Scoring stays unavailable for the process lifetime; restart to retry.
    ArtifactMissing,
    /// A record's fields don't match a fitted preprocessing schema.
    SchemaMismatch,
    /// Classifier shape mismatch or non-finite classifier output.
    Inference,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::InvalidInput => 2,
            ErrorKind::ArtifactMissing => 3,
            ErrorKind::SchemaMismatch => 4,
            ErrorKind::Inference => 5,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    pub fn artifact_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ArtifactMissing, message)
    }

    pub fn schema_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SchemaMismatch, message)
    }

    pub fn inference(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Inference, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
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
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
