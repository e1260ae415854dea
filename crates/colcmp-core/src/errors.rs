use colcmp_core_types::RunId;
use thiserror::Error;

/// Result type alias using ComparisonError
pub type Result<T> = std::result::Result<T, ComparisonError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and machine-readable CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Precondition
    InvalidArgument,

    // Input loading
    Io,
    Parse,
    Config,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Parse => "ERR_PARSE",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, dataset, path, run) for diagnostics.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    dataset: Option<String>,
    path: Option<String>,
    run_id: Option<RunId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            dataset: None,
            path: None,
            run_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add dataset name context
    pub fn with_dataset(mut self, name: impl Into<String>) -> Self {
        self.dataset = Some(name.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add run ID context
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn dataset(&self) -> Option<&str> {
        self.dataset.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(dataset) = &self.dataset {
            write!(f, " (dataset: {})", dataset)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Precondition failures raised by the column comparator
///
/// All variants are detected before any set computation begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    /// Fewer than two datasets were supplied
    #[error("at least 2 datasets required (got {count})")]
    TooFewDatasets { count: usize },

    /// Explicit names do not line up one-to-one with the datasets
    #[error("names count must match dataset count ({names} names, {datasets} datasets)")]
    NameCountMismatch { names: usize, datasets: usize },

    /// The same display name was given to more than one dataset
    #[error("dataset names must be distinct: '{name}'")]
    DuplicateName { name: String },
}

impl ComparisonError {
    /// Every comparator error is a precondition violation
    pub fn kind(&self) -> ExErrorKind {
        ExErrorKind::InvalidArgument
    }
}

impl From<ComparisonError> for ExError {
    fn from(err: ComparisonError) -> Self {
        let message = err.to_string();
        match err {
            ComparisonError::TooFewDatasets { .. } | ComparisonError::NameCountMismatch { .. } => {
                ExError::new(ExErrorKind::InvalidArgument)
                    .with_op("compare_columns")
                    .with_message(message)
            }
            ComparisonError::DuplicateName { name } => ExError::new(ExErrorKind::InvalidArgument)
                .with_op("compare_columns")
                .with_dataset(name)
                .with_message(message),
        }
    }
}

impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        ExError::new(ExErrorKind::Serialization).with_message(err.to_string())
    }
}
