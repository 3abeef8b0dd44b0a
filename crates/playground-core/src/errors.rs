use playground_core_types::RequestId;
use thiserror::Error;

/// Result type alias using PlaygroundError
pub type Result<T> = std::result::Result<T, PlaygroundError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    Validation,
    NotFound,
    AlreadyExists,

    // Resolution
    Parse,
    Fetch,

    // Run hand-off
    Dispatch,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    Config,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::Parse => "ERR_PARSE",
            ExErrorKind::Fetch => "ERR_FETCH",
            ExErrorKind::Dispatch => "ERR_DISPATCH",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether this kind is a resolution failure that an import swallows
    pub fn is_resolution_failure(&self) -> bool {
        matches!(self, ExErrorKind::Parse | ExErrorKind::Fetch)
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context
/// for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add snippet ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the snippet ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
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
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (snippet_id: {})", entity_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for snippet operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaygroundError {
    // ===== Validation Errors =====
    /// Save was called with an empty entity
    #[error("Snippet cannot be empty")]
    EmptySnippet,

    /// Snippet name is empty or whitespace-only
    #[error("Snippet name cannot be empty")]
    EmptyName { snippet_id: String },

    /// Snippet has no identifier and cannot be used as a store key
    #[error("Snippet id cannot be empty (name: {name})")]
    MissingId { name: String },

    // ===== Store Errors =====
    /// No snippet stored under the key
    #[error("Snippet not found: {snippet_id}")]
    SnippetNotFound { snippet_id: String },

    /// `add` was called for a key that is already stored
    #[error("Snippet already exists: {snippet_id}")]
    AlreadyExists { snippet_id: String },

    /// Backing store failed
    #[error("Persistence error in {op}: {message}")]
    Persistence { op: String, message: String },

    // ===== Resolution Errors =====
    /// Snippet payload could not be parsed
    #[error("Parse error: {reason}")]
    Parse { reason: String },

    /// Remote content could not be fetched
    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    // ===== Run Errors =====
    /// Hand-off to the run endpoint failed
    #[error("Dispatch to {target} failed: {reason}")]
    Dispatch { target: String, reason: String },

    // ===== Generic Errors =====
    /// Serialization error (YAML/JSON encoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PlaygroundError {
    /// Whether this is a validation error that must reach the user
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PlaygroundError::EmptySnippet
                | PlaygroundError::EmptyName { .. }
                | PlaygroundError::MissingId { .. }
        )
    }
}

/// Conversion from PlaygroundError to ExError
impl From<PlaygroundError> for ExError {
    fn from(err: PlaygroundError) -> Self {
        let message = err.to_string();
        match err {
            PlaygroundError::EmptySnippet => ExError::new(ExErrorKind::Validation)
                .with_op("validate")
                .with_message(message),

            PlaygroundError::EmptyName { snippet_id } => ExError::new(ExErrorKind::Validation)
                .with_op("validate")
                .with_entity_id(snippet_id)
                .with_message(message),

            PlaygroundError::MissingId { .. } => ExError::new(ExErrorKind::Validation)
                .with_op("validate")
                .with_message(message),

            PlaygroundError::SnippetNotFound { snippet_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(snippet_id)
                .with_message("Snippet not found"),

            PlaygroundError::AlreadyExists { snippet_id } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_op("store_add")
                    .with_entity_id(snippet_id)
                    .with_message("Snippet already exists")
            }

            PlaygroundError::Persistence { op, .. } => ExError::new(ExErrorKind::Persistence)
                .with_op(op)
                .with_message(message),

            PlaygroundError::Parse { .. } => ExError::new(ExErrorKind::Parse).with_message(message),

            PlaygroundError::Fetch { .. } => ExError::new(ExErrorKind::Fetch)
                .with_op("fetch")
                .with_message(message),

            PlaygroundError::Dispatch { .. } => ExError::new(ExErrorKind::Dispatch)
                .with_op("dispatch")
                .with_message(message),

            PlaygroundError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            PlaygroundError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<serde_yaml::Error> for PlaygroundError {
    fn from(err: serde_yaml::Error) -> Self {
        PlaygroundError::Parse {
            reason: err.to_string(),
        }
    }
}
