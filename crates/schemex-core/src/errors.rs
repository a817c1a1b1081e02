use schemex_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable `ERR_*` code. Codes are what reconciliation
/// reports carry for skipped entities, so they must never be renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExErrorKind {
    // Input
    InvalidInput,

    // Documents
    /// Entity bytes are not UTF-8 JSON, or a property/meta value has the wrong shape
    InvalidEntity,
    /// A required entity field (`Name`, `Meta`, `Properties`) is absent
    MissingField,
    /// The version index document is malformed
    InvalidIndex,

    // Lookup
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    Config,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidEntity => "ERR_INVALID_ENTITY",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::InvalidIndex => "ERR_INVALID_INDEX",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional corpus
/// context (entity name, version) and correlation ids.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_name: Option<String>,
    version: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_name: None,
            version: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity name context
    pub fn with_entity_name(mut self, name: impl Into<String>) -> Self {
        self.entity_name = Some(name.into());
        self
    }

    /// Add version context
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
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

    pub fn entity_name(&self) -> Option<&str> {
        self.entity_name.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

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
        if let Some(name) = &self.entity_name {
            write!(f, " (entity: {})", name)?;
        }
        if let Some(version) = &self.version {
            write!(f, " (version: {})", version)?;
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by {}", source)?;
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

/// Domain error taxonomy for corpus lookups and document validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemexError {
    /// Version id absent from the corpus index
    #[error("Version not found: {version}")]
    VersionNotFound { version: String },

    /// Entity document absent for a version
    #[error("Entity {name} not found in version {version}")]
    EntityNotFound { version: String, name: String },

    /// A comparison was requested between a version and itself
    #[error("Cannot compare version {version} with itself")]
    SameVersion { version: String },

    /// Entity names are used as path segments and must be plain identifiers
    #[error("Invalid entity name: {name}")]
    InvalidEntityName { name: String },

    /// A required top-level entity field is missing
    #[error("Entity document is missing required field `{field}`")]
    MissingField { field: String },

    /// The document parsed but does not have the entity shape
    #[error("Invalid entity document: {reason}")]
    InvalidEntity { reason: String },

    /// The version index parsed but does not have the index shape
    #[error("Invalid version index: {reason}")]
    InvalidIndex { reason: String },
}

impl From<SchemexError> for ExError {
    fn from(err: SchemexError) -> Self {
        match err {
            SchemexError::VersionNotFound { version } => ExError::new(ExErrorKind::NotFound)
                .with_version(version)
                .with_message("Version not found"),

            SchemexError::EntityNotFound { version, name } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_version(version)
                    .with_entity_name(name)
                    .with_message("Entity not found")
            }

            SchemexError::SameVersion { version } => ExError::new(ExErrorKind::InvalidInput)
                .with_version(version)
                .with_message("Cannot compare a version with itself"),

            SchemexError::InvalidEntityName { name } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity_name(name)
                .with_message("Entity name must not contain path separators"),

            SchemexError::MissingField { field } => ExError::new(ExErrorKind::MissingField)
                .with_message(format!("required field `{}` is absent", field)),

            SchemexError::InvalidEntity { reason } => {
                ExError::new(ExErrorKind::InvalidEntity).with_message(reason)
            }

            SchemexError::InvalidIndex { reason } => {
                ExError::new(ExErrorKind::InvalidIndex).with_message(reason)
            }
        }
    }
}
