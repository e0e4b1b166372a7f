use thiserror::Error;

use crate::pipeline::diagnostics::DiagnosticCode;

pub type GeneratorResult<T> = Result<T, GeneratorError>;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    UnsupportedSymbol(#[from] UnsupportedSymbolError),

    #[error(transparent)]
    MalformedAttribute(#[from] MalformedAttributeError),

    #[error(transparent)]
    EmitCollision(#[from] EmitCollisionError),

    #[error("Source generator failed for '{symbol}': {source}")]
    GenerationFailed {
        symbol: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Fingerprint Encode Error: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Operation was cancelled")]
    Cancelled,
}

impl GeneratorError {
    /// True for the one early exit that is not a failure.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, GeneratorError::Cancelled)
    }

    /// Stable code used when this error is reported against a symbol.
    pub fn diagnostic_code(&self) -> DiagnosticCode {
        match self {
            GeneratorError::Configuration(_) => DiagnosticCode::Configuration,
            GeneratorError::UnsupportedSymbol(_) => DiagnosticCode::UnsupportedSymbol,
            GeneratorError::MalformedAttribute(_) => DiagnosticCode::MalformedAttribute,
            GeneratorError::EmitCollision(_) => DiagnosticCode::EmitCollision,
            GeneratorError::GenerationFailed { .. } => DiagnosticCode::GenerationFailed,
            GeneratorError::Encode(_) => DiagnosticCode::Internal,
            GeneratorError::Cancelled => DiagnosticCode::Internal,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Marker attribute name is missing or blank")]
    MissingMarkerAttributeName,
    #[error("No source generator callback was configured")]
    MissingSourceGenerator,
    #[error("Invalid artifact file extension '{0}'")]
    InvalidFileExtension(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported symbol '{name}': {shape} cannot be classified as a declaration")]
pub struct UnsupportedSymbolError {
    pub name: String,
    pub shape: String,
}

impl UnsupportedSymbolError {
    pub fn new(name: impl Into<String>, shape: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape: shape.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedAttributeError {
    #[error("Matched symbol carries no marker attribute instance")]
    MissingAttributeInstance,
    #[error("Attribute class of the marker attribute could not be resolved")]
    UnresolvedAttributeClass,
    #[error("Constructor of attribute '{0}' could not be resolved")]
    UnresolvedConstructor(String),
    #[error("Attribute '{attribute}' declares {expected} constructor parameters but {found} values were supplied")]
    ConstructorArgumentMismatch {
        attribute: String,
        expected: usize,
        found: usize,
    },
    #[error("Attribute '{attribute}' declares {expected} type parameters but {found} type arguments were bound")]
    TypeArgumentMismatch {
        attribute: String,
        expected: usize,
        found: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Source '{hint_name}' from '{incoming}' collides with the source already emitted by '{existing}'")]
pub struct EmitCollisionError {
    pub hint_name: String,
    pub existing: String,
    pub incoming: String,
}
