//! Per-symbol failure reports.

use std::fmt;

use strum::{AsRefStr, Display, EnumIter};

use crate::errors::GeneratorError;
use crate::semantic::SourceLocation;

/// Stable identifier of a diagnostic, one per error family.
///
/// Variants are declared in code order, so `Ord` follows the code text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter)]
pub enum DiagnosticCode {
    #[strum(serialize = "ASG001")]
    Configuration,
    #[strum(serialize = "ASG002")]
    UnsupportedSymbol,
    #[strum(serialize = "ASG003")]
    MalformedAttribute,
    #[strum(serialize = "ASG004")]
    EmitCollision,
    #[strum(serialize = "ASG005")]
    GenerationFailed,
    #[strum(serialize = "ASG006")]
    Internal,
}

/// A failure attributed to one matched declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub message: String,
    /// Name of the offending symbol, when one is known.
    pub symbol: Option<String>,
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    pub fn from_error(
        error: &GeneratorError,
        symbol: Option<String>,
        location: Option<SourceLocation>,
    ) -> Self {
        Self {
            code: error.diagnostic_code(),
            message: error.to_string(),
            symbol,
            location,
        }
    }

    /// Pass output order: location, then symbol, code and message.
    pub fn sort_key(&self) -> (Option<&SourceLocation>, Option<&str>, DiagnosticCode, &str) {
        (
            self.location.as_ref(),
            self.symbol.as_deref(),
            self.code,
            self.message.as_str(),
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{location}: ")?;
        }
        write!(f, "error {}: {}", self.code, self.message)
    }
}
