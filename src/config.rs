//! Generator configuration.
//!
//! [`GeneratorConfig`] is supplied once when the generator is constructed and
//! built with `typed-builder`. [`GeneratorOptions`] is read from the host's
//! global options at the start of every pass.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use typed_builder::TypedBuilder;

use crate::errors::ConfigurationError;
use crate::model::DeclarationKind;
use crate::semantic::DeclarationSyntax;
use crate::traits::SourceGenerator;

/// Host option key controlling whether the marker attribute source is emitted.
pub const INCLUDE_MARKER_ATTRIBUTE_SOURCE_KEY: &str = "build_property.IncludeMarkerAttributeSource";

/// Configuration for an [`AttributeGenerator`](crate::pipeline::AttributeGenerator).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use attribute_source_generator::config::{GeneratorConfig, SymbolFilter};
/// use attribute_source_generator::model::{DeclarationKind, SourceArtifact, Symbol};
///
/// fn render(symbol: &Symbol) -> anyhow::Result<Vec<SourceArtifact>> {
///     Ok(vec![SourceArtifact::for_symbol(format!("// {}", symbol.name()))])
/// }
///
/// let config = GeneratorConfig::builder()
///     .marker_attribute_name("Demo.GenerateAttribute")
///     .marker_attribute_source("namespace Demo { class GenerateAttribute : System.Attribute {} }")
///     .symbol_filter(SymbolFilter::only([DeclarationKind::Class, DeclarationKind::Record]))
///     .source_generator(Arc::new(render))
///     .build();
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.file_extension, "cs");
/// ```
#[derive(Clone, TypedBuilder)]
#[builder(doc)]
pub struct GeneratorConfig {
    /// Fully qualified name of the attribute that triggers matching
    #[builder(setter(into))]
    pub marker_attribute_name: String,

    /// Literal definition of the marker attribute, emitted once per pass
    #[builder(default, setter(strip_option, into))]
    pub marker_attribute_source: Option<String>,

    /// Declaration kinds eligible for matching
    #[builder(default)]
    pub symbol_filter: SymbolFilter,

    /// Callback turning each symbol into artifacts
    #[builder(default, setter(strip_option))]
    pub source_generator: Option<Arc<dyn SourceGenerator>>,

    /// Extension of every emitted artifact, without the leading dot
    #[builder(default = String::from("cs"), setter(into))]
    pub file_extension: String,
}

impl GeneratorConfig {
    /// Checks the configuration before any pass runs.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.marker_attribute_name.trim().is_empty() {
            return Err(ConfigurationError::MissingMarkerAttributeName);
        }
        if self.source_generator.is_none() {
            return Err(ConfigurationError::MissingSourceGenerator);
        }
        let extension = &self.file_extension;
        if extension.is_empty()
            || extension
                .chars()
                .any(|c| c == '.' || c == '/' || c == '\\' || c.is_whitespace())
        {
            return Err(ConfigurationError::InvalidFileExtension(extension.clone()));
        }
        Ok(())
    }

    /// The configured source, emitted verbatim when non-empty.
    pub fn seed_source(&self) -> Option<&str> {
        self.marker_attribute_source
            .as_deref()
            .filter(|source| !source.is_empty())
    }
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("marker_attribute_name", &self.marker_attribute_name)
            .field("marker_attribute_source", &self.marker_attribute_source)
            .field("symbol_filter", &self.symbol_filter)
            .field("source_generator", &self.source_generator.is_some())
            .field("file_extension", &self.file_extension)
            .finish()
    }
}

/// The set of declaration kinds a generator accepts.
///
/// An empty set accepts every kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolFilter(BTreeSet<DeclarationKind>);

impl SymbolFilter {
    /// Every kind an attribute can be applied to.
    pub fn all() -> Self {
        Self(
            DeclarationKind::iter()
                .filter(|kind| kind.is_attribute_target())
                .collect(),
        )
    }

    pub fn only(kinds: impl IntoIterator<Item = DeclarationKind>) -> Self {
        Self(kinds.into_iter().collect())
    }

    pub fn contains(&self, kind: DeclarationKind) -> bool {
        self.0.is_empty() || self.0.contains(&kind)
    }

    /// Whether a declaration with this syntax passes the filter.
    pub fn accepts(&self, syntax: DeclarationSyntax) -> bool {
        syntax
            .declaration_kind()
            .is_some_and(|kind| kind.is_attribute_target() && self.contains(kind))
    }

    pub fn kinds(&self) -> impl Iterator<Item = DeclarationKind> + '_ {
        self.0.iter().copied()
    }
}

impl Default for SymbolFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<DeclarationKind> for SymbolFilter {
    fn from_iter<I: IntoIterator<Item = DeclarationKind>>(iter: I) -> Self {
        Self::only(iter)
    }
}

/// Per-pass options read from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    pub include_marker_attribute_source: bool,
}

impl GeneratorOptions {
    /// Resolves options from the host's global key/value options.
    pub fn from_global_options<K, V>(options: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let include = options
            .into_iter()
            .find(|(key, _)| key.as_ref() == INCLUDE_MARKER_ATTRIBUTE_SOURCE_KEY)
            .map(|(_, value)| parse_flag(value.as_ref()))
            .unwrap_or(true);

        Self {
            include_marker_attribute_source: include,
        }
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            include_marker_attribute_source: true,
        }
    }
}

// blank means "not set", which defaults to true
fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("true")
}
