//! The generation pipeline: seed, filter, transform, generate, emit.

use std::sync::Arc;

use log::{debug, trace, warn};

use crate::config::{GeneratorConfig, GeneratorOptions};
use crate::errors::{ConfigurationError, GeneratorError, GeneratorResult};
use crate::extract;
use crate::model::source::hint_name;
use crate::model::{EmittedSource, Symbol};
use crate::pipeline::diagnostics::Diagnostic;
use crate::pipeline::emit::{EmitOrigin, EmitRegistry};
use crate::semantic::{AttributeSyntaxContext, DeclarationSyntax};
use crate::traits::{CancellationSignal, SourceGenerator, SourceOutput};

/// A configured generator.
///
/// Holds no state between symbols or passes. Every method takes its inputs
/// by reference and returns fresh values, so one generator can serve
/// concurrent calls from the host.
#[derive(Debug, Clone)]
pub struct AttributeGenerator {
    config: GeneratorConfig,
}

impl AttributeGenerator {
    /// Validates `config`; an invalid configuration never produces a generator.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        debug!(
            "configured generator for '{}' (.{})",
            config.marker_attribute_name, config.file_extension
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The marker attribute definition, when configured and enabled.
    pub fn seed(&self, options: &GeneratorOptions) -> Option<EmittedSource> {
        if !options.include_marker_attribute_source {
            return None;
        }
        let source = self.config.seed_source()?;
        Some(EmittedSource::new(
            hint_name(&self.config.marker_attribute_name, &self.config.file_extension),
            source,
        ))
    }

    /// Whether a declaration with this syntax is processed at all.
    pub fn filter(&self, syntax: DeclarationSyntax) -> bool {
        self.config.symbol_filter.accepts(syntax)
    }

    pub fn transform<C>(&self, context: &AttributeSyntaxContext, cancel: &C) -> GeneratorResult<Symbol>
    where
        C: CancellationSignal + ?Sized,
    {
        extract::transform(context, cancel)
    }

    /// Runs the callback and derives a hint name for every artifact.
    pub fn generate(&self, symbol: &Symbol) -> GeneratorResult<Vec<EmittedSource>> {
        let artifacts = self
            .source_generator()?
            .generate(symbol)
            .map_err(|source| GeneratorError::GenerationFailed {
                symbol: symbol.fully_qualified_name(),
                source,
            })?;

        Ok(artifacts
            .into_iter()
            .map(|artifact| {
                EmittedSource::new(
                    artifact.hint_name(symbol, &self.config.file_extension),
                    artifact.text(),
                )
            })
            .collect())
    }

    /// Runs one compilation pass over `candidates`.
    ///
    /// Failures are isolated per candidate and reported as diagnostics.
    /// Cancellation discards the whole pass.
    pub fn run_pass<C>(
        &self,
        candidates: &[AttributeSyntaxContext],
        options: &GeneratorOptions,
        cancel: &C,
    ) -> GeneratorResult<PassOutput>
    where
        C: CancellationSignal + ?Sized,
    {
        cancel.check()?;
        debug!("pass started with {} candidates", candidates.len());

        let mut registry = EmitRegistry::new();
        let mut diagnostics = Vec::new();

        if let Some(seed) = self.seed(options) {
            if let Err(collision) = registry.register_all(EmitOrigin::Seed, vec![seed]) {
                diagnostics.push(Diagnostic::from_error(&collision.into(), None, None));
            }
        }

        for candidate in candidates {
            cancel.check()?;

            let target = &candidate.target_symbol.name;
            if !self.filter(candidate.syntax) {
                trace!("skipping '{}' ({})", target, candidate.syntax);
                continue;
            }

            let outcome = self.transform(candidate, cancel).and_then(|symbol| {
                let sources = self.generate(&symbol)?;
                registry
                    .register_all(EmitOrigin::Symbol(symbol), sources)
                    .map_err(GeneratorError::from)
            });

            match outcome {
                Ok(added) => trace!("'{}' emitted {} sources", target, added),
                Err(error) if error.is_cancellation() => return Err(error),
                Err(error) => {
                    warn!("'{}' failed: {}", target, error);
                    diagnostics.push(Diagnostic::from_error(
                        &error,
                        Some(target.clone()),
                        candidate.location.clone(),
                    ));
                }
            }
        }

        diagnostics.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        let output = PassOutput {
            sources: registry.into_sources(),
            diagnostics,
        };
        debug!(
            "pass finished: {} sources, {} diagnostics",
            output.sources.len(),
            output.diagnostics.len()
        );
        Ok(output)
    }

    fn source_generator(&self) -> Result<&Arc<dyn SourceGenerator>, ConfigurationError> {
        self.config
            .source_generator
            .as_ref()
            .ok_or(ConfigurationError::MissingSourceGenerator)
    }
}

/// Everything one pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassOutput {
    /// Ordered by hint name.
    pub sources: Vec<EmittedSource>,
    /// Ordered by [`Diagnostic::sort_key`].
    pub diagnostics: Vec<Diagnostic>,
}

impl PassOutput {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn source(&self, hint_name: &str) -> Option<&EmittedSource> {
        self.sources.iter().find(|source| source.hint_name == hint_name)
    }

    /// Hands every source to the host's sink.
    pub fn write_to<O: SourceOutput + ?Sized>(&self, output: &mut O) {
        for source in &self.sources {
            output.add_source(&source.hint_name, &source.text);
        }
    }
}
