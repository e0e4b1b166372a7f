//! Containment hierarchy walk.

use log::trace;

use crate::errors::{GeneratorResult, UnsupportedSymbolError};
use crate::extract::classify::classify;
use crate::model::{Declaration, DeclarationHierarchy};
use crate::semantic::{SemanticSymbol, SymbolShape};
use crate::traits::CancellationSignal;
use crate::utils::EquatableList;

/// Builds the chain of declarations containing `symbol`, outermost first.
///
/// Walks outward from the immediate container in a loop, polling `cancel`
/// on every step. Types are classified and keep only their own type
/// parameters; named namespaces become `Namespace` links; the global
/// namespace ends the walk without being materialized. A container that is
/// neither a classifiable type nor a namespace fails the walk.
pub fn walk<C>(symbol: &SemanticSymbol, cancel: &C) -> GeneratorResult<DeclarationHierarchy>
where
    C: CancellationSignal + ?Sized,
{
    // innermost first; reversed once the walk ends
    let mut discovered: Vec<Declaration> = Vec::new();
    let mut current = symbol.containing_symbol();

    while let Some(container) = current {
        cancel.check()?;

        match &container.shape {
            SymbolShape::Namespace { is_global: true } => break,
            SymbolShape::Namespace { is_global: false } => {
                discovered.push(Declaration::namespace(&container.name));
            }
            SymbolShape::NamedType { .. } => {
                let kind = classify(container)?;
                discovered.push(Declaration::new(
                    kind,
                    &container.name,
                    EquatableList::from(container.type_parameters.as_slice()),
                ));
            }
            shape => {
                return Err(
                    UnsupportedSymbolError::new(&container.name, shape.to_string()).into(),
                );
            }
        }

        trace!(
            "walked container '{}' of '{}' (depth {})",
            container.name,
            symbol.name,
            discovered.len()
        );
        current = container.containing_symbol();
    }

    discovered.reverse();
    Ok(DeclarationHierarchy::from(discovered))
}
