//! Composes classification, the containment walk and attribute extraction
//! into one [`Symbol`].

use log::trace;

use crate::errors::{GeneratorResult, MalformedAttributeError, UnsupportedSymbolError};
use crate::extract::{attribute, classify, hierarchy};
use crate::model::{MethodParameter, Symbol};
use crate::semantic::{AttributeSyntaxContext, SymbolShape};
use crate::traits::CancellationSignal;
use crate::utils::EquatableList;

/// Builds the canonical [`Symbol`] for one matched declaration.
///
/// A pure function of `context`: no clock, no I/O, no shared state. Two calls
/// over equal facts yield structurally equal symbols, which is what lets an
/// incremental host skip regeneration. On cancellation nothing is returned.
pub fn transform<C>(context: &AttributeSyntaxContext, cancel: &C) -> GeneratorResult<Symbol>
where
    C: CancellationSignal + ?Sized,
{
    cancel.check()?;

    let target = context.target_symbol.as_ref();
    let instance = context
        .attributes
        .first()
        .ok_or(MalformedAttributeError::MissingAttributeInstance)?;

    let kind = classify::classify(target)?;
    let marker_attribute = attribute::extract(instance, cancel)?;
    let containing_declarations = hierarchy::walk(target, cancel)?;

    let generic_parameters = EquatableList::from(target.type_parameters.as_slice());
    let symbol = match &target.shape {
        SymbolShape::Method {
            parameters,
            return_type,
        } => Symbol::new(
            marker_attribute,
            containing_declarations,
            kind,
            &target.name,
            generic_parameters,
            parameters
                .iter()
                .map(|p| MethodParameter::new(&p.type_name, &p.name))
                .collect(),
            return_type,
        ),
        SymbolShape::NamedType { .. } => Symbol::new(
            marker_attribute,
            containing_declarations,
            kind,
            &target.name,
            generic_parameters,
            EquatableList::empty(),
            "",
        ),
        shape => {
            return Err(UnsupportedSymbolError::new(&target.name, shape.to_string()).into());
        }
    };

    trace!("transformed '{}'", symbol.fully_qualified_name());
    Ok(symbol)
}
