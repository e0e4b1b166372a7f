//! Marker attribute argument extraction.

use log::trace;

use crate::errors::{GeneratorResult, MalformedAttributeError};
use crate::model::{AttributeArgument, AttributeArgumentKind, MarkerAttributeData};
use crate::semantic::AttributeInstance;
use crate::traits::CancellationSignal;
use crate::utils::EquatableList;

/// Reads one resolved attribute application into [`MarkerAttributeData`].
///
/// Arguments come out in a fixed order: one `GenericType` entry per type
/// parameter of the attribute class, then one `Constructor` entry per formal
/// constructor parameter in declaration order, then one `Named` entry per
/// supplied initializer in use-site order.
///
/// An unresolved attribute class or constructor, or supplied values that do
/// not line up with the declared parameters, fail with
/// [`MalformedAttributeError`].
pub fn extract<C>(instance: &AttributeInstance, cancel: &C) -> GeneratorResult<MarkerAttributeData>
where
    C: CancellationSignal + ?Sized,
{
    let class = instance
        .attribute_class
        .as_ref()
        .ok_or(MalformedAttributeError::UnresolvedAttributeClass)?;
    let constructor = instance
        .constructor
        .as_ref()
        .ok_or_else(|| MalformedAttributeError::UnresolvedConstructor(class.name.clone()))?;

    if class.type_parameters.len() != class.type_arguments.len() {
        return Err(MalformedAttributeError::TypeArgumentMismatch {
            attribute: class.name.clone(),
            expected: class.type_parameters.len(),
            found: class.type_arguments.len(),
        }
        .into());
    }
    if constructor.parameters.len() != instance.constructor_arguments.len() {
        return Err(MalformedAttributeError::ConstructorArgumentMismatch {
            attribute: class.name.clone(),
            expected: constructor.parameters.len(),
            found: instance.constructor_arguments.len(),
        }
        .into());
    }

    let mut arguments = Vec::with_capacity(
        class.type_parameters.len()
            + constructor.parameters.len()
            + instance.named_arguments.len(),
    );

    for (parameter, bound) in class.type_parameters.iter().zip(&class.type_arguments) {
        cancel.check()?;
        arguments.push(AttributeArgument::new(
            AttributeArgumentKind::GenericType,
            parameter,
            Some(bound.clone()),
        ));
    }

    for (parameter, supplied) in constructor
        .parameters
        .iter()
        .zip(&instance.constructor_arguments)
    {
        cancel.check()?;
        arguments.push(AttributeArgument::new(
            AttributeArgumentKind::Constructor,
            &parameter.name,
            supplied.text(),
        ));
    }

    for (name, supplied) in &instance.named_arguments {
        cancel.check()?;
        arguments.push(AttributeArgument::new(
            AttributeArgumentKind::Named,
            name,
            supplied.text(),
        ));
    }

    trace!(
        "extracted {} arguments from attribute '{}'",
        arguments.len(),
        class.name
    );
    Ok(MarkerAttributeData::new(
        &class.name,
        EquatableList::from(arguments),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;

    use super::*;
    use crate::errors::GeneratorError;
    use crate::semantic::{AttributeClass, AttributeConstructor, ParameterInfo, TypedConstant};
    use crate::traits::NeverCancelled;

    fn generic_instance() -> AttributeInstance {
        AttributeInstance::new(
            AttributeClass::new("MapAttribute").with_type_argument("TTarget", "global::App.Dto"),
            AttributeConstructor::new(vec![
                ParameterInfo::new("string", "prefix"),
                ParameterInfo::new("int", "depth"),
            ]),
        )
        .with_constructor_argument(TypedConstant::string("Api"))
        .with_constructor_argument(TypedConstant::int(3))
        .with_named_argument("Strict", TypedConstant::bool(false))
    }

    #[test]
    fn test_argument_order() {
        let data = extract(&generic_instance(), &NeverCancelled).unwrap();
        assert_eq!(data.name(), "MapAttribute");

        let kinds: Vec<_> = data.arguments().iter().map(|a| a.kind()).collect();
        assert_eq!(
            kinds,
            [
                AttributeArgumentKind::GenericType,
                AttributeArgumentKind::Constructor,
                AttributeArgumentKind::Constructor,
                AttributeArgumentKind::Named,
            ]
        );

        let rendered: Vec<_> = data
            .arguments()
            .iter()
            .map(|a| (a.name(), a.value()))
            .collect();
        assert_eq!(
            rendered,
            [
                ("TTarget", Some("global::App.Dto")),
                ("prefix", Some("Api")),
                ("depth", Some("3")),
                ("Strict", Some("False")),
            ]
        );
    }

    #[test]
    fn test_null_value_is_absent() {
        let instance = AttributeInstance::new(
            AttributeClass::new("Tag"),
            AttributeConstructor::new(vec![ParameterInfo::new("string", "label")]),
        )
        .with_constructor_argument(TypedConstant::null("string"));

        let data = extract(&instance, &NeverCancelled).unwrap();
        assert_eq!(data.arguments().len(), 1);
        assert_eq!(data.arguments()[0].value(), None);
    }

    #[test]
    fn test_no_arguments_shares_empty_list() {
        let instance = AttributeInstance::new(AttributeClass::new("Plain"), AttributeConstructor::default());
        let data = extract(&instance, &NeverCancelled).unwrap();
        assert!(data.arguments().is_shared_empty());
    }

    #[test]
    fn test_unresolved_facts_fail_fast() {
        let missing_class = AttributeInstance::default();
        assert!(matches!(
            extract(&missing_class, &NeverCancelled),
            Err(GeneratorError::MalformedAttribute(
                MalformedAttributeError::UnresolvedAttributeClass
            ))
        ));

        let missing_ctor = AttributeInstance {
            attribute_class: Some(AttributeClass::new("Broken")),
            ..Default::default()
        };
        assert!(matches!(
            extract(&missing_ctor, &NeverCancelled),
            Err(GeneratorError::MalformedAttribute(
                MalformedAttributeError::UnresolvedConstructor(name)
            )) if name == "Broken"
        ));
    }

    #[test]
    fn test_argument_count_mismatch() {
        let mut instance = generic_instance();
        instance.constructor_arguments.pop();

        assert!(matches!(
            extract(&instance, &NeverCancelled),
            Err(GeneratorError::MalformedAttribute(
                MalformedAttributeError::ConstructorArgumentMismatch {
                    expected: 2,
                    found: 1,
                    ..
                }
            ))
        ));
    }

    #[test]
    fn test_cancelled_extraction() {
        let cancel = AtomicBool::new(true);
        assert!(matches!(
            extract(&generic_instance(), &cancel),
            Err(GeneratorError::Cancelled)
        ));
    }
}
