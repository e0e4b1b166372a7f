// Common test fixtures

#![allow(dead_code)]

use std::sync::Arc;

use attribute_source_generator::prelude::*;

pub const MARKER: &str = "Fixtures.GenerateAttribute";

/// Install a test logger once per binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An argument-less marker attribute.
pub fn marker() -> AttributeInstance {
    AttributeInstance::new(
        AttributeClass::new("GenerateAttribute"),
        AttributeConstructor::default(),
    )
}

/// `N1.N2.Outer<T>.InnerRecord.Method(int count) : string`
pub fn nested_method_context() -> AttributeSyntaxContext {
    let global = SemanticSymbol::global_namespace();
    let ns = SemanticSymbol::namespace_path("N1.N2", &global);
    let outer = SemanticSymbol::named_type("Outer", TypeKind::Class, false, ["T"], Some(&ns));
    let inner =
        SemanticSymbol::named_type("InnerRecord", TypeKind::Class, true, NO_TYPE_PARAMETERS, Some(&outer));
    let method = SemanticSymbol::method(
        "Method",
        NO_TYPE_PARAMETERS,
        vec![ParameterInfo::new("int", "count")],
        "string",
        &inner,
    );
    AttributeSyntaxContext::new(method, marker(), DeclarationSyntax::Method)
        .at(SourceLocation::new("src/Outer.cs", 12, 9))
}

/// A type declared directly in `namespace`, or in the global namespace when `None`.
pub fn type_context(
    namespace: Option<&str>,
    name: &str,
    type_kind: TypeKind,
    is_record: bool,
    syntax: DeclarationSyntax,
) -> AttributeSyntaxContext {
    let global = SemanticSymbol::global_namespace();
    let container = match namespace {
        Some(path) => SemanticSymbol::namespace_path(path, &global),
        None => global,
    };
    let target = SemanticSymbol::named_type(name, type_kind, is_record, NO_TYPE_PARAMETERS, Some(&container));
    AttributeSyntaxContext::new(target, marker(), syntax)
}

pub fn class_context(namespace: &str, name: &str) -> AttributeSyntaxContext {
    type_context(Some(namespace), name, TypeKind::Class, false, DeclarationSyntax::Class)
}

/// One artifact per symbol holding its qualified name.
pub fn render_name(symbol: &Symbol) -> anyhow::Result<Vec<SourceArtifact>> {
    Ok(vec![SourceArtifact::for_symbol(format!(
        "// {}",
        symbol.fully_qualified_name()
    ))])
}

pub fn config_with(generator: Arc<dyn SourceGenerator>) -> GeneratorConfig {
    GeneratorConfig::builder()
        .marker_attribute_name(MARKER)
        .marker_attribute_source("namespace Fixtures { sealed class GenerateAttribute : System.Attribute { } }")
        .source_generator(generator)
        .build()
}

pub fn generator_with(generator: Arc<dyn SourceGenerator>) -> AttributeGenerator {
    match AttributeGenerator::new(config_with(generator)) {
        Ok(generator) => generator,
        Err(e) => panic!("fixture configuration rejected: {e}"),
    }
}

pub fn default_generator() -> AttributeGenerator {
    generator_with(Arc::new(render_name))
}
