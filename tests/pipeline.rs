mod common;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use attribute_source_generator::prelude::*;
use common::*;

fn options() -> GeneratorOptions {
    GeneratorOptions::default()
}

#[test]
fn test_pass_output_is_sorted_and_seeded() {
    init_logging();

    let generator = default_generator();
    let candidates = [
        class_context("Shop", "Order"),
        class_context("Billing", "Invoice"),
        nested_method_context(),
    ];

    let output = generator.run_pass(&candidates, &options(), &NeverCancelled).unwrap();
    assert!(output.is_clean());

    let names: Vec<_> = output.sources.iter().map(|s| s.hint_name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Billing.Invoice.g.cs",
            "Fixtures.GenerateAttribute.g.cs",
            "N1.N2.Outer`1.InnerRecord.Method.g.cs",
            "Shop.Order.g.cs",
        ]
    );

    let mut sink: Vec<(String, String)> = Vec::new();
    output.write_to(&mut sink);
    assert_eq!(sink.len(), 4);
    assert_eq!(sink[3], ("Shop.Order.g.cs".to_string(), "// Shop.Order".to_string()));
}

#[test]
fn test_candidate_order_does_not_matter() {
    let generator = default_generator();
    let malformed = |ns: &str, name: &str| {
        let mut context = class_context(ns, name);
        context.attributes.clear();
        context
    };
    let mut located = nested_method_context();
    located.attributes[0].constructor = None;

    let forward = [
        class_context("A", "One"),
        malformed("C", "Three"),
        class_context("B", "Two"),
        located.clone(),
        malformed("D", "Four"),
    ];
    let backward = [
        malformed("D", "Four"),
        located,
        class_context("B", "Two"),
        malformed("C", "Three"),
        class_context("A", "One"),
    ];

    let first = generator.run_pass(&forward, &options(), &NeverCancelled).unwrap();
    let second = generator.run_pass(&backward, &options(), &NeverCancelled).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.diagnostics.len(), 3);
    assert_eq!(first.diagnostics[0].symbol.as_deref(), Some("Four"));
    assert_eq!(first.diagnostics[2].symbol.as_deref(), Some("Method"));
}

#[test]
fn test_whitespace_seed_is_emitted_verbatim() {
    let config = GeneratorConfig::builder()
        .marker_attribute_name(MARKER)
        .marker_attribute_source("\n")
        .source_generator(Arc::new(render_name))
        .build();
    let generator = AttributeGenerator::new(config).unwrap();

    let output = generator.run_pass(&[], &options(), &NeverCancelled).unwrap();
    assert_eq!(output.sources.len(), 1);
    assert_eq!(output.sources[0].text, "\n");
}

#[test]
fn test_seed_disabled_by_host_option() {
    let generator = default_generator();
    let host_options = BTreeMap::from([(
        "build_property.IncludeMarkerAttributeSource".to_string(),
        "False".to_string(),
    )]);
    let options = GeneratorOptions::from_global_options(&host_options);

    let output = generator.run_pass(&[], &options, &NeverCancelled).unwrap();
    assert!(output.sources.is_empty());
}

#[test]
fn test_colliding_symbols_are_reported() {
    let generator = default_generator();

    let mut second = class_context("Shop", "Order");
    second.attributes[0] = second.attributes[0]
        .clone()
        .with_named_argument("Tag", TypedConstant::string("v2"));
    let candidates = [class_context("Shop", "Order"), second];

    let output = generator.run_pass(&candidates, &options(), &NeverCancelled).unwrap();

    assert_eq!(output.diagnostics.len(), 1);
    let diagnostic = &output.diagnostics[0];
    assert_eq!(diagnostic.code, DiagnosticCode::EmitCollision);
    assert_eq!(diagnostic.symbol.as_deref(), Some("Order"));
    assert!(diagnostic.message.contains("Shop.Order.g.cs"));
    assert_eq!(output.source("Shop.Order.g.cs").unwrap().text, "// Shop.Order");
}

#[test]
fn test_duplicate_equal_symbol_is_idempotent() {
    let generator = default_generator();
    let candidates = [class_context("Shop", "Order"), class_context("Shop", "Order")];

    let output = generator.run_pass(&candidates, &options(), &NeverCancelled).unwrap();
    assert!(output.is_clean());
    assert_eq!(output.sources.len(), 2);
}

#[test]
fn test_named_artifacts_collide_across_symbols() {
    fn shared(_: &Symbol) -> anyhow::Result<Vec<SourceArtifact>> {
        Ok(vec![SourceArtifact::named("Registry", "// shared")])
    }
    let generator = generator_with(Arc::new(shared));
    let candidates = [class_context("A", "One"), class_context("B", "Two")];

    let output = generator.run_pass(&candidates, &options(), &NeverCancelled).unwrap();
    assert_eq!(output.diagnostics.len(), 1);
    assert!(output.source("Registry.g.cs").is_some());
}

#[test]
fn test_callback_failure_is_isolated() {
    fn picky(symbol: &Symbol) -> anyhow::Result<Vec<SourceArtifact>> {
        if symbol.name() == "Bad" {
            anyhow::bail!("template missing for {}", symbol.name());
        }
        render_name(symbol)
    }
    let generator = generator_with(Arc::new(picky));
    let candidates = [
        class_context("App", "Bad"),
        class_context("App", "Good"),
    ];

    let output = generator.run_pass(&candidates, &options(), &NeverCancelled).unwrap();
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].code, DiagnosticCode::GenerationFailed);
    assert!(output.diagnostics[0].message.contains("App.Bad"));
    assert!(output.source("App.Good.g.cs").is_some());
    assert!(output.source("App.Bad.g.cs").is_none());
}

#[test]
fn test_diagnostic_carries_location() {
    let generator = default_generator();
    let mut context = nested_method_context();
    context.attributes.clear();

    let output = generator.run_pass(&[context], &options(), &NeverCancelled).unwrap();
    let diagnostic = &output.diagnostics[0];
    assert_eq!(diagnostic.code, DiagnosticCode::MalformedAttribute);
    assert_eq!(
        diagnostic.location,
        Some(SourceLocation::new("src/Outer.cs", 12, 9))
    );
    assert!(diagnostic.to_string().starts_with("src/Outer.cs:12:9: error ASG003"));
}

#[test]
fn test_cancellation_mid_pass_discards_everything() {
    let cancel = Arc::new(AtomicBool::new(false));
    let calls = Arc::new(AtomicUsize::new(0));

    let flag = Arc::clone(&cancel);
    let counter = Arc::clone(&calls);
    let generator = generator_with(Arc::new(
        move |symbol: &Symbol| -> anyhow::Result<Vec<SourceArtifact>> {
            counter.fetch_add(1, Ordering::SeqCst);
            flag.store(true, Ordering::Release);
            render_name(symbol)
        },
    ));
    let candidates = [class_context("A", "One"), class_context("B", "Two")];

    let result = generator.run_pass(&candidates, &options(), &cancel);
    assert!(matches!(result, Err(GeneratorError::Cancelled)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_concurrent_transform_and_generate() {
    let generator = default_generator();
    let contexts: Vec<_> = (0..16)
        .map(|i| class_context("Parallel", &format!("Type{i}")))
        .collect();

    let sequential: Vec<_> = contexts
        .iter()
        .map(|context| {
            let symbol = generator.transform(context, &NeverCancelled).unwrap();
            generator.generate(&symbol).unwrap()
        })
        .collect();

    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = contexts
            .iter()
            .map(|context| {
                let generator = &generator;
                scope.spawn(move || {
                    let symbol = generator.transform(context, &NeverCancelled).unwrap();
                    generator.generate(&symbol).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}

#[test]
fn test_invalid_configuration_prevents_construction() {
    let config = GeneratorConfig::builder().marker_attribute_name("").build();
    assert_eq!(
        AttributeGenerator::new(config).unwrap_err(),
        ConfigurationError::MissingMarkerAttributeName
    );
}
