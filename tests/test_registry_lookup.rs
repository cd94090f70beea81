mod common;

use std::sync::Arc;

use common::DscDocsProcess;
use dsc_docs::config::loader::RegistryLoader;
use dsc_docs::error::LookupError;
use dsc_docs::registry::Registry;

fn reference_fixture() -> Registry {
    RegistryLoader::with_defaults()
        .load(&DscDocsProcess::fixture_path("reference.yaml"))
        .expect("reference fixture should load")
        .registry
}

#[test]
fn reference_filter_slug_end_to_end() {
    let registry = reference_fixture();
    let topic = registry
        .resolve_slug("reference", "DSC-filter-syntax-1")
        .unwrap();
    assert_eq!(topic, "DSC_Filtering");
    assert_eq!(
        registry.title_of("reference", topic.as_str()).unwrap(),
        "Syntax: DSC filter"
    );
}

#[test]
fn broken_link_is_reported_not_defaulted() {
    let registry = reference_fixture();
    match registry.resolve_slug("reference", "nonexistent-slug") {
        Err(LookupError::SlugNotFound { category, slug, .. }) => {
            assert_eq!(category, "reference");
            assert_eq!(slug, "nonexistent-slug");
        }
        other => panic!("expected SlugNotFound, got {other:?}"),
    }
}

#[test]
fn strict_loader_rejects_orphan_fixture() {
    let result =
        RegistryLoader::with_defaults().load(&DscDocsProcess::fixture_path("orphan.yaml"));
    assert!(result.is_err(), "strict loading should refuse orphan data");
}

#[test]
fn shared_registry_serves_concurrent_readers() {
    let registry = Arc::new(Registry::builtin().unwrap());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                registry
                    .resolve_title("documentation", "Command-interface-1")
                    .map(ToString::to_string)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), "Command interface");
    }
}
