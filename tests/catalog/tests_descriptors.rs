//! Descriptor metadata resolution tests.

use propcat::PropertyCatalog;
use propcat::base::ValueType;
use propcat::meta::{Annotation, AnnotationKind};

use crate::helpers::fixtures::*;

// =============================================================================
// READ-ONLY
// =============================================================================

#[test]
fn test_getter_only_bean_is_all_read_only() {
    let catalog = PropertyCatalog::build(&REGISTRY, GETTER_ONLY).unwrap();
    for property in &catalog {
        assert!(
            property.is_read_only(),
            "'{}' should be read-only",
            property.name()
        );
    }
}

#[test]
fn test_mismatched_setter_leaves_property_read_only() {
    let catalog = PropertyCatalog::build(&REGISTRY, GETTER_ONLY).unwrap();
    let differ = catalog.get("differType").unwrap();
    assert_eq!(differ.declared_type(), &ValueType::named("Integer"));
    assert!(differ.setter().is_none());
    assert!(differ.setter_key().is_none());
}

#[test]
fn test_getter_and_setter_property() {
    let catalog = PropertyCatalog::build(&REGISTRY, TEST_BEAN).unwrap();
    let property = catalog.get("readWrite").unwrap();
    assert!(!property.is_read_only());
    assert_eq!(property.declared_type(), &ValueType::String);
}

#[test]
fn test_write_only_property_is_not_read_only() {
    let catalog = PropertyCatalog::build(&REGISTRY, NOTE_FORM).unwrap();
    let secret = catalog.get("secret").unwrap();
    assert!(!secret.is_read_only());
    assert!(secret.getter().is_none());
    assert!(secret.is_hidden());
}

// =============================================================================
// MARKERS
// =============================================================================

#[test]
fn test_hidden_on_setter_counts() {
    let catalog = PropertyCatalog::build(&REGISTRY, TEST_BEAN).unwrap();
    assert!(catalog.get("hidden").unwrap().is_hidden());
    assert!(!catalog.get("readWrite").unwrap().is_hidden());
}

#[test]
fn test_overridden_boolean_accessor_annotations_apply() {
    let catalog = PropertyCatalog::build(&REGISTRY, EX_TEST_BEAN).unwrap();
    assert!(catalog.get("boolean").unwrap().is_hidden());

    let parent = PropertyCatalog::build(&REGISTRY, TEST_BEAN).unwrap();
    assert!(!parent.get("boolean").unwrap().is_hidden());
}

#[test]
fn test_subclass_inherits_parent_properties() {
    let catalog = PropertyCatalog::build(&REGISTRY, EX_TEST_BEAN).unwrap();
    assert_eq!(catalog.len(), 6);
    let hidden = catalog.get("hidden").unwrap();
    assert_eq!(hidden.owner().as_ref(), EX_TEST_BEAN);
    assert_eq!(hidden.getter().unwrap().declaring_type(), TEST_BEAN);
}

#[test]
fn test_multi_line_and_nullable() {
    let catalog = PropertyCatalog::build(&REGISTRY, NOTE_FORM).unwrap();
    let body = catalog.get("body").unwrap();
    assert!(body.is_multi_line());
    assert!(body.is_nullable());

    let pages = catalog.get("pages").unwrap();
    assert!(!pages.is_multi_line(), "MultiLine only applies to strings");
    assert!(!pages.is_nullable());
}

#[test]
fn test_getter_order_wins_and_setter_fills_gaps() {
    let catalog = PropertyCatalog::build(&REGISTRY, NOTE_FORM).unwrap();
    let title = catalog.get("title").unwrap();
    assert_eq!(title.order_index(), 1);
    assert_eq!(title.localized_name(), "Subject");
    assert_eq!(catalog.get_index(0).unwrap().name(), "title");
    assert_eq!(catalog.get_index(1).unwrap().name(), "body");
}

// =============================================================================
// ANNOTATION RETRIEVAL
// =============================================================================

#[test]
fn test_annotation_lookup_uses_accessor_precedence() {
    let catalog = PropertyCatalog::build(&REGISTRY, NOTE_FORM).unwrap();
    let title = catalog.get("title").unwrap();
    assert_eq!(
        title.annotation(AnnotationKind::Order),
        Some(&Annotation::Order(1))
    );
    assert_eq!(
        title.annotation(AnnotationKind::Localized),
        Some(&Annotation::localized_as("Subject"))
    );
    assert!(title.annotation(AnnotationKind::Hidden).is_none());
}

#[test]
fn test_descriptor_equality_is_structural() {
    let a = PropertyCatalog::build(&REGISTRY, TEST_BEAN).unwrap();
    let b = PropertyCatalog::build(&REGISTRY, EX_TEST_BEAN).unwrap();
    // Same accessors, different owner.
    assert_ne!(
        a.get("readWrite").unwrap().as_ref(),
        b.get("readWrite").unwrap().as_ref()
    );
    let again = PropertyCatalog::build(&REGISTRY, TEST_BEAN).unwrap();
    assert_eq!(
        a.get("readWrite").unwrap().as_ref(),
        again.get("readWrite").unwrap().as_ref()
    );
}
