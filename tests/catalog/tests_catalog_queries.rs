//! Catalog construction and query tests.

use propcat::{CatalogFactory, Error, PropertyCatalog};
use rstest::rstest;

use crate::helpers::catalog_assertions::*;
use crate::helpers::fixtures::*;

fn getter_only() -> PropertyCatalog {
    PropertyCatalog::build(&REGISTRY, GETTER_ONLY).expect("GetterOnly should build")
}

// =============================================================================
// ORDERING
// =============================================================================

#[test]
fn test_iteration_follows_order_annotations() {
    let catalog = getter_only();
    assert_eq!(
        property_names(&catalog),
        vec![
            "hasNoParameter",
            "getterOnly",
            "differType",
            "hidden",
            "notOrderAnnotated"
        ]
    );
    assert_ordered(&catalog);
}

#[test]
fn test_get_by_index() {
    let catalog = getter_only();
    assert_eq!(catalog.get_index(0).unwrap().name(), "hasNoParameter");
    assert_eq!(catalog.get_index(1).unwrap().name(), "getterOnly");
    assert_eq!(catalog.get_index(2).unwrap().name(), "differType");
    assert_eq!(catalog.get_index(3).unwrap().name(), "hidden");
    assert_eq!(catalog.get_index(4).unwrap().name(), "notOrderAnnotated");
    assert_eq!(catalog.get_index(4).unwrap().order_index(), i32::MAX);
}

#[test]
fn test_unordered_properties_keep_introspection_order() {
    let catalog = PropertyCatalog::build(&REGISTRY, TEST_BEAN).unwrap();
    // No Order annotations at all: name order from introspection.
    assert_eq!(
        property_names(&catalog),
        vec![
            "boolean",
            "fromResource",
            "hardCoding",
            "hidden",
            "notAnnotated",
            "readWrite"
        ]
    );
}

#[test]
fn test_size() {
    assert_eq!(getter_only().len(), 5);
    assert!(!getter_only().is_empty());
}

#[rstest]
#[case(GETTER_ONLY)]
#[case(TEST_BEAN)]
#[case(EX_TEST_BEAN)]
#[case(NOTE_FORM)]
#[case("Object")]
fn test_class_pseudo_property_excluded(#[case] target: &str) {
    let catalog = PropertyCatalog::build(&REGISTRY, target).unwrap();
    assert_no_class_property(&catalog);
}

#[test]
fn test_root_type_has_no_properties() {
    let catalog = PropertyCatalog::build(&REGISTRY, "Object").unwrap();
    assert!(catalog.is_empty());
}

// =============================================================================
// NAME LOOKUP
// =============================================================================

#[rstest]
#[case("differType")]
#[case("DifferType")]
fn test_get_by_name_tolerates_capitalized_first_letter(#[case] name: &str) {
    let catalog = getter_only();
    let property = catalog.get(name).unwrap();
    assert_eq!(property.name(), "differType");
    assert!(std::sync::Arc::ptr_eq(
        property,
        catalog.get("differType").unwrap()
    ));
}

#[test]
fn test_contains() {
    let catalog = getter_only();
    assert!(catalog.contains("DifferType").unwrap());
    assert!(!catalog.contains("notExistsProperty").unwrap());
}

#[test]
fn test_normalization_only_touches_first_letter() {
    let catalog = getter_only();
    assert!(!catalog.contains("differtype").unwrap());
    assert!(!catalog.contains("DIFFERTYPE").unwrap());
}

#[test]
fn test_get_missing_property_reports_normalized_name() {
    let err = getter_only().get("NotExistsProperty").unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(
        err.to_string()
            .contains("no property for 'notExistsProperty' found."),
        "unexpected message: {err}"
    );
}

// =============================================================================
// ARGUMENT ERRORS
// =============================================================================

#[test]
fn test_contains_empty_name() {
    let err = getter_only().contains("").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_get_empty_name() {
    let err = getter_only().get("").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_build_empty_target() {
    let err = PropertyCatalog::build(&REGISTRY, "").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { name: "target" }));
}

#[test]
fn test_build_unknown_target_is_introspection_error() {
    let err = PropertyCatalog::build(&REGISTRY, "fixtures.Missing").unwrap_err();
    assert!(matches!(err, Error::Introspection(_)));
}

#[test]
fn test_get_index_out_of_bounds() {
    let err = getter_only().get_index(5).unwrap_err();
    assert!(matches!(err, Error::OutOfBounds { index: 5, len: 5 }));
}

// =============================================================================
// DERIVED VIEWS
// =============================================================================

#[test]
fn test_visible_only_removes_hidden() {
    let catalog = getter_only();
    let hidden = catalog.iter().filter(|p| p.is_hidden()).count();
    let visible = catalog.to_visible_properties_only();

    assert_eq!(visible.len(), catalog.len() - hidden);
    assert!(!visible.contains("hidden").unwrap());
    assert_eq!(
        property_names(&visible),
        vec!["hasNoParameter", "getterOnly", "differType", "notOrderAnnotated"]
    );
    // The source catalog is untouched.
    assert!(catalog.contains("hidden").unwrap());
}

#[test]
fn test_to_list_is_defensive_copy() {
    let catalog = getter_only();
    let mut list = catalog.to_list();
    list.reverse();
    list.pop();
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.get_index(0).unwrap().name(), "hasNoParameter");
}

#[test]
fn test_builds_are_equal_but_independent() {
    assert_eq!(getter_only(), getter_only());
}

#[test]
fn test_factory_extra_exclusions() {
    let catalog = CatalogFactory::new(&REGISTRY)
        .exclude("hidden")
        .build(GETTER_ONLY)
        .unwrap();
    assert_eq!(catalog.len(), 4);
    assert!(!catalog.contains("hidden").unwrap());
}
