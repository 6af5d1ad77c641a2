//! Fixture types shared by the catalog tests.

use once_cell::sync::Lazy;
use propcat::base::ValueType;
use propcat::meta::{Annotation, BeanType, Method, TypeRegistry};
use propcat::resources::MapResources;

/// Getter-only bean whose properties are ordered 50/40/30/60/(none).
pub const GETTER_ONLY: &str = "fixtures.GetterOnly";

/// Bean mixing read-only, read-write, and localized properties.
pub const TEST_BEAN: &str = "fixtures.TestBean";

/// Subclass of [`TEST_BEAN`] overriding `isBoolean()` with `Hidden`.
pub const EX_TEST_BEAN: &str = "fixtures.ExTestBean";

/// Form with string properties using every marker annotation.
pub const NOTE_FORM: &str = "fixtures.NoteForm";

/// Registry holding every fixture type, built once.
pub static REGISTRY: Lazy<TypeRegistry> = Lazy::new(|| {
    let mut registry = TypeRegistry::new();
    registry
        .register_all([getter_only(), test_bean(), ex_test_bean(), note_form()])
        .expect("fixture types should register");
    registry
});

fn getter_only() -> BeanType {
    BeanType::builder(GETTER_ONLY)
        .method(Method::getter("getDifferType", ValueType::named("Integer")).annotate(Annotation::Order(50)))
        .method(
            Method::getter("getGetterOnly", ValueType::String)
                .annotate(Annotation::Order(40))
                .annotate(Annotation::localized()),
        )
        .method(Method::getter("getHasNoParameter", ValueType::named("Object")).annotate(Annotation::Order(30)))
        .method(
            Method::getter("getHidden", ValueType::I32)
                .annotate(Annotation::Order(60))
                .annotate(Annotation::Hidden),
        )
        .method(Method::getter("getNotOrderAnnotated", ValueType::I64))
        // Parameter type differs from the getter, so no write accessor.
        .method(Method::setter("setDifferType", ValueType::named("Long")))
        // Takes no parameter, so not a setter at all.
        .method(Method::new("setHasNoParameter", vec![], ValueType::Void))
        .build()
}

fn test_bean() -> BeanType {
    BeanType::builder(TEST_BEAN)
        .method(Method::getter("getFromResource", ValueType::String).annotate(Annotation::localized()))
        .method(Method::getter("getHardCoding", ValueType::String).annotate(Annotation::localized_as("文字列")))
        .method(Method::getter("getHidden", ValueType::I32))
        .method(Method::getter("getNotAnnotated", ValueType::String))
        .method(Method::getter("getReadWrite", ValueType::String))
        .method(Method::getter("isBoolean", ValueType::Bool))
        .method(Method::setter("setHidden", ValueType::I32).annotate(Annotation::Hidden))
        .method(Method::setter("setReadWrite", ValueType::String))
        .build()
}

fn ex_test_bean() -> BeanType {
    BeanType::builder(EX_TEST_BEAN)
        .extends(TEST_BEAN)
        .method(Method::getter("isBoolean", ValueType::Bool).annotate(Annotation::Hidden))
        .build()
}

fn note_form() -> BeanType {
    BeanType::builder(NOTE_FORM)
        .method(
            Method::getter("getBody", ValueType::String)
                .annotate(Annotation::Order(2))
                .annotate(Annotation::MultiLine)
                .annotate(Annotation::Nullable),
        )
        .method(Method::setter("setBody", ValueType::String))
        .method(Method::getter("getTitle", ValueType::String).annotate(Annotation::Order(1)))
        .method(
            Method::setter("setTitle", ValueType::String)
                .annotate(Annotation::Order(99))
                .annotate(Annotation::localized_as("Subject")),
        )
        .method(Method::getter("getPages", ValueType::I32).annotate(Annotation::MultiLine))
        .method(Method::setter("setSecret", ValueType::String).annotate(Annotation::Hidden))
        .build()
}

/// Resource entries for [`TEST_BEAN`] matching its `.properties` bundle.
pub fn test_bean_resources() -> MapResources {
    MapResources::new()
        .with(TEST_BEAN, "fromResource", "getterのみ")
        .with(TEST_BEAN, "hardCoding", "from bundle")
}
