//! Localized-name lookup.
//!
//! Resolution only needs "type + key → optional string". Back-ends:
//!
//! - [`NoResources`] - Never finds anything
//! - [`MapResources`] - In-memory entries, mostly for tests and embedding
//! - [`PropertiesBundles`] - `.properties` files on disk with locale fallback

mod bundles;
mod map;
mod properties;

pub use bundles::PropertiesBundles;
pub use map::MapResources;
pub use properties::{ParsedProperties, parse_properties};

/// Looks up a localized string for a key in a type's resource bundle.
pub trait ResourceLookup: Send + Sync {
    /// `type_name` is the fully-qualified owning type, `key` the raw property name.
    fn lookup(&self, type_name: &str, key: &str) -> Option<String>;
}

/// A lookup that never finds an entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoResources;

impl ResourceLookup for NoResources {
    fn lookup(&self, _type_name: &str, _key: &str) -> Option<String> {
        None
    }
}

impl<T: ResourceLookup + ?Sized> ResourceLookup for std::sync::Arc<T> {
    fn lookup(&self, type_name: &str, key: &str) -> Option<String> {
        (**self).lookup(type_name, key)
    }
}
