//! Property catalogs.
//!
//! - [`PropertyDescriptor`] - Resolved metadata of one property
//! - [`PropertyCatalog`] - Ordered, name-indexed descriptors of one type
//! - [`CatalogFactory`] - Builds catalogs from a registry and its collaborators

mod descriptor;
mod factory;
mod property_catalog;

pub use descriptor::PropertyDescriptor;
pub use factory::CatalogFactory;
pub use property_catalog::PropertyCatalog;
