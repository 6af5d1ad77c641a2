//! # property-catalog
//!
//! Builds ordered, annotated catalogs of a type's properties from its
//! declared accessor methods, for code that generates forms or tables
//! without hand-written field mappings.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! catalog    → PropertyCatalog, PropertyDescriptor, CatalogFactory
//!   ↓
//! resolve    → Accessor pair → descriptor (annotation precedence, fallbacks)
//!   ↓
//! introspect → Introspector trait, naming-convention introspector
//! resources  → ResourceLookup trait, in-memory and .properties bundles
//!   ↓
//! meta       → Annotation, Method, BeanType, TypeRegistry
//!   ↓
//! base       → TypeName, ValueType, MethodKey, name helpers
//! ```
//!
//! ## Example
//!
//! ```rust
//! use propcat::base::ValueType;
//! use propcat::meta::{Annotation, BeanType, Method, TypeRegistry};
//! use propcat::catalog::PropertyCatalog;
//!
//! let mut registry = TypeRegistry::new();
//! registry.register(
//!     BeanType::builder("app.Person")
//!         .method(Method::getter("getName", ValueType::String).annotate(Annotation::Order(1)))
//!         .method(Method::setter("setName", ValueType::String))
//!         .method(Method::getter("getId", ValueType::I64).annotate(Annotation::Hidden))
//!         .build(),
//! )?;
//!
//! let catalog = PropertyCatalog::build(&registry, "app.Person")?;
//! assert_eq!(catalog.get_index(0)?.name(), "name");
//! assert_eq!(catalog.to_visible_properties_only().len(), 1);
//! # Ok::<(), propcat::Error>(())
//! ```

// ============================================================================
// MODULES (dependency order: base → meta → introspect/resources → resolve → catalog)
// ============================================================================

/// Foundation types: TypeName, ValueType, MethodKey
pub mod base;

/// Declarative type model and registry
pub mod meta;

/// Raw accessor-pair discovery
pub mod introspect;

/// Localized-name lookup back-ends
pub mod resources;

/// Accessor pair → descriptor resolution
pub mod resolve;

/// Property catalogs and descriptors
pub mod catalog;

/// Catalog configuration
pub mod config;

mod error;

pub use catalog::{CatalogFactory, PropertyCatalog, PropertyDescriptor};
pub use config::CatalogConfig;
pub use error::{Error, Result};
