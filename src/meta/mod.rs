//! Declarative type model.
//!
//! Types are described once, up front, instead of being discovered through
//! runtime reflection:
//!
//! - [`Annotation`] - Metadata attached to accessor methods
//! - [`Method`] - A declared method with its signature and annotations
//! - [`BeanType`] - A type's name, parent, and declared methods
//! - [`TypeRegistry`] - All registered types, with ancestry and method lookup

mod annotation;
mod bean_type;
mod method;
mod registry;

pub use annotation::{Annotation, AnnotationKind};
pub use bean_type::{BeanType, BeanTypeBuilder};
pub use method::Method;
pub use registry::{Ancestry, RegistryError, TypeRegistry};
