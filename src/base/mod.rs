//! Foundation types for property catalogs.
//!
//! This module provides the primitive vocabulary used throughout the crate:
//! - [`TypeName`] - Fully-qualified type identifier
//! - [`ValueType`] - Declared type of a property or method parameter
//! - [`MethodKey`] - Method identity by name and parameter types
//! - Property-name helpers ([`normalize_property_name`], [`decapitalize`])
//!
//! This module has NO dependencies on other propcat modules.

mod method_key;
mod name;
mod value_type;

pub use method_key::MethodKey;
pub use name::{decapitalize, normalize_property_name};
pub use value_type::{TypeName, ValueType};

/// Qualified name of the root type every registered type inherits from.
pub const OBJECT_TYPE: &str = "Object";

/// Name of the pseudo-property exposed by the root type's `getClass()`.
pub const CLASS_PROPERTY: &str = "class";
