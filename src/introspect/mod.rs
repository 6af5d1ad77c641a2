//! Accessor introspection.
//!
//! An [`Introspector`] turns a registered type into its raw accessor pairs.
//! The catalog only depends on the trait; [`ConventionIntrospector`] is the
//! bundled implementation following `getX` / `isX` / `setX` naming rules.

mod convention;

use std::sync::Arc;

use thiserror::Error;

use crate::base::{TypeName, ValueType};
use crate::meta::{Method, TypeRegistry};

pub use convention::ConventionIntrospector;

/// Errors an introspector reports when it cannot describe a type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntrospectionError {
    #[error("type '{0}' is not registered")]
    UnknownType(TypeName),

    /// The type's accessors do not form a valid property contract.
    #[error("malformed accessors for property '{property}' on '{owner}': {message}")]
    MalformedAccessors {
        owner: TypeName,
        property: String,
        message: String,
    },
}

/// One property as reported by introspection, before metadata resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawProperty {
    pub name: String,
    pub declared_type: ValueType,
    pub read: Option<Arc<Method>>,
    pub write: Option<Arc<Method>>,
}

impl RawProperty {
    pub fn new(
        name: impl Into<String>,
        declared_type: ValueType,
        read: Option<Arc<Method>>,
        write: Option<Arc<Method>>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type,
            read,
            write,
        }
    }
}

/// Source of raw accessor pairs for a type.
///
/// Implementations must include the root type's `class` pseudo-property;
/// filtering it out is the catalog's job.
pub trait Introspector: Send + Sync {
    fn introspect(
        &self,
        registry: &TypeRegistry,
        type_name: &str,
    ) -> Result<Vec<RawProperty>, IntrospectionError>;
}
