//! Error types for catalog construction and queries.

use thiserror::Error;

use crate::base::{MethodKey, TypeName};
use crate::introspect::IntrospectionError;
use crate::meta::RegistryError;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, querying, or restoring catalogs.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was empty.
    #[error("argument '{name}' must not be empty")]
    InvalidArgument { name: &'static str },

    /// No descriptor matches the (normalized) property name.
    #[error("no property for '{0}' found.")]
    PropertyNotFound(String),

    /// Positional access outside `[0, len)`.
    #[error("index {index} out of bounds for {len} properties")]
    OutOfBounds { index: usize, len: usize },

    /// The introspector could not produce a property list for a type.
    #[error("introspection failed: {0}")]
    Introspection(#[from] IntrospectionError),

    /// An introspected accessor does not exist on its owning type.
    ///
    /// Indicates malformed introspector output rather than a caller mistake.
    #[error("accessor {method} not found on type '{owner}'")]
    AccessorResolution { owner: TypeName, method: MethodKey },

    /// Type registration failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Two descriptors with the same name in one catalog.
    #[error("duplicate property '{0}'")]
    DuplicateProperty(String),

    /// Encoding or decoding the persisted form failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error while reading bundles or configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid catalog configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Create an invalid-argument error for the named parameter.
    pub fn invalid_argument(name: &'static str) -> Self {
        Self::InvalidArgument { name }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True for errors caused by a bad argument, including unknown property names.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument { .. } | Error::PropertyNotFound(_)
        )
    }
}
