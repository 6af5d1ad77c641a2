use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Fully-qualified type identifier, e.g. `app.model.Person`.
///
/// Also serves as the base name of a type's resource bundle.
pub type TypeName = Arc<str>;

/// The declared type of a property, return value, or parameter.
///
/// Only [`ValueType::String`] counts as string-like for multi-line resolution.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// No value (setter return type)
    Void,
    Bool,
    Char,
    I32,
    I64,
    F64,
    String,
    /// Any other type, by qualified name
    Named(TypeName),
}

impl ValueType {
    /// Create a named type.
    pub fn named(name: impl Into<TypeName>) -> Self {
        ValueType::Named(name.into())
    }

    pub fn is_void(&self) -> bool {
        matches!(self, ValueType::Void)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, ValueType::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, ValueType::String)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Void => write!(f, "void"),
            ValueType::Bool => write!(f, "bool"),
            ValueType::Char => write!(f, "char"),
            ValueType::I32 => write!(f, "i32"),
            ValueType::I64 => write!(f, "i64"),
            ValueType::F64 => write!(f, "f64"),
            ValueType::String => write!(f, "String"),
            ValueType::Named(name) => write!(f, "{name}"),
        }
    }
}
