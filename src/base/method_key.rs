use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::ValueType;

/// Identifies a method by name and parameter types.
///
/// This is the persisted form of an accessor handle: a live [`Method`] can be
/// looked up again from its owning type and this key.
///
/// [`Method`]: crate::meta::Method
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodKey {
    pub name: Arc<str>,
    pub params: Vec<ValueType>,
}

impl MethodKey {
    pub fn new(name: impl Into<Arc<str>>, params: Vec<ValueType>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Key of a method taking no parameters.
    pub fn nullary(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, Vec::new())
    }
}

impl fmt::Display for MethodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ")")
    }
}
