use std::sync::Arc;

use crate::base::{MethodKey, TypeName};

use super::Method;

/// Declarative description of a type: its name, parent, and declared methods.
///
/// Built with [`BeanType::builder`] and registered in a
/// [`TypeRegistry`](super::TypeRegistry), which takes the place of runtime
/// reflection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeanType {
    name: TypeName,
    parent: Option<TypeName>,
    methods: Vec<Arc<Method>>,
}

impl BeanType {
    /// Start describing the type `name`.
    pub fn builder(name: impl Into<TypeName>) -> BeanTypeBuilder {
        BeanTypeBuilder {
            name: name.into(),
            parent: None,
            methods: Vec::new(),
        }
    }

    /// Fully-qualified name.
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Parent type, `None` only for the root type.
    pub fn parent(&self) -> Option<&TypeName> {
        self.parent.as_ref()
    }

    /// Methods declared directly on this type, in declaration order.
    pub fn methods(&self) -> &[Arc<Method>] {
        &self.methods
    }

    /// A method declared directly on this type (inherited methods excluded).
    pub fn declared_method(&self, key: &MethodKey) -> Option<&Arc<Method>> {
        self.methods.iter().find(|m| m.key() == key)
    }

    pub(crate) fn with_parent(mut self, parent: TypeName) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Fluent builder for [`BeanType`].
#[derive(Debug)]
pub struct BeanTypeBuilder {
    name: TypeName,
    parent: Option<TypeName>,
    methods: Vec<Method>,
}

impl BeanTypeBuilder {
    /// Set the parent type. Defaults to the root `Object` type on registration.
    #[must_use]
    pub fn extends(mut self, parent: impl Into<TypeName>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Declare a method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn build(self) -> BeanType {
        let name = self.name;
        let methods = self
            .methods
            .into_iter()
            .map(|m| Arc::new(m.declared_in(name.clone())))
            .collect();
        BeanType {
            name,
            parent: self.parent,
            methods,
        }
    }
}
