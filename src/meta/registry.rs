//! Registry of declared types.
//!
//! The [`TypeRegistry`] stores every [`BeanType`] by qualified name and answers
//! the two questions catalog construction needs:
//!
//! - the ancestry of a type, from the most derived type up to the root
//! - the most-derived declaration of a method, by name and signature
//!
//! A type's parent must be registered before the type itself, so every
//! ancestry chain is finite and ends at the root `Object` type.

use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;

use crate::base::{MethodKey, OBJECT_TYPE, TypeName, ValueType};

use super::{BeanType, Method};

/// Errors raised while registering types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("type name must not be empty")]
    EmptyName,

    #[error("type '{0}' is already registered")]
    DuplicateType(TypeName),

    #[error("parent type '{parent}' of '{child}' is not registered")]
    MissingParent { child: TypeName, parent: TypeName },

    #[error("method {method} declared twice on '{owner}'")]
    DuplicateMethod { owner: TypeName, method: MethodKey },
}

/// All known types, indexed by qualified name (insertion order preserved).
#[derive(Clone, Debug)]
pub struct TypeRegistry {
    types: IndexMap<TypeName, Arc<BeanType>>,
}

impl TypeRegistry {
    /// Create a registry holding only the root `Object` type.
    ///
    /// The root declares `getClass()`, which introspection reports as the
    /// `class` pseudo-property of every type.
    pub fn new() -> Self {
        let object = BeanType::builder(OBJECT_TYPE)
            .method(Method::getter("getClass", ValueType::named("Class")))
            .build();
        let mut types = IndexMap::new();
        types.insert(object.name().clone(), Arc::new(object));
        Self { types }
    }

    /// Register a type. Its parent (or `Object`, if none was given) must already exist.
    pub fn register(&mut self, ty: BeanType) -> Result<Arc<BeanType>, RegistryError> {
        if ty.name().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.types.contains_key(ty.name()) {
            return Err(RegistryError::DuplicateType(ty.name().clone()));
        }

        let ty = match ty.parent().cloned() {
            Some(parent) => {
                if !self.types.contains_key(&parent) {
                    return Err(RegistryError::MissingParent {
                        child: ty.name().clone(),
                        parent,
                    });
                }
                ty
            }
            None => ty.with_parent(Arc::from(OBJECT_TYPE)),
        };

        let mut seen = HashSet::new();
        for method in ty.methods() {
            if !seen.insert(method.key()) {
                return Err(RegistryError::DuplicateMethod {
                    owner: ty.name().clone(),
                    method: method.key().clone(),
                });
            }
        }

        tracing::trace!(
            "[REGISTRY] registered '{}' ({} methods)",
            ty.name(),
            ty.methods().len()
        );
        let ty = Arc::new(ty);
        self.types.insert(ty.name().clone(), Arc::clone(&ty));
        Ok(ty)
    }

    /// Register several types in order.
    pub fn register_all(
        &mut self,
        types: impl IntoIterator<Item = BeanType>,
    ) -> Result<(), RegistryError> {
        for ty in types {
            self.register(ty)?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<BeanType>> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of registered types, including the root.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over all types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<BeanType>> {
        self.types.values()
    }

    /// Walk from `name` up to the root. Empty if `name` is not registered.
    pub fn ancestry<'a>(&'a self, name: &str) -> Ancestry<'a> {
        Ancestry {
            registry: self,
            next: self.types.get(name),
        }
    }

    /// The most-derived declaration of `key` visible from type `name`.
    pub fn find_method(&self, name: &str, key: &MethodKey) -> Option<&Arc<Method>> {
        self.ancestry(name).find_map(|ty| ty.declared_method(key))
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a type and its ancestors, most derived first.
pub struct Ancestry<'a> {
    registry: &'a TypeRegistry,
    next: Option<&'a Arc<BeanType>>,
}

impl<'a> Iterator for Ancestry<'a> {
    type Item = &'a Arc<BeanType>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current
            .parent()
            .and_then(|parent| self.registry.types.get(parent.as_ref()));
        Some(current)
    }
}
