//! Resolved property descriptors.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::base::{MethodKey, TypeName, ValueType};
use crate::meta::{Annotation, AnnotationKind, Method, TypeRegistry};
use crate::resolve::first_annotation;

/// Immutable metadata for one property of a type.
///
/// Equality and hashing cover every persisted attribute, including the
/// accessor keys, but not the live accessor handles. A descriptor restored
/// from bytes therefore equals the original even before it is re-bound.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub(crate) owner: TypeName,
    pub(crate) name: String,
    pub(crate) declared_type: ValueType,
    pub(crate) read_only: bool,
    pub(crate) order_index: i32,
    pub(crate) localized_name: String,
    pub(crate) hidden: bool,
    pub(crate) multi_line: bool,
    pub(crate) nullable: bool,
    pub(crate) getter_key: Option<MethodKey>,
    pub(crate) setter_key: Option<MethodKey>,
    #[serde(skip)]
    pub(crate) getter: Option<Arc<Method>>,
    #[serde(skip)]
    pub(crate) setter: Option<Arc<Method>>,
}

impl PropertyDescriptor {
    /// The type this property belongs to.
    pub fn owner(&self) -> &TypeName {
        &self.owner
    }

    /// Property name derived from the accessor names.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display name: resource bundle entry, annotation literal, or `name`.
    pub fn localized_name(&self) -> &str {
        &self.localized_name
    }

    pub fn declared_type(&self) -> &ValueType {
        &self.declared_type
    }

    /// `i32::MAX` when no `Order` annotation is present.
    pub fn order_index(&self) -> i32 {
        self.order_index
    }

    /// Has a read accessor and no write accessor.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_multi_line(&self) -> bool {
        self.multi_line
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn getter_key(&self) -> Option<&MethodKey> {
        self.getter_key.as_ref()
    }

    pub fn setter_key(&self) -> Option<&MethodKey> {
        self.setter_key.as_ref()
    }

    /// Live read accessor. `None` for write-only properties, or after a
    /// restore that could not re-bind the accessor.
    pub fn getter(&self) -> Option<&Arc<Method>> {
        self.getter.as_ref()
    }

    pub fn setter(&self) -> Option<&Arc<Method>> {
        self.setter.as_ref()
    }

    /// True when every persisted accessor key has a live handle.
    pub fn is_bound(&self) -> bool {
        self.getter_key.is_some() == self.getter.is_some()
            && self.setter_key.is_some() == self.setter.is_some()
    }

    /// First annotation of `kind`, read accessor before write accessor.
    pub fn annotation(&self, kind: AnnotationKind) -> Option<&Annotation> {
        first_annotation(kind, &[self.getter.as_deref(), self.setter.as_deref()])
    }

    /// Re-derive live accessor handles from `owner` + accessor keys.
    ///
    /// An accessor that can no longer be found is left unbound; that is not
    /// an error.
    pub fn rebind(&mut self, registry: &TypeRegistry) {
        let owner = &self.owner;
        let lookup = |key: &Option<MethodKey>| {
            key.as_ref()
                .and_then(|k| registry.find_method(owner, k))
                .cloned()
        };
        self.getter = lookup(&self.getter_key);
        self.setter = lookup(&self.setter_key);
        if !self.is_bound() {
            tracing::debug!(
                "[DESCRIPTOR] '{}.{}' could not re-bind all accessors",
                self.owner,
                self.name
            );
        }
    }

    /// Encode to the persisted byte form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode without re-binding accessors.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Decode and re-bind accessors against `registry`.
    pub fn restore(bytes: &[u8], registry: &TypeRegistry) -> Result<Self> {
        let mut descriptor = Self::from_bytes(bytes)?;
        descriptor.rebind(registry);
        Ok(descriptor)
    }
}

impl PartialEq for PropertyDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner
            && self.name == other.name
            && self.declared_type == other.declared_type
            && self.read_only == other.read_only
            && self.order_index == other.order_index
            && self.localized_name == other.localized_name
            && self.hidden == other.hidden
            && self.multi_line == other.multi_line
            && self.nullable == other.nullable
            && self.getter_key == other.getter_key
            && self.setter_key == other.setter_key
    }
}

impl Eq for PropertyDescriptor {}

impl Hash for PropertyDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.name.hash(state);
        self.declared_type.hash(state);
        self.read_only.hash(state);
        self.order_index.hash(state);
        self.localized_name.hash(state);
        self.hidden.hash(state);
        self.multi_line.hash(state);
        self.nullable.hash(state);
        self.getter_key.hash(state);
        self.setter_key.hash(state);
    }
}
