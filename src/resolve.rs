//! Descriptor resolution: one raw accessor pair to one [`PropertyDescriptor`].
//!
//! Every metadata attribute is read through [`first_annotation`], which scans
//! the read accessor before the write accessor. When both accessors carry the
//! same annotation kind, the read accessor's value wins.
//!
//! Before scanning, accessors are re-resolved against the owning type so that
//! the most-derived declaration of each signature is the one inspected. An
//! introspector that reports an inherited `isX()` from the declaring parent
//! still yields the annotations of the subclass override.

use std::sync::Arc;

use crate::base::TypeName;
use crate::catalog::PropertyDescriptor;
use crate::introspect::RawProperty;
use crate::meta::{Annotation, AnnotationKind, Method, TypeRegistry};
use crate::resources::ResourceLookup;
use crate::{Error, Result};

/// Order index of a property without an `Order` annotation; sorts last.
pub const DEFAULT_ORDER_INDEX: i32 = i32::MAX;

/// The first annotation of `kind` across `accessors`, in the given order.
///
/// Absent accessors are skipped. `None` when no accessor carries the kind.
pub fn first_annotation<'m>(
    kind: AnnotationKind,
    accessors: &[Option<&'m Method>],
) -> Option<&'m Annotation> {
    accessors
        .iter()
        .flatten()
        .find_map(|method| method.annotation(kind))
}

/// Resolves raw accessor pairs of one registry into descriptors.
pub struct DescriptorResolver<'a> {
    registry: &'a TypeRegistry,
    resources: &'a dyn ResourceLookup,
}

impl<'a> DescriptorResolver<'a> {
    pub fn new(registry: &'a TypeRegistry, resources: &'a dyn ResourceLookup) -> Self {
        Self {
            registry,
            resources,
        }
    }

    /// Resolve `raw` as a property of `owner`.
    ///
    /// Fails only when an accessor in `raw` is not visible on `owner`, which
    /// means the introspector produced malformed output.
    pub fn resolve(&self, owner: &TypeName, raw: &RawProperty) -> Result<PropertyDescriptor> {
        let getter = raw
            .read
            .as_ref()
            .map(|m| self.most_derived(owner, m))
            .transpose()?;
        let setter = raw
            .write
            .as_ref()
            .map(|m| self.most_derived(owner, m))
            .transpose()?;
        let accessors = [getter.as_deref(), setter.as_deref()];

        let order_index = match first_annotation(AnnotationKind::Order, &accessors) {
            Some(Annotation::Order(index)) => *index,
            _ => DEFAULT_ORDER_INDEX,
        };
        let localized_name = self.localized_name(owner, &raw.name, &accessors);
        let hidden = first_annotation(AnnotationKind::Hidden, &accessors).is_some();
        let multi_line = raw.declared_type.is_string()
            && first_annotation(AnnotationKind::MultiLine, &accessors).is_some();
        let nullable = first_annotation(AnnotationKind::Nullable, &accessors).is_some();

        let descriptor = PropertyDescriptor {
            owner: owner.clone(),
            name: raw.name.clone(),
            declared_type: raw.declared_type.clone(),
            read_only: getter.is_some() && setter.is_none(),
            order_index,
            localized_name,
            hidden,
            multi_line,
            nullable,
            getter_key: getter.as_ref().map(|m| m.key().clone()),
            setter_key: setter.as_ref().map(|m| m.key().clone()),
            getter,
            setter,
        };

        tracing::trace!(
            "[RESOLVE] {}.{} order={} hidden={} read_only={}",
            owner,
            descriptor.name,
            descriptor.order_index,
            descriptor.hidden,
            descriptor.read_only
        );
        Ok(descriptor)
    }

    /// The declaration of `method`'s signature that `owner` actually sees.
    fn most_derived(&self, owner: &TypeName, method: &Arc<Method>) -> Result<Arc<Method>> {
        let found = self
            .registry
            .find_method(owner, method.key())
            .ok_or_else(|| Error::AccessorResolution {
                owner: owner.clone(),
                method: method.key().clone(),
            })?;
        if found.declaring_type() != method.declaring_type() {
            tracing::trace!(
                "[RESOLVE] {} re-bound from '{}' to '{}'",
                method.key(),
                method.declaring_type(),
                found.declaring_type()
            );
        }
        Ok(Arc::clone(found))
    }

    fn localized_name(
        &self,
        owner: &TypeName,
        property: &str,
        accessors: &[Option<&Method>],
    ) -> String {
        let Some(Annotation::Localized(literal)) =
            first_annotation(AnnotationKind::Localized, accessors)
        else {
            return property.to_string();
        };
        if let Some(name) = self.resources.lookup(owner, property) {
            return name;
        }
        if literal.is_empty() {
            property.to_string()
        } else {
            literal.clone()
        }
    }
}
