use std::collections::BTreeMap;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::base::{MethodKey, decapitalize};
use crate::meta::{Method, TypeRegistry};

use super::{IntrospectionError, Introspector, RawProperty};

/// Introspector based on accessor naming conventions.
///
/// - `getX()` returning a value, or `isX()` returning `Bool`, is a read accessor
///   (`isX` preferred when both exist)
/// - `setX(T)` returning nothing is a write accessor, paired only when `T`
///   equals the read accessor's return type
/// - inherited methods are visible; the most-derived declaration of a
///   signature wins
///
/// Properties are reported sorted by name.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConventionIntrospector;

impl ConventionIntrospector {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Default)]
struct Accessors {
    is_getter: Option<Arc<Method>>,
    get_getter: Option<Arc<Method>>,
    setters: Vec<Arc<Method>>,
}

enum AccessorRole {
    Is,
    Get,
    Set,
}

fn classify(method: &Method) -> Option<(AccessorRole, String)> {
    let name = method.name();
    let params = method.params().len();
    let ret = method.return_type();

    if let Some(suffix) = name.strip_prefix("is")
        && !suffix.is_empty()
        && params == 0
        && ret.is_bool()
    {
        return Some((AccessorRole::Is, decapitalize(suffix)));
    }
    if let Some(suffix) = name.strip_prefix("get")
        && !suffix.is_empty()
        && params == 0
        && !ret.is_void()
    {
        return Some((AccessorRole::Get, decapitalize(suffix)));
    }
    if let Some(suffix) = name.strip_prefix("set")
        && !suffix.is_empty()
        && params == 1
        && ret.is_void()
    {
        return Some((AccessorRole::Set, decapitalize(suffix)));
    }
    None
}

impl Introspector for ConventionIntrospector {
    fn introspect(
        &self,
        registry: &TypeRegistry,
        type_name: &str,
    ) -> Result<Vec<RawProperty>, IntrospectionError> {
        let ty = registry
            .get(type_name)
            .ok_or_else(|| IntrospectionError::UnknownType(Arc::from(type_name)))?;

        let mut visible: IndexMap<&MethodKey, &Arc<Method>> = IndexMap::new();
        for ancestor in registry.ancestry(ty.name()) {
            for method in ancestor.methods() {
                visible.entry(method.key()).or_insert(method);
            }
        }

        let mut by_name: BTreeMap<String, Accessors> = BTreeMap::new();
        for method in visible.values() {
            let Some((role, property)) = classify(method) else {
                continue;
            };
            let slot = by_name.entry(property).or_default();
            match role {
                AccessorRole::Is => slot.is_getter = Some(Arc::clone(method)),
                AccessorRole::Get => slot.get_getter = Some(Arc::clone(method)),
                AccessorRole::Set => slot.setters.push(Arc::clone(method)),
            }
        }

        let mut properties = Vec::with_capacity(by_name.len());
        for (name, accessors) in by_name {
            if let (Some(is), Some(get)) = (&accessors.is_getter, &accessors.get_getter)
                && is.return_type() != get.return_type()
            {
                return Err(IntrospectionError::MalformedAccessors {
                    owner: ty.name().clone(),
                    property: name,
                    message: format!(
                        "{} returns {} but {} returns {}",
                        is.key(),
                        is.return_type(),
                        get.key(),
                        get.return_type()
                    ),
                });
            }

            let read = accessors.is_getter.or(accessors.get_getter);
            let (declared_type, write) = match &read {
                Some(getter) => {
                    let declared = getter.return_type().clone();
                    let write = accessors
                        .setters
                        .into_iter()
                        .find(|s| s.params().first() == Some(&declared));
                    (declared, write)
                }
                None => {
                    let Some(setter) = accessors.setters.into_iter().next() else {
                        continue;
                    };
                    (setter.params()[0].clone(), Some(setter))
                }
            };

            properties.push(RawProperty::new(name, declared_type, read, write));
        }

        tracing::trace!(
            "[INTROSPECT] '{}': {} properties",
            ty.name(),
            properties.len()
        );
        Ok(properties)
    }
}
