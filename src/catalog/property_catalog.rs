use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::base::{TypeName, normalize_property_name};
use crate::meta::TypeRegistry;
use crate::{Error, Result};

use super::{CatalogFactory, PropertyDescriptor};

/// Ordered, name-indexed properties of one type.
///
/// The ordered sequence is the single source of truth; the name index is
/// derived from it whenever a catalog is created or restored, and is never
/// persisted. Iteration follows `order_index` ascending, with ties in
/// introspection order.
#[derive(Clone, Debug)]
pub struct PropertyCatalog {
    owner: TypeName,
    properties: Vec<Arc<PropertyDescriptor>>,
    by_name: FxHashMap<String, Arc<PropertyDescriptor>>,
}

impl PropertyCatalog {
    /// Build the catalog of `target` with the default introspector and no
    /// resource bundles. See [`CatalogFactory`] for configurable builds.
    ///
    /// Catalogs are not cached; callers that query a type repeatedly should
    /// keep the result.
    pub fn build(registry: &TypeRegistry, target: &str) -> Result<Self> {
        CatalogFactory::new(registry).build(target)
    }

    /// Assemble a catalog from resolved descriptors.
    ///
    /// Sorts stably by order index and fails on duplicate names.
    pub fn from_descriptors(
        owner: TypeName,
        mut properties: Vec<Arc<PropertyDescriptor>>,
    ) -> Result<Self> {
        properties.sort_by_key(|p| p.order_index());

        let mut by_name = FxHashMap::default();
        for property in &properties {
            if by_name
                .insert(property.name().to_string(), Arc::clone(property))
                .is_some()
            {
                return Err(Error::DuplicateProperty(property.name().to_string()));
            }
        }

        Ok(Self {
            owner,
            properties,
            by_name,
        })
    }

    /// The type these properties belong to.
    pub fn owner(&self) -> &TypeName {
        &self.owner
    }

    /// True if a property named `name` (first letter case-insensitive) exists.
    pub fn contains(&self, name: &str) -> Result<bool> {
        let name = Self::checked_name(name)?;
        Ok(self.by_name.contains_key(&name))
    }

    /// The property named `name` (first letter case-insensitive).
    pub fn get(&self, name: &str) -> Result<&Arc<PropertyDescriptor>> {
        let name = Self::checked_name(name)?;
        self.by_name
            .get(&name)
            .ok_or(Error::PropertyNotFound(name))
    }

    /// The property at `index` in iteration order.
    pub fn get_index(&self, index: usize) -> Result<&Arc<PropertyDescriptor>> {
        self.properties.get(index).ok_or(Error::OutOfBounds {
            index,
            len: self.properties.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<PropertyDescriptor>> {
        self.properties.iter()
    }

    /// A copy of the ordered descriptors; changing it does not affect the catalog.
    pub fn to_list(&self) -> Vec<Arc<PropertyDescriptor>> {
        self.properties.clone()
    }

    /// A new catalog without hidden properties, sharing the same descriptors.
    pub fn to_visible_properties_only(&self) -> PropertyCatalog {
        let properties: Vec<_> = self
            .properties
            .iter()
            .filter(|p| !p.is_hidden())
            .cloned()
            .collect();
        let by_name = properties
            .iter()
            .map(|p| (p.name().to_string(), Arc::clone(p)))
            .collect();
        PropertyCatalog {
            owner: self.owner.clone(),
            properties,
            by_name,
        }
    }

    /// Re-derive live accessor handles of every descriptor.
    pub fn rebind(&mut self, registry: &TypeRegistry) {
        for property in &mut self.properties {
            Arc::make_mut(property).rebind(registry);
        }
        self.by_name = self
            .properties
            .iter()
            .map(|p| (p.name().to_string(), Arc::clone(p)))
            .collect();
    }

    /// Encode to the persisted byte form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode without re-binding accessors.
    ///
    /// Fails with [`Error::DuplicateProperty`] when the decoded properties
    /// repeat a name.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let data: CatalogData = serde_json::from_slice(bytes)?;
        let properties = data.properties.into_iter().map(Arc::new).collect();
        Self::from_descriptors(data.owner, properties)
    }

    /// Decode and re-bind accessors against `registry`.
    pub fn restore(bytes: &[u8], registry: &TypeRegistry) -> Result<Self> {
        let mut catalog = Self::from_bytes(bytes)?;
        catalog.rebind(registry);
        Ok(catalog)
    }

    fn checked_name(name: &str) -> Result<String> {
        if name.is_empty() {
            return Err(Error::invalid_argument("name"));
        }
        Ok(normalize_property_name(name))
    }
}

impl PartialEq for PropertyCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.properties == other.properties
    }
}

impl Eq for PropertyCatalog {}

impl<'a> IntoIterator for &'a PropertyCatalog {
    type Item = &'a Arc<PropertyDescriptor>;
    type IntoIter = std::slice::Iter<'a, Arc<PropertyDescriptor>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Serialize)]
struct CatalogRef<'a> {
    owner: &'a TypeName,
    properties: Vec<&'a PropertyDescriptor>,
}

#[derive(Deserialize)]
struct CatalogData {
    owner: TypeName,
    properties: Vec<PropertyDescriptor>,
}

impl Serialize for PropertyCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        CatalogRef {
            owner: &self.owner,
            properties: self.properties.iter().map(Arc::as_ref).collect(),
        }
        .serialize(serializer)
    }
}
