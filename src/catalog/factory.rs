use std::sync::Arc;

use crate::base::{CLASS_PROPERTY, TypeName};
use crate::config::CatalogConfig;
use crate::introspect::{ConventionIntrospector, Introspector};
use crate::meta::TypeRegistry;
use crate::resolve::DescriptorResolver;
use crate::resources::{NoResources, PropertiesBundles, ResourceLookup};
use crate::{Error, Result};

use super::PropertyCatalog;

/// Builds [`PropertyCatalog`]s for the types of one registry.
///
/// Holds the collaborators a build needs: the introspector that lists raw
/// accessor pairs and the resource lookup for localized names. The `class`
/// pseudo-property is always excluded.
pub struct CatalogFactory<'r> {
    registry: &'r TypeRegistry,
    introspector: Box<dyn Introspector>,
    resources: Box<dyn ResourceLookup>,
    excluded: Vec<String>,
}

impl<'r> CatalogFactory<'r> {
    /// A factory with [`ConventionIntrospector`] and no resource bundles.
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self {
            registry,
            introspector: Box::new(ConventionIntrospector::new()),
            resources: Box::new(NoResources),
            excluded: vec![CLASS_PROPERTY.to_string()],
        }
    }

    /// A factory wired from configuration.
    ///
    /// With `bundle_root` set, localized names come from
    /// [`PropertiesBundles`] under that directory, using `locale` if given.
    pub fn from_config(registry: &'r TypeRegistry, config: &CatalogConfig) -> Result<Self> {
        config.validate()?;
        let mut factory = Self::new(registry);
        if let Some(root) = &config.bundle_root {
            let mut bundles = PropertiesBundles::new(root);
            if let Some(locale) = &config.locale {
                bundles = bundles.with_locale(locale.as_str());
            }
            factory = factory.with_resources(bundles);
        }
        for name in &config.excluded_properties {
            factory = factory.exclude(name.as_str());
        }
        Ok(factory)
    }

    #[must_use]
    pub fn with_introspector(mut self, introspector: impl Introspector + 'static) -> Self {
        self.introspector = Box::new(introspector);
        self
    }

    #[must_use]
    pub fn with_resources(mut self, resources: impl ResourceLookup + 'static) -> Self {
        self.resources = Box::new(resources);
        self
    }

    /// Also skip properties named `name`.
    #[must_use]
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.excluded.contains(&name) {
            self.excluded.push(name);
        }
        self
    }

    /// Build the catalog of `target`.
    ///
    /// Either the whole catalog is built or an error is returned; nothing is
    /// cached between calls.
    pub fn build(&self, target: &str) -> Result<PropertyCatalog> {
        if target.is_empty() {
            return Err(Error::invalid_argument("target"));
        }

        let raw = self.introspector.introspect(self.registry, target)?;
        let owner: TypeName = self
            .registry
            .get(target)
            .map(|ty| ty.name().clone())
            .unwrap_or_else(|| Arc::from(target));

        let resolver = DescriptorResolver::new(self.registry, &*self.resources);
        let mut descriptors = Vec::with_capacity(raw.len());
        for property in &raw {
            if self.excluded.iter().any(|name| *name == property.name) {
                tracing::trace!("[CATALOG] skipping '{}' on '{}'", property.name, owner);
                continue;
            }
            descriptors.push(Arc::new(resolver.resolve(&owner, property)?));
        }

        let catalog = PropertyCatalog::from_descriptors(owner, descriptors)?;
        tracing::debug!(
            "[CATALOG] built '{}' with {} properties",
            catalog.owner(),
            catalog.len()
        );
        Ok(catalog)
    }
}
