use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use super::{ResourceLookup, parse_properties};

type Bundle = Arc<IndexMap<String, String>>;

/// Resource bundles stored as `.properties` files under a root directory.
///
/// The bundle of type `app.model.Person` lives at
/// `<root>/app/model/Person.properties`. With a locale such as `ja_JP`, the
/// candidates `Person_ja_JP`, `Person_ja`, and `Person` are consulted in that
/// order for each key.
///
/// Parsed files are cached for the lifetime of the value; a missing file is
/// cached as absent.
#[derive(Debug)]
pub struct PropertiesBundles {
    root: PathBuf,
    locale: Option<String>,
    cache: RwLock<HashMap<String, Option<Bundle>>>,
}

impl PropertiesBundles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            locale: None,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Use `locale` (`ja_JP` or `ja-JP`) for bundle fallback.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        let locale = locale.into().replace('-', "_");
        self.locale = (!locale.is_empty()).then_some(locale);
        self
    }

    /// Bundle names to consult for `type_name`, most specific first.
    fn candidates(&self, type_name: &str) -> Vec<String> {
        let mut names = Vec::new();
        if let Some(locale) = &self.locale {
            let parts: Vec<&str> = locale.split('_').filter(|p| !p.is_empty()).collect();
            for len in (1..=parts.len()).rev() {
                names.push(format!("{}_{}", type_name, parts[..len].join("_")));
            }
        }
        names.push(type_name.to_string());
        names
    }

    fn bundle_path(&self, bundle_name: &str) -> PathBuf {
        let mut relative = bundle_name.replace('.', "/");
        relative.push_str(".properties");
        self.root.join(relative)
    }

    fn load(&self, bundle_name: &str) -> Option<Bundle> {
        if let Some(cached) = self.cache.read().get(bundle_name) {
            return cached.clone();
        }

        let path = self.bundle_path(bundle_name);
        let bundle = match std::fs::read(&path) {
            Ok(bytes) => {
                let parsed = parse_properties(&decode_bundle(bytes));
                for (line, message) in &parsed.errors {
                    tracing::warn!("{}:{}: {}", path.display(), line, message);
                }
                tracing::debug!(
                    "Loaded {} entries from {}",
                    parsed.entries.len(),
                    path.display()
                );
                Some(Arc::new(parsed.entries))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read bundle {}: {}", path.display(), e);
                None
            }
        };

        self.cache
            .write()
            .insert(bundle_name.to_string(), bundle.clone());
        bundle
    }
}

/// UTF-8 when valid, otherwise ISO-8859-1.
fn decode_bundle(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().iter().map(|&b| char::from(b)).collect(),
    }
}

impl ResourceLookup for PropertiesBundles {
    fn lookup(&self, type_name: &str, key: &str) -> Option<String> {
        self.candidates(type_name)
            .iter()
            .filter_map(|name| self.load(name))
            .find_map(|bundle| bundle.get(key).cloned())
    }
}
