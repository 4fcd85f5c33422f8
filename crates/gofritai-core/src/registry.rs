use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FritError, Result};
use crate::provider::{Category, Provider};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    provider: Vec<Provider>,
}

/// Immutable catalogue of free-tier providers.
///
/// Built once at startup and handed to whatever needs to query it.
/// There is no way to add, remove or edit an entry after construction.
#[derive(Debug, Clone)]
pub struct Registry {
    providers: Vec<Provider>,
}

impl Registry {
    /// Build a registry from providers in declaration order.
    /// Fails if two entries share an id.
    pub fn new(providers: Vec<Provider>) -> Result<Self> {
        {
            let mut seen = HashSet::with_capacity(providers.len());
            for p in &providers {
                if !seen.insert(p.id.as_str()) {
                    return Err(FritError::DuplicateProvider(p.id.clone()));
                }
            }
        }
        tracing::debug!(count = providers.len(), "provider registry built");
        Ok(Self { providers })
    }

    /// Parse a catalogue from a TOML string of `[[provider]]` tables.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(toml_str).map_err(|e| FritError::Catalog(e.to_string()))?;
        Self::new(file.provider)
    }

    /// Load a catalogue file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading catalogue");
        let content = std::fs::read_to_string(path)
            .map_err(|e| FritError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// The catalogue compiled into the binary from data/providers.toml.
    pub fn bundled() -> Result<Self> {
        let toml_str = include_str!("../../../data/providers.toml");
        Self::from_toml_str(toml_str)
    }

    /// Look up a provider by id. First match wins.
    pub fn get(&self, id: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }

    /// All providers in `category`, in declaration order.
    pub fn by_category(&self, category: Category) -> Vec<&Provider> {
        self.providers
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// All providers that can be used without a credit card, in declaration order.
    pub fn no_credit_card(&self) -> Vec<&Provider> {
        self.providers.iter().filter(|p| !p.requires_cc).collect()
    }

    /// Categories that have at least one provider, in `Category::ALL` order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.providers.iter().any(|p| p.category == *c))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Provider> {
        self.providers.iter()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
