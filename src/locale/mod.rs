//! Locale support for number formatting
//!
//! This module resolves locale identifiers to `NumberFormattingRules`.
//! Rules come from TOML tables: a built-in table embedded in the crate and
//! any number of caller-supplied overrides layered on top of it.

mod loader;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::error::{LocaleDataError, LocalizationError, Result};
use crate::types::{LocaleId, NumberFormattingRules};

/// Built-in locale table
const EMBEDDED_RULES: &str = include_str!("locale_rules.toml");

/// Resolves a locale identifier to its formatting rules
pub trait RuleProvider: Send + Sync {
    /// Fails with `LocalizationError::UnknownLocale` when no rule set applies
    fn resolve_rules(&self, locale: &LocaleId) -> Result<Arc<NumberFormattingRules>>;
}

impl<P: RuleProvider + ?Sized> RuleProvider for &P {
    fn resolve_rules(&self, locale: &LocaleId) -> Result<Arc<NumberFormattingRules>> {
        (**self).resolve_rules(locale)
    }
}

impl<P: RuleProvider + ?Sized> RuleProvider for Arc<P> {
    fn resolve_rules(&self, locale: &LocaleId) -> Result<Arc<NumberFormattingRules>> {
        (**self).resolve_rules(locale)
    }
}

/// A table of locale rules loaded from TOML
#[derive(Debug, Clone, Default)]
pub struct LocaleRepository {
    base: NumberFormattingRules,
    locales: HashMap<LocaleId, Arc<NumberFormattingRules>>,
}

impl LocaleRepository {
    /// An empty repository; every lookup fails until locales are added
    pub fn new() -> Self {
        Self::default()
    }

    /// The repository holding the built-in locale table
    pub fn embedded() -> std::result::Result<Self, LocaleDataError> {
        Self::from_toml_str(EMBEDDED_RULES)
    }

    pub fn from_toml_str(toml_str: &str) -> std::result::Result<Self, LocaleDataError> {
        let mut repository = Self::new();
        repository.merge_toml_str(toml_str)?;
        Ok(repository)
    }

    /// Layer a TOML document over the current table
    ///
    /// Returns the number of locale tables the document defined. On error
    /// the repository is left unchanged.
    pub fn merge_toml_str(&mut self, toml_str: &str) -> std::result::Result<usize, LocaleDataError> {
        let mut base = self.base.clone();
        let mut locales = self.locales.clone();
        let loaded = loader::merge_document(toml_str, &mut base, &mut locales)?;
        self.base = base;
        self.locales = locales;
        debug!(loaded, total = self.locales.len(), "merged locale rules");
        Ok(loaded)
    }

    /// Layer a TOML file over the current table
    pub fn merge_file(&mut self, path: impl AsRef<Path>) -> std::result::Result<usize, LocaleDataError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| LocaleDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading locale rules file");
        self.merge_toml_str(&contents)
    }

    /// Register or replace the rules for one locale
    pub fn insert(
        &mut self,
        locale: impl Into<LocaleId>,
        rules: NumberFormattingRules,
    ) -> std::result::Result<(), LocaleDataError> {
        let id = locale.into();
        rules
            .validate()
            .map_err(|reason| LocaleDataError::invalid(id.as_str(), reason))?;
        self.locales.insert(id, Arc::new(rules));
        Ok(())
    }

    /// All locale identifiers with their own table, sorted
    pub fn locales(&self) -> Vec<LocaleId> {
        let mut ids: Vec<LocaleId> = self.locales.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn contains(&self, locale: &LocaleId) -> bool {
        self.locales.contains_key(locale)
    }
}

impl RuleProvider for LocaleRepository {
    /// Exact match first, then the bare language table
    fn resolve_rules(&self, locale: &LocaleId) -> Result<Arc<NumberFormattingRules>> {
        if let Some(rules) = self.locales.get(locale) {
            return Ok(Arc::clone(rules));
        }

        if locale.has_subtags() {
            let language = LocaleId::new(locale.language());
            if let Some(rules) = self.locales.get(&language) {
                trace!(%locale, fallback = %language, "using language fallback");
                return Ok(Arc::clone(rules));
            }
        }

        Err(LocalizationError::UnknownLocale {
            locale: locale.to_string(),
        })
    }
}

/// Memoizes rules resolved by an inner provider
///
/// Failed lookups are not cached. The cache can be cleared at any time;
/// subsequent lookups go back to the inner provider.
#[derive(Debug)]
pub struct CachedRuleProvider<P> {
    inner: P,
    cache: RwLock<HashMap<LocaleId, Arc<NumberFormattingRules>>>,
}

impl<P: RuleProvider> CachedRuleProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Drop every cached entry
    pub fn clear(&self) {
        self.cache.write().clear();
    }

    /// Number of cached locales
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }
}

impl<P: RuleProvider> RuleProvider for CachedRuleProvider<P> {
    fn resolve_rules(&self, locale: &LocaleId) -> Result<Arc<NumberFormattingRules>> {
        if let Some(rules) = self.cache.read().get(locale) {
            trace!(%locale, "locale rules cache hit");
            return Ok(Arc::clone(rules));
        }

        trace!(%locale, "locale rules cache miss");
        let rules = self.inner.resolve_rules(locale)?;
        self.cache
            .write()
            .entry(locale.clone())
            .or_insert_with(|| Arc::clone(&rules));
        Ok(rules)
    }
}
