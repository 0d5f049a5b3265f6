//! Locale documents and key resolution

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::markup::{interpolate, parse_rich_text, RichSegment};
use crate::config::DEFAULT_LOCALE;
use crate::error::SiteError;
use crate::Result;

const BUNDLED_EN: &str = include_str!("../../locales/en.json");

/// A value found at a key path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentEntry<'a> {
    Text(&'a str),
    Record(&'a Map<String, Value>),
    Records(&'a [Value]),
    /// Numbers, booleans and null
    Scalar(&'a Value),
}

impl<'a> ContentEntry<'a> {
    fn from_value(value: &'a Value) -> Self {
        match value {
            Value::String(text) => ContentEntry::Text(text),
            Value::Object(map) => ContentEntry::Record(map),
            Value::Array(items) => ContentEntry::Records(items),
            other => ContentEntry::Scalar(other),
        }
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            ContentEntry::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// All loaded locale documents plus the fallback locale
#[derive(Debug, Clone, PartialEq)]
pub struct ContentSource {
    documents: BTreeMap<String, Value>,
    fallback: String,
}

impl ContentSource {
    /// Empty source; `fallback` must be loaded before resolving anything.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            documents: BTreeMap::new(),
            fallback: fallback.into(),
        }
    }

    /// Source holding the copy shipped with the crate (`en`, also the fallback).
    pub fn bundled() -> Result<Self> {
        let mut source = Self::new(DEFAULT_LOCALE);
        source.insert_json(DEFAULT_LOCALE, BUNDLED_EN)?;
        Ok(source)
    }

    /// Use `fallback` for keys the requested locale lacks.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Parse and add (or replace) a locale document.
    pub fn insert_json(&mut self, locale: &str, json: &str) -> Result<()> {
        let value = serde_json::from_str(json).map_err(|source| SiteError::ContentParse {
            locale: locale.to_string(),
            source,
        })?;
        self.insert(locale, value)
    }

    /// Add (or replace) a locale document. The root must be an object.
    pub fn insert(&mut self, locale: &str, document: Value) -> Result<()> {
        if !document.is_object() {
            return Err(SiteError::ContentShape(locale.to_string()));
        }
        tracing::debug!(locale, "Loaded locale document");
        self.documents.insert(locale.to_string(), document);
        Ok(())
    }

    /// Load every `<locale>.json` file in `dir`. Returns how many were loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let io_err = |source| SiteError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut loaded = 0;
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(locale) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let json = fs::read_to_string(&path).map_err(|source| SiteError::Io {
                path: path.clone(),
                source,
            })?;
            self.insert_json(locale, &json)?;
            loaded += 1;
        }

        tracing::info!(dir = %dir.display(), loaded, "Loaded locale directory");
        Ok(loaded)
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback
    }

    /// Loaded locales, sorted
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// Best loaded locale for a requested tag.
    ///
    /// Exact match first (case-insensitive), then the language subtag
    /// (`de-AT` → `de`), then the fallback locale.
    pub fn negotiate<'a>(&'a self, requested: &str) -> &'a str {
        let requested = requested.trim().replace('_', "-");

        if let Some(locale) = self.find_locale(&requested) {
            return locale;
        }
        if let Some((language, _)) = requested.split_once('-') {
            if let Some(locale) = self.find_locale(language) {
                return locale;
            }
        }

        tracing::debug!(
            requested = %requested,
            fallback = %self.fallback,
            "Requested locale not loaded, using fallback"
        );
        &self.fallback
    }

    /// Negotiated locale, or an error when not even the fallback is loaded.
    pub fn require(&self, requested: &str) -> Result<&str> {
        let locale = self.negotiate(requested);
        if self.documents.contains_key(locale) {
            Ok(locale)
        } else {
            Err(SiteError::UnknownLocale(requested.to_string()))
        }
    }

    /// Look up a dotted key in `locale`, then in the fallback locale.
    ///
    /// Numeric path segments index into lists (`"about.cards.0.heading"`).
    pub fn resolve(&self, key: &str, locale: &str) -> Option<ContentEntry<'_>> {
        self.lookup_value(key, locale).map(ContentEntry::from_value)
    }

    /// Translator bound to one locale
    pub fn translator(self: &Arc<Self>, locale: &str) -> Translator {
        Translator {
            locale: self.negotiate(locale).to_string(),
            source: Arc::clone(self),
        }
    }

    fn find_locale(&self, tag: &str) -> Option<&str> {
        self.documents
            .keys()
            .find(|locale| locale.eq_ignore_ascii_case(tag))
            .map(String::as_str)
    }

    fn lookup_value(&self, key: &str, locale: &str) -> Option<&Value> {
        let locale = self.negotiate(locale);
        self.lookup_in(locale, key).or_else(|| {
            (locale != self.fallback)
                .then(|| self.lookup_in(&self.fallback, key))
                .flatten()
        })
    }

    fn lookup_in(&self, locale: &str, key: &str) -> Option<&Value> {
        let mut current = self.documents.get(locale)?;
        for segment in key.split('.') {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }
}

/// Typed access to one locale's copy.
///
/// Cheap to clone; this is what the UI puts into context.
#[derive(Debug, Clone)]
pub struct Translator {
    source: Arc<ContentSource>,
    locale: String,
}

impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source, &other.source) && self.locale == other.locale
    }
}

impl Translator {
    /// Negotiated locale this translator reads from
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn resolve(&self, key: &str) -> Option<ContentEntry<'_>> {
        self.source.resolve(key, &self.locale)
    }

    /// String at `key`, or the key itself when missing or not a string.
    pub fn t(&self, key: &str) -> String {
        match self.resolve(key).and_then(|entry| entry.as_text()) {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!(key, locale = %self.locale, "Missing text, rendering key");
                key.to_string()
            }
        }
    }

    /// [`Translator::t`] with `{{name}}` placeholders filled in
    pub fn t_with(&self, key: &str, vars: &[(&str, &str)]) -> String {
        interpolate(&self.t(key), vars)
    }

    /// Text at `key` split on numbered tags, after interpolation
    pub fn rich(&self, key: &str, vars: &[(&str, &str)]) -> Vec<RichSegment> {
        parse_rich_text(&self.t_with(key, vars))
    }

    /// List of records at `key`.
    ///
    /// A missing key or a non-list value gives an empty list; items that do
    /// not decode are skipped.
    pub fn records<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(ContentEntry::Records(items)) = self.resolve(key) else {
            tracing::warn!(key, locale = %self.locale, "Expected a list of records");
            return Vec::new();
        };

        items
            .iter()
            .enumerate()
            .filter_map(|(idx, item)| match T::deserialize(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(key, idx, error = %e, "Skipping malformed record");
                    None
                }
            })
            .collect()
    }

    /// Single record at `key`
    pub fn record<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.source.lookup_value(key, &self.locale)?;
        T::deserialize(value)
            .map_err(|e| {
                tracing::warn!(key, error = %e, "Malformed record");
            })
            .ok()
    }
}
