use std::collections::BTreeMap;

use chat_model::Category;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::defaults;

/// Keywords and canned responses of a single category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEntry {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub responses: Vec<String>,
}

impl CategoryEntry {
    pub fn new<K, R>(keywords: K, responses: R) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        CategoryEntry {
            keywords: keywords.into_iter().map(Into::into).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response table plus keyword rules. Only the content is configurable: the set of
/// categories and the order they are evaluated in are fixed by [`Category::PRIORITY`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponderConfig {
    pub categories: BTreeMap<Category, CategoryEntry>,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        defaults::portfolio()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Category '{0}' is missing from the response table")]
    MissingCategory(Category),
    #[error("Category '{0}' has no responses")]
    NoResponses(Category),
    #[error("Category '{0}' contains a blank response")]
    BlankResponse(Category),
    #[error("Category '{0}' has no trigger keywords")]
    NoKeywords(Category),
    #[error("Category '{0}' contains a blank keyword")]
    BlankKeyword(Category),
    #[error("Fallback category '{0}' must not have trigger keywords")]
    FallbackWithKeywords(Category),
}

/// Entry checked against the table invariants, keywords lowercased for matching.
#[derive(Debug)]
pub(crate) struct CompiledEntry {
    pub category: Category,
    pub keywords: Vec<String>,
    pub responses: Vec<String>,
}

impl ResponderConfig {
    /// Checks every category and returns the entries in priority order.
    pub(crate) fn compile(mut self) -> Result<Vec<CompiledEntry>, ConfigError> {
        Category::PRIORITY
            .into_iter()
            .map(|category| {
                let entry = self
                    .categories
                    .remove(&category)
                    .ok_or(ConfigError::MissingCategory(category))?;
                compile_entry(category, entry)
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.clone().compile().map(|_| ())
    }
}

fn compile_entry(category: Category, entry: CategoryEntry) -> Result<CompiledEntry, ConfigError> {
    if entry.responses.is_empty() {
        return Err(ConfigError::NoResponses(category));
    }
    if entry.responses.iter().any(|r| r.trim().is_empty()) {
        return Err(ConfigError::BlankResponse(category));
    }
    if category.is_fallback() {
        if !entry.keywords.is_empty() {
            return Err(ConfigError::FallbackWithKeywords(category));
        }
    } else {
        if entry.keywords.is_empty() {
            return Err(ConfigError::NoKeywords(category));
        }
        if entry.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::BlankKeyword(category));
        }
    }
    Ok(CompiledEntry {
        category,
        keywords: entry.keywords.iter().map(|k| k.to_lowercase()).collect(),
        responses: entry.responses,
    })
}
