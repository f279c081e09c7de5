//! Vocabulary catalog: static read-only reference data (kana tables + kanji),
//! keyed by id and filterable by (category, level). Never mutated after load.

use std::collections::HashMap;

use thiserror::Error;
use tracing::instrument;

use crate::domain::{Category, Level, VocabularyItem};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
  #[error("duplicate vocabulary id '{0}'")]
  DuplicateId(String),
}

#[derive(Debug)]
pub struct VocabularyCatalog {
  items: Vec<VocabularyItem>,
  index: HashMap<String, usize>,
}

impl VocabularyCatalog {
  #[instrument(level = "info", skip_all, fields(count = items.len()))]
  pub fn new(items: Vec<VocabularyItem>) -> Result<Self, CatalogError> {
    let mut index = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
      if index.insert(item.id.clone(), i).is_some() {
        return Err(CatalogError::DuplicateId(item.id.clone()));
      }
    }
    Ok(Self { items, index })
  }

  pub fn all(&self) -> &[VocabularyItem] {
    &self.items
  }

  pub fn get(&self, id: &str) -> Option<&VocabularyItem> {
    self.index.get(id).map(|&i| &self.items[i])
  }

  /// Items matching both filters; `None` means "any".
  pub fn filter(
    &self,
    category: Option<Category>,
    level: Option<Level>,
  ) -> impl Iterator<Item = &VocabularyItem> {
    self.items.iter().filter(move |item| {
      category.map_or(true, |c| item.category == c) && level.map_or(true, |l| item.level == l)
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn item(id: &str, category: Category, level: Level) -> VocabularyItem {
    VocabularyItem {
      id: id.into(),
      glyph: "あ".into(),
      romaji: "a".into(),
      level,
      category,
      meaning: None,
    }
  }

  #[test]
  fn rejects_duplicate_ids() {
    let err = VocabularyCatalog::new(vec![
      item("v1", Category::Hiragana, Level::N5),
      item("v1", Category::Kanji, Level::N4),
    ])
    .unwrap_err();
    assert_eq!(err, CatalogError::DuplicateId("v1".into()));
  }

  #[test]
  fn filters_by_category_and_level() {
    let catalog = VocabularyCatalog::new(vec![
      item("h1", Category::Hiragana, Level::N5),
      item("k1", Category::Katakana, Level::N5),
      item("j1", Category::Kanji, Level::N3),
    ])
    .unwrap();

    let hira: Vec<_> = catalog.filter(Some(Category::Hiragana), None).collect();
    assert_eq!(hira.len(), 1);
    assert_eq!(hira[0].id, "h1");

    let n5: Vec<_> = catalog.filter(None, Some(Level::N5)).collect();
    assert_eq!(n5.len(), 2);

    let none: Vec<_> = catalog.filter(Some(Category::Kanji), Some(Level::N5)).collect();
    assert!(none.is_empty());

    assert_eq!(catalog.filter(None, None).count(), 3);
  }

  #[test]
  fn lookup_by_id() {
    let catalog = VocabularyCatalog::new(vec![item("h1", Category::Hiragana, Level::N5)]).unwrap();
    assert!(catalog.get("h1").is_some());
    assert!(catalog.get("missing").is_none());
  }
}
