//! Loading extra content (questions + vocabulary) from a TOML file.
//!
//! Schema:
//!
//! ```toml
//! [[questions]]
//! id = "school-01"          # optional, generated when missing
//! prompt = "..."
//! options = ["...", "..."]
//! answer = "..."
//! level = "N4"
//!
//! [[vocabulary]]
//! glyph = "学校"
//! romaji = "gakkou"
//! level = "N5"
//! category = "kanji"
//! meaning = "school"
//! ```

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{Category, Level};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct BankConfig {
  #[serde(default)]
  pub questions: Vec<QuestionCfg>,
  #[serde(default)]
  pub vocabulary: Vec<VocabularyCfg>,
}

/// Question entry accepted in TOML configuration. Structural validation
/// (answer ∈ options, unique ids) happens when the bank is built.
#[derive(Clone, Debug, Deserialize)]
pub struct QuestionCfg {
  #[serde(default)] pub id: Option<String>,
  pub prompt: String,
  pub options: Vec<String>,
  pub answer: String,
  pub level: Level,
}

#[derive(Clone, Debug, Deserialize)]
pub struct VocabularyCfg {
  #[serde(default)] pub id: Option<String>,
  pub glyph: String,
  pub romaji: String,
  pub level: Level,
  pub category: Category,
  #[serde(default)] pub meaning: Option<String>,
}

/// Attempt to load `BankConfig` from BANK_CONFIG_PATH. On any parsing/IO
/// error, returns None and the built-in seeds are used alone.
pub fn load_bank_config_from_env() -> Option<BankConfig> {
  let path = std::env::var("BANK_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<BankConfig>(&s) {
      Ok(cfg) => {
        info!(
          target: "kotoba_backend",
          %path,
          questions = cfg.questions.len(),
          vocabulary = cfg.vocabulary.len(),
          "Loaded bank config (TOML)"
        );
        Some(cfg)
      }
      Err(e) => {
        error!(target: "kotoba_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "kotoba_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_questions_and_vocabulary() {
    let cfg: BankConfig = toml::from_str(
      r#"
      [[questions]]
      id = "school-01"
      prompt = "What does 学校 mean?"
      options = ["school", "study", "teacher"]
      answer = "school"
      level = "N5"

      [[vocabulary]]
      glyph = "学校"
      romaji = "gakkou"
      level = "N5"
      category = "kanji"
      meaning = "school"
      "#,
    )
    .unwrap();

    assert_eq!(cfg.questions.len(), 1);
    assert_eq!(cfg.questions[0].level, Level::N5);
    assert_eq!(cfg.vocabulary.len(), 1);
    assert_eq!(cfg.vocabulary[0].category, Category::Kanji);
    assert!(cfg.vocabulary[0].id.is_none());
  }

  #[test]
  fn empty_document_is_valid() {
    let cfg: BankConfig = toml::from_str("").unwrap();
    assert!(cfg.questions.is_empty());
    assert!(cfg.vocabulary.is_empty());
  }

  #[test]
  fn unknown_level_label_fails() {
    let res = toml::from_str::<BankConfig>(
      r#"
      [[questions]]
      prompt = "p"
      options = ["a"]
      answer = "a"
      level = "N6"
      "#,
    );
    assert!(res.is_err());
  }
}
