//! Domain models used by the backend: proficiency levels, vocabulary items,
//! placement questions, and the narrow identity types consumed from the
//! external account gateway.

use serde::{Deserialize, Serialize};

/// JLPT proficiency level, ordered from beginner (N5) to advanced (N1).
///
/// Derive order matters: `Ord` must agree with N5 < N4 < N3 < N2 < N1 so
/// progression logic can compare levels directly.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
  N5,
  N4,
  N3,
  N2,
  N1,
}

impl Level {
  pub fn as_str(&self) -> &'static str {
    match self {
      Level::N5 => "N5",
      Level::N4 => "N4",
      Level::N3 => "N3",
      Level::N2 => "N2",
      Level::N1 => "N1",
    }
  }
}

impl std::fmt::Display for Level {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Script category a vocabulary item belongs to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
  Hiragana,
  Katakana,
  Kanji,
}

/// Static reference entry: one character/word with its transliteration.
/// Defined once at startup, never mutated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VocabularyItem {
  pub id: String,
  pub glyph: String,
  pub romaji: String,
  pub level: Level,
  pub category: Category,
  #[serde(default)] pub meaning: Option<String>,
}

/// One multiple-choice placement question. `answer` must appear exactly once
/// in `options`; the bank validates this at load time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
  pub id: String,
  pub prompt: String,
  pub options: Vec<String>,
  pub answer: String,
  pub level: Level,
}

/// Role reported by the account gateway for an authenticated user.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
  Student,
  Teacher,
  Admin,
}

/// Identity facts obtained from validated session state upstream.
/// This is the only shape role/email data enters the backend in; handlers
/// never poke at untyped session blobs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthContext {
  pub role: Role,
  pub email: String,
}
