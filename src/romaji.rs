//! Kana → romaji (Hepburn-style), copy everything else as-is.
//!
//! Example:
//!   input:  "きょう は いい てんき 2025！"
//!   output: "kyou wa ii tenki 2025！"

use wana_kana::ConvertJapanese;

/// Convert kana text into romaji. Kanji and other non-kana characters are
/// copied through unchanged, so mixed text degrades gracefully rather than
/// erroring.
///
/// This is intentionally simple: no dictionary lookup, so kanji readings are
/// not resolved here (the vocabulary catalog carries curated romaji for
/// those).
pub fn to_romaji(text: &str) -> String {
  text.to_romaji()
}
