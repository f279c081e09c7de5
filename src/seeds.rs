//! Built-in content: the placement-test corpus and the vocabulary tables.
//! These guarantee the app is useful without any external config file.

use crate::domain::{Category, Level, Question, VocabularyItem};

fn q(id: &str, prompt: &str, options: &[&str], answer: &str, level: Level) -> Question {
  Question {
    id: id.into(),
    prompt: prompt.into(),
    options: options.iter().map(|s| s.to_string()).collect(),
    answer: answer.into(),
    level,
  }
}

/// The fixed placement battery, in presentation order (easiest first).
pub fn seed_questions() -> Vec<Question> {
  vec![
    q("pq-01", "Which character reads 'a'?", &["あ", "い", "う", "え"], "あ", Level::N5),
    q("pq-02", "Which character reads 'ki'?", &["か", "き", "く", "け"], "き", Level::N5),
    q("pq-03", "Which katakana reads 'su'?", &["サ", "シ", "ス", "セ"], "ス", Level::N5),
    q("pq-04", "What does 水 mean?", &["fire", "water", "tree", "gold"], "water", Level::N5),
    q(
      "pq-05",
      "Choose the particle: わたし＿がくせいです。",
      &["は", "を", "に", "で"],
      "は",
      Level::N4,
    ),
    q(
      "pq-06",
      "What is the reading of 食べる?",
      &["のべる", "たべる", "しゃべる", "くべる"],
      "たべる",
      Level::N4,
    ),
    q(
      "pq-07",
      "Choose the correct form: きのう えいがを＿。",
      &["みます", "みました", "みる", "みて"],
      "みました",
      Level::N4,
    ),
    q(
      "pq-08",
      "What does 会議 mean?",
      &["meeting", "society", "chance", "machine"],
      "meeting",
      Level::N3,
    ),
    q(
      "pq-09",
      "Choose the particle: 雨＿ふっているのに、でかけた。",
      &["が", "を", "へ", "と"],
      "が",
      Level::N3,
    ),
    q(
      "pq-10",
      "What is the reading of 経験?",
      &["けいけん", "けいかく", "けんけい", "きけん"],
      "けいけん",
      Level::N2,
    ),
    q(
      "pq-11",
      "Which word completes: 彼は約束を＿ことがない。",
      &["やぶった", "やぶる", "やぶって", "やぶれ"],
      "やぶった",
      Level::N2,
    ),
    q(
      "pq-12",
      "What does 曖昧 mean?",
      &["ambiguous", "obvious", "accurate", "awkward"],
      "ambiguous",
      Level::N1,
    ),
  ]
}

fn v(
  id: &str,
  glyph: &str,
  romaji: &str,
  level: Level,
  category: Category,
  meaning: Option<&str>,
) -> VocabularyItem {
  VocabularyItem {
    id: id.into(),
    glyph: glyph.into(),
    romaji: romaji.into(),
    level,
    category,
    meaning: meaning.map(|s| s.to_string()),
  }
}

/// Hand-curated vocabulary tables. Kana carry no meaning field; kanji do.
pub fn seed_vocabulary() -> Vec<VocabularyItem> {
  use Category::*;
  use Level::*;
  vec![
    // Hiragana (gojūon head rows)
    v("hira-a", "あ", "a", N5, Hiragana, None),
    v("hira-i", "い", "i", N5, Hiragana, None),
    v("hira-u", "う", "u", N5, Hiragana, None),
    v("hira-e", "え", "e", N5, Hiragana, None),
    v("hira-o", "お", "o", N5, Hiragana, None),
    v("hira-ka", "か", "ka", N5, Hiragana, None),
    v("hira-ki", "き", "ki", N5, Hiragana, None),
    v("hira-ku", "く", "ku", N5, Hiragana, None),
    v("hira-ke", "け", "ke", N5, Hiragana, None),
    v("hira-ko", "こ", "ko", N5, Hiragana, None),
    v("hira-sa", "さ", "sa", N5, Hiragana, None),
    v("hira-shi", "し", "shi", N5, Hiragana, None),
    v("hira-ta", "た", "ta", N5, Hiragana, None),
    v("hira-na", "な", "na", N5, Hiragana, None),
    v("hira-ha", "は", "ha", N5, Hiragana, None),
    // Katakana
    v("kata-a", "ア", "a", N5, Katakana, None),
    v("kata-i", "イ", "i", N5, Katakana, None),
    v("kata-u", "ウ", "u", N5, Katakana, None),
    v("kata-ka", "カ", "ka", N5, Katakana, None),
    v("kata-sa", "サ", "sa", N5, Katakana, None),
    v("kata-su", "ス", "su", N5, Katakana, None),
    v("kata-ma", "マ", "ma", N5, Katakana, None),
    v("kata-ra", "ラ", "ra", N5, Katakana, None),
    // Kanji, by level
    v("kanji-mizu", "水", "mizu", N5, Kanji, Some("water")),
    v("kanji-hi", "火", "hi", N5, Kanji, Some("fire")),
    v("kanji-ki", "木", "ki", N5, Kanji, Some("tree")),
    v("kanji-hito", "人", "hito", N5, Kanji, Some("person")),
    v("kanji-taberu", "食べる", "taberu", N4, Kanji, Some("to eat")),
    v("kanji-kaisha", "会社", "kaisha", N4, Kanji, Some("company")),
    v("kanji-kaigi", "会議", "kaigi", N3, Kanji, Some("meeting")),
    v("kanji-keiken", "経験", "keiken", N2, Kanji, Some("experience")),
    v("kanji-yakusoku", "約束", "yakusoku", N2, Kanji, Some("promise")),
    v("kanji-aimai", "曖昧", "aimai", N1, Kanji, Some("ambiguous")),
  ]
}
