//! Question bank: the fixed placement-test corpus and its scoring rules.
//!
//! The corpus is validated once at construction and immutable afterwards.
//! Scoring is tolerant by policy: a response naming an unknown question id is
//! skipped (neither correct nor an error). That keeps old clients working
//! when the corpus changes between deploys.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::domain::{Level, Question};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
  #[error("duplicate question id '{0}'")]
  DuplicateId(String),
  #[error("question '{0}' has no options")]
  EmptyOptions(String),
  #[error("question '{0}': answer '{1}' is not among its options")]
  AnswerNotInOptions(String, String),
}

/// Immutable, validated placement-test corpus. Declaration order is the
/// presentation order; nothing here shuffles or filters.
#[derive(Debug)]
pub struct QuestionBank {
  questions: Vec<Question>,
  index: HashMap<String, usize>,
}

impl QuestionBank {
  /// Validate and index the corpus. Fails fast on the first malformed entry
  /// so a bad deploy dies at startup rather than mis-scoring users.
  #[instrument(level = "info", skip_all, fields(count = questions.len()))]
  pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
    let mut index = HashMap::with_capacity(questions.len());
    for (i, q) in questions.iter().enumerate() {
      if q.options.is_empty() {
        return Err(BankError::EmptyOptions(q.id.clone()));
      }
      if !q.options.iter().any(|o| o == &q.answer) {
        return Err(BankError::AnswerNotInOptions(q.id.clone(), q.answer.clone()));
      }
      if index.insert(q.id.clone(), i).is_some() {
        return Err(BankError::DuplicateId(q.id.clone()));
      }
    }

    // Inventory summary by level, same shape as the startup logs elsewhere.
    let mut count_by_level: HashMap<Level, usize> = HashMap::new();
    for q in &questions {
      *count_by_level.entry(q.level).or_default() += 1;
    }
    for (level, n) in count_by_level {
      info!(target: "placement", %level, count = n, "Startup question inventory");
    }

    Ok(Self { questions, index })
  }

  /// Full corpus in stable declaration order.
  pub fn all(&self) -> &[Question] {
    &self.questions
  }

  pub fn len(&self) -> usize {
    self.questions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.questions.is_empty()
  }

  pub fn get(&self, id: &str) -> Option<&Question> {
    self.index.get(id).map(|&i| &self.questions[i])
  }

  /// Count correct answers in a submission. Exact string equality against
  /// the question's answer; unknown question ids are skipped silently.
  #[instrument(level = "debug", skip_all)]
  pub fn score<'a>(&self, responses: impl IntoIterator<Item = (&'a str, &'a str)>) -> u32 {
    let mut correct = 0u32;
    for (question_id, chosen) in responses {
      match self.get(question_id) {
        Some(q) if q.answer == chosen => correct += 1,
        Some(_) => {}
        None => {
          warn!(target: "placement", %question_id, "Skipping response for unknown question id");
        }
      }
    }
    correct
  }
}
