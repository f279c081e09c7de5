//! Core behaviors shared by the HTTP handlers: scoring a submission and
//! turning it into a placement level.

use tracing::{info, instrument};

use crate::placement::{starting_level, PlacementError};
use crate::protocol::{PlacementIn, PlacementOut};
use crate::state::AppState;

/// Score a submission (if it carries raw responses) and map the outcome to a
/// starting level.
///
/// For the responses shape, `total` is the size of the corpus that was
/// presented, not the number of responses sent back; an incomplete
/// submission therefore scores against the full test.
#[instrument(level = "info", skip_all)]
pub fn evaluate_placement(
  state: &AppState,
  submission: PlacementIn,
) -> Result<PlacementOut, PlacementError> {
  let (score, total) = match submission {
    PlacementIn::Responses { responses } => {
      let score = state
        .bank
        .score(responses.iter().map(|r| (r.question_id.as_str(), r.answer.as_str())));
      (score, state.bank.len() as u32)
    }
    PlacementIn::Tally { score, total } => (score, total),
  };

  let level = starting_level(score, total)?;
  info!(target: "placement", score, total, %level, "Placement evaluated");
  Ok(PlacementOut { level, score, total })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bank::QuestionBank;
  use crate::catalog::VocabularyCatalog;
  use crate::domain::{Level, Question};
  use crate::protocol::ResponseIn;

  fn test_state() -> AppState {
    let questions = (0..5)
      .map(|i| Question {
        id: format!("q{}", i),
        prompt: format!("prompt {}", i),
        options: vec!["a".into(), "b".into()],
        answer: "a".into(),
        level: Level::N5,
      })
      .collect();
    AppState {
      bank: QuestionBank::new(questions).unwrap(),
      catalog: VocabularyCatalog::new(vec![]).unwrap(),
      gateway: None,
    }
  }

  fn resp(id: &str, answer: &str) -> ResponseIn {
    ResponseIn { question_id: id.into(), answer: answer.into() }
  }

  #[test]
  fn responses_are_scored_against_full_corpus() {
    let state = test_state();
    // 3 of 5 correct = 60% → N2.
    let out = evaluate_placement(
      &state,
      PlacementIn::Responses {
        responses: vec![resp("q0", "a"), resp("q1", "a"), resp("q2", "a"), resp("q3", "b")],
      },
    )
    .unwrap();
    assert_eq!(out.score, 3);
    assert_eq!(out.total, 5);
    assert_eq!(out.level, Level::N2);
  }

  #[test]
  fn unknown_ids_do_not_fail_the_submission() {
    let state = test_state();
    let out = evaluate_placement(
      &state,
      PlacementIn::Responses { responses: vec![resp("ghost", "a"), resp("q0", "a")] },
    )
    .unwrap();
    assert_eq!(out.score, 1);
  }

  #[test]
  fn precomputed_tally_is_used_directly() {
    let state = test_state();
    let out = evaluate_placement(&state, PlacementIn::Tally { score: 90, total: 100 }).unwrap();
    assert_eq!(out.level, Level::N1);
  }

  #[test]
  fn zero_total_tally_is_an_error() {
    let state = test_state();
    let err = evaluate_placement(&state, PlacementIn::Tally { score: 0, total: 0 }).unwrap_err();
    assert_eq!(err, PlacementError::ZeroTotal);
  }
}
