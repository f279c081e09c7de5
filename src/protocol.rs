//! Public request/response DTOs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{Category, Level, Question, Role};

/// DTO for question delivery. Deliberately omits the correct answer so the
/// wire format never leaks it to test takers.
#[derive(Debug, Serialize)]
pub struct QuestionOut {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub level: Level,
}

/// Convert full `Question` (internal) to the public DTO.
pub fn to_out(q: &Question) -> QuestionOut {
    QuestionOut {
        id: q.id.clone(),
        prompt: q.prompt.clone(),
        options: q.options.clone(),
        level: q.level,
    }
}

//
// Placement submission
//

#[derive(Debug, Deserialize)]
pub struct ResponseIn {
    #[serde(rename = "questionId")]
    pub question_id: String,
    pub answer: String,
}

/// A submission is either the raw per-question responses, or a precomputed
/// (score, total) tally from a client that scored locally.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PlacementIn {
    Responses { responses: Vec<ResponseIn> },
    Tally { score: u32, total: u32 },
}

#[derive(Debug, Serialize)]
pub struct PlacementOut {
    pub level: Level,
    pub score: u32,
    pub total: u32,
}

//
// Vocabulary
//

#[derive(Debug, Deserialize)]
pub struct VocabularyQuery {
    pub category: Option<Category>,
    pub level: Option<Level>,
}

//
// Romaji helper
//

#[derive(Deserialize)]
pub struct RomajiIn {
    pub text: String,
}
#[derive(Serialize)]
pub struct RomajiOut {
    pub romaji: String,
}

//
// Account / billing passthrough
//

#[derive(Debug, Deserialize)]
pub struct RoleQuery {
    #[serde(rename = "userId")]
    pub user_id: String,
}
#[derive(Serialize)]
pub struct RoleOut {
    pub role: Role,
    pub email: String,
}

#[derive(Deserialize)]
pub struct PortalIn {
    #[serde(rename = "customerId")]
    pub customer_id: String,
}
#[derive(Serialize)]
pub struct PortalOut {
    pub url: String,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
