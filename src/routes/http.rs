//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs parameters and basic result info.

use std::sync::Arc;

use axum::{
  extract::{Query, State},
  http::StatusCode,
  response::IntoResponse,
  Json,
};
use tracing::{error, info, instrument};

use crate::logic::evaluate_placement;
use crate::protocol::*;
use crate::romaji::to_romaji;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
  Json(HealthOut { ok: true })
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_questions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let out: Vec<QuestionOut> = state.bank.all().iter().map(to_out).collect();
  info!(target: "placement", count = out.len(), "HTTP questions served");
  Json(out)
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_placement(
  State(state): State<Arc<AppState>>,
  Json(body): Json<PlacementIn>,
) -> impl IntoResponse {
  match evaluate_placement(&state, body) {
    Ok(out) => Json(out).into_response(),
    Err(e) => {
      error!(target: "placement", error = %e, "Rejected placement submission");
      (StatusCode::BAD_REQUEST, Json(ErrorOut { message: e.to_string() })).into_response()
    }
  }
}

#[instrument(level = "info", skip(state), fields(category = ?q.category, level = ?q.level))]
pub async fn http_get_vocabulary(
  State(state): State<Arc<AppState>>,
  Query(q): Query<VocabularyQuery>,
) -> impl IntoResponse {
  let items: Vec<_> = state.catalog.filter(q.category, q.level).cloned().collect();
  info!(target: "kotoba_backend", count = items.len(), "HTTP vocabulary served");
  Json(items)
}

#[instrument(level = "info", skip(body), fields(text_len = body.text.len()))]
pub async fn http_post_romaji(Json(body): Json<RomajiIn>) -> impl IntoResponse {
  Json(RomajiOut { romaji: to_romaji(&body.text) })
}

#[instrument(level = "info", skip(state), fields(%q.user_id))]
pub async fn http_get_role(
  State(state): State<Arc<AppState>>,
  Query(q): Query<RoleQuery>,
) -> impl IntoResponse {
  let Some(gw) = &state.gateway else {
    return gateway_unavailable();
  };
  match gw.auth_context(&q.user_id).await {
    Ok(ctx) => Json(RoleOut { role: ctx.role, email: ctx.email }).into_response(),
    Err(e) => {
      error!(target: "gateway", user_id = %q.user_id, error = %e, "Role lookup failed");
      (StatusCode::BAD_GATEWAY, Json(ErrorOut { message: e })).into_response()
    }
  }
}

#[instrument(level = "info", skip(state, body), fields(%body.customer_id))]
pub async fn http_post_billing_portal(
  State(state): State<Arc<AppState>>,
  Json(body): Json<PortalIn>,
) -> impl IntoResponse {
  let Some(gw) = &state.gateway else {
    return gateway_unavailable();
  };
  match gw.create_billing_portal_session(&body.customer_id).await {
    Ok(url) => Json(PortalOut { url }).into_response(),
    Err(e) => {
      error!(target: "gateway", customer_id = %body.customer_id, error = %e, "Portal session failed");
      (StatusCode::BAD_GATEWAY, Json(ErrorOut { message: e })).into_response()
    }
  }
}

fn gateway_unavailable() -> axum::response::Response {
  (
    StatusCode::SERVICE_UNAVAILABLE,
    Json(ErrorOut { message: "Account gateway not configured (ACCOUNT_API_KEY unset).".into() }),
  )
    .into_response()
}
