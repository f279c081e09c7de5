//! Router-level tests: drive the axum app with `tower::ServiceExt::oneshot`
//! and assert on status codes and JSON bodies. No network, no gateway.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{header::CONTENT_TYPE, Request, StatusCode},
  Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use kotoba_backend::routes::build_router;
use kotoba_backend::state::AppState;

fn app() -> Router {
  // No env configured in tests: seeds only, gateway disabled.
  let state = Arc::new(AppState::new().expect("seed corpus must validate"));
  build_router(state)
}

async fn body_json(res: axum::response::Response) -> Value {
  let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
  Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri(uri)
    .header(CONTENT_TYPE, "application/json")
    .body(Body::from(body.to_string()))
    .unwrap()
}

#[tokio::test]
async fn health_is_ok() {
  let res = app().oneshot(get("/api/v1/health")).await.unwrap();
  assert_eq!(res.status(), StatusCode::OK);
  assert_eq!(body_json(res).await, json!({ "ok": true }));
}

#[tokio::test]
async fn questions_are_served_in_order_without_answers() {
  let res = app().oneshot(get("/api/v1/questions")).await.unwrap();
  assert_eq!(res.status(), StatusCode::OK);

  let body = body_json(res).await;
  let questions = body.as_array().unwrap();
  assert!(!questions.is_empty());
  assert_eq!(questions[0]["id"], "pq-01");
  for q in questions {
    assert!(q.get("answer").is_none(), "answer leaked for {}", q["id"]);
    assert!(!q["options"].as_array().unwrap().is_empty());
  }
}

#[tokio::test]
async fn placement_accepts_precomputed_tally() {
  let res = app()
    .oneshot(post_json("/api/v1/placement", json!({ "score": 85, "total": 100 })))
    .await
    .unwrap();
  assert_eq!(res.status(), StatusCode::OK);

  let body = body_json(res).await;
  assert_eq!(body["level"], "N1");
  assert_eq!(body["score"], 85);
  assert_eq!(body["total"], 100);
}

#[tokio::test]
async fn placement_scores_raw_responses() {
  // One correct answer (pq-01 → あ) plus one wrong and one unknown id.
  let res = app()
    .oneshot(post_json(
      "/api/v1/placement",
      json!({
        "responses": [
          { "questionId": "pq-01", "answer": "あ" },
          { "questionId": "pq-02", "answer": "か" },
          { "questionId": "no-such-question", "answer": "x" }
        ]
      }),
    ))
    .await
    .unwrap();
  assert_eq!(res.status(), StatusCode::OK);

  let body = body_json(res).await;
  assert_eq!(body["score"], 1);
  // Total is the corpus size, not the number of responses.
  assert_eq!(body["total"], 12);
  assert_eq!(body["level"], "N5");
}

#[tokio::test]
async fn placement_rejects_zero_total() {
  let res = app()
    .oneshot(post_json("/api/v1/placement", json!({ "score": 0, "total": 0 })))
    .await
    .unwrap();
  assert_eq!(res.status(), StatusCode::BAD_REQUEST);
  let body = body_json(res).await;
  assert!(body["message"].as_str().unwrap().contains("total"));
}

#[tokio::test]
async fn vocabulary_filters_by_category_and_level() {
  let res = app()
    .oneshot(get("/api/v1/vocabulary?category=kanji&level=N5"))
    .await
    .unwrap();
  assert_eq!(res.status(), StatusCode::OK);

  let body = body_json(res).await;
  let items = body.as_array().unwrap();
  assert!(!items.is_empty());
  for item in items {
    assert_eq!(item["category"], "kanji");
    assert_eq!(item["level"], "N5");
  }
}

#[tokio::test]
async fn romaji_converts_kana() {
  let res = app()
    .oneshot(post_json("/api/v1/romaji", json!({ "text": "ひらがな" })))
    .await
    .unwrap();
  assert_eq!(res.status(), StatusCode::OK);
  assert_eq!(body_json(res).await["romaji"], "hiragana");
}

#[tokio::test]
async fn account_endpoints_unavailable_without_gateway() {
  let res = app().oneshot(get("/api/v1/account/role?userId=u-1")).await.unwrap();
  assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

  let res = app()
    .oneshot(post_json("/api/v1/billing/portal", json!({ "customerId": "cus_123" })))
    .await
    .unwrap();
  assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
}
