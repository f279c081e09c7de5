//! Minimal client for the hosted account/billing service.
//!
//! Identity, roles, subscriptions, and payment customers live entirely in
//! the external service; this backend only reads narrow facts (role, email)
//! and asks for billing-portal URLs. Calls are instrumented and log ids and
//! latencies, never credentials.
//!
//! NOTE: We never log the API key.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::domain::{AuthContext, Role};

#[derive(Clone)]
pub struct AccountGateway {
  pub client: reqwest::Client,
  pub api_key: String,
  pub base_url: String,
}

#[derive(Deserialize)]
struct UserOut {
  role: Role,
  email: String,
}

#[derive(Serialize)]
struct PortalSessionReq<'a> {
  customer_id: &'a str,
}

#[derive(Deserialize)]
struct PortalSessionOut {
  url: String,
}

#[derive(Deserialize)]
struct GatewayErrorBody {
  message: Option<String>,
}

impl AccountGateway {
  /// Construct the client if we find ACCOUNT_API_KEY; otherwise return None.
  pub fn from_env() -> Option<Self> {
    let api_key = std::env::var("ACCOUNT_API_KEY").ok()?;
    let base_url =
      std::env::var("ACCOUNT_BASE_URL").unwrap_or_else(|_| "http://localhost:54321".into());

    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(10))
      .build()
      .ok()?;

    Some(Self { client, api_key, base_url })
  }

  /// Fetch the narrow identity facts for a user: role + email.
  #[instrument(level = "info", skip(self), fields(%user_id))]
  pub async fn auth_context(&self, user_id: &str) -> Result<AuthContext, String> {
    let url = format!("{}/v1/users/{}", self.base_url, user_id);
    let res = self
      .client
      .get(&url)
      .header(USER_AGENT, "kotoba-backend/0.1")
      .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
      .send()
      .await
      .map_err(|e| e.to_string())?;

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      let msg = extract_gateway_error(&body).unwrap_or(body);
      return Err(format!("Account service HTTP {}: {}", status, msg));
    }

    let user: UserOut = res.json().await.map_err(|e| e.to_string())?;
    info!(target: "gateway", %user_id, role = ?user.role, "Resolved auth context");
    Ok(AuthContext { role: user.role, email: user.email })
  }

  #[instrument(level = "info", skip(self), fields(%user_id))]
  pub async fn get_user_role(&self, user_id: &str) -> Result<Role, String> {
    self.auth_context(user_id).await.map(|ctx| ctx.role)
  }

  /// Create a billing-portal session for a payment customer and return its
  /// URL. The session object itself stays opaque to us.
  #[instrument(level = "info", skip(self), fields(%customer_id))]
  pub async fn create_billing_portal_session(&self, customer_id: &str) -> Result<String, String> {
    let url = format!("{}/v1/billing/portal_sessions", self.base_url);
    let res = self
      .client
      .post(&url)
      .header(USER_AGENT, "kotoba-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
      .json(&PortalSessionReq { customer_id })
      .send()
      .await
      .map_err(|e| e.to_string())?;

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      let msg = extract_gateway_error(&body).unwrap_or(body);
      return Err(format!("Billing service HTTP {}: {}", status, msg));
    }

    let session: PortalSessionOut = res.json().await.map_err(|e| e.to_string())?;
    info!(target: "gateway", %customer_id, "Billing portal session created");
    Ok(session.url)
  }
}

/// Pull a human-readable message out of a gateway error body, if present.
fn extract_gateway_error(body: &str) -> Option<String> {
  serde_json::from_str::<GatewayErrorBody>(body).ok().and_then(|b| b.message)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn extracts_error_message() {
    assert_eq!(
      extract_gateway_error(r#"{"message":"no such user"}"#),
      Some("no such user".into())
    );
    assert_eq!(extract_gateway_error("not json"), None);
    assert_eq!(extract_gateway_error(r#"{"code":42}"#), None);
  }
}
