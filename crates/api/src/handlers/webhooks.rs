//! Identity-provider webhook receiver.
//!
//! Deliveries are JSON events `{ "type": ..., "data": ... }`. Only
//! `user.created` provisions anything; every other type is acknowledged and
//! ignored. When a webhook secret is configured, the raw body must carry a
//! matching HMAC-SHA256 signature.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::service;
use catalog_core::types::DbId;
use catalog_core::validation::{IdentityEvent, IdentityUser, USER_CREATED_EVENT};
use catalog_core::webhook::{verify_signature, SIGNATURE_HEADER};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProvisionedAccount {
    pub account_id: DbId,
}

/// Acknowledgement body. `data` is present only when an account was provisioned.
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ProvisionedAccount>,
}

/// POST /api/v1/webhooks/identity
pub async fn identity_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    if let Some(secret) = &state.config.webhook_secret {
        let signature = headers
            .get(SIGNATURE_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthenticated(
                    "Missing webhook signature".into(),
                ))
            })?;
        if !verify_signature(secret, &body, signature) {
            tracing::warn!("Rejected identity webhook with bad signature");
            return Err(AppError::Core(CoreError::Unauthenticated(
                "Invalid webhook signature".into(),
            )));
        }
    }

    let event: IdentityEvent = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Malformed webhook payload: {e}")))?;

    if event.event_type != USER_CREATED_EVENT {
        tracing::debug!(event_type = %event.event_type, "Ignoring identity event");
        return Ok(Json(WebhookAck {
            message: "OK",
            data: None,
        }));
    }

    let user: IdentityUser = serde_json::from_value(event.data)
        .map_err(|e| AppError::Core(CoreError::Validation(format!("data: {e}"))))?;
    let account = user.into_new_account()?;
    let account_id = service::provision_account(state.store.as_ref(), &account).await?;

    Ok(Json(WebhookAck {
        message: "OK",
        data: Some(ProvisionedAccount { account_id }),
    }))
}
