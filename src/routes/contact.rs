use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use counsel_contact::ContactSubmission;
use counsel_shared::{Issue, IssueCode, Issues};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::routes::AppState;

pub const ACCEPTED_MESSAGE: &str = "Message received successfully";
pub const REJECTED_MESSAGE: &str = "Validation error";
pub const FAILED_MESSAGE: &str = "An error occurred while processing your request";

/// Result envelope returned by `POST /api/contact`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Issues>,
}

impl Envelope {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: ACCEPTED_MESSAGE.to_owned(),
            errors: None,
        }
    }

    pub fn rejected(issues: Issues) -> Self {
        Self {
            success: false,
            message: REJECTED_MESSAGE.to_owned(),
            errors: Some(issues),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: FAILED_MESSAGE.to_owned(),
            errors: None,
        }
    }
}

#[derive(Debug)]
pub struct ContactApiError(counsel_shared::Error);

impl From<counsel_shared::Error> for ContactApiError {
    fn from(e: counsel_shared::Error) -> Self {
        ContactApiError(e)
    }
}

impl From<Issues> for ContactApiError {
    fn from(e: Issues) -> Self {
        ContactApiError(e.into())
    }
}

impl From<anyhow::Error> for ContactApiError {
    fn from(e: anyhow::Error) -> Self {
        ContactApiError(e.into())
    }
}

impl IntoResponse for ContactApiError {
    fn into_response(self) -> Response {
        match self.0 {
            counsel_shared::Error::Validate(issues) => {
                (StatusCode::BAD_REQUEST, Json(Envelope::rejected(issues))).into_response()
            }
            counsel_shared::Error::Unknown(e) => {
                tracing::error!("Contact submission failed: {e:?}");

                (StatusCode::INTERNAL_SERVER_ERROR, Json(Envelope::failed())).into_response()
            }
        }
    }
}

/// POST /api/contact
///
/// # Returns
/// - 200 OK: submission accepted
/// - 400 Bad Request: body is not JSON or fails the contact schema
/// - 500 Internal Server Error: the inbox failed
#[tracing::instrument(skip_all)]
pub async fn action(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<Envelope>, ContactApiError> {
    let input = read_body(&body)?;

    let submission = ContactSubmission::parse(&input).inspect_err(|issues| {
        tracing::warn!(errors = %issues, "Contact form validation failed");
    })?;

    app_state.inbox.deliver(&submission).await?;

    Ok(Json(Envelope::accepted()))
}

fn read_body(body: &[u8]) -> Result<Value, Issues> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Contact body is not JSON: {e}");

        Issues::from_iter([Issue::root(IssueCode::InvalidJson, "Invalid JSON body")])
    })
}
