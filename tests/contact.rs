use axum::http::StatusCode;
use counsel::Envelope;
use serde_json::json;

mod helpers;

fn valid_body() -> serde_json::Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "message": "I need legal advice about my lease.",
        "privacy": true,
    })
}

#[tokio::test]
async fn test_valid_submission_is_accepted() {
    let app = helpers::create_app();

    let (status, body) =
        helpers::send_json(app, helpers::post_contact(valid_body().to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "Message received successfully"})
    );
}

#[tokio::test]
async fn test_valid_submission_with_optional_fields_is_accepted() {
    let app = helpers::create_app();
    let mut input = valid_body();
    input["phone"] = json!("+919876543210");
    input["service"] = json!("family");

    let (status, body) = helpers::send_json(app, helpers::post_contact(input.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn test_invalid_submission_is_rejected_with_field_errors() {
    let app = helpers::create_app();
    let input = json!({
        "name": "J",
        "email": "not-an-email",
        "message": "short",
        "privacy": false,
    });

    let (status, body) = helpers::send_json(app, helpers::post_contact(input.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let envelope: Envelope = serde_json::from_value(body).unwrap();
    assert!(!envelope.success);
    assert_eq!(envelope.message, "Validation error");

    let errors = envelope.errors.expect("errors present").into_inner();
    assert!(errors.len() >= 4);

    let fields = errors
        .iter()
        .filter_map(|issue| issue.field())
        .collect::<Vec<_>>();
    assert_eq!(fields, vec!["name", "email", "message", "privacy"]);
}

#[tokio::test]
async fn test_error_entries_carry_path_and_message() {
    let app = helpers::create_app();
    let mut input = valid_body();
    input["name"] = json!("J");

    let (status, body) = helpers::send_json(app, helpers::post_contact(input.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!([{
            "code": "too_small",
            "path": ["name"],
            "message": "Name must be at least 2 characters",
        }])
    );
}

#[tokio::test]
async fn test_email_without_dotted_domain_is_rejected() {
    for email in ["jane@localhost", "jane..doe@example.com"] {
        let mut input = valid_body();
        input["email"] = json!(email);

        let (status, body) =
            helpers::send_json(helpers::create_app(), helpers::post_contact(input.to_string()))
                .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{email}");
        assert_eq!(body["errors"][0]["path"], json!(["email"]));
        assert_eq!(body["errors"][0]["code"], json!("invalid_string"));
    }
}

#[tokio::test]
async fn test_privacy_false_rejects_otherwise_valid_submission() {
    let app = helpers::create_app();
    let mut input = valid_body();
    input["privacy"] = json!(false);

    let (status, body) = helpers::send_json(app, helpers::post_contact(input.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["path"], json!(["privacy"]));
}

#[tokio::test]
async fn test_malformed_json_is_a_client_error() {
    let app = helpers::create_app();

    let (status, body) = helpers::send_json(app, helpers::post_contact("{\"name\": ")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["errors"][0]["code"], json!("invalid_json"));
    assert_eq!(body["errors"][0]["path"], json!([]));
}

#[tokio::test]
async fn test_empty_body_reports_required_fields() {
    let app = helpers::create_app();

    let (status, body) = helpers::send_json(app, helpers::post_contact("")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 4);
    assert!(errors.iter().all(|e| e["message"] == json!("Required")));
}

#[tokio::test]
async fn test_inbox_failure_returns_generic_error() {
    let app = helpers::create_app_with_inbox(helpers::FailingInbox);

    let (status, body) = helpers::send(app, helpers::post_contact(valid_body().to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.contains("smtp"));
    assert!(!body.contains("10.0.0.7"));

    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        body,
        json!({
            "success": false,
            "message": "An error occurred while processing your request",
        })
    );
}

#[tokio::test]
async fn test_handler_panic_returns_generic_error() {
    let app = helpers::create_app_with_inbox(helpers::PanickingInbox);

    let (status, body) = helpers::send(app, helpers::post_contact(valid_body().to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.contains("corrupted"));

    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        body["message"],
        json!("An error occurred while processing your request")
    );
}

#[tokio::test]
async fn test_inbox_is_not_reached_for_invalid_submissions() {
    let app = helpers::create_app_with_inbox(helpers::FailingInbox);

    let (status, _) = helpers::send(app, helpers::post_contact("{}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_repeated_submission_yields_same_envelope() {
    let first =
        helpers::send_json(helpers::create_app(), helpers::post_contact(valid_body().to_string()))
            .await;
    let second =
        helpers::send_json(helpers::create_app(), helpers::post_contact(valid_body().to_string()))
            .await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unknown_api_route_is_not_found() {
    let app = helpers::create_app();

    let (status, body) = helpers::send_json(app, helpers::get("/api/unknown")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
}
