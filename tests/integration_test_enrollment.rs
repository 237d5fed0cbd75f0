mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        panic!("Response body is empty. Status: {}", status);
    }
    match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => panic!("Failed to parse JSON: {:?}. Status: {}. Body: {:?}", e, status, String::from_utf8_lossy(&bytes))
    }
}

/// Creates a fair and a company as admin, returning (fair_id, invite_code, company_id).
async fn setup_fair_and_company(app: &TestApp, admin: &str) -> (String, String, String) {
    let fair = parse_body(app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/fairs")
            .header(header::AUTHORIZATION, format!("Bearer {}", admin))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": "Hiring Fair"}).to_string())).unwrap()
    ).await.unwrap()).await;

    let company = parse_body(app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/companies")
            .header(header::AUTHORIZATION, format!("Bearer {}", admin))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"name": "Acme", "website": "https://acme.test"}).to_string())).unwrap()
    ).await.unwrap()).await;

    (
        fair["id"].as_str().unwrap().to_string(),
        fair["inviteCode"].as_str().unwrap().to_string(),
        company["id"].as_str().unwrap().to_string(),
    )
}

async fn enroll(app: &TestApp, token: &str, fair_id: &str, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/fairs/{}/enroll", fair_id))
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_admin_enrollment_creates_booth_and_lists() {
    let app = TestApp::new().await;
    let admin = app.admin_token();
    let (fair_id, _code, company_id) = setup_fair_and_company(&app, &admin).await;

    let res = enroll(&app, &admin, &fair_id, json!({"companyId": company_id})).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = parse_body(res).await;
    assert_eq!(created["fairId"], fair_id.as_str());
    assert_eq!(created["companyId"], company_id.as_str());
    assert!(created["boothId"].as_str().is_some());

    let list_res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/fairs/{}/enrollments", fair_id))
            .header(header::AUTHORIZATION, format!("Bearer {}", admin))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(list_res.status(), StatusCode::OK);
    let listing = parse_body(list_res).await;
    let enrollments = listing["enrollments"].as_array().unwrap();
    assert_eq!(enrollments.len(), 1);
    assert_eq!(enrollments[0]["method"], "ADMIN");
    assert_eq!(enrollments[0]["companyId"], company_id.as_str());

    // The enrollment roster is an administrator view
    let owner_list = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/fairs/{}/enrollments", fair_id))
            .header(header::AUTHORIZATION, format!("Bearer {}", app.owner_token(&company_id)))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(owner_list.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_enroll_requires_exactly_one_entry_path() {
    let app = TestApp::new().await;
    let admin = app.admin_token();
    let (fair_id, code, company_id) = setup_fair_and_company(&app, &admin).await;

    let neither = enroll(&app, &admin, &fair_id, json!({})).await;
    assert_eq!(neither.status(), StatusCode::BAD_REQUEST);

    let both = enroll(&app, &admin, &fair_id, json!({
        "companyId": company_id,
        "inviteCode": code
    })).await;
    assert_eq!(both.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_enrollment_unknown_targets() {
    let app = TestApp::new().await;
    let admin = app.admin_token();
    let (fair_id, _code, company_id) = setup_fair_and_company(&app, &admin).await;

    let bad_company = enroll(&app, &admin, &fair_id, json!({"companyId": "no-such-company"})).await;
    assert_eq!(bad_company.status(), StatusCode::NOT_FOUND);

    let bad_fair = enroll(&app, &admin, "no-such-fair", json!({"companyId": company_id})).await;
    assert_eq!(bad_fair.status(), StatusCode::NOT_FOUND);

    let not_admin = enroll(&app, &app.owner_token(&company_id), &fair_id, json!({"companyId": company_id})).await;
    assert_eq!(not_admin.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invite_enrollment_validates_code() {
    let app = TestApp::new().await;
    let admin = app.admin_token();
    let (fair_id, code, company_id) = setup_fair_and_company(&app, &admin).await;
    let owner = app.owner_token(&company_id);

    let wrong = enroll(&app, &owner, &fair_id, json!({"inviteCode": "BADCODE1"})).await;
    assert_eq!(wrong.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(wrong).await["error"], "Invalid invite code");

    // Unknown fair answers exactly like a wrong code
    let ghost = enroll(&app, &owner, "no-such-fair", json!({"inviteCode": code})).await;
    assert_eq!(ghost.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(ghost).await["error"], "Invalid invite code");

    // Codes are case-insensitive on input
    let joined = enroll(&app, &owner, &fair_id, json!({"inviteCode": code.to_lowercase()})).await;
    assert_eq!(joined.status(), StatusCode::CREATED);
    let created = parse_body(joined).await;
    assert!(created["boothId"].as_str().is_some());

    let listing = parse_body(app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/fairs/{}/enrollments", fair_id))
            .header(header::AUTHORIZATION, format!("Bearer {}", admin))
            .body(Body::empty()).unwrap()
    ).await.unwrap()).await;
    assert_eq!(listing["enrollments"][0]["method"], "INVITE");
}

#[tokio::test]
async fn test_invite_enrollment_requires_company_link() {
    let app = TestApp::new().await;
    let admin = app.admin_token();
    let (fair_id, code, _company_id) = setup_fair_and_company(&app, &admin).await;

    let student = enroll(&app, &app.student_token(), &fair_id, json!({"inviteCode": code})).await;
    assert_eq!(student.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_duplicate_enrollment_conflicts() {
    let app = TestApp::new().await;
    let admin = app.admin_token();
    let (fair_id, code, company_id) = setup_fair_and_company(&app, &admin).await;

    let first = enroll(&app, &admin, &fair_id, json!({"companyId": company_id})).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let again = enroll(&app, &admin, &fair_id, json!({"companyId": company_id})).await;
    assert_eq!(again.status(), StatusCode::CONFLICT);

    // The invite path shares the same uniqueness check
    let via_code = enroll(&app, &app.owner_token(&company_id), &fair_id, json!({"inviteCode": code})).await;
    assert_eq!(via_code.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_concurrent_enrollment_has_single_winner() {
    let app = TestApp::new().await;
    let admin = app.admin_token();
    let (fair_id, _code, company_id) = setup_fair_and_company(&app, &admin).await;

    let payload = json!({"companyId": company_id});
    let (res_a, res_b) = tokio::join!(
        enroll(&app, &admin, &fair_id, payload.clone()),
        enroll(&app, &admin, &fair_id, payload.clone()),
    );

    let mut statuses = [res_a.status(), res_b.status()];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::CONFLICT]);

    let listing = parse_body(app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/fairs/{}/enrollments", fair_id))
            .header(header::AUTHORIZATION, format!("Bearer {}", admin))
            .body(Body::empty()).unwrap()
    ).await.unwrap()).await;
    assert_eq!(listing["enrollments"].as_array().unwrap().len(), 1);
}
