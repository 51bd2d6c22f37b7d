//! Jobs domain integration tests
//!
//! The in-memory suites run everywhere; the PostgreSQL suite at the bottom
//! is `#[ignore]`d and needs `TEST_DATABASE_URL`.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::{application_fixture, JobsTestApp};

/// Helper: build an authenticated request
fn authed_request(method: Method, uri: &str, jwt: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", jwt));

    match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Helper: build an unauthenticated request
fn unauthed_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Helper: parse response body as JSON Value
async fn parse_body(response: axum::http::Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Helper: send a request and return status plus parsed body
async fn send(app: &JobsTestApp, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.test_router().oneshot(req).await.unwrap();
    let status = resp.status();
    let parsed = parse_body(resp).await;
    (status, parsed)
}

/// A complete, valid posting for `company_id`
fn valid_posting(company_id: Uuid) -> Value {
    json!({
        "title": "Backend Engineer",
        "description": "Build and run the payments platform",
        "requirements": "Rust, PostgreSQL, Kubernetes",
        "salary": "85000",
        "location": "Berlin",
        "jobType": "Full-time",
        "experience": "2-4",
        "position": "2",
        "companyId": company_id.to_string()
    })
}

/// Helper: post a job and return status plus parsed body
async fn post_job(app: &JobsTestApp, jwt: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        authed_request(Method::POST, "/api/v1/job/post", jwt, Some(body)),
    )
    .await
}

/// Helper: post a valid job with the given title and description
async fn post_titled(
    app: &JobsTestApp,
    jwt: &str,
    company_id: Uuid,
    title: &str,
    description: &str,
) -> Value {
    let mut body = valid_posting(company_id);
    body["title"] = json!(title);
    body["description"] = json!(description);
    let (status, parsed) = post_job(app, jwt, body).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {parsed}");
    parsed["job"].clone()
}

fn titles(body: &Value) -> Vec<String> {
    body["jobs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["title"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Authentication
// ============================================================================
mod test_authentication {
    use super::*;

    #[tokio::test]
    async fn test_every_job_route_requires_a_session() {
        let app = JobsTestApp::new();
        let company = app.create_company(Uuid::new_v4());

        let requests = vec![
            unauthed_request(
                Method::POST,
                "/api/v1/job/post",
                Some(valid_posting(company.id)),
            ),
            unauthed_request(Method::GET, "/api/v1/job/get", None),
            unauthed_request(
                Method::GET,
                &format!("/api/v1/job/get/{}", Uuid::new_v4()),
                None,
            ),
            unauthed_request(Method::GET, "/api/v1/job/getadminjobs", None),
        ];

        for req in requests {
            let uri = req.uri().to_string();
            let (status, body) = send(&app, req).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
            assert_eq!(body["success"], false);
            assert_eq!(body["message"], "User not authenticated");
        }

        assert!(app.store.stored_jobs().is_empty());
    }

    #[tokio::test]
    async fn test_token_signed_with_another_secret_is_rejected() {
        let app = JobsTestApp::new();
        let jwt = crate::common::create_test_jwt(Uuid::new_v4(), "some-other-secret").unwrap();

        let (status, body) = send(
            &app,
            authed_request(Method::GET, "/api/v1/job/get", &jwt, None),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_session_cookie_is_accepted() {
        let app = JobsTestApp::new();
        let (_, jwt) = app.create_user();

        let req = Request::builder()
            .method(Method::GET)
            .uri("/api/v1/job/get")
            .header("cookie", format!("token={}", jwt))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }
}

// ============================================================================
// Job creation
// ============================================================================
mod test_job_creation {
    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_create_job_returns_201_with_normalized_fields() {
        let app = JobsTestApp::new();
        let (user_id, jwt) = app.create_user();
        let company = app.create_company(user_id);

        let (status, body) = post_job(&app, &jwt, valid_posting(company.id)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "New job created successfully.");

        let job = &body["job"];
        assert!(Uuid::parse_str(job["_id"].as_str().unwrap()).is_ok());
        assert_eq!(job["title"], "Backend Engineer");
        assert_eq!(
            job["requirements"],
            json!(["Rust", "PostgreSQL", "Kubernetes"])
        );
        assert_eq!(job["salary"].as_f64(), Some(85000.0));
        assert_eq!(job["jobType"], "Full-time");
        assert_eq!(job["experienceLevel"], "2-4");
        assert_eq!(job["position"], 2);
        assert_eq!(job["company"], company.id.to_string());
        assert_eq!(job["created_by"], user_id.to_string());
        assert_eq!(job["applications"], json!([]));

        let stored = app.store.stored_jobs();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].created_by, user_id);
    }

    #[tokio::test]
    async fn test_numeric_fields_may_be_sent_as_numbers() {
        let app = JobsTestApp::new();
        let (user_id, jwt) = app.create_user();
        let company = app.create_company(user_id);

        let mut body = valid_posting(company.id);
        body["salary"] = json!(50000);
        body["position"] = json!(3);
        body["experience"] = json!(1);

        let (status, parsed) = post_job(&app, &jwt, body).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(parsed["job"]["salary"].as_f64(), Some(50000.0));
        assert_eq!(parsed["job"]["position"], 3);
        assert_eq!(parsed["job"]["experienceLevel"], "1");
    }

    #[tokio::test]
    async fn test_each_missing_field_is_rejected() {
        let app = JobsTestApp::new();
        let (user_id, jwt) = app.create_user();
        let company = app.create_company(user_id);

        for field in [
            "title",
            "description",
            "requirements",
            "salary",
            "location",
            "jobType",
            "experience",
            "position",
            "companyId",
        ] {
            let mut body = valid_posting(company.id);
            body.as_object_mut().unwrap().remove(field);

            let (status, parsed) = post_job(&app, &jwt, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field}");
            assert_eq!(parsed["message"], "Something is missing.", "missing {field}");
            assert_eq!(parsed["success"], false);
        }

        assert!(app.store.stored_jobs().is_empty());
    }

    #[tokio::test]
    async fn test_blank_and_null_fields_count_as_missing() {
        let app = JobsTestApp::new();
        let (user_id, jwt) = app.create_user();
        let company = app.create_company(user_id);

        let mut blank = valid_posting(company.id);
        blank["title"] = json!("   ");
        let (status, body) = post_job(&app, &jwt, blank).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Something is missing.");

        let mut null = valid_posting(company.id);
        null["location"] = Value::Null;
        let (status, body) = post_job(&app, &jwt, null).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Something is missing.");

        for (field, falsy) in [
            ("salary", json!(0)),
            ("position", json!(0)),
            ("title", json!(false)),
        ] {
            let mut body = valid_posting(company.id);
            body[field] = falsy;
            let (status, parsed) = post_job(&app, &jwt, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{field}");
            assert_eq!(parsed["message"], "Something is missing.", "{field}");
        }

        let mut only_commas = valid_posting(company.id);
        only_commas["requirements"] = json!(" , ,");
        let (status, body) = post_job(&app, &jwt, only_commas).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Something is missing.");

        assert!(app.store.stored_jobs().is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_salary_is_rejected() {
        let app = JobsTestApp::new();
        let (user_id, jwt) = app.create_user();
        let company = app.create_company(user_id);

        let mut body = valid_posting(company.id);
        body["salary"] = json!("abc");

        let (status, parsed) = post_job(&app, &jwt, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(parsed["message"], "Invalid salary value.");
        assert!(app.store.stored_jobs().is_empty());
    }

    #[tokio::test]
    async fn test_experience_format() {
        let app = JobsTestApp::new();
        let (user_id, jwt) = app.create_user();
        let company = app.create_company(user_id);

        for accepted in ["0", "0-1", "2-4", "10"] {
            let mut body = valid_posting(company.id);
            body["experience"] = json!(accepted);
            let (status, parsed) = post_job(&app, &jwt, body).await;
            assert_eq!(status, StatusCode::CREATED, "experience {accepted}");
            assert_eq!(parsed["job"]["experienceLevel"], accepted);
        }

        for rejected in ["2 years", "2-", "-3", "1-2-3", "senior"] {
            let mut body = valid_posting(company.id);
            body["experience"] = json!(rejected);
            let (status, parsed) = post_job(&app, &jwt, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "experience {rejected}");
            assert_eq!(
                parsed["message"],
                "Invalid experience format. Use formats like '0-1', '2-4', etc."
            );
        }

        assert_eq!(app.store.stored_jobs().len(), 4);
    }

    #[tokio::test]
    async fn test_salary_checked_before_experience() {
        let app = JobsTestApp::new();
        let (user_id, jwt) = app.create_user();
        let company = app.create_company(user_id);

        let mut body = valid_posting(company.id);
        body["salary"] = json!("lots");
        body["experience"] = json!("senior");

        let (_, parsed) = post_job(&app, &jwt, body).await;
        assert_eq!(parsed["message"], "Invalid salary value.");
    }

    #[tokio::test]
    async fn test_invalid_position_and_company_id_are_rejected() {
        let app = JobsTestApp::new();
        let (user_id, jwt) = app.create_user();
        let company = app.create_company(user_id);

        let mut body = valid_posting(company.id);
        body["position"] = json!("many");
        let (status, parsed) = post_job(&app, &jwt, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(parsed["message"], "Invalid position value.");

        let mut body = valid_posting(company.id);
        body["companyId"] = json!("not-a-uuid");
        let (status, parsed) = post_job(&app, &jwt, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(parsed["message"], "Invalid company id.");

        assert!(app.store.stored_jobs().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_company_is_rejected() {
        let app = JobsTestApp::new();
        let (_, jwt) = app.create_user();

        let (status, parsed) = post_job(&app, &jwt, valid_posting(Uuid::new_v4())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(parsed["message"], "Company not found.");
        assert!(app.store.stored_jobs().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let app = JobsTestApp::new();
        let (_, jwt) = app.create_user();

        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/job/post")
            .header("authorization", format!("Bearer {}", jwt))
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, parsed) = send(&app, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(parsed["success"], false);
    }

    #[tokio::test]
    async fn test_store_failure_returns_500_with_error_detail() {
        let app = JobsTestApp::new();
        let (user_id, jwt) = app.create_user();
        let company = app.create_company(user_id);
        app.store.fail_next("connection reset by peer");

        let (status, parsed) = post_job(&app, &jwt, valid_posting(company.id)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(parsed["success"], false);
        assert!(parsed["error"]
            .as_str()
            .unwrap()
            .contains("connection reset by peer"));
        assert!(app.store.stored_jobs().is_empty());
    }

    #[tokio::test]
    async fn test_jobs_alias_route_creates_jobs() {
        let app = JobsTestApp::new();
        let (user_id, jwt) = app.create_user();
        let company = app.create_company(user_id);

        let (status, _) = send(
            &app,
            authed_request(Method::POST, "/jobs", &jwt, Some(valid_posting(company.id))),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(app.store.stored_jobs().len(), 1);
    }
}

// ============================================================================
// Keyword search
// ============================================================================
mod test_job_search {
    use super::*;

    #[tokio::test]
    async fn test_empty_store_returns_empty_list() {
        let app = JobsTestApp::new();
        let (_, jwt) = app.create_user();

        let (status, body) = send(
            &app,
            authed_request(Method::GET, "/api/v1/job/get", &jwt, None),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["jobs"], json!([]));
    }

    #[tokio::test]
    async fn test_keyword_matches_title_or_description_case_insensitively() {
        let app = JobsTestApp::new();
        let (user_id, jwt) = app.create_user();
        let company = app.create_company(user_id);

        post_titled(&app, &jwt, company.id, "Rust Engineer", "Systems work").await;
        post_titled(&app, &jwt, company.id, "Designer", "Figma and design systems").await;
        post_titled(&app, &jwt, company.id, "Data Analyst", "Write SQL reports").await;

        let (status, body) = send(
            &app,
            authed_request(Method::GET, "/api/v1/job/get?keyword=SYSTEMS", &jwt, None),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(titles(&body), vec!["Designer", "Rust Engineer"]);

        let (_, body) = send(
            &app,
            authed_request(Method::GET, "/api/v1/job/get?keyword=rust", &jwt, None),
        )
        .await;
        assert_eq!(titles(&body), vec!["Rust Engineer"]);
    }

    #[tokio::test]
    async fn test_no_keyword_lists_everything_newest_first() {
        let app = JobsTestApp::new();
        let (user_id, jwt) = app.create_user();
        let company = app.create_company(user_id);

        post_titled(&app, &jwt, company.id, "First", "a").await;
        post_titled(&app, &jwt, company.id, "Second", "b").await;
        post_titled(&app, &jwt, company.id, "Third", "c").await;

        for uri in ["/api/v1/job/get", "/api/v1/job/get?keyword=", "/jobs"] {
            let (status, body) = send(&app, authed_request(Method::GET, uri, &jwt, None)).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(titles(&body), vec!["Third", "Second", "First"], "{uri}");
        }
    }

    #[tokio::test]
    async fn test_keyword_is_matched_literally() {
        let app = JobsTestApp::new();
        let (user_id, jwt) = app.create_user();
        let company = app.create_company(user_id);

        post_titled(&app, &jwt, company.id, "C++ Developer", "Game engines").await;
        post_titled(&app, &jwt, company.id, "Cobol Developer", "Mainframes").await;

        let (_, body) = send(
            &app,
            authed_request(Method::GET, "/api/v1/job/get?keyword=c%2B%2B", &jwt, None),
        )
        .await;
        assert_eq!(titles(&body), vec!["C++ Developer"]);

        let (_, body) = send(
            &app,
            authed_request(Method::GET, "/api/v1/job/get?keyword=.%2A", &jwt, None),
        )
        .await;
        assert_eq!(body["jobs"], json!([]));
    }

    #[tokio::test]
    async fn test_results_embed_company_record() {
        let app = JobsTestApp::new();
        let (user_id, jwt) = app.create_user();
        let company = app.create_company(user_id);
        post_titled(&app, &jwt, company.id, "Engineer", "Build").await;

        let (_, body) = send(
            &app,
            authed_request(Method::GET, "/api/v1/job/get", &jwt, None),
        )
        .await;

        let listed = &body["jobs"][0]["company"];
        assert_eq!(listed["_id"], company.id.to_string());
        assert_eq!(listed["name"], company.name);
    }

    #[tokio::test]
    async fn test_store_failure_returns_500() {
        let app = JobsTestApp::new();
        let (_, jwt) = app.create_user();
        app.store.fail_next("timeout");

        let (status, body) = send(
            &app,
            authed_request(Method::GET, "/api/v1/job/get", &jwt, None),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
    }
}

// ============================================================================
// Job detail
// ============================================================================
mod test_job_detail {
    use super::*;

    #[tokio::test]
    async fn test_get_job_returns_applications() {
        let app = JobsTestApp::new();
        let (user_id, jwt) = app.create_user();
        let company = app.create_company(user_id);
        let job = post_titled(&app, &jwt, company.id, "Engineer", "Build").await;
        let job_id = Uuid::parse_str(job["_id"].as_str().unwrap()).unwrap();

        let now = Utc::now();
        let earlier = application_fixture(job_id, now - Duration::minutes(10));
        let later = application_fixture(job_id, now);
        app.store.insert_application(later.clone());
        app.store.insert_application(earlier.clone());

        let (status, body) = send(
            &app,
            authed_request(Method::GET, &format!("/api/v1/job/get/{}", job_id), &jwt, None),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["job"]["_id"], job_id.to_string());

        let applications = body["job"]["applications"].as_array().unwrap();
        assert_eq!(applications.len(), 2);
        assert_eq!(applications[0]["_id"], earlier.id.to_string());
        assert_eq!(applications[1]["_id"], later.id.to_string());
        assert_eq!(applications[0]["status"], "pending");
    }

    #[tokio::test]
    async fn test_job_without_applications_has_empty_list() {
        let app = JobsTestApp::new();
        let (user_id, jwt) = app.create_user();
        let company = app.create_company(user_id);
        let job = post_titled(&app, &jwt, company.id, "Engineer", "Build").await;

        let (status, body) = send(
            &app,
            authed_request(
                Method::GET,
                &format!("/jobs/{}", job["_id"].as_str().unwrap()),
                &jwt,
                None,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["job"]["applications"], json!([]));
    }

    #[tokio::test]
    async fn test_unknown_or_malformed_id_returns_404() {
        let app = JobsTestApp::new();
        let (_, jwt) = app.create_user();

        for id in [Uuid::new_v4().to_string(), "not-an-id".to_string()] {
            let (status, body) = send(
                &app,
                authed_request(Method::GET, &format!("/api/v1/job/get/{}", id), &jwt, None),
            )
            .await;

            assert_eq!(status, StatusCode::NOT_FOUND, "{id}");
            assert_eq!(body["message"], "Job not found.");
            assert_eq!(body["success"], false);
        }
    }
}

// ============================================================================
// Admin listing
// ============================================================================
mod test_admin_jobs {
    use super::*;

    #[tokio::test]
    async fn test_admin_listing_only_returns_own_jobs_newest_first() {
        let app = JobsTestApp::new();
        let (alice, alice_jwt) = app.create_user();
        let (_, bob_jwt) = app.create_user();
        let company = app.create_company(alice);

        post_titled(&app, &alice_jwt, company.id, "Alice Old", "a").await;
        post_titled(&app, &bob_jwt, company.id, "Bob Only", "b").await;
        post_titled(&app, &alice_jwt, company.id, "Alice New", "c").await;

        let (status, body) = send(
            &app,
            authed_request(Method::GET, "/api/v1/job/getadminjobs", &alice_jwt, None),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(titles(&body), vec!["Alice New", "Alice Old"]);
        for job in body["jobs"].as_array().unwrap() {
            assert_eq!(job["created_by"], alice.to_string());
        }

        let (_, body) = send(
            &app,
            authed_request(Method::GET, "/jobs/admin", &bob_jwt, None),
        )
        .await;
        assert_eq!(titles(&body), vec!["Bob Only"]);
    }

    #[tokio::test]
    async fn test_user_without_jobs_gets_empty_list() {
        let app = JobsTestApp::new();
        let (_, jwt) = app.create_user();

        let (status, body) = send(
            &app,
            authed_request(Method::GET, "/api/v1/job/getadminjobs", &jwt, None),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["jobs"], json!([]));
    }
}

// ============================================================================
// PostgreSQL (requires TEST_DATABASE_URL)
// ============================================================================
mod test_postgres {
    use super::*;
    use crate::common::PgTestApp;

    async fn pg_send(app: &PgTestApp, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.test_router().oneshot(req).await.unwrap();
        let status = resp.status();
        let parsed = parse_body(resp).await;
        (status, parsed)
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL test database"]
    async fn test_postgres_job_lifecycle() {
        let app = PgTestApp::new().await.unwrap();
        let user_id = Uuid::new_v4();
        let jwt = crate::common::create_test_jwt(user_id, &app.config.jwt_secret).unwrap();
        let company = app.create_company(user_id).await.unwrap();

        let marker = format!("pgmarker{}", &Uuid::new_v4().simple().to_string()[0..8]);
        let mut posting = valid_posting(company.id);
        posting["title"] = json!(format!("Engineer {}", marker));

        let (status, created) = pg_send(
            &app,
            authed_request(Method::POST, "/api/v1/job/post", &jwt, Some(posting)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{created}");
        let job_id = Uuid::parse_str(created["job"]["_id"].as_str().unwrap()).unwrap();

        let application = app.create_application(job_id).await.unwrap();

        let (status, found) = pg_send(
            &app,
            authed_request(
                Method::GET,
                &format!("/api/v1/job/get?keyword={}", marker.to_uppercase()),
                &jwt,
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let jobs = found["jobs"].as_array().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0]["company"]["name"], company.name);
        assert_eq!(jobs[0]["applications"], json!([application.id.to_string()]));

        let (status, detail) = pg_send(
            &app,
            authed_request(Method::GET, &format!("/api/v1/job/get/{}", job_id), &jwt, None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            detail["job"]["applications"][0]["_id"],
            application.id.to_string()
        );

        let (_, admin) = pg_send(
            &app,
            authed_request(Method::GET, "/api/v1/job/getadminjobs", &jwt, None),
        )
        .await;
        assert_eq!(admin["jobs"].as_array().unwrap().len(), 1);

        app.cleanup(user_id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL test database"]
    async fn test_postgres_unknown_company_is_rejected() {
        let app = PgTestApp::new().await.unwrap();
        let user_id = Uuid::new_v4();
        let jwt = crate::common::create_test_jwt(user_id, &app.config.jwt_secret).unwrap();

        let (status, body) = pg_send(
            &app,
            authed_request(
                Method::POST,
                "/api/v1/job/post",
                &jwt,
                Some(valid_posting(Uuid::new_v4())),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Company not found.");
    }
}
