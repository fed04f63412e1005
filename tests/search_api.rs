//! Integration tests for the search API endpoints
//!
//! These tests load a catalog from a temporary data directory and drive the
//! real router, verifying status codes, fixed messages, and response shapes.

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use course_search::{build_router, load_catalog, ServerConfig, ServerState};

const REVIEWS: &str = r#"[
  {"教师": "张三", "课程名称": "高等数学", "评价": "讲课清晰"},
  {"教师": "张思", "课程名称": "线性代数", "评价": null},
  {"教师": "张三丰", "课程名称": "高等数学II", "评价": "期末考核轻松"},
  {"教师": "Alice Wang", "课程名称": "Academic English", "评价": "Discussion heavy"},
  {"教师": null, "课程名称": "体育（篮球）", "评价": "场地一般"}
]"#;

fn write_data(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).expect("write test data");
}

fn test_router() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("create temp data dir");
    write_data(dir.path(), "reviews.json", REVIEWS);

    let config = ServerConfig {
        data_dir: dir.path().to_path_buf(),
        ..ServerConfig::default()
    };
    let catalog =
        load_catalog(&config.data_dir, &config.data_pattern).expect("load test catalog");
    let state = Arc::new(ServerState::new(config, catalog));

    (build_router(state), dir)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("router response");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("response is JSON");
    (status, value)
}

fn teacher_uri(name: &str) -> String {
    format!("/search/teacher?name={}", urlencoding::encode(name))
}

fn course_uri(name: &str) -> String {
    format!("/search/course?name={}", urlencoding::encode(name))
}

#[tokio::test]
async fn missing_teacher_name_is_bad_request() {
    let (router, _dir) = test_router();

    for uri in ["/search/teacher", "/search/teacher?name="] {
        let (status, body) = get(&router, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Teacher name is required");
    }
}

#[tokio::test]
async fn missing_course_name_is_bad_request() {
    let (router, _dir) = test_router();

    let (status, body) = get(&router, "/search/course").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Course name is required");
}

#[tokio::test]
async fn exact_teacher_query_returns_that_record_first() {
    let (router, _dir) = test_router();

    let (status, body) = get(&router, &teacher_uri("张三")).await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().expect("array body");
    assert_eq!(rows[0]["教师"], "张三");
    assert_eq!(rows[0]["课程名称"], "高等数学");
    // 张三丰 also fuzzy-matches but must come after the exact row.
    assert_eq!(rows[1]["教师"], "张三丰");
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn fuzzy_teacher_query_matches_subsequences() {
    let (router, _dir) = test_router();

    let (status, body) = get(&router, &teacher_uri("张")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array body").len(), 3);
}

#[tokio::test]
async fn phonetic_initials_query_matches_teachers() {
    let (router, _dir) = test_router();

    let (status, body) = get(&router, &teacher_uri("zs")).await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().expect("array body");
    let names: Vec<&str> = rows.iter().map(|r| r["教师"].as_str().unwrap()).collect();
    // 张三 and 张思 both transliterate to initials "zs"; 张三丰 is "zsf".
    assert_eq!(names, ["张三", "张思", "张三丰"]);
}

#[tokio::test]
async fn null_fields_are_omitted_from_responses() {
    let (router, _dir) = test_router();

    let (status, body) = get(&router, &teacher_uri("张思")).await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().expect("array body");
    let exact = rows
        .iter()
        .find(|r| r["教师"] == "张思")
        .expect("张思 in results");
    assert!(exact.get("评价").is_none());
    assert_eq!(exact["课程名称"], "线性代数");
}

#[tokio::test]
async fn unmatched_teacher_query_is_not_found() {
    let (router, _dir) = test_router();

    let (status, body) = get(&router, &teacher_uri("不存在")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "No courses found for this teacher");
}

#[tokio::test]
async fn course_query_matches_exact_and_subsequence() {
    let (router, _dir) = test_router();

    let (status, body) = get(&router, &course_uri("高等数学")).await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().expect("array body");
    assert_eq!(rows[0]["课程名称"], "高等数学");
    assert_eq!(rows[1]["课程名称"], "高等数学II");
}

#[tokio::test]
async fn course_fuzzy_matching_is_case_sensitive() {
    let (router, _dir) = test_router();

    // Teacher search is case-insensitive...
    let (status, _) = get(&router, &teacher_uri("alice wang")).await;
    assert_eq!(status, StatusCode::OK);

    // ...course search is not: no course contains an uppercase subsequence
    // "ACADEMIC".
    let (status, body) = get(&router, &course_uri("ACADEMIC")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "No reviews found for this course");
}

#[tokio::test]
async fn landing_page_lists_endpoints() {
    let (router, _dir) = test_router();

    let (status, body) = get(&router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "course-search");
}

#[tokio::test]
async fn health_and_readiness_report_catalog() {
    let (router, _dir) = test_router();

    let (status, body) = get(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(&router, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["components"]["catalog"]["records"], 5);
}

#[tokio::test]
async fn unknown_routes_fall_back_to_not_found() {
    let (router, _dir) = test_router();

    let (status, body) = get(&router, "/search/student").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
