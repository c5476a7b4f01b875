//! Verse catalog API tests.

mod common;

use axum::http::StatusCode;

use common::TestContext;

#[tokio::test]
async fn test_health() {
    let server = TestContext::new().server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn test_list_surahs() {
    let server = TestContext::new().server();

    let response = server.get("/api/surahs").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let surahs = body["surahs"].as_array().unwrap();
    assert_eq!(surahs.len(), 3);
    assert_eq!(surahs[0]["number"], 1);
    assert_eq!(surahs[0]["name"], "Al-Fatihah");
}

#[tokio::test]
async fn test_list_verses_for_surah() {
    let server = TestContext::new().server();

    let response = server.get("/api/surahs/1/verses").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let verses = body["verses"].as_array().unwrap();
    assert_eq!(verses.len(), 3);
    assert_eq!(verses[0]["ayah"], 1);
    assert_eq!(verses[2]["ayah"], 3);
}

#[tokio::test]
async fn test_list_verses_with_range() {
    let server = TestContext::new().server();

    let response = server
        .get("/api/surahs/1/verses")
        .add_query_param("start", 2)
        .add_query_param("end", 3)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let ayahs: Vec<u64> = body["verses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["ayah"].as_u64().unwrap())
        .collect();
    assert_eq!(ayahs, vec![2, 3]);
}

#[tokio::test]
async fn test_list_verses_unknown_surah_is_empty() {
    let server = TestContext::new().server();

    let response = server.get("/api/surahs/114/verses").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["verses"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_verse() {
    let server = TestContext::new().server();

    let response = server.get("/api/verses/2").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], 2);
    assert_eq!(body["transliteration"], "Al-ḥamdu lillāhi rabbi l-ʿālamīn");
}

#[tokio::test]
async fn test_get_verse_not_found() {
    let server = TestContext::new().server();

    let response = server.get("/api/verses/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_search_translation() {
    let server = TestContext::new().server();

    let response = server
        .get("/api/verses/search")
        .add_query_param("q", "lord of the worlds")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let verses = body["verses"].as_array().unwrap();
    assert_eq!(verses.len(), 1);
    assert_eq!(verses[0]["id"], 2);
}

#[tokio::test]
async fn test_search_empty_query_returns_all_verses() {
    let server = TestContext::new().server();

    let response = server
        .get("/api/verses/search")
        .add_query_param("q", "")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["verses"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_search_missing_query_is_json_error() {
    let server = TestContext::new().server();

    let response = server.get("/api/verses/search").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "bad_request");
    assert!(body["message"].as_str().unwrap().contains("q"));
}

#[tokio::test]
async fn test_get_verse_invalid_id_is_json_error() {
    let server = TestContext::new().server();

    let response = server.get("/api/verses/first").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_list_verses_zero_end_is_unbounded() {
    let server = TestContext::new().server();

    let response = server
        .get("/api/surahs/1/verses")
        .add_query_param("end", 0)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["verses"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_audio_config() {
    let server = TestContext::new().server();

    let response = server.get("/api/audio/config").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["sample_rate"], 44100);
    assert_eq!(body["bit_depth"], 16);
    assert_eq!(body["channels"], 1);
}
