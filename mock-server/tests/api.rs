use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Dataset, PHOTOS_PER_ALBUM};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn get(router: axum::Router, uri: &str) -> (StatusCode, Value) {
    let resp = router
        .oneshot(Request::builder().uri(uri).body(String::new()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn list_users_unfiltered() {
    let (status, body) = get(app(), "/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn users_by_unescaped_email() {
    let (status, body) = get(app(), "/users?email=Sincere@april.biz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
    }]));
}

#[tokio::test]
async fn users_by_escaped_email() {
    let (_, body) = get(app(), "/users?email=Shanna%40melissa.tv").await;
    assert_eq!(body[0]["id"], 2);
}

#[tokio::test]
async fn users_by_unknown_id_is_empty_list() {
    let (status, body) = get(app(), "/users?id=999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn albums_by_title_decodes_plus_as_space() {
    let (_, body) = get(app(), "/albums?title=album+3+of+Bret").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], 3);
}

#[tokio::test]
async fn photos_by_album_keep_source_order() {
    let (_, body) = get(app(), "/photos?albumId=1").await;
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids.len(), PHOTOS_PER_ALBUM);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn custom_dataset_is_served() {
    let dataset = Dataset {
        users: vec![json!({"id": 7, "email": "solo@example.com"})],
        ..Dataset::default()
    };
    let (_, users) = get(app_with(dataset.clone()), "/users").await;
    assert_eq!(users.as_array().unwrap().len(), 1);
    let (_, posts) = get(app_with(dataset), "/posts?userId=7").await;
    assert_eq!(posts, json!([]));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let resp = app()
        .oneshot(Request::builder().uri("/comments").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
