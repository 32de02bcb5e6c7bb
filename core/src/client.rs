//! Resource accessors for the jsonplaceholder API.
//!
//! # Design
//! Each accessor is a `build_request` step that produces an `HttpRequest`
//! and a `parse_collection` step that consumes an `HttpResponse`. Only
//! `fetch` touches the transport, so both halves stay testable on plain data.
//! Single-item lookups collapse multiple matches to the first in source
//! order.

use serde::de::DeserializeOwned;
use tracing::error;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::with_query;
use crate::transport::Transport;
use crate::types::{Album, ApiResponse, Photo, Post, Resource, User};

/// Client for the users, posts, albums and photos collections.
///
/// Owns the one transport every call goes through.
#[derive(Debug)]
pub struct JsonPlaceholder<T> {
    transport: T,
}

impl<T: Transport> JsonPlaceholder<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn get_users(&self) -> Result<ApiResponse<Vec<User>>, ApiError> {
        self.fetch(Resource::Users, &[])
    }

    pub fn get_user_by_id(&self, id: &str) -> Result<ApiResponse<User>, ApiError> {
        self.fetch(Resource::Users, &[("id", id)]).and_then(first)
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<ApiResponse<User>, ApiError> {
        self.fetch(Resource::Users, &[("email", email)]).and_then(first)
    }

    pub fn get_posts(&self) -> Result<ApiResponse<Vec<Post>>, ApiError> {
        self.fetch(Resource::Posts, &[])
    }

    pub fn get_post_by_id(&self, id: &str) -> Result<ApiResponse<Post>, ApiError> {
        self.fetch(Resource::Posts, &[("id", id)]).and_then(first)
    }

    pub fn get_posts_by_user_id(&self, user_id: &str) -> Result<ApiResponse<Vec<Post>>, ApiError> {
        self.fetch(Resource::Posts, &[("userId", user_id)])
    }

    pub fn get_albums(&self) -> Result<ApiResponse<Vec<Album>>, ApiError> {
        self.fetch(Resource::Albums, &[])
    }

    pub fn get_album_by_id(&self, id: &str) -> Result<ApiResponse<Album>, ApiError> {
        self.fetch(Resource::Albums, &[("id", id)]).and_then(first)
    }

    pub fn get_album_by_title(&self, title: &str) -> Result<ApiResponse<Album>, ApiError> {
        self.fetch(Resource::Albums, &[("title", title)]).and_then(first)
    }

    pub fn get_albums_by_user_id(&self, user_id: &str) -> Result<ApiResponse<Vec<Album>>, ApiError> {
        self.fetch(Resource::Albums, &[("userId", user_id)])
    }

    pub fn get_photos(&self) -> Result<ApiResponse<Vec<Photo>>, ApiError> {
        self.fetch(Resource::Photos, &[])
    }

    pub fn get_photos_by_album_id(&self, album_id: &str) -> Result<ApiResponse<Vec<Photo>>, ApiError> {
        self.fetch(Resource::Photos, &[("albumId", album_id)])
    }

    fn fetch<R: DeserializeOwned>(
        &self,
        resource: Resource,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse<Vec<R>>, ApiError> {
        let request = build_request(resource, params);
        let response = self.transport.send(&request)?;
        parse_collection(response).inspect_err(|e| {
            if !matches!(e, ApiError::NotFound) {
                error!(path = %request.path, error = %e, "unusable API response");
            }
        })
    }
}

/// GET request for `resource`, filtered by `params` when any are given.
pub fn build_request(resource: Resource, params: &[(&str, &str)]) -> HttpRequest {
    HttpRequest::get(with_query(resource.path(), params))
}

/// Decode a collection response. Anything but 200 is an error.
pub fn parse_collection<R: DeserializeOwned>(
    response: HttpResponse,
) -> Result<ApiResponse<Vec<R>>, ApiError> {
    check_status(&response, 200)?;
    let body = serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(ApiResponse {
        status: response.status,
        reason: response.reason,
        headers: response.headers,
        body,
    })
}

/// Keep only the first item, or `NotFound` if the collection is empty.
fn first<R>(response: ApiResponse<Vec<R>>) -> Result<ApiResponse<R>, ApiError> {
    let ApiResponse {
        status,
        reason,
        headers,
        body,
    } = response;
    let item = body.into_iter().next().ok_or(ApiError::NotFound)?;
    Ok(ApiResponse {
        status,
        reason,
        headers,
        body: item,
    })
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::stub::StubTransport;
    use serde_json::json;

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            reason: "OK".to_string(),
            headers: vec![("x-powered-by".to_string(), "Express".to_string())],
            body: body.to_string(),
        }
    }

    #[test]
    fn build_request_without_params_has_bare_path() {
        let req = build_request(Resource::Photos, &[]);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "/photos");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn build_request_encodes_email_filter() {
        let req = build_request(Resource::Users, &[("email", "Sincere@april.biz")]);
        assert_eq!(req.path, "/users?email=Sincere@april.biz");
    }

    #[test]
    fn build_request_encodes_title_filter() {
        let req = build_request(Resource::Albums, &[("title", "omnis laborum")]);
        assert_eq!(req.path, "/albums?title=omnis+laborum");
    }

    #[test]
    fn parse_collection_keeps_status_line_and_headers() {
        let parsed: ApiResponse<Vec<Post>> =
            parse_collection(ok(r#"[{"id":1,"userId":1,"title":"t"}]"#)).unwrap();
        assert_eq!(parsed.status, 200);
        assert_eq!(parsed.reason, "OK");
        assert_eq!(parsed.headers, vec![("x-powered-by".to_string(), "Express".to_string())]);
        assert_eq!(parsed.body.len(), 1);
        assert_eq!(parsed.body[0].get("title"), Some(&json!("t")));
    }

    #[test]
    fn parse_collection_bad_json() {
        let err = parse_collection::<User>(ok("<html>")).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn parse_collection_not_found() {
        let response = HttpResponse {
            status: 404,
            reason: "Not Found".to_string(),
            headers: Vec::new(),
            body: "{}".to_string(),
        };
        let err = parse_collection::<User>(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_collection_server_error() {
        let response = HttpResponse {
            status: 502,
            reason: "Bad Gateway".to_string(),
            headers: Vec::new(),
            body: "upstream down".to_string(),
        };
        let err = parse_collection::<User>(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 502, .. }));
    }

    #[test]
    fn get_user_by_email_returns_first_match() {
        let stub = StubTransport::new().with_json(
            "/users?email=Sincere@april.biz",
            json!([
                {"id": 1, "email": "Sincere@april.biz"},
                {"id": 11, "email": "Sincere@april.biz"}
            ]),
        );
        let client = JsonPlaceholder::new(stub);
        let user = client.get_user_by_email("Sincere@april.biz").unwrap();
        assert_eq!(user.body.id().as_u64(), Some(1));
        assert_eq!(user.status, 200);
    }

    #[test]
    fn single_item_lookup_with_no_match_is_not_found() {
        let stub = StubTransport::new()
            .with_json("/users?id=99", json!([]))
            .with_json("/posts?id=99", json!([]))
            .with_json("/albums?id=99", json!([]))
            .with_json("/albums?title=nope", json!([]));
        let client = JsonPlaceholder::new(stub);
        assert!(matches!(client.get_user_by_id("99"), Err(ApiError::NotFound)));
        assert!(matches!(client.get_post_by_id("99"), Err(ApiError::NotFound)));
        assert!(matches!(client.get_album_by_id("99"), Err(ApiError::NotFound)));
        assert!(matches!(client.get_album_by_title("nope"), Err(ApiError::NotFound)));
    }

    #[test]
    fn foreign_key_lookup_may_be_empty() {
        let stub = StubTransport::new().with_json("/posts?userId=42", json!([]));
        let client = JsonPlaceholder::new(stub);
        let posts = client.get_posts_by_user_id("42").unwrap();
        assert!(posts.body.is_empty());
    }

    #[test]
    fn collection_accessors_hit_fixed_paths() {
        let stub = StubTransport::new()
            .with_json("/users", json!([{"id": 1, "email": "a@b.c"}]))
            .with_json("/posts", json!([{"id": 1, "userId": 1}]))
            .with_json("/albums", json!([{"id": 1, "userId": 1}]))
            .with_json("/photos", json!([{"id": 1, "albumId": 1}]));
        let client = JsonPlaceholder::new(stub);
        assert_eq!(client.get_users().unwrap().body.len(), 1);
        assert_eq!(client.get_posts().unwrap().body.len(), 1);
        assert_eq!(client.get_albums().unwrap().body.len(), 1);
        assert_eq!(client.get_photos().unwrap().body.len(), 1);
        assert_eq!(
            client.transport().calls(),
            vec!["/users", "/posts", "/albums", "/photos"]
        );
    }

    #[test]
    fn transport_failure_propagates() {
        let client = JsonPlaceholder::new(StubTransport::new());
        let err = client.get_photos_by_album_id("1").unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn item_missing_contract_field_is_a_parse_error() {
        let stub = StubTransport::new().with_json("/users?id=1", json!([{"id": 1}]));
        let client = JsonPlaceholder::new(stub);
        let err = client.get_user_by_id("1").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
