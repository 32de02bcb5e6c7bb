use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const USERS: usize = 10;
pub const POSTS_PER_USER: usize = 10;
pub const ALBUMS_PER_USER: usize = 10;
pub const PHOTOS_PER_ALBUM: usize = 50;

const NAMES: [(&str, &str, &str); USERS] = [
    ("Leanne Graham", "Bret", "Sincere@april.biz"),
    ("Ervin Howell", "Antonette", "Shanna@melissa.tv"),
    ("Clementine Bauch", "Samantha", "Nathan@yesenia.net"),
    ("Patricia Lebsack", "Karianne", "Julianne.OConner@kory.org"),
    ("Chelsey Dietrich", "Kamren", "Lucio_Hettinger@annie.ca"),
    ("Mrs. Dennis Schulist", "Leopoldo_Corkery", "Karley_Dach@jasper.info"),
    ("Kurtis Weissnat", "Elwyn.Skiles", "Telly.Hoeger@billy.biz"),
    ("Nicholas Runolfsdottir V", "Maxime_Nienow", "Sherwood@rosamond.me"),
    ("Glenna Reichert", "Delphine", "Chaim_McDermott@dana.io"),
    ("Clementina DuBuque", "Moriah.Stanton", "Rey.Padberg@karina.biz"),
];

/// The four collections served by the mock API.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub users: Vec<Value>,
    pub posts: Vec<Value>,
    pub albums: Vec<Value>,
    pub photos: Vec<Value>,
}

impl Dataset {
    /// Same shape and cardinality as jsonplaceholder.typicode.com: 10 users,
    /// 10 posts and 10 albums each, 50 photos per album.
    pub fn jsonplaceholder() -> Self {
        let mut data = Self::default();
        for (index, (name, username, email)) in NAMES.iter().enumerate() {
            let user_id = index + 1;
            data.users.push(json!({
                "id": user_id,
                "name": name,
                "username": username,
                "email": email,
            }));
            for n in 0..POSTS_PER_USER {
                let id = index * POSTS_PER_USER + n + 1;
                data.posts.push(json!({
                    "userId": user_id,
                    "id": id,
                    "title": format!("post {id} by {username}"),
                    "body": format!("body of post {id}"),
                }));
            }
            for n in 0..ALBUMS_PER_USER {
                let album_id = index * ALBUMS_PER_USER + n + 1;
                data.albums.push(json!({
                    "userId": user_id,
                    "id": album_id,
                    "title": format!("album {album_id} of {username}"),
                }));
                for p in 0..PHOTOS_PER_ALBUM {
                    let id = (album_id - 1) * PHOTOS_PER_ALBUM + p + 1;
                    data.photos.push(json!({
                        "albumId": album_id,
                        "id": id,
                        "title": format!("photo {id}"),
                        "url": format!("https://via.placeholder.com/600/{id}"),
                        "thumbnailUrl": format!("https://via.placeholder.com/150/{id}"),
                    }));
                }
            }
        }
        data
    }
}

pub type Db = Arc<Dataset>;

pub fn app() -> Router {
    app_with(Dataset::jsonplaceholder())
}

pub fn app_with(dataset: Dataset) -> Router {
    let db: Db = Arc::new(dataset);
    Router::new()
        .route("/users", get(list_users))
        .route("/posts", get(list_posts))
        .route("/albums", get(list_albums))
        .route("/photos", get(list_photos))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, dataset: Dataset) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(dataset)).await
}

type Filters = Query<Vec<(String, String)>>;

async fn list_users(State(db): State<Db>, Query(filters): Filters) -> Json<Vec<Value>> {
    Json(filter(&db.users, &filters))
}

async fn list_posts(State(db): State<Db>, Query(filters): Filters) -> Json<Vec<Value>> {
    Json(filter(&db.posts, &filters))
}

async fn list_albums(State(db): State<Db>, Query(filters): Filters) -> Json<Vec<Value>> {
    Json(filter(&db.albums, &filters))
}

async fn list_photos(State(db): State<Db>, Query(filters): Filters) -> Json<Vec<Value>> {
    Json(filter(&db.photos, &filters))
}

/// Keep records whose every filtered field equals the query value, compared
/// as text.
pub fn filter(records: &[Value], filters: &[(String, String)]) -> Vec<Value> {
    records
        .iter()
        .filter(|record| {
            filters
                .iter()
                .all(|(key, wanted)| record.get(key).is_some_and(|v| as_text(v) == *wanted))
        })
        .cloned()
        .collect()
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
