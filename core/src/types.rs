//! Resource DTOs for the jsonplaceholder API.
//!
//! # Design
//! Resources are opaque JSON objects. Each DTO keeps the whole upstream
//! object, in key order, and serializes back to exactly that object. The keys
//! the client joins on are checked for presence when decoding and exposed as
//! `JoinKey`; their JSON type is not constrained.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A remote collection and its fixed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Users,
    Posts,
    Albums,
    Photos,
}

impl Resource {
    pub fn path(self) -> &'static str {
        match self {
            Resource::Users => "/users",
            Resource::Posts => "/posts",
            Resource::Albums => "/albums",
            Resource::Photos => "/photos",
        }
    }
}

/// The raw value of a join field, as sent by the API.
///
/// `Display` renders strings without quotes and everything else as JSON
/// text, which is the form used in filter queries.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinKey(Value);

impl JoinKey {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.0.as_u64()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }
}

impl fmt::Display for JoinKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

fn join_key(object: &Map<String, Value>, key: &str) -> Result<JoinKey, String> {
    object
        .get(key)
        .cloned()
        .map(JoinKey)
        .ok_or_else(|| format!("missing field `{key}`"))
}

macro_rules! opaque_resource {
    ($(#[$meta:meta])* $name:ident { $($field:ident => $key:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
        pub struct $name {
            $($field: JoinKey,)+
            object: Map<String, Value>,
        }

        impl $name {
            $(
                pub fn $field(&self) -> &JoinKey {
                    &self.$field
                }
            )+

            /// Any field of the upstream object.
            pub fn get(&self, key: &str) -> Option<&Value> {
                self.object.get(key)
            }

            pub fn as_object(&self) -> &Map<String, Value> {
                &self.object
            }
        }

        impl TryFrom<Map<String, Value>> for $name {
            type Error = String;

            fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
                Ok(Self {
                    $($field: join_key(&object, $key)?,)+
                    object,
                })
            }
        }

        impl From<$name> for Map<String, Value> {
            fn from(resource: $name) -> Self {
                resource.object
            }
        }
    };
}

opaque_resource!(
    /// Resolved by id from the endpoint and by email inside the report.
    User { id => "id", email => "email" }
);
opaque_resource!(Post { id => "id", user_id => "userId" });
opaque_resource!(Album { id => "id", user_id => "userId" });
opaque_resource!(Photo { id => "id", album_id => "albumId" });

/// Normalized result of one API call: status line, headers and decoded body.
///
/// Collection accessors return `ApiResponse<Vec<R>>`; single-item lookups
/// return `ApiResponse<R>` holding the first match.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub reason: String,
    pub headers: Vec<(String, String)>,
    pub body: T,
}

/// A user joined with their posts, albums and every photo in those albums.
///
/// `photos` is the concatenation of each album's photos in `user_albums`
/// order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserReport {
    pub user_info: User,
    pub user_posts: Vec<Post>,
    pub user_albums: Vec<Album>,
    pub photos: Vec<Photo>,
}
