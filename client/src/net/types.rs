//! Wire DTOs for the auth, profile and cards services.
//!
//! DESIGN
//! ======
//! Field names follow the services' JSON (`_id`, `createdAt`); Rust-side names
//! are snake_case through serde renames.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A registered user as returned by the profile service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub about: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A place card in the feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Image URL.
    pub link: String,
    #[serde(default)]
    pub owner: User,
    /// Users who liked the card; membership is by user id.
    #[serde(default)]
    pub likes: Vec<User>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Card {
    /// Whether `user_id` appears in the card's likes.
    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|user| user.id == user_id)
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        !user_id.is_empty() && self.owner.id == user_id
    }
}

/// Body of `PATCH /users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: String,
    pub about: String,
}

/// Body of `PATCH /users/me/avatar`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarUpdate {
    pub avatar: String,
}

/// Body of `POST /cards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCard {
    pub name: String,
    pub link: String,
}

/// Email + password pair submitted by the login and register remotes.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `{ "data": ... }` wrapper used by the auth service.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Identity behind a valid token (`GET /users/me` on the auth service).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenOwner {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub email: String,
}

/// Response of `POST /signin`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignInResponse {
    pub token: String,
}

/// Account created by `POST /signup`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Registered {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
}
