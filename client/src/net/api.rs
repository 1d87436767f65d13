//! REST clients for the auth, profile and cards services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with
//! `ApiError::Unavailable`, since these services are only reached from the
//! browser.
//!
//! DESIGN
//! ======
//! Orchestration code depends on the `AuthApi` / `ProfileApi` / `CardsApi`
//! traits rather than on `HttpApi`, so session and card flows run against
//! in-memory fakes in tests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    AvatarUpdate, Card, Credentials, Envelope, NewCard, Registered, SignInResponse, TokenOwner, User, UserUpdate,
};
use crate::config::HostConfig;
use crate::error::ApiError;

/// Auth service contract.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Validate a persisted token and return the identity behind it.
    async fn check_token(&self, token: &str) -> Result<TokenOwner, ApiError>;
    /// Exchange credentials for a token.
    async fn login(&self, credentials: &Credentials) -> Result<SignInResponse, ApiError>;
    /// Create an account. Does not log in.
    async fn register(&self, credentials: &Credentials) -> Result<Registered, ApiError>;
}

/// Profile service contract.
#[allow(async_fn_in_trait)]
pub trait ProfileApi {
    async fn get_user_info(&self) -> Result<User, ApiError>;
    async fn set_user_info(&self, update: &UserUpdate) -> Result<User, ApiError>;
    async fn set_user_avatar(&self, update: &AvatarUpdate) -> Result<User, ApiError>;
}

/// Cards service contract.
#[allow(async_fn_in_trait)]
pub trait CardsApi {
    async fn get_card_list(&self) -> Result<Vec<Card>, ApiError>;
    async fn add_card(&self, card: &NewCard) -> Result<Card, ApiError>;
    async fn remove_card(&self, card_id: &str) -> Result<(), ApiError>;
    /// Set (`liked = true`) or clear the current user's like; returns the updated card.
    async fn change_like_card_status(&self, card_id: &str, liked: bool) -> Result<Card, ApiError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
struct ApiRequest {
    method: Method,
    url: String,
    /// Full `Authorization` header value.
    authorization: Option<String>,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, url: String) -> Self {
        Self { method, url, authorization: None, body: None }
    }

    fn authorization(mut self, value: Option<String>) -> Self {
        self.authorization = value;
        self
    }

    fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?);
        Ok(self)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn card_endpoint(api_url: &str, card_id: &str) -> String {
    join_url(api_url, &format!("cards/{card_id}"))
}

fn card_likes_endpoint(api_url: &str, card_id: &str) -> String {
    join_url(api_url, &format!("cards/{card_id}/likes"))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// HTTP implementation of all three service contracts.
#[derive(Clone, Debug)]
pub struct HttpApi {
    api_url: String,
    api_token: Option<String>,
    auth_url: String,
}

impl HttpApi {
    pub fn new(config: &HostConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            api_token: config.api_token.clone(),
            auth_url: config.auth_url.clone(),
        }
    }

    fn api(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, join_url(&self.api_url, path)).authorization(self.api_token.clone())
    }

    fn auth(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, join_url(&self.auth_url, path))
    }

    /// Send `request` and return the response body of a 2xx response.
    async fn send(&self, request: ApiRequest) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Patch => Request::patch(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            let builder = match request.authorization.as_deref() {
                Some(value) => builder.header("Authorization", value),
                None => builder,
            };
            let built = match request.body.as_ref() {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;
            let resp = built.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status { status: resp.status() });
            }
            resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let body = self.send(request).await?;
        decode(&body)
    }
}

impl AuthApi for HttpApi {
    async fn check_token(&self, token: &str) -> Result<TokenOwner, ApiError> {
        let request = self.auth(Method::Get, "users/me").authorization(Some(bearer(token)));
        let body: Envelope<TokenOwner> = self.fetch(request).await?;
        Ok(body.data)
    }

    async fn login(&self, credentials: &Credentials) -> Result<SignInResponse, ApiError> {
        self.fetch(self.auth(Method::Post, "signin").json(credentials)?).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<Registered, ApiError> {
        let body: Envelope<Registered> = self.fetch(self.auth(Method::Post, "signup").json(credentials)?).await?;
        Ok(body.data)
    }
}

impl ProfileApi for HttpApi {
    async fn get_user_info(&self) -> Result<User, ApiError> {
        self.fetch(self.api(Method::Get, "users/me")).await
    }

    async fn set_user_info(&self, update: &UserUpdate) -> Result<User, ApiError> {
        self.fetch(self.api(Method::Patch, "users/me").json(update)?).await
    }

    async fn set_user_avatar(&self, update: &AvatarUpdate) -> Result<User, ApiError> {
        self.fetch(self.api(Method::Patch, "users/me/avatar").json(update)?).await
    }
}

impl CardsApi for HttpApi {
    async fn get_card_list(&self) -> Result<Vec<Card>, ApiError> {
        self.fetch(self.api(Method::Get, "cards")).await
    }

    async fn add_card(&self, card: &NewCard) -> Result<Card, ApiError> {
        self.fetch(self.api(Method::Post, "cards").json(card)?).await
    }

    async fn remove_card(&self, card_id: &str) -> Result<(), ApiError> {
        let request = ApiRequest::new(Method::Delete, card_endpoint(&self.api_url, card_id))
            .authorization(self.api_token.clone());
        self.send(request).await.map(|_| ())
    }

    async fn change_like_card_status(&self, card_id: &str, liked: bool) -> Result<Card, ApiError> {
        let method = if liked { Method::Put } else { Method::Delete };
        let request =
            ApiRequest::new(method, card_likes_endpoint(&self.api_url, card_id)).authorization(self.api_token.clone());
        self.fetch(request).await
    }
}
