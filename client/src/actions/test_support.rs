//! In-memory collaborators for action tests.

use std::cell::{Cell, RefCell};

use crate::error::ApiError;
use crate::net::api::{AuthApi, CardsApi, ProfileApi};
use crate::net::types::{
    AvatarUpdate, Card, Credentials, NewCard, Registered, SignInResponse, TokenOwner, User, UserUpdate,
};

pub const ME: &str = "u-me";

pub fn user(id: &str) -> User {
    User { id: id.to_owned(), name: format!("user {id}"), ..User::default() }
}

pub fn card(id: &str) -> Card {
    Card {
        id: id.to_owned(),
        name: format!("place {id}"),
        link: format!("https://example.test/{id}.jpg"),
        owner: user("u-owner"),
        likes: Vec::new(),
        created_at: None,
    }
}

/// Records every navigation target.
#[derive(Default)]
pub struct Nav {
    pub visited: RefCell<Vec<String>>,
}

impl Nav {
    pub fn to(&self) -> impl Fn(&str) + '_ {
        move |path: &str| self.visited.borrow_mut().push(path.to_owned())
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

#[derive(Default)]
pub struct FakeAuth {
    pub valid_token: Option<String>,
    pub password: String,
    pub fail_register: bool,
    pub checks: Cell<usize>,
}

impl AuthApi for FakeAuth {
    async fn check_token(&self, token: &str) -> Result<TokenOwner, ApiError> {
        self.checks.set(self.checks.get() + 1);
        match self.valid_token.as_deref() {
            Some(valid) if valid == token => Ok(TokenOwner { id: ME.to_owned(), email: "me@example.test".to_owned() }),
            _ => Err(ApiError::Status { status: 401 }),
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<SignInResponse, ApiError> {
        if credentials.password == self.password {
            Ok(SignInResponse { token: "fresh-token".to_owned() })
        } else {
            Err(ApiError::Status { status: 401 })
        }
    }

    async fn register(&self, credentials: &Credentials) -> Result<Registered, ApiError> {
        if self.fail_register {
            Err(ApiError::Status { status: 409 })
        } else {
            Ok(Registered { id: "u-new".to_owned(), email: credentials.email.clone() })
        }
    }
}

#[derive(Default)]
pub struct FakeProfile {
    pub fail: bool,
}

impl ProfileApi for FakeProfile {
    async fn get_user_info(&self) -> Result<User, ApiError> {
        if self.fail { Err(ApiError::Transport("offline".to_owned())) } else { Ok(user(ME)) }
    }

    async fn set_user_info(&self, update: &UserUpdate) -> Result<User, ApiError> {
        if self.fail {
            return Err(ApiError::Status { status: 500 });
        }
        Ok(User { name: update.name.clone(), about: update.about.clone(), ..user(ME) })
    }

    async fn set_user_avatar(&self, update: &AvatarUpdate) -> Result<User, ApiError> {
        if self.fail {
            return Err(ApiError::Status { status: 500 });
        }
        Ok(User { avatar: update.avatar.clone(), ..user(ME) })
    }
}

/// Server-side card store that applies likes as the current user.
#[derive(Default)]
pub struct FakeCards {
    pub server: RefCell<Vec<Card>>,
    pub fail: bool,
    pub like_calls: RefCell<Vec<(String, bool)>>,
}

impl FakeCards {
    pub fn with(cards: Vec<Card>) -> Self {
        Self { server: RefCell::new(cards), ..Self::default() }
    }
}

impl CardsApi for FakeCards {
    async fn get_card_list(&self) -> Result<Vec<Card>, ApiError> {
        if self.fail {
            return Err(ApiError::Transport("offline".to_owned()));
        }
        Ok(self.server.borrow().clone())
    }

    async fn add_card(&self, card: &NewCard) -> Result<Card, ApiError> {
        if self.fail {
            return Err(ApiError::Status { status: 400 });
        }
        let created = Card {
            id: format!("c-{}", self.server.borrow().len() + 1),
            name: card.name.clone(),
            link: card.link.clone(),
            owner: user(ME),
            likes: Vec::new(),
            created_at: Some("2024-05-01T00:00:00.000Z".to_owned()),
        };
        self.server.borrow_mut().insert(0, created.clone());
        Ok(created)
    }

    async fn remove_card(&self, card_id: &str) -> Result<(), ApiError> {
        if self.fail {
            return Err(ApiError::Status { status: 403 });
        }
        self.server.borrow_mut().retain(|c| c.id != card_id);
        Ok(())
    }

    async fn change_like_card_status(&self, card_id: &str, liked: bool) -> Result<Card, ApiError> {
        self.like_calls.borrow_mut().push((card_id.to_owned(), liked));
        if self.fail {
            return Err(ApiError::Transport("offline".to_owned()));
        }
        let mut server = self.server.borrow_mut();
        let card = server
            .iter_mut()
            .find(|c| c.id == card_id)
            .ok_or(ApiError::Status { status: 404 })?;
        card.likes.retain(|u| u.id != ME);
        if liked {
            card.likes.push(user(ME));
        }
        Ok(card.clone())
    }
}
