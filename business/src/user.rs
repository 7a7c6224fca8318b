//! User records as returned by the random user service.
//!
//! Only the fields the list shows are modelled; serde ignores the rest of the payload.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique per user; used as row identity and as the delete key.
    pub email: String,
    pub name: Name,
    pub location: Location,
    pub picture: Picture,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
}

/// Body of `GET <api>?results=N`. Only `results` is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomUsersResponse {
    pub results: Vec<User>,
}

impl User {
    /// Builds a user with just the fields the list needs.
    pub fn new(
        email: impl Into<String>,
        first: impl Into<String>,
        last: impl Into<String>,
        country: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: Name {
                title: None,
                first: first.into(),
                last: last.into(),
            },
            location: Location {
                country: country.into(),
            },
            picture: Picture {
                thumbnail: thumbnail.into(),
                medium: None,
                large: None,
            },
        }
    }
}
