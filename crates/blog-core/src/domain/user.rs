use serde::{Deserialize, Serialize};

use super::Keyed;

/// User entity - an author, identified by login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub firstname: String,
    pub lastname: String,
    pub description: Option<String>,
}

impl User {
    /// Create a new user without a description.
    pub fn new(
        login: impl Into<String>,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            firstname: firstname.into(),
            lastname: lastname.into(),
            description: None,
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }
}

impl Keyed for User {
    fn key(&self) -> &str {
        &self.login
    }
}
