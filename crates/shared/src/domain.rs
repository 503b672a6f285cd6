use serde::{Deserialize, Serialize};

/// Raw submit input. Held only for the duration of one login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
}

/// Authenticated state plus the associated profile. A profile exists exactly
/// when the session is authenticated, so the pairing is carried by the enum
/// rather than checked at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(UserProfile),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::LoggedOut => None,
            Self::LoggedIn(profile) => Some(profile),
        }
    }
}
