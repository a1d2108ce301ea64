use crate::models::models::{KnownUser, User};

/// Local part of an email address, or the whole string if it has no `@`.
pub fn username_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

impl KnownUser {
    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
        }
    }
}

/// Read-only credential lookup fixed at startup.
#[derive(Debug, Clone, Default)]
pub struct KnownUsers {
    users: Vec<KnownUser>,
}

impl KnownUsers {
    pub fn new(users: Vec<KnownUser>) -> Self {
        Self { users }
    }

    pub fn find_by_credentials(&self, email: &str, password: &str) -> Option<&KnownUser> {
        self.users
            .iter()
            .find(|u| u.email == email && u.password == password)
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email == email)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.users.iter().map(|u| u.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
