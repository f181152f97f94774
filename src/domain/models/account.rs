use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Value object representing a hashed password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Create a new HashedPassword from an already hashed string
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A registered player account
#[derive(Debug, Clone)]
pub struct Account {
    id: Uuid,
    name: String,
    password_hash: Option<HashedPassword>,
    email: Option<String>,
    registered_at: DateTime<Utc>,
    last_login: Option<DateTime<Utc>>,
}

impl Account {
    pub fn new(
        id: Uuid,
        name: String,
        password_hash: Option<HashedPassword>,
        email: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            password_hash,
            email,
            registered_at: Utc::now(),
            last_login: None,
        }
    }

    pub fn record_login(&mut self) {
        self.last_login = Some(Utc::now());
    }

    /// Lookup key; player names are case-insensitive
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// `None` for two-factor accounts
    pub fn password_hash(&self) -> Option<&HashedPassword> {
        self.password_hash.as_ref()
    }
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
    pub fn last_login(&self) -> Option<DateTime<Utc>> {
        self.last_login
    }
}

pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}
