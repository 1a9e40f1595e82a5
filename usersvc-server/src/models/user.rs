//! User record and request payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Persisted user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub city: String,
    pub language: String,
}

/// Body of `POST /api/users` and `PUT /api/users/{id}`.
///
/// Absent fields stay `None` and are bound as SQL `NULL`, so an incomplete
/// body is rejected by the `NOT NULL` columns rather than by the handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub language: Option<String>,
}

impl UserPayload {
    /// Build a payload with every field set.
    pub fn complete(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
        city: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            firstname: Some(firstname.into()),
            lastname: Some(lastname.into()),
            email: Some(email.into()),
            city: Some(city.into()),
            language: Some(language.into()),
        }
    }

    /// Name of the first absent field, in column order.
    pub fn first_missing(&self) -> Option<&'static str> {
        [
            ("firstname", &self.firstname),
            ("lastname", &self.lastname),
            ("email", &self.email),
            ("city", &self.city),
            ("language", &self.language),
        ]
        .into_iter()
        .find_map(|(name, value)| value.is_none().then_some(name))
    }

    /// Attach an id, yielding the stored record.
    ///
    /// Returns the first missing field name when the payload is incomplete.
    pub fn into_user(self, id: i64) -> Result<User, &'static str> {
        if let Some(field) = self.first_missing() {
            return Err(field);
        }

        Ok(User {
            id,
            firstname: self.firstname.unwrap_or_default(),
            lastname: self.lastname.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            language: self.language.unwrap_or_default(),
        })
    }
}
