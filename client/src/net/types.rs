//! Wire DTOs for the studio REST API.
//!
//! DESIGN
//! ======
//! Field names follow the API's JSON, which is camel case except for the
//! session's `teacher_id`. Timestamps stay as the strings the API sent; only
//! the calendar date is ever interpreted (see `util::date`), and the API mixes
//! offset and offset-less forms.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Identity and credential record returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInformation {
    /// Opaque bearer credential.
    pub token: String,
    /// Credential type as reported by the API (usually `"Bearer"`).
    #[serde(rename = "type")]
    pub token_type: String,
    /// Authenticated user id.
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub id: u64,
    /// Login name (the user's e-mail).
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Admins may create, edit and delete sessions.
    pub admin: bool,
}

/// Body of `POST api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// A studio account as returned by `GET api/user/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
    /// Never populated by a well-behaved API; kept so replies echoing it still decode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A yoga teacher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Teacher {
    /// `"Margot DELAHAYE"`: first name, then last name upper-cased.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name.to_uppercase())
    }
}

/// A yoga session (class) with its participants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub description: String,
    /// Session date as sent by the API.
    pub date: String,
    #[serde(rename = "teacher_id", deserialize_with = "deserialize_u64_from_number")]
    pub teacher_id: u64,
    /// Ids of participating users.
    #[serde(default)]
    pub users: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Session {
    /// Whether `user_id` is signed up for this session.
    pub fn has_participant(&self, user_id: u64) -> bool {
        self.users.contains(&user_id)
    }
}

/// Body of `POST api/session` and `PUT api/session/{id}`: the editable fields
/// of a session as the session form submits them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDraft {
    pub name: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub teacher_id: u64,
    pub description: String,
}

fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        // Route params and some fixtures carry ids as strings.
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom(format!("invalid id {raw:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// The canonical fixture user from the holder's behavior tests.
    #[must_use]
    pub fn randy_horton() -> SessionInformation {
        SessionInformation {
            token: "jwt".into(),
            token_type: "user".into(),
            id: 1,
            username: "RandyHorton".into(),
            first_name: "Randy".into(),
            last_name: "Horton".into(),
            admin: true,
        }
    }

    #[must_use]
    pub fn session_info(id: u64, admin: bool) -> SessionInformation {
        SessionInformation {
            token: format!("token-{id}"),
            token_type: "Bearer".into(),
            id,
            username: format!("user{id}@studio.com"),
            first_name: "Jack".into(),
            last_name: "Sparrow".into(),
            admin,
        }
    }

    #[must_use]
    pub fn user(id: u64, admin: bool) -> User {
        User {
            id,
            email: "fake@user.com".into(),
            first_name: "Fake".into(),
            last_name: "User".into(),
            admin,
            password: None,
            created_at: Some("2025-06-26T10:00:00".into()),
            updated_at: Some("2025-07-06T18:30:00".into()),
        }
    }

    #[must_use]
    pub fn teacher(id: u64) -> Teacher {
        Teacher {
            id,
            first_name: "Margot".into(),
            last_name: "Delahaye".into(),
            created_at: None,
            updated_at: None,
        }
    }

    #[must_use]
    pub fn yoga_session(id: u64, teacher_id: u64, users: Vec<u64>) -> Session {
        Session {
            id: Some(id),
            name: format!("Session {id}"),
            description: "Session de yoga".into(),
            date: "2025-06-27T00:00:00.000+00:00".into(),
            teacher_id,
            users,
            created_at: Some("2025-06-20T19:45:51".into()),
            updated_at: Some("2025-06-20T19:45:51".into()),
        }
    }
}
