//! Wire types shared with the backend API.

use serde::{Deserialize, Serialize};

/// Authenticated user identity, as returned by `GET /me`.
///
/// Owned by the session store once authenticated; cleared on logout or
/// auth failure. Not validated beyond being present/absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Success body of `POST /users/login`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Success body of `POST /users/register` and `POST /me/logout`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Best-effort shape of a non-2xx response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
