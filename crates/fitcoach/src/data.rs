//! Wire data structures for the coaching service API and the secondary
//! sign-in service.

use serde::{Deserialize, Serialize};

/// Role assigned to every self-registered account.
pub const DEFAULT_ROLE: &str = "customer";

/// Credentials posted to `POST /login`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful `POST /login` response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub user_id: i64,
    pub role: String,
}

/// New-account payload for `POST /signup`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub role: String,
}

/// The server's view of an account, returned by `POST /signup` and
/// `GET /current_user`. The hashed password the server also sends is
/// deliberately not modeled.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub role: String,
    #[serde(default)]
    pub disabled: bool,
}

/// A bookable class from `GET /classes`. Times are the server's opaque
/// strings; the client renders them as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FitnessClass {
    pub class_id: Option<i64>,
    pub coach_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub class_type: String,
}

/// A user-to-class registration, posted to `POST /register` and listed by
/// `GET /registrations`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Registration {
    pub user_id: i64,
    pub class_id: i64,
}

/// Credentials for the secondary sign-in service's `POST /signin`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
}

/// Successful secondary `POST /signin` response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SigninResponse {
    pub token: String,
}
