use crate::models::blood_bank::BloodBank;
use crate::models::user::UserRecord;
use serde::{Deserialize, Serialize};

/// Registration form body. Every field defaults to empty so that a missing
/// field is reported as a validation error instead of a rejected body.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub blood_group: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DirectoryQuery {
    pub blood_group: Option<String>,
    pub area: Option<String>,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user: UserRecord,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub username: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub username: String,
    pub name: String,
    pub expires_at: i64,
}

#[derive(Serialize)]
pub struct DirectoryResponse {
    pub success: bool,
    pub count: usize,
    pub banks: Vec<BloodBank>,
}

#[derive(Serialize)]
pub struct AreaListResponse {
    pub success: bool,
    pub areas: Vec<&'static str>,
}
