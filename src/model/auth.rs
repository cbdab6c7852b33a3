use serde::{Deserialize, Serialize};

/// Signed-in user as reported by the authentication provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUserDto {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Body of `GET /api/auth/get-session`; the provider answers `null` when
/// there is no session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDto {
    pub user: SessionUserDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpDto {
    pub name: String,
    pub email: String,
    pub password: String,
}
