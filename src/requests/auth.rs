//! Request bodies for `/Auth/*` operations.
use serde::Serialize;

/// Credentials for login. Also the body of `/Auth/ResetPassword`, where the
/// backend ignores the password and only sends a verification code.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Direct sign-up, without a verification code.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign-up confirmation with the emailed verification code.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub verify_code: String,
}

/// Password change with the emailed verification code.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PasswordUpdate {
    pub email: String,
    pub password: String,
    pub verify_code: String,
}
