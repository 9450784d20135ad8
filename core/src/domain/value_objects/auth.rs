//! Authentication payloads.

use bk_shared::utils::validation::{validators, Validate, ValidationErrors};
use serde::Serialize;
use std::fmt;

use crate::domain::entities::user::{Role, User};

pub const MIN_PASSWORD_CHARS: usize = 6;

/// Body of `POST /login`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validators::not_blank(&self.email), "email", "Email wajib diisi");
        errors.check(validators::not_blank(&self.password), "password", "Password wajib diisi");
        errors.into_result()
    }
}

/// Body of `POST /register`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "alamat")]
    pub address: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    #[serde(rename = "no_telp")]
    pub phone: String,
    pub role: Role,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validators::not_blank(&self.name), "nama", "Nama wajib diisi");
        errors.check(validators::not_blank(&self.address), "alamat", "Alamat wajib diisi");
        errors.check(validators::is_valid_email(&self.email), "email", "Format email tidak valid");
        errors.check(
            validators::min_chars(&self.password, MIN_PASSWORD_CHARS),
            "password",
            "Password minimal 6 karakter",
        );
        errors.check(
            self.password == self.password_confirmation,
            "password_confirmation",
            "Konfirmasi password tidak sama",
        );
        errors.check(validators::not_blank(&self.phone), "no_telp", "Nomor telepon wajib diisi");
        errors.check(
            self.role.can_self_register(),
            "role",
            "Pendaftaran hanya untuk pelanggan atau bengkel",
        );
        errors.into_result()
    }
}

/// Body of the profile update form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "alamat")]
    pub address: String,
    #[serde(rename = "no_telp")]
    pub phone: String,
}

impl Validate for ProfileUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validators::not_blank(&self.name), "nama", "Nama wajib diisi");
        errors.check(validators::not_blank(&self.address), "alamat", "Alamat wajib diisi");
        errors.check(validators::not_blank(&self.phone), "no_telp", "Nomor telepon wajib diisi");
        errors.into_result()
    }
}

/// Body of the change-password form
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct PasswordChange {
    #[serde(rename = "password_lama")]
    pub current_password: String,
    #[serde(rename = "password_baru")]
    pub new_password: String,
    #[serde(rename = "password_baru_confirmation")]
    pub new_password_confirmation: String,
}

impl fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordChange { .. }")
    }
}

impl Validate for PasswordChange {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(
            validators::not_blank(&self.current_password),
            "password_lama",
            "Password lama wajib diisi",
        );
        errors.check(
            validators::min_chars(&self.new_password, MIN_PASSWORD_CHARS),
            "password_baru",
            "Password baru minimal 6 karakter",
        );
        errors.check(
            self.new_password == self.new_password_confirmation,
            "password_baru_confirmation",
            "Konfirmasi password tidak sama",
        );
        errors.into_result()
    }
}

/// Successful login or registration
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub user: User,
    /// Bearer token, when the server issued one
    pub token: Option<String>,
    pub message: Option<String>,
}
