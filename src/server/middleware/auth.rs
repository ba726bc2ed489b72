use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// Lifetime of tokens issued by `JwtManager::generate_token`.
pub const TOKEN_EXPIRATION_SECS: i64 = 60 * 60 * 24;

/// Caller role carried in the token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Reader,
    Creator,
    Admin,
}

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: Uuid,
    pub role: Role,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Authenticated caller resolved from a bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub id: Uuid,
    pub role: Role,
}

/// Issues and validates HS256 bearer tokens.
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_secs: i64,
}

impl JwtManager {
    /// Creates a manager signing with `secret`.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_secs: TOKEN_EXPIRATION_SECS,
        }
    }

    /// Signs a token for `user_id` acting as `role`.
    pub fn generate_token(&self, user_id: Uuid, role: Role) -> Result<String, AppError> {
        let claims = Claims {
            sub: user_id,
            role,
            exp: (Utc::now() + Duration::seconds(self.expiration_secs)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to generate token: {}", e)))
    }

    /// Validates signature and expiry, returning the decoded claims.
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

pub struct AuthGuard<'a> {
    jwt: &'a JwtManager,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(jwt: &'a JwtManager, headers: &'a HeaderMap) -> Self {
        Self { jwt, headers }
    }

    /// Authenticates the caller and checks its role against `roles`.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Caller holds one of the allowed roles
    /// - `Err(AppError::AuthErr(MissingToken | InvalidToken))` - No usable token (401)
    /// - `Err(AppError::AuthErr(AccessDenied))` - Role not allowed (403)
    pub fn require(&self, roles: &[Role]) -> Result<AuthUser, AppError> {
        let Some(token) = self
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
        else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.jwt.validate_token(token.trim())?;

        if !roles.contains(&claims.role) {
            return Err(AuthError::AccessDenied(
                claims.sub,
                format!("role {:?} not in {:?}", claims.role, roles),
            )
            .into());
        }

        Ok(AuthUser {
            id: claims.sub,
            role: claims.role,
        })
    }
}

/// Caller allowed to manage content: `Creator` or `Admin`.
///
/// Resolved from request parts, so placing it before body extractors makes
/// 401/403 win over malformed payloads.
#[derive(Debug, Clone, Copy)]
pub struct CreatorAccess(pub AuthUser);

impl FromRequestParts<AppState> for CreatorAccess {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthGuard::new(&state.jwt, &parts.headers)
            .require(&[Role::Creator, Role::Admin])
            .map(Self)
    }
}

/// Caller holding the `Admin` role.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess(pub AuthUser);

impl FromRequestParts<AppState> for AdminAccess {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthGuard::new(&state.jwt, &parts.headers)
            .require(&[Role::Admin])
            .map(Self)
    }
}
