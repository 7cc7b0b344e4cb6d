//! Registration, login and bearer token handling.

pub mod password;
pub mod token;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{AuthenticationRequest, AuthenticationResponse, RegisterRequest},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, validation::ValidationError, Error},
        model::app::JwtConfig,
        service::auth::{
            password::{hash_password, verify_password},
            token::issue_token,
        },
    },
};

/// Minimum number of characters accepted for a new password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtConfig,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtConfig) -> Self {
        Self { db, jwt }
    }

    /// Registers a new user and returns a token for them.
    ///
    /// # Returns
    /// - `Ok(AuthenticationResponse)` - User created, token issued for their email
    /// - `Err(Error::ValidationError)` - Empty email or name, or password too short
    /// - `Err(Error::AuthError(AuthError::EmailAlreadyInUse))` - Email already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthenticationResponse, Error> {
        let email = request.email.trim();
        let name = request.name.trim();

        let mut validation = ValidationError::new();
        if email.is_empty() || !email.contains('@') {
            validation.add("email", "must be a valid email address");
        }
        if name.is_empty() {
            validation.add("name", "must not be empty");
        }
        if request.password.chars().count() < MIN_PASSWORD_LENGTH {
            validation.add("password", "must be at least 8 characters");
        }
        validation.into_result()?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailAlreadyInUse(email.to_string()).into());
        }

        let password_hash = hash_password(&request.password)?;
        let user = user_repo.create(email, name, password_hash).await?;

        tracing::info!(user_id = %user.id, "Registered new user");

        Ok(AuthenticationResponse {
            token: issue_token(self.jwt, &user.email)?,
        })
    }

    /// Checks credentials and returns a fresh token.
    ///
    /// Unknown emails and wrong passwords both return `AuthError::InvalidCredentials`.
    pub async fn authenticate(
        &self,
        request: AuthenticationRequest,
    ) -> Result<AuthenticationResponse, Error> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(request.email.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        verify_password(&request.password, &user.password)?;

        Ok(AuthenticationResponse {
            token: issue_token(self.jwt, &user.email)?,
        })
    }
}
