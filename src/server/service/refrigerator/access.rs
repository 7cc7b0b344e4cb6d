//! Role lookup for a user within a refrigerator.
//!
//! Every refrigerator-scoped operation resolves the caller's role here before touching data.
//! [`AccessGuard::check_access`] returns the tagged [`Access`] result, [`AccessGuard::role_of`]
//! and [`AccessGuard::require_superuser`] turn it into an error for callers that only
//! proceed when authorized.

use sea_orm::ConnectionTrait;

use crate::{
    model::refrigerator::Role,
    server::{
        data::{membership::MembershipRepository, user::UserRepository},
        error::{refrigerator::RefrigeratorError, Error},
        model::db::{MembershipModel, UserModel},
    },
};

/// Outcome of looking up a user's role in a refrigerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// The user is a member with this role
    Authorized(Role),
    /// The user exists but is not a member
    Unauthorized,
    /// No user has the given email
    UserNotFound,
}

/// Resolves roles using either a connection or an open transaction.
pub struct AccessGuard<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccessGuard<'a, C> {
    /// Creates a new instance of [`AccessGuard`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn check_access(&self, refrigerator_id: i32, email: &str) -> Result<Access, Error> {
        Ok(match self.membership(refrigerator_id, email).await? {
            None => Access::UserNotFound,
            Some((_, None)) => Access::Unauthorized,
            Some((_, Some(membership))) => Access::Authorized(membership.role.into()),
        })
    }

    /// Role of the user in the refrigerator.
    ///
    /// # Returns
    /// - `Ok(Role)` - Stored role of the member
    /// - `Err(RefrigeratorError::UserNotFound)` - No user has the email
    /// - `Err(RefrigeratorError::Unauthorized)` - The user is not a member
    pub async fn role_of(&self, refrigerator_id: i32, email: &str) -> Result<Role, Error> {
        match self.check_access(refrigerator_id, email).await? {
            Access::Authorized(role) => Ok(role),
            Access::Unauthorized => Err(RefrigeratorError::Unauthorized.into()),
            Access::UserNotFound => Err(RefrigeratorError::UserNotFound(email.to_string()).into()),
        }
    }

    /// Like [`Self::role_of`] but a `USER` role is also `Unauthorized`.
    pub async fn require_superuser(&self, refrigerator_id: i32, email: &str) -> Result<(), Error> {
        match self.role_of(refrigerator_id, email).await? {
            Role::Superuser => Ok(()),
            Role::User => Err(RefrigeratorError::Unauthorized.into()),
        }
    }

    /// The user with `email` and their membership in the refrigerator, `None` if the user is unknown.
    pub async fn membership(
        &self,
        refrigerator_id: i32,
        email: &str,
    ) -> Result<Option<(UserModel, Option<MembershipModel>)>, Error> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Ok(None);
        };

        let membership = MembershipRepository::new(self.db)
            .find(refrigerator_id, user.id)
            .await?;

        Ok(Some((user, membership)))
    }
}
