//! Refrigerator service layer.
//!
//! Covers creating, listing and deleting refrigerators. Membership changes live in
//! [`member`] and role lookups in [`access`].

pub mod access;
pub mod member;

#[cfg(test)]
mod tests;

use entity::sea_orm_active_enums::RefrigeratorRole;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::refrigerator::{MemberDto, RefrigeratorDto, RefrigeratorRequest, RefrigeratorSummaryDto},
    server::{
        data::{
            history::GroceryHistoryRepository, membership::MembershipRepository,
            refrigerator::RefrigeratorRepository,
            refrigerator_grocery::RefrigeratorGroceryRepository,
            shopping_list::ShoppingListRepository, user::UserRepository,
        },
        error::{refrigerator::RefrigeratorError, validation::ValidationError, Error},
        model::db::RefrigeratorModel,
        service::refrigerator::access::AccessGuard,
    },
};

pub struct RefrigeratorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RefrigeratorService<'a> {
    /// Creates a new instance of [`RefrigeratorService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a refrigerator with the caller as its first `SUPERUSER`.
    ///
    /// # Returns
    /// - `Ok(RefrigeratorSummaryDto)` - Refrigerator and membership created
    /// - `Err(Error::ValidationError)` - Empty name
    /// - `Err(RefrigeratorError::UserNotFound)` - Caller's email is not registered
    /// - `Err(RefrigeratorError::SaveFailure)` - Refrigerator could not be stored
    pub async fn create(
        &self,
        request: RefrigeratorRequest,
        email: &str,
    ) -> Result<RefrigeratorSummaryDto, Error> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(ValidationError::field("name", "must not be empty").into());
        }

        let txn = self.db.begin().await?;

        let Some(user) = UserRepository::new(&txn).find_by_email(email).await? else {
            return Err(RefrigeratorError::UserNotFound(email.to_string()).into());
        };

        let address = request
            .address
            .map(|address| address.trim().to_string())
            .filter(|address| !address.is_empty());

        let refrigerator = RefrigeratorRepository::new(&txn)
            .create(name, address)
            .await
            .map_err(|e| save_failure("Failed to create refrigerator", e))?;
        MembershipRepository::new(&txn)
            .create(refrigerator.id, user.id, RefrigeratorRole::Superuser)
            .await
            .map_err(|e| save_failure("Failed to create refrigerator", e))?;

        txn.commit().await?;

        tracing::info!(refrigerator_id = %refrigerator.id, user_id = %user.id, "Created refrigerator");

        Ok(summary(refrigerator))
    }

    /// Gets a refrigerator with its members.
    pub async fn get_refrigerator(&self, refrigerator_id: i32) -> Result<RefrigeratorDto, Error> {
        let Some(refrigerator) = RefrigeratorRepository::new(self.db)
            .find_by_id(refrigerator_id)
            .await?
        else {
            return Err(RefrigeratorError::NotFound(refrigerator_id).into());
        };

        let members = MembershipRepository::new(self.db)
            .find_by_refrigerator_id(refrigerator_id)
            .await?
            .into_iter()
            .filter_map(|(membership, user)| {
                user.map(|user| MemberDto {
                    refrigerator_id: membership.refrigerator_id,
                    username: user.email,
                    name: user.name,
                    role: membership.role.into(),
                })
            })
            .collect();

        Ok(RefrigeratorDto {
            id: refrigerator.id,
            name: refrigerator.name,
            address: refrigerator.address,
            members,
        })
    }

    /// Gets every refrigerator the user is a member of.
    ///
    /// Returns `RefrigeratorError::UserNotFound` if no user has the email.
    pub async fn get_all_by_user(&self, email: &str) -> Result<Vec<RefrigeratorSummaryDto>, Error> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Err(RefrigeratorError::UserNotFound(email.to_string()).into());
        };

        let refrigerators = RefrigeratorRepository::new(self.db)
            .find_by_user_id(user.id)
            .await?;

        Ok(refrigerators.into_iter().map(summary).collect())
    }

    /// Deletes a refrigerator and everything stored for it.
    ///
    /// Only a `SUPERUSER` of the refrigerator may do this, regardless of other members.
    ///
    /// # Returns
    /// - `Ok(())` - Refrigerator and all dependent rows removed
    /// - `Err(RefrigeratorError::NotFound)` - Refrigerator does not exist
    /// - `Err(RefrigeratorError::Unauthorized)` - Caller is not a `SUPERUSER` of it
    /// - `Err(RefrigeratorError::UserNotFound)` - Caller's email is not registered
    pub async fn force_delete(&self, refrigerator_id: i32, email: &str) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        if RefrigeratorRepository::new(&txn)
            .find_by_id(refrigerator_id)
            .await?
            .is_none()
        {
            return Err(RefrigeratorError::NotFound(refrigerator_id).into());
        }

        AccessGuard::new(&txn)
            .require_superuser(refrigerator_id, email)
            .await?;

        delete_refrigerator_rows(&txn, refrigerator_id).await?;

        txn.commit().await?;

        tracing::info!(refrigerator_id = %refrigerator_id, "Deleted refrigerator");

        Ok(())
    }
}

/// Deletes a refrigerator after the rows referencing it, children first.
pub(crate) async fn delete_refrigerator_rows<C: ConnectionTrait>(
    db: &C,
    refrigerator_id: i32,
) -> Result<(), DbErr> {
    ShoppingListRepository::new(db)
        .delete_by_refrigerator_id(refrigerator_id)
        .await?;
    RefrigeratorGroceryRepository::new(db)
        .delete_by_refrigerator_id(refrigerator_id)
        .await?;
    GroceryHistoryRepository::new(db)
        .delete_by_refrigerator_id(refrigerator_id)
        .await?;
    MembershipRepository::new(db)
        .delete_by_refrigerator_id(refrigerator_id)
        .await?;
    RefrigeratorRepository::new(db).delete(refrigerator_id).await?;

    Ok(())
}

fn summary(refrigerator: RefrigeratorModel) -> RefrigeratorSummaryDto {
    RefrigeratorSummaryDto {
        id: refrigerator.id,
        name: refrigerator.name,
        address: refrigerator.address,
        created_at: refrigerator.created_at,
    }
}

fn save_failure(message: &str, err: DbErr) -> Error {
    tracing::error!("{}: {}", message, err);

    RefrigeratorError::SaveFailure(message.to_string()).into()
}
