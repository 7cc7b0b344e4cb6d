//! Membership management for refrigerators.
//!
//! Adding members and changing roles require a `SUPERUSER`. Any member may remove
//! themselves, only a `SUPERUSER` may remove someone else. Removing or demoting a
//! `SUPERUSER` is refused while it would leave the other members without one.

use entity::sea_orm_active_enums::RefrigeratorRole;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::refrigerator::{MemberDto, MemberRequest, RemoveMemberRequest, Role},
    server::{
        data::{membership::MembershipRepository, user::UserRepository},
        error::{refrigerator::RefrigeratorError, Error},
        model::db::{MembershipModel, UserModel},
        service::refrigerator::{access::AccessGuard, delete_refrigerator_rows},
    },
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    /// Creates a new instance of [`MemberService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a registered user to a refrigerator with the requested role.
    ///
    /// # Returns
    /// - `Ok(MemberDto)` - Membership created
    /// - `Err(RefrigeratorError::Unauthorized)` - Caller is not a `SUPERUSER`
    /// - `Err(RefrigeratorError::UserNotFound)` - No user has the requested email
    /// - `Err(RefrigeratorError::MemberAlreadyExists)` - User is already a member
    pub async fn add_member(&self, request: MemberRequest, caller: &str) -> Result<MemberDto, Error> {
        let txn = self.db.begin().await?;

        AccessGuard::new(&txn)
            .require_superuser(request.refrigerator_id, caller)
            .await?;

        let Some(user) = UserRepository::new(&txn)
            .find_by_email(&request.user_name)
            .await?
        else {
            return Err(RefrigeratorError::UserNotFound(request.user_name).into());
        };

        let membership_repo = MembershipRepository::new(&txn);
        if membership_repo
            .find(request.refrigerator_id, user.id)
            .await?
            .is_some()
        {
            return Err(RefrigeratorError::MemberAlreadyExists {
                refrigerator_id: request.refrigerator_id,
                email: request.user_name,
            }
            .into());
        }

        let membership = membership_repo
            .create(request.refrigerator_id, user.id, request.role.into())
            .await?;

        txn.commit().await?;

        tracing::info!(
            refrigerator_id = %membership.refrigerator_id,
            user_id = %user.id,
            "Added member to refrigerator"
        );

        Ok(member_dto(membership, user))
    }

    /// Changes the role of an existing member.
    ///
    /// Demoting the last `SUPERUSER` while other members remain fails with
    /// `RefrigeratorError::LastSuperuser` and leaves the membership unchanged. A sole member
    /// may demote themselves.
    pub async fn set_role(&self, request: MemberRequest, caller: &str) -> Result<MemberDto, Error> {
        let txn = self.db.begin().await?;

        AccessGuard::new(&txn)
            .require_superuser(request.refrigerator_id, caller)
            .await?;

        let (user, membership) =
            find_member(&txn, request.refrigerator_id, &request.user_name).await?;

        let membership_repo = MembershipRepository::new(&txn);
        let member_count = membership_repo
            .count_by_refrigerator_id(request.refrigerator_id)
            .await?;

        if membership.role == RefrigeratorRole::Superuser
            && request.role == Role::User
            && member_count > 1
            && membership_repo
                .count_other_superusers(request.refrigerator_id, membership.id)
                .await?
                == 0
        {
            return Err(RefrigeratorError::LastSuperuser(request.refrigerator_id).into());
        }

        let membership = membership_repo
            .update_role(membership, request.role.into())
            .await?;

        txn.commit().await?;

        Ok(member_dto(membership, user))
    }

    /// Removes a member from a refrigerator.
    ///
    /// When the removed member was the only one left the refrigerator is deleted as well.
    ///
    /// # Returns
    /// - `Ok(())` - Membership removed
    /// - `Err(RefrigeratorError::Unauthorized)` - Caller is neither the member nor a `SUPERUSER`
    /// - `Err(RefrigeratorError::MemberNotFound)` - User is not a member
    /// - `Err(RefrigeratorError::LastSuperuser)` - Removal would leave other members without a `SUPERUSER`
    pub async fn remove_member(&self, request: RemoveMemberRequest, caller: &str) -> Result<(), Error> {
        let refrigerator_id = request.refrigerator_id;
        let txn = self.db.begin().await?;

        let guard = AccessGuard::new(&txn);
        if request.user_name == caller {
            guard.role_of(refrigerator_id, caller).await?;
        } else {
            guard.require_superuser(refrigerator_id, caller).await?;
        }

        let (user, membership) = find_member(&txn, refrigerator_id, &request.user_name).await?;

        let membership_repo = MembershipRepository::new(&txn);
        let member_count = membership_repo
            .count_by_refrigerator_id(refrigerator_id)
            .await?;

        if membership.role == RefrigeratorRole::Superuser
            && member_count > 1
            && membership_repo
                .count_other_superusers(refrigerator_id, membership.id)
                .await?
                == 0
        {
            return Err(RefrigeratorError::LastSuperuser(refrigerator_id).into());
        }

        if member_count == 1 {
            delete_refrigerator_rows(&txn, refrigerator_id).await?;
        } else {
            membership_repo.delete(membership.id).await?;
        }

        txn.commit().await?;

        tracing::info!(
            refrigerator_id = %refrigerator_id,
            user_id = %user.id,
            refrigerator_deleted = member_count == 1,
            "Removed member from refrigerator"
        );

        Ok(())
    }
}

async fn find_member(
    txn: &DatabaseTransaction,
    refrigerator_id: i32,
    email: &str,
) -> Result<(UserModel, MembershipModel), Error> {
    match AccessGuard::new(txn).membership(refrigerator_id, email).await? {
        Some((user, Some(membership))) => Ok((user, membership)),
        Some((_, None)) => Err(RefrigeratorError::MemberNotFound {
            refrigerator_id,
            email: email.to_string(),
        }
        .into()),
        None => Err(RefrigeratorError::UserNotFound(email.to_string()).into()),
    }
}

fn member_dto(membership: MembershipModel, user: UserModel) -> MemberDto {
    MemberDto {
        refrigerator_id: membership.refrigerator_id,
        username: user.email,
        name: user.name,
        role: membership.role.into(),
    }
}
