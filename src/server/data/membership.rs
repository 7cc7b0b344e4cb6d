use entity::sea_orm_active_enums::RefrigeratorRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::{MembershipModel, UserModel};

pub struct MembershipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MembershipRepository<'a, C> {
    /// Creates a new instance of [`MembershipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        refrigerator_id: i32,
        user_id: i32,
        role: RefrigeratorRole,
    ) -> Result<MembershipModel, DbErr> {
        let membership = entity::refrigerator_user::ActiveModel {
            refrigerator_id: ActiveValue::Set(refrigerator_id),
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role),
            ..Default::default()
        };

        membership.insert(self.db).await
    }

    /// Gets the membership of a user in a refrigerator, if any
    pub async fn find(
        &self,
        refrigerator_id: i32,
        user_id: i32,
    ) -> Result<Option<MembershipModel>, DbErr> {
        entity::prelude::RefrigeratorUser::find()
            .filter(entity::refrigerator_user::Column::RefrigeratorId.eq(refrigerator_id))
            .filter(entity::refrigerator_user::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets every membership of a refrigerator along with the member's user entry
    pub async fn find_by_refrigerator_id(
        &self,
        refrigerator_id: i32,
    ) -> Result<Vec<(MembershipModel, Option<UserModel>)>, DbErr> {
        entity::prelude::RefrigeratorUser::find()
            .filter(entity::refrigerator_user::Column::RefrigeratorId.eq(refrigerator_id))
            .order_by_asc(entity::refrigerator_user::Column::Id)
            .find_also_related(entity::app_user::Entity)
            .all(self.db)
            .await
    }

    pub async fn count_by_refrigerator_id(&self, refrigerator_id: i32) -> Result<u64, DbErr> {
        entity::prelude::RefrigeratorUser::find()
            .filter(entity::refrigerator_user::Column::RefrigeratorId.eq(refrigerator_id))
            .count(self.db)
            .await
    }

    /// Counts `SUPERUSER` memberships of a refrigerator other than `excluded_membership_id`
    pub async fn count_other_superusers(
        &self,
        refrigerator_id: i32,
        excluded_membership_id: i32,
    ) -> Result<u64, DbErr> {
        entity::prelude::RefrigeratorUser::find()
            .filter(entity::refrigerator_user::Column::RefrigeratorId.eq(refrigerator_id))
            .filter(entity::refrigerator_user::Column::Role.eq(RefrigeratorRole::Superuser))
            .filter(entity::refrigerator_user::Column::Id.ne(excluded_membership_id))
            .count(self.db)
            .await
    }

    pub async fn update_role(
        &self,
        membership: MembershipModel,
        role: RefrigeratorRole,
    ) -> Result<MembershipModel, DbErr> {
        let mut membership_am = membership.into_active_model();
        membership_am.role = ActiveValue::Set(role);

        membership_am.update(self.db).await
    }

    /// Deletes a membership
    ///
    /// Returns OK regardless of the membership existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, membership_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::RefrigeratorUser::delete_by_id(membership_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_refrigerator_id(&self, refrigerator_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::RefrigeratorUser::delete_many()
            .filter(entity::refrigerator_user::Column::RefrigeratorId.eq(refrigerator_id))
            .exec(self.db)
            .await
    }
}
