use chrono::Utc;
use entity::sea_orm_active_enums::RefrigeratorRole;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{MembershipModel, RefrigeratorModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn refrigerator<'a>(&'a self) -> RefrigeratorFixtures<'a> {
        RefrigeratorFixtures { setup: self }
    }
}

pub struct RefrigeratorFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> RefrigeratorFixtures<'a> {
    pub async fn insert_refrigerator(&self, name: &str) -> Result<RefrigeratorModel, TestError> {
        Ok(
            entity::prelude::Refrigerator::insert(entity::refrigerator::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                address: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_membership(
        &self,
        refrigerator_id: i32,
        user_id: i32,
        role: RefrigeratorRole,
    ) -> Result<MembershipModel, TestError> {
        Ok(
            entity::prelude::RefrigeratorUser::insert(entity::refrigerator_user::ActiveModel {
                refrigerator_id: ActiveValue::Set(refrigerator_id),
                user_id: ActiveValue::Set(user_id),
                role: ActiveValue::Set(role),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a refrigerator owned by a newly inserted superuser.
    pub async fn insert_refrigerator_with_superuser(
        &self,
        email: &str,
    ) -> Result<(RefrigeratorModel, UserModel, MembershipModel), TestError> {
        let refrigerator = self.insert_refrigerator("Kitchen").await?;
        let user = self.setup.user().insert_user(email).await?;
        let membership = self
            .insert_membership(refrigerator.id, user.id, RefrigeratorRole::Superuser)
            .await?;

        Ok((refrigerator, user, membership))
    }

    /// Insert a new user and add them to an existing refrigerator.
    pub async fn insert_member(
        &self,
        refrigerator_id: i32,
        email: &str,
        role: RefrigeratorRole,
    ) -> Result<(UserModel, MembershipModel), TestError> {
        let user = self.setup.user().insert_user(email).await?;
        let membership = self
            .insert_membership(refrigerator_id, user.id, role)
            .await?;

        Ok((user, membership))
    }
}
