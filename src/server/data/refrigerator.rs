use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::db::RefrigeratorModel;

pub struct RefrigeratorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RefrigeratorRepository<'a, C> {
    /// Creates a new instance of [`RefrigeratorRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        address: Option<String>,
    ) -> Result<RefrigeratorModel, DbErr> {
        let refrigerator = entity::refrigerator::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            address: ActiveValue::Set(address),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        refrigerator.insert(self.db).await
    }

    pub async fn find_by_id(&self, refrigerator_id: i32) -> Result<Option<RefrigeratorModel>, DbErr> {
        entity::prelude::Refrigerator::find_by_id(refrigerator_id)
            .one(self.db)
            .await
    }

    /// Gets every refrigerator the user is a member of, oldest first
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<RefrigeratorModel>, DbErr> {
        entity::prelude::Refrigerator::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::refrigerator::Relation::RefrigeratorUser.def(),
            )
            .filter(entity::refrigerator_user::Column::UserId.eq(user_id))
            .order_by_asc(entity::refrigerator::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes the refrigerator row only
    ///
    /// Rows referencing the refrigerator must be deleted first, see
    /// [`RefrigeratorService::force_delete`](crate::server::service::refrigerator::RefrigeratorService::force_delete).
    pub async fn delete(&self, refrigerator_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Refrigerator::delete_by_id(refrigerator_id)
            .exec(self.db)
            .await
    }
}
