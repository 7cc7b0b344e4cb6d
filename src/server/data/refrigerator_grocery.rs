use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::RefrigeratorGroceryModel;

pub struct RefrigeratorGroceryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RefrigeratorGroceryRepository<'a, C> {
    /// Creates a new instance of [`RefrigeratorGroceryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        refrigerator_id: i32,
        grocery_id: i32,
        unit_id: i32,
        quantity: i32,
        physical_expire_date: NaiveDate,
    ) -> Result<RefrigeratorGroceryModel, DbErr> {
        let refrigerator_grocery = entity::refrigerator_grocery::ActiveModel {
            refrigerator_id: ActiveValue::Set(refrigerator_id),
            grocery_id: ActiveValue::Set(grocery_id),
            unit_id: ActiveValue::Set(unit_id),
            quantity: ActiveValue::Set(quantity),
            physical_expire_date: ActiveValue::Set(physical_expire_date),
            ..Default::default()
        };

        refrigerator_grocery.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<RefrigeratorGroceryModel>, DbErr> {
        entity::prelude::RefrigeratorGrocery::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets the groceries of a refrigerator, soonest expiring first
    pub async fn find_by_refrigerator_id(
        &self,
        refrigerator_id: i32,
    ) -> Result<Vec<RefrigeratorGroceryModel>, DbErr> {
        entity::prelude::RefrigeratorGrocery::find()
            .filter(entity::refrigerator_grocery::Column::RefrigeratorId.eq(refrigerator_id))
            .order_by_asc(entity::refrigerator_grocery::Column::PhysicalExpireDate)
            .order_by_asc(entity::refrigerator_grocery::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        refrigerator_grocery: RefrigeratorGroceryModel,
        unit_id: i32,
        quantity: i32,
        physical_expire_date: NaiveDate,
    ) -> Result<RefrigeratorGroceryModel, DbErr> {
        let mut refrigerator_grocery_am = refrigerator_grocery.into_active_model();
        refrigerator_grocery_am.unit_id = ActiveValue::Set(unit_id);
        refrigerator_grocery_am.quantity = ActiveValue::Set(quantity);
        refrigerator_grocery_am.physical_expire_date = ActiveValue::Set(physical_expire_date);

        refrigerator_grocery_am.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::RefrigeratorGrocery::delete_by_id(id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_refrigerator_id(&self, refrigerator_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::RefrigeratorGrocery::delete_many()
            .filter(entity::refrigerator_grocery::Column::RefrigeratorId.eq(refrigerator_id))
            .exec(self.db)
            .await
    }
}
