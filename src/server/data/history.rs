use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

use crate::server::model::db::GroceryHistoryModel;

pub struct GroceryHistoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroceryHistoryRepository<'a, C> {
    /// Creates a new instance of [`GroceryHistoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        refrigerator_id: i32,
        date_consumed: NaiveDate,
        weight_in_grams: i32,
        was_trashed: bool,
    ) -> Result<GroceryHistoryModel, DbErr> {
        let history = entity::grocery_history::ActiveModel {
            refrigerator_id: ActiveValue::Set(refrigerator_id),
            date_consumed: ActiveValue::Set(date_consumed),
            weight_in_grams: ActiveValue::Set(weight_in_grams),
            was_trashed: ActiveValue::Set(was_trashed),
            ..Default::default()
        };

        history.insert(self.db).await
    }

    /// Gets the history of a refrigerator consumed between `first` and `last`, both inclusive
    pub async fn find_in_range(
        &self,
        refrigerator_id: i32,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<Vec<GroceryHistoryModel>, DbErr> {
        entity::prelude::GroceryHistory::find()
            .filter(entity::grocery_history::Column::RefrigeratorId.eq(refrigerator_id))
            .filter(entity::grocery_history::Column::DateConsumed.between(first, last))
            .all(self.db)
            .await
    }

    /// Deletes history of every refrigerator consumed strictly before `threshold`
    pub async fn delete_older_than(&self, threshold: NaiveDate) -> Result<DeleteResult, DbErr> {
        entity::prelude::GroceryHistory::delete_many()
            .filter(entity::grocery_history::Column::DateConsumed.lt(threshold))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_refrigerator_id(&self, refrigerator_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::GroceryHistory::delete_many()
            .filter(entity::grocery_history::Column::RefrigeratorId.eq(refrigerator_id))
            .exec(self.db)
            .await
    }
}
