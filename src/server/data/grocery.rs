use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::GroceryModel;

/// Repository for the grocery catalog shared by every refrigerator
pub struct GroceryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroceryRepository<'a, C> {
    /// Creates a new instance of [`GroceryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        description: Option<String>,
        grocery_expiry_days: i32,
        sub_category_id: i32,
    ) -> Result<GroceryModel, DbErr> {
        let grocery = entity::grocery::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description),
            grocery_expiry_days: ActiveValue::Set(grocery_expiry_days),
            sub_category_id: ActiveValue::Set(sub_category_id),
            ..Default::default()
        };

        grocery.insert(self.db).await
    }

    pub async fn find_all(&self) -> Result<Vec<GroceryModel>, DbErr> {
        entity::prelude::Grocery::find()
            .order_by_asc(entity::grocery::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, grocery_id: i32) -> Result<Option<GroceryModel>, DbErr> {
        entity::prelude::Grocery::find_by_id(grocery_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<GroceryModel>, DbErr> {
        entity::prelude::Grocery::find()
            .filter(entity::grocery::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<GroceryModel>, DbErr> {
        entity::prelude::Grocery::find()
            .filter(entity::grocery::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod find_by_name {
        use smartfridge_test_utils::prelude::*;

        use crate::server::data::grocery::GroceryRepository;

        /// Expect the catalog grocery with the exact name
        #[tokio::test]
        async fn finds_grocery_by_name() -> Result<(), TestError> {
            let test = TestBuilder::new().with_fridge_tables().build().await?;
            let (_, _, milk) = test.grocery().insert_mock_grocery("Milk").await?;

            let grocery_repo = GroceryRepository::new(&test.db);
            let result = grocery_repo.find_by_name("Milk").await?;

            assert_eq!(result.map(|g| g.id), Some(milk.id));

            Ok(())
        }

        /// Expect None for a name not in the catalog
        #[tokio::test]
        async fn returns_none_for_unknown_name() -> Result<(), TestError> {
            let test = TestBuilder::new().with_fridge_tables().build().await?;
            test.grocery().insert_mock_grocery("Milk").await?;

            let grocery_repo = GroceryRepository::new(&test.db);
            let result = grocery_repo.find_by_name("Butter").await?;

            assert!(result.is_none());

            Ok(())
        }
    }
}
