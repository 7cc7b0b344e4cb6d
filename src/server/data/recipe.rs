use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::{RecipeGroceryModel, RecipeModel};

pub struct RecipeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeRepository<'a, C> {
    /// Creates a new instance of [`RecipeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str, url: Option<String>) -> Result<RecipeModel, DbErr> {
        let recipe = entity::recipe::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            url: ActiveValue::Set(url),
            ..Default::default()
        };

        recipe.insert(self.db).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<RecipeModel>, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<RecipeModel>, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::Id.is_in(ids))
            .order_by_asc(entity::recipe::Column::Id)
            .all(self.db)
            .await
    }
}

/// Ingredient rows linking recipes to catalog groceries.
pub struct RecipeGroceryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeGroceryRepository<'a, C> {
    /// Creates a new instance of [`RecipeGroceryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, recipe_id: i32, grocery_id: i32) -> Result<RecipeGroceryModel, DbErr> {
        let ingredient = entity::recipe_grocery::ActiveModel {
            recipe_id: ActiveValue::Set(recipe_id),
            grocery_id: ActiveValue::Set(grocery_id),
            ..Default::default()
        };

        ingredient.insert(self.db).await
    }

    pub async fn exists_by_recipe_and_grocery(
        &self,
        recipe_id: i32,
        grocery_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::RecipeGrocery::find()
            .filter(entity::recipe_grocery::Column::RecipeId.eq(recipe_id))
            .filter(entity::recipe_grocery::Column::GroceryId.eq(grocery_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Ingredient rows whose grocery is one of `grocery_ids`.
    pub async fn find_all_by_grocery_in(
        &self,
        grocery_ids: Vec<i32>,
    ) -> Result<Vec<RecipeGroceryModel>, DbErr> {
        entity::prelude::RecipeGrocery::find()
            .filter(entity::recipe_grocery::Column::GroceryId.is_in(grocery_ids))
            .order_by_asc(entity::recipe_grocery::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_recipe_ids(
        &self,
        recipe_ids: Vec<i32>,
    ) -> Result<Vec<RecipeGroceryModel>, DbErr> {
        entity::prelude::RecipeGrocery::find()
            .filter(entity::recipe_grocery::Column::RecipeId.is_in(recipe_ids))
            .order_by_asc(entity::recipe_grocery::Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod find_all_by_grocery_in {
        use smartfridge_test_utils::prelude::*;

        use crate::server::data::recipe::RecipeGroceryRepository;

        /// Expect only ingredient rows for the requested groceries
        #[tokio::test]
        async fn filters_by_grocery() -> Result<(), TestError> {
            let test = TestBuilder::new().with_fridge_tables().build().await?;
            let (_, _, milk) = test.grocery().insert_mock_grocery("Milk").await?;
            let (_, _, flour) = test.grocery().insert_mock_grocery("Flour").await?;
            let (_, _, eggs) = test.grocery().insert_mock_grocery("Eggs").await?;
            let pancakes = test
                .recipe()
                .insert_recipe_with_groceries("Pancakes", &[milk.id, flour.id, eggs.id])
                .await?;
            let omelette = test
                .recipe()
                .insert_recipe_with_groceries("Omelette", &[eggs.id])
                .await?;

            let repo = RecipeGroceryRepository::new(&test.db);
            let result = repo.find_all_by_grocery_in(vec![eggs.id]).await?;

            let recipe_ids: Vec<i32> = result.iter().map(|row| row.recipe_id).collect();
            assert_eq!(recipe_ids, vec![pancakes.id, omelette.id]);

            Ok(())
        }
    }

    mod exists_by_recipe_and_grocery {
        use smartfridge_test_utils::prelude::*;

        use crate::server::data::recipe::RecipeGroceryRepository;

        /// Expect true only for a grocery that is an ingredient of the recipe
        #[tokio::test]
        async fn detects_existing_ingredient() -> Result<(), TestError> {
            let test = TestBuilder::new().with_fridge_tables().build().await?;
            let (_, _, milk) = test.grocery().insert_mock_grocery("Milk").await?;
            let (_, _, bread) = test.grocery().insert_mock_grocery("Bread").await?;
            let recipe = test
                .recipe()
                .insert_recipe_with_groceries("Porridge", &[milk.id])
                .await?;

            let repo = RecipeGroceryRepository::new(&test.db);

            assert!(repo.exists_by_recipe_and_grocery(recipe.id, milk.id).await?);
            assert!(!repo.exists_by_recipe_and_grocery(recipe.id, bread.id).await?);

            Ok(())
        }
    }
}
