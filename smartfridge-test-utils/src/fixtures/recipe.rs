use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{RecipeGroceryModel, RecipeModel},
    TestContext,
};

impl TestContext {
    pub fn recipe<'a>(&'a self) -> RecipeFixtures<'a> {
        RecipeFixtures { setup: self }
    }
}

pub struct RecipeFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> RecipeFixtures<'a> {
    pub async fn insert_recipe(&self, name: &str) -> Result<RecipeModel, TestError> {
        Ok(
            entity::prelude::Recipe::insert(entity::recipe::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                url: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_ingredient(
        &self,
        recipe_id: i32,
        grocery_id: i32,
    ) -> Result<RecipeGroceryModel, TestError> {
        Ok(
            entity::prelude::RecipeGrocery::insert(entity::recipe_grocery::ActiveModel {
                recipe_id: ActiveValue::Set(recipe_id),
                grocery_id: ActiveValue::Set(grocery_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a recipe using each of the given catalog groceries once.
    pub async fn insert_recipe_with_groceries(
        &self,
        name: &str,
        grocery_ids: &[i32],
    ) -> Result<RecipeModel, TestError> {
        let recipe = self.insert_recipe(name).await?;
        for grocery_id in grocery_ids {
            self.insert_ingredient(recipe.id, *grocery_id).await?;
        }

        Ok(recipe)
    }
}
