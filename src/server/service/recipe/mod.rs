//! Recipes built from catalog groceries and suggestions based on refrigerator contents.

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        grocery::GroceryDto,
        recipe::{RecipeDto, RecipeRequest, RecipeSuggestionDto},
    },
    server::{
        data::{
            grocery::GroceryRepository,
            recipe::{RecipeGroceryRepository, RecipeRepository},
            refrigerator::RefrigeratorRepository,
            refrigerator_grocery::RefrigeratorGroceryRepository,
        },
        error::{
            grocery::GroceryError, refrigerator::RefrigeratorError, validation::ValidationError,
            Error,
        },
        model::db::RecipeModel,
        service::{grocery::catalog::grocery_dtos, refrigerator::access::AccessGuard},
    },
};

pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeService<'a> {
    /// Creates a new instance of [`RecipeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a recipe and its ingredients.
    ///
    /// # Returns
    /// - `Ok(RecipeDto)` - The stored recipe
    /// - `Err(Error::ValidationError)` - Blank or duplicate name
    /// - `Err(GroceryError::CatalogGroceryNotFound)` - An ingredient is not in the catalog
    pub async fn add_recipe(&self, request: RecipeRequest) -> Result<RecipeDto, Error> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::field("name", "must not be blank").into());
        }

        let txn = self.db.begin().await?;

        let recipe_repo = RecipeRepository::new(&txn);
        if recipe_repo.find_by_name(&name).await?.is_some() {
            return Err(
                ValidationError::field("name", "a recipe with this name already exists").into(),
            );
        }

        let grocery_repo = GroceryRepository::new(&txn);
        for grocery_id in &request.grocery_ids {
            if grocery_repo.find_by_id(*grocery_id).await?.is_none() {
                return Err(GroceryError::CatalogGroceryNotFound(*grocery_id).into());
            }
        }

        let recipe = recipe_repo.create(&name, request.url).await?;

        let ingredient_repo = RecipeGroceryRepository::new(&txn);
        for grocery_id in request.grocery_ids {
            if !ingredient_repo
                .exists_by_recipe_and_grocery(recipe.id, grocery_id)
                .await?
            {
                ingredient_repo.create(recipe.id, grocery_id).await?;
            }
        }

        let dto = recipe_dtos(&txn, vec![recipe])
            .await?
            .pop()
            .ok_or_else(|| Error::InternalError("Recipe DTO was not built".to_string()))?;

        txn.commit().await?;

        tracing::info!(recipe_id = %dto.id, name = %dto.name, "Created recipe");

        Ok(dto)
    }

    /// Recipes sharing at least one grocery with the refrigerator, readable by any member.
    ///
    /// Sorted by number of available groceries, most first, then by recipe ID.
    pub async fn get_recipes_for_refrigerator(
        &self,
        refrigerator_id: i32,
        email: &str,
    ) -> Result<Vec<RecipeSuggestionDto>, Error> {
        if RefrigeratorRepository::new(self.db)
            .find_by_id(refrigerator_id)
            .await?
            .is_none()
        {
            return Err(RefrigeratorError::NotFound(refrigerator_id).into());
        }

        AccessGuard::new(self.db)
            .role_of(refrigerator_id, email)
            .await?;

        let stored: BTreeSet<i32> = RefrigeratorGroceryRepository::new(self.db)
            .find_by_refrigerator_id(refrigerator_id)
            .await?
            .into_iter()
            .map(|refrigerator_grocery| refrigerator_grocery.grocery_id)
            .collect();
        if stored.is_empty() {
            return Ok(Vec::new());
        }

        let mut available: BTreeMap<i32, BTreeSet<i32>> = BTreeMap::new();
        for ingredient in RecipeGroceryRepository::new(self.db)
            .find_all_by_grocery_in(stored.into_iter().collect())
            .await?
        {
            available
                .entry(ingredient.recipe_id)
                .or_default()
                .insert(ingredient.grocery_id);
        }

        let recipes = RecipeRepository::new(self.db)
            .find_by_ids(available.keys().copied().collect())
            .await?;

        let mut suggestions: Vec<RecipeSuggestionDto> = recipe_dtos(self.db, recipes)
            .await?
            .into_iter()
            .map(|recipe| RecipeSuggestionDto {
                available_grocery_ids: available
                    .remove(&recipe.id)
                    .unwrap_or_default()
                    .into_iter()
                    .collect(),
                recipe,
            })
            .collect();
        suggestions.sort_by(|a, b| {
            b.available_grocery_ids
                .len()
                .cmp(&a.available_grocery_ids.len())
                .then(a.recipe.id.cmp(&b.recipe.id))
        });

        Ok(suggestions)
    }
}

/// Builds recipe DTOs with all of their ingredients.
async fn recipe_dtos<C: ConnectionTrait>(
    db: &C,
    recipes: Vec<RecipeModel>,
) -> Result<Vec<RecipeDto>, Error> {
    let recipe_ids: Vec<i32> = recipes.iter().map(|recipe| recipe.id).collect();
    let ingredients = RecipeGroceryRepository::new(db)
        .find_by_recipe_ids(recipe_ids)
        .await?;

    let grocery_ids: Vec<i32> = ingredients.iter().map(|i| i.grocery_id).collect();
    let groceries = GroceryRepository::new(db).find_by_ids(grocery_ids).await?;
    let groceries: HashMap<i32, GroceryDto> = grocery_dtos(db, groceries)
        .await?
        .into_iter()
        .map(|g| (g.id, g))
        .collect();

    let mut by_recipe: HashMap<i32, Vec<GroceryDto>> = HashMap::new();
    for ingredient in ingredients {
        if let Some(grocery) = groceries.get(&ingredient.grocery_id) {
            by_recipe
                .entry(ingredient.recipe_id)
                .or_default()
                .push(grocery.clone());
        }
    }

    Ok(recipes
        .into_iter()
        .map(|recipe| RecipeDto {
            groceries: by_recipe.remove(&recipe.id).unwrap_or_default(),
            id: recipe.id,
            name: recipe.name,
            url: recipe.url,
        })
        .collect())
}
