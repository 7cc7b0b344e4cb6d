//! Read access to the grocery catalog and conversion of catalog rows into DTOs.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::grocery::{CategoryDto, GroceryDto, RefrigeratorGroceryDto, SubCategoryDto, UnitDto},
    server::{
        data::{
            category::{CategoryRepository, SubCategoryRepository},
            grocery::GroceryRepository,
            unit::UnitRepository,
        },
        error::{grocery::GroceryError, Error},
        model::db::{
            CategoryModel, GroceryModel, RefrigeratorGroceryModel, SubCategoryModel, UnitModel,
        },
    },
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all_groceries(&self) -> Result<Vec<GroceryDto>, Error> {
        let groceries = GroceryRepository::new(self.db).find_all().await?;

        grocery_dtos(self.db, groceries).await
    }

    pub async fn get_categories(&self) -> Result<Vec<CategoryDto>, Error> {
        let categories = CategoryRepository::new(self.db).find_all().await?;

        Ok(categories.into_iter().map(category_dto).collect())
    }

    /// Sub-categories of a category, `GroceryError::CategoryNotFound` for an unknown category.
    pub async fn get_sub_categories(&self, category_id: i32) -> Result<Vec<SubCategoryDto>, Error> {
        let Some(category) = CategoryRepository::new(self.db)
            .find_by_id(category_id)
            .await?
        else {
            return Err(GroceryError::CategoryNotFound(category_id).into());
        };

        let sub_categories = SubCategoryRepository::new(self.db)
            .find_by_category_id(category_id)
            .await?;

        Ok(sub_categories
            .into_iter()
            .map(|sub_category| sub_category_dto(sub_category, category_dto(category.clone())))
            .collect())
    }

    pub async fn get_units(&self) -> Result<Vec<UnitDto>, Error> {
        let units = UnitRepository::new(self.db).find_all().await?;

        Ok(units.into_iter().map(unit_dto).collect())
    }
}

/// Builds grocery DTOs, loading the sub-categories and categories they belong to.
pub(crate) async fn grocery_dtos<C: ConnectionTrait>(
    db: &C,
    groceries: Vec<GroceryModel>,
) -> Result<Vec<GroceryDto>, Error> {
    let sub_category_ids: Vec<i32> = groceries.iter().map(|g| g.sub_category_id).collect();
    let sub_categories: HashMap<i32, SubCategoryModel> = SubCategoryRepository::new(db)
        .find_by_ids(sub_category_ids)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();

    let category_ids: Vec<i32> = sub_categories.values().map(|s| s.category_id).collect();
    let categories: HashMap<i32, CategoryModel> = CategoryRepository::new(db)
        .find_by_ids(category_ids)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();

    groceries
        .into_iter()
        .map(|grocery| {
            let sub_category = sub_categories
                .get(&grocery.sub_category_id)
                .cloned()
                .ok_or_else(|| missing("sub-category", grocery.sub_category_id))?;
            let category = categories
                .get(&sub_category.category_id)
                .cloned()
                .ok_or_else(|| missing("category", sub_category.category_id))?;

            Ok(GroceryDto {
                id: grocery.id,
                name: grocery.name,
                description: grocery.description,
                grocery_expiry_days: grocery.grocery_expiry_days,
                sub_category: sub_category_dto(sub_category, category_dto(category)),
            })
        })
        .collect()
}

/// Builds refrigerator grocery DTOs with their catalog grocery and unit.
pub(crate) async fn refrigerator_grocery_dtos<C: ConnectionTrait>(
    db: &C,
    refrigerator_groceries: Vec<RefrigeratorGroceryModel>,
) -> Result<Vec<RefrigeratorGroceryDto>, Error> {
    let grocery_ids: Vec<i32> = refrigerator_groceries.iter().map(|r| r.grocery_id).collect();
    let groceries = GroceryRepository::new(db).find_by_ids(grocery_ids).await?;
    let groceries: HashMap<i32, GroceryDto> = grocery_dtos(db, groceries)
        .await?
        .into_iter()
        .map(|g| (g.id, g))
        .collect();

    let unit_ids: Vec<i32> = refrigerator_groceries.iter().map(|r| r.unit_id).collect();
    let units: HashMap<i32, UnitModel> = UnitRepository::new(db)
        .find_by_ids(unit_ids)
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();

    refrigerator_groceries
        .into_iter()
        .map(|refrigerator_grocery| {
            let grocery = groceries
                .get(&refrigerator_grocery.grocery_id)
                .cloned()
                .ok_or_else(|| missing("grocery", refrigerator_grocery.grocery_id))?;
            let unit = units
                .get(&refrigerator_grocery.unit_id)
                .cloned()
                .ok_or_else(|| missing("unit", refrigerator_grocery.unit_id))?;

            Ok(RefrigeratorGroceryDto {
                id: refrigerator_grocery.id,
                refrigerator_id: refrigerator_grocery.refrigerator_id,
                grocery,
                unit: unit_dto(unit),
                quantity: refrigerator_grocery.quantity,
                physical_expire_date: refrigerator_grocery.physical_expire_date,
            })
        })
        .collect()
}

pub(crate) fn category_dto(category: CategoryModel) -> CategoryDto {
    CategoryDto {
        id: category.id,
        name: category.name,
    }
}

fn sub_category_dto(sub_category: SubCategoryModel, category: CategoryDto) -> SubCategoryDto {
    SubCategoryDto {
        id: sub_category.id,
        name: sub_category.name,
        category,
    }
}

fn unit_dto(unit: UnitModel) -> UnitDto {
    UnitDto {
        id: unit.id,
        name: unit.name,
        weight: unit.weight,
    }
}

// Only reachable if a foreign key is not enforced by the database
fn missing(kind: &str, id: i32) -> Error {
    Error::InternalError(format!("Referenced {} ID {} does not exist", kind, id))
}
