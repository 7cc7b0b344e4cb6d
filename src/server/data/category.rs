use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::{CategoryModel, SubCategoryModel};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    /// Creates a new instance of [`CategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<CategoryModel>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, category_id: i32) -> Result<Option<CategoryModel>, DbErr> {
        entity::prelude::Category::find_by_id(category_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<CategoryModel>, DbErr> {
        entity::prelude::Category::find()
            .filter(entity::category::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}

pub struct SubCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubCategoryRepository<'a, C> {
    /// Creates a new instance of [`SubCategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, sub_category_id: i32) -> Result<Option<SubCategoryModel>, DbErr> {
        entity::prelude::SubCategory::find_by_id(sub_category_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<SubCategoryModel>, DbErr> {
        entity::prelude::SubCategory::find()
            .filter(entity::sub_category::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    pub async fn find_by_category_id(&self, category_id: i32) -> Result<Vec<SubCategoryModel>, DbErr> {
        entity::prelude::SubCategory::find()
            .filter(entity::sub_category::Column::CategoryId.eq(category_id))
            .order_by_asc(entity::sub_category::Column::Id)
            .all(self.db)
            .await
    }
}
