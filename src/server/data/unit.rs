use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::UnitModel;

pub struct UnitRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UnitRepository<'a, C> {
    /// Creates a new instance of [`UnitRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<UnitModel>, DbErr> {
        entity::prelude::Unit::find()
            .order_by_asc(entity::unit::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, unit_id: i32) -> Result<Option<UnitModel>, DbErr> {
        entity::prelude::Unit::find_by_id(unit_id).one(self.db).await
    }

    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<UnitModel>, DbErr> {
        entity::prelude::Unit::find()
            .filter(entity::unit::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}
