pub use sea_orm_migration::prelude::*;

mod m20261018_000001_app_user;
mod m20261018_000002_refrigerator;
mod m20261018_000003_refrigerator_user;
mod m20261018_000004_category;
mod m20261018_000005_unit;
mod m20261018_000006_grocery;
mod m20261018_000007_refrigerator_grocery;
mod m20261018_000008_grocery_history;
mod m20261018_000009_shopping_list;
mod m20261018_000010_recipe;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_app_user::Migration),
            Box::new(m20261018_000002_refrigerator::Migration),
            Box::new(m20261018_000003_refrigerator_user::Migration),
            Box::new(m20261018_000004_category::Migration),
            Box::new(m20261018_000005_unit::Migration),
            Box::new(m20261018_000006_grocery::Migration),
            Box::new(m20261018_000007_refrigerator_grocery::Migration),
            Box::new(m20261018_000008_grocery_history::Migration),
            Box::new(m20261018_000009_shopping_list::Migration),
            Box::new(m20261018_000010_recipe::Migration),
        ]
    }
}
