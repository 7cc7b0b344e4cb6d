//! Declarative test builder.
//!
//! Configuration methods queue work which is executed by the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_fridge_tables: bool,
    users: Vec<String>,
}

impl TestBuilder {
    /// Create a builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_fridge_tables: false,
            users: Vec::new(),
        }
    }

    /// Create every table of the smartfridge schema.
    ///
    /// Tables are created parents first so foreign keys resolve.
    pub fn with_fridge_tables(mut self) -> Self {
        self.include_fridge_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables; they are created after the
    /// standard tables if those were requested.
    ///
    /// ```no_run
    /// use smartfridge_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), smartfridge_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(AppUser)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the given email during `build()`.
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Build the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database created with requested tables and fixtures
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_fridge_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::AppUser),
                schema.create_table_from_entity(entity::prelude::Refrigerator),
                schema.create_table_from_entity(entity::prelude::RefrigeratorUser),
                schema.create_table_from_entity(entity::prelude::Category),
                schema.create_table_from_entity(entity::prelude::SubCategory),
                schema.create_table_from_entity(entity::prelude::Unit),
                schema.create_table_from_entity(entity::prelude::Grocery),
                schema.create_table_from_entity(entity::prelude::RefrigeratorGrocery),
                schema.create_table_from_entity(entity::prelude::GroceryHistory),
                schema.create_table_from_entity(entity::prelude::ShoppingList),
                schema.create_table_from_entity(entity::prelude::GroceryShoppingList),
                schema.create_table_from_entity(entity::prelude::Recipe),
                schema.create_table_from_entity(entity::prelude::RecipeGrocery),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for email in self.users {
            setup.user().insert_user(&email).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
