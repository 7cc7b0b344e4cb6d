//! Test context structure and utilities.
//!
//! The context returned by [`TestBuilder`](crate::TestBuilder) owns an in-memory SQLite
//! database and the secret used to sign bearer tokens.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_JWT_SECRET, error::TestError};

/// Test environment produced by `TestBuilder::build()`.
///
/// ```ignore
/// let test = TestBuilder::new().with_fridge_tables().build().await?;
///
/// let (refrigerator, user, _) = test
///     .refrigerator()
///     .insert_refrigerator_with_superuser("owner@example.com")
///     .await?;
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// Secret bearer tokens are signed with
    pub jwt_secret: String,
}

impl TestContext {
    /// Convert the database and token secret into any type constructible from them.
    ///
    /// Lets tests build the main crate's `AppState` without the test utilities
    /// depending on the main crate.
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String)>,
    {
        T::from((self.db.clone(), self.jwt_secret.clone()))
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            jwt_secret: TEST_JWT_SECRET.to_string(),
        })
    }

    /// Executes CREATE TABLE statements in the order given.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
