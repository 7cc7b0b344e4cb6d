use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::UserModel;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with the `USER` application role
    ///
    /// # Arguments
    /// - `email`: Unique email, also used as the token subject
    /// - `name`: Display name
    /// - `password_hash`: PHC string produced by argon2
    pub async fn create(
        &self,
        email: &str,
        name: &str,
        password_hash: String,
    ) -> Result<UserModel, DbErr> {
        let user = entity::app_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set(name.to_string()),
            password: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(UserRole::User),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use smartfridge_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect success when creating a new user
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_fridge_tables().build().await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo
                .create("ola@example.com", "Ola", "hash".to_string())
                .await;

            assert!(result.is_ok());
            let user = result.unwrap();
            assert_eq!(user.email, "ola@example.com");
            assert_eq!(user.role, entity::sea_orm_active_enums::UserRole::User);

            Ok(())
        }

        /// Expect Error when the email is already registered
        #[tokio::test]
        async fn fails_for_duplicate_email() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_fridge_tables()
                .with_user("ola@example.com")
                .build()
                .await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo
                .create("ola@example.com", "Ola", "hash".to_string())
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod find_by_email {
        use smartfridge_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect Some when the email is registered
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_fridge_tables()
                .with_user("kari@example.com")
                .build()
                .await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.find_by_email("kari@example.com").await;

            assert!(matches!(result, Ok(Some(_))));

            Ok(())
        }

        /// Expect None when no user has the email
        #[tokio::test]
        async fn returns_none_for_unknown_email() -> Result<(), TestError> {
            let test = TestBuilder::new().with_fridge_tables().build().await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.find_by_email("nobody@example.com").await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }
}
