use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD_HASH, error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user that cannot log in; the stored hash is a placeholder.
    pub async fn insert_user(&self, email: &str) -> Result<UserModel, TestError> {
        self.insert(email, TEST_PASSWORD_HASH.to_string()).await
    }

    /// Insert a user whose password is hashed with argon2 so login succeeds.
    pub async fn insert_user_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserModel, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHash(e.to_string()))?
            .to_string();

        self.insert(email, hash).await
    }

    async fn insert(&self, email: &str, password: String) -> Result<UserModel, TestError> {
        let name = email.split('@').next().unwrap_or(email).to_string();

        Ok(
            entity::prelude::AppUser::insert(entity::app_user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                name: ActiveValue::Set(name),
                password: ActiveValue::Set(password),
                role: ActiveValue::Set(UserRole::User),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
