use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error, model::app::JwtConfig};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the token signing settings from configuration
pub fn build_jwt_config(config: &Config) -> JwtConfig {
    JwtConfig {
        secret: config.jwt_secret.clone(),
        expiry_hours: config.jwt_expiry_hours,
    }
}
