use sea_orm::DatabaseConnection;

use crate::server::config::DEFAULT_JWT_EXPIRY_HOURS;

/// Settings used to sign and validate bearer tokens
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_hours: i64,
}

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt: JwtConfig,
}

/// Builds state from a connection and a signing secret using the default token lifetime.
impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, secret): (DatabaseConnection, String)) -> Self {
        Self {
            db,
            jwt: JwtConfig {
                secret,
                expiry_hours: DEFAULT_JWT_EXPIRY_HOURS,
            },
        }
    }
}
