use sea_orm::entity::prelude::*;

/// Application-wide role assigned to an account at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum UserRole {
    #[sea_orm(string_value = "USER")]
    User,
    #[sea_orm(string_value = "ADMIN")]
    Admin,
}

/// Role a member holds within a single refrigerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum RefrigeratorRole {
    #[sea_orm(string_value = "USER")]
    User,
    #[sea_orm(string_value = "SUPERUSER")]
    Superuser,
}
