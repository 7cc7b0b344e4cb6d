use serde::{Deserialize, Serialize};

/// Eaten and wasted food for one calendar month, in grams
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStatDto {
    /// Month label such as `October, 2026`
    pub month: String,
    pub food_waste: i64,
    pub food_eaten: i64,
}
