//! Consumption history and the monthly statistics built from it.
//!
//! Every eaten or trashed refrigerator grocery is archived as one history row holding its
//! weight in grams. The statistics report eaten and wasted weight per calendar month for the
//! last twelve months, most recent first. Rows older than
//! [`HISTORY_RETENTION_DAYS`](crate::server::util::time::HISTORY_RETENTION_DAYS) are purged
//! each time statistics are computed.

use chrono::{NaiveDate, Utc};
use sea_orm::ConnectionTrait;

use crate::{
    model::statistic::MonthlyStatDto,
    server::{
        data::{history::GroceryHistoryRepository, unit::UnitRepository},
        error::{grocery::GroceryError, Error},
        model::db::{GroceryHistoryModel, RefrigeratorGroceryModel},
        util::time::{month_bounds, month_label, purge_threshold},
    },
};

/// Number of months reported by the statistics.
pub const STATISTIC_MONTHS: u32 = 12;

pub struct GroceryHistoryService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroceryHistoryService<'a, C> {
    /// Creates a new instance of [`GroceryHistoryService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Monthly statistics for the refrigerator relative to today's UTC date.
    pub async fn statistics_for_year(&self, refrigerator_id: i32) -> Result<Vec<MonthlyStatDto>, Error> {
        self.statistics_for_year_at(refrigerator_id, Utc::now().date_naive())
            .await
    }

    /// Monthly statistics for the refrigerator relative to `today`.
    ///
    /// Always returns [`STATISTIC_MONTHS`] entries starting with the month of `today`. Months
    /// without history report zero for both sums.
    pub async fn statistics_for_year_at(
        &self,
        refrigerator_id: i32,
        today: NaiveDate,
    ) -> Result<Vec<MonthlyStatDto>, Error> {
        let history_repo = GroceryHistoryRepository::new(self.db);

        let purged = history_repo.delete_older_than(purge_threshold(today)?).await?;
        if purged.rows_affected > 0 {
            tracing::debug!(rows = %purged.rows_affected, "Purged expired grocery history");
        }

        let mut statistics = Vec::with_capacity(STATISTIC_MONTHS as usize);
        for months_back in 0..STATISTIC_MONTHS {
            let (first, last) = month_bounds(today, months_back)?;
            let history = history_repo
                .find_in_range(refrigerator_id, first, last)
                .await?;

            let (food_waste, food_eaten) = sum_weights(&history);

            statistics.push(MonthlyStatDto {
                month: month_label(first),
                food_waste,
                food_eaten,
            });
        }

        Ok(statistics)
    }

    /// Archives a refrigerator grocery as eaten or trashed today.
    pub async fn record_consumption(
        &self,
        refrigerator_grocery: &RefrigeratorGroceryModel,
        was_trashed: bool,
    ) -> Result<GroceryHistoryModel, Error> {
        self.record_consumption_at(refrigerator_grocery, was_trashed, Utc::now().date_naive())
            .await
    }

    /// Archives a refrigerator grocery with a weight of quantity times the unit weight.
    pub async fn record_consumption_at(
        &self,
        refrigerator_grocery: &RefrigeratorGroceryModel,
        was_trashed: bool,
        date_consumed: NaiveDate,
    ) -> Result<GroceryHistoryModel, Error> {
        let Some(unit) = UnitRepository::new(self.db)
            .find_by_id(refrigerator_grocery.unit_id)
            .await?
        else {
            return Err(GroceryError::UnitNotFound(refrigerator_grocery.unit_id).into());
        };

        let weight_in_grams = refrigerator_grocery
            .quantity
            .checked_mul(unit.weight)
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Weight of refrigerator grocery ID {} overflows",
                    refrigerator_grocery.id
                ))
            })?;

        let history = GroceryHistoryRepository::new(self.db)
            .create(
                refrigerator_grocery.refrigerator_id,
                date_consumed,
                weight_in_grams,
                was_trashed,
            )
            .await?;

        Ok(history)
    }
}

/// Sums history weights into `(trashed, eaten)`.
fn sum_weights(history: &[GroceryHistoryModel]) -> (i64, i64) {
    history.iter().fold((0, 0), |(waste, eaten), row| {
        let grams = i64::from(row.weight_in_grams);
        if row.was_trashed {
            (waste + grams, eaten)
        } else {
            (waste, eaten + grams)
        }
    })
}
