//! Grocery service layer.
//!
//! [`GroceryService`] manages the groceries stored in refrigerators, [`catalog`] serves the
//! shared catalog and [`history`] archives consumption and computes statistics.

pub mod catalog;
pub mod history;

#[cfg(test)]
mod tests;

use chrono::{Days, NaiveDate, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::grocery::{
        EditRefrigeratorGroceryRequest, RefrigeratorGroceryDto, SaveRefrigeratorGroceriesRequest,
    },
    server::{
        data::{
            grocery::GroceryRepository, refrigerator::RefrigeratorRepository,
            refrigerator_grocery::RefrigeratorGroceryRepository, unit::UnitRepository,
        },
        error::{
            grocery::GroceryError, refrigerator::RefrigeratorError, validation::ValidationError,
            Error,
        },
        model::db::{GroceryModel, RefrigeratorGroceryModel},
        service::{
            grocery::{catalog::refrigerator_grocery_dtos, history::GroceryHistoryService},
            refrigerator::access::AccessGuard,
        },
    },
};

pub struct GroceryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroceryService<'a> {
    /// Creates a new instance of [`GroceryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Groceries stored in a refrigerator, readable by any member.
    ///
    /// An unknown refrigerator is `RefrigeratorError::NotFound` before the caller's role is checked.
    pub async fn get_groceries_by_refrigerator(
        &self,
        refrigerator_id: i32,
        email: &str,
    ) -> Result<Vec<RefrigeratorGroceryDto>, Error> {
        if RefrigeratorRepository::new(self.db)
            .find_by_id(refrigerator_id)
            .await?
            .is_none()
        {
            return Err(RefrigeratorError::NotFound(refrigerator_id).into());
        }

        AccessGuard::new(self.db)
            .role_of(refrigerator_id, email)
            .await?;

        let groceries = RefrigeratorGroceryRepository::new(self.db)
            .find_by_refrigerator_id(refrigerator_id)
            .await?;

        refrigerator_grocery_dtos(self.db, groceries).await
    }

    /// Stores catalog groceries in a refrigerator, requires `SUPERUSER`.
    ///
    /// A missing expiry date defaults to today plus the catalog grocery's expiry days. All
    /// groceries are stored or none are.
    ///
    /// # Returns
    /// - `Ok(Vec<RefrigeratorGroceryDto>)` - The stored groceries
    /// - `Err(Error::ValidationError)` - A quantity is negative
    /// - `Err(GroceryError::CatalogGroceryNotFound | UnitNotFound)` - Unknown grocery or unit
    pub async fn add_groceries(
        &self,
        request: SaveRefrigeratorGroceriesRequest,
        email: &str,
    ) -> Result<Vec<RefrigeratorGroceryDto>, Error> {
        let mut validation = ValidationError::new();
        for (index, grocery) in request.groceries.iter().enumerate() {
            validation.check_quantity(&format!("groceries[{}].quantity", index), grocery.quantity);
        }
        validation.into_result()?;

        let txn = self.db.begin().await?;

        AccessGuard::new(&txn)
            .require_superuser(request.refrigerator_id, email)
            .await?;

        let grocery_repo = GroceryRepository::new(&txn);
        let unit_repo = UnitRepository::new(&txn);
        let refrigerator_grocery_repo = RefrigeratorGroceryRepository::new(&txn);
        let today = Utc::now().date_naive();

        let mut stored = Vec::with_capacity(request.groceries.len());
        for new_grocery in request.groceries {
            let Some(grocery) = grocery_repo.find_by_id(new_grocery.grocery_id).await? else {
                return Err(GroceryError::CatalogGroceryNotFound(new_grocery.grocery_id).into());
            };
            if unit_repo.find_by_id(new_grocery.unit_id).await?.is_none() {
                return Err(GroceryError::UnitNotFound(new_grocery.unit_id).into());
            }

            let physical_expire_date = match new_grocery.physical_expire_date {
                Some(date) => date,
                None => default_expiry(&grocery, today)?,
            };

            stored.push(
                refrigerator_grocery_repo
                    .create(
                        request.refrigerator_id,
                        grocery.id,
                        new_grocery.unit_id,
                        new_grocery.quantity,
                        physical_expire_date,
                    )
                    .await?,
            );
        }

        let dtos = refrigerator_grocery_dtos(&txn, stored).await?;

        txn.commit().await?;

        Ok(dtos)
    }

    /// Changes quantity, unit and expiry of a refrigerator grocery, requires `SUPERUSER`.
    pub async fn edit_refrigerator_grocery(
        &self,
        request: EditRefrigeratorGroceryRequest,
        email: &str,
    ) -> Result<RefrigeratorGroceryDto, Error> {
        let mut validation = ValidationError::new();
        validation.check_quantity("quantity", request.quantity);
        validation.into_result()?;

        let refrigerator_grocery = self.find(request.id).await?;

        AccessGuard::new(self.db)
            .require_superuser(refrigerator_grocery.refrigerator_id, email)
            .await?;

        if UnitRepository::new(self.db)
            .find_by_id(request.unit_id)
            .await?
            .is_none()
        {
            return Err(GroceryError::UnitNotFound(request.unit_id).into());
        }

        let updated = RefrigeratorGroceryRepository::new(self.db)
            .update(
                refrigerator_grocery,
                request.unit_id,
                request.quantity,
                request.physical_expire_date,
            )
            .await?;

        single_dto(self.db, updated).await
    }

    /// Removes a refrigerator grocery without archiving it, requires `SUPERUSER`.
    pub async fn remove_refrigerator_grocery(&self, id: i32, email: &str) -> Result<(), Error> {
        let refrigerator_grocery = self.find(id).await?;

        AccessGuard::new(self.db)
            .require_superuser(refrigerator_grocery.refrigerator_id, email)
            .await?;

        RefrigeratorGroceryRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Archives a refrigerator grocery as eaten and removes it, any member may do this.
    pub async fn eat_refrigerator_grocery(&self, id: i32, email: &str) -> Result<(), Error> {
        self.consume(id, email, false).await
    }

    /// Archives a refrigerator grocery as trashed and removes it, any member may do this.
    pub async fn trash_refrigerator_grocery(&self, id: i32, email: &str) -> Result<(), Error> {
        self.consume(id, email, true).await
    }

    async fn consume(&self, id: i32, email: &str, was_trashed: bool) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let refrigerator_grocery_repo = RefrigeratorGroceryRepository::new(&txn);
        let Some(refrigerator_grocery) = refrigerator_grocery_repo.find_by_id(id).await? else {
            return Err(GroceryError::NotFound(id).into());
        };

        AccessGuard::new(&txn)
            .role_of(refrigerator_grocery.refrigerator_id, email)
            .await?;

        let history = GroceryHistoryService::new(&txn)
            .record_consumption(&refrigerator_grocery, was_trashed)
            .await?;
        refrigerator_grocery_repo.delete(id).await?;

        txn.commit().await?;

        tracing::debug!(
            refrigerator_id = %refrigerator_grocery.refrigerator_id,
            weight_in_grams = %history.weight_in_grams,
            was_trashed = %was_trashed,
            "Archived refrigerator grocery"
        );

        Ok(())
    }

    async fn find(&self, id: i32) -> Result<RefrigeratorGroceryModel, Error> {
        RefrigeratorGroceryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| GroceryError::NotFound(id).into())
    }
}

/// Today plus the catalog grocery's expiry days.
pub(crate) fn default_expiry(grocery: &GroceryModel, today: NaiveDate) -> Result<NaiveDate, Error> {
    let days = u64::try_from(grocery.grocery_expiry_days).unwrap_or(0);

    today.checked_add_days(Days::new(days)).ok_or_else(|| {
        Error::InternalError(format!(
            "Expiry date {} days after {} is out of range",
            days, today
        ))
    })
}

pub(crate) async fn single_dto(
    db: &DatabaseConnection,
    refrigerator_grocery: RefrigeratorGroceryModel,
) -> Result<RefrigeratorGroceryDto, Error> {
    refrigerator_grocery_dtos(db, vec![refrigerator_grocery])
        .await?
        .pop()
        .ok_or_else(|| Error::InternalError("Refrigerator grocery DTO was not built".to_string()))
}
