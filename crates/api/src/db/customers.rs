//! Customer repository for database operations.

use sqlx::SqlitePool;

use clientele_core::{CustomerId, OwnerId};

use super::RepositoryError;
use crate::models::{Customer, CustomerDraft};

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all of `owner`'s customers, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, owner: &OwnerId) -> Result<Vec<Customer>, RepositoryError> {
        let customers = sqlx::query_as::<_, Customer>(
            r"
            SELECT id, name, phone, city, district, village, neighborhood,
                   street_type, street_name, lane, alley, number, floor,
                   full_address, health_status, medications, supplements,
                   avatar, created_at, created_by
            FROM customers
            WHERE created_by = ?
            ORDER BY created_at DESC
            ",
        )
        .bind(owner)
        .fetch_all(self.pool)
        .await?;

        Ok(customers)
    }

    /// Get one of `owner`'s customers by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(
        &self,
        owner: &OwnerId,
        id: &CustomerId,
    ) -> Result<Option<Customer>, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(
            r"
            SELECT id, name, phone, city, district, village, neighborhood,
                   street_type, street_name, lane, alley, number, floor,
                   full_address, health_status, medications, supplements,
                   avatar, created_at, created_by
            FROM customers
            WHERE id = ? AND created_by = ?
            ",
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(self.pool)
        .await?;

        Ok(customer)
    }

    /// Insert a freshly built customer record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, customer: &Customer) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO customers (id, name, phone, city, district, village,
                                   neighborhood, street_type, street_name, lane,
                                   alley, number, floor, full_address,
                                   health_status, medications, supplements,
                                   avatar, created_at, created_by)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(&customer.phone)
        .bind(&customer.city)
        .bind(&customer.district)
        .bind(&customer.village)
        .bind(&customer.neighborhood)
        .bind(&customer.street_type)
        .bind(&customer.street_name)
        .bind(&customer.lane)
        .bind(&customer.alley)
        .bind(&customer.number)
        .bind(&customer.floor)
        .bind(&customer.full_address)
        .bind(&customer.health_status)
        .bind(&customer.medications)
        .bind(&customer.supplements)
        .bind(&customer.avatar)
        .bind(customer.created_at)
        .bind(&customer.created_by)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Replace the mutable fields of one of `owner`'s customers.
    ///
    /// This is a full replace: the draft is normalized exactly as on create,
    /// so omitted fields become empty strings. `id`, `created_at` and
    /// `created_by` are never touched.
    ///
    /// Returns `None` when no row matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        owner: &OwnerId,
        id: &CustomerId,
        draft: CustomerDraft,
    ) -> Result<Option<Customer>, RepositoryError> {
        let values = Customer::from_draft(id.clone(), owner.clone(), draft);

        let customer = sqlx::query_as::<_, Customer>(
            r"
            UPDATE customers
            SET name = ?, phone = ?, city = ?, district = ?, village = ?,
                neighborhood = ?, street_type = ?, street_name = ?, lane = ?,
                alley = ?, number = ?, floor = ?, full_address = ?,
                health_status = ?, medications = ?, supplements = ?, avatar = ?
            WHERE id = ? AND created_by = ?
            RETURNING id, name, phone, city, district, village, neighborhood,
                      street_type, street_name, lane, alley, number, floor,
                      full_address, health_status, medications, supplements,
                      avatar, created_at, created_by
            ",
        )
        .bind(&values.name)
        .bind(&values.phone)
        .bind(&values.city)
        .bind(&values.district)
        .bind(&values.village)
        .bind(&values.neighborhood)
        .bind(&values.street_type)
        .bind(&values.street_name)
        .bind(&values.lane)
        .bind(&values.alley)
        .bind(&values.number)
        .bind(&values.floor)
        .bind(&values.full_address)
        .bind(&values.health_status)
        .bind(&values.medications)
        .bind(&values.supplements)
        .bind(&values.avatar)
        .bind(id)
        .bind(owner)
        .fetch_optional(self.pool)
        .await?;

        Ok(customer)
    }

    /// Delete one of `owner`'s customers.
    ///
    /// # Returns
    ///
    /// Returns `true` if a row was deleted, `false` if no row matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(
        &self,
        owner: &OwnerId,
        id: &CustomerId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ? AND created_by = ?")
            .bind(id)
            .bind(owner)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
