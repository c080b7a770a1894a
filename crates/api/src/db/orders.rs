//! Order repository for database operations.
//!
//! List queries resolve the linked customer name with an owner-scoped
//! `LEFT JOIN`: the join only matches customers created by the same agent,
//! so a stale or foreign reference resolves to an empty name instead of
//! leaking another agent's data.

use sqlx::SqlitePool;

use clientele_core::{OrderId, OwnerId};

use super::RepositoryError;
use crate::models::{Order, OrderDraft};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all of `owner`'s orders with resolved customer names, newest
    /// date first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, owner: &OwnerId) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(
            r"
            SELECT o.id, o.date, o.customer_id,
                   CASE WHEN o.customer_id IS NULL THEN NULL
                        ELSE COALESCE(c.name, '')
                   END AS customer_name,
                   o.product, o.quantity, o.amount, o.paid, o.notes,
                   o.created_by
            FROM orders o
            LEFT JOIN customers c
                   ON c.id = o.customer_id AND c.created_by = o.created_by
            WHERE o.created_by = ?
            ORDER BY o.date DESC
            ",
        )
        .bind(owner)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// Insert a freshly built order record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, order: &Order) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO orders (id, date, customer_id, product, quantity,
                                amount, paid, notes, created_by)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&order.id)
        .bind(order.date)
        .bind(&order.customer_id)
        .bind(&order.product)
        .bind(order.quantity)
        .bind(order.amount.to_string())
        .bind(order.paid)
        .bind(&order.notes)
        .bind(&order.created_by)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Replace the mutable fields of one of `owner`'s orders.
    ///
    /// This is a full replace with the same defaulting as create. The
    /// returned record carries no resolved customer name; clients refresh
    /// the list to see it.
    ///
    /// Returns `None` when no row matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        owner: &OwnerId,
        id: &OrderId,
        draft: OrderDraft,
    ) -> Result<Option<Order>, RepositoryError> {
        let values = Order::from_draft(id.clone(), owner.clone(), draft);

        let order = sqlx::query_as::<_, Order>(
            r"
            UPDATE orders
            SET date = ?, customer_id = ?, product = ?, quantity = ?,
                amount = ?, paid = ?, notes = ?
            WHERE id = ? AND created_by = ?
            RETURNING id, date, customer_id, product, quantity, amount, paid,
                      notes, created_by
            ",
        )
        .bind(values.date)
        .bind(&values.customer_id)
        .bind(&values.product)
        .bind(values.quantity)
        .bind(values.amount.to_string())
        .bind(values.paid)
        .bind(&values.notes)
        .bind(id)
        .bind(owner)
        .fetch_optional(self.pool)
        .await?;

        Ok(order)
    }

    /// Delete one of `owner`'s orders.
    ///
    /// # Returns
    ///
    /// Returns `true` if a row was deleted, `false` if no row matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, owner: &OwnerId, id: &OrderId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ? AND created_by = ?")
            .bind(id)
            .bind(owner)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::CustomerRepository;
    use crate::db::test_support::memory_pool;
    use crate::models::{Customer, CustomerDraft};

    use clientele_core::CustomerId;

    fn order_draft(json: &str) -> OrderDraft {
        serde_json::from_str(json).unwrap()
    }

    async fn insert_customer(pool: &SqlitePool, owner: &str, name: &str) -> Customer {
        let draft: CustomerDraft =
            serde_json::from_str(&format!(r#"{{"name": "{name}"}}"#)).unwrap();
        let customer = Customer::from_draft(CustomerId::generate(), OwnerId::new(owner), draft);
        CustomerRepository::new(pool).create(&customer).await.unwrap();
        customer
    }

    async fn insert_order(pool: &SqlitePool, owner: &str, json: &str) -> Order {
        let order = Order::from_draft(OrderId::generate(), OwnerId::new(owner), order_draft(json));
        OrderRepository::new(pool).create(&order).await.unwrap();
        order
    }

    #[tokio::test]
    async fn list_resolves_customer_names_through_the_owner_scoped_join() {
        let pool = memory_pool().await;
        let customer = insert_customer(&pool, "u1", "Mrs. Chen").await;

        let linked = insert_order(
            &pool,
            "u1",
            &format!(r#"{{"product": "Fish oil", "customerId": "{}"}}"#, customer.id),
        )
        .await;
        let dangling =
            insert_order(&pool, "u1", r#"{"product": "Vitamin", "customerId": "gone"}"#).await;
        let unlinked = insert_order(&pool, "u1", r#"{"product": "Calcium"}"#).await;

        let by_id = |orders: &[Order], id: &OrderId| {
            orders.iter().find(|o| &o.id == id).unwrap().customer_name.clone()
        };

        let listed = OrderRepository::new(&pool).list(&OwnerId::new("u1")).await.unwrap();
        assert_eq!(listed.len(), 3);
        assert_eq!(by_id(&listed, &linked.id), Some("Mrs. Chen".to_owned()));
        assert_eq!(by_id(&listed, &dangling.id), Some(String::new()));
        assert_eq!(by_id(&listed, &unlinked.id), None);
    }

    #[tokio::test]
    async fn join_never_resolves_another_owners_customer() {
        let pool = memory_pool().await;
        let foreign_customer = insert_customer(&pool, "u2", "Mr. Wu").await;

        // u1's order pointing at u2's customer: the name must not leak.
        let order = insert_order(
            &pool,
            "u1",
            &format!(r#"{{"product": "Tea", "customerId": "{}"}}"#, foreign_customer.id),
        )
        .await;

        let listed = OrderRepository::new(&pool).list(&OwnerId::new("u1")).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, order.id);
        assert_eq!(listed[0].customer_name, Some(String::new()));
    }

    #[tokio::test]
    async fn list_is_scoped_to_the_owner_and_sorted_by_date_descending() {
        let pool = memory_pool().await;
        let old = insert_order(&pool, "u1", r#"{"product": "A", "date": "2024-01-10"}"#).await;
        let new = insert_order(&pool, "u1", r#"{"product": "B", "date": "2024-03-02"}"#).await;
        insert_order(&pool, "u2", r#"{"product": "C", "date": "2024-02-01"}"#).await;

        let listed = OrderRepository::new(&pool).list(&OwnerId::new("u1")).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, new.id);
        assert_eq!(listed[1].id, old.id);
    }

    #[tokio::test]
    async fn amount_survives_the_text_column_round_trip() {
        let pool = memory_pool().await;
        insert_order(&pool, "u1", r#"{"product": "Fish oil", "amount": 1500.5}"#).await;

        let listed = OrderRepository::new(&pool).list(&OwnerId::new("u1")).await.unwrap();
        assert_eq!(listed[0].amount.to_string(), "1500.5");
    }

    #[tokio::test]
    async fn update_is_a_full_replace_scoped_to_the_owner() {
        let pool = memory_pool().await;
        let repo = OrderRepository::new(&pool);
        let order = insert_order(
            &pool,
            "u1",
            r#"{"product": "Fish oil", "quantity": 3, "paid": true, "notes": "deliver early"}"#,
        )
        .await;

        let updated = repo
            .update(
                &OwnerId::new("u1"),
                &order.id,
                order_draft(r#"{"product": "Fish oil", "amount": 99.9}"#),
            )
            .await
            .unwrap()
            .unwrap();
        // Omitted draft fields fall back to their defaults.
        assert_eq!(updated.quantity, 1);
        assert!(!updated.paid);
        assert_eq!(updated.notes, "");
        assert_eq!(updated.amount.to_string(), "99.9");

        let foreign = repo
            .update(
                &OwnerId::new("u2"),
                &order.id,
                order_draft(r#"{"product": "Hijacked"}"#),
            )
            .await
            .unwrap();
        assert!(foreign.is_none());
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_matched() {
        let pool = memory_pool().await;
        let repo = OrderRepository::new(&pool);
        let order = insert_order(&pool, "u1", r#"{"product": "Fish oil"}"#).await;

        assert!(!repo.delete(&OwnerId::new("u2"), &order.id).await.unwrap());
        assert!(repo.delete(&OwnerId::new("u1"), &order.id).await.unwrap());
        assert!(!repo.delete(&OwnerId::new("u1"), &order.id).await.unwrap());
    }
}
