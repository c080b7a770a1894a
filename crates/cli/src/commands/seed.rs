//! Seed the database with demo data.
//!
//! Inserts a few linked customers, orders, and schedule entries so a fresh
//! install has something to show. Every run inserts new rows under fresh IDs,
//! so repeated runs grow the dataset rather than replacing it.

use chrono::{Days, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use tracing::info;

use clientele_api::config::ApiConfig;
use clientele_api::db::{self, CustomerRepository, OrderRepository, ScheduleRepository};
use clientele_api::models::{Customer, Order, Schedule};
use clientele_core::{CustomerId, OrderId, OwnerId, ScheduleId};

/// Insert demo records owned by `user_id`.
///
/// Applies migrations first so the command works against an empty database.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, the database is not
/// reachable, or an insert fails.
pub async fn demo_data(user_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::from_env()?;

    info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url).await?;
    db::MIGRATOR.run(&pool).await?;

    let owner = OwnerId::new(user_id);
    let today = Utc::now().date_naive();

    let mut ada = demo_customer(&owner, "Ada Fuller", "555-0101", "Springfield");
    ada.health_status = "Mild hypertension".to_owned();
    ada.supplements = "Fish oil, CoQ10".to_owned();

    let mut ben = demo_customer(&owner, "Ben Hooper", "555-0102", "Riverton");
    ben.medications = "Metformin".to_owned();

    let carol = demo_customer(&owner, "Carol Janssen", "555-0103", "Springfield");

    let customers = CustomerRepository::new(&pool);
    for customer in [&ada, &ben, &carol] {
        customers.create(customer).await?;
    }
    info!(owner = %owner, "Inserted 3 demo customers");

    let orders = OrderRepository::new(&pool);
    let demo_orders = [
        demo_order(&owner, today, Some(&ada), "Fish oil capsules", 2, 68, true),
        demo_order(
            &owner,
            today - Days::new(7),
            Some(&ben),
            "Vitamin D3 drops",
            1,
            24,
            true,
        ),
        demo_order(
            &owner,
            today - Days::new(2),
            None,
            "Probiotic sachets",
            3,
            105,
            false,
        ),
    ];
    for order in &demo_orders {
        orders.create(order).await?;
    }
    info!(owner = %owner, "Inserted 3 demo orders");

    let morning = NaiveTime::parse_from_str("09:30", "%H:%M")?;
    let noon = NaiveTime::parse_from_str("12:00", "%H:%M")?;

    let schedules = ScheduleRepository::new(&pool);
    let demo_schedules = [
        demo_schedule(
            &owner,
            "Blood pressure check-in",
            today + Days::new(1),
            Some(morning),
            "visit",
            Some(&ada),
        ),
        demo_schedule(
            &owner,
            "Deliver restock",
            today + Days::new(3),
            Some(noon),
            "delivery",
            Some(&ben),
        ),
        demo_schedule(
            &owner,
            "Plan monthly route",
            today + Days::new(5),
            None,
            "other",
            None,
        ),
    ];
    for schedule in &demo_schedules {
        schedules.create(schedule).await?;
    }
    info!(owner = %owner, "Inserted 3 demo schedules");

    info!("Seeding complete!");
    Ok(())
}

/// A customer with the address and health fields left blank.
fn demo_customer(owner: &OwnerId, name: &str, phone: &str, city: &str) -> Customer {
    Customer {
        id: CustomerId::generate(),
        name: name.to_owned(),
        phone: phone.to_owned(),
        city: city.to_owned(),
        district: String::new(),
        village: String::new(),
        neighborhood: String::new(),
        street_type: String::new(),
        street_name: String::new(),
        lane: String::new(),
        alley: String::new(),
        number: String::new(),
        floor: String::new(),
        full_address: String::new(),
        health_status: String::new(),
        medications: String::new(),
        supplements: String::new(),
        avatar: String::new(),
        created_at: Utc::now(),
        created_by: owner.clone(),
    }
}

fn demo_order(
    owner: &OwnerId,
    date: NaiveDate,
    customer: Option<&Customer>,
    product: &str,
    quantity: i32,
    amount: i64,
    paid: bool,
) -> Order {
    Order {
        id: OrderId::generate(),
        date,
        customer_id: customer.map(|c| c.id.clone()),
        customer_name: None,
        product: product.to_owned(),
        quantity,
        amount: Decimal::from(amount),
        paid,
        notes: String::new(),
        created_by: owner.clone(),
    }
}

fn demo_schedule(
    owner: &OwnerId,
    title: &str,
    date: NaiveDate,
    start_time: Option<NaiveTime>,
    kind: &str,
    customer: Option<&Customer>,
) -> Schedule {
    Schedule {
        id: ScheduleId::generate(),
        title: title.to_owned(),
        date,
        start_time,
        end_time: None,
        kind: kind.to_owned(),
        customer_id: customer.map(|c| c.id.clone()),
        customer_name: None,
        notes: String::new(),
        created_by: owner.clone(),
    }
}
