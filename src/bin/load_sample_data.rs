//! Cargador de datos de ejemplo
//!
//! Inserta pasajeros, conductores, vehículos y viajes de prueba en la base
//! de datos. Si los datos ya existen no hace nada.
//!
//! Uso: `cargo run --bin load_sample_data`

use anyhow::Result;
use chrono::Utc;
use dotenvy::dotenv;
use log::{info, warn};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use ride_hailing::database::DatabaseConnection;
use ride_hailing::models::{TripStatus, UserRole};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    info!("🚕 Cargando datos de ejemplo...");

    let connection = DatabaseConnection::new_default().await?;
    connection.run_migrations().await?;
    let pool = connection.pool();

    let (exists,): (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind("john@rider.com")
            .fetch_one(pool)
            .await?;

    if exists {
        warn!("Los datos de ejemplo ya existen, no se carga nada");
        return Ok(());
    }

    load_sample_data(pool).await?;

    info!("✅ Datos de ejemplo cargados exitosamente");
    info!("Cuentas creadas:");
    info!("  Pasajeros:");
    info!("    - john@rider.com (password: password123)");
    info!("    - jane@rider.com (password: password123)");
    info!("  Conductores:");
    info!("    - mike@driver.com (password: password123)");
    info!("    - sarah@driver.com (password: password123)");

    Ok(())
}

async fn load_sample_data(pool: &PgPool) -> Result<()> {
    // Un solo hash para todas las cuentas de prueba
    let password_hash = bcrypt::hash("password123", bcrypt::DEFAULT_COST)?;

    let mut tx = pool.begin().await?;

    let rider1 = insert_user(&mut tx, "john_rider", "john@rider.com", "+1234567890", UserRole::Rider, &password_hash).await?;
    let rider2 = insert_user(&mut tx, "jane_rider", "jane@rider.com", "+1234567891", UserRole::Rider, &password_hash).await?;

    let driver1_user = insert_user(&mut tx, "mike_driver", "mike@driver.com", "+1234567892", UserRole::Driver, &password_hash).await?;
    let driver1 = insert_driver_profile(
        &mut tx,
        driver1_user,
        "DL001234",
        "ABC-123",
        "Toyota Camry 2020",
        Some("Friendly and professional driver with 5 years of experience."),
        Decimal::new(485, 2),
    )
    .await?;

    let driver2_user = insert_user(&mut tx, "sarah_driver", "sarah@driver.com", "+1234567893", UserRole::Driver, &password_hash).await?;
    let driver2 = insert_driver_profile(
        &mut tx,
        driver2_user,
        "DL005678",
        "XYZ-789",
        "Honda Accord 2021",
        Some("Safe driver with excellent customer service."),
        Decimal::new(492, 2),
    )
    .await?;

    insert_vehicle(&mut tx, driver1, "ABC-123", "Toyota Camry 2020", 4, Some(2020), Some("Silver")).await?;
    insert_vehicle(&mut tx, driver2, "XYZ-789", "Honda Accord 2021", 4, Some(2021), Some("Black")).await?;

    insert_trip(
        &mut tx,
        rider1,
        Some(driver1),
        "123 Main Street, Downtown",
        "456 Oak Avenue, Uptown",
        Some("Please take the highway"),
        Some(Decimal::new(2550, 2)),
        TripStatus::Completed,
    )
    .await?;
    insert_trip(
        &mut tx,
        rider1,
        Some(driver2),
        "789 Pine Road, Suburb",
        "321 Elm Street, City Center",
        None,
        Some(Decimal::new(1875, 2)),
        TripStatus::Completed,
    )
    .await?;
    insert_trip(
        &mut tx,
        rider2,
        Some(driver1),
        "555 Maple Drive, North Side",
        "888 Cedar Lane, South Side",
        Some("Arriving in 10 minutes"),
        None,
        TripStatus::Accepted,
    )
    .await?;
    insert_trip(
        &mut tx,
        rider1,
        None,
        "100 Park Avenue, East End",
        "200 Lake Road, West End",
        Some("Need a ride ASAP"),
        None,
        TripStatus::Requested,
    )
    .await?;
    insert_trip(
        &mut tx,
        rider2,
        None,
        "777 Beach Boulevard",
        "999 Mountain View",
        None,
        None,
        TripStatus::Requested,
    )
    .await?;

    tx.commit().await?;
    Ok(())
}

async fn insert_user(
    tx: &mut Transaction<'_, Postgres>,
    username: &str,
    email: &str,
    phone: &str,
    role: UserRole,
    password_hash: &str,
) -> Result<Uuid> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO users (id, username, email, phone, role, password_hash, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(email)
    .bind(phone)
    .bind(role)
    .bind(password_hash)
    .bind(Utc::now())
    .execute(&mut **tx)
    .await?;
    Ok(id)
}

async fn insert_driver_profile(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    license_number: &str,
    car_number: &str,
    car_model: &str,
    description: Option<&str>,
    rating: Decimal,
) -> Result<Uuid> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO driver_profiles (
            id, user_id, license_number, car_number, car_model,
            description, rating, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(license_number)
    .bind(car_number)
    .bind(car_model)
    .bind(description)
    .bind(rating)
    .bind(Utc::now())
    .execute(&mut **tx)
    .await?;
    Ok(id)
}

async fn insert_vehicle(
    tx: &mut Transaction<'_, Postgres>,
    driver_id: Uuid,
    car_number: &str,
    car_model: &str,
    seats: i32,
    year: Option<i32>,
    color: Option<&str>,
) -> Result<Uuid> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO vehicles (
            id, driver_id, car_number, car_model, seats, year, color,
            is_active, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE, $8, $8)
        "#,
    )
    .bind(id)
    .bind(driver_id)
    .bind(car_number)
    .bind(car_model)
    .bind(seats)
    .bind(year)
    .bind(color)
    .bind(Utc::now())
    .execute(&mut **tx)
    .await?;
    Ok(id)
}

async fn insert_trip(
    tx: &mut Transaction<'_, Postgres>,
    rider_id: Uuid,
    driver_id: Option<Uuid>,
    origin: &str,
    destination: &str,
    comment: Option<&str>,
    price: Option<Decimal>,
    status: TripStatus,
) -> Result<Uuid> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO trips (
            id, rider_id, driver_id, origin, destination, comment,
            price, status, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
        "#,
    )
    .bind(id)
    .bind(rider_id)
    .bind(driver_id)
    .bind(origin)
    .bind(destination)
    .bind(comment)
    .bind(price)
    .bind(status)
    .bind(Utc::now())
    .execute(&mut **tx)
    .await?;
    Ok(id)
}
