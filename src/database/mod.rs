//! Módulo de base de datos
//!
//! Maneja la conexión a PostgreSQL y el esquema embebido.

pub mod connection;
pub mod schema;

pub use connection::{mask_database_url, DatabaseConnection};
